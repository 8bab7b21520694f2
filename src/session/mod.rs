//! Browsing-session entities and lifecycle management.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`SessionManager`] | Sole owner of context/tab creation and teardown |
//! | [`Session`] | Isolated browsing context (independent cookies/storage) |
//! | [`Tab`] | Navigable surface within a session |
//!
//! A [`Session`] is acquired at scenario entry and released at scenario exit;
//! tabs are opened on demand and threaded through steps by value. Closing a
//! session invalidates every tab handle that points into it.
//!
//! # Example
//!
//! ```no_run
//! # use std::sync::Arc;
//! # use scenario_harness::{SessionManager, BrowserBackend, Result};
//! # async fn example(backend: Arc<dyn BrowserBackend>) -> Result<()> {
//! let manager = SessionManager::new(backend);
//!
//! let session = manager.create_session().await?;
//! let tab = manager.open_tab(&session).await?;
//!
//! tab.goto("https://shop.example/admin").await?;
//! let title = tab.title().await?;
//!
//! manager.destroy_session(&session).await;
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Submodules
// ============================================================================

/// The [`Session`] handle.
pub mod context;

/// Session and tab lifecycle management.
pub mod manager;

/// The [`Tab`] handle and its interaction methods.
pub mod tab;

// ============================================================================
// Re-exports
// ============================================================================

pub use context::Session;
pub use manager::SessionManager;
pub use tab::Tab;
