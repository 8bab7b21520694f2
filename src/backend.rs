//! Browser-automation backend contract.
//!
//! The harness never talks to a browser directly; it drives an implementation
//! of [`BrowserBackend`] supplied by the embedding process. The contract is
//! deliberately minimal: context and tab lifecycle plus the DOM primitives
//! the page-object layer is built from.
//!
//! Lifecycle methods are called only by the
//! [`SessionManager`](crate::session::SessionManager); page objects reach the
//! interaction methods through [`Tab`](crate::session::Tab) handles. Nothing
//! else may create or destroy contexts, which is what guarantees that no
//! orphaned session survives a run.

// ============================================================================
// Imports
// ============================================================================

use async_trait::async_trait;

use crate::error::Result;
use crate::identifiers::{SessionId, TabId};

// ============================================================================
// BrowserBackend
// ============================================================================

/// Driver-side primitives the harness is built on.
///
/// Implementations report their own failures as
/// [`Error::Backend`](crate::Error::Backend); the harness maps lifecycle
/// failures onto the session error taxonomy at the call site.
///
/// Interaction methods act immediately on the current DOM; bounded waiting
/// for a condition to become true is layered on top by
/// [`PageOps`](crate::page::PageOps), not required from the backend.
#[async_trait]
pub trait BrowserBackend: Send + Sync {
    // ========================================================================
    // Context Lifecycle
    // ========================================================================

    /// Allocates a fresh isolated browsing context.
    async fn create_context(&self) -> Result<SessionId>;

    /// Releases a browsing context and everything in it.
    async fn close_context(&self, session: SessionId) -> Result<()>;

    // ========================================================================
    // Tab Lifecycle
    // ========================================================================

    /// Opens a new tab in the given context.
    async fn open_tab(&self, session: SessionId) -> Result<TabId>;

    /// Closes a tab.
    async fn close_tab(&self, session: SessionId, tab: TabId) -> Result<()>;

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Navigates a tab to a URL.
    async fn goto(&self, session: SessionId, tab: TabId, url: &str) -> Result<()>;

    /// Returns the tab's current URL.
    async fn current_url(&self, session: SessionId, tab: TabId) -> Result<String>;

    /// Returns the tab's current document title.
    async fn title(&self, session: SessionId, tab: TabId) -> Result<String>;

    // ========================================================================
    // DOM Interaction
    // ========================================================================

    /// Clicks the first element matching the selector.
    async fn click(&self, session: SessionId, tab: TabId, selector: &str) -> Result<()>;

    /// Fills a form field with the given value.
    async fn fill(&self, session: SessionId, tab: TabId, selector: &str, value: &str)
    -> Result<()>;

    /// Returns the text content of the first element matching the selector.
    async fn text_of(&self, session: SessionId, tab: TabId, selector: &str) -> Result<String>;

    /// Returns whether an element matching the selector is currently visible.
    ///
    /// Absence of the element is `Ok(false)`, not an error.
    async fn is_visible(&self, session: SessionId, tab: TabId, selector: &str) -> Result<bool>;
}
