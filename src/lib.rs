//! Scenario harness - browser end-to-end test orchestration.
//!
//! This library is the infrastructure that data-driven browser test
//! scenarios are written against: session lifecycle, page-object
//! abstractions, step-context tracking, and a runner that expands datasets
//! into independently reportable test groups.
//!
//! # Architecture
//!
//! A scenario executes strictly sequentially against one shared browsing
//! session:
//!
//! - [`SessionManager`] is the sole owner of context/tab lifecycle; a
//!   session is acquired at scenario entry and released at exit.
//! - Page objects expose semantic operations over a [`Tab`] handle and
//!   thread the active tab by value through compound actions.
//! - [`ContextTracker`] annotates each step with its identifier before it
//!   runs, for diagnostics and artifact naming.
//! - [`ScenarioRunner`] expands datasets eagerly into groups
//!   ([`expand`]), runs groups in ascending order, isolates failures to the
//!   failing group, and always runs the trailing cleanup group.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use scenario_harness::{
//!     BrowserBackend, Scenario, ScenarioRunner, SessionManager, StepTemplate, expand,
//! };
//!
//! async fn run(backend: Arc<dyn BrowserBackend>) -> Result<(), Box<dyn std::error::Error>> {
//!     let base = "functional_admin_email_sortAndPagination";
//!
//!     let template = StepTemplate::new("Create order n°").step(
//!         "should create an order",
//!         "createOrder",
//!         |_order: &u32, _index| |args| async move { Ok(args.tab) },
//!     );
//!     let orders: Vec<u32> = (0..11).collect();
//!
//!     let scenario = Scenario::new("Sort and pagination emails", base)
//!         .groups(expand(&orders, &template, base));
//!
//!     let runner = ScenarioRunner::new(Arc::new(SessionManager::new(backend)));
//!     let report = runner.run(&scenario).await?;
//!     println!("{}", report.to_json()?);
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`assert`] | Assertion helpers producing assertion-class errors |
//! | [`backend`] | Browser-automation backend contract |
//! | [`config`] | Timing bounds: [`HarnessConfig`] |
//! | [`context`] | Step-context tracking: [`ContextTracker`] |
//! | [`error`] | Error types and [`Result`] alias |
//! | [`identifiers`] | Type-safe ID wrappers |
//! | [`page`] | Page-object abstraction layer |
//! | [`runner`] | Scenario structuring and execution |
//! | [`session`] | Session/tab entities and lifecycle |

// ============================================================================
// Modules
// ============================================================================

/// Assertion helpers producing assertion-class errors.
pub mod assert;

/// Browser-automation backend contract.
///
/// The harness drives an implementation of [`BrowserBackend`] supplied by
/// the embedding process.
pub mod backend;

/// Harness timing configuration.
pub mod config;

/// Step context tracking for diagnostics and reporting.
pub mod context;

/// Error types and result aliases.
///
/// All fallible operations return [`Result<T>`] which uses [`Error`].
pub mod error;

/// Type-safe identifiers for harness entities.
///
/// Newtype wrappers prevent mixing incompatible IDs at compile time.
pub mod identifiers;

/// Page-object abstraction layer.
pub mod page;

/// Scenario structuring and execution.
pub mod runner;

/// Browsing-session entities and lifecycle management.
pub mod session;

// ============================================================================
// Re-exports
// ============================================================================

// Backend contract
pub use backend::BrowserBackend;

// Configuration
pub use config::HarnessConfig;

// Context tracking
pub use context::{ContextTracker, StepContext};

// Error types
pub use error::{Error, Result};

// Identifier types
pub use identifiers::{RunId, SessionId, TabId};

// Page objects
pub use page::{PageObject, PageOps, TablePage};

// Runner types
pub use runner::{
    Group, GroupReport, Scenario, ScenarioReport, ScenarioRunner, Step, StepAction, StepArgs,
    StepReport, StepState, StepStatus, StepTemplate, expand,
};

// Session types
pub use session::{Session, SessionManager, Tab};
