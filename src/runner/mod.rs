//! Scenario structuring and execution.
//!
//! | Item | Description |
//! |------|-------------|
//! | [`Step`] | Smallest independently pass/fail-able unit |
//! | [`Group`] | Ordered, independently reportable step collection |
//! | [`StepTemplate`] / [`expand`] | Data-driven group expansion |
//! | [`Scenario`] | Setup steps + groups + trailing cleanup group |
//! | [`ScenarioRunner`] | Sequential executor with scoped session lifetime |
//! | [`ScenarioReport`] | Per-step outcome surface |
//!
//! # Example
//!
//! ```no_run
//! # use std::sync::Arc;
//! # use scenario_harness::{
//! #     BrowserBackend, Result, Scenario, ScenarioRunner, SessionManager, StepTemplate, expand,
//! # };
//! # async fn example(backend: Arc<dyn BrowserBackend>) -> Result<()> {
//! let base = "functional_admin_email_sortAndPagination";
//!
//! let template = StepTemplate::new("Create order n°").step(
//!     "should create an order",
//!     "createOrder",
//!     |_order: &u32, _index| |args| async move { Ok(args.tab) },
//! );
//!
//! let orders: Vec<u32> = (0..11).collect();
//! let scenario = Scenario::new("Sort and pagination emails", base)
//!     .groups(expand(&orders, &template, base));
//!
//! let runner = ScenarioRunner::new(Arc::new(SessionManager::new(backend)));
//! let report = runner.run(&scenario).await?;
//! assert_eq!(report.groups.len(), 11);
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Submodules
// ============================================================================

/// Groups and data-driven expansion.
pub mod group;

/// Execution reports.
pub mod report;

/// Scenario structure and the runner.
pub mod scenario;

/// Steps and the step state machine.
pub mod step;

// ============================================================================
// Re-exports
// ============================================================================

pub use group::{Group, StepTemplate, expand};
pub use report::{GroupReport, ScenarioReport, StepReport, StepStatus};
pub use scenario::{Scenario, ScenarioRunner};
pub use step::{Step, StepAction, StepArgs, StepState};
