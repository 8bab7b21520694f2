//! Steps: the smallest independently pass/fail-able unit of a scenario.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures_util::FutureExt;
use futures_util::future::BoxFuture;

use crate::context::StepContext;
use crate::error::Result;
use crate::session::{Session, Tab};

// ============================================================================
// Types
// ============================================================================

/// Arguments every step action receives.
///
/// The active tab is threaded by value: the action returns the tab that
/// should be active afterwards (usually the same one, a new one after a
/// navigation that replaces it), and the runner reassigns. The session is the
/// one resource intentionally shared across all steps of a scenario.
pub struct StepArgs {
    /// This step's context, passed explicitly rather than read from ambient
    /// state.
    pub context: StepContext,
    /// The scenario's shared session.
    pub session: Session,
    /// The currently active tab.
    pub tab: Tab,
}

/// Boxed async step body.
pub type StepAction = Arc<dyn Fn(StepArgs) -> BoxFuture<'static, Result<Tab>> + Send + Sync>;

// ============================================================================
// Step
// ============================================================================

/// A named, independently reportable unit of work.
#[derive(Clone)]
pub struct Step {
    /// Human-readable step name, e.g. `should sign in with default customer`.
    name: String,
    /// Diagnostics context attached before the step runs.
    context: StepContext,
    /// The step body.
    action: StepAction,
}

impl fmt::Debug for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Step")
            .field("name", &self.name)
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Step - Constructors
// ============================================================================

impl Step {
    /// Creates a step from an async closure.
    pub fn new<F, Fut>(name: impl Into<String>, context: StepContext, action: F) -> Self
    where
        F: Fn(StepArgs) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Tab>> + Send + 'static,
    {
        Self::from_action(name, context, Arc::new(move |args| action(args).boxed()))
    }

    /// Creates a step from an already-boxed action.
    ///
    /// Used by data-driven expansion, where actions are built per dataset
    /// item.
    pub fn from_action(name: impl Into<String>, context: StepContext, action: StepAction) -> Self {
        Self {
            name: name.into(),
            context,
            action,
        }
    }
}

// ============================================================================
// Step - Accessors
// ============================================================================

impl Step {
    /// Returns the step name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the step's context.
    #[inline]
    #[must_use]
    pub fn context(&self) -> &StepContext {
        &self.context
    }

    /// Starts the step body.
    pub(crate) fn run(&self, args: StepArgs) -> BoxFuture<'static, Result<Tab>> {
        (self.action)(args)
    }
}

// ============================================================================
// StepState
// ============================================================================

/// Lifecycle of one executed step.
///
/// `Pending -> Running -> {Passed, Failed}`; both end states are terminal and
/// there are no retries at this layer. A step that is never executed (because
/// an earlier step in its group failed) stays `Pending` and is reported as
/// skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    /// Not yet executed.
    Pending,
    /// Currently executing.
    Running,
    /// Completed successfully.
    Passed,
    /// Completed with an error.
    Failed,
}

impl StepState {
    /// Transitions `Pending -> Running`.
    #[must_use]
    pub fn start(self) -> Self {
        debug_assert_eq!(self, Self::Pending);
        Self::Running
    }

    /// Transitions `Running -> Passed | Failed`.
    #[must_use]
    pub fn finish(self, passed: bool) -> Self {
        debug_assert_eq!(self, Self::Running);
        if passed { Self::Passed } else { Self::Failed }
    }

    /// Returns `true` for `Passed` and `Failed`.
    #[inline]
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Passed | Self::Failed)
    }
}

// ============================================================================
// Tests
// ============================================================================
