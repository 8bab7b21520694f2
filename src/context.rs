//! Step context tracking for diagnostics and reporting.
//!
//! Every step carries a [`StepContext`]: a short machine-readable identifier
//! plus the base tag of the scenario it came from. The pair is what lets a
//! failure, log line, or screenshot be correlated back to source intent.
//!
//! Steps receive their context by value through
//! [`StepArgs`](crate::runner::StepArgs); the [`ContextTracker`] registry
//! exists only so the reporting surface can ask "what is step `run-X`
//! doing right now". Registration and clearing are owned by the runner, and
//! nothing here can fail a test: the tracker is pure bookkeeping.

// ============================================================================
// Imports
// ============================================================================

use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use serde::Serialize;
use tracing::trace;

use crate::identifiers::RunId;

// ============================================================================
// StepContext
// ============================================================================

/// Identifier pair attached to exactly one in-flight step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepContext {
    /// Step identifier, e.g. `createOrder`.
    identifier: String,
    /// Base scenario tag, e.g. `functional_admin_email_sortAndPagination`.
    base_context: String,
}

impl StepContext {
    /// Creates a new step context.
    #[must_use]
    pub fn new(identifier: impl Into<String>, base_context: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            base_context: base_context.into(),
        }
    }

    /// Returns the step identifier.
    #[inline]
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Returns the base scenario tag.
    #[inline]
    #[must_use]
    pub fn base_context(&self) -> &str {
        &self.base_context
    }

    /// Returns the fully qualified tag, used for artifact naming.
    #[must_use]
    pub fn qualified(&self) -> String {
        format!("{}_{}", self.base_context, self.identifier)
    }
}

// ============================================================================
// ContextTracker
// ============================================================================

/// Registry of the context associated with each in-flight step.
///
/// Write-once per step in practice: the runner registers a context right
/// before the step runs and clears it when the step completes, pass or fail.
/// Re-registering for the same [`RunId`] overwrites the prior association.
#[derive(Debug, Default)]
pub struct ContextTracker {
    /// Active associations keyed by run handle.
    entries: Mutex<FxHashMap<RunId, StepContext>>,
}

impl ContextTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Associates an identifier and base tag with the given run handle.
    ///
    /// Overwrites any prior association for that handle. Never fails.
    pub fn add_context_item(
        &self,
        run: RunId,
        identifier: impl Into<String>,
        base_context: impl Into<String>,
    ) {
        let context = StepContext::new(identifier, base_context);
        trace!(run = %run, identifier = %context.identifier(), "Context registered");
        self.entries.lock().insert(run, context);
    }

    /// Returns the context currently associated with the run handle.
    #[must_use]
    pub fn current(&self, run: RunId) -> Option<StepContext> {
        self.entries.lock().get(&run).cloned()
    }

    /// Removes and returns the association for the run handle.
    ///
    /// Called by the runner when the step completes.
    pub fn clear(&self, run: RunId) -> Option<StepContext> {
        trace!(run = %run, "Context cleared");
        self.entries.lock().remove(&run)
    }

    /// Returns the number of in-flight associations.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Returns `true` if no step is currently tracked.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
