//! Per-step, per-group, and per-scenario execution reports.
//!
//! The report is the harness's output surface: every step's outcome is kept
//! individually, with the mismatch detail preserved in the error text, so an
//! external reporting sink (console, file, structured) can render failures
//! without the harness ever aggregating them into one opaque message. All
//! types serialize to JSON via [`ScenarioReport::to_json`].

// ============================================================================
// Imports
// ============================================================================

use serde::Serialize;

// ============================================================================
// StepStatus
// ============================================================================

/// Reported outcome of one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StepStatus {
    /// The step ran and passed.
    Passed,
    /// The step ran and failed.
    Failed,
    /// The step never ran because an earlier step in its group failed.
    Skipped,
}

// ============================================================================
// StepReport
// ============================================================================

/// Outcome of one step.
#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    /// Step name.
    pub name: String,
    /// Context identifier the step was annotated with.
    pub identifier: String,
    /// Outcome.
    pub status: StepStatus,
    /// Error display text for failed steps.
    pub error: Option<String>,
    /// `true` when the failure was timeout-class.
    pub timed_out: bool,
    /// Wall-clock execution time; zero for skipped steps.
    pub duration_ms: u64,
}

impl StepReport {
    /// Creates a passed-step report.
    #[must_use]
    pub fn passed(name: impl Into<String>, identifier: impl Into<String>, duration_ms: u64) -> Self {
        Self {
            name: name.into(),
            identifier: identifier.into(),
            status: StepStatus::Passed,
            error: None,
            timed_out: false,
            duration_ms,
        }
    }

    /// Creates a failed-step report.
    #[must_use]
    pub fn failed(
        name: impl Into<String>,
        identifier: impl Into<String>,
        error: impl Into<String>,
        timed_out: bool,
        duration_ms: u64,
    ) -> Self {
        Self {
            name: name.into(),
            identifier: identifier.into(),
            status: StepStatus::Failed,
            error: Some(error.into()),
            timed_out,
            duration_ms,
        }
    }

    /// Creates a skipped-step report.
    #[must_use]
    pub fn skipped(name: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            identifier: identifier.into(),
            status: StepStatus::Skipped,
            error: None,
            timed_out: false,
            duration_ms: 0,
        }
    }

    /// Returns `true` if the step passed.
    #[inline]
    #[must_use]
    pub fn is_passed(&self) -> bool {
        self.status == StepStatus::Passed
    }
}

// ============================================================================
// GroupReport
// ============================================================================

/// Outcome of one group.
#[derive(Debug, Clone, Serialize)]
pub struct GroupReport {
    /// Group label.
    pub label: String,
    /// Step outcomes in execution order.
    pub steps: Vec<StepReport>,
}

impl GroupReport {
    /// Returns `true` if every step in the group passed.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.steps.iter().all(StepReport::is_passed)
    }

    /// Returns `true` if any step in the group failed.
    #[must_use]
    pub fn failed(&self) -> bool {
        self.steps
            .iter()
            .any(|s| s.status == StepStatus::Failed)
    }
}

// ============================================================================
// ScenarioReport
// ============================================================================

/// Outcome of one scenario run.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    /// Scenario name.
    pub scenario: String,
    /// Base scenario tag.
    pub base_context: String,
    /// Outcomes of the setup steps.
    pub setup: GroupReport,
    /// Outcomes of the ordinary and expanded groups, in execution order.
    pub groups: Vec<GroupReport>,
    /// Outcome of the trailing cleanup group.
    pub cleanup: GroupReport,
}

impl ScenarioReport {
    /// Returns `true` if every step of every group passed.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.setup.passed() && self.groups.iter().all(GroupReport::passed) && self.cleanup.passed()
    }

    /// Returns all failed steps across the scenario, in execution order.
    #[must_use]
    pub fn failed_steps(&self) -> Vec<&StepReport> {
        self.all_groups()
            .flat_map(|g| g.steps.iter())
            .filter(|s| s.status == StepStatus::Failed)
            .collect()
    }

    /// Returns the total number of steps, including skipped ones.
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.all_groups().map(|g| g.steps.len()).sum()
    }

    /// Serializes the report to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Iterates setup, ordinary groups, and cleanup in execution order.
    fn all_groups(&self) -> impl Iterator<Item = &GroupReport> {
        std::iter::once(&self.setup)
            .chain(self.groups.iter())
            .chain(std::iter::once(&self.cleanup))
    }
}

// ============================================================================
// Tests
// ============================================================================
