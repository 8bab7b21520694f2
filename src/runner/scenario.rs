//! Scenario structure and sequential execution.
//!
//! A [`Scenario`] is a value: named setup steps, an ordered list of groups
//! (usually produced by [`expand`](super::expand)), and exactly one trailing
//! cleanup group. [`ScenarioRunner::run`] executes it against a fresh
//! session.
//!
//! Execution semantics:
//!
//! - Steps run strictly sequentially; the session/tab pair is the only
//!   shared resource and only the current step holds it.
//! - A failed step skips the remaining steps of its own group; sibling
//!   groups and the cleanup group still run.
//! - Groups run in ascending order, because later groups may depend on the
//!   cumulative side effects of earlier ones.
//! - The cleanup group always runs, regardless of prior failures.
//! - The session is released on every path after acquisition, best-effort.

// ============================================================================
// Imports
// ============================================================================

use std::sync::Arc;
use std::time::Instant;

use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::config::HarnessConfig;
use crate::context::ContextTracker;
use crate::error::{Error, Result};
use crate::identifiers::RunId;
use crate::session::{Session, SessionManager, Tab};

use super::group::Group;
use super::report::{GroupReport, ScenarioReport, StepReport};
use super::step::{Step, StepArgs, StepState};

// ============================================================================
// Scenario
// ============================================================================

/// A complete scenario: setup steps, groups, and a trailing cleanup group.
#[derive(Debug, Clone)]
pub struct Scenario {
    /// Scenario name, e.g. `Sort and pagination emails`.
    name: String,
    /// Base scenario tag for context tracking.
    base_context: String,
    /// Steps run once before any group.
    setup: Vec<Step>,
    /// Ordinary and expanded groups, in execution order.
    groups: Vec<Group>,
    /// The group that always runs last.
    cleanup: Group,
}

// ============================================================================
// Scenario - Construction
// ============================================================================

impl Scenario {
    /// Creates an empty scenario with an empty cleanup group.
    #[must_use]
    pub fn new(name: impl Into<String>, base_context: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_context: base_context.into(),
            setup: Vec::new(),
            groups: Vec::new(),
            cleanup: Group::new("Cleanup"),
        }
    }

    /// Appends a setup step.
    #[must_use]
    pub fn setup_step(mut self, step: Step) -> Self {
        self.setup.push(step);
        self
    }

    /// Appends one group.
    #[must_use]
    pub fn group(mut self, group: Group) -> Self {
        self.groups.push(group);
        self
    }

    /// Appends a sequence of groups, preserving order.
    #[must_use]
    pub fn groups(mut self, groups: impl IntoIterator<Item = Group>) -> Self {
        self.groups.extend(groups);
        self
    }

    /// Replaces the cleanup group.
    #[must_use]
    pub fn cleanup(mut self, group: Group) -> Self {
        self.cleanup = group;
        self
    }
}

// ============================================================================
// Scenario - Accessors
// ============================================================================

impl Scenario {
    /// Returns the scenario name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the base scenario tag.
    #[inline]
    #[must_use]
    pub fn base_context(&self) -> &str {
        &self.base_context
    }

    /// Returns the number of groups, excluding setup and cleanup.
    #[inline]
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }
}

// ============================================================================
// ScenarioRunner
// ============================================================================

/// Executes scenarios sequentially against sessions it acquires and
/// releases.
pub struct ScenarioRunner {
    /// Sole source of sessions and tabs.
    manager: Arc<SessionManager>,
    /// Step-context registry for the reporting surface.
    tracker: Arc<ContextTracker>,
    /// Timing bounds.
    config: HarnessConfig,
}

// ============================================================================
// ScenarioRunner - Construction
// ============================================================================

impl ScenarioRunner {
    /// Creates a runner with default timing bounds.
    #[must_use]
    pub fn new(manager: Arc<SessionManager>) -> Self {
        Self {
            manager,
            tracker: Arc::new(ContextTracker::new()),
            config: HarnessConfig::new(),
        }
    }

    /// Replaces the timing configuration.
    #[must_use]
    pub fn with_config(mut self, config: HarnessConfig) -> Self {
        self.config = config;
        self
    }

    /// Shares an externally owned context tracker.
    #[must_use]
    pub fn with_tracker(mut self, tracker: Arc<ContextTracker>) -> Self {
        self.tracker = tracker;
        self
    }

    /// Returns the session manager.
    #[inline]
    #[must_use]
    pub fn manager(&self) -> &Arc<SessionManager> {
        &self.manager
    }

    /// Returns the context tracker.
    #[inline]
    #[must_use]
    pub fn tracker(&self) -> &Arc<ContextTracker> {
        &self.tracker
    }

    /// Returns the timing configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }
}

// ============================================================================
// ScenarioRunner - Execution
// ============================================================================

impl ScenarioRunner {
    /// Runs a scenario against a fresh session.
    ///
    /// Step failures are captured in the returned report, never raised.
    ///
    /// # Errors
    ///
    /// Fails only when the session or its initial tab cannot be acquired.
    pub async fn run(&self, scenario: &Scenario) -> Result<ScenarioReport> {
        info!(scenario = %scenario.name(), groups = scenario.group_count(), "Scenario starting");

        let session = self.manager.create_session().await?;
        let initial_tab = match self.manager.open_tab(&session).await {
            Ok(tab) => tab,
            Err(e) => {
                self.manager.destroy_session(&session).await;
                return Err(e);
            }
        };

        let mut active = initial_tab;

        let (setup, next) = self
            .run_group_steps("setup", &scenario.setup, &session, active)
            .await;
        active = next;

        let mut groups = Vec::with_capacity(scenario.groups.len());
        for group in &scenario.groups {
            let (report, next) = self
                .run_group_steps(group.label(), group.steps(), &session, active)
                .await;
            active = next;
            groups.push(report);
        }

        let (cleanup, _) = self
            .run_group_steps(
                scenario.cleanup.label(),
                scenario.cleanup.steps(),
                &session,
                active,
            )
            .await;

        self.manager.destroy_session(&session).await;

        let report = ScenarioReport {
            scenario: scenario.name.clone(),
            base_context: scenario.base_context.clone(),
            setup,
            groups,
            cleanup,
        };
        info!(scenario = %scenario.name(), passed = report.passed(), "Scenario finished");
        Ok(report)
    }

    /// Runs the steps of one group.
    ///
    /// After the first failure the remaining steps are reported skipped, so
    /// the group never compounds on inconsistent state. Returns the group
    /// report and the tab that is active afterwards.
    async fn run_group_steps(
        &self,
        label: &str,
        steps: &[Step],
        session: &Session,
        mut active: Tab,
    ) -> (GroupReport, Tab) {
        let mut reports = Vec::with_capacity(steps.len());
        let mut group_failed = false;

        for step in steps {
            if group_failed {
                debug!(group = %label, step = %step.name(), "Step skipped");
                reports.push(StepReport::skipped(step.name(), step.context().identifier()));
                continue;
            }

            let (report, next) = self.run_step(step, session, active.clone()).await;
            if let Some(tab) = next {
                active = tab;
            } else {
                group_failed = true;
            }
            reports.push(report);
        }

        (
            GroupReport {
                label: label.to_string(),
                steps: reports,
            },
            active,
        )
    }

    /// Runs one step under the configured timeout.
    ///
    /// Returns the step report and, on success, the tab the step handed
    /// back.
    async fn run_step(&self, step: &Step, session: &Session, tab: Tab) -> (StepReport, Option<Tab>) {
        let run = RunId::new();
        let context = step.context().clone();
        self.tracker
            .add_context_item(run, context.identifier(), context.base_context());

        let state = StepState::Pending.start();
        debug!(step = %step.name(), run = %run, "Step running");

        let started = Instant::now();
        let outcome = timeout(
            self.config.step_timeout,
            step.run(StepArgs {
                context,
                session: session.clone(),
                tab,
            }),
        )
        .await;
        let duration_ms = started.elapsed().as_millis() as u64;

        self.tracker.clear(run);
        let state = state.finish(matches!(&outcome, Ok(Ok(_))));
        debug_assert!(state.is_terminal());

        match outcome {
            Ok(Ok(next_tab)) => {
                info!(step = %step.name(), duration_ms, "Step passed");
                (
                    StepReport::passed(step.name(), step.context().identifier(), duration_ms),
                    Some(next_tab),
                )
            }
            Ok(Err(e)) => {
                warn!(step = %step.name(), error = %e, duration_ms, "Step failed");
                (
                    StepReport::failed(
                        step.name(),
                        step.context().identifier(),
                        e.to_string(),
                        e.is_timeout(),
                        duration_ms,
                    ),
                    None,
                )
            }
            Err(_) => {
                let e = Error::step_timeout(
                    step.name(),
                    self.config.step_timeout.as_millis() as u64,
                );
                warn!(step = %step.name(), error = %e, "Step timed out");
                (
                    StepReport::failed(
                        step.name(),
                        step.context().identifier(),
                        e.to_string(),
                        true,
                        duration_ms,
                    ),
                    None,
                )
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
