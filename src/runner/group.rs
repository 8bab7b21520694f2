//! Groups and data-driven group expansion.
//!
//! A [`Group`] is an ordered collection of steps that is reported as one
//! unit. [`expand`] turns a dataset and a [`StepTemplate`] into one group per
//! dataset item, eagerly, so the full set of reportable units is known before
//! execution begins. Groups are value objects: each expanded group owns
//! actions built for its specific item and index, so there is no closure
//! late-binding over a loop variable.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures_util::FutureExt;

use crate::context::StepContext;
use crate::error::Result;
use crate::session::Tab;

use super::step::{Step, StepAction, StepArgs};

// ============================================================================
// Group
// ============================================================================

/// An ordered, independently reportable collection of steps.
#[derive(Clone)]
pub struct Group {
    /// Group label, e.g. `Create order n°3`.
    label: String,
    /// The steps, in execution order.
    steps: Vec<Step>,
}

impl fmt::Debug for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Group")
            .field("label", &self.label)
            .field("steps", &self.steps.len())
            .finish()
    }
}

// ============================================================================
// Group - Construction
// ============================================================================

impl Group {
    /// Creates an empty group.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            steps: Vec::new(),
        }
    }

    /// Appends a step.
    #[must_use]
    pub fn with_step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }
}

// ============================================================================
// Group - Accessors
// ============================================================================

impl Group {
    /// Returns the group label.
    #[inline]
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the steps in execution order.
    #[inline]
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Returns the number of steps.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if the group has no steps.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

// ============================================================================
// StepTemplate
// ============================================================================

/// One step of a template: a fixed name and identifier plus an action
/// factory parameterized by dataset item and 0-based index.
struct TemplateStep<T> {
    /// Step name.
    name: String,
    /// Context identifier for the step.
    identifier: String,
    /// Builds the action for a specific item.
    build: Arc<dyn Fn(&T, usize) -> StepAction + Send + Sync>,
}

/// A fixed step sequence repeated once per dataset item.
pub struct StepTemplate<T> {
    /// Label prefix for expanded groups; the 1-based item number is appended.
    label: String,
    /// The template steps, in execution order.
    steps: Vec<TemplateStep<T>>,
}

impl<T> fmt::Debug for StepTemplate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepTemplate")
            .field("label", &self.label)
            .field("steps", &self.steps.len())
            .finish()
    }
}

impl<T> StepTemplate<T> {
    /// Creates an empty template with the given group label prefix.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            steps: Vec::new(),
        }
    }

    /// Appends a template step.
    ///
    /// `build` receives the dataset item and its 0-based index and returns
    /// the step body; it runs once per item, at expansion time.
    #[must_use]
    pub fn step<F, A, Fut>(
        mut self,
        name: impl Into<String>,
        identifier: impl Into<String>,
        build: F,
    ) -> Self
    where
        F: Fn(&T, usize) -> A + Send + Sync + 'static,
        A: Fn(StepArgs) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Tab>> + Send + 'static,
    {
        self.steps.push(TemplateStep {
            name: name.into(),
            identifier: identifier.into(),
            build: Arc::new(move |item, index| {
                let action = build(item, index);
                Arc::new(move |args| action(args).boxed())
            }),
        });
        self
    }

    /// Returns the label prefix.
    #[inline]
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the number of steps per expanded group.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if the template has no steps.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

// ============================================================================
// Expansion
// ============================================================================

/// Expands a dataset into one group per item.
///
/// Pure and eager: the returned groups are plain values labeled with the
/// 1-based item number, carrying actions already specialized to their item
/// and index. An empty dataset yields an empty vector. Group order follows
/// dataset order, and the runner executes groups in exactly that order, since
/// later groups may depend on the cumulative side effects of earlier ones.
#[must_use]
pub fn expand<T>(dataset: &[T], template: &StepTemplate<T>, base_context: &str) -> Vec<Group> {
    dataset
        .iter()
        .enumerate()
        .map(|(index, item)| Group {
            label: format!("{} {}", template.label, index + 1),
            steps: template
                .steps
                .iter()
                .map(|ts| {
                    Step::from_action(
                        ts.name.clone(),
                        StepContext::new(ts.identifier.clone(), base_context),
                        (ts.build)(item, index),
                    )
                })
                .collect(),
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
