//! Error types for the scenario harness.
//!
//! All fallible operations return [`Result<T>`] which uses [`Error`].
//!
//! # Error Categories
//!
//! | Category | Variants |
//! |----------|----------|
//! | Session lifecycle | [`Error::SessionCreation`], [`Error::TabCreation`], [`Error::SessionClosed`], [`Error::TabNotFound`] |
//! | Page state | [`Error::UnexpectedPageState`] |
//! | Assertions | [`Error::AssertionMismatch`], [`Error::BulkAction`] |
//! | Execution | [`Error::StepTimeout`] |
//! | External | [`Error::Backend`] |
//!
//! Timeout-class errors ([`Error::is_timeout`]) and assertion-class errors
//! ([`Error::is_assertion`]) are disjoint, so an upstream runner can apply a
//! differentiated retry policy.

// ============================================================================
// Imports
// ============================================================================

use std::result::Result as StdResult;

use thiserror::Error;

use crate::identifiers::{SessionId, TabId};

// ============================================================================
// Result Alias
// ============================================================================

/// Result type alias using crate [`enum@Error`].
pub type Result<T> = StdResult<T, Error>;

// ============================================================================
// Error Enum
// ============================================================================

/// Main error type for the crate.
///
/// Each variant includes the context needed to report a step failure without
/// aggregating it with other failures.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Session Lifecycle Errors
    // ========================================================================
    /// Browsing context allocation failed.
    ///
    /// Returned when the host browser handle is invalid or exhausted.
    #[error("Session creation failed: {message}")]
    SessionCreation {
        /// Description of the allocation failure.
        message: String,
    },

    /// Tab creation failed.
    ///
    /// Returned when a tab cannot be opened in the given session.
    #[error("Tab creation failed in {session_id}: {message}")]
    TabCreation {
        /// Session the tab was requested in.
        session_id: SessionId,
        /// Description of the failure.
        message: String,
    },

    /// Operation on a tab whose session is already closed.
    #[error("Session closed: {session_id}")]
    SessionClosed {
        /// The closed session's ID.
        session_id: SessionId,
    },

    /// Tab does not exist in its session.
    #[error("Tab not found: {tab_id}")]
    TabNotFound {
        /// The missing tab's ID.
        tab_id: TabId,
    },

    // ========================================================================
    // Page State Errors
    // ========================================================================
    /// A required page condition was absent after a bounded wait.
    ///
    /// Returned by stabilization waits; timeout-class.
    #[error("Unexpected page state after {timeout_ms}ms: {condition}")]
    UnexpectedPageState {
        /// The condition that never held (selector or description).
        condition: String,
        /// Milliseconds waited before giving up.
        timeout_ms: u64,
    },

    // ========================================================================
    // Assertion Errors
    // ========================================================================
    /// Observed value differs from the expected one.
    #[error("Assertion failed: {detail} (expected {expected:?}, got {actual:?})")]
    AssertionMismatch {
        /// Human-readable description of what was checked.
        detail: String,
        /// Expected value.
        expected: String,
        /// Observed value.
        actual: String,
    },

    /// A bulk action reported a message other than its success message.
    #[error("Bulk action failed (expected {expected:?}, got {actual:?})")]
    BulkAction {
        /// The configured success message.
        expected: String,
        /// The message the action actually reported.
        actual: String,
    },

    // ========================================================================
    // Execution Errors
    // ========================================================================
    /// A step exceeded the configured per-step timeout.
    #[error("Step {step:?} timed out after {timeout_ms}ms")]
    StepTimeout {
        /// Name of the step that timed out.
        step: String,
        /// Milliseconds waited before cancellation.
        timeout_ms: u64,
    },

    // ========================================================================
    // External Errors
    // ========================================================================
    /// Failure reported by the browser-automation backend.
    #[error("Backend error: {message}")]
    Backend {
        /// Description from the backend.
        message: String,
    },
}

// ============================================================================
// Error Constructors
// ============================================================================

impl Error {
    /// Creates a session creation error.
    #[inline]
    pub fn session_creation(message: impl Into<String>) -> Self {
        Self::SessionCreation {
            message: message.into(),
        }
    }

    /// Creates a tab creation error.
    #[inline]
    pub fn tab_creation(session_id: SessionId, message: impl Into<String>) -> Self {
        Self::TabCreation {
            session_id,
            message: message.into(),
        }
    }

    /// Creates a session closed error.
    #[inline]
    pub fn session_closed(session_id: SessionId) -> Self {
        Self::SessionClosed { session_id }
    }

    /// Creates a tab not found error.
    #[inline]
    pub fn tab_not_found(tab_id: TabId) -> Self {
        Self::TabNotFound { tab_id }
    }

    /// Creates an unexpected page state error.
    #[inline]
    pub fn unexpected_page_state(condition: impl Into<String>, timeout_ms: u64) -> Self {
        Self::UnexpectedPageState {
            condition: condition.into(),
            timeout_ms,
        }
    }

    /// Creates an assertion mismatch error.
    #[inline]
    pub fn assertion_mismatch(
        detail: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::AssertionMismatch {
            detail: detail.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Creates a bulk action error.
    #[inline]
    pub fn bulk_action(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::BulkAction {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Creates a step timeout error.
    #[inline]
    pub fn step_timeout(step: impl Into<String>, timeout_ms: u64) -> Self {
        Self::StepTimeout {
            step: step.into(),
            timeout_ms,
        }
    }

    /// Creates a backend error.
    #[inline]
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }
}

// ============================================================================
// Error Predicates
// ============================================================================

impl Error {
    /// Returns `true` if this is a timeout-class error.
    ///
    /// Timeout-class failures may succeed on retry; assertion-class failures
    /// will not.
    #[inline]
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            Self::UnexpectedPageState { .. } | Self::StepTimeout { .. }
        )
    }

    /// Returns `true` if this is an assertion-class error.
    #[inline]
    #[must_use]
    pub fn is_assertion(&self) -> bool {
        matches!(self, Self::AssertionMismatch { .. } | Self::BulkAction { .. })
    }

    /// Returns `true` if this is a session lifecycle error.
    #[inline]
    #[must_use]
    pub fn is_session_error(&self) -> bool {
        matches!(
            self,
            Self::SessionCreation { .. }
                | Self::TabCreation { .. }
                | Self::SessionClosed { .. }
                | Self::TabNotFound { .. }
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
