//! Type-safe identifiers for harness entities.
//!
//! Newtype wrappers prevent mixing incompatible IDs at compile time:
//!
//! | Type | Backing | Assigned by |
//! |------|---------|-------------|
//! | [`SessionId`] | UUID | [`SessionManager`](crate::session::SessionManager) |
//! | [`TabId`] | `NonZeroU32` | browser backend |
//! | [`RunId`] | UUID | [`ScenarioRunner`](crate::runner::ScenarioRunner), one per step execution |

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::num::NonZeroU32;

use serde::Serialize;
use uuid::Uuid;

// ============================================================================
// SessionId
// ============================================================================

/// Identifier of an isolated browsing context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Creates a fresh random session ID.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session-{}", self.0)
    }
}

// ============================================================================
// TabId
// ============================================================================

/// Identifier of a tab within a session.
///
/// Tab IDs are assigned by the browser backend and are never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TabId(NonZeroU32);

impl TabId {
    /// Creates a tab ID from a raw backend value.
    ///
    /// Returns `None` if the value is zero.
    #[inline]
    #[must_use]
    pub fn new(raw: u32) -> Option<Self> {
        NonZeroU32::new(raw).map(Self)
    }

    /// Returns the raw numeric value.
    #[inline]
    #[must_use]
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tab-{}", self.0)
    }
}

// ============================================================================
// RunId
// ============================================================================

/// Handle identifying one in-flight step execution.
///
/// Used as the key of the [`ContextTracker`](crate::context::ContextTracker)
/// registry; a fresh ID is minted for every step the runner executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RunId(Uuid);

impl RunId {
    /// Creates a fresh random run ID.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "run-{}", self.0)
    }
}

// ============================================================================
// Tests
// ============================================================================
