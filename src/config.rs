//! Harness timing configuration.
//!
//! Reasonable wait durations depend on the system under test, so all bounds
//! are configurable here and carry documented defaults.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use scenario_harness::HarnessConfig;
//!
//! let config = HarnessConfig::new()
//!     .with_step_timeout(Duration::from_secs(30))
//!     .with_wait_timeout(Duration::from_secs(5));
//! assert!(config.validate().is_ok());
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::time::Duration;

// ============================================================================
// Defaults
// ============================================================================

/// Default per-step timeout (60 seconds).
pub const DEFAULT_STEP_TIMEOUT: Duration = Duration::from_secs(60);

/// Default bounded wait for page stabilization (10 seconds).
pub const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default polling interval for stabilization waits (100 milliseconds).
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

// ============================================================================
// HarnessConfig
// ============================================================================

/// Timing bounds for scenario execution.
///
/// - `step_timeout` cancels a whole step ([`Error::StepTimeout`]).
/// - `wait_timeout` bounds a single page-state wait
///   ([`Error::UnexpectedPageState`]).
/// - `poll_interval` is the re-check cadence inside a wait.
///
/// [`Error::StepTimeout`]: crate::Error::StepTimeout
/// [`Error::UnexpectedPageState`]: crate::Error::UnexpectedPageState
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Upper bound for one step, including all waits inside it.
    pub step_timeout: Duration,

    /// Upper bound for one page-state wait.
    pub wait_timeout: Duration,

    /// Sleep between condition re-checks during a wait.
    pub poll_interval: Duration,
}

// ============================================================================
// Constructors
// ============================================================================

impl HarnessConfig {
    /// Creates a config with the documented defaults.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            step_timeout: DEFAULT_STEP_TIMEOUT,
            wait_timeout: DEFAULT_WAIT_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Builder Methods
// ============================================================================

impl HarnessConfig {
    /// Sets the per-step timeout.
    #[inline]
    #[must_use]
    pub fn with_step_timeout(mut self, timeout: Duration) -> Self {
        self.step_timeout = timeout;
        self
    }

    /// Sets the page-state wait timeout.
    #[inline]
    #[must_use]
    pub fn with_wait_timeout(mut self, timeout: Duration) -> Self {
        self.wait_timeout = timeout;
        self
    }

    /// Sets the wait polling interval.
    #[inline]
    #[must_use]
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }
}

// ============================================================================
// Validation
// ============================================================================

impl HarnessConfig {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error message if any bound is zero or if the polling
    /// interval is not shorter than the wait timeout.
    pub fn validate(&self) -> Result<(), String> {
        if self.step_timeout.is_zero() {
            return Err("step_timeout must be greater than zero".to_string());
        }
        if self.wait_timeout.is_zero() {
            return Err("wait_timeout must be greater than zero".to_string());
        }
        if self.poll_interval.is_zero() {
            return Err("poll_interval must be greater than zero".to_string());
        }
        if self.poll_interval >= self.wait_timeout {
            return Err("poll_interval must be shorter than wait_timeout".to_string());
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
