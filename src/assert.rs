//! Assertion helpers producing assertion-class errors.
//!
//! Each helper compares an observed value against an expected one and fails
//! the current step with [`Error::AssertionMismatch`] (or
//! [`Error::BulkAction`] for bulk-action messages) on mismatch. The error
//! always carries both values, so a report never collapses a failure into an
//! opaque message.
//!
//! [`Error::AssertionMismatch`]: crate::Error::AssertionMismatch
//! [`Error::BulkAction`]: crate::Error::BulkAction

// ============================================================================
// Imports
// ============================================================================

use crate::error::{Error, Result};

// ============================================================================
// Boolean Assertions
// ============================================================================

/// Expects a flag to be `true`.
///
/// # Errors
///
/// Fails with [`Error::AssertionMismatch`] otherwise.
pub fn expect_true(actual: bool, detail: impl Into<String>) -> Result<()> {
    if actual {
        Ok(())
    } else {
        Err(Error::assertion_mismatch(detail, "true", "false"))
    }
}

/// Expects a flag to be `false`.
///
/// # Errors
///
/// Fails with [`Error::AssertionMismatch`] otherwise.
pub fn expect_false(actual: bool, detail: impl Into<String>) -> Result<()> {
    if actual {
        Err(Error::assertion_mismatch(detail, "false", "true"))
    } else {
        Ok(())
    }
}

// ============================================================================
// String Assertions
// ============================================================================

/// Expects two strings to be exactly equal.
///
/// # Errors
///
/// Fails with [`Error::AssertionMismatch`] otherwise.
pub fn expect_eq(actual: &str, expected: &str, detail: impl Into<String>) -> Result<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(Error::assertion_mismatch(detail, expected, actual))
    }
}

/// Expects `haystack` to contain `needle`.
///
/// # Errors
///
/// Fails with [`Error::AssertionMismatch`] otherwise.
pub fn expect_contains(haystack: &str, needle: &str, detail: impl Into<String>) -> Result<()> {
    if haystack.contains(needle) {
        Ok(())
    } else {
        Err(Error::assertion_mismatch(
            detail,
            format!("contains {needle:?}"),
            haystack,
        ))
    }
}

// ============================================================================
// Bulk Action Assertions
// ============================================================================

/// Expects a bulk action's reported message to equal its success message.
///
/// # Errors
///
/// Fails with [`Error::BulkAction`] otherwise.
pub fn expect_bulk_message(actual: &str, expected: &str) -> Result<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(Error::bulk_action(expected, actual))
    }
}

// ============================================================================
// Tests
// ============================================================================
