//! Page-object contracts.

// ============================================================================
// Imports
// ============================================================================

use async_trait::async_trait;

use crate::error::Result;
use crate::session::Tab;

// ============================================================================
// PageObject
// ============================================================================

/// Contract every screen wrapper implements.
///
/// State queries are idempotent with respect to re-reading: calling
/// [`read_title`](PageObject::read_title) or
/// [`is_current`](PageObject::is_current) repeatedly observes the page
/// without mutating it.
#[async_trait]
pub trait PageObject: Send + Sync {
    /// Semantic screen name, used in logs and reports.
    fn name(&self) -> &str;

    /// Expected title constant for this screen.
    fn page_title(&self) -> &str;

    /// Reads the current document title.
    async fn read_title(&self, tab: &Tab) -> Result<String> {
        tab.title().await
    }

    /// Returns whether the tab currently shows this screen.
    ///
    /// Matches by title containment, the convention the screens under test
    /// follow.
    async fn is_current(&self, tab: &Tab) -> Result<bool> {
        Ok(self.read_title(tab).await?.contains(self.page_title()))
    }
}

// ============================================================================
// TablePage
// ============================================================================

/// Extra contract for list/table screens that expose a bulk action.
#[async_trait]
pub trait TablePage: PageObject {
    /// The exact message the bulk delete reports on success.
    fn success_message(&self) -> &str;

    /// Selects all rows, runs the bulk delete, and returns the literal
    /// result message the screen reports.
    ///
    /// Implementations return the message as observed; comparing it against
    /// [`success_message`](TablePage::success_message) is the caller's
    /// assertion, typically via
    /// [`assert::expect_bulk_message`](crate::assert::expect_bulk_message).
    async fn bulk_delete_all(&self, tab: &Tab) -> Result<String>;
}

// ============================================================================
// Tests
// ============================================================================
