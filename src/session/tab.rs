//! The [`Tab`] handle and its interaction methods.
//!
//! A tab is only ever manipulated while its session is alive; every method
//! checks the session's lifecycle state before touching the backend and
//! fails with [`Error::SessionClosed`](crate::Error::SessionClosed) on a
//! stale handle.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::error::{Error, Result};
use crate::identifiers::{SessionId, TabId};

use super::Session;

// ============================================================================
// Types
// ============================================================================

/// Internal shared state for a tab.
pub(crate) struct TabInner {
    /// Tab ID.
    pub(crate) id: TabId,
    /// Owning session.
    pub(crate) session: Session,
}

// ============================================================================
// Tab
// ============================================================================

/// A handle to a navigable surface within a session.
///
/// Tab handles are values: a compound page-object action that changes the
/// active tab returns the new handle, and the caller reassigns rather than
/// retaining the stale one.
#[derive(Clone)]
pub struct Tab {
    pub(crate) inner: Arc<TabInner>,
}

impl fmt::Debug for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tab")
            .field("id", &self.inner.id)
            .field("session_id", &self.inner.session.id())
            .finish_non_exhaustive()
    }
}

impl Tab {
    /// Creates a new tab handle.
    pub(crate) fn new(session: Session, id: TabId) -> Self {
        Self {
            inner: Arc::new(TabInner { id, session }),
        }
    }
}

// ============================================================================
// Tab - Accessors
// ============================================================================

impl Tab {
    /// Returns the tab ID.
    #[inline]
    #[must_use]
    pub fn id(&self) -> TabId {
        self.inner.id
    }

    /// Returns the owning session's ID.
    #[inline]
    #[must_use]
    pub fn session_id(&self) -> SessionId {
        self.inner.session.id()
    }

    /// Returns the owning session handle.
    #[inline]
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.inner.session
    }

    /// Ensures the owning session is still alive.
    pub(crate) fn ensure_alive(&self) -> Result<()> {
        if self.inner.session.is_closed() {
            return Err(Error::session_closed(self.inner.session.id()));
        }
        Ok(())
    }
}

// ============================================================================
// Tab - Navigation
// ============================================================================

impl Tab {
    /// Navigates to a URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is closed or navigation fails.
    pub async fn goto(&self, url: &str) -> Result<()> {
        self.ensure_alive()?;
        debug!(tab_id = %self.inner.id, url = %url, "Navigating");
        self.inner
            .session
            .inner
            .backend
            .goto(self.session_id(), self.inner.id, url)
            .await
    }

    /// Returns the current URL.
    pub async fn current_url(&self) -> Result<String> {
        self.ensure_alive()?;
        self.inner
            .session
            .inner
            .backend
            .current_url(self.session_id(), self.inner.id)
            .await
    }

    /// Returns the current document title.
    ///
    /// Read-only and idempotent; safe to call repeatedly.
    pub async fn title(&self) -> Result<String> {
        self.ensure_alive()?;
        self.inner
            .session
            .inner
            .backend
            .title(self.session_id(), self.inner.id)
            .await
    }
}

// ============================================================================
// Tab - DOM Interaction
// ============================================================================

impl Tab {
    /// Clicks the first element matching the selector.
    pub async fn click(&self, selector: &str) -> Result<()> {
        self.ensure_alive()?;
        debug!(tab_id = %self.inner.id, selector = %selector, "Clicking");
        self.inner
            .session
            .inner
            .backend
            .click(self.session_id(), self.inner.id, selector)
            .await
    }

    /// Fills a form field with the given value.
    pub async fn fill(&self, selector: &str, value: &str) -> Result<()> {
        self.ensure_alive()?;
        debug!(tab_id = %self.inner.id, selector = %selector, "Filling field");
        self.inner
            .session
            .inner
            .backend
            .fill(self.session_id(), self.inner.id, selector, value)
            .await
    }

    /// Returns the text content of the first element matching the selector.
    ///
    /// Read-only and idempotent; safe to call repeatedly.
    pub async fn text_of(&self, selector: &str) -> Result<String> {
        self.ensure_alive()?;
        self.inner
            .session
            .inner
            .backend
            .text_of(self.session_id(), self.inner.id, selector)
            .await
    }

    /// Returns whether an element matching the selector is visible.
    ///
    /// Read-only and idempotent; safe to call repeatedly.
    pub async fn is_visible(&self, selector: &str) -> Result<bool> {
        self.ensure_alive()?;
        self.inner
            .session
            .inner
            .backend
            .is_visible(self.session_id(), self.inner.id, selector)
            .await
    }
}

// ============================================================================
// Tests
// ============================================================================
