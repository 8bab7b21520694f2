//! Session and tab lifecycle management.
//!
//! [`SessionManager`] is the only component that creates or destroys
//! browsing contexts and tabs. Scenarios acquire a session through it at
//! entry and release it at exit; the registry it keeps is what makes "no
//! orphaned session survives a run" checkable.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use tracing::{debug, info, warn};

use crate::backend::BrowserBackend;
use crate::error::{Error, Result};
use crate::identifiers::SessionId;

use super::{Session, Tab};

// ============================================================================
// SessionManager
// ============================================================================

/// Creates and tears down isolated browsing contexts and their tabs.
pub struct SessionManager {
    /// The browser-automation backend.
    backend: Arc<dyn BrowserBackend>,
    /// Sessions created and not yet destroyed.
    sessions: Mutex<FxHashMap<SessionId, Session>>,
}

impl fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionManager")
            .field("active_sessions", &self.active_sessions())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// SessionManager - Constructor
// ============================================================================

impl SessionManager {
    /// Creates a manager over the given backend.
    #[must_use]
    pub fn new(backend: Arc<dyn BrowserBackend>) -> Self {
        Self {
            backend,
            sessions: Mutex::new(FxHashMap::default()),
        }
    }
}

// ============================================================================
// SessionManager - Session Lifecycle
// ============================================================================

impl SessionManager {
    /// Allocates a fresh isolated browsing context.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::SessionCreation`] if the backend refuses, e.g.
    /// because the host browser handle is invalid or exhausted.
    pub async fn create_session(&self) -> Result<Session> {
        let id = self
            .backend
            .create_context()
            .await
            .map_err(|e| Error::session_creation(e.to_string()))?;

        let session = Session::new(id, Arc::clone(&self.backend));
        self.sessions.lock().insert(id, session.clone());
        info!(session_id = %id, "Session created");
        Ok(session)
    }

    /// Destroys a session: closes all remaining tabs and releases the
    /// context.
    ///
    /// Best-effort cleanup: never fails, logs what could not be released.
    /// Idempotent; calling it on an already-destroyed session, or after some
    /// tabs were closed individually, is a no-op for the parts already gone.
    pub async fn destroy_session(&self, session: &Session) {
        if !session.mark_closed() {
            debug!(session_id = %session.id(), "Session already destroyed");
            return;
        }

        let remaining: Vec<_> = session.inner.tabs.lock().drain(..).collect();
        for tab_id in remaining {
            if let Err(e) = self.backend.close_tab(session.id(), tab_id).await {
                warn!(session_id = %session.id(), tab_id = %tab_id, error = %e, "Failed to close tab during teardown");
            }
        }

        if let Err(e) = self.backend.close_context(session.id()).await {
            warn!(session_id = %session.id(), error = %e, "Failed to release browsing context");
        }

        self.sessions.lock().remove(&session.id());
        info!(session_id = %session.id(), "Session destroyed");
    }

    /// Returns the number of sessions created and not yet destroyed.
    #[inline]
    #[must_use]
    pub fn active_sessions(&self) -> usize {
        self.sessions.lock().len()
    }
}

// ============================================================================
// SessionManager - Tab Lifecycle
// ============================================================================

impl SessionManager {
    /// Opens a new tab in the given session.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::TabCreation`] if the session is already closed or
    /// the backend refuses.
    pub async fn open_tab(&self, session: &Session) -> Result<Tab> {
        if session.is_closed() {
            return Err(Error::tab_creation(session.id(), "session already closed"));
        }

        let tab_id = self
            .backend
            .open_tab(session.id())
            .await
            .map_err(|e| Error::tab_creation(session.id(), e.to_string()))?;

        session.inner.tabs.lock().push(tab_id);
        debug!(session_id = %session.id(), tab_id = %tab_id, "Tab opened");
        Ok(Tab::new(session.clone(), tab_id))
    }

    /// Closes the given tab and selects a remaining tab as the new active
    /// one.
    ///
    /// `index_hint` picks the remaining tab by position in creation order,
    /// clamped to the last tab. Returns `None` when no tabs remain.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::SessionClosed`] on a destroyed session,
    /// [`Error::TabNotFound`] if the tab was already closed, or the backend's
    /// error if the close itself fails.
    pub async fn close_tab(
        &self,
        session: &Session,
        tab: Tab,
        index_hint: usize,
    ) -> Result<Option<Tab>> {
        if session.is_closed() {
            return Err(Error::session_closed(session.id()));
        }

        {
            let tabs = session.inner.tabs.lock();
            if !tabs.contains(&tab.id()) {
                return Err(Error::tab_not_found(tab.id()));
            }
        }

        self.backend.close_tab(session.id(), tab.id()).await?;

        let next = {
            let mut tabs = session.inner.tabs.lock();
            tabs.retain(|id| *id != tab.id());
            if tabs.is_empty() {
                None
            } else {
                Some(tabs[index_hint.min(tabs.len() - 1)])
            }
        };

        debug!(session_id = %session.id(), tab_id = %tab.id(), "Tab closed");
        Ok(next.map(|id| Tab::new(session.clone(), id)))
    }
}

// ============================================================================
// Tests
// ============================================================================
