//! The [`Session`] handle: one isolated browsing context.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

use crate::backend::BrowserBackend;
use crate::identifiers::{SessionId, TabId};

// ============================================================================
// Types
// ============================================================================

/// Internal shared state for a session.
pub(crate) struct SessionInner {
    /// Session ID.
    pub(crate) id: SessionId,
    /// Backend the session lives in.
    pub(crate) backend: Arc<dyn BrowserBackend>,
    /// Set once the session has been destroyed.
    pub(crate) closed: AtomicBool,
    /// IDs of the tabs currently open in this session, in creation order.
    pub(crate) tabs: Mutex<Vec<TabId>>,
}

// ============================================================================
// Session
// ============================================================================

/// A handle to an isolated browsing context.
///
/// Sessions are created and destroyed exclusively by
/// [`SessionManager`](crate::session::SessionManager). The handle is cheap to
/// clone; all clones observe the same lifecycle state, so a destroyed session
/// rejects further tab interaction through any clone.
#[derive(Clone)]
pub struct Session {
    pub(crate) inner: Arc<SessionInner>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.inner.id)
            .field("closed", &self.is_closed())
            .field("tab_count", &self.tab_count())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Session - Constructor
// ============================================================================

impl Session {
    /// Creates a new session handle.
    pub(crate) fn new(id: SessionId, backend: Arc<dyn BrowserBackend>) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                id,
                backend,
                closed: AtomicBool::new(false),
                tabs: Mutex::new(Vec::new()),
            }),
        }
    }
}

// ============================================================================
// Session - Accessors
// ============================================================================

impl Session {
    /// Returns the session ID.
    #[inline]
    #[must_use]
    pub fn id(&self) -> SessionId {
        self.inner.id
    }

    /// Returns `true` once the session has been destroyed.
    #[inline]
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.inner.closed.load(Ordering::Acquire)
    }

    /// Returns the number of tabs currently open in this session.
    #[inline]
    #[must_use]
    pub fn tab_count(&self) -> usize {
        self.inner.tabs.lock().len()
    }

    /// Marks the session closed.
    ///
    /// Returns `true` if this call performed the transition, `false` if the
    /// session was already closed.
    pub(crate) fn mark_closed(&self) -> bool {
        !self.inner.closed.swap(true, Ordering::AcqRel)
    }
}

// ============================================================================
// Tests
// ============================================================================
