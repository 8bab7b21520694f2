//! Stabilization and interaction primitives for page objects.
//!
//! Every compound page-object action bottoms out in these helpers: interact,
//! then wait until the resulting page has stabilized before returning
//! control. A wait that expires fails with
//! [`Error::UnexpectedPageState`](crate::Error::UnexpectedPageState) — never
//! a partial result.

// ============================================================================
// Imports
// ============================================================================

use std::time::Duration;

use tokio::time::{Instant, sleep};
use tracing::debug;

use crate::config::HarnessConfig;
use crate::error::{Error, Result};
use crate::session::Tab;

// ============================================================================
// PageOps
// ============================================================================

/// Bounded-wait interaction helpers shared by all page objects.
#[derive(Debug, Clone, Copy)]
pub struct PageOps {
    /// Upper bound for one wait.
    wait_timeout: Duration,
    /// Re-check cadence inside a wait.
    poll_interval: Duration,
}

// ============================================================================
// PageOps - Constructors
// ============================================================================

impl PageOps {
    /// Creates ops with the config's wait bounds.
    #[inline]
    #[must_use]
    pub fn new(config: &HarnessConfig) -> Self {
        Self {
            wait_timeout: config.wait_timeout,
            poll_interval: config.poll_interval,
        }
    }

    /// Returns the wait timeout.
    #[inline]
    #[must_use]
    pub fn wait_timeout(&self) -> Duration {
        self.wait_timeout
    }
}

impl Default for PageOps {
    fn default() -> Self {
        Self::new(&HarnessConfig::new())
    }
}

// ============================================================================
// PageOps - Waits
// ============================================================================

impl PageOps {
    /// Waits until an element matching the selector is visible.
    pub async fn wait_visible(&self, tab: &Tab, selector: &str) -> Result<()> {
        self.wait_until(tab, selector, true).await
    }

    /// Waits until no element matching the selector is visible.
    ///
    /// Used for loading indicators that must clear before a page counts as
    /// settled.
    pub async fn wait_hidden(&self, tab: &Tab, selector: &str) -> Result<()> {
        self.wait_until(tab, selector, false).await
    }

    /// Polls visibility of the selector until it matches `expected`.
    async fn wait_until(&self, tab: &Tab, selector: &str, expected: bool) -> Result<()> {
        let deadline = Instant::now() + self.wait_timeout;
        loop {
            if tab.is_visible(selector).await? == expected {
                return Ok(());
            }
            if Instant::now() >= deadline {
                break;
            }
            sleep(self.poll_interval).await;
        }

        let condition = if expected {
            format!("{selector} visible")
        } else {
            format!("{selector} hidden")
        };
        debug!(tab_id = %tab.id(), condition = %condition, "Wait expired");
        Err(Error::unexpected_page_state(
            condition,
            self.wait_timeout.as_millis() as u64,
        ))
    }
}

// ============================================================================
// PageOps - Interactions
// ============================================================================

impl PageOps {
    /// Waits for the element, then clicks it.
    pub async fn click(&self, tab: &Tab, selector: &str) -> Result<()> {
        self.wait_visible(tab, selector).await?;
        tab.click(selector).await
    }

    /// Clicks an element and waits for a settle marker to appear.
    ///
    /// The marker is whatever identifies the resulting page as ready, e.g.
    /// its heading or table container.
    pub async fn click_and_settle(&self, tab: &Tab, selector: &str, settled: &str) -> Result<()> {
        self.click(tab, selector).await?;
        self.wait_visible(tab, settled).await
    }

    /// Waits for a form field, then fills it.
    pub async fn fill(&self, tab: &Tab, selector: &str, value: &str) -> Result<()> {
        self.wait_visible(tab, selector).await?;
        tab.fill(selector, value).await
    }

    /// Waits for an element, then returns its text content.
    pub async fn read_text(&self, tab: &Tab, selector: &str) -> Result<String> {
        self.wait_visible(tab, selector).await?;
        tab.text_of(selector).await
    }
}

// ============================================================================
// Tests
// ============================================================================
