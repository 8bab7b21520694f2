//! In-memory browser backend simulating a small storefront plus its admin
//! panel: customer login, a one-product checkout flow that records two email
//! log rows per confirmed order, and an email-log table with pagination,
//! sorting, and bulk delete.

use async_trait::async_trait;
use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use scenario_harness::{BrowserBackend, Error, Result, SessionId, TabId};

/// The exact message the email-log bulk delete reports on success.
pub const SUCCESSFUL_DELETE_MESSAGE: &str = "Successful deletion.";

/// The message reported when bulk delete is forced to fail.
pub const FAILED_DELETE_MESSAGE: &str = "An error occurred while deleting.";

// ============================================================================
// State
// ============================================================================

/// Store-wide state: what the system under test persists across contexts.
#[derive(Default)]
struct SiteState {
    /// Rows currently in the email log. Each confirmed order adds two.
    email_rows: usize,
    /// Orders confirmed so far.
    orders: usize,
    /// Message reported by the last bulk delete, if any.
    bulk_message: Option<String>,
}

/// One tab's view state.
#[derive(Default)]
struct TabState {
    url: String,
    /// Email-log rows shown per page.
    items_per_page: usize,
    /// Email-log sorted by descending ID.
    sort_desc: bool,
    /// All email-log rows selected for a bulk action.
    all_selected: bool,
}

/// Per-context (cookie sandbox) state.
#[derive(Default)]
struct ContextState {
    tabs: FxHashMap<TabId, TabState>,
    next_tab: u32,
    customer_logged_in: bool,
    cart_items: usize,
    address_done: bool,
    delivery_done: bool,
    payment: Option<String>,
    /// Last values typed into the visible login form.
    form_email: String,
    form_password: String,
}

#[derive(Default)]
struct MockState {
    contexts: FxHashMap<SessionId, ContextState>,
    contexts_created: usize,
    site: SiteState,
}

// ============================================================================
// MockBrowser
// ============================================================================

/// Deterministic in-memory [`BrowserBackend`].
pub struct MockBrowser {
    state: Mutex<MockState>,
    /// Maximum number of contexts `create_context` will allocate.
    context_limit: Option<usize>,
    /// Forces bulk delete to report [`FAILED_DELETE_MESSAGE`].
    fail_bulk_delete: bool,
}

impl MockBrowser {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MockState::default()),
            context_limit: None,
            fail_bulk_delete: false,
        }
    }

    /// A backend whose context pool is exhausted after `limit` allocations.
    pub fn with_context_limit(limit: usize) -> Self {
        Self {
            context_limit: Some(limit),
            ..Self::new()
        }
    }

    /// A backend whose bulk delete always reports a failure message.
    pub fn failing_bulk_delete() -> Self {
        Self {
            fail_bulk_delete: true,
            ..Self::new()
        }
    }

    // ------------------------------------------------------------------------
    // Observation helpers for tests
    // ------------------------------------------------------------------------

    pub fn open_contexts(&self) -> usize {
        self.state.lock().contexts.len()
    }

    pub fn open_tabs(&self, session: SessionId) -> usize {
        self.state
            .lock()
            .contexts
            .get(&session)
            .map_or(0, |c| c.tabs.len())
    }

    pub fn email_rows(&self) -> usize {
        self.state.lock().site.email_rows
    }

    pub fn orders_created(&self) -> usize {
        self.state.lock().site.orders
    }
}

impl Default for MockBrowser {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Page model
// ============================================================================

fn title_of(url: &str) -> &'static str {
    match url {
        "/admin/login" => "Authentication",
        "/admin/dashboard" => "Dashboard",
        "/admin/email" => "E-mail",
        "/shop" => "My Shop",
        "/shop/login" => "Login",
        "/shop/product/1" => "Product 1",
        "/shop/cart" => "Cart",
        "/shop/checkout" => "Checkout",
        "/shop/order-confirmation" => "Order confirmation",
        _ => "",
    }
}

fn element_visible(site: &SiteState, ctx: &ContextState, tab: &TabState, selector: &str) -> bool {
    let url = tab.url.as_str();
    match url {
        "/admin/login" => matches!(selector, "#email" | "#passwd" | "#submit-login"),
        u if u.starts_with("/admin") => match selector {
            "#subtab-AdminParentEmail" | "#subtab-AdminEmails" => true,
            "#email-grid" | "#select-all" | "#bulk-delete" | "#email-count"
            | "#pagination-label" | "#paginator-select" | "#email-ids" | "#sort-id-desc" => {
                u == "/admin/email"
            }
            "#alert-success" => u == "/admin/email" && site.bulk_message.is_some(),
            _ => false,
        },
        u if u.starts_with("/shop") => match selector {
            "#header-sign-in" => !ctx.customer_logged_in,
            "#account-link" | "#header-sign-out" => ctx.customer_logged_in,
            "#home-banner" | "#product-1" => u == "/shop",
            "#login-email" | "#login-passwd" | "#login-submit" => u == "/shop/login",
            "#add-to-cart" => u == "/shop/product/1",
            "#proceed-to-checkout-modal" => u == "/shop/product/1" && ctx.cart_items > 0,
            "#proceed-to-checkout" => u == "/shop/cart",
            "#confirm-address" => u == "/shop/checkout" && !ctx.address_done,
            "#confirm-delivery" => u == "/shop/checkout" && ctx.address_done && !ctx.delivery_done,
            "#pay-by-wire" => u == "/shop/checkout" && ctx.delivery_done && ctx.payment.is_none(),
            "#confirm-order" => u == "/shop/checkout" && ctx.payment.is_some(),
            "#order-confirmation-title" => u == "/shop/order-confirmation",
            _ => false,
        },
        _ => false,
    }
}

// ============================================================================
// Lock helpers
// ============================================================================

impl MockState {
    fn context(&mut self, session: SessionId) -> Result<&mut ContextState> {
        self.contexts
            .get_mut(&session)
            .ok_or_else(|| Error::backend(format!("unknown context {session}")))
    }
}

fn tab_of(ctx: &ContextState, tab: TabId) -> Result<&TabState> {
    ctx.tabs
        .get(&tab)
        .ok_or_else(|| Error::backend(format!("unknown tab {tab}")))
}

fn tab_of_mut(ctx: &mut ContextState, tab: TabId) -> Result<&mut TabState> {
    ctx.tabs
        .get_mut(&tab)
        .ok_or_else(|| Error::backend(format!("unknown tab {tab}")))
}

// ============================================================================
// BrowserBackend implementation
// ============================================================================

#[async_trait]
impl BrowserBackend for MockBrowser {
    async fn create_context(&self) -> Result<SessionId> {
        let mut state = self.state.lock();
        if let Some(limit) = self.context_limit
            && state.contexts_created >= limit
        {
            return Err(Error::backend("browsing context pool exhausted"));
        }
        state.contexts_created += 1;
        let id = SessionId::new();
        state.contexts.insert(id, ContextState::default());
        Ok(id)
    }

    async fn close_context(&self, session: SessionId) -> Result<()> {
        let mut state = self.state.lock();
        state
            .contexts
            .remove(&session)
            .map(|_| ())
            .ok_or_else(|| Error::backend(format!("unknown context {session}")))
    }

    async fn open_tab(&self, session: SessionId) -> Result<TabId> {
        let mut state = self.state.lock();
        let ctx = state.context(session)?;
        ctx.next_tab += 1;
        let id = TabId::new(ctx.next_tab)
            .ok_or_else(|| Error::backend("tab id overflow"))?;
        ctx.tabs.insert(
            id,
            TabState {
                url: "about:blank".to_string(),
                items_per_page: 10,
                ..TabState::default()
            },
        );
        Ok(id)
    }

    async fn close_tab(&self, session: SessionId, tab: TabId) -> Result<()> {
        let mut state = self.state.lock();
        let ctx = state.context(session)?;
        ctx.tabs
            .remove(&tab)
            .map(|_| ())
            .ok_or_else(|| Error::backend(format!("unknown tab {tab}")))
    }

    async fn goto(&self, session: SessionId, tab: TabId, url: &str) -> Result<()> {
        let mut state = self.state.lock();
        let ctx = state.context(session)?;
        tab_of_mut(ctx, tab)?.url = url.to_string();
        Ok(())
    }

    async fn current_url(&self, session: SessionId, tab: TabId) -> Result<String> {
        let mut state = self.state.lock();
        let ctx = state.context(session)?;
        Ok(tab_of(ctx, tab)?.url.clone())
    }

    async fn title(&self, session: SessionId, tab: TabId) -> Result<String> {
        let mut state = self.state.lock();
        let ctx = state.context(session)?;
        Ok(title_of(&tab_of(ctx, tab)?.url).to_string())
    }

    async fn is_visible(&self, session: SessionId, tab: TabId, selector: &str) -> Result<bool> {
        let mut state = self.state.lock();
        let MockState { contexts, site, .. } = &mut *state;
        let ctx = contexts
            .get(&session)
            .ok_or_else(|| Error::backend(format!("unknown context {session}")))?;
        Ok(element_visible(site, ctx, tab_of(ctx, tab)?, selector))
    }

    async fn click(&self, session: SessionId, tab: TabId, selector: &str) -> Result<()> {
        let mut state = self.state.lock();
        let MockState { contexts, site, .. } = &mut *state;
        let ctx = contexts
            .get_mut(&session)
            .ok_or_else(|| Error::backend(format!("unknown context {session}")))?;

        {
            let tab_state = tab_of(ctx, tab)?;
            if !element_visible(site, ctx, tab_state, selector) {
                return Err(Error::backend(format!(
                    "element {selector} not interactable on {}",
                    tab_state.url
                )));
            }
        }

        let url = tab_of(ctx, tab)?.url.clone();
        match (url.as_str(), selector) {
            ("/admin/login", "#submit-login") => {
                if ctx.form_email.is_empty() || ctx.form_password.is_empty() {
                    return Err(Error::backend("empty admin credentials"));
                }
                tab_of_mut(ctx, tab)?.url = "/admin/dashboard".to_string();
            }
            (_, "#subtab-AdminParentEmail") => {} // expands the menu
            (_, "#subtab-AdminEmails") => {
                tab_of_mut(ctx, tab)?.url = "/admin/email".to_string();
            }
            ("/admin/email", "#select-all") => tab_of_mut(ctx, tab)?.all_selected = true,
            ("/admin/email", "#sort-id-desc") => tab_of_mut(ctx, tab)?.sort_desc = true,
            ("/admin/email", "#bulk-delete") => {
                let selected = tab_of(ctx, tab)?.all_selected;
                if self.fail_bulk_delete {
                    site.bulk_message = Some(FAILED_DELETE_MESSAGE.to_string());
                } else if selected {
                    site.email_rows = 0;
                    site.bulk_message = Some(SUCCESSFUL_DELETE_MESSAGE.to_string());
                } else {
                    site.bulk_message = Some("No rows selected.".to_string());
                }
            }
            (_, "#header-sign-in") => {
                tab_of_mut(ctx, tab)?.url = "/shop/login".to_string();
            }
            ("/shop/login", "#login-submit") => {
                if ctx.form_email.is_empty() || ctx.form_password.is_empty() {
                    return Err(Error::backend("empty customer credentials"));
                }
                ctx.customer_logged_in = true;
                tab_of_mut(ctx, tab)?.url = "/shop".to_string();
            }
            (_, "#header-sign-out") => {
                ctx.customer_logged_in = false;
                tab_of_mut(ctx, tab)?.url = "/shop".to_string();
            }
            ("/shop", "#product-1") => {
                tab_of_mut(ctx, tab)?.url = "/shop/product/1".to_string();
            }
            ("/shop/product/1", "#add-to-cart") => ctx.cart_items += 1,
            ("/shop/product/1", "#proceed-to-checkout-modal") => {
                tab_of_mut(ctx, tab)?.url = "/shop/cart".to_string();
            }
            ("/shop/cart", "#proceed-to-checkout") => {
                tab_of_mut(ctx, tab)?.url = "/shop/checkout".to_string();
            }
            ("/shop/checkout", "#confirm-address") => ctx.address_done = true,
            ("/shop/checkout", "#confirm-delivery") => ctx.delivery_done = true,
            ("/shop/checkout", "#pay-by-wire") => ctx.payment = Some("wire".to_string()),
            ("/shop/checkout", "#confirm-order") => {
                site.orders += 1;
                site.email_rows += 2;
                ctx.cart_items = 0;
                ctx.address_done = false;
                ctx.delivery_done = false;
                ctx.payment = None;
                tab_of_mut(ctx, tab)?.url = "/shop/order-confirmation".to_string();
            }
            (url, selector) => {
                return Err(Error::backend(format!(
                    "no click behavior for {selector} on {url}"
                )));
            }
        }
        Ok(())
    }

    async fn fill(
        &self,
        session: SessionId,
        tab: TabId,
        selector: &str,
        value: &str,
    ) -> Result<()> {
        let mut state = self.state.lock();
        let ctx = state.context(session)?;
        let url = tab_of(ctx, tab)?.url.clone();
        match (url.as_str(), selector) {
            ("/admin/login", "#email") | ("/shop/login", "#login-email") => {
                ctx.form_email = value.to_string();
            }
            ("/admin/login", "#passwd") | ("/shop/login", "#login-passwd") => {
                ctx.form_password = value.to_string();
            }
            ("/admin/email", "#paginator-select") => {
                let limit = value
                    .parse()
                    .map_err(|_| Error::backend(format!("bad page size {value:?}")))?;
                tab_of_mut(ctx, tab)?.items_per_page = limit;
            }
            (url, selector) => {
                return Err(Error::backend(format!(
                    "no fillable {selector} on {url}"
                )));
            }
        }
        Ok(())
    }

    async fn text_of(&self, session: SessionId, tab: TabId, selector: &str) -> Result<String> {
        let mut state = self.state.lock();
        let MockState { contexts, site, .. } = &mut *state;
        let ctx = contexts
            .get(&session)
            .ok_or_else(|| Error::backend(format!("unknown context {session}")))?;
        let tab_state = tab_of(ctx, tab)?;

        match selector {
            "#order-confirmation-title" => Ok("Your order is confirmed".to_string()),
            "#alert-success" => Ok(site.bulk_message.clone().unwrap_or_default()),
            "#email-count" => Ok(site.email_rows.to_string()),
            "#pagination-label" => Ok(format!(
                "1-{} of {}",
                tab_state.items_per_page.min(site.email_rows),
                site.email_rows
            )),
            "#email-ids" => {
                let mut ids: Vec<usize> = (1..=site.email_rows).collect();
                if tab_state.sort_desc {
                    ids.reverse();
                }
                Ok(ids
                    .into_iter()
                    .take(tab_state.items_per_page)
                    .map(|id| id.to_string())
                    .collect::<Vec<_>>()
                    .join(","))
            }
            _ => Err(Error::backend(format!(
                "no text for {selector} on {}",
                tab_state.url
            ))),
        }
    }
}
