//! Concrete page objects over the mock storefront and admin panel.
//!
//! These are the scenario-side wrappers the harness's page-object layer is
//! consumed through: each binds one screen's selectors and expected
//! constants, receives the active tab as an argument, and builds its
//! compound actions from [`PageOps`] bounded waits.

use async_trait::async_trait;
use scenario_harness::{PageObject, PageOps, Result, Tab, TablePage};

use super::fixtures::CustomerAccount;
use super::mock::SUCCESSFUL_DELETE_MESSAGE;

// ============================================================================
// Admin login
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct AdminLoginPage {
    ops: PageOps,
}

impl AdminLoginPage {
    pub fn new(ops: PageOps) -> Self {
        Self { ops }
    }

    /// Signs in to the admin panel; settles on the dashboard.
    pub async fn login(&self, tab: &Tab, account: CustomerAccount) -> Result<()> {
        self.ops.fill(tab, "#email", account.email).await?;
        self.ops.fill(tab, "#passwd", account.password).await?;
        self.ops
            .click_and_settle(tab, "#submit-login", "#subtab-AdminParentEmail")
            .await
    }
}

impl PageObject for AdminLoginPage {
    fn name(&self) -> &str {
        "admin login"
    }

    fn page_title(&self) -> &str {
        "Authentication"
    }
}

// ============================================================================
// Admin dashboard
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct DashboardPage {
    ops: PageOps,
}

impl DashboardPage {
    pub fn new(ops: PageOps) -> Self {
        Self { ops }
    }

    /// Opens Advanced Parameters > E-mail; settles on the log table.
    pub async fn go_to_email_logs(&self, tab: &Tab) -> Result<()> {
        self.ops.click(tab, "#subtab-AdminParentEmail").await?;
        self.ops
            .click_and_settle(tab, "#subtab-AdminEmails", "#email-grid")
            .await
    }
}

impl PageObject for DashboardPage {
    fn name(&self) -> &str {
        "dashboard"
    }

    fn page_title(&self) -> &str {
        "Dashboard"
    }
}

// ============================================================================
// Storefront home
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct HomePage {
    ops: PageOps,
}

impl HomePage {
    pub fn new(ops: PageOps) -> Self {
        Self { ops }
    }

    pub async fn go_to_login_page(&self, tab: &Tab) -> Result<()> {
        self.ops
            .click_and_settle(tab, "#header-sign-in", "#login-submit")
            .await
    }

    pub async fn go_to_first_product(&self, tab: &Tab) -> Result<()> {
        self.ops
            .click_and_settle(tab, "#product-1", "#add-to-cart")
            .await
    }
}

impl PageObject for HomePage {
    fn name(&self) -> &str {
        "storefront home"
    }

    fn page_title(&self) -> &str {
        "My Shop"
    }
}

// ============================================================================
// Storefront login
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct FoLoginPage {
    ops: PageOps,
}

impl FoLoginPage {
    pub fn new(ops: PageOps) -> Self {
        Self { ops }
    }

    /// Signs in as a customer; settles back on the home page.
    pub async fn customer_login(&self, tab: &Tab, account: CustomerAccount) -> Result<()> {
        self.ops.fill(tab, "#login-email", account.email).await?;
        self.ops
            .fill(tab, "#login-passwd", account.password)
            .await?;
        self.ops
            .click_and_settle(tab, "#login-submit", "#account-link")
            .await
    }

    pub async fn is_customer_connected(&self, tab: &Tab) -> Result<bool> {
        tab.is_visible("#account-link").await
    }

    pub async fn go_to_home_page(&self, tab: &Tab) -> Result<()> {
        tab.goto("/shop").await?;
        self.ops.wait_visible(tab, "#home-banner").await
    }
}

impl PageObject for FoLoginPage {
    fn name(&self) -> &str {
        "storefront login"
    }

    fn page_title(&self) -> &str {
        "Login"
    }
}

// ============================================================================
// Product / cart / checkout
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct ProductPage {
    ops: PageOps,
}

impl ProductPage {
    pub fn new(ops: PageOps) -> Self {
        Self { ops }
    }

    /// Adds the product to the cart and proceeds to the cart screen.
    pub async fn add_product_to_cart(&self, tab: &Tab) -> Result<()> {
        self.ops.click(tab, "#add-to-cart").await?;
        self.ops
            .click_and_settle(tab, "#proceed-to-checkout-modal", "#proceed-to-checkout")
            .await
    }
}

impl PageObject for ProductPage {
    fn name(&self) -> &str {
        "product"
    }

    fn page_title(&self) -> &str {
        "Product 1"
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CartPage {
    ops: PageOps,
}

impl CartPage {
    pub fn new(ops: PageOps) -> Self {
        Self { ops }
    }

    pub async fn proceed_to_checkout(&self, tab: &Tab) -> Result<()> {
        self.ops
            .click_and_settle(tab, "#proceed-to-checkout", "#confirm-address")
            .await
    }
}

impl PageObject for CartPage {
    fn name(&self) -> &str {
        "cart"
    }

    fn page_title(&self) -> &str {
        "Cart"
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CheckoutPage {
    ops: PageOps,
}

impl CheckoutPage {
    pub fn new(ops: PageOps) -> Self {
        Self { ops }
    }

    /// Confirms the address step; `true` when the delivery step is reachable.
    pub async fn go_to_delivery_step(&self, tab: &Tab) -> Result<bool> {
        self.ops.click(tab, "#confirm-address").await?;
        Ok(self.ops.wait_visible(tab, "#confirm-delivery").await.is_ok())
    }

    /// Confirms the delivery step; `true` when the payment step is reachable.
    pub async fn go_to_payment_step(&self, tab: &Tab) -> Result<bool> {
        self.ops.click(tab, "#confirm-delivery").await?;
        Ok(self.ops.wait_visible(tab, "#pay-by-wire").await.is_ok())
    }

    /// Picks a payment method and confirms the order.
    pub async fn choose_payment_and_order(&self, tab: &Tab, module_name: &str) -> Result<()> {
        self.ops
            .click(tab, &format!("#pay-by-{module_name}"))
            .await?;
        self.ops
            .click_and_settle(tab, "#confirm-order", "#order-confirmation-title")
            .await
    }
}

impl PageObject for CheckoutPage {
    fn name(&self) -> &str {
        "checkout"
    }

    fn page_title(&self) -> &str {
        "Checkout"
    }
}

// ============================================================================
// Order confirmation
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct OrderConfirmationPage {
    ops: PageOps,
}

impl OrderConfirmationPage {
    /// Expected confirmation card title.
    pub const CARD_TITLE: &'static str = "Your order is confirmed";

    pub fn new(ops: PageOps) -> Self {
        Self { ops }
    }

    pub async fn get_card_title(&self, tab: &Tab) -> Result<String> {
        self.ops.read_text(tab, "#order-confirmation-title").await
    }

    /// Signs the customer out; settles back on the home page.
    pub async fn logout(&self, tab: &Tab) -> Result<()> {
        self.ops
            .click_and_settle(tab, "#header-sign-out", "#header-sign-in")
            .await
    }

    pub async fn is_customer_connected(&self, tab: &Tab) -> Result<bool> {
        tab.is_visible("#account-link").await
    }
}

impl PageObject for OrderConfirmationPage {
    fn name(&self) -> &str {
        "order confirmation"
    }

    fn page_title(&self) -> &str {
        "Order confirmation"
    }
}

// ============================================================================
// Email log table
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct EmailLogPage {
    ops: PageOps,
}

impl EmailLogPage {
    pub fn new(ops: PageOps) -> Self {
        Self { ops }
    }

    pub async fn rows_count(&self, tab: &Tab) -> Result<usize> {
        let text = self.ops.read_text(tab, "#email-count").await?;
        text.parse()
            .map_err(|_| scenario_harness::Error::backend(format!("bad row count {text:?}")))
    }

    /// Changes the number of rows shown per page.
    pub async fn select_items_per_page(&self, tab: &Tab, limit: usize) -> Result<()> {
        self.ops
            .fill(tab, "#paginator-select", &limit.to_string())
            .await
    }

    pub async fn pagination_label(&self, tab: &Tab) -> Result<String> {
        self.ops.read_text(tab, "#pagination-label").await
    }

    /// Sorts the table by descending ID.
    pub async fn sort_by_id_descending(&self, tab: &Tab) -> Result<()> {
        self.ops.click(tab, "#sort-id-desc").await
    }

    /// Returns the visible row IDs, in display order.
    pub async fn visible_ids(&self, tab: &Tab) -> Result<Vec<usize>> {
        let text = self.ops.read_text(tab, "#email-ids").await?;
        if text.is_empty() {
            return Ok(Vec::new());
        }
        text.split(',')
            .map(|id| {
                id.parse()
                    .map_err(|_| scenario_harness::Error::backend(format!("bad row id {id:?}")))
            })
            .collect()
    }
}

impl PageObject for EmailLogPage {
    fn name(&self) -> &str {
        "email logs"
    }

    fn page_title(&self) -> &str {
        "E-mail"
    }
}

#[async_trait]
impl TablePage for EmailLogPage {
    fn success_message(&self) -> &str {
        SUCCESSFUL_DELETE_MESSAGE
    }

    async fn bulk_delete_all(&self, tab: &Tab) -> Result<String> {
        self.ops.click(tab, "#select-all").await?;
        self.ops.click(tab, "#bulk-delete").await?;
        self.ops.read_text(tab, "#alert-success").await
    }
}
