//! Demo fixture data, consumed read-only by scenarios.

/// A payment method offered at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentMethod {
    pub name: &'static str,
    pub module_name: &'static str,
}

/// Bank wire payment, the method the order scenarios pay with.
pub const WIRE_PAYMENT: PaymentMethod = PaymentMethod {
    name: "Wire payment",
    module_name: "wire",
};

/// A customer account on the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomerAccount {
    pub email: &'static str,
    pub password: &'static str,
}

/// The default demo customer.
pub const DEFAULT_ACCOUNT: CustomerAccount = CustomerAccount {
    email: "pub@example.test",
    password: "123456789",
};

/// The admin-panel account.
pub const ADMIN_ACCOUNT: CustomerAccount = CustomerAccount {
    email: "demo@example.test",
    password: "demo_admin_1234",
};
