//! Page-object abstraction layer.
//!
//! A page object binds a semantic screen name to domain-level operations
//! ("log in as customer", "delete all rows") instead of raw UI manipulation.
//! The harness ships the abstraction, not a selector catalog:
//!
//! | Item | Description |
//! |------|-------------|
//! | [`PageObject`] | Contract every screen wrapper implements |
//! | [`TablePage`] | Extra contract for list/table screens with bulk actions |
//! | [`PageOps`] | Bounded-wait primitives compound actions are built from |
//!
//! Concrete page objects are stateless by value: they hold selectors and
//! expected constants, receive the active [`Tab`](crate::session::Tab) as an
//! argument, and return either a derived value or an updated tab handle.

// ============================================================================
// Submodules
// ============================================================================

/// Page-object contracts.
pub mod object;

/// Stabilization and interaction primitives.
pub mod ops;

// ============================================================================
// Re-exports
// ============================================================================

pub use object::{PageObject, TablePage};
pub use ops::PageOps;
