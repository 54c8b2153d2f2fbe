//! # grocemate-core: Pure Business Logic for GroceMate
//!
//! This crate is the **heart** of GroceMate. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       GroceMate Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Frontend (Ionic webview)                       │   │
//! │  │    Products UI ──► Category Dropdown ──► Order Details UI      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Tauri IPC                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Tauri Commands                               │   │
//! │  │    list_products, list_categories, get_order, export_invoice  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ grocemate-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────────────┐ │   │
//! │  │   │  types   │ │  money   │ │ invoice  │ │ catalog/document │ │   │
//! │  │   │ Product  │ │  Money   │ │ Invoice  │ │ filter + render  │ │   │
//! │  │   │  Order   │ │ TaxRate  │ │ GST calc │ │                  │ │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────────────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                grocemate-store (Device Store)                   │   │
//! │  │              SQLite queries, migrations, repositories           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Category, Order, OrderItem, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`invoice`] - Delivery charge, GST and grand-total calculation
//! - [`catalog`] - Pure product filtering and category counts
//! - [`document`] - Fixed-layout invoice rendering for export
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in paise (i64) to avoid float errors
//! 4. **Total Over Inputs**: Decoding and status parsing degrade, never panic
//!
//! ## Example Usage
//!
//! ```rust
//! use grocemate_core::invoice::Invoice;
//! use grocemate_core::money::Money;
//!
//! // A ₹400.00 order: delivery is charged, GST is 5%
//! let invoice = Invoice::compute(Money::from_paise(40_000));
//! assert_eq!(invoice.delivery_charge.paise(), 4_000); // ₹40.00
//! assert_eq!(invoice.gst.paise(), 2_000);             // ₹20.00
//! assert_eq!(invoice.grand_total.paise(), 46_000);    // ₹460.00
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod document;
pub mod error;
pub mod invoice;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use grocemate_core::Money` instead of
// `use grocemate_core::money::Money`.

pub use catalog::{CategorySelect, ProductFilter};
pub use error::ValidationError;
pub use invoice::Invoice;
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity of a single order line.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Maximum length of a free-text search term.
pub const MAX_SEARCH_TERM_LEN: usize = 100;
