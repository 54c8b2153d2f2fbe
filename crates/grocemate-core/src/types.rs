//! # Domain Types
//!
//! Core domain types used throughout GroceMate.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │     Order       │   │   OrderItem     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id (internal)  │   │  name           │       │
//! │  │  name           │   │  order_number   │   │  quantity       │       │
//! │  │  price_paise    │   │  status         │   │  unit_price     │       │
//! │  │  category?      │   │  subtotal_paise │   └─────────────────┘       │
//! │  │  featured       │   │  items          │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Category     │   │   OrderStatus   │   │ DeliveryAddress │       │
//! │  │  id, name       │   │  Pending..      │   │  line1, city..  │       │
//! │  └─────────────────┘   │  Unknown (deg.) │   └─────────────────┘       │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Orders carry two identifiers:
//! - `id`: internal identifier, used for storage relations
//! - `order_number`: human-facing number printed on the invoice
//!
//! Lookups accept either (see `grocemate-store`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 500 bps = 5% (the flat GST rate in this domain)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Category
// =============================================================================

/// A product category. Immutable, fetched once per session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Category {
    /// Unique identifier.
    pub id: String,

    /// Display name shown in the category dropdown.
    pub name: String,
}

// =============================================================================
// Product
// =============================================================================

/// A catalog product.
///
/// Immutable once fetched; the catalog is replaced wholesale on re-fetch.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier.
    pub id: String,

    /// Display name shown on the product card.
    pub name: String,

    /// Unit price in paise (smallest currency unit).
    pub price_paise: i64,

    /// Image reference (URL or asset path) rendered by the frontend.
    pub image: String,

    /// Category this product belongs to, if any.
    pub category: Option<Category>,

    /// Whether the product is flagged for promotional display.
    #[serde(default)]
    pub featured: bool,

    /// When the product was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Returns the unit price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_paise(self.price_paise)
    }
}

// =============================================================================
// Order Status
// =============================================================================

/// Lifecycle status of an order.
///
/// ## Degradation Rule
/// The stored status is free text written by the external checkout process.
/// Parsing is total: anything outside the fixed set becomes [`OrderStatus::Unknown`]
/// and is presented as such, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Order placed, awaiting confirmation.
    Pending,
    /// Order confirmed and being prepared.
    Processing,
    /// Order handed to delivery.
    Shipped,
    /// Order delivered to the customer.
    Delivered,
    /// Order cancelled.
    Cancelled,
    /// Unrecognized stored value; degraded presentation.
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    /// Parses a stored status string, case-insensitively.
    ///
    /// ## Example
    /// ```rust
    /// use grocemate_core::types::OrderStatus;
    ///
    /// assert_eq!(OrderStatus::parse("Delivered"), OrderStatus::Delivered);
    /// assert_eq!(OrderStatus::parse("on-hold"), OrderStatus::Unknown);
    /// ```
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "pending" => OrderStatus::Pending,
            "processing" => OrderStatus::Processing,
            "shipped" => OrderStatus::Shipped,
            "delivered" => OrderStatus::Delivered,
            "cancelled" => OrderStatus::Cancelled,
            _ => OrderStatus::Unknown,
        }
    }

    /// Canonical lowercase label for storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Unknown => "unknown",
        }
    }

    /// Badge color token for the frontend status chip.
    pub fn badge_color(&self) -> &'static str {
        match self {
            OrderStatus::Delivered => "success",
            OrderStatus::Processing => "warning",
            OrderStatus::Shipped => "tertiary",
            OrderStatus::Cancelled => "danger",
            OrderStatus::Pending | OrderStatus::Unknown => "medium",
        }
    }

    /// Position on the pending → processing → shipped → delivered progress
    /// track, or `None` for statuses that are off the track.
    pub fn progress_index(&self) -> Option<u8> {
        match self {
            OrderStatus::Pending => Some(0),
            OrderStatus::Processing => Some(1),
            OrderStatus::Shipped => Some(2),
            OrderStatus::Delivered => Some(3),
            OrderStatus::Cancelled | OrderStatus::Unknown => None,
        }
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Delivery Address
// =============================================================================

/// Delivery address attached to an order by the checkout process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DeliveryAddress {
    pub line1: String,
    pub line2: Option<String>,
    pub city: String,
    pub state: String,
    pub pincode: String,
    /// Contact phone for the delivery.
    pub phone: Option<String>,
}

/// Single-line rendering used on the invoice:
/// `line1, line2, city, state pincode`.
impl fmt::Display for DeliveryAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, ", self.line1)?;
        if let Some(line2) = &self.line2 {
            write!(f, "{}, ", line2)?;
        }
        write!(f, "{}, {} {}", self.city, self.state, self.pincode)
    }
}

// =============================================================================
// Order
// =============================================================================

/// A line item in an order.
///
/// The name and unit price are snapshots frozen by the checkout process;
/// they do not follow later catalog edits.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderItem {
    /// Product name at time of ordering (frozen).
    pub name: String,

    /// Quantity ordered. Invariant: >= 1.
    pub quantity: i64,

    /// Unit price in paise at time of ordering (frozen).
    pub unit_price_paise: i64,
}

impl OrderItem {
    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_paise(self.unit_price_paise)
    }

    /// Per-line subtotal: unit price × quantity.
    #[inline]
    pub fn line_subtotal(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }
}

/// A customer order, created by the external checkout process.
///
/// Read-only in this codebase; lifecycle ends when the underlying store
/// removes it externally.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Order {
    /// Internal identifier.
    pub id: String,

    /// Human-facing order number printed on the invoice.
    pub order_number: String,

    /// When the order was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// Line items, order preserved.
    pub items: Vec<OrderItem>,

    /// Subtotal in paise as stored by checkout.
    ///
    /// Trusted as provided: the sum of item lines is NOT recomputed here.
    /// Silently "fixing" a discrepancy would change recorded invoices.
    pub subtotal_paise: i64,

    /// Current lifecycle status.
    pub status: OrderStatus,

    /// Delivery address, when checkout captured one.
    pub delivery_address: Option<DeliveryAddress>,

    /// Payment method label, when checkout captured one.
    pub payment_method: Option<String>,

    /// Free-text special instructions.
    pub notes: Option<String>,
}

impl Order {
    /// Returns the stored subtotal as Money.
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_paise(self.subtotal_paise)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_fixed_set() {
        assert_eq!(OrderStatus::parse("pending"), OrderStatus::Pending);
        assert_eq!(OrderStatus::parse("Processing"), OrderStatus::Processing);
        assert_eq!(OrderStatus::parse("SHIPPED"), OrderStatus::Shipped);
        assert_eq!(OrderStatus::parse(" delivered "), OrderStatus::Delivered);
        assert_eq!(OrderStatus::parse("cancelled"), OrderStatus::Cancelled);
    }

    #[test]
    fn test_status_parse_degrades_to_unknown() {
        assert_eq!(OrderStatus::parse("on-hold"), OrderStatus::Unknown);
        assert_eq!(OrderStatus::parse(""), OrderStatus::Unknown);
        assert_eq!(OrderStatus::Unknown.badge_color(), "medium");
    }

    #[test]
    fn test_status_progress_track() {
        assert_eq!(OrderStatus::Pending.progress_index(), Some(0));
        assert_eq!(OrderStatus::Delivered.progress_index(), Some(3));
        assert_eq!(OrderStatus::Cancelled.progress_index(), None);
        assert_eq!(OrderStatus::Unknown.progress_index(), None);
    }

    #[test]
    fn test_order_item_line_subtotal() {
        let item = OrderItem {
            name: "Basmati Rice 1kg".to_string(),
            quantity: 3,
            unit_price_paise: 12_550, // ₹125.50
        };
        assert_eq!(item.line_subtotal().paise(), 37_650); // ₹376.50
    }

    #[test]
    fn test_delivery_address_display() {
        let full = DeliveryAddress {
            line1: "12 MG Road".to_string(),
            line2: Some("Flat 4B".to_string()),
            city: "Bengaluru".to_string(),
            state: "Karnataka".to_string(),
            pincode: "560001".to_string(),
            phone: Some("+916366147567".to_string()),
        };
        assert_eq!(
            full.to_string(),
            "12 MG Road, Flat 4B, Bengaluru, Karnataka 560001"
        );

        let short = DeliveryAddress {
            line2: None,
            ..full
        };
        assert_eq!(short.to_string(), "12 MG Road, Bengaluru, Karnataka 560001");
    }

    #[test]
    fn test_status_round_trips_through_label() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Processing,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ] {
            assert_eq!(OrderStatus::parse(status.as_str()), status);
        }
    }
}
