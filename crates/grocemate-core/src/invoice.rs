//! # Invoice Calculator
//!
//! Derives the invoice breakdown (delivery charge, GST, grand total) from an
//! order's stored subtotal.
//!
//! ## Calculation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Invoice Computation                                │
//! │                                                                         │
//! │  Stored subtotal (trusted, never recomputed from lines)                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  delivery = 0        if subtotal > ₹500 (strictly greater)             │
//! │             ₹40.00   otherwise                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  gst = subtotal × 5%  (half-up rounding to the paisa)                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  grand_total = subtotal + delivery + gst                               │
//! │                                                                         │
//! │  Example: ₹400.00 → delivery ₹40.00, GST ₹20.00, total ₹460.00         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The function is total over its documented domain (subtotal >= 0),
//! deterministic and side-effect free; callers validate inputs via
//! [`crate::validation`] before invoking it.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::TaxRate;

// =============================================================================
// Domain Constants
// =============================================================================

/// Flat delivery charge applied below the free-delivery threshold: ₹40.00.
pub const DELIVERY_CHARGE: Money = Money::from_paise(4_000);

/// Orders with a subtotal STRICTLY greater than ₹500.00 ship free.
/// A subtotal of exactly ₹500.00 still pays the delivery charge.
pub const FREE_DELIVERY_THRESHOLD: Money = Money::from_paise(50_000);

/// Flat GST rate applied to the subtotal: 5%.
pub const GST_RATE: TaxRate = TaxRate::from_bps(500);

// =============================================================================
// Invoice
// =============================================================================

/// Computed invoice breakdown for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Invoice {
    /// Items subtotal as stored on the order.
    pub subtotal: Money,

    /// Delivery charge (zero when the free-delivery threshold is crossed).
    pub delivery_charge: Money,

    /// GST at the flat 5% rate.
    pub gst: Money,

    /// subtotal + delivery_charge + gst.
    pub grand_total: Money,
}

impl Invoice {
    /// Computes the invoice breakdown for a subtotal.
    ///
    /// Pure and deterministic; safe to memoize per input.
    ///
    /// ## Example
    /// ```rust
    /// use grocemate_core::invoice::Invoice;
    /// use grocemate_core::money::Money;
    ///
    /// let invoice = Invoice::compute(Money::from_paise(60_000)); // ₹600.00
    /// assert!(invoice.delivery_charge.is_zero());                // free delivery
    /// assert_eq!(invoice.gst.paise(), 3_000);                    // ₹30.00
    /// assert_eq!(invoice.grand_total.paise(), 63_000);           // ₹630.00
    /// ```
    pub fn compute(subtotal: Money) -> Invoice {
        let delivery_charge = if subtotal > FREE_DELIVERY_THRESHOLD {
            Money::zero()
        } else {
            DELIVERY_CHARGE
        };

        let gst = subtotal.tax(GST_RATE);

        Invoice {
            subtotal,
            delivery_charge,
            gst,
            grand_total: subtotal + delivery_charge + gst,
        }
    }

    /// Whether the delivery charge was waived.
    #[inline]
    pub fn free_delivery(&self) -> bool {
        self.delivery_charge.is_zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subtotal_400_pays_delivery() {
        let invoice = Invoice::compute(Money::from_paise(40_000));
        assert_eq!(invoice.delivery_charge.paise(), 4_000);
        assert_eq!(invoice.gst.paise(), 2_000);
        assert_eq!(invoice.grand_total.paise(), 46_000);
        assert!(!invoice.free_delivery());
    }

    #[test]
    fn test_subtotal_600_ships_free() {
        let invoice = Invoice::compute(Money::from_paise(60_000));
        assert_eq!(invoice.delivery_charge.paise(), 0);
        assert_eq!(invoice.gst.paise(), 3_000);
        assert_eq!(invoice.grand_total.paise(), 63_000);
        assert!(invoice.free_delivery());
    }

    #[test]
    fn test_threshold_is_strictly_greater_than_500() {
        // Exactly ₹500.00 still pays delivery
        let at_threshold = Invoice::compute(Money::from_paise(50_000));
        assert_eq!(at_threshold.delivery_charge.paise(), 4_000);

        // One paisa above crosses it
        let above = Invoice::compute(Money::from_paise(50_001));
        assert_eq!(above.delivery_charge.paise(), 0);
    }

    #[test]
    fn test_zero_subtotal() {
        let invoice = Invoice::compute(Money::zero());
        assert_eq!(invoice.gst.paise(), 0);
        assert_eq!(invoice.delivery_charge.paise(), 4_000);
        assert_eq!(invoice.grand_total.paise(), 4_000);
    }

    #[test]
    fn test_gst_rounds_to_the_paisa() {
        // ₹1.11 at 5% = 5.55 paise → 6 paise
        let invoice = Invoice::compute(Money::from_paise(111));
        assert_eq!(invoice.gst.paise(), 6);
    }

    #[test]
    fn test_deterministic() {
        let subtotal = Money::from_paise(123_456);
        assert_eq!(Invoice::compute(subtotal), Invoice::compute(subtotal));
    }
}
