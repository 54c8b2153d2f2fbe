//! # Invoice Document Rendering
//!
//! Renders a computed invoice and its order into a fixed-layout plain-text
//! document for export/download. Block ordering mirrors the printed invoice:
//! header, order info, delivery info, payment info, item table, summary,
//! special instructions. Anything fancier than fixed columns is a
//! presentation concern and lives in the frontend.

use chrono::{DateTime, Utc};

use crate::invoice::Invoice;
use crate::types::Order;

/// Document title line.
const TITLE: &str = "GroceMate - Order Invoice";

/// Formats an order timestamp for the invoice, e.g.
/// `August 29, 2026 02:05 PM`.
pub fn format_order_date(ts: &DateTime<Utc>) -> String {
    ts.format("%B %-d, %Y %I:%M %p").to_string()
}

/// Renders the fixed-layout invoice document.
///
/// Optional blocks (delivery, payment, notes) are omitted entirely when the
/// order has no data for them, matching the printed invoice.
pub fn render_invoice(order: &Order, invoice: &Invoice) -> String {
    let mut doc = String::new();

    doc.push_str(TITLE);
    doc.push('\n');
    doc.push_str(&"=".repeat(TITLE.len()));
    doc.push_str("\n\n");

    doc.push_str(&format!("Order Number: {}\n", order.order_number));
    doc.push_str(&format!(
        "Order Date:   {}\n",
        format_order_date(&order.created_at)
    ));
    doc.push_str(&format!("Status:       {}\n", order.status));

    if let Some(address) = &order.delivery_address {
        doc.push_str("\nDelivery Information:\n");
        doc.push_str(&format!("  Address: {}\n", address));
        if let Some(phone) = &address.phone {
            doc.push_str(&format!("  Phone:   {}\n", phone));
        }
    }

    if let Some(method) = &order.payment_method {
        doc.push_str("\nPayment Information:\n");
        doc.push_str(&format!("  Method: {}\n", method));
    }

    doc.push_str("\nOrder Items:\n");
    doc.push_str(&format!(
        "  {:<32} {:>4} {:>12} {:>12}\n",
        "Item", "Qty", "Price", "Subtotal"
    ));
    for item in &order.items {
        doc.push_str(&format!(
            "  {:<32} {:>4} {:>12} {:>12}\n",
            item.name,
            item.quantity,
            item.unit_price().to_string(),
            item.line_subtotal().to_string()
        ));
    }

    let delivery = if invoice.free_delivery() {
        "FREE".to_string()
    } else {
        invoice.delivery_charge.to_string()
    };

    doc.push('\n');
    doc.push_str(&format!("Items Subtotal:   {:>12}\n", invoice.subtotal.to_string()));
    doc.push_str(&format!("Delivery Charges: {:>12}\n", delivery));
    doc.push_str(&format!("GST (5%):         {:>12}\n", invoice.gst.to_string()));
    doc.push_str(&format!("Final Total:      {:>12}\n", invoice.grand_total.to_string()));

    if let Some(notes) = &order.notes {
        doc.push_str("\nSpecial Instructions:\n");
        doc.push_str(&format!("  {}\n", notes));
    }

    doc
}

/// File name for a downloaded invoice: `Order_<number>_Invoice.txt`.
///
/// Order numbers come from an external checkout process, so anything that
/// could be path-hostile is replaced before use in a file name.
pub fn invoice_filename(order: &Order) -> String {
    let safe: String = order
        .order_number
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '-' })
        .collect();
    format!("Order_{}_Invoice.txt", safe)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DeliveryAddress, OrderItem, OrderStatus};
    use chrono::TimeZone;

    fn sample_order() -> Order {
        Order {
            id: "b3c1".to_string(),
            order_number: "GM-1001".to_string(),
            created_at: Utc.with_ymd_and_hms(2026, 8, 29, 14, 5, 0).unwrap(),
            items: vec![
                OrderItem {
                    name: "Basmati Rice 1kg".to_string(),
                    quantity: 2,
                    unit_price_paise: 12_550,
                },
                OrderItem {
                    name: "Toor Dal 1kg".to_string(),
                    quantity: 1,
                    unit_price_paise: 14_900,
                },
            ],
            subtotal_paise: 40_000,
            status: OrderStatus::Delivered,
            delivery_address: Some(DeliveryAddress {
                line1: "12 MG Road".to_string(),
                line2: None,
                city: "Bengaluru".to_string(),
                state: "Karnataka".to_string(),
                pincode: "560001".to_string(),
                phone: Some("+916366147567".to_string()),
            }),
            payment_method: Some("Cash on Delivery".to_string()),
            notes: Some("Leave at the door".to_string()),
        }
    }

    #[test]
    fn test_renders_all_blocks() {
        let order = sample_order();
        let invoice = Invoice::compute(order.subtotal());
        let doc = render_invoice(&order, &invoice);

        assert!(doc.starts_with("GroceMate - Order Invoice"));
        assert!(doc.contains("Order Number: GM-1001"));
        assert!(doc.contains("Status:       delivered"));
        assert!(doc.contains("Address: 12 MG Road, Bengaluru, Karnataka 560001"));
        assert!(doc.contains("Phone:   +916366147567"));
        assert!(doc.contains("Method: Cash on Delivery"));
        assert!(doc.contains("Basmati Rice 1kg"));
        assert!(doc.contains("₹251.00")); // 2 × ₹125.50 line subtotal
        assert!(doc.contains("Items Subtotal:"));
        assert!(doc.contains("₹400.00"));
        assert!(doc.contains("GST (5%):"));
        assert!(doc.contains("₹20.00"));
        assert!(doc.contains("₹460.00"));
        assert!(doc.contains("Special Instructions:\n  Leave at the door"));
    }

    #[test]
    fn test_delivery_charge_shown_as_free_above_threshold() {
        let mut order = sample_order();
        order.subtotal_paise = 60_000;
        let invoice = Invoice::compute(order.subtotal());
        let doc = render_invoice(&order, &invoice);

        assert!(doc.contains("Delivery Charges:"));
        assert!(doc.contains("FREE"));
        assert!(doc.contains("₹630.00"));
    }

    #[test]
    fn test_optional_blocks_omitted() {
        let mut order = sample_order();
        order.delivery_address = None;
        order.payment_method = None;
        order.notes = None;
        let invoice = Invoice::compute(order.subtotal());
        let doc = render_invoice(&order, &invoice);

        assert!(!doc.contains("Delivery Information:"));
        assert!(!doc.contains("Payment Information:"));
        assert!(!doc.contains("Special Instructions:"));
    }

    #[test]
    fn test_invoice_filename_sanitized() {
        let mut order = sample_order();
        assert_eq!(invoice_filename(&order), "Order_GM-1001_Invoice.txt");

        order.order_number = "GM/10 01".to_string();
        assert_eq!(invoice_filename(&order), "Order_GM-10-01_Invoice.txt");
    }

    #[test]
    fn test_date_format() {
        let ts = Utc.with_ymd_and_hms(2026, 8, 5, 9, 30, 0).unwrap();
        assert_eq!(format_order_date(&ts), "August 5, 2026 09:30 AM");
    }
}
