//! # Order Commands
//!
//! Tauri commands for order history, order details and invoice export.
//!
//! ## Lookup Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Order Lookup Flow                                 │
//! │                                                                         │
//! │  User opens /order/GM-1001 (deep link or history tap)                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  invoke('get_order', { id: 'GM-1001' })                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Store lookup: order_number = ?1 OR id = ?1  (single query)            │
//! │       │                                                                 │
//! │       ├── Found ──► charge breakdown computed from STORED subtotal     │
//! │       │             (never re-derived from line items)                  │
//! │       │                                                                 │
//! │       └── Missing ─► ApiError { code: NOT_FOUND } (not a crash)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tauri::State;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::StoreState;
use grocemate_core::document::{format_order_date, invoice_filename, render_invoice};
use grocemate_core::{Invoice, Order};
use grocemate_store::Store;

/// Order line item DTO.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDto {
    pub name: String,
    pub quantity: i64,
    pub unit_price_paise: i64,
    pub unit_price_display: String,
    pub line_subtotal_paise: i64,
    pub line_subtotal_display: String,
}

/// Charge breakdown DTO, computed from the stored order subtotal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargesDto {
    pub subtotal_paise: i64,
    pub delivery_charge_paise: i64,
    pub free_delivery: bool,
    pub gst_paise: i64,
    pub grand_total_paise: i64,
    pub subtotal_display: String,
    /// "FREE" when the delivery charge is waived.
    pub delivery_charge_display: String,
    pub gst_display: String,
    pub grand_total_display: String,
}

impl From<&Invoice> for ChargesDto {
    fn from(invoice: &Invoice) -> Self {
        ChargesDto {
            subtotal_paise: invoice.subtotal.paise(),
            delivery_charge_paise: invoice.delivery_charge.paise(),
            free_delivery: invoice.free_delivery(),
            gst_paise: invoice.gst.paise(),
            grand_total_paise: invoice.grand_total.paise(),
            subtotal_display: invoice.subtotal.to_string(),
            delivery_charge_display: if invoice.free_delivery() {
                "FREE".to_string()
            } else {
                invoice.delivery_charge.to_string()
            },
            gst_display: invoice.gst.to_string(),
            grand_total_display: invoice.grand_total.to_string(),
        }
    }
}

/// Full order DTO for the order details screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub id: String,
    pub order_number: String,
    /// Pre-formatted order date ("August 29, 2026 02:05 PM").
    pub created_at: String,
    pub items: Vec<OrderItemDto>,
    pub charges: ChargesDto,
    pub status: String,
    /// Ionic badge color name for the status chip.
    pub status_color: String,
    /// Position on the 4-step progress tracker; absent for cancelled or
    /// unrecognized statuses.
    pub progress_index: Option<u8>,
    pub delivery_address: Option<String>,
    pub delivery_phone: Option<String>,
    pub payment_method: Option<String>,
    pub notes: Option<String>,
}

impl From<&Order> for OrderDto {
    fn from(order: &Order) -> Self {
        let invoice = Invoice::compute(order.subtotal());
        OrderDto {
            id: order.id.clone(),
            order_number: order.order_number.clone(),
            created_at: format_order_date(&order.created_at),
            items: order
                .items
                .iter()
                .map(|item| OrderItemDto {
                    name: item.name.clone(),
                    quantity: item.quantity,
                    unit_price_paise: item.unit_price_paise,
                    unit_price_display: item.unit_price().to_string(),
                    line_subtotal_paise: item.line_subtotal().paise(),
                    line_subtotal_display: item.line_subtotal().to_string(),
                })
                .collect(),
            charges: ChargesDto::from(&invoice),
            status: order.status.as_str().to_string(),
            status_color: order.status.badge_color().to_string(),
            progress_index: order.status.progress_index(),
            delivery_address: order.delivery_address.as_ref().map(|a| a.to_string()),
            delivery_phone: order
                .delivery_address
                .as_ref()
                .and_then(|a| a.phone.clone()),
            payment_method: order.payment_method.clone(),
            notes: order.notes.clone(),
        }
    }
}

/// Order summary DTO for the history list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummaryDto {
    pub id: String,
    pub order_number: String,
    pub created_at: String,
    pub item_count: usize,
    pub grand_total_paise: i64,
    pub grand_total_display: String,
    pub status: String,
    pub status_color: String,
}

impl From<&Order> for OrderSummaryDto {
    fn from(order: &Order) -> Self {
        let invoice = Invoice::compute(order.subtotal());
        OrderSummaryDto {
            id: order.id.clone(),
            order_number: order.order_number.clone(),
            created_at: format_order_date(&order.created_at),
            item_count: order.items.len(),
            grand_total_paise: invoice.grand_total.paise(),
            grand_total_display: invoice.grand_total.to_string(),
            status: order.status.as_str().to_string(),
            status_color: order.status.badge_color().to_string(),
        }
    }
}

/// Gets one order with its computed charge breakdown.
///
/// ## Arguments
/// * `id` - Human-facing order number ("GM-1001") or internal order id;
///   both are accepted, which is what deep links and history taps send
///
/// ## Returns
/// The order, or `ApiError` with code `NOT_FOUND` when no order matches.
#[tauri::command]
pub async fn get_order(store: State<'_, StoreState>, id: String) -> Result<OrderDto, ApiError> {
    debug!(id = %id, "get_order command");

    let store_inner: &Store = (*store).inner();
    let order = store_inner
        .orders()
        .find(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("Order", &id))?;

    Ok(OrderDto::from(&order))
}

/// Lists all orders, newest first, for the history screen.
#[tauri::command]
pub async fn list_orders(
    store: State<'_, StoreState>,
) -> Result<Vec<OrderSummaryDto>, ApiError> {
    debug!("list_orders command");
    let store_inner: &Store = (*store).inner();
    let orders = store_inner.orders().list().await?;
    Ok(orders.iter().map(OrderSummaryDto::from).collect())
}

/// Renders the order's invoice document and writes it to the app data
/// directory, returning the written path.
///
/// The invoice totals come from the same charge breakdown the details
/// screen shows; the stored subtotal is the single source of truth.
#[tauri::command]
pub async fn export_invoice(
    store: State<'_, StoreState>,
    id: String,
) -> Result<String, ApiError> {
    debug!(id = %id, "export_invoice command");

    let store_inner: &Store = (*store).inner();
    let order = store_inner
        .orders()
        .find(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("Order", &id))?;

    let invoice = Invoice::compute(order.subtotal());
    let document = render_invoice(&order, &invoice);

    let dir = invoice_export_dir()?;
    let path = dir.join(invoice_filename(&order));
    std::fs::write(&path, document)
        .map_err(|e| ApiError::internal(format!("failed to write invoice: {e}")))?;

    info!(path = %path.display(), "Invoice exported");
    Ok(path.display().to_string())
}

/// Resolves (and creates) the invoice export directory under the platform
/// app data directory.
fn invoice_export_dir() -> Result<std::path::PathBuf, ApiError> {
    let proj_dirs = directories::ProjectDirs::from("com", "grocemate", "app")
        .ok_or_else(|| ApiError::internal("could not determine app data directory"))?;
    let dir = proj_dirs.data_dir().join("invoices");
    std::fs::create_dir_all(&dir)
        .map_err(|e| ApiError::internal(format!("failed to create invoice directory: {e}")))?;
    Ok(dir)
}
