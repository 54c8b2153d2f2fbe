//! # Order Repository
//!
//! Database operations for orders.
//!
//! ## Lookup Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Order Lookup                                       │
//! │                                                                         │
//! │  Caller supplies an identifier from a route parameter                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  WHERE order_number = ?1 OR id = ?1                                     │
//! │       │                                                                 │
//! │       ├── row found    → Ok(Some(Order))                                │
//! │       └── no row       → Ok(None)   ← NOT an error; callers redirect    │
//! │                                                                         │
//! │  Both the human-facing order number and the internal id are accepted    │
//! │  because deep links carry whichever the orders screen had at hand.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Degradation Rules
//! - Unrecognized status text decodes to `OrderStatus::Unknown`
//! - Malformed delivery-address JSON decodes to `None` with a warning
//!
//! Orders are written by the external checkout process; `insert` exists for
//! that process, seeding and tests. Nothing here updates or deletes.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::StoreResult;
use grocemate_core::{DeliveryAddress, Order, OrderItem, OrderStatus};

/// Repository for order database operations.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: SqlitePool,
}

#[derive(Debug, FromRow)]
struct OrderRow {
    id: String,
    order_number: String,
    created_at: DateTime<Utc>,
    subtotal_paise: i64,
    status: String,
    delivery_address: Option<String>,
    payment_method: Option<String>,
    notes: Option<String>,
}

#[derive(Debug, FromRow)]
struct OrderItemRow {
    name: String,
    quantity: i64,
    unit_price_paise: i64,
}

impl OrderRow {
    fn into_order(self, items: Vec<OrderItem>) -> Order {
        let delivery_address = self.delivery_address.and_then(|raw| {
            match serde_json::from_str::<DeliveryAddress>(&raw) {
                Ok(address) => Some(address),
                Err(e) => {
                    // Upstream contract violation; degrade rather than fail
                    // the whole detail screen.
                    warn!(order = %self.order_number, error = %e, "Malformed delivery address JSON");
                    None
                }
            }
        });

        Order {
            id: self.id,
            order_number: self.order_number,
            created_at: self.created_at,
            items,
            subtotal_paise: self.subtotal_paise,
            status: OrderStatus::parse(&self.status),
            delivery_address,
            payment_method: self.payment_method,
            notes: self.notes,
        }
    }
}

impl OrderRepository {
    /// Creates a new OrderRepository.
    pub fn new(pool: SqlitePool) -> Self {
        OrderRepository { pool }
    }

    /// Finds an order by its human-facing number OR its internal id.
    ///
    /// ## Returns
    /// * `Ok(Some(Order))` - a match on either identifier
    /// * `Ok(None)` - no match (caller redirects, does not crash)
    pub async fn find(&self, id: &str) -> StoreResult<Option<Order>> {
        debug!(id = %id, "Looking up order");

        let row = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT id, order_number, created_at, subtotal_paise, status,
                   delivery_address, payment_method, notes
            FROM orders
            WHERE order_number = ?1 OR id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            debug!(id = %id, "Order not found");
            return Ok(None);
        };

        let items = self.load_items(&row.id).await?;
        Ok(Some(row.into_order(items)))
    }

    /// Lists all orders, newest first, items included.
    pub async fn list(&self) -> StoreResult<Vec<Order>> {
        let rows = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT id, order_number, created_at, subtotal_paise, status,
                   delivery_address, payment_method, notes
            FROM orders
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut orders = Vec::with_capacity(rows.len());
        for row in rows {
            let items = self.load_items(&row.id).await?;
            orders.push(row.into_order(items));
        }

        debug!(count = orders.len(), "Listed orders");
        Ok(orders)
    }

    /// Inserts an order with its items (checkout, seeding and tests).
    pub async fn insert(&self, order: &Order) -> StoreResult<()> {
        debug!(order = %order.order_number, "Inserting order");

        let delivery_address = order
            .delivery_address
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO orders (id, order_number, created_at, subtotal_paise, status,
                                delivery_address, payment_method, notes)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
        )
        .bind(&order.id)
        .bind(&order.order_number)
        .bind(order.created_at)
        .bind(order.subtotal_paise)
        .bind(order.status.as_str())
        .bind(delivery_address)
        .bind(&order.payment_method)
        .bind(&order.notes)
        .execute(&mut *tx)
        .await?;

        for (position, item) in order.items.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO order_items (order_id, position, name, quantity, unit_price_paise)
                VALUES (?1, ?2, ?3, ?4, ?5)
                "#,
            )
            .bind(&order.id)
            .bind(position as i64)
            .bind(&item.name)
            .bind(item.quantity)
            .bind(item.unit_price_paise)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// Loads the items of an order, in their stored position.
    async fn load_items(&self, order_id: &str) -> StoreResult<Vec<OrderItem>> {
        let rows = sqlx::query_as::<_, OrderItemRow>(
            r#"
            SELECT name, quantity, unit_price_paise
            FROM order_items
            WHERE order_id = ?1
            ORDER BY position
            "#,
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| OrderItem {
                name: row.name,
                quantity: row.quantity,
                unit_price_paise: row.unit_price_paise,
            })
            .collect())
    }
}

/// Helper to generate a new internal order ID.
pub fn generate_order_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Store, StoreConfig};

    async fn test_store() -> Store {
        Store::new(StoreConfig::in_memory()).await.unwrap()
    }

    fn sample_order(number: &str) -> Order {
        Order {
            id: generate_order_id(),
            order_number: number.to_string(),
            created_at: Utc::now(),
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
            status: OrderStatus::Processing,
            delivery_address: Some(DeliveryAddress {
                line1: "12 MG Road".to_string(),
                line2: None,
                city: "Bengaluru".to_string(),
                state: "Karnataka".to_string(),
                pincode: "560001".to_string(),
                phone: Some("+916366147567".to_string()),
            }),
            payment_method: Some("Cash on Delivery".to_string()),
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_find_by_order_number() {
        let store = test_store().await;
        let repo = store.orders();

        let order = sample_order("GM-1001");
        repo.insert(&order).await.unwrap();

        let found = repo.find("GM-1001").await.unwrap().expect("order exists");
        assert_eq!(found.id, order.id);
        assert_eq!(found.subtotal_paise, 40_000);
        assert_eq!(found.status, OrderStatus::Processing);
        assert_eq!(found.delivery_address.unwrap().city, "Bengaluru");
    }

    #[tokio::test]
    async fn test_find_by_internal_id() {
        let store = test_store().await;
        let repo = store.orders();

        let order = sample_order("GM-1002");
        repo.insert(&order).await.unwrap();

        let found = repo.find(&order.id).await.unwrap().expect("order exists");
        assert_eq!(found.order_number, "GM-1002");
    }

    #[tokio::test]
    async fn test_find_missing_is_none_not_error() {
        let store = test_store().await;
        assert!(store.orders().find("NOPE-404").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_item_order_preserved() {
        let store = test_store().await;
        let repo = store.orders();

        let order = sample_order("GM-1003");
        repo.insert(&order).await.unwrap();

        let found = repo.find("GM-1003").await.unwrap().unwrap();
        let names: Vec<&str> = found.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Basmati Rice 1kg", "Toor Dal 1kg"]);
    }

    #[tokio::test]
    async fn test_unrecognized_status_degrades_to_unknown() {
        let store = test_store().await;
        let repo = store.orders();

        let mut order = sample_order("GM-1004");
        order.status = OrderStatus::Pending;
        repo.insert(&order).await.unwrap();

        // Simulate an external writer using a status outside the fixed set
        sqlx::query("UPDATE orders SET status = 'on-hold' WHERE order_number = 'GM-1004'")
            .execute(store.pool())
            .await
            .unwrap();

        let found = repo.find("GM-1004").await.unwrap().unwrap();
        assert_eq!(found.status, OrderStatus::Unknown);
    }

    #[tokio::test]
    async fn test_malformed_address_degrades_to_none() {
        let store = test_store().await;
        let repo = store.orders();

        let order = sample_order("GM-1005");
        repo.insert(&order).await.unwrap();

        sqlx::query("UPDATE orders SET delivery_address = 'not json' WHERE order_number = 'GM-1005'")
            .execute(store.pool())
            .await
            .unwrap();

        let found = repo.find("GM-1005").await.unwrap().unwrap();
        assert!(found.delivery_address.is_none());
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let store = test_store().await;
        let repo = store.orders();

        let mut older = sample_order("GM-2001");
        older.created_at = Utc::now() - chrono::Duration::hours(2);
        let newer = sample_order("GM-2002");

        repo.insert(&older).await.unwrap();
        repo.insert(&newer).await.unwrap();

        let orders = repo.list().await.unwrap();
        let numbers: Vec<&str> = orders.iter().map(|o| o.order_number.as_str()).collect();
        assert_eq!(numbers, vec!["GM-2002", "GM-2001"]);
    }
}
