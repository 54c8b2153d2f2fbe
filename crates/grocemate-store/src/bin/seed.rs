//! # Seed Binary
//!
//! Seeds a GroceMate store with demo catalog and order data for local
//! development of the webview screens.
//!
//! ## Usage
//! ```bash
//! GROCEMATE_DB_PATH=./grocemate.db cargo run -p grocemate-store --bin seed
//! ```

use chrono::Utc;
use tracing::info;

use grocemate_core::{Category, DeliveryAddress, Order, OrderItem, OrderStatus, Product};
use grocemate_store::repository::catalog::generate_catalog_id;
use grocemate_store::repository::order::generate_order_id;
use grocemate_store::{Store, StoreConfig, StoreResult};

#[tokio::main]
async fn main() -> StoreResult<()> {
    tracing_subscriber_init();

    let path = std::env::var("GROCEMATE_DB_PATH").unwrap_or_else(|_| "grocemate.db".to_string());
    info!(path = %path, "Seeding store");

    let store = Store::new(StoreConfig::new(&path)).await?;
    let catalog = store.catalog();
    let orders = store.orders();

    let grains = Category {
        id: generate_catalog_id(),
        name: "Grains".to_string(),
    };
    let pulses = Category {
        id: generate_catalog_id(),
        name: "Pulses".to_string(),
    };
    let dairy = Category {
        id: generate_catalog_id(),
        name: "Dairy".to_string(),
    };

    for category in [&grains, &pulses, &dairy] {
        catalog.insert_category(category).await?;
    }

    let demo_products: [(&str, i64, Option<&Category>, bool); 6] = [
        ("Basmati Rice 1kg", 12_550, Some(&grains), true),
        ("Brown Rice 500g", 7_900, Some(&grains), false),
        ("Toor Dal 1kg", 14_900, Some(&pulses), false),
        ("Moong Dal 500g", 8_500, Some(&pulses), true),
        ("Fresh Milk 1L", 6_200, Some(&dairy), false),
        ("Organic Honey 250g", 19_900, None, true),
    ];

    for (name, price_paise, category, featured) in demo_products {
        let id = generate_catalog_id();
        catalog
            .insert_product(&Product {
                image: format!("/assets/products/{id}.png"),
                id,
                name: name.to_string(),
                price_paise,
                category: category.cloned(),
                featured,
                created_at: Utc::now(),
            })
            .await?;
    }

    // One demo order below the free-delivery threshold, one above
    orders
        .insert(&Order {
            id: generate_order_id(),
            order_number: "GM-1001".to_string(),
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
            delivery_address: Some(demo_address()),
            payment_method: Some("Cash on Delivery".to_string()),
            notes: Some("Ring the bell twice".to_string()),
        })
        .await?;

    orders
        .insert(&Order {
            id: generate_order_id(),
            order_number: "GM-1002".to_string(),
            created_at: Utc::now(),
            items: vec![OrderItem {
                name: "Organic Honey 250g".to_string(),
                quantity: 3,
                unit_price_paise: 19_900,
            }],
            subtotal_paise: 59_700,
            status: OrderStatus::Delivered,
            delivery_address: Some(demo_address()),
            payment_method: Some("UPI".to_string()),
            notes: None,
        })
        .await?;

    info!("Seed complete: 3 categories, 6 products, 2 orders");
    Ok(())
}

fn demo_address() -> DeliveryAddress {
    DeliveryAddress {
        line1: "12 MG Road".to_string(),
        line2: Some("Flat 4B".to_string()),
        city: "Bengaluru".to_string(),
        state: "Karnataka".to_string(),
        pincode: "560001".to_string(),
        phone: Some("+916366147567".to_string()),
    }
}

fn tracing_subscriber_init() {
    // Seed runs standalone, so it sets up its own minimal logging
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(tracing::Level::INFO)
            .finish(),
    )
    .ok();
}
