//! # grocemate-store: Local Device Store for GroceMate
//!
//! This crate provides data access for GroceMate. It uses SQLite for local
//! storage with sqlx for async operations. Orders land here via an external
//! checkout process; this crate reads them back for the order-details screen
//! and serves the catalog to the products screen.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       GroceMate Data Flow                               │
//! │                                                                         │
//! │  Tauri Command (list_products, get_order)                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  grocemate-store (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │     Store     │    │ Repositories  │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │◄───│ catalog/order │    │  (embedded)  │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite file in the platform app-data directory                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Store error types
//! - [`repository`] - Repository implementations (catalog, order)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use grocemate_store::{Store, StoreConfig};
//!
//! let store = Store::new(StoreConfig::new("path/to/grocemate.db")).await?;
//!
//! let products = store.catalog().list_products().await?;
//! let order = store.orders().find("GM-1001").await?; // number or internal id
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use pool::{Store, StoreConfig};

pub use repository::catalog::CatalogRepository;
pub use repository::order::OrderRepository;
