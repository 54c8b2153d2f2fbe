//! # Catalog Repository
//!
//! Database operations for products and categories.
//!
//! The reads here return the catalog wholesale: filtering happens in
//! `grocemate-core::catalog` over the in-memory list, matching the
//! fetch-then-filter flow of the products screen. A fetch failure surfaces
//! as `StoreError`; the caller shows an error state and skips filtering.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use tracing::debug;
use uuid::Uuid;

use crate::error::StoreResult;
use grocemate_core::{Category, Product};

/// Repository for catalog database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = store.catalog();
/// let products = repo.list_products().await?;
/// let categories = repo.list_categories().await?;
/// ```
#[derive(Debug, Clone)]
pub struct CatalogRepository {
    pool: SqlitePool,
}

/// Flat row shape for a product with its category joined in.
#[derive(Debug, FromRow)]
struct ProductRow {
    id: String,
    name: String,
    price_paise: i64,
    image: String,
    featured: bool,
    created_at: DateTime<Utc>,
    category_id: Option<String>,
    category_name: Option<String>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        let category = match (row.category_id, row.category_name) {
            (Some(id), Some(name)) => Some(Category { id, name }),
            _ => None,
        };
        Product {
            id: row.id,
            name: row.name,
            price_paise: row.price_paise,
            image: row.image,
            category,
            featured: row.featured,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: String,
    name: String,
}

impl CatalogRepository {
    /// Creates a new CatalogRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CatalogRepository { pool }
    }

    /// Lists all products with their categories joined in.
    ///
    /// Sorted by name; the products screen preserves this order through
    /// filtering.
    pub async fn list_products(&self) -> StoreResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT
                p.id,
                p.name,
                p.price_paise,
                p.image,
                p.featured,
                p.created_at,
                c.id AS category_id,
                c.name AS category_name
            FROM products p
            LEFT JOIN categories c ON c.id = p.category_id
            ORDER BY p.name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = rows.len(), "Listed products");
        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// Lists all categories, sorted by name.
    pub async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name FROM categories ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = rows.len(), "Listed categories");
        Ok(rows
            .into_iter()
            .map(|row| Category {
                id: row.id,
                name: row.name,
            })
            .collect())
    }

    /// Inserts a category (seeding and tests).
    pub async fn insert_category(&self, category: &Category) -> StoreResult<()> {
        debug!(id = %category.id, "Inserting category");

        sqlx::query("INSERT INTO categories (id, name) VALUES (?1, ?2)")
            .bind(&category.id)
            .bind(&category.name)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Inserts a product (seeding and tests).
    pub async fn insert_product(&self, product: &Product) -> StoreResult<()> {
        debug!(id = %product.id, name = %product.name, "Inserting product");

        sqlx::query(
            r#"
            INSERT INTO products (id, name, price_paise, image, category_id, featured, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(&product.id)
        .bind(&product.name)
        .bind(product.price_paise)
        .bind(&product.image)
        .bind(product.category.as_ref().map(|c| c.id.clone()))
        .bind(product.featured)
        .bind(product.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

/// Helper to generate a new catalog entity ID.
pub fn generate_catalog_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================
