//! # Catalog Commands
//!
//! Tauri commands for the product catalog screen.
//!
//! ## Filter Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog Filter Flow                                │
//! │                                                                         │
//! │  User taps "Pulses" chip, types "dal" in the searchbar                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  invoke('list_products', { category: 'c2', search: 'dal' })            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Load FULL product list from the device store                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  filter_products(): featured pass → category pass → search pass        │
//! │  (pure, in-memory; the store query never changes with the filter)      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Return Vec<ProductDto> to frontend (empty is a valid answer)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Category counts come from the same full list, so they stay stable while
//! the user narrows the visible set.

use serde::{Deserialize, Serialize};
use tauri::State;
use tracing::debug;

use crate::error::ApiError;
use crate::state::StoreState;
use grocemate_core::catalog::{category_count, filter_products};
use grocemate_core::validation::validate_search_term;
use grocemate_core::{CategorySelect, Product, ProductFilter};
use grocemate_store::Store;

/// Product DTO for the catalog grid.
///
/// Decouples the stored domain model from the API contract and renames
/// fields to camelCase for JS consumption.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: String,
    pub name: String,
    pub price_paise: i64,
    /// Pre-formatted price string ("₹120.00") so the frontend never does
    /// currency math.
    pub price_display: String,
    pub image: String,
    pub category_id: Option<String>,
    pub category_name: Option<String>,
    pub featured: bool,
}

impl From<&Product> for ProductDto {
    fn from(p: &Product) -> Self {
        ProductDto {
            id: p.id.clone(),
            name: p.name.clone(),
            price_paise: p.price_paise,
            price_display: p.price().to_string(),
            image: p.image.clone(),
            category_id: p.category.as_ref().map(|c| c.id.clone()),
            category_name: p.category.as_ref().map(|c| c.name.clone()),
            featured: p.featured,
        }
    }
}

/// Category DTO for the dropdown, with its product count.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub id: String,
    pub name: String,
    /// Count over the full catalog, independent of any active filter.
    pub count: usize,
}

/// Lists catalog products, narrowed by the caller's filter parameters.
///
/// ## Arguments
/// * `category` - Category id or display name; `"all"` or omitted means no
///   category narrowing
/// * `featured_only` - Keep only featured products (default false)
/// * `search` - Free-text name search; trimmed, empty means no narrowing
///
/// ## Returns
/// The visible subset in stored order. An empty list is a normal answer,
/// not an error.
#[tauri::command]
pub async fn list_products(
    store: State<'_, StoreState>,
    category: Option<String>,
    featured_only: Option<bool>,
    search: Option<String>,
) -> Result<Vec<ProductDto>, ApiError> {
    debug!(?category, ?featured_only, ?search, "list_products command");

    let search = match search {
        Some(raw) if !raw.trim().is_empty() => validate_search_term(&raw)?,
        _ => String::new(),
    };

    let filter = ProductFilter {
        category: category
            .as_deref()
            .map(CategorySelect::parse)
            .unwrap_or_default(),
        featured_only: featured_only.unwrap_or(false),
        search,
    };

    let store_inner: &Store = (*store).inner();
    let products = store_inner.catalog().list_products().await?;
    let visible = filter_products(&products, &filter);

    debug!(
        total = products.len(),
        visible = visible.len(),
        "list_products complete"
    );

    Ok(visible.into_iter().map(ProductDto::from).collect())
}

/// Lists categories for the dropdown, each with its product count.
///
/// The `"all"` entry is synthesized first and always counts the entire
/// catalog, regardless of what the catalog screen is currently showing.
#[tauri::command]
pub async fn list_categories(
    store: State<'_, StoreState>,
) -> Result<Vec<CategoryDto>, ApiError> {
    debug!("list_categories command");

    let store_inner: &Store = (*store).inner();
    let catalog = store_inner.catalog();
    let products = catalog.list_products().await?;
    let categories = catalog.list_categories().await?;

    let mut dtos = Vec::with_capacity(categories.len() + 1);
    dtos.push(CategoryDto {
        id: "all".to_string(),
        name: "All Products".to_string(),
        count: category_count(&products, &CategorySelect::All),
    });
    for category in categories {
        let count = category_count(&products, &CategorySelect::Selected(category.id.clone()));
        dtos.push(CategoryDto {
            id: category.id,
            name: category.name,
            count,
        });
    }

    Ok(dtos)
}
