//! # Catalog Filtering
//!
//! Pure product filtering for the catalog screen.
//!
//! ## Filter Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Product Filter Pipeline                             │
//! │                                                                         │
//! │  Full product list (fetch order preserved)                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Pass 1: featured_only?  ──► keep products with featured == true        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Pass 2: category select ──► keep category id match                     │
//! │                              OR case-insensitive category NAME match    │
//! │                              (selector may be an id or a display name)  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Pass 3: search term     ──► keep case-insensitive substring matches    │
//! │                              on product name (trimmed; empty = no-op)   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Visible subset (possibly empty - that is valid, not an error)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Selection state (category, featured flag, search term) is an explicit
//! value passed in, never ambient mutable state. That keeps this module a
//! pure function and testable in isolation.

use serde::{Deserialize, Serialize};

use crate::types::Product;

// =============================================================================
// Category Selection
// =============================================================================

/// The category dropdown selection.
///
/// The `"all"` sentinel means no category narrowing. Anything else is a raw
/// selector that may be a category id or a category display name; both are
/// accepted when matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategorySelect {
    /// No category narrowing ("All Products").
    All,
    /// A specific category, addressed by id or display name.
    Selected(String),
}

impl CategorySelect {
    /// Parses a selector string; the `"all"` sentinel is case-insensitive.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("all") {
            CategorySelect::All
        } else {
            CategorySelect::Selected(raw.trim().to_string())
        }
    }

    fn matches(&self, product: &Product) -> bool {
        match self {
            CategorySelect::All => true,
            CategorySelect::Selected(selector) => match &product.category {
                Some(category) => {
                    category.id == *selector
                        || category.name.to_lowercase() == selector.to_lowercase()
                }
                None => false,
            },
        }
    }
}

impl Default for CategorySelect {
    fn default() -> Self {
        CategorySelect::All
    }
}

// =============================================================================
// Product Filter
// =============================================================================

/// Filter parameters for the catalog screen.
///
/// `Default` performs no narrowing at all.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductFilter {
    /// Category dropdown selection.
    pub category: CategorySelect,

    /// Retain only featured products.
    pub featured_only: bool,

    /// Free-text search term; trimmed before matching, empty means no-op.
    pub search: String,
}

/// Applies the filter as successive narrowing passes, preserving input order.
///
/// Filtering is idempotent: re-filtering a filtered result with the same
/// parameters yields the same set. An empty result is valid output.
///
/// ## Example
/// ```rust
/// use grocemate_core::catalog::{filter_products, CategorySelect, ProductFilter};
///
/// let filter = ProductFilter {
///     category: CategorySelect::parse("all"),
///     featured_only: false,
///     search: "rice".to_string(),
/// };
/// let visible = filter_products(&[], &filter);
/// assert!(visible.is_empty());
/// ```
pub fn filter_products<'a>(products: &'a [Product], filter: &ProductFilter) -> Vec<&'a Product> {
    let mut visible: Vec<&Product> = products.iter().collect();

    if filter.featured_only {
        visible.retain(|p| p.featured);
    }

    visible.retain(|p| filter.category.matches(p));

    let term = filter.search.trim();
    if !term.is_empty() {
        let term = term.to_lowercase();
        visible.retain(|p| p.name.to_lowercase().contains(&term));
    }

    visible
}

/// Counts products in a category, over the FULL unfiltered set.
///
/// `CategorySelect::All` counts everything. Used for the dropdown item
/// counts only; not memoized. Unlike the filter's selector matching, counts
/// go by category id alone (mirroring the dropdown, which is keyed by id).
pub fn category_count(products: &[Product], select: &CategorySelect) -> usize {
    match select {
        CategorySelect::All => products.len(),
        CategorySelect::Selected(id) => products
            .iter()
            .filter(|p| p.category.as_ref().is_some_and(|c| c.id == *id))
            .count(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;
    use chrono::Utc;

    fn product(id: &str, name: &str, category: Option<(&str, &str)>, featured: bool) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            price_paise: 10_000,
            image: format!("/images/{id}.png"),
            category: category.map(|(cid, cname)| Category {
                id: cid.to_string(),
                name: cname.to_string(),
            }),
            featured,
            created_at: Utc::now(),
        }
    }

    fn fixture() -> Vec<Product> {
        vec![
            product("p1", "Basmati Rice 1kg", Some(("c1", "Grains")), true),
            product("p2", "Brown Rice 500g", Some(("c1", "Grains")), false),
            product("p3", "Toor Dal 1kg", Some(("c2", "Pulses")), false),
            product("p4", "Fresh Milk 1L", None, true),
        ]
    }

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_default_filter_is_identity() {
        let products = fixture();
        let visible = filter_products(&products, &ProductFilter::default());
        assert_eq!(ids(&visible), vec!["p1", "p2", "p3", "p4"]);
    }

    #[test]
    fn test_featured_only() {
        let products = fixture();
        let filter = ProductFilter {
            featured_only: true,
            ..Default::default()
        };
        assert_eq!(ids(&filter_products(&products, &filter)), vec!["p1", "p4"]);
    }

    #[test]
    fn test_category_by_id() {
        let products = fixture();
        let filter = ProductFilter {
            category: CategorySelect::parse("c1"),
            ..Default::default()
        };
        assert_eq!(ids(&filter_products(&products, &filter)), vec!["p1", "p2"]);
    }

    #[test]
    fn test_category_by_name_case_insensitive() {
        // Selector passed as a display name instead of an id
        let products = fixture();
        let filter = ProductFilter {
            category: CategorySelect::parse("grains"),
            ..Default::default()
        };
        assert_eq!(ids(&filter_products(&products, &filter)), vec!["p1", "p2"]);
    }

    #[test]
    fn test_uncategorized_excluded_by_category_select() {
        let products = fixture();
        let filter = ProductFilter {
            category: CategorySelect::parse("c2"),
            ..Default::default()
        };
        assert_eq!(ids(&filter_products(&products, &filter)), vec!["p3"]);
    }

    #[test]
    fn test_search_substring_case_insensitive() {
        let products = fixture();
        let filter = ProductFilter {
            search: "  RICE ".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_products(&products, &filter)), vec!["p1", "p2"]);
    }

    #[test]
    fn test_empty_search_is_noop() {
        let products = fixture();
        let filter = ProductFilter {
            search: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(filter_products(&products, &filter).len(), products.len());
    }

    #[test]
    fn test_passes_combine() {
        let products = fixture();
        let filter = ProductFilter {
            category: CategorySelect::parse("c1"),
            featured_only: true,
            search: "rice".to_string(),
        };
        assert_eq!(ids(&filter_products(&products, &filter)), vec!["p1"]);
    }

    #[test]
    fn test_empty_result_is_valid() {
        let products = fixture();
        let filter = ProductFilter {
            search: "chocolate".to_string(),
            ..Default::default()
        };
        assert!(filter_products(&products, &filter).is_empty());
    }

    #[test]
    fn test_empty_input_yields_empty() {
        let filter = ProductFilter {
            category: CategorySelect::parse("c1"),
            featured_only: true,
            search: "rice".to_string(),
        };
        assert!(filter_products(&[], &filter).is_empty());
    }

    #[test]
    fn test_idempotent() {
        let products = fixture();
        let filter = ProductFilter {
            category: CategorySelect::parse("c1"),
            search: "rice".to_string(),
            ..Default::default()
        };
        let once: Vec<Product> = filter_products(&products, &filter)
            .into_iter()
            .cloned()
            .collect();
        let twice = filter_products(&once, &filter);
        assert_eq!(ids(&twice), once.iter().map(|p| p.id.clone()).collect::<Vec<_>>());
    }

    #[test]
    fn test_category_count_all_ignores_filter_state() {
        let products = fixture();
        assert_eq!(category_count(&products, &CategorySelect::All), 4);
        // Counts always come from the full set, whatever is currently visible
        let narrowed: Vec<Product> = filter_products(
            &products,
            &ProductFilter {
                featured_only: true,
                ..Default::default()
            },
        )
        .into_iter()
        .cloned()
        .collect();
        assert_eq!(narrowed.len(), 2);
        assert_eq!(category_count(&products, &CategorySelect::All), 4);
    }

    #[test]
    fn test_category_count_by_id() {
        let products = fixture();
        assert_eq!(
            category_count(&products, &CategorySelect::parse("c1")),
            2
        );
        assert_eq!(
            category_count(&products, &CategorySelect::parse("c2")),
            1
        );
        assert_eq!(
            category_count(&products, &CategorySelect::parse("missing")),
            0
        );
    }

    #[test]
    fn test_all_sentinel_parse() {
        assert_eq!(CategorySelect::parse("all"), CategorySelect::All);
        assert_eq!(CategorySelect::parse("ALL"), CategorySelect::All);
        assert_eq!(
            CategorySelect::parse("c1"),
            CategorySelect::Selected("c1".to_string())
        );
    }
}
