//! Pure filter/sort engine over the catalog.
//!
//! The engine is a recomputation function, not an incremental view: every
//! criteria change recomputes the whole visible list from the catalog. At
//! catalog sizes measured in dozens that is cheaper than any diffing scheme
//! would be to maintain.

use serde::{Deserialize, Serialize};

use techstore_core::ValueObject;

use crate::catalog::Catalog;
use crate::product::{Category, Product};

/// Default inclusive price ceiling, in smallest currency unit ($500.00).
pub const DEFAULT_MAX_PRICE: u64 = 50_000;

/// Requested ordering of the visible product list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortBy {
    /// Lexicographic ascending by product name.
    #[serde(rename = "name")]
    Name,
    /// Numeric ascending by price.
    #[serde(rename = "price-low")]
    PriceLowHigh,
    /// Numeric descending by price.
    #[serde(rename = "price-high")]
    PriceHighLow,
    /// Numeric descending by rating.
    #[serde(rename = "rating")]
    Rating,
}

/// The user-selected filter/sort configuration.
///
/// Replaced wholesale on every change; there is no partial invariant
/// between fields. `category: None` means "all categories", which leaves a
/// legitimately empty category string representable as a real value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub category: Option<Category>,
    /// Inclusive upper bound on price; the lower bound is fixed at zero.
    pub max_price: u64,
    /// When set, products with zero stock are excluded.
    pub in_stock_only: bool,
    pub sort_by: SortBy,
}

impl FilterCriteria {
    /// Whether a single product passes every active predicate.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category {
            if product.category != *category {
                return false;
            }
        }

        if product.price > self.max_price {
            return false;
        }

        if self.in_stock_only && product.stock == 0 {
            return false;
        }

        true
    }
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            category: None,
            max_price: DEFAULT_MAX_PRICE,
            in_stock_only: false,
            sort_by: SortBy::Name,
        }
    }
}

impl ValueObject for FilterCriteria {}

/// Compute the visible product list for `criteria`.
///
/// Pure and deterministic: same catalog + criteria always yield the same
/// list, and the catalog is never mutated. Sorting is stable, so products
/// with equal sort keys keep their catalog (original index) order.
pub fn filter_and_sort(catalog: &Catalog, criteria: &FilterCriteria) -> Vec<Product> {
    let mut visible: Vec<Product> = catalog
        .products()
        .iter()
        .filter(|p| criteria.matches(p))
        .cloned()
        .collect();

    match criteria.sort_by {
        SortBy::Name => visible.sort_by(|a, b| a.name.cmp(&b.name)),
        SortBy::PriceLowHigh => visible.sort_by(|a, b| a.price.cmp(&b.price)),
        SortBy::PriceHighLow => visible.sort_by(|a, b| b.price.cmp(&a.price)),
        SortBy::Rating => visible.sort_by(|a, b| b.rating.cmp(&a.rating)),
    }

    visible
}

/// Snapshot of one engine run: the visible list plus enough context for a
/// "Showing X of Y products" header.
///
/// Holding the snapshot in an `Option` distinguishes "computed and empty"
/// from "not yet computed" — an empty result is a valid state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilteredProducts {
    criteria: FilterCriteria,
    products: Vec<Product>,
    catalog_len: usize,
}

impl FilteredProducts {
    /// Run the engine and capture the result.
    pub fn compute(catalog: &Catalog, criteria: &FilterCriteria) -> Self {
        Self {
            criteria: criteria.clone(),
            products: filter_and_sort(catalog, criteria),
            catalog_len: catalog.len(),
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products that passed the predicates.
    pub fn matching(&self) -> usize {
        self.products.len()
    }

    /// Total catalog size the run was computed against.
    pub fn total(&self) -> usize {
        self.catalog_len
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Header copy for the products section.
    pub fn summary(&self) -> String {
        format!("Showing {} of {} products", self.matching(), self.total())
    }
}
