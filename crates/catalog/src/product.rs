use serde::{Deserialize, Serialize};

use techstore_core::EntityId;

/// Product identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub EntityId);

impl ProductId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Product category.
///
/// Categories are string-backed rather than a closed enum: merchandising
/// adds new ones without a schema change. The empty string is a legal (if
/// unusual) category value; "match everything" is expressed by the filter's
/// `Option`, not by a sentinel value here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Merchandising badge attached to a product card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Badge {
    Bestseller,
    LowStock,
    NewArrival,
}

impl Badge {
    /// Display label for the badge.
    pub fn label(&self) -> &'static str {
        match self {
            Badge::Bestseller => "Best Seller",
            Badge::LowStock => "Only Few Left",
            Badge::NewArrival => "New Arrival",
        }
    }
}

/// A catalog product record.
///
/// Immutable after load; the catalog hands out references and the engine
/// clones records into snapshots, so nothing ever writes back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Price in smallest currency unit (e.g., cents).
    pub price: u64,
    /// Pre-discount price, when the product is on sale.
    pub original_price: Option<u64>,
    pub category: Category,
    /// Ordered image URLs; the first is the card image.
    pub images: Vec<String>,
    pub stock: u32,
    /// Shelf capacity used for the stock-level indicator.
    pub max_stock: u32,
    /// Average rating in tenths of a star (45 = 4.5); 0..=50.
    pub rating: u8,
    pub reviews: u32,
    pub badge: Option<Badge>,
}

impl Product {
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Stock level as a percentage of shelf capacity, 0..=100.
    ///
    /// A zero capacity yields 0 rather than dividing by zero.
    pub fn stock_percent(&self) -> u8 {
        if self.max_stock == 0 {
            return 0;
        }
        let percent = u64::from(self.stock) * 100 / u64::from(self.max_stock);
        percent.min(100) as u8
    }

    /// Whether the stock indicator should warn (below 30% of capacity).
    pub fn is_low_stock(&self) -> bool {
        self.stock_percent() < 30
    }

    /// Rounded discount percentage against the original price, when on sale.
    pub fn discount_percent(&self) -> Option<u8> {
        match self.original_price {
            Some(original) if original > 0 => {
                let saved = original.saturating_sub(self.price);
                Some(((saved * 100 + original / 2) / original) as u8)
            }
            _ => None,
        }
    }

    /// Whole stars for the rating row (4.5 renders four filled stars).
    pub fn full_stars(&self) -> u8 {
        self.rating / 10
    }
}
