//! The immutable product catalog.

use serde::{Deserialize, Serialize};

use crate::product::{Category, Product, ProductId};

/// The full set of available products, supplied once at startup.
///
/// The catalog is read-only: nothing in the core mutates it, and the
/// filter engine only ever produces subsets of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from a product list. Data is assumed valid at load.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products currently on sale (those with an original price), in
    /// catalog order.
    pub fn featured_deals(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.original_price.is_some())
            .collect()
    }

    /// Distinct categories in first-appearance order, for filter menus.
    pub fn categories(&self) -> Vec<Category> {
        let mut seen: Vec<Category> = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.category) {
                seen.push(product.category.clone());
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use techstore_core::EntityId;

    fn product(name: &str, category: &str, original_price: Option<u64>) -> Product {
        Product {
            id: ProductId::new(EntityId::new()),
            name: name.to_string(),
            description: String::new(),
            price: 10_000,
            original_price,
            category: Category::from(category),
            images: Vec::new(),
            stock: 3,
            max_stock: 10,
            rating: 40,
            reviews: 10,
            badge: None,
        }
    }

    #[test]
    fn get_finds_products_by_id() {
        let laptop = product("Laptop", "Electronics", None);
        let id = laptop.id;
        let catalog = Catalog::new(vec![laptop, product("Blender", "Appliances", None)]);

        assert_eq!(catalog.get(id).map(|p| p.name.as_str()), Some("Laptop"));
        assert!(catalog.get(ProductId::new(EntityId::new())).is_none());
    }

    #[test]
    fn featured_deals_are_sale_products_in_catalog_order() {
        let catalog = Catalog::new(vec![
            product("Laptop", "Electronics", Some(120_000)),
            product("Blender", "Appliances", None),
            product("Desk", "Furniture", Some(30_000)),
        ]);

        let deals: Vec<&str> = catalog
            .featured_deals()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(deals, vec!["Laptop", "Desk"]);
    }

    #[test]
    fn categories_are_distinct_in_first_appearance_order() {
        let catalog = Catalog::new(vec![
            product("Laptop", "Electronics", None),
            product("Blender", "Appliances", None),
            product("Phone", "Electronics", None),
        ]);

        assert_eq!(
            catalog.categories(),
            vec![Category::from("Electronics"), Category::from("Appliances")]
        );
    }
}
