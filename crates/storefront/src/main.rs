//! Demo binary: seeds a static catalog and drives the storefront facade.

use anyhow::Result;
use chrono::{Duration, Utc};

use techstore_catalog::{Badge, Catalog, Category, FilterCriteria, Product, ProductId, SortBy};
use techstore_core::EntityId;
use techstore_storefront::Storefront;

fn main() -> Result<()> {
    techstore_observability::init();

    let now = Utc::now();
    let sale_ends = now + Duration::days(7);
    let mut store = Storefront::new(demo_catalog(), sale_ends, now);

    store.set_filter_criteria(FilterCriteria::default());
    if let Some(view) = store.filtered() {
        tracing::info!("{}", view.summary());
    }
    tracing::info!(deals = store.featured_deals().len(), "featured deals on sale");

    // Browse the cheapest in-stock products first.
    store.set_filter_criteria(FilterCriteria {
        in_stock_only: true,
        sort_by: SortBy::PriceLowHigh,
        ..FilterCriteria::default()
    });

    let picks: Vec<ProductId> = store
        .filtered()
        .map(|view| view.products().iter().take(2).map(|p| p.id).collect())
        .unwrap_or_default();

    for id in &picks {
        store.add_to_cart(*id, Utc::now())?;
    }
    if let Some(first) = picks.first() {
        // A second unit of the cheapest pick.
        store.add_to_cart(*first, Utc::now())?;
    }

    let cart = store.cart();
    tracing::info!(
        total_items = cart.total_items,
        total_price = cart.total_price,
        "cart after shopping"
    );
    tracing::info!("cart snapshot: {}", serde_json::to_string_pretty(&cart)?);

    // Let the toasts expire and the countdown tick for a few seconds.
    for _ in 0..4 {
        std::thread::sleep(std::time::Duration::from_secs(1));
        store.tick(Utc::now());

        let remaining = store.countdown().remaining();
        tracing::info!(
            days = remaining.days,
            hours = remaining.hours,
            minutes = remaining.minutes,
            seconds = remaining.seconds,
            toasts = store.toasts().len(),
            "tick"
        );
    }

    store.cancel_countdown();
    Ok(())
}

fn demo_catalog() -> Catalog {
    struct Seed {
        name: &'static str,
        description: &'static str,
        price: u64,
        original_price: Option<u64>,
        category: &'static str,
        stock: u32,
        max_stock: u32,
        rating: u8,
        reviews: u32,
        badge: Option<Badge>,
    }

    let seeds = [
        Seed {
            name: "Wireless Headphones",
            description: "Over-ear headphones with active noise cancelling and 30h battery.",
            price: 8_999,
            original_price: Some(12_999),
            category: "Electronics",
            stock: 15,
            max_stock: 50,
            rating: 45,
            reviews: 234,
            badge: Some(Badge::Bestseller),
        },
        Seed {
            name: "Smart Watch",
            description: "Fitness tracking, heart-rate monitor, week-long battery life.",
            price: 19_999,
            original_price: Some(24_999),
            category: "Electronics",
            stock: 22,
            max_stock: 40,
            rating: 43,
            reviews: 158,
            badge: Some(Badge::NewArrival),
        },
        Seed {
            name: "Drip Coffee Maker",
            description: "12-cup programmable brewer with thermal carafe.",
            price: 7_999,
            original_price: None,
            category: "Appliances",
            stock: 3,
            max_stock: 20,
            rating: 41,
            reviews: 89,
            badge: Some(Badge::LowStock),
        },
        Seed {
            name: "Ergonomic Office Chair",
            description: "Adjustable lumbar support, breathable mesh back.",
            price: 28_999,
            original_price: None,
            category: "Furniture",
            stock: 8,
            max_stock: 15,
            rating: 46,
            reviews: 312,
            badge: None,
        },
        Seed {
            name: "USB-C Hub",
            description: "7-in-1 hub: HDMI, card reader, 100W pass-through charging.",
            price: 3_999,
            original_price: None,
            category: "Electronics",
            stock: 0,
            max_stock: 30,
            rating: 38,
            reviews: 67,
            badge: None,
        },
        Seed {
            name: "LED Desk Lamp",
            description: "Dimmable lamp with adjustable color temperature.",
            price: 2_499,
            original_price: Some(3_499),
            category: "Furniture",
            stock: 25,
            max_stock: 40,
            rating: 44,
            reviews: 102,
            badge: None,
        },
    ];

    let products = seeds
        .into_iter()
        .map(|seed| {
            let slug = seed.name.to_lowercase().replace(' ', "-");
            Product {
                id: ProductId::new(EntityId::new()),
                name: seed.name.to_string(),
                description: seed.description.to_string(),
                price: seed.price,
                original_price: seed.original_price,
                category: Category::from(seed.category),
                images: vec![
                    format!("https://images.techstore.example/{slug}-1.jpg"),
                    format!("https://images.techstore.example/{slug}-2.jpg"),
                ],
                stock: seed.stock,
                max_stock: seed.max_stock,
                rating: seed.rating,
                reviews: seed.reviews,
                badge: seed.badge,
            }
        })
        .collect();

    Catalog::new(products)
}
