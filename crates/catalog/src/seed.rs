//! Demo dataset: the Guadalajara pilot catalog.
//!
//! Stands in for the hosted catalog tables in dev and tests.

use velogo_core::EntityId;

use crate::catalog::Catalog;
use crate::menu::{MenuItem, MenuItemId};
use crate::restaurant::{Restaurant, StoreId};

struct RestaurantSeed {
    name: &'static str,
    category: &'static str,
    eta: (u16, u16),
    rating: f32,
    delivery_fee: u64,
    promo: &'static str,
    image_seed: &'static str,
    menu: &'static [(&'static str, u64, &'static [&'static str])],
}

const RESTAURANTS: &[RestaurantSeed] = &[
    RestaurantSeed {
        name: "Tacos Providencia",
        category: "Mexicana",
        eta: (18, 30),
        rating: 4.7,
        delivery_fee: 29,
        promo: "2x1 en pastor (hoy)",
        image_seed: "tacos",
        menu: &[
            ("Tacos al pastor (5u)", 89, &["Top"]),
            ("Quesadilla de asada", 79, &[]),
            ("Gringa", 95, &["Popular"]),
            ("Agua de horchata", 39, &[]),
        ],
    },
    RestaurantSeed {
        name: "Burger Chapu",
        category: "Hamburguesas",
        eta: (22, 35),
        rating: 4.8,
        delivery_fee: 35,
        promo: "Combo con papas",
        image_seed: "chapu",
        menu: &[
            ("Clásica 150g", 139, &[]),
            ("Doble queso 180g", 169, &["Top"]),
            ("Papas gajo", 59, &[]),
            ("Refresco 355ml", 29, &[]),
        ],
    },
    RestaurantSeed {
        name: "Pizzería Arcos",
        category: "Pizza",
        eta: (20, 32),
        rating: 4.6,
        delivery_fee: 32,
        promo: "Mediana 2 toppings $149",
        image_seed: "pizza-gdl",
        menu: &[
            ("Margarita", 129, &["Veggie"]),
            ("Pepperoni", 149, &["Top"]),
            ("Hawaiana", 149, &[]),
            ("Limonada", 35, &[]),
        ],
    },
];

/// Categories the storefront offers as filter chips.
pub const CATEGORIES: &[&str] = &["Mexicana", "Hamburguesas", "Pizza"];

/// Build the demo catalog. Ids are freshly generated per call.
pub fn guadalajara() -> Catalog {
    let mut restaurants = Vec::with_capacity(RESTAURANTS.len());
    let mut items = Vec::new();

    for entry in RESTAURANTS {
        let store_id = StoreId::new(EntityId::new());
        restaurants.push(Restaurant {
            id: store_id,
            name: entry.name.to_string(),
            category: entry.category.to_string(),
            eta_min: entry.eta.0,
            eta_max: entry.eta.1,
            rating: entry.rating,
            delivery_fee: entry.delivery_fee,
            promo: Some(entry.promo.to_string()),
            image_url: format!("https://picsum.photos/seed/{}/640/360", entry.image_seed),
        });
        for (name, unit_price, tags) in entry.menu {
            items.push(MenuItem {
                id: MenuItemId::new(EntityId::new()),
                store_id,
                name: name.to_string(),
                unit_price: *unit_price,
                tags: tags.iter().map(|t| t.to_string()).collect(),
            });
        }
    }

    Catalog::new(restaurants, items)
}
