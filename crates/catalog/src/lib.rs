//! `velogo-catalog` — restaurant/menu catalog read model.
//!
//! The catalog is external data: this crate holds the record types, the
//! rating-ordered read queries, the restaurant↔menu merge, and the pure
//! browse helpers the storefront applies on top.

pub mod browse;
pub mod catalog;
pub mod menu;
pub mod restaurant;
pub mod seed;

pub use browse::{browse, BrowseQuery, SortKey};
pub use catalog::Catalog;
pub use menu::{MenuItem, MenuItemId};
pub use restaurant::{Restaurant, StoreId};
