//! Pure browse helpers: category filter, name search, sort orders.

use serde::{Deserialize, Serialize};

use crate::restaurant::Restaurant;

/// Sort orders offered by the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Default: best rated first.
    Recommended,
    /// Shortest lower ETA bound first.
    Fastest,
    TopRated,
    CheapestDelivery,
}

impl Default for SortKey {
    fn default() -> Self {
        SortKey::Recommended
    }
}

/// Browse parameters. `category: None` means "all categories".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrowseQuery {
    pub search: String,
    pub category: Option<String>,
    pub sort: SortKey,
}

/// Filter and sort a restaurant list for display.
///
/// Pure: the input slice is not modified.
pub fn browse(restaurants: &[Restaurant], query: &BrowseQuery) -> Vec<Restaurant> {
    let mut list: Vec<Restaurant> = restaurants
        .iter()
        .filter(|r| match &query.category {
            Some(c) => r.category == *c,
            None => true,
        })
        .filter(|r| {
            query.search.is_empty()
                || r.name.to_lowercase().contains(&query.search.to_lowercase())
        })
        .cloned()
        .collect();

    match query.sort {
        SortKey::Recommended | SortKey::TopRated => {
            list.sort_by(|a, b| b.rating.total_cmp(&a.rating))
        }
        SortKey::Fastest => list.sort_by_key(|r| r.eta_min),
        SortKey::CheapestDelivery => list.sort_by_key(|r| r.delivery_fee),
    }
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn all() -> Vec<Restaurant> {
        seed::guadalajara().restaurants_by_rating()
    }

    #[test]
    fn category_filter_narrows_the_list() {
        let query = BrowseQuery {
            category: Some("Pizza".to_string()),
            ..Default::default()
        };
        let list = browse(&all(), &query);
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].name, "Pizzería Arcos");
    }

    #[test]
    fn every_filter_chip_matches_exactly_one_seed_restaurant() {
        let restaurants = all();
        for category in crate::seed::CATEGORIES {
            let query = BrowseQuery {
                category: Some(category.to_string()),
                ..Default::default()
            };
            assert_eq!(browse(&restaurants, &query).len(), 1, "{category}");
        }
    }

    #[test]
    fn search_is_case_insensitive() {
        let query = BrowseQuery {
            search: "burger".to_string(),
            ..Default::default()
        };
        let list = browse(&all(), &query);
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].name, "Burger Chapu");
    }

    #[test]
    fn fastest_sorts_by_lower_eta_bound() {
        let query = BrowseQuery {
            sort: SortKey::Fastest,
            ..Default::default()
        };
        let list = browse(&all(), &query);
        let etas: Vec<u16> = list.iter().map(|r| r.eta_min).collect();
        let mut sorted = etas.clone();
        sorted.sort_unstable();
        assert_eq!(etas, sorted);
    }

    #[test]
    fn cheapest_delivery_sorts_by_fee() {
        let query = BrowseQuery {
            sort: SortKey::CheapestDelivery,
            ..Default::default()
        };
        let list = browse(&all(), &query);
        assert_eq!(list[0].name, "Tacos Providencia");
    }
}
