use serde::{Deserialize, Serialize};

use velogo_core::{Entity, EntityId};

/// Restaurant (store) identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoreId(pub EntityId);

impl StoreId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for StoreId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl core::str::FromStr for StoreId {
    type Err = velogo_core::DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// Restaurant record as served by the catalog read boundary.
///
/// Immutable, sourced externally. `delivery_fee` is the fee the storefront
/// advertises on the card; the checkout total uses the flat pricing constant,
/// not this field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: StoreId,
    pub name: String,
    pub category: String,
    /// Advertised delivery window, minutes.
    pub eta_min: u16,
    pub eta_max: u16,
    pub rating: f32,
    /// Advertised fee in smallest currency unit.
    pub delivery_fee: u64,
    pub promo: Option<String>,
    pub image_url: String,
}

impl Entity for Restaurant {
    type Id = StoreId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
