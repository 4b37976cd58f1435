use serde::{Deserialize, Serialize};

use velogo_core::{Entity, EntityId};

use crate::restaurant::StoreId;

/// Menu item identifier (unique within the catalog).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuItemId(pub EntityId);

impl MenuItemId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for MenuItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// One dish/drink on a restaurant's menu.
///
/// `store_id` is the foreign key back to the owning restaurant; the two
/// relations are stored separately and merged on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub store_id: StoreId,
    pub name: String,
    /// Price in smallest currency unit.
    pub unit_price: u64,
    pub tags: Vec<String>,
}

impl Entity for MenuItem {
    type Id = MenuItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
