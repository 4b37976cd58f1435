use serde::{Deserialize, Serialize};

use velogo_catalog::{MenuItem, MenuItemId, StoreId};
use velogo_core::{DomainError, DomainResult};
use velogo_pricing::{food_breakdown, PriceBreakdown};

/// One menu item plus its requested quantity.
///
/// Quantity is at least 1 by construction; a line that would reach 0 is
/// removed from the cart instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub item: MenuItem,
    pub quantity: u32,
}

/// Single-store shopping cart.
///
/// The owning store lives on the cart itself, not on each line, so a cart
/// holding lines from two restaurants cannot be constructed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    store_id: Option<StoreId>,
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `item` on behalf of `store_id`.
    ///
    /// Rejected (cart unchanged) when the cart already belongs to a different
    /// store. First add of an item creates a line with quantity 1; adding an
    /// item already in the cart increments its line.
    pub fn add(&mut self, item: MenuItem, store_id: StoreId) -> DomainResult<()> {
        match self.store_id {
            Some(owner) if owner != store_id => {
                return Err(DomainError::conflict(
                    "cart belongs to another restaurant; empty it or finish checkout first",
                ));
            }
            _ => {}
        }

        self.store_id = Some(store_id);
        match self.lines.iter_mut().find(|l| l.item.id == item.id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine { item, quantity: 1 }),
        }
        Ok(())
    }

    /// Add one unit to an existing line. Absent items are a no-op.
    pub fn increment(&mut self, item_id: MenuItemId) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.item.id == item_id) {
            line.quantity += 1;
        }
    }

    /// Remove one unit from an existing line; the line disappears at zero.
    /// Absent items are a no-op.
    pub fn decrement(&mut self, item_id: MenuItemId) {
        if let Some(pos) = self.lines.iter().position(|l| l.item.id == item_id) {
            if self.lines[pos].quantity > 1 {
                self.lines[pos].quantity -= 1;
            } else {
                self.lines.remove(pos);
            }
        }
        if self.lines.is_empty() {
            self.store_id = None;
        }
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.store_id = None;
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn store_id(&self) -> Option<StoreId> {
        self.store_id
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total units across all lines (the cart badge count).
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Price the cart. Recomputed from the lines on every call.
    pub fn breakdown(&self) -> PriceBreakdown {
        food_breakdown(self.lines.iter().map(|l| (l.item.unit_price, l.quantity)))
    }
}
