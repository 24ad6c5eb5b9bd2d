//! Item, container, and inventory payload snapshots.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Client-side identifier of an open container window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContainerId(pub u8);

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "container-{}", self.0)
    }
}

/// Value snapshot of an item as shown to a client.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSnapshot {
    /// Item type id.
    pub item_id: u16,
    /// Stack count or charge subtype.
    pub count: u8,
    /// Upgrade tier (0 for untiered items).
    pub tier: u8,
}

impl ItemSnapshot {
    /// A single untiered item of the given type.
    pub const fn of_type(item_id: u16) -> Self {
        Self { item_id, count: 1, tier: 0 }
    }
}

/// Equipment slot on the player's body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InventorySlot {
    /// Helmet slot.
    Head,
    /// Amulet slot.
    Necklace,
    /// Backpack slot.
    Backpack,
    /// Armor slot.
    Armor,
    /// Right hand.
    Right,
    /// Left hand.
    Left,
    /// Legs slot.
    Legs,
    /// Boots slot.
    Feet,
    /// Ring slot.
    Ring,
    /// Ammunition slot.
    Ammo,
}

/// An item bound to the inventory slot it occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlottedItem {
    /// Occupied slot.
    pub slot: InventorySlot,
    /// Item in that slot.
    pub item: ItemSnapshot,
}

/// One line of an NPC shop listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopEntry {
    /// Item type id.
    pub item_id: u16,
    /// Subtype/count the price applies to.
    pub count: u8,
    /// Price the NPC charges to sell to the player (0 if not sold).
    pub buy_price: u32,
    /// Price the NPC pays when buying from the player (0 if not bought).
    pub sell_price: u32,
    /// Display name.
    pub name: String,
}
