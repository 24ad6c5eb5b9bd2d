//! Creature-related payload snapshots.

use serde::{Deserialize, Serialize};
use spyglass_core::{CreatureId, Direction};

/// Appearance of a creature: sprite plus colour channels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outfit {
    /// Sprite/look type id.
    pub look_type: u16,
    /// Head colour index.
    pub head: u8,
    /// Body colour index.
    pub body: u8,
    /// Legs colour index.
    pub legs: u8,
    /// Feet colour index.
    pub feet: u8,
    /// Addon bitmask.
    pub addons: u8,
    /// Mount look type (0 when unmounted).
    pub mount: u16,
}

/// Light emitted by a creature or by the world.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightInfo {
    /// Light radius level.
    pub level: u8,
    /// Light colour index.
    pub color: u8,
}

/// Snapshot of a creature as it enters a client's view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatureSnapshot {
    /// Creature identity.
    pub id: CreatureId,
    /// Display name.
    pub name: String,
    /// Current health as a percentage of maximum.
    pub health_percent: u8,
    /// Current appearance.
    pub outfit: Outfit,
    /// Current facing.
    pub direction: Direction,
}

/// Minimal identity of a speaking creature.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeakerSnapshot {
    /// Creature identity.
    pub id: CreatureId,
    /// Display name.
    pub name: String,
    /// Character level (0 for non-player speakers).
    pub level: u16,
}

/// PvP skull marker shown above a creature.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Skull {
    /// No skull.
    #[default]
    None,
    /// Yellow skull (aggressor against a party member).
    Yellow,
    /// Green skull (party member).
    Green,
    /// White skull (recent unjustified attack).
    White,
    /// Red skull (repeated unjustified kills).
    Red,
    /// Black skull (excessive unjustified kills).
    Black,
    /// Orange skull (revenge right marker).
    Orange,
}

/// Party/war shield marker shown next to a creature.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartyShield {
    /// No shield.
    #[default]
    None,
    /// Invited this client to a party.
    WhiteYellow,
    /// Invited by this client's party leader.
    WhiteBlue,
    /// Member of this client's party.
    Blue,
    /// Leader of this client's party.
    Yellow,
    /// Party member with shared experience active.
    BlueSharedExp,
    /// Party leader with shared experience active.
    YellowSharedExp,
}

/// Colour of the square highlight drawn around a creature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SquareColor {
    /// Black highlight.
    Black,
    /// White highlight (e.g. attack target flash).
    White,
}

/// Online status of a VIP list entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VipStatus {
    /// Offline.
    #[default]
    Offline,
    /// Online.
    Online,
    /// Pending (logging in/out).
    Pending,
    /// Training (online but idle-flagged).
    Training,
}
