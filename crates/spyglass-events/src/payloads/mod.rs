//! Typed payload structs for the outbound event surface, grouped by domain.
//!
//! Payloads are value snapshots, never references into live game state: the
//! proxy forwards data, the endpoints own encoding, and nothing here can
//! dangle when the simulation mutates underneath a dispatch.

pub mod creature;
pub mod item;
pub mod market;
pub mod ui;

pub use creature::{
    CreatureSnapshot, LightInfo, Outfit, PartyShield, Skull, SpeakerSnapshot, SquareColor,
    VipStatus,
};
pub use item::{ContainerId, InventorySlot, ItemSnapshot, ShopEntry, SlottedItem};
pub use market::MarketOffer;
pub use ui::{ForgeAction, ModalChoice, ModalWindowSnapshot, SessionEndReason, SoundSource};
