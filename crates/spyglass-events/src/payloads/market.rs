//! Market payload snapshots.

use serde::{Deserialize, Serialize};

/// One market offer as listed in browse/history screens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketOffer {
    /// Server-assigned offer id.
    pub offer_id: u32,
    /// Item type the offer is for.
    pub item_id: u16,
    /// Upgrade tier the offer is restricted to.
    pub tier: u8,
    /// Amount of items offered.
    pub amount: u16,
    /// Price per piece in gold.
    pub price: u64,
    /// Offering character's name, when disclosed (own offers, accepted
    /// offers); anonymous listings omit it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trader: Option<String>,
}
