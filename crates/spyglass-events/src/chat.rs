//! Speech and message classification.
//!
//! [`SpeechKind`] is the discriminator the conditional broadcast policy
//! keys on: a directed private message reaches the owner but must never
//! leak to spectators. The wire codes here are the classic talk-type
//! values the client protocol uses; [`TryFrom<u8>`] covers the parse
//! direction for the protocol layer.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::WireCodeError;

/// Identifier of a chat channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelId(pub u16);

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "channel-{}", self.0)
    }
}

/// How a piece of speech was uttered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeechKind {
    /// Normal talk, audible to nearby creatures.
    Say,
    /// Whisper, audible only on adjacent tiles.
    Whisper,
    /// Yell, audible over a wide range.
    Yell,
    /// Private message delivered *to* this client from another player.
    PrivateFrom,
    /// Private message sent *by* this client to another player.
    PrivateTo,
    /// Regular (yellow) channel talk.
    ChannelYellow,
    /// Gamemaster (orange) channel talk.
    ChannelOrange,
    /// Private NPC speech directed to this client.
    NpcFrom,
    /// Speech from this client directed at an NPC.
    NpcTo,
    /// Server-wide broadcast.
    Broadcast,
    /// Staff (red) channel talk.
    ChannelRed,
    /// Monster ambient speech.
    MonsterSay,
    /// Monster yell.
    MonsterYell,
}

impl SpeechKind {
    /// Whether this speech is a directed private delivery.
    ///
    /// Private deliveries reach the session owner but are withheld from
    /// spectators (see the conditional broadcast policy).
    pub const fn is_private_delivery(self) -> bool {
        matches!(self, Self::PrivateFrom)
    }

    /// The talk-type code sent on the wire.
    pub const fn wire_code(self) -> u8 {
        match self {
            Self::Say => 1,
            Self::Whisper => 2,
            Self::Yell => 3,
            Self::PrivateFrom => 4,
            Self::PrivateTo => 5,
            Self::ChannelYellow => 7,
            Self::ChannelOrange => 8,
            Self::NpcFrom => 10,
            Self::NpcTo => 12,
            Self::Broadcast => 13,
            Self::ChannelRed => 14,
            Self::MonsterSay => 22,
            Self::MonsterYell => 23,
        }
    }
}

impl TryFrom<u8> for SpeechKind {
    type Error = WireCodeError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Say),
            2 => Ok(Self::Whisper),
            3 => Ok(Self::Yell),
            4 => Ok(Self::PrivateFrom),
            5 => Ok(Self::PrivateTo),
            7 => Ok(Self::ChannelYellow),
            8 => Ok(Self::ChannelOrange),
            10 => Ok(Self::NpcFrom),
            12 => Ok(Self::NpcTo),
            13 => Ok(Self::Broadcast),
            14 => Ok(Self::ChannelRed),
            22 => Ok(Self::MonsterSay),
            23 => Ok(Self::MonsterYell),
            other => Err(WireCodeError::SpeechKind(other)),
        }
    }
}

/// Classification of a server text message (colour and console routing
/// are the client's concern; the proxy only carries the class through).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageClass {
    /// Action failed ("Sorry, not possible." and friends).
    Failure,
    /// Login-time information.
    Login,
    /// Administrative broadcast.
    Admin,
    /// Game event information.
    Game,
    /// Highlighted game event information.
    GameHighlight,
    /// Look/description output.
    Look,
    /// Damage dealt to others.
    DamageDealt,
    /// Damage received.
    DamageReceived,
    /// Healing received.
    Healed,
    /// Experience gained.
    Experience,
    /// Status bar information.
    Status,
    /// Loot messages.
    Loot,
    /// NPC trade information.
    TradeNpc,
    /// Guild channel notice.
    Guild,
    /// Party member notice.
    Party,
    /// Market information.
    Market,
    /// Tutorial hint text.
    TutorialHint,
}

/// Membership change inside a chat channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelEventKind {
    /// A player joined the channel.
    Join,
    /// A player left the channel.
    Leave,
    /// A player was invited to the channel.
    Invite,
    /// A player was excluded from the channel.
    Exclude,
}

impl ChannelEventKind {
    /// The event code sent on the wire.
    pub const fn wire_code(self) -> u8 {
        match self {
            Self::Join => 0,
            Self::Leave => 1,
            Self::Invite => 2,
            Self::Exclude => 3,
        }
    }
}

impl TryFrom<u8> for ChannelEventKind {
    type Error = WireCodeError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Join),
            1 => Ok(Self::Leave),
            2 => Ok(Self::Invite),
            3 => Ok(Self::Exclude),
            other => Err(WireCodeError::ChannelEvent(other)),
        }
    }
}
