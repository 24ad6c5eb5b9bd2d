//! Window, dialog, and session-control payload types.

use serde::{Deserialize, Serialize};

/// A button or list choice inside a modal window.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalChoice {
    /// Choice id echoed back by the client on selection.
    pub id: u8,
    /// Display text.
    pub text: String,
}

/// Snapshot of a scripted modal dialog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalWindowSnapshot {
    /// Window id echoed back by the client on answer.
    pub id: u32,
    /// Title bar text.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Buttons along the bottom edge.
    pub buttons: Vec<ModalChoice>,
    /// Selectable list entries.
    pub choices: Vec<ModalChoice>,
    /// Button id triggered by the enter key.
    pub default_enter: u8,
    /// Button id triggered by the escape key.
    pub default_escape: u8,
    /// Whether the dialog blocks other interface interaction.
    pub priority: bool,
}

/// Why a session-end notice is being shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionEndReason {
    /// Ordinary logout.
    Logout,
    /// Kicked by a gamemaster or by a concurrent login.
    Kicked,
    /// Account banished.
    Banished,
    /// Connection force-closed by the server.
    ForcedClose,
}

/// Which exaltation forge operation a result refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForgeAction {
    /// Fuse two items of the same type.
    Fusion,
    /// Transfer a tier between items.
    Transfer,
    /// Convert dust into slivers.
    DustToSlivers,
    /// Convert slivers into cores.
    SliversToCores,
    /// Raise the dust storage limit.
    IncreaseLimit,
}

/// Spatial attribution of a sound effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundSource {
    /// Ambient/global sound.
    Global,
    /// Caused by the receiving player.
    Own,
    /// Caused by another player.
    Others,
    /// Caused by a creature.
    Creatures,
}
