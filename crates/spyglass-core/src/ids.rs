//! Branded identifier newtypes.
//!
//! Raw integers and UUIDs are easy to mix up across call sites; wrapping
//! them in single-field newtypes makes the compiler catch a session id
//! passed where a connection id was expected.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of the character session a broadcast proxy mirrors.
///
/// Assigned by the game layer at session construction (the character's
/// numeric GUID) and immutable for the life of the session. Shared by all
/// viewers attached to the same session so they can be correlated back to
/// the character they are watching.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(u32);

impl SessionId {
    /// Wrap a raw game-layer identifier.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw numeric identifier.
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session-{}", self.0)
    }
}

/// Identifier of a creature (player, monster, or NPC) on the game map.
///
/// Events that describe world state carry creature ids, not references into
/// game state; resolving an id back to a creature is the endpoint's concern.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CreatureId(u32);

impl CreatureId {
    /// Wrap a raw creature identifier.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw numeric identifier.
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for CreatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "creature-{}", self.0)
    }
}

/// Stable identity of one connection endpoint.
///
/// Generated once when the underlying connection is set up and never reused;
/// serves as the registry key for viewer attach/detach, so equality here is
/// connection identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectionId(Uuid);

impl ConnectionId {
    /// Generate a fresh connection identity (UUID v7).
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }

    /// Wrap an existing UUID (e.g. one read back from a peer handshake).
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// The underlying UUID.
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_id_roundtrips_raw_value() {
        let id = SessionId::new(0xDEAD_BEEF);
        assert_eq!(id.raw(), 0xDEAD_BEEF);
    }

    #[test]
    fn session_id_serde_is_transparent() {
        let id = SessionId::new(42);
        let json = serde_json::to_value(id).unwrap();
        assert_eq!(json, serde_json::json!(42));
        let back: SessionId = serde_json::from_value(json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn connection_ids_are_unique() {
        let a = ConnectionId::generate();
        let b = ConnectionId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn session_id_display() {
        assert_eq!(SessionId::new(7).to_string(), "session-7");
    }
}
