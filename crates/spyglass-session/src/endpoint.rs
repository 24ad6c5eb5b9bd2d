//! Collaborator contracts at the session boundary.

use std::net::IpAddr;

use spyglass_core::{ConnectionId, Position};
use spyglass_events::OutboundEvent;

/// A connection endpoint able to receive the outbound event surface.
///
/// Implemented by the protocol layer for real client connections. The
/// session never interprets delivery failures: writing bytes, buffering,
/// and disconnect handling are wholly owned by the endpoint, so `deliver`
/// is infallible at this boundary.
pub trait ClientEndpoint: Send + Sync {
    /// Stable identity of this connection, used as the registry key.
    fn connection_id(&self) -> ConnectionId;

    /// Receive one outbound event.
    fn deliver(&self, event: &OutboundEvent);

    /// Whether the client speaks a legacy protocol revision that lacks
    /// newer operations (capability-gated events are dropped for it).
    fn is_legacy_client(&self) -> bool {
        false
    }

    /// The peer's network address, when still connected.
    fn peer_address(&self) -> Option<IpAddr> {
        None
    }

    /// Protocol revision the client negotiated (0 when unknown).
    fn client_version(&self) -> u32 {
        0
    }

    /// Whether the given map position is inside this client's view.
    fn can_see(&self, position: Position) -> bool {
        let _ = position;
        false
    }
}

/// Anything the game layer can push outbound events into.
///
/// Both a raw [`ClientEndpoint`] and a [`BroadcastSession`] implement this,
/// which keeps every game-layer call site agnostic to whether the player it
/// is addressing is being spectated.
///
/// [`BroadcastSession`]: crate::BroadcastSession
pub trait EventSink {
    /// Hand one event to the sink. Never fails; sinks with nowhere to
    /// deliver drop the event silently.
    fn dispatch(&self, event: &OutboundEvent);
}

impl<T: ClientEndpoint + ?Sized> EventSink for T {
    fn dispatch(&self, event: &OutboundEvent) {
        self.deliver(event);
    }
}
