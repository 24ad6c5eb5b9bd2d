//! The broadcast session: owner-first, policy-driven fan-out.

use std::net::IpAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use metrics::counter;
use parking_lot::RwLock;
use spyglass_core::{ConnectionId, Position, SessionId};
use spyglass_events::{BroadcastPolicy, OutboundEvent};
use tracing::{debug, trace};

use crate::endpoint::{ClientEndpoint, EventSink};
use crate::registry::ViewerRegistry;

/// Owner plus viewers, guarded together so every dispatch sees one
/// consistent picture of the session.
struct SessionState {
    owner: Option<Arc<dyn ClientEndpoint>>,
    viewers: ViewerRegistry,
}

/// Mirrors one player's outbound event stream to attached spectators.
///
/// The session exposes the same dispatch surface a raw connection does
/// (via [`EventSink`]); internally it delivers each event to the owner
/// first and then, when the event's [`BroadcastPolicy`] allows, to every
/// attached viewer in registration order.
///
/// All degraded states are silent by design: no owner, no viewers, legacy
/// owner for a gated event — each is a no-op, never an error. The session
/// survives its owner: clearing the owner leaves an orphaned session that
/// still accepts viewer attach/detach until the surrounding system drops
/// it.
pub struct BroadcastSession {
    session_id: SessionId,
    state: RwLock<SessionState>,
    /// Whether this session's player is itself spectating someone else.
    spying: AtomicBool,
}

impl BroadcastSession {
    /// An orphaned session for `session_id`; attach an owner later with
    /// [`set_owner`](Self::set_owner).
    pub fn new(session_id: SessionId) -> Self {
        Self {
            session_id,
            state: RwLock::new(SessionState { owner: None, viewers: ViewerRegistry::new(session_id) }),
            spying: AtomicBool::new(false),
        }
    }

    /// A session born with an owner attached.
    pub fn with_owner(session_id: SessionId, owner: Arc<dyn ClientEndpoint>) -> Self {
        let session = Self::new(session_id);
        session.set_owner(owner);
        session
    }

    /// The immutable identifier of the mirrored character session.
    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    // ─────────────────────────────────────────────────────────────────────
    // Owner lifecycle
    // ─────────────────────────────────────────────────────────────────────

    /// Attach (or replace) the owner. Re-parenting never touches the
    /// viewer registry; the next broadcast reaches the new owner and all
    /// existing viewers.
    pub fn set_owner(&self, owner: Arc<dyn ClientEndpoint>) {
        debug!(session = %self.session_id, connection = %owner.connection_id(), "owner attached");
        self.state.write().owner = Some(owner);
    }

    /// Drop the owner reference. The session goes orphaned: every
    /// forwarding call becomes a no-op while viewers can still be
    /// attached and detached.
    pub fn clear_owner(&self) {
        let previous = self.state.write().owner.take();
        if previous.is_some() {
            debug!(session = %self.session_id, "owner cleared, session orphaned");
        }
    }

    /// The current owner, if any.
    pub fn owner(&self) -> Option<Arc<dyn ClientEndpoint>> {
        self.state.read().owner.clone()
    }

    /// Whether an owner is attached.
    pub fn has_owner(&self) -> bool {
        self.state.read().owner.is_some()
    }

    /// Mark whether this session's player is spectating elsewhere.
    pub fn set_spying(&self, spying: bool) {
        self.spying.store(spying, Ordering::Relaxed);
    }

    /// Whether this session's player is spectating elsewhere.
    pub fn is_spying(&self) -> bool {
        self.spying.load(Ordering::Relaxed)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Owner-forwarded queries
    // ─────────────────────────────────────────────────────────────────────

    /// Whether `position` is inside the owner's view. `false` when
    /// orphaned.
    pub fn is_position_visible(&self, position: Position) -> bool {
        self.owner().is_some_and(|owner| owner.can_see(position))
    }

    /// The owner's peer address. `None` when orphaned.
    pub fn peer_address(&self) -> Option<IpAddr> {
        self.owner().and_then(|owner| owner.peer_address())
    }

    /// The owner's negotiated protocol revision. `0` when orphaned.
    pub fn client_version(&self) -> u32 {
        self.owner().map_or(0, |owner| owner.client_version())
    }

    /// Whether the owner runs a legacy client. `false` when orphaned.
    pub fn is_legacy_client(&self) -> bool {
        self.owner().is_some_and(|owner| owner.is_legacy_client())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Viewer registry
    // ─────────────────────────────────────────────────────────────────────

    /// Attach a spectator (idempotent). Works on orphaned sessions too.
    pub fn attach_viewer(&self, endpoint: &Arc<dyn ClientEndpoint>) {
        let _ = self.state.write().viewers.attach(endpoint);
    }

    /// Detach a spectator by connection identity (idempotent).
    pub fn detach_viewer(&self, connection_id: ConnectionId) {
        let _ = self.state.write().viewers.detach(connection_id);
    }

    /// Display names of attached viewers, in attachment order.
    pub fn viewer_names(&self) -> Vec<String> {
        self.state.read().viewers.display_names()
    }

    /// Number of attached viewers.
    pub fn viewer_count(&self) -> usize {
        self.state.read().viewers.len()
    }

    /// The session a viewer connection is watching through this proxy, or
    /// `None` if the connection is not attached here.
    pub fn viewer_session_id(&self, connection_id: ConnectionId) -> Option<SessionId> {
        self.state.read().viewers.session_id_of(connection_id)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Dispatch
    // ─────────────────────────────────────────────────────────────────────

    /// Deliver one event to the owner and, policy permitting, to every
    /// attached viewer in registration order.
    ///
    /// The recipient set is snapshotted under the session lock and the
    /// lock released before any collaborator runs, so endpoints can call
    /// back into the session (e.g. detach themselves) without deadlock,
    /// and concurrent attach/detach never mutates an iteration in flight.
    pub fn dispatch(&self, event: &OutboundEvent) {
        let policy = event.policy();

        let (owner, viewers) = {
            let state = self.state.read();
            let Some(owner) = state.owner.clone() else {
                trace!(session = %self.session_id, policy = policy.as_str(), "no owner, event dropped");
                counter!("spyglass_events_dropped_total", "reason" => "no_owner").increment(1);
                return;
            };

            let viewers = match policy {
                BroadcastPolicy::Broadcast => state.viewers.live_endpoints(),
                BroadcastPolicy::ConditionalBroadcast => {
                    if event.suppressed_for_viewers() {
                        counter!("spyglass_events_suppressed_total").increment(1);
                        Vec::new()
                    } else {
                        state.viewers.live_endpoints()
                    }
                }
                BroadcastPolicy::OwnerOnly | BroadcastPolicy::CapabilityGated => Vec::new(),
            };

            (owner, viewers)
        };

        if policy == BroadcastPolicy::CapabilityGated && owner.is_legacy_client() {
            trace!(session = %self.session_id, "legacy owner, gated event dropped");
            counter!("spyglass_events_dropped_total", "reason" => "legacy_client").increment(1);
            return;
        }

        owner.deliver(event);
        for viewer in &viewers {
            viewer.deliver(event);
        }

        counter!("spyglass_events_dispatched_total", "policy" => policy.as_str()).increment(1);
        if !viewers.is_empty() {
            counter!("spyglass_viewer_deliveries_total").increment(viewers.len() as u64);
        }
        trace!(
            session = %self.session_id,
            policy = policy.as_str(),
            viewers = viewers.len(),
            "event dispatched"
        );
    }
}

impl EventSink for BroadcastSession {
    fn dispatch(&self, event: &OutboundEvent) {
        Self::dispatch(self, event);
    }
}
