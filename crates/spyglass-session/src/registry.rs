//! Insertion-ordered viewer bookkeeping.

use std::sync::{Arc, Weak};

use spyglass_core::{ConnectionId, SessionId};
use tracing::debug;

use crate::endpoint::ClientEndpoint;

/// One attached spectator.
struct ViewerEntry {
    /// Non-owning handle; the surrounding system owns connection teardown
    /// and must detach before destroying a connection. A dead handle is
    /// skipped by dispatch, never an error.
    connection: Weak<dyn ClientEndpoint>,
    connection_id: ConnectionId,
    display_name: String,
    session_id: SessionId,
}

/// Registry of spectator connections for one broadcast session.
///
/// Keys are connection identities; insertion order is the dispatch order.
/// Attach and detach are idempotent: re-attaching an already-present
/// connection keeps its original entry (and display name), and detaching an
/// unknown connection is a no-op.
///
/// Guest names derive from the registry size at attach time (`Guest-1`,
/// `Guest-2`, ...). After detach churn a freed number can be issued again;
/// the surrounding system treats guest names as display labels, not keys.
pub struct ViewerRegistry {
    session_id: SessionId,
    entries: Vec<ViewerEntry>,
}

impl ViewerRegistry {
    /// An empty registry stamping `session_id` onto every attached viewer.
    pub fn new(session_id: SessionId) -> Self {
        Self { session_id, entries: Vec::new() }
    }

    /// Attach a spectator. Returns `true` if the connection was inserted,
    /// `false` if it was already present (no state changes then).
    pub fn attach(&mut self, endpoint: &Arc<dyn ClientEndpoint>) -> bool {
        let connection_id = endpoint.connection_id();
        if self.contains(connection_id) {
            return false;
        }

        let display_name = format!("Guest-{}", self.entries.len() + 1);
        debug!(session = %self.session_id, connection = %connection_id, name = %display_name, "viewer attached");
        self.entries.push(ViewerEntry {
            connection: Arc::downgrade(endpoint),
            connection_id,
            display_name,
            session_id: self.session_id,
        });
        true
    }

    /// Detach a spectator by connection identity. Returns `true` if an
    /// entry was removed.
    pub fn detach(&mut self, connection_id: ConnectionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.connection_id != connection_id);
        let removed = self.entries.len() != before;
        if removed {
            debug!(session = %self.session_id, connection = %connection_id, "viewer detached");
        }
        removed
    }

    /// Whether a connection is currently attached.
    pub fn contains(&self, connection_id: ConnectionId) -> bool {
        self.entries.iter().any(|entry| entry.connection_id == connection_id)
    }

    /// Display names of all attached viewers, in attachment order.
    pub fn display_names(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.display_name.clone()).collect()
    }

    /// The session a viewer connection is watching, or `None` if the
    /// connection is not attached here.
    pub fn session_id_of(&self, connection_id: ConnectionId) -> Option<SessionId> {
        self.entries
            .iter()
            .find(|entry| entry.connection_id == connection_id)
            .map(|entry| entry.session_id)
    }

    /// Number of attached viewers (dead handles included until detached).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no viewer is attached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot of the currently live endpoints, in attachment order.
    ///
    /// Entries whose connection has been destroyed without a detach are
    /// skipped; they stay registered (holding their guest number) until the
    /// surrounding system detaches them.
    pub(crate) fn live_endpoints(&self) -> Vec<Arc<dyn ClientEndpoint>> {
        self.entries.iter().filter_map(|entry| entry.connection.upgrade()).collect()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use spyglass_events::OutboundEvent;

    use super::*;

    struct NullEndpoint {
        id: ConnectionId,
    }

    impl NullEndpoint {
        fn new() -> Arc<dyn ClientEndpoint> {
            Arc::new(Self { id: ConnectionId::generate() })
        }
    }

    impl ClientEndpoint for NullEndpoint {
        fn connection_id(&self) -> ConnectionId {
            self.id
        }

        fn deliver(&self, _event: &OutboundEvent) {}
    }

    #[test]
    fn naming_follows_attachment_order() {
        let mut registry = ViewerRegistry::new(SessionId::new(1));
        let (a, b, c) = (NullEndpoint::new(), NullEndpoint::new(), NullEndpoint::new());
        assert!(registry.attach(&a));
        assert!(registry.attach(&b));
        assert!(registry.attach(&c));
        assert_eq!(registry.display_names(), ["Guest-1", "Guest-2", "Guest-3"]);
    }

    #[test]
    fn attach_is_idempotent_and_keeps_the_original_name() {
        let mut registry = ViewerRegistry::new(SessionId::new(1));
        let a = NullEndpoint::new();
        assert!(registry.attach(&a));
        assert!(!registry.attach(&a));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.display_names(), ["Guest-1"]);
    }

    #[test]
    fn detach_is_idempotent() {
        let mut registry = ViewerRegistry::new(SessionId::new(1));
        let a = NullEndpoint::new();
        let b = NullEndpoint::new();
        assert!(registry.attach(&a));
        assert!(registry.detach(a.connection_id()));
        assert!(!registry.detach(a.connection_id()));
        assert!(!registry.detach(b.connection_id()));
        assert!(registry.is_empty());
    }

    #[test]
    fn session_id_lookup_uses_a_none_sentinel() {
        let mut registry = ViewerRegistry::new(SessionId::new(77));
        let a = NullEndpoint::new();
        let stranger = NullEndpoint::new();
        assert!(registry.attach(&a));
        assert_eq!(registry.session_id_of(a.connection_id()), Some(SessionId::new(77)));
        assert_eq!(registry.session_id_of(stranger.connection_id()), None);
    }

    #[test]
    fn dead_connections_are_skipped_by_snapshots_but_stay_registered() {
        let mut registry = ViewerRegistry::new(SessionId::new(1));
        let a = NullEndpoint::new();
        let b = NullEndpoint::new();
        assert!(registry.attach(&a));
        assert!(registry.attach(&b));
        drop(a);
        assert_eq!(registry.len(), 2);
        let live = registry.live_endpoints();
        assert_eq!(live.len(), 1);
        assert_eq!(live[0].connection_id(), b.connection_id());
    }

    #[test]
    fn guest_numbers_can_collide_after_churn() {
        // Known consequence of deriving names from the current size: once
        // Guest-1 leaves, the next attach is numbered Guest-2 again.
        let mut registry = ViewerRegistry::new(SessionId::new(1));
        let (a, b, c) = (NullEndpoint::new(), NullEndpoint::new(), NullEndpoint::new());
        assert!(registry.attach(&a));
        assert!(registry.attach(&b));
        assert!(registry.detach(a.connection_id()));
        assert!(registry.attach(&c));
        assert_eq!(registry.display_names(), ["Guest-2", "Guest-2"]);
    }

    proptest! {
        /// Arbitrary attach/detach interleavings keep identities unique and
        /// preserve attachment order.
        #[test]
        fn churn_preserves_uniqueness_and_order(ops in proptest::collection::vec(0usize..8, 1..64)) {
            let pool: Vec<Arc<dyn ClientEndpoint>> = (0..4).map(|_| NullEndpoint::new()).collect();
            let mut registry = ViewerRegistry::new(SessionId::new(9));
            let mut expected: Vec<ConnectionId> = Vec::new();

            for op in ops {
                let endpoint = &pool[op % pool.len()];
                let id = endpoint.connection_id();
                if op < 4 {
                    let inserted = registry.attach(endpoint);
                    prop_assert_eq!(inserted, !expected.contains(&id));
                    if inserted {
                        expected.push(id);
                    }
                } else {
                    let removed = registry.detach(id);
                    prop_assert_eq!(removed, expected.contains(&id));
                    expected.retain(|known| *known != id);
                }

                prop_assert_eq!(registry.len(), expected.len());
                let live: Vec<ConnectionId> =
                    registry.live_endpoints().iter().map(|endpoint| endpoint.connection_id()).collect();
                prop_assert_eq!(live, expected.clone());
            }
        }
    }
}
