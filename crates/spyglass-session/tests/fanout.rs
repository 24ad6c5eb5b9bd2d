//! End-to-end fan-out behavior: one owner, many viewers, one shared
//! delivery journal asserting both completeness and relative order.

use std::sync::Arc;

use parking_lot::Mutex;
use spyglass_core::{ConnectionId, CreatureId, Position, SessionId};
use spyglass_events::payloads::{ItemSnapshot, SpeakerSnapshot};
use spyglass_events::{OutboundEvent, SpeechKind};
use spyglass_session::{BroadcastSession, ClientEndpoint, EventSink};

type Journal = Arc<Mutex<Vec<(ConnectionId, OutboundEvent)>>>;

/// Endpoint that appends every delivery to a journal shared across all
/// endpoints of a test, preserving global delivery order.
struct JournalingEndpoint {
    id: ConnectionId,
    legacy: bool,
    journal: Journal,
}

impl JournalingEndpoint {
    fn new(journal: &Journal) -> Arc<Self> {
        Arc::new(Self { id: ConnectionId::generate(), legacy: false, journal: journal.clone() })
    }

    fn legacy(journal: &Journal) -> Arc<Self> {
        Arc::new(Self { id: ConnectionId::generate(), legacy: true, journal: journal.clone() })
    }

    fn deliveries(&self) -> Vec<OutboundEvent> {
        self.journal
            .lock()
            .iter()
            .filter(|(id, _)| *id == self.id)
            .map(|(_, event)| event.clone())
            .collect()
    }
}

impl ClientEndpoint for JournalingEndpoint {
    fn connection_id(&self) -> ConnectionId {
        self.id
    }

    fn deliver(&self, event: &OutboundEvent) {
        self.journal.lock().push((self.id, event.clone()));
    }

    fn is_legacy_client(&self) -> bool {
        self.legacy
    }
}

fn as_endpoint(endpoint: &Arc<JournalingEndpoint>) -> Arc<dyn ClientEndpoint> {
    endpoint.clone()
}

fn creature_moved() -> OutboundEvent {
    OutboundEvent::CreatureMoved {
        creature: CreatureId::new(1001),
        from: Position::new(100, 100, 7),
        from_stack: 1,
        to: Position::new(100, 101, 7),
        to_stack: 1,
        teleport: false,
    }
}

fn trade_offer() -> OutboundEvent {
    OutboundEvent::TradeRequested {
        trader_name: "Mercator".into(),
        item: ItemSnapshot::of_type(3031),
        acknowledged: false,
    }
}

fn speech(kind: SpeechKind, text: &str) -> OutboundEvent {
    OutboundEvent::CreatureSpeech {
        speaker: SpeakerSnapshot { id: CreatureId::new(42), name: "Hagor".into(), level: 80 },
        kind,
        text: text.into(),
        position: Some(Position::new(100, 100, 7)),
    }
}

#[test]
fn no_owner_means_no_observable_calls() {
    spyglass_core::logging::init_for_tests();
    let journal: Journal = Journal::default();
    let session = BroadcastSession::new(SessionId::new(1));
    let viewer = JournalingEndpoint::new(&journal);
    session.attach_viewer(&as_endpoint(&viewer));

    session.dispatch(&creature_moved());
    session.dispatch(&trade_offer());
    session.dispatch(&speech(SpeechKind::Say, "anyone here?"));
    session.dispatch(&OutboundEvent::CreatureIcon { creature: CreatureId::new(1) });

    assert!(journal.lock().is_empty());
}

#[test]
fn owner_receives_before_any_viewer() {
    let journal: Journal = Journal::default();
    let owner = JournalingEndpoint::new(&journal);
    let v1 = JournalingEndpoint::new(&journal);
    let v2 = JournalingEndpoint::new(&journal);

    let session = BroadcastSession::with_owner(SessionId::new(1), as_endpoint(&owner));
    session.attach_viewer(&as_endpoint(&v1));
    session.attach_viewer(&as_endpoint(&v2));

    session.dispatch(&creature_moved());

    let order: Vec<ConnectionId> = journal.lock().iter().map(|(id, _)| *id).collect();
    assert_eq!(order, [owner.id, v1.id, v2.id]);
}

#[test]
fn broadcast_reaches_everyone_exactly_once_with_identical_arguments() {
    let journal: Journal = Journal::default();
    let owner = JournalingEndpoint::new(&journal);
    let viewers: Vec<_> = (0..3).map(|_| JournalingEndpoint::new(&journal)).collect();

    let session = BroadcastSession::with_owner(SessionId::new(1), as_endpoint(&owner));
    for viewer in &viewers {
        session.attach_viewer(&as_endpoint(viewer));
    }

    let event = creature_moved();
    session.dispatch(&event);

    assert_eq!(owner.deliveries(), [event.clone()]);
    for viewer in &viewers {
        assert_eq!(viewer.deliveries(), [event.clone()]);
    }
}

#[test]
fn owner_only_events_never_reach_viewers() {
    let journal: Journal = Journal::default();
    let owner = JournalingEndpoint::new(&journal);
    let v1 = JournalingEndpoint::new(&journal);
    let v2 = JournalingEndpoint::new(&journal);

    let session = BroadcastSession::with_owner(SessionId::new(1), as_endpoint(&owner));
    session.attach_viewer(&as_endpoint(&v1));
    session.attach_viewer(&as_endpoint(&v2));

    session.dispatch(&trade_offer());

    assert_eq!(owner.deliveries().len(), 1);
    assert!(v1.deliveries().is_empty());
    assert!(v2.deliveries().is_empty());
}

#[test]
fn private_speech_reaches_the_owner_but_no_viewer() {
    let journal: Journal = Journal::default();
    let owner = JournalingEndpoint::new(&journal);
    let viewer = JournalingEndpoint::new(&journal);

    let session = BroadcastSession::with_owner(SessionId::new(1), as_endpoint(&owner));
    session.attach_viewer(&as_endpoint(&viewer));

    session.dispatch(&speech(SpeechKind::PrivateFrom, "psst, secret"));
    session.dispatch(&speech(SpeechKind::Say, "hello square"));

    assert_eq!(owner.deliveries().len(), 2);
    let viewer_texts: Vec<_> = viewer
        .deliveries()
        .into_iter()
        .map(|event| match event {
            OutboundEvent::CreatureSpeech { text, .. } => text,
            other => panic!("unexpected event {other:?}"),
        })
        .collect();
    assert_eq!(viewer_texts, ["hello square"]);
}

#[test]
fn duplicate_attach_keeps_one_entry_and_one_delivery() {
    let journal: Journal = Journal::default();
    let owner = JournalingEndpoint::new(&journal);
    let viewer = JournalingEndpoint::new(&journal);

    let session = BroadcastSession::with_owner(SessionId::new(1), as_endpoint(&owner));
    session.attach_viewer(&as_endpoint(&viewer));
    session.attach_viewer(&as_endpoint(&viewer));

    assert_eq!(session.viewer_names(), ["Guest-1"]);

    session.dispatch(&creature_moved());
    assert_eq!(viewer.deliveries().len(), 1);
}

#[test]
fn detach_of_unknown_viewer_is_a_noop() {
    let session = BroadcastSession::new(SessionId::new(1));
    let journal: Journal = Journal::default();
    let viewer = JournalingEndpoint::new(&journal);
    session.attach_viewer(&as_endpoint(&viewer));

    session.detach_viewer(ConnectionId::generate());
    assert_eq!(session.viewer_count(), 1);

    session.detach_viewer(viewer.id);
    session.detach_viewer(viewer.id);
    assert_eq!(session.viewer_count(), 0);
}

#[test]
fn guest_names_follow_attachment_order() {
    let journal: Journal = Journal::default();
    let session = BroadcastSession::new(SessionId::new(1));
    for _ in 0..3 {
        session.attach_viewer(&as_endpoint(&JournalingEndpoint::new(&journal)));
    }
    assert_eq!(session.viewer_names(), ["Guest-1", "Guest-2", "Guest-3"]);
}

#[test]
fn reparenting_keeps_viewers_and_redirects_the_stream() {
    let journal: Journal = Journal::default();
    let old_owner = JournalingEndpoint::new(&journal);
    let new_owner = JournalingEndpoint::new(&journal);
    let viewer = JournalingEndpoint::new(&journal);

    let session = BroadcastSession::with_owner(SessionId::new(1), as_endpoint(&old_owner));
    session.attach_viewer(&as_endpoint(&viewer));

    session.set_owner(as_endpoint(&new_owner));
    assert_eq!(session.viewer_names(), ["Guest-1"]);

    session.dispatch(&creature_moved());

    assert!(old_owner.deliveries().is_empty());
    assert_eq!(new_owner.deliveries().len(), 1);
    assert_eq!(viewer.deliveries().len(), 1);

    let order: Vec<ConnectionId> = journal.lock().iter().map(|(id, _)| *id).collect();
    assert_eq!(order, [new_owner.id, viewer.id]);
}

#[test]
fn viewers_observe_events_in_issue_order() {
    let journal: Journal = Journal::default();
    let owner = JournalingEndpoint::new(&journal);
    let viewer = JournalingEndpoint::new(&journal);

    let session = BroadcastSession::with_owner(SessionId::new(1), as_endpoint(&owner));
    session.attach_viewer(&as_endpoint(&viewer));

    let first = creature_moved();
    let second = OutboundEvent::StatsChanged;
    let third = OutboundEvent::cancel_message("Sorry, not possible.");
    session.dispatch(&first);
    session.dispatch(&second);
    session.dispatch(&third);

    assert_eq!(viewer.deliveries(), [first.clone(), second.clone(), third.clone()]);
    assert_eq!(owner.deliveries(), [first, second, third]);
}

#[test]
fn concrete_scenario_from_the_contract() {
    // Owner O, viewers V1 and V2 attached in that order. A creature-move
    // broadcast reaches O, V1, V2 once each, in that relative order; a
    // trade offer reaches only O.
    let journal: Journal = Journal::default();
    let o = JournalingEndpoint::new(&journal);
    let v1 = JournalingEndpoint::new(&journal);
    let v2 = JournalingEndpoint::new(&journal);

    let session = BroadcastSession::with_owner(SessionId::new(1), as_endpoint(&o));
    session.attach_viewer(&as_endpoint(&v1));
    session.attach_viewer(&as_endpoint(&v2));

    let movement = creature_moved();
    session.dispatch(&movement);
    session.dispatch(&trade_offer());

    let move_order: Vec<ConnectionId> = journal
        .lock()
        .iter()
        .filter(|(_, event)| *event == movement)
        .map(|(id, _)| *id)
        .collect();
    assert_eq!(move_order, [o.id, v1.id, v2.id]);

    assert_eq!(o.deliveries().len(), 2);
    assert_eq!(v1.deliveries().len(), 1);
    assert_eq!(v2.deliveries().len(), 1);
}

#[test]
fn gated_events_skip_legacy_owners_entirely() {
    let journal: Journal = Journal::default();
    let owner = JournalingEndpoint::legacy(&journal);
    let viewer = JournalingEndpoint::new(&journal);

    let session = BroadcastSession::with_owner(SessionId::new(1), as_endpoint(&owner));
    session.attach_viewer(&as_endpoint(&viewer));

    session.dispatch(&OutboundEvent::CreatureIcon { creature: CreatureId::new(9) });
    assert!(journal.lock().is_empty());

    // The same session still forwards ungated events normally.
    session.dispatch(&creature_moved());
    assert_eq!(owner.deliveries().len(), 1);
    assert_eq!(viewer.deliveries().len(), 1);
}

#[test]
fn dead_viewer_is_skipped_and_the_rest_still_receive() {
    let journal: Journal = Journal::default();
    let owner = JournalingEndpoint::new(&journal);
    let doomed = JournalingEndpoint::new(&journal);
    let survivor = JournalingEndpoint::new(&journal);

    let session = BroadcastSession::with_owner(SessionId::new(1), as_endpoint(&owner));
    let doomed_id = doomed.id;
    session.attach_viewer(&as_endpoint(&doomed));
    session.attach_viewer(&as_endpoint(&survivor));
    drop(doomed);

    session.dispatch(&creature_moved());

    let order: Vec<ConnectionId> = journal.lock().iter().map(|(id, _)| *id).collect();
    assert_eq!(order, [owner.id, survivor.id]);
    assert!(!order.contains(&doomed_id));
}

#[test]
fn call_sites_are_agnostic_between_connection_and_session() {
    fn announce(sink: &dyn EventSink) {
        sink.dispatch(&OutboundEvent::cancel_message("Sorry, not possible."));
    }

    let journal: Journal = Journal::default();
    let direct = JournalingEndpoint::new(&journal);
    announce(direct.as_ref());
    assert_eq!(direct.deliveries().len(), 1);

    let owner = JournalingEndpoint::new(&journal);
    let session = BroadcastSession::with_owner(SessionId::new(2), as_endpoint(&owner));
    announce(&session);
    assert_eq!(owner.deliveries().len(), 1);
}
