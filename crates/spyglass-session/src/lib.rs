//! # spyglass-session
//!
//! The broadcast fan-out proxy for a live game session: one owner
//! connection produces a stream of outbound protocol events, and a
//! [`BroadcastSession`] mirrors a policy-filtered subset of that stream to
//! zero or more passive spectator connections in real time.
//!
//! - [`ClientEndpoint`]: the collaborator contract a connection fulfils
//!   (typed delivery plus capability/identity queries).
//! - [`EventSink`]: what the game layer drives; implemented by raw
//!   endpoints and by [`BroadcastSession`] alike, so call sites never know
//!   whether a session is being spectated.
//! - [`BroadcastSession`]: optional owner + ordered viewer registry +
//!   owner-first, policy-driven synchronous dispatch.
//! - [`ViewerRegistry`]: insertion-ordered viewer bookkeeping with
//!   idempotent attach/detach and guest naming.
//!
//! ## Concurrency
//!
//! Dispatch is synchronous and never blocks on collaborators while holding
//! the session lock: each dispatch snapshots the recipient set under a read
//! guard, releases it, then delivers. Attach/detach from another thread
//! during a dispatch affects the next dispatch, never the one in flight.

#![deny(unsafe_code)]

pub mod endpoint;
pub mod registry;
pub mod session;

pub use endpoint::{ClientEndpoint, EventSink};
pub use registry::ViewerRegistry;
pub use session::BroadcastSession;
