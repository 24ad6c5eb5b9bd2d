//! # spyglass-events
//!
//! The outbound protocol event surface of the Spyglass broadcast proxy.
//!
//! - [`OutboundEvent`]: one variant per outbound protocol operation
//!   (~150 kinds), carrying typed value payloads.
//! - [`BroadcastPolicy`]: the per-operation fan-out rule. The mapping lives
//!   in [`OutboundEvent::policy`], a single exhaustive match — the policy
//!   table is data, not one-off dispatch bodies.
//! - [`payloads`]: typed snapshot structs grouped by domain.
//! - [`chat`]: speech/message classification enums plus wire-code
//!   conversions for the codes the protocol layer reads off the wire.
//!
//! ## Crate Position
//!
//! Pure data crate. Depends only on `spyglass-core`; the session crate
//! consumes it to drive dispatch.

#![deny(unsafe_code)]

pub mod chat;
pub mod error;
pub mod event;
pub mod payloads;
pub mod policy;

pub use chat::{ChannelEventKind, ChannelId, MessageClass, SpeechKind};
pub use error::WireCodeError;
pub use event::OutboundEvent;
pub use policy::BroadcastPolicy;
