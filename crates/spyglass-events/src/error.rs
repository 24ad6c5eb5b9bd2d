//! Error types for the event surface.
//!
//! The proxy's dispatch path is deliberately infallible; the only fallible
//! operations in this crate are conversions from raw wire codes into typed
//! protocol enums, used by the protocol layer when parsing client traffic.

use thiserror::Error;

/// A raw wire code that does not map to any known protocol enum value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum WireCodeError {
    /// Unknown speech kind discriminator.
    #[error("unknown speech kind code {0}")]
    SpeechKind(u8),

    /// Unknown channel event discriminator.
    #[error("unknown channel event code {0}")]
    ChannelEvent(u8),
}
