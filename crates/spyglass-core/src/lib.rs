//! # spyglass-core
//!
//! Foundation types for the Spyglass broadcast proxy.
//!
//! This crate provides the shared vocabulary the other Spyglass crates
//! depend on:
//!
//! - **Branded IDs**: [`ids::SessionId`], [`ids::ConnectionId`], [`ids::CreatureId`] as newtypes
//! - **World geometry**: [`geometry::Position`], [`geometry::Direction`]
//! - **Logging**: [`logging`] for `tracing` subscriber setup
//!
//! ## Crate Position
//!
//! Foundation crate. Depended on by all other spyglass crates.

#![deny(unsafe_code)]

pub mod geometry;
pub mod ids;
pub mod logging;

pub use geometry::{Direction, Position};
pub use ids::{ConnectionId, CreatureId, SessionId};
