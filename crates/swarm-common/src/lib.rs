//! Shared types for the swarm monitoring dashboard.
//!
//! This crate contains the wire types returned by the swarm backend:
//! agent health, trading signals, portfolio snapshots, and the
//! aggregate swarm state. No I/O lives here.

pub mod types;

pub use types::*;
