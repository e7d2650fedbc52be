//! Per-tick subsystems of the encounter engine.
//!
//! Each subsystem owns its own plain-data state and takes the handles it
//! needs as arguments — nothing here holds a reference into the host.

pub mod snapshot;
pub mod waves;
