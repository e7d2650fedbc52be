//! Core types and definitions for the COLOSSUS boss encounter.
//!
//! This crate defines the vocabulary shared across all other crates:
//! enums, events, snapshot views, tuning constants, and the handle traits
//! through which the encounter reaches host-owned actors. It has no
//! dependency on any renderer, physics engine, or runtime framework.

pub mod constants;
pub mod enums;
pub mod events;
pub mod handles;
pub mod state;
pub mod types;
