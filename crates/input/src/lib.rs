//! Terminal input module.
//!
//! Stands in for the touch and sensor decoding of a device build: maps
//! `crossterm` key events to [`crate::types::Command`]s and to simulated
//! device orientations.

pub mod map;

pub use povtris_types as types;

pub use map::{command_for_key, orientation_for_key, should_quit};
