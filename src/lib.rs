//! PoVtris (workspace facade crate).
//!
//! The simulation, input mapping and terminal sink live in dedicated crates
//! under `crates/`; this package re-exports them under one name.

pub use povtris_core as core;
pub use povtris_input as input;
pub use povtris_term as term;
pub use povtris_types as types;
