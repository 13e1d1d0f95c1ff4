//! Simulation core - pure, deterministic, and testable
//!
//! This crate contains the falling-block rules and the per-cell animation
//! state. It has **no dependencies** on rendering, input devices or clocks:
//! the driver passes commands and a monotonic time in seconds, and reads back a
//! list of drawable cells.
//!
//! - **Deterministic**: the same seed and inputs produce the same game
//! - **Bounded**: every operation touches at most the 10x22 board
//! - **Allocation-free** on the gravity and command paths
//!
//! # Module Structure
//!
//! - [`board`]: 10x22 grid, full-row detection and compaction
//! - [`shapes`]: the seven 4x4 masks, mask rotation and surface queries
//! - [`piece`]: the active piece: moves, rotation with wall kicks
//! - [`transition`]: per-cell animation records, rotation merging, evaluation
//! - [`game`]: the session tying it all together
//! - [`geometry`], [`frame`], [`clock`], [`config`], [`rng`]: supporting types
//!
//! # Rules
//!
//! - A new piece of a uniformly random kind and rotation spawns with its 4x4
//!   box at (3, 0)
//! - Gravity moves the piece down one row per step; a piece that cannot move
//!   locks on that step
//! - Rotation pushes the piece back inside the walls and above the floor, then
//!   fails if it overlaps the stack
//! - Full rows are removed and the stack above slides down
//! - A lock that leaves any block in the top three rows ends the game
//!
//! # Example
//!
//! ```
//! use povtris_core::Game;
//! use povtris_types::{Command, ShapeKind};
//!
//! let mut game = Game::new(12345);
//! assert!(game.spawn(ShapeKind::T, 0));
//!
//! game.apply(Command::MoveRight);
//! game.apply(Command::RotateLeft);
//! game.step();
//!
//! // Blocks are drawn offset while their transitions play out
//! let frame = game.frame(0.0);
//! assert_eq!(frame.len(), 4);
//! assert!(frame.iter().any(|cell| !cell.transform.is_identity()));
//! ```

pub mod board;
pub mod clock;
pub mod config;
pub mod frame;
pub mod game;
pub mod geometry;
pub mod piece;
pub mod rng;
pub mod shapes;
pub mod transition;

pub use povtris_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Compaction, RowShift};
pub use clock::GravityClock;
pub use config::GameConfig;
pub use frame::FrameCell;
pub use game::{Game, LockEvent};
pub use geometry::{Transform, Vec2};
pub use piece::Piece;
pub use rng::{RandomSource, SimpleRng};
pub use shapes::{rotated_mask, shape, Mask, Shape};
pub use transition::{Coord, Transition, Transitions};
