//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no behaviour beyond small conversions, so they
//! can be shared by the simulation core, the input mapping and any render sink.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 22 rows (indexed 0-21, top to bottom)
//! - **Spawn position**: (3, 0), the top-left corner of the 4x4 piece box
//!
//! # Timing Constants
//!
//! Timing values are in seconds of the external monotonic clock:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TRANSITION_SECS` | 0.1 | Lifetime of a per-cell transition once it starts |
//! | `GRAVITY_INTERVAL_SECS` | 0.5 | Cadence of the gravity step |
//!
//! # Examples
//!
//! ```
//! use povtris_types::{Command, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let parsed = ShapeKind::from_str("t").unwrap();
//! assert_eq!(parsed, ShapeKind::T);
//!
//! let command = Command::from_str("rotateLeft").unwrap();
//! assert_eq!(command, Command::RotateLeft);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 22);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (22 rows)
pub const BOARD_HEIGHT: u8 = 22;

/// Anchor (top-left of the 4x4 box) for newly spawned pieces
pub const SPAWN_POSITION: (i8, i8) = (3, 0);

/// Number of rows at the top of the board that end the game once a locked
/// block remains in them.
pub const GAME_OVER_ROWS: u8 = 3;

/// Duration of a single cell transition in seconds.
pub const TRANSITION_SECS: f32 = 0.1;

/// Interval between gravity steps in seconds.
pub const GRAVITY_INTERVAL_SECS: f32 = 0.5;

/// The seven piece kinds
///
/// Each kind maps to a fixed 4x4 mask and a fill color in the shape catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShapeKind {
    I,
    J,
    L,
    O,
    S,
    Z,
    T,
}

impl ShapeKind {
    /// Every kind, in catalog order.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::J,
        ShapeKind::L,
        ShapeKind::O,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::T,
    ];

    /// Parse shape kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use povtris_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("i"), Some(ShapeKind::I));
    /// assert_eq!(ShapeKind::from_str("O"), Some(ShapeKind::O));
    /// assert_eq!(ShapeKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(ShapeKind::I),
            "j" => Some(ShapeKind::J),
            "l" => Some(ShapeKind::L),
            "o" => Some(ShapeKind::O),
            "s" => Some(ShapeKind::S),
            "z" => Some(ShapeKind::Z),
            "t" => Some(ShapeKind::T),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "i",
            ShapeKind::J => "j",
            ShapeKind::L => "l",
            ShapeKind::O => "o",
            ShapeKind::S => "s",
            ShapeKind::Z => "z",
            ShapeKind::T => "t",
        }
    }

    /// Position of this kind in [`ShapeKind::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Block palette
///
/// Every occupied board cell stores one of these. Each palette entry has a
/// fill color and a darker outline color used for the cell border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    Cyan,
    Blue,
    Orange,
    Yellow,
    Lime,
    Purple,
    Red,
}

impl Color {
    /// Fill color of the block body.
    ///
    /// # Examples
    ///
    /// ```
    /// use povtris_types::{Color, Rgb};
    ///
    /// assert_eq!(Color::Cyan.fill(), Rgb::new(0, 255, 255));
    /// ```
    pub fn fill(&self) -> Rgb {
        match self {
            Color::Cyan => Rgb::new(0, 255, 255),
            Color::Blue => Rgb::new(0, 0, 255),
            Color::Orange => Rgb::new(255, 165, 0),
            Color::Yellow => Rgb::new(255, 255, 0),
            Color::Lime => Rgb::new(0, 255, 0),
            Color::Purple => Rgb::new(128, 0, 128),
            Color::Red => Rgb::new(255, 0, 0),
        }
    }

    /// Outline color drawn around the block body.
    pub fn outline(&self) -> Rgb {
        match self {
            // DarkCyan
            Color::Cyan => Rgb::new(0, 139, 139),
            // DarkBlue
            Color::Blue => Rgb::new(0, 0, 139),
            // DarkOrange
            Color::Orange => Rgb::new(255, 140, 0),
            // YellowGreen
            Color::Yellow => Rgb::new(154, 205, 50),
            // Green
            Color::Lime => Rgb::new(0, 128, 0),
            // Indigo
            Color::Purple => Rgb::new(75, 0, 130),
            // DarkRed
            Color::Red => Rgb::new(139, 0, 0),
        }
    }
}

/// A cell on the board
///
/// - `None`: Empty cell
/// - `Some(Color)`: Occupied cell with its fill color
pub type Cell = Option<Color>;

/// Discrete player commands
///
/// Decoding raw input (keys, gestures, sensors) into commands happens outside
/// the simulation core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    RotateLeft,
    RotateRight,
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
}

impl Command {
    /// Parse command from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use povtris_types::Command;
    ///
    /// assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
    /// assert_eq!(Command::from_str("HARDDROP"), Some(Command::HardDrop));
    /// assert_eq!(Command::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "rotateleft" => Some(Command::RotateLeft),
            "rotateright" => Some(Command::RotateRight),
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "softdrop" => Some(Command::SoftDrop),
            "harddrop" => Some(Command::HardDrop),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::RotateLeft => "rotateLeft",
            Command::RotateRight => "rotateRight",
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::SoftDrop => "softDrop",
            Command::HardDrop => "hardDrop",
        }
    }
}

/// Screen orientation quadrant, counted in anticlockwise quarter turns from
/// `Up`.
///
/// - **Up**: 0 turns
/// - **Left**: 1 turn
/// - **Down**: 2 turns
/// - **Right**: 3 turns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    #[default]
    Up,
    Left,
    Down,
    Right,
}

impl Orientation {
    /// Number of anticlockwise quarter turns from `Up`.
    pub fn quarter_turns(&self) -> u8 {
        match self {
            Orientation::Up => 0,
            Orientation::Left => 1,
            Orientation::Down => 2,
            Orientation::Right => 3,
        }
    }

    /// Orientation after `turns` anticlockwise quarter turns from `Up`.
    ///
    /// # Examples
    ///
    /// ```
    /// use povtris_types::Orientation;
    ///
    /// assert_eq!(Orientation::from_quarter_turns(1), Orientation::Left);
    /// assert_eq!(Orientation::from_quarter_turns(7), Orientation::Right);
    /// ```
    pub fn from_quarter_turns(turns: u8) -> Self {
        match turns % 4 {
            0 => Orientation::Up,
            1 => Orientation::Left,
            2 => Orientation::Down,
            _ => Orientation::Right,
        }
    }

    /// Quadrant of a device "up" vector given its components along the
    /// screen's right and up axes. Ties go to the horizontal quadrants.
    ///
    /// # Examples
    ///
    /// ```
    /// use povtris_types::Orientation;
    ///
    /// assert_eq!(Orientation::from_reading(0.1, 0.9), Orientation::Up);
    /// assert_eq!(Orientation::from_reading(-0.8, 0.3), Orientation::Left);
    /// ```
    pub fn from_reading(right: f32, up: f32) -> Self {
        if up.abs() > right.abs() {
            if up > 0.0 {
                Orientation::Up
            } else {
                Orientation::Down
            }
        } else if right > 0.0 {
            Orientation::Right
        } else {
            Orientation::Left
        }
    }

    /// Turn one step anticlockwise.
    pub fn turn_left(&self) -> Self {
        Self::from_quarter_turns(self.quarter_turns() + 1)
    }

    /// Turn one step clockwise.
    pub fn turn_right(&self) -> Self {
        Self::from_quarter_turns(self.quarter_turns() + 3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_and_timing_defaults() {
        assert_eq!(BOARD_WIDTH, 10);
        assert_eq!(BOARD_HEIGHT, 22);
        assert_eq!(SPAWN_POSITION, (3, 0));
        assert_eq!(GAME_OVER_ROWS, 3);
        assert!((TRANSITION_SECS - 0.1).abs() < f32::EPSILON);
        assert!((GRAVITY_INTERVAL_SECS - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn shape_kind_string_roundtrip() {
        for kind in ShapeKind::ALL {
            assert_eq!(ShapeKind::from_str(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn shape_kind_index_matches_all() {
        for (i, kind) in ShapeKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn command_string_roundtrip() {
        for command in [
            Command::RotateLeft,
            Command::RotateRight,
            Command::MoveLeft,
            Command::MoveRight,
            Command::SoftDrop,
            Command::HardDrop,
        ] {
            assert_eq!(Command::from_str(command.as_str()), Some(command));
        }
    }

    #[test]
    fn outline_differs_from_fill() {
        for color in [
            Color::Cyan,
            Color::Blue,
            Color::Orange,
            Color::Yellow,
            Color::Lime,
            Color::Purple,
            Color::Red,
        ] {
            assert_ne!(color.fill(), color.outline());
        }
    }

    #[test]
    fn orientation_turns_wrap() {
        assert_eq!(Orientation::Up.turn_left(), Orientation::Left);
        assert_eq!(Orientation::Right.turn_left(), Orientation::Up);
        assert_eq!(Orientation::Up.turn_right(), Orientation::Right);
        assert_eq!(Orientation::Left.turn_right(), Orientation::Up);
    }

    #[test]
    fn orientation_from_reading_quadrants() {
        assert_eq!(Orientation::from_reading(0.0, 1.0), Orientation::Up);
        assert_eq!(Orientation::from_reading(0.2, -1.0), Orientation::Down);
        assert_eq!(Orientation::from_reading(1.0, 0.0), Orientation::Right);
        assert_eq!(Orientation::from_reading(-1.0, 0.5), Orientation::Left);
        assert_eq!(Orientation::from_reading(0.5, 0.5), Orientation::Right);
    }
}
