//! Shape catalog - the seven 4x4 masks, their colors and mask geometry
//!
//! Masks are indexed `[x][y]` inside a 4x4 box whose top-left corner is the
//! piece anchor. Rotation and the surface queries are pure functions of a
//! mask; nothing here looks at the board.

use crate::types::{Color, ShapeKind};

/// Surface value for a column with no block, as seen from above
pub const NO_TOP: i8 = 4;
/// Surface value for a row with no block, as seen from the left
pub const NO_LEFT: i8 = 4;
/// Surface value for a row with no block, as seen from the right
pub const NO_RIGHT: i8 = -1;
/// Surface value for a column with no block, as seen from below
pub const NO_BOTTOM: i8 = 0;

/// A 4x4 occupancy mask indexed `[x][y]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mask {
    cells: [[bool; 4]; 4],
}

impl Mask {
    /// Build a mask from its columns; `columns[x][y]` is true where a block sits.
    pub const fn from_columns(columns: [[bool; 4]; 4]) -> Self {
        Self { cells: columns }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[x][y]
    }

    /// Rotate by `n` anticlockwise quarter turns (`n` is taken modulo 4)
    pub fn rotated(&self, n: u8) -> Mask {
        let src = &self.cells;
        let mut out = [[false; 4]; 4];
        match n % 4 {
            0 => return *self,
            1 => {
                for x in 0..4 {
                    for y in 0..4 {
                        out[y][3 - x] = src[x][y];
                    }
                }
            }
            2 => {
                for x in 0..4 {
                    for y in 0..4 {
                        out[3 - x][3 - y] = src[x][y];
                    }
                }
            }
            _ => {
                for x in 0..4 {
                    for y in 0..4 {
                        out[3 - y][x] = src[x][y];
                    }
                }
            }
        }
        Mask { cells: out }
    }

    /// Occupied `(x, y)` offsets in column-major order
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..4usize).flat_map(move |x| {
            (0..4usize).filter_map(move |y| self.cells[x][y].then_some((x as i8, y as i8)))
        })
    }

    /// Per column: lowest occupied row + 1, or [`NO_BOTTOM`]
    pub fn bottom_surfaces(&self) -> [i8; 4] {
        let mut out = [NO_BOTTOM; 4];
        for (x, surface) in out.iter_mut().enumerate() {
            if let Some(y) = (0..4).rev().find(|&y| self.cells[x][y]) {
                *surface = y as i8 + 1;
            }
        }
        out
    }

    /// Per column: highest occupied row - 1, or [`NO_TOP`]
    pub fn top_surfaces(&self) -> [i8; 4] {
        let mut out = [NO_TOP; 4];
        for (x, surface) in out.iter_mut().enumerate() {
            if let Some(y) = (0..4).find(|&y| self.cells[x][y]) {
                *surface = y as i8 - 1;
            }
        }
        out
    }

    /// Per row: leftmost occupied column - 1, or [`NO_LEFT`]
    pub fn left_surfaces(&self) -> [i8; 4] {
        let mut out = [NO_LEFT; 4];
        for (y, surface) in out.iter_mut().enumerate() {
            if let Some(x) = (0..4).find(|&x| self.cells[x][y]) {
                *surface = x as i8 - 1;
            }
        }
        out
    }

    /// Per row: rightmost occupied column + 1, or [`NO_RIGHT`]
    pub fn right_surfaces(&self) -> [i8; 4] {
        let mut out = [NO_RIGHT; 4];
        for (y, surface) in out.iter_mut().enumerate() {
            if let Some(x) = (0..4).rev().find(|&x| self.cells[x][y]) {
                *surface = x as i8 + 1;
            }
        }
        out
    }
}

/// A catalog entry: canonical mask plus fill color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub mask: Mask,
    pub color: Color,
}

const F: bool = false;
const T: bool = true;

/// Catalog in [`ShapeKind::ALL`] order
static CATALOG: [Shape; 7] = [
    Shape {
        kind: ShapeKind::I,
        mask: Mask::from_columns([[F, T, F, F], [F, T, F, F], [F, T, F, F], [F, T, F, F]]),
        color: Color::Cyan,
    },
    Shape {
        kind: ShapeKind::J,
        mask: Mask::from_columns([[F, T, F, F], [F, T, F, F], [T, T, F, F], [F, F, F, F]]),
        color: Color::Blue,
    },
    Shape {
        kind: ShapeKind::L,
        mask: Mask::from_columns([[F, T, F, F], [F, T, F, F], [F, T, T, F], [F, F, F, F]]),
        color: Color::Orange,
    },
    Shape {
        kind: ShapeKind::O,
        mask: Mask::from_columns([[F, F, F, F], [F, T, T, F], [F, T, T, F], [F, F, F, F]]),
        color: Color::Yellow,
    },
    Shape {
        kind: ShapeKind::S,
        mask: Mask::from_columns([[F, F, F, F], [F, T, T, F], [T, T, F, F], [F, F, F, F]]),
        color: Color::Lime,
    },
    Shape {
        kind: ShapeKind::Z,
        mask: Mask::from_columns([[F, F, F, F], [T, T, F, F], [F, T, T, F], [F, F, F, F]]),
        color: Color::Red,
    },
    Shape {
        kind: ShapeKind::T,
        mask: Mask::from_columns([[F, T, F, F], [T, T, F, F], [F, T, F, F], [F, F, F, F]]),
        color: Color::Purple,
    },
];

/// Catalog entry for `kind`
pub fn shape(kind: ShapeKind) -> &'static Shape {
    &CATALOG[kind.index()]
}

/// Canonical mask of `kind` rotated by `n` anticlockwise quarter turns
pub fn rotated_mask(kind: ShapeKind, n: u8) -> Mask {
    shape(kind).mask.rotated(n)
}
