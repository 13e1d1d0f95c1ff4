//! Piece module - the active falling piece
//!
//! A piece is a rotated catalog mask anchored at the top-left corner of its
//! 4x4 box. Its blocks live on the board like any other cell; the piece only
//! remembers where it painted them so it can erase, test and repaint.
//!
//! Every successful move or rotation registers the matching transition for
//! the repainted cells, and drops records left behind on cells it vacated.

use std::f32::consts::FRAC_PI_2;

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::geometry::Vec2;
use crate::shapes::{shape, Mask, NO_BOTTOM, NO_LEFT, NO_RIGHT};
use crate::transition::{Coord, Transitions};
use crate::types::{Color, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};

const WIDTH: i8 = BOARD_WIDTH as i8;
const HEIGHT: i8 = BOARD_HEIGHT as i8;

/// Absolute coordinates of a footprint
type Footprint = ArrayVec<Coord, 16>;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    kind: ShapeKind,
    x: i8,
    y: i8,
    mask: Mask,
    color: Color,
}

impl Piece {
    /// Piece of `kind` at anchor (x, y), turned `rotation` quarter turns
    /// anticlockwise. Nothing is painted.
    pub fn new(kind: ShapeKind, x: i8, y: i8, rotation: u8) -> Self {
        let entry = shape(kind);
        Self {
            kind,
            x,
            y,
            mask: entry.mask.rotated(rotation),
            color: entry.color,
        }
    }

    /// Create a piece and paint it onto the board.
    ///
    /// Returns `None` without touching the board when the footprint leaves the
    /// board or overlaps an occupied cell.
    pub fn spawn(kind: ShapeKind, x: i8, y: i8, rotation: u8, board: &mut Board) -> Option<Self> {
        let piece = Self::new(kind, x, y, rotation);
        if !piece.fits(board) {
            return None;
        }
        piece.paint(board);
        Some(piece)
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Top-left corner of the 4x4 box
    pub fn anchor(&self) -> (i8, i8) {
        (self.x, self.y)
    }

    pub fn mask(&self) -> Mask {
        self.mask
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Center of the 4x4 box in board space, the pivot of rotations
    pub fn pivot(&self) -> Vec2 {
        Vec2::new(self.x as f32 + 2.0, self.y as f32 + 2.0)
    }

    /// Absolute board coordinates of the piece's blocks
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.mask.cells().map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Whether every block is on the board and on an empty cell
    pub fn fits(&self, board: &Board) -> bool {
        self.cells()
            .all(|(x, y)| Board::contains(x, y) && !board.is_occupied(x, y))
    }

    fn footprint(&self) -> Footprint {
        self.cells().collect()
    }

    fn paint(&self, board: &mut Board) {
        for (x, y) in self.cells() {
            board.set(x, y, self.color);
        }
    }

    fn erase(&self, board: &mut Board) {
        for (x, y) in self.cells() {
            board.clear(x, y);
        }
    }

    /// Drop records on coordinates in `before` that the piece no longer covers
    fn discard_vacated(&self, before: &Footprint, transitions: &mut Transitions) {
        let after = self.footprint();
        for coord in before.iter().filter(|c| !after.contains(*c)) {
            transitions.discard(*coord);
        }
    }

    /// Shift by (dx, dy), which the caller has already validated
    fn shift(&mut self, dx: i8, dy: i8, board: &mut Board, transitions: &mut Transitions) {
        let before = self.footprint();
        self.erase(board);
        self.x += dx;
        self.y += dy;
        self.paint(board);
        self.discard_vacated(&before, transitions);

        let back = Vec2::new(-dx as f32, -dy as f32);
        for coord in self.cells() {
            transitions.add_translation(coord, back);
        }
    }

    fn is_resting(&self, board: &Board) -> bool {
        self.mask
            .bottom_surfaces()
            .iter()
            .enumerate()
            .filter(|&(_, &bottom)| bottom != NO_BOTTOM)
            .any(|(dx, &bottom)| {
                let below = self.y + bottom;
                below >= HEIGHT || board.is_occupied(self.x + dx as i8, below)
            })
    }

    /// Move one row down. Returns true when the piece is resting, in which
    /// case the board is left untouched.
    ///
    /// With `collapse` the piece keeps falling until it rests, and the result
    /// is always true.
    pub fn move_down(
        &mut self,
        collapse: bool,
        board: &mut Board,
        transitions: &mut Transitions,
    ) -> bool {
        loop {
            if self.is_resting(board) {
                return true;
            }
            self.shift(0, 1, board, transitions);
            if !collapse {
                return false;
            }
        }
    }

    /// Move one column left. Returns false when blocked by the wall or stack.
    pub fn move_left(&mut self, board: &mut Board, transitions: &mut Transitions) -> bool {
        let blocked = self
            .mask
            .left_surfaces()
            .iter()
            .enumerate()
            .filter(|&(_, &left)| left != NO_LEFT)
            .any(|(dy, &left)| {
                let x = self.x + left;
                x < 0 || board.is_occupied(x, self.y + dy as i8)
            });
        if blocked {
            return false;
        }
        self.shift(-1, 0, board, transitions);
        true
    }

    /// Move one column right. Returns false when blocked by the wall or stack.
    pub fn move_right(&mut self, board: &mut Board, transitions: &mut Transitions) -> bool {
        let blocked = self
            .mask
            .right_surfaces()
            .iter()
            .enumerate()
            .filter(|&(_, &right)| right != NO_RIGHT)
            .any(|(dy, &right)| {
                let x = self.x + right;
                x >= WIDTH || board.is_occupied(x, self.y + dy as i8)
            });
        if blocked {
            return false;
        }
        self.shift(1, 0, board, transitions);
        true
    }

    /// Rotate a quarter turn, anticlockwise when `left`.
    ///
    /// The rotated mask is pushed back inside the side walls and above the
    /// floor, then tested against the stack once. On overlap the piece is
    /// restored and false is returned.
    pub fn rotate(&mut self, left: bool, board: &mut Board, transitions: &mut Transitions) -> bool {
        let before = self.footprint();
        self.erase(board);

        let mask = self.mask.rotated(if left { 1 } else { 3 });
        let (x, y) = Self::kicked_anchor(&mask, self.x, self.y);
        let candidate = Piece { x, y, mask, ..*self };

        if !candidate.fits(board) {
            self.paint(board);
            return false;
        }

        let (old_x, old_y) = (self.x, self.y);
        *self = candidate;
        self.paint(board);
        self.discard_vacated(&before, transitions);

        let kick = Vec2::new((old_x - x) as f32, (old_y - y) as f32);
        // Unwind from the opposite direction.
        let angle = if left { -FRAC_PI_2 } else { FRAC_PI_2 };
        let pivot = self.pivot();
        for coord in self.cells() {
            if kick != Vec2::ZERO {
                transitions.add_translation(coord, kick);
            }
            transitions.add_rotation(coord, angle, pivot);
        }
        true
    }

    /// Anchor corrected so that `mask` stays inside the walls and above the floor
    fn kicked_anchor(mask: &Mask, mut x: i8, mut y: i8) -> (i8, i8) {
        let lefts = mask.left_surfaces();
        if let Some(&left) = lefts.iter().filter(|&&l| l != NO_LEFT).min() {
            if x + left + 1 < 0 {
                x = -left - 1;
            }
        }

        let rights = mask.right_surfaces();
        if let Some(&right) = rights.iter().filter(|&&r| r != NO_RIGHT).max() {
            if x + right > WIDTH {
                x = WIDTH - right;
            }
        }

        let bottoms = mask.bottom_surfaces();
        if let Some(&bottom) = bottoms.iter().filter(|&&b| b != NO_BOTTOM).max() {
            if y + bottom > HEIGHT {
                y = HEIGHT - bottom;
            }
        }

        (x, y)
    }
}
