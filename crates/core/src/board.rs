//! Board module - manages the game grid
//!
//! The board is a 10x22 grid where each cell is empty or holds a block color.
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..21 (top to bottom).
//!
//! All coordinates handed to the board come from validated piece geometry, so an
//! out-of-range access is a modelling bug and panics instead of being reported.

use std::ops::Range;

use arrayvec::ArrayVec;

use crate::types::{Cell, Color, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
pub(crate) const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// A non-full row that slid down during compaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowShift {
    pub from: u8,
    pub to: u8,
}

/// Outcome of [`Board::compact`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Compaction {
    /// Indices of the rows that were full, bottom to top.
    pub cleared: ArrayVec<u8, HEIGHT>,
    /// Row moves in the order they were applied (bottom to top).
    pub shifts: ArrayVec<RowShift, HEIGHT>,
    /// Rows `0..vacated` were emptied at the top of the board.
    pub vacated: u8,
}

impl Compaction {
    pub fn lines_cleared(&self) -> usize {
        self.cleared.len()
    }
}

/// The game board - 10 columns x 22 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    pub(crate) fn index(x: i8, y: i8) -> usize {
        assert!(
            Self::contains(x, y),
            "board coordinate ({}, {}) out of range",
            x,
            y
        );
        (y as usize) * WIDTH + (x as usize)
    }

    /// Whether (x, y) lies on the board
    #[inline(always)]
    pub fn contains(x: i8, y: i8) -> bool {
        x >= 0 && (x as usize) < WIDTH && y >= 0 && (y as usize) < HEIGHT
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    pub fn get(&self, x: i8, y: i8) -> Cell {
        self.cells[Self::index(x, y)]
    }

    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        self.get(x, y).is_some()
    }

    /// Color of the block at (x, y), `None` when empty
    pub fn color_at(&self, x: i8, y: i8) -> Option<Color> {
        self.get(x, y)
    }

    /// Occupy (x, y) with `color`
    pub fn set(&mut self, x: i8, y: i8, color: Color) {
        self.cells[Self::index(x, y)] = Some(color);
    }

    /// Empty (x, y)
    pub fn clear(&mut self, x: i8, y: i8) {
        self.cells[Self::index(x, y)] = None;
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        assert!(y < HEIGHT, "board row {} out of range", y);
        let start = y * WIDTH;
        self.cells[start..start + WIDTH].iter().all(|cell| cell.is_some())
    }

    /// Full-row flags, one per row from top to bottom
    pub fn find_full_rows(&self) -> [bool; HEIGHT] {
        let mut full = [false; HEIGHT];
        for (y, flag) in full.iter_mut().enumerate() {
            *flag = self.is_row_full(y);
        }
        full
    }

    /// Whether any cell in the given rows is occupied
    pub fn any_occupied_in_rows(&self, rows: Range<usize>) -> bool {
        assert!(rows.end <= HEIGHT, "board rows {:?} out of range", rows);
        self.cells[rows.start * WIDTH..rows.end * WIDTH]
            .iter()
            .any(|cell| cell.is_some())
    }

    /// Collapse the stack over full rows.
    ///
    /// Two cursors walk from the bottom row upwards: the read cursor skips full
    /// rows, every non-full row it finds is copied down to the write cursor.
    /// Rows above the last written row are emptied. Non-full rows keep their
    /// relative order.
    pub fn compact(&mut self) -> Compaction {
        let full = self.find_full_rows();
        let mut out = Compaction::default();
        let mut write_y = HEIGHT;

        for read_y in (0..HEIGHT).rev() {
            if full[read_y] {
                out.cleared.push(read_y as u8);
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * WIDTH;
                self.cells.copy_within(src..src + WIDTH, write_y * WIDTH);
                out.shifts.push(RowShift {
                    from: read_y as u8,
                    to: write_y as u8,
                });
            }
        }

        for cell in &mut self.cells[..write_y * WIDTH] {
            *cell = None;
        }
        out.vacated = write_y as u8;
        out
    }

    /// Iterate over occupied cells in column-major order (x outer, y inner)
    pub fn occupied_cells(&self) -> impl Iterator<Item = (i8, i8, Color)> + '_ {
        (0..WIDTH).flat_map(move |x| {
            (0..HEIGHT).filter_map(move |y| {
                self.cells[y * WIDTH + x].map(|color| (x as i8, y as i8, color))
            })
        })
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear_all(&mut self) {
        self.cells = [None; BOARD_SIZE];
    }

    /// Fill a whole row with `color`, optionally leaving one column empty
    #[cfg(test)]
    pub(crate) fn fill_row(&mut self, y: i8, color: Color, hole: Option<i8>) {
        for x in 0..BOARD_WIDTH as i8 {
            if Some(x) != hole {
                self.set(x, y, color);
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), 0);
        assert_eq!(Board::index(9, 0), 9);
        assert_eq!(Board::index(0, 1), 10);
        assert_eq!(Board::index(9, 21), 219);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_board_get_out_of_range_panics() {
        let board = Board::new();
        board.get(10, 0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_board_set_negative_panics() {
        let mut board = Board::new();
        board.set(0, -1, Color::Red);
    }

    #[test]
    fn test_board_set_and_clear() {
        let mut board = Board::new();
        board.set(5, 10, Color::Purple);
        assert!(board.is_occupied(5, 10));
        assert_eq!(board.color_at(5, 10), Some(Color::Purple));
        assert_eq!(board.cells[10 * 10 + 5], Some(Color::Purple));

        board.clear(5, 10);
        assert!(!board.is_occupied(5, 10));
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_find_full_rows() {
        let mut board = Board::new();
        board.fill_row(21, Color::Red, None);
        board.fill_row(20, Color::Red, Some(4));

        let full = board.find_full_rows();
        assert!(full[21]);
        assert!(!full[20]);
        assert_eq!(full.iter().filter(|f| **f).count(), 1);
    }

    #[test]
    fn test_compact_no_full_rows_is_noop() {
        let mut board = Board::new();
        board.set(3, 21, Color::Blue);
        let before = board.clone();

        let c = board.compact();
        assert!(c.cleared.is_empty());
        assert!(c.shifts.is_empty());
        assert_eq!(c.vacated, 0);
        assert_eq!(board, before);
    }

    #[test]
    fn test_compact_preserves_order() {
        let mut board = Board::new();
        board.fill_row(21, Color::Red, None);
        board.set(0, 20, Color::Blue);
        board.fill_row(19, Color::Red, None);
        board.set(1, 18, Color::Lime);

        let c = board.compact();
        assert_eq!(c.cleared.as_slice(), &[21, 19]);

        let mut expected = vec![
            RowShift { from: 20, to: 21 },
            RowShift { from: 18, to: 20 },
        ];
        expected.extend((0..18).rev().map(|y| RowShift { from: y, to: y + 2 }));
        assert_eq!(c.shifts.as_slice(), expected.as_slice());
        assert_eq!(c.vacated, 2);
        assert_eq!(board.color_at(0, 21), Some(Color::Blue));
        assert_eq!(board.color_at(1, 20), Some(Color::Lime));
        assert_eq!(board.occupied_count(), 2);
    }

    #[test]
    fn test_compact_clears_top_row_content() {
        let mut board = Board::new();
        board.fill_row(21, Color::Red, None);
        board.set(7, 0, Color::Yellow);

        board.compact();
        assert!(!board.is_occupied(7, 0));
        assert_eq!(board.color_at(7, 1), Some(Color::Yellow));
    }

    #[test]
    fn test_occupied_cells_column_major() {
        let mut board = Board::new();
        board.set(1, 0, Color::Red);
        board.set(0, 5, Color::Blue);
        board.set(0, 2, Color::Lime);

        let cells: Vec<_> = board.occupied_cells().collect();
        assert_eq!(
            cells,
            vec![(0, 2, Color::Lime), (0, 5, Color::Blue), (1, 0, Color::Red)]
        );
    }

    #[test]
    fn test_any_occupied_in_rows() {
        let mut board = Board::new();
        assert!(!board.any_occupied_in_rows(0..3));
        board.set(9, 3, Color::Red);
        assert!(!board.any_occupied_in_rows(0..3));
        board.set(9, 2, Color::Red);
        assert!(board.any_occupied_in_rows(0..3));
    }
}
