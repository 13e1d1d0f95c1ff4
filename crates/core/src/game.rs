//! Game module - the simulation session
//!
//! Owns the board, the transition overlay, the active piece and the random
//! source. A driver feeds it gravity (through [`Game::step`] or the clocked
//! [`Game::update`]) and commands, and pulls one [`FrameCell`] list per frame.
//!
//! Per piece: spawned, falling until a gravity step finds it resting, then
//! locked. A lock checks the top rows for game over, compacts full rows and
//! spawns the next piece.

use crate::board::{Board, Compaction};
use crate::clock::GravityClock;
use crate::config::GameConfig;
use crate::frame::FrameCell;
use crate::piece::Piece;
use crate::rng::{RandomSource, SimpleRng};
use crate::transition::Transitions;
use crate::types::{Command, Orientation, ShapeKind, BOARD_WIDTH};

/// Summary of the most recent lock (consumed by observers)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LockEvent {
    pub kind: ShapeKind,
    pub rows_cleared: u8,
    pub game_over: bool,
}

/// Complete game session
#[derive(Debug, Clone)]
pub struct Game<R: RandomSource = SimpleRng> {
    board: Board,
    transitions: Transitions,
    active: Option<Piece>,
    rng: R,
    config: GameConfig,
    gravity: GravityClock,
    /// Device orientation the active piece was last aligned to
    orientation: Orientation,
    game_over: bool,
    last_event: Option<LockEvent>,
}

impl Game<SimpleRng> {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_config(GameConfig {
            seed,
            ..GameConfig::default()
        })
    }

    pub fn with_config(config: GameConfig) -> Self {
        let rng = SimpleRng::new(config.seed);
        Self::with_rng(config, rng)
    }
}

impl<R: RandomSource> Game<R> {
    /// Create a game drawing shapes and rotations from `rng`
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        Self {
            board: Board::new(),
            transitions: Transitions::new(config.transition_secs),
            active: None,
            rng,
            gravity: GravityClock::new(config.gravity_interval_secs),
            orientation: Orientation::Up,
            game_over: false,
            last_event: None,
            config,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for staging positions.
    ///
    /// Cells written here bypass the active piece; keep them off its footprint.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn transitions(&self) -> &Transitions {
        &self.transitions
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Latched once set
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// One gravity step. Returns the game-over flag.
    ///
    /// Without an active piece a random one is spawned. Otherwise the piece
    /// moves down a row, or is locked if it is resting.
    pub fn step(&mut self) -> bool {
        if self.game_over {
            return true;
        }

        match self.active {
            None => {
                self.spawn_random();
            }
            Some(mut piece) => {
                let resting = piece.move_down(false, &mut self.board, &mut self.transitions);
                if resting {
                    self.active = None;
                    self.lock(piece.kind());
                } else {
                    self.active = Some(piece);
                }
            }
        }

        self.game_over
    }

    /// Run [`step`](Self::step) when the gravity interval has elapsed at `now`.
    /// Returns whether a step ran.
    pub fn update(&mut self, now: f32) -> bool {
        if !self.gravity.advance(now) {
            return false;
        }
        self.step();
        true
    }

    /// Spawn a specific piece at the configured spawn anchor.
    ///
    /// Fails while a piece is active or after game over. A footprint that
    /// overlaps the stack ends the game and leaves the board untouched.
    pub fn spawn(&mut self, kind: ShapeKind, rotation: u8) -> bool {
        if self.game_over || self.active.is_some() {
            return false;
        }

        let (x, y) = (self.config.spawn_x, self.config.spawn_y);
        match Piece::spawn(kind, x, y, rotation, &mut self.board) {
            Some(piece) => {
                self.active = Some(piece);
                true
            }
            None => {
                self.game_over = true;
                false
            }
        }
    }

    fn spawn_random(&mut self) -> bool {
        let kind = self.rng.next_kind();
        let rotation = self.rng.next_range(4) as u8;
        self.spawn(kind, rotation)
    }

    fn lock(&mut self, kind: ShapeKind) {
        let top = self.config.game_over_rows as usize;
        if self.board.any_occupied_in_rows(0..top) {
            self.game_over = true;
        }

        let compaction = self.clear_full_rows();

        if !self.game_over {
            self.spawn_random();
        }

        self.last_event = Some(LockEvent {
            kind,
            rows_cleared: compaction.lines_cleared() as u8,
            game_over: self.game_over,
        });
    }

    /// Compact full rows and move the transitions of every shifted cell along
    /// with it, adding the row drop to each shifted block's animation.
    ///
    /// Runs on lock. Called while a piece is active, the piece's blocks are
    /// shifted like locked ones and its anchor goes stale.
    pub fn clear_full_rows(&mut self) -> Compaction {
        let compaction = self.board.compact();

        for shift in &compaction.shifts {
            let (from_y, to_y) = (shift.from as i8, shift.to as i8);
            for x in 0..BOARD_WIDTH as i8 {
                self.transitions.remap((x, from_y), (x, to_y));
                if self.board.is_occupied(x, to_y) {
                    self.transitions.add_move((x, to_y), (x, from_y));
                }
            }
        }

        for y in 0..compaction.vacated as i8 {
            for x in 0..BOARD_WIDTH as i8 {
                self.transitions.discard((x, y));
            }
        }

        compaction
    }

    /// Apply a player command to the active piece.
    ///
    /// Returns whether the piece moved. Drops never lock by themselves; the
    /// lock happens on the next gravity step.
    pub fn apply(&mut self, command: Command) -> bool {
        if self.game_over {
            return false;
        }
        let Some(piece) = self.active.as_mut() else {
            return false;
        };

        let board = &mut self.board;
        let transitions = &mut self.transitions;
        match command {
            Command::MoveLeft => piece.move_left(board, transitions),
            Command::MoveRight => piece.move_right(board, transitions),
            Command::RotateLeft => piece.rotate(true, board, transitions),
            Command::RotateRight => piece.rotate(false, board, transitions),
            Command::SoftDrop => !piece.move_down(false, board, transitions),
            Command::HardDrop => {
                let before = piece.anchor();
                piece.move_down(true, board, transitions);
                piece.anchor() != before
            }
        }
    }

    /// Rotate the active piece until it matches the device orientation
    /// `target`, taking the shorter way round.
    ///
    /// Stops at the first rotation that fails. The reached orientation is kept
    /// for the next call, across pieces. Returns the number of quarter turns
    /// made.
    pub fn align_to(&mut self, target: Orientation) -> u8 {
        let mut turns = 0;
        if self.game_over {
            return turns;
        }

        loop {
            let diff = target.quarter_turns() as i8 - self.orientation.quarter_turns() as i8;
            if diff == 0 {
                break;
            }
            let mut left = diff > 0;
            if diff.abs() > 2 {
                left = !left;
            }

            let command = if left {
                Command::RotateLeft
            } else {
                Command::RotateRight
            };
            if !self.apply(command) {
                break;
            }

            self.orientation = if left {
                self.orientation.turn_left()
            } else {
                self.orientation.turn_right()
            };
            turns += 1;
        }

        turns
    }

    /// Fill `out` with every occupied cell, column by column, evaluating its
    /// transition at `now`. Expired transitions are dropped along the way.
    pub fn frame_into(&mut self, now: f32, out: &mut Vec<FrameCell>) {
        out.clear();
        for (x, y, color) in self.board.occupied_cells() {
            let transform = self.transitions.evaluate((x, y), now);
            out.push(FrameCell::new(x, y, color, transform));
        }
    }

    pub fn frame(&mut self, now: f32) -> Vec<FrameCell> {
        let mut out = Vec::with_capacity(self.board.occupied_count());
        self.frame_into(now, &mut out);
        out
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(1)
    }
}
