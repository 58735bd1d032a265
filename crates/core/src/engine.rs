//! Game engine - movement legality, locking, line clears, scoring,
//! leveling, and termination.
//!
//! The engine exclusively owns the board and the current/next pieces;
//! the render layer reads them through accessors. All mutation flows
//! through input intents ([`GameEngine::apply_action`]) and the gravity
//! step ([`GameEngine::tick`]), driven by [`GameEngine::update`] with
//! caller-supplied elapsed time so timing is testable without a display.

use retris_types::{GameAction, BOARD_HEIGHT, BOARD_WIDTH};

use crate::board::Board;
use crate::catalog::{self, Shape};
use crate::piece::Tetromino;
use crate::rng::SimpleRng;
use crate::scoring;

/// Complete game state.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    current: Tetromino,
    next: Tetromino,
    rng: SimpleRng,
    score: u32,
    level: u32,
    game_over: bool,
    drop_interval_ms: u32,
    drop_timer_ms: u32,
}

impl GameEngine {
    /// New game on the default 10x20 board.
    pub fn new(seed: u32) -> Self {
        Self::with_size(BOARD_WIDTH, BOARD_HEIGHT, seed)
    }

    /// New game on a custom board size.
    pub fn with_size(width: u8, height: u8, seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let current = Tetromino::spawn(catalog::random(&mut rng), width);
        let next = Tetromino::spawn(catalog::random(&mut rng), width);
        Self {
            board: Board::new(width, height),
            current,
            next,
            rng,
            score: 0,
            level: 1,
            game_over: false,
            drop_interval_ms: scoring::drop_interval_ms(1),
            drop_timer_ms: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access (scenario setup for tests and tools).
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn current(&self) -> Tetromino {
        self.current
    }

    pub fn next(&self) -> Tetromino {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    /// Replace the active piece (scenario setup for tests and tools).
    pub fn set_current(&mut self, piece: Tetromino) {
        self.current = piece;
    }

    /// The single legality gate for movement, rotation, and spawn checks.
    ///
    /// A placement is valid when every occupied cell of `shape`, offset by
    /// the proposed origin, lies within the horizontal bounds and above
    /// the floor, and does not overlap a locked cell. Cells above the top
    /// of the field (absolute y < 0) are exempt from the occupancy check
    /// but still bounded horizontally. Pure.
    pub fn valid_move(&self, shape: &Shape, x: i16, y: i16) -> bool {
        for (r, c) in shape.cells() {
            let cx = x + c as i16;
            let cy = y + r as i16;
            if cx < 0 || cx >= self.board.width() as i16 || cy >= self.board.height() as i16 {
                return false;
            }
            if cy >= 0 && self.board.is_occupied(cx, cy) {
                return false;
            }
        }
        true
    }

    /// Apply an input intent. Illegal moves are silent no-ops.
    ///
    /// Returns whether the intent changed any state. While the game is
    /// over every intent except `Reset` is ignored; `Reset` is only
    /// honored from the game-over state.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.game_over {
            return match action {
                GameAction::Reset => {
                    self.reset();
                    true
                }
                _ => false,
            };
        }
        match action {
            GameAction::MoveLeft => self.try_shift(-1, 0),
            GameAction::MoveRight => self.try_shift(1, 0),
            GameAction::SoftDrop => self.try_shift(0, 1),
            GameAction::RotateCw => self.try_rotate(),
            GameAction::Reset => false,
        }
    }

    /// Advance the drop timer by `elapsed_ms`; runs one gravity step when
    /// the interval elapses. Returns whether a step ran.
    pub fn update(&mut self, elapsed_ms: u32) -> bool {
        if self.game_over {
            return false;
        }
        self.drop_timer_ms += elapsed_ms;
        if self.drop_timer_ms < self.drop_interval_ms {
            return false;
        }
        self.drop_timer_ms = 0;
        self.tick();
        true
    }

    /// One gravity step: move the current piece down one row, or lock it
    /// and resolve line clears, scoring, leveling, and the next spawn.
    pub fn tick(&mut self) {
        if self.game_over {
            return;
        }
        if !self.try_shift(0, 1) {
            self.lock_current();
        }
    }

    /// Reinitialize the full game state, continuing the RNG sequence.
    pub fn reset(&mut self) {
        self.board.clear();
        self.current = Tetromino::spawn(catalog::random(&mut self.rng), self.board.width());
        self.next = Tetromino::spawn(catalog::random(&mut self.rng), self.board.width());
        self.score = 0;
        self.level = 1;
        self.drop_interval_ms = scoring::drop_interval_ms(1);
        self.drop_timer_ms = 0;
        self.game_over = false;
    }

    fn try_shift(&mut self, dx: i16, dy: i16) -> bool {
        let (x, y) = (self.current.x + dx, self.current.y + dy);
        if self.valid_move(&self.current.shape, x, y) {
            self.current.x = x;
            self.current.y = y;
            true
        } else {
            false
        }
    }

    fn try_rotate(&mut self) -> bool {
        let candidate = self.current.rotated();
        if self.valid_move(&candidate, self.current.x, self.current.y) {
            self.current.shape = candidate;
            true
        } else {
            false
        }
    }

    /// Lock the current piece, clear full rows, update score/level, and
    /// spawn the next piece. A failed spawn check ends the game.
    fn lock_current(&mut self) {
        for (r, c) in self.current.shape.cells() {
            let cy = self.current.y + r as i16;
            // Locked cells above the visible field are unrepresentable;
            // the spawn check below ends such games instead.
            if cy >= 0 {
                self.board
                    .set(self.current.x + c as i16, cy, Some(self.current.color));
            }
        }

        let cleared = self.board.clear_full_rows().len();
        if cleared > 0 {
            self.score += scoring::line_clear_score(cleared);
            // At most one level-up per lock; a score jump past several
            // thresholds does not cascade.
            if self.score >= scoring::level_up_threshold(self.level) {
                self.level += 1;
                self.drop_interval_ms = scoring::drop_interval_ms(self.level);
            }
        }

        self.current = self.next;
        self.next = Tetromino::spawn(catalog::random(&mut self.rng), self.board.width());
        if !self.valid_move(&self.current.shape, self.current.x, self.current.y) {
            self.game_over = true;
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(1)
    }
}
