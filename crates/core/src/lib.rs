//! Core game logic - pure, deterministic, and testable.
//!
//! This crate contains all the game rules and state management. It has
//! zero dependencies on UI or I/O, making it:
//!
//! - **Deterministic**: the same seed produces the same piece sequence
//! - **Testable**: every rule is reachable without a terminal
//! - **Portable**: runs in any environment (terminal, GUI, headless)
//!
//! # Module structure
//!
//! - [`catalog`]: the seven shape matrices and their colors
//! - [`piece`]: a positioned, rotatable shape instance
//! - [`board`]: the playfield grid with line clearing
//! - [`engine`]: movement legality, locking, scoring, leveling, game over
//! - [`scoring`]: score/level/speed policy functions
//! - [`rng`]: seeded LCG for uniform piece selection
//!
//! # Game rules
//!
//! Classic falling-block rules: pieces are picked uniformly at random and
//! spawn centered at the top; rotation is a plain clockwise matrix
//! rotation with no wall kicks (a blocked rotation keeps the prior
//! orientation); clearing lines scores a flat 100 points each; the level
//! advances when the score reaches `level * 1000`, speeding up gravity by
//! 50ms per level down to a 100ms floor. A piece that cannot spawn ends
//! the game; only a reset intent leaves the game-over state.
//!
//! # Example
//!
//! ```
//! use retris_core::GameEngine;
//! use retris_types::GameAction;
//!
//! let mut game = GameEngine::new(12345);
//! game.apply_action(GameAction::MoveLeft);
//! game.apply_action(GameAction::RotateCw);
//! game.update(16); // advance the drop timer by one frame
//! assert!(!game.game_over());
//! ```

pub mod board;
pub mod catalog;
pub mod engine;
pub mod piece;
pub mod rng;
pub mod scoring;

pub use board::Board;
pub use catalog::Shape;
pub use engine::GameEngine;
pub use piece::Tetromino;
pub use rng::SimpleRng;
