//! Gomoku engine - pure N-in-a-row game rules.
//!
//! The engine owns the board, the two players and the turn/status
//! bookkeeping. It performs no I/O and never advances the turn on its
//! own: a presentation layer drives every step explicitly.
//!
//! # Example
//!
//! ```
//! use gomoku_engine::{GameEngine, GameStatus, Player};
//!
//! # fn example() -> Result<(), gomoku_engine::EngineError> {
//! let mut game = GameEngine::new(Player::new("Alex"), Player::new("Marti"), 3, 3)?;
//!
//! for (x, y) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
//!     if game.place_mark(x, y)? {
//!         if game.check_winner(x, y).is_none() {
//!             game.check_draw();
//!         }
//!         game.advance_turn();
//!     }
//! }
//!
//! assert_eq!(game.status(), GameStatus::Side1Won);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod game;
mod player;
pub mod rules;
mod settings;
mod types;

pub use board::Board;
pub use error::EngineError;
pub use game::GameEngine;
pub use player::Player;
pub use settings::{MAX_SIZE, MIN_SIZE, MIN_WIN_LENGTH, validate_settings};
pub use types::{CellMark, Field, GameStatus, Side, Strike};
