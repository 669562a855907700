//! Gomoku - hot-seat N-in-a-row in the terminal.
//!
//! Presentation layer over [`gomoku_engine`]:
//!
//! - **config**: match preferences loaded from TOML
//! - **render**: text drawing of the board and winning strike
//! - **session**: the move loop driving the engine, with restarts and rematches
//! - **stopwatch**: match clock

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod render;
mod session;
mod stopwatch;

pub use config::{ConfigError, MAX_NAME_LEN, Preferences};
pub use render::{render_board, symbol};
pub use session::{Input, MatchOutcome, play_match, play_matches};
pub use stopwatch::{Stopwatch, format_elapsed};
