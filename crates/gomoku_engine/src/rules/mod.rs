//! Game rules for N-in-a-row.
//!
//! Pure functions over a [`Board`](crate::Board), kept apart from the
//! engine's bookkeeping so they can be exercised on arbitrary positions.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{AXES, find_strike};
