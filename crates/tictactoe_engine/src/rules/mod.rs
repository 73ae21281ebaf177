//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Rules are separated from
//! the engine so the move selector can evaluate hypothetical boards.

pub mod draw;
pub mod line;
pub mod win;

pub use draw::{evaluate_draw, is_full};
pub use line::{LINES, Line};
pub use win::{Win, evaluate_winner};
