//! Terminal client for `tictactoe_engine`.
//!
//! [`App`] maps key presses onto engine operations, [`OpponentScheduler`]
//! delivers AI moves after their delay, and [`ui::draw`] renders a frame.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod input;
mod scheduler;

pub mod ui;

pub use app::App;
pub use cli::{Cli, ModeArg};
pub use input::{digit_position, move_cursor};
pub use scheduler::OpponentScheduler;
