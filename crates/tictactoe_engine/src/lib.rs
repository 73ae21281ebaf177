//! Tic-tac-toe game engine.
//!
//! A pure, single-threaded game-state engine: board representation, win and
//! draw evaluation, move application with undo history, and a heuristic AI
//! opponent. Rendering and input belong to the caller.
//!
//! # Architecture
//!
//! - **Types**: [`Mark`], [`Square`], [`Board`], [`Position`], [`Mode`]
//! - **Rules**: the eight [`LINES`], [`evaluate_winner`], [`evaluate_draw`]
//! - **Engine**: [`GameEngine`] owns [`History`] and turn state
//! - **Opponent**: [`select_move`] and [`HeuristicSelector`]
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{EngineConfig, GameEngine, GameStatus, Mark, Mode};
//!
//! let config = EngineConfig::default().with_mode(Mode::PlayerVsPlayer);
//! let mut engine = GameEngine::from_config(&config);
//!
//! for index in [0, 4, 1, 3, 2] {
//!     engine.apply_move(index).unwrap();
//! }
//!
//! match engine.status() {
//!     GameStatus::Won { mark, line } => {
//!         assert_eq!(mark, Mark::X);
//!         assert_eq!(line.indices(), [0, 1, 2]);
//!     }
//!     other => panic!("unexpected status {other}"),
//! }
//! ```
//!
//! Against the AI, a human move returns a ticket the caller plays after its
//! chosen delay:
//!
//! ```
//! use tictactoe_engine::{EngineConfig, GameEngine, Mode, Position};
//!
//! let mut engine = GameEngine::from_config(&EngineConfig::default().with_seed(1));
//! assert_eq!(engine.mode(), Mode::PlayerVsAi);
//!
//! let receipt = engine.apply_move(0).unwrap();
//! let turn = receipt.opponent_turn().expect("AI is due to move");
//! let reply = engine.play_opponent_turn(turn).unwrap();
//! assert_eq!(reply.position(), Position::Center);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod engine;
mod history;
mod position;
mod selector;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{MoveReceipt, OpponentTurn, Rejection};
pub use config::{ConfigError, EngineConfig};
pub use engine::GameEngine;
pub use history::History;
pub use position::Position;
pub use rules::{LINES, Line, Win, evaluate_draw, evaluate_winner};
pub use selector::{HeuristicSelector, MoveSelector, select_move};
pub use types::{Board, BoardParseError, GameStatus, Mark, Mode, Square};
