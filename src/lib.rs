//! Tengen: a 9x9 Go engine with minimax search.
//!
//! The crate is a rules engine plus an adversarial searcher; rendering and
//! input handling are left to whatever front end embeds it.
//!
//! ## Modules
//!
//! - [`board`] - Core game rules (placement, capture, ko, suicide, territory)
//! - [`heuristic`] - Five-factor weighted position evaluation
//! - [`search`] - Depth- and time-bounded minimax with alpha-beta pruning
//! - [`game`] - Turn tracking, pass handling, and final scoring with komi
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use tengen::board::{Board, Color};
//! use tengen::search::Minimax;
//!
//! let mut board = Board::new();
//! board.place_stone(4, 4, Color::Black).unwrap();
//!
//! let mut ai = Minimax::with_limits(Color::White, 1, Duration::from_secs(5));
//! let reply = ai.best_move(&board);
//! assert!(reply.is_some());
//! ```

pub mod board;
pub mod game;
pub mod heuristic;
pub mod search;
