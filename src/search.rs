//! Adversarial search: depth- and time-bounded minimax with alpha-beta pruning.
//!
//! The searcher is fixed to one color and explores cloned boards, scoring
//! leaves with [`crate::heuristic::evaluate`]. Pruning never changes the
//! chosen move or its score relative to a full minimax of the same depth,
//! only the number of nodes visited.
//!
//! The wall-clock limit is checked at every node, so deep branches cannot
//! overrun the budget. A timed-out node returns the heuristic value of its
//! possibly shallow position; moves scored after the cutoff therefore compare
//! against estimates of uneven depth. That is an accepted approximation.

use std::time::{Duration, Instant};

use log::debug;

use crate::board::{Board, Color, Point};
use crate::heuristic::{self, Weights};

/// Default search depth in plies.
pub const DEFAULT_DEPTH: u32 = 3;

/// Default wall-clock budget per `best_move` call.
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(5);

/// Search counters and configuration, readable after any `best_move` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes_explored: u64,
    pub depth: u32,
    pub time_limit: Duration,
}

/// Minimax searcher for a fixed color.
pub struct Minimax {
    color: Color,
    depth: u32,
    time_limit: Duration,
    weights: Weights,
    nodes_explored: u64,
    started: Instant,
}

impl Minimax {
    /// Searcher with the default depth and time limit.
    pub fn new(color: Color) -> Self {
        Self::with_limits(color, DEFAULT_DEPTH, DEFAULT_TIME_LIMIT)
    }

    pub fn with_limits(color: Color, depth: u32, time_limit: Duration) -> Self {
        Self {
            color,
            depth,
            time_limit,
            weights: Weights::default(),
            nodes_explored: 0,
            started: Instant::now(),
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn stats(&self) -> SearchStats {
        SearchStats {
            nodes_explored: self.nodes_explored,
            depth: self.depth,
            time_limit: self.time_limit,
        }
    }

    #[inline]
    fn out_of_time(&self) -> bool {
        self.started.elapsed() > self.time_limit
    }

    /// Pick the best move for this searcher's color, or `None` when the
    /// color has no legal move and the caller should pass.
    ///
    /// Candidates are scored in the row-major order of `legal_moves`; ties
    /// keep the earliest candidate. A single legal move is returned without
    /// searching. If the time budget runs out mid-iteration, the best
    /// candidate seen so far is returned, never `None`.
    pub fn best_move(&mut self, board: &Board) -> Option<Point> {
        self.nodes_explored = 0;
        self.started = Instant::now();

        let moves = board.legal_moves(self.color);
        let first = *moves.first()?;
        if moves.len() == 1 {
            return Some(first);
        }

        let mut best = first;
        let mut best_score = f64::NEG_INFINITY;
        let mut alpha = f64::NEG_INFINITY;
        let beta = f64::INFINITY;

        for (row, col) in moves {
            if self.out_of_time() {
                break;
            }
            let mut child = board.clone();
            // Cannot fail: the candidate came from legal_moves on this board.
            let _ = child.place_stone(row, col, self.color);
            let score = self.minimax(&child, self.depth.saturating_sub(1), false, alpha, beta);
            if score > best_score {
                best_score = score;
                best = (row, col);
            }
            alpha = alpha.max(best_score);
        }

        debug!(
            "search for {}: {} nodes, depth {}, {:?} elapsed",
            self.color,
            self.nodes_explored,
            self.depth,
            self.started.elapsed()
        );
        Some(best)
    }

    /// Score a position `depth` plies deep, alternating maximizing and
    /// minimizing sides within the `[alpha, beta]` window.
    ///
    /// Leaves: time budget exhausted, depth 0, board-level game over, or the
    /// side to move has no legal placement. A side with no moves is evaluated
    /// as-is; no pass-and-continue ply is modeled.
    fn minimax(
        &mut self,
        board: &Board,
        depth: u32,
        maximizing: bool,
        mut alpha: f64,
        mut beta: f64,
    ) -> f64 {
        self.nodes_explored += 1;

        if self.out_of_time() || depth == 0 || board.is_game_over() {
            return heuristic::evaluate(board, self.color, &self.weights);
        }

        let side = if maximizing {
            self.color
        } else {
            self.color.opponent()
        };
        let moves = board.legal_moves(side);
        if moves.is_empty() {
            return heuristic::evaluate(board, self.color, &self.weights);
        }

        if maximizing {
            let mut best = f64::NEG_INFINITY;
            for (row, col) in moves {
                let mut child = board.clone();
                let _ = child.place_stone(row, col, side);
                let score = self.minimax(&child, depth - 1, false, alpha, beta);
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = f64::INFINITY;
            for (row, col) in moves {
                let mut child = board.clone();
                let _ = child.place_stone(row, col, side);
                let score = self.minimax(&child, depth - 1, true, alpha, beta);
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}
