//! Position evaluation.
//!
//! A position is scored for one player as a weighted sum of five
//! player-minus-opponent differentials: stones on the board, territory,
//! total group liberties, center occupation, and group strength
//! (group size times the square root of its liberties). Higher is better
//! for the evaluated player; an empty board scores exactly 0.
//!
//! Evaluation only reads the board, so it is safe to call from any number
//! of concurrent search branches.

use crate::board::{Board, Color};

/// Rows and cols of the 3x3 center block on the 9x9 board.
const CENTER: std::ops::RangeInclusive<usize> = 3..=5;

/// Weight of each evaluation factor.
///
/// An immutable value owned by whoever evaluates; `Default` gives the
/// engine's standard tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub stone_count: f64,
    pub territory: f64,
    pub liberties: f64,
    pub center_control: f64,
    pub group_strength: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            stone_count: 1.0,
            territory: 2.0,
            liberties: 1.5,
            center_control: 1.2,
            group_strength: 1.3,
        }
    }
}

/// Score `board` from `player`'s point of view.
pub fn evaluate(board: &Board, player: Color, weights: &Weights) -> f64 {
    let opponent = player.opponent();

    let stone_diff = stone_count(board, player) as f64 - stone_count(board, opponent) as f64;
    let territory_diff =
        board.territory_score(player) as f64 - board.territory_score(opponent) as f64;
    let liberty_diff =
        (total_liberties(board, player) as f64 - total_liberties(board, opponent) as f64) / 10.0;
    let center_diff = center_stones(board, player) as f64 - center_stones(board, opponent) as f64;
    let strength_diff = (group_strength(board, player) - group_strength(board, opponent)) / 10.0;

    weights.stone_count * stone_diff
        + weights.territory * territory_diff
        + weights.liberties * liberty_diff
        + weights.center_control * center_diff
        + weights.group_strength * strength_diff
}

fn stone_count(board: &Board, color: Color) -> usize {
    let mut count = 0;
    for row in 0..board.size {
        for col in 0..board.size {
            if board.stone(row, col) == Some(color) {
                count += 1;
            }
        }
    }
    count
}

/// Sum of liberties over all of a color's groups, each group counted once.
fn total_liberties(board: &Board, color: Color) -> usize {
    let mut visited = vec![false; board.size * board.size];
    let mut total = 0;
    for row in 0..board.size {
        for col in 0..board.size {
            if board.stone(row, col) == Some(color) && !visited[row * board.size + col] {
                let group = board.group_at(row, col);
                for &(r, c) in &group {
                    visited[r * board.size + c] = true;
                }
                total += board.count_liberties(&group);
            }
        }
    }
    total
}

fn center_stones(board: &Board, color: Color) -> usize {
    let mut count = 0;
    for row in CENTER {
        for col in CENTER {
            if board.stone(row, col) == Some(color) {
                count += 1;
            }
        }
    }
    count
}

/// Strength of a color's position: for each group, size times the square
/// root of its liberty count. Big well-connected groups dominate.
fn group_strength(board: &Board, color: Color) -> f64 {
    let mut visited = vec![false; board.size * board.size];
    let mut strength = 0.0;
    for row in 0..board.size {
        for col in 0..board.size {
            if board.stone(row, col) == Some(color) && !visited[row * board.size + col] {
                let group = board.group_at(row, col);
                for &(r, c) in &group {
                    visited[r * board.size + c] = true;
                }
                let liberties = board.count_liberties(&group) as f64;
                strength += group.len() as f64 * liberties.sqrt();
            }
        }
    }
    strength
}
