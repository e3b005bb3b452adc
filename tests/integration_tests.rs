//! Integration tests for tengen.
//!
//! These exercise the rules engine and the searcher through their public
//! surface only: capture cascades, the ko lifecycle, legal-move generation
//! consistency, scoring with komi, and the equivalence of the alpha-beta
//! search with a pruning-free full minimax.

use std::time::Duration;

use tengen::board::{Board, Color, MoveError, Point};
use tengen::game::{GameState, KOMI};
use tengen::heuristic::{self, Weights};
use tengen::search::Minimax;

// =============================================================================
// Helpers for setting up test positions
// =============================================================================

/// Place stones of one color, panicking on any illegal setup move.
fn place_all(board: &mut Board, color: Color, points: &[Point]) {
    for &(row, col) in points {
        board
            .place_stone(row, col, color)
            .unwrap_or_else(|e| panic!("setup move ({row}, {col}) failed: {e}"));
    }
}

/// A mid-size position with few empty cells: black wall on cols 0-2,
/// white wall on cols 4-6, cols 3/7/8 open. 27 legal moves for either side.
fn walls_position() -> Board {
    let mut board = Board::new();
    for row in 0..9 {
        for col in 0..=2 {
            board.place_stone(row, col, Color::Black).unwrap();
        }
        for col in 4..=6 {
            board.place_stone(row, col, Color::White).unwrap();
        }
    }
    board
}

/// Compare every observable piece of board state.
fn boards_equal(a: &Board, b: &Board) -> bool {
    for row in 0..a.size {
        for col in 0..a.size {
            if a.stone(row, col) != b.stone(row, col) {
                return false;
            }
        }
    }
    a.last_move() == b.last_move() && a.ko_point() == b.ko_point()
}

// =============================================================================
// Board rules
// =============================================================================

#[test]
fn test_rejected_placement_leaves_board_unchanged() {
    let mut board = Board::new();
    place_all(&mut board, Color::Black, &[(4, 4)]);
    let before = board.clone();

    assert_eq!(
        board.place_stone(4, 4, Color::White),
        Err(MoveError::Occupied)
    );
    assert_eq!(
        board.place_stone(9, 4, Color::White),
        Err(MoveError::OutOfBounds)
    );
    assert_eq!(
        board.place_stone(4, 9, Color::White),
        Err(MoveError::OutOfBounds)
    );
    assert!(boards_equal(&board, &before));
}

#[test]
fn test_corner_capture_cascade() {
    let mut board = Board::new();
    board.place_stone(0, 0, Color::Black).unwrap();
    board.place_stone(0, 1, Color::White).unwrap();
    board.place_stone(1, 0, Color::White).unwrap();
    assert_eq!(board.stone(0, 0), None);
    // Captured exactly one stone: the corner becomes the ko point.
    assert_eq!(board.ko_point(), Some((0, 0)));
}

#[test]
fn test_suicide_returns_false_and_cell_stays_empty() {
    let mut board = Board::new();
    place_all(&mut board, Color::White, &[(0, 1), (1, 0)]);
    let before = board.clone();
    assert_eq!(
        board.place_stone(0, 0, Color::Black),
        Err(MoveError::Suicide)
    );
    assert!(boards_equal(&board, &before));
}

#[test]
fn test_ko_forbids_immediate_recapture_only() {
    let mut board = Board::new();
    // Black surrounds (4, 4) from the west, white from the east around (4, 5).
    place_all(&mut board, Color::Black, &[(3, 4), (5, 4), (4, 3)]);
    place_all(&mut board, Color::White, &[(4, 4), (3, 5), (5, 5), (4, 6)]);

    // Black takes the ko: the single white stone at (4, 4) falls.
    board.place_stone(4, 5, Color::Black).unwrap();
    assert_eq!(board.stone(4, 4), None);
    assert_eq!(board.ko_point(), Some((4, 4)));

    // Immediate recapture is banned.
    assert_eq!(board.place_stone(4, 4, Color::White), Err(MoveError::Ko));

    // After a move elsewhere the ban lifts and the recapture works.
    board.place_stone(0, 0, Color::White).unwrap();
    assert_eq!(board.ko_point(), None);
    assert_eq!(board.place_stone(4, 4, Color::White), Ok(()));
    assert_eq!(board.stone(4, 5), None, "black ko stone is retaken");
    assert_eq!(board.ko_point(), Some((4, 5)));
}

#[test]
fn test_legal_moves_agree_with_place_stone() {
    let board = walls_position();
    for color in [Color::Black, Color::White] {
        let legal = board.legal_moves(color);
        assert!(!legal.is_empty());
        for row in 0..board.size {
            for col in 0..board.size {
                let mut trial = board.clone();
                let ok = trial.place_stone(row, col, color).is_ok();
                assert_eq!(
                    legal.contains(&(row, col)),
                    ok,
                    "mismatch at ({row}, {col}) for {color}"
                );
            }
        }
    }
}

// =============================================================================
// Heuristic
// =============================================================================

#[test]
fn test_empty_board_evaluates_to_exactly_zero() {
    let board = Board::new();
    let weights = Weights::default();
    assert_eq!(heuristic::evaluate(&board, Color::Black, &weights), 0.0);
    assert_eq!(heuristic::evaluate(&board, Color::White, &weights), 0.0);
}

// =============================================================================
// Search
// =============================================================================

/// Pruning-free full minimax over the same leaf conditions as the engine's
/// searcher. Used as the reference for the alpha-beta equivalence test.
struct FullMinimax {
    color: Color,
    weights: Weights,
    nodes: u64,
}

impl FullMinimax {
    fn new(color: Color) -> Self {
        Self {
            color,
            weights: Weights::default(),
            nodes: 0,
        }
    }

    fn best_move(&mut self, board: &Board, depth: u32) -> Option<(Point, f64)> {
        let moves = board.legal_moves(self.color);
        let mut best: Option<(Point, f64)> = None;
        for (row, col) in moves {
            let mut child = board.clone();
            child.place_stone(row, col, self.color).unwrap();
            let score = self.minimax(&child, depth.saturating_sub(1), false);
            if best.is_none_or(|(_, s)| score > s) {
                best = Some(((row, col), score));
            }
        }
        best
    }

    fn minimax(&mut self, board: &Board, depth: u32, maximizing: bool) -> f64 {
        self.nodes += 1;
        if depth == 0 || board.is_game_over() {
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
        let mut best = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        for (row, col) in moves {
            let mut child = board.clone();
            child.place_stone(row, col, side).unwrap();
            let score = self.minimax(&child, depth - 1, !maximizing);
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
        best
    }
}

#[test]
fn test_alpha_beta_matches_full_minimax() {
    let board = walls_position();
    let depth = 2;

    let mut reference = FullMinimax::new(Color::Black);
    let (ref_move, ref_score) = reference.best_move(&board, depth).unwrap();

    let mut pruned = Minimax::with_limits(Color::Black, depth, Duration::from_secs(3600));
    let pruned_move = pruned.best_move(&board).unwrap();

    assert_eq!(pruned_move, ref_move, "pruning changed the chosen move");

    // The chosen move's exact value must equal the reference optimum.
    let mut child = board.clone();
    child
        .place_stone(pruned_move.0, pruned_move.1, Color::Black)
        .unwrap();
    let mut check = FullMinimax::new(Color::Black);
    let pruned_score = check.minimax(&child, depth - 1, false);
    assert_eq!(pruned_score, ref_score, "pruning changed the score");

    // Pruning may only reduce work.
    assert!(pruned.stats().nodes_explored <= reference.nodes);
}

#[test]
fn test_single_legal_move_is_returned_without_search() {
    // Fill the board with black except the last cell; White's capture there
    // is the only legal move on the board for either side.
    let mut board = Board::new();
    for row in 0..9 {
        for col in 0..9 {
            if (row, col) != (8, 8) {
                board.place_stone(row, col, Color::Black).unwrap();
            }
        }
    }
    assert!(board.legal_moves(Color::Black).is_empty());

    let mut ai = Minimax::with_limits(Color::White, 3, Duration::from_secs(3600));
    assert_eq!(ai.best_move(&board), Some((8, 8)));
    assert_eq!(ai.stats().nodes_explored, 0);

    let mut black_ai = Minimax::with_limits(Color::Black, 3, Duration::from_secs(3600));
    assert_eq!(black_ai.best_move(&board), None, "no move means pass");
}

// =============================================================================
// Game state
// =============================================================================

#[test]
fn test_double_pass_on_empty_board_white_wins_by_komi() {
    let mut game = GameState::new();
    game.pass_turn();
    game.pass_turn();
    assert!(game.is_game_over());
    let (black, white) = game.score();
    assert_eq!((black, white), (0.0, KOMI));
    assert_eq!(game.winner(), Some(Color::White));
}

#[test]
fn test_rejected_game_move_keeps_turn_and_pass_count() {
    let mut game = GameState::new();
    assert!(game.make_move(4, 4));
    game.pass_turn(); // White passes, Black to move, pass_count = 1

    assert!(!game.make_move(4, 4));
    assert!(!game.make_move(10, 0));
    assert_eq!(game.current_player(), Color::Black);

    // pass_count must still be 1: one more pass from each side ends the game.
    game.pass_turn();
    assert!(game.is_game_over());
}

#[test]
fn test_search_result_feeds_back_into_game() {
    let mut game = GameState::new();
    assert!(game.make_move(4, 4)); // Black opens
    let mut ai = Minimax::with_limits(Color::White, 1, Duration::from_secs(3600));
    match ai.best_move(game.board()) {
        Some((row, col)) => assert!(game.make_move(row, col)),
        None => game.pass_turn(),
    }
    assert_eq!(game.current_player(), Color::Black);
    assert_eq!(game.move_history().len(), 2);
}
