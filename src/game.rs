//! Turn orchestration: whose move it is, pass bookkeeping, and final scoring.
//!
//! `GameState` owns the board and is the only thing that flips the current
//! player. The game ends on two consecutive passes or when the board itself
//! has no legal move for either color; after that every mutator is a no-op.

use crate::board::{Board, Color, Point};

/// Compensation added to White's score, for moving second.
pub const KOMI: f64 = 6.5;

/// One full game in progress.
#[derive(Clone)]
pub struct GameState {
    board: Board,
    current_player: Color,
    move_history: Vec<(usize, usize, Color)>,
    pass_count: u32,
    game_over: bool,
    winner: Option<Color>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// A fresh game on an empty board. Black moves first.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Color::Black,
            move_history: Vec::new(),
            pass_count: 0,
            game_over: false,
            winner: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Color {
        self.current_player
    }

    /// Every successful placement so far, in order, with its color.
    /// Passes are not recorded here.
    pub fn move_history(&self) -> &[(usize, usize, Color)] {
        &self.move_history
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// The winner, set once when the game ends. Ties go to White via komi.
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    /// Legal placements for the player to move.
    pub fn legal_moves(&self) -> Vec<Point> {
        self.board.legal_moves(self.current_player)
    }

    /// Place a stone for the current player. Returns whether the placement
    /// succeeded; on failure nothing changes, not even the turn.
    pub fn make_move(&mut self, row: usize, col: usize) -> bool {
        if self.game_over {
            return false;
        }
        if self
            .board
            .place_stone(row, col, self.current_player)
            .is_err()
        {
            return false;
        }
        self.move_history.push((row, col, self.current_player));
        self.pass_count = 0;
        self.current_player = self.current_player.opponent();
        self.check_game_over();
        true
    }

    /// Pass the turn. Two consecutive passes end the game.
    pub fn pass_turn(&mut self) {
        if self.game_over {
            return;
        }
        self.pass_count += 1;
        self.current_player = self.current_player.opponent();
        if self.pass_count >= 2 {
            self.check_game_over();
        }
    }

    fn check_game_over(&mut self) {
        if self.pass_count >= 2 || self.board.is_game_over() {
            self.game_over = true;
            let (black, white) = self.score();
            self.winner = Some(if black > white {
                Color::Black
            } else {
                Color::White
            });
        }
    }

    /// Current (black, white) territory scores, komi already added for White.
    /// Valid at any point in the game, not only at the end.
    pub fn score(&self) -> (f64, f64) {
        (
            self.board.territory_score(Color::Black) as f64,
            self.board.territory_score(Color::White) as f64 + KOMI,
        )
    }
}
