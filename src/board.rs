//! 9x9 Go board and rules engine.
//!
//! The board owns the grid and implements every rule of the game:
//! - Stone placement with capture resolution
//! - Suicide prohibition (illegal placements are rolled back)
//! - Simplified ko (a single point banned for the next placement only)
//! - Group and liberty queries via flood fill
//! - Territory scoring (stones plus exclusively-bordered empty regions)
//!
//! The board is a plain value: cloning produces a fully independent copy,
//! which is what legal-move generation and the search tree rely on.

use std::fmt;

/// Board side length. The engine plays 9x9 exclusively.
pub const BOARD_SIZE: usize = 9;

/// Stone color. Empty cells are `None` in the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Color {
    Black,
    White,
}

impl Color {
    #[inline]
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "Black"),
            Color::White => write!(f, "White"),
        }
    }
}

/// A board coordinate as (row, col), both 0-based.
pub type Point = (usize, usize);

/// Why a placement was rejected. The board is unchanged after any of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Coordinate is outside the board
    OutOfBounds,
    /// Cell already holds a stone
    Occupied,
    /// Cell is the current ko point
    Ko,
    /// Placement would leave the placed group with no liberties
    /// while capturing nothing
    Suicide,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfBounds => write!(f, "illegal move: out of bounds"),
            MoveError::Occupied => write!(f, "illegal move: point not empty"),
            MoveError::Ko => write!(f, "illegal move: retakes ko"),
            MoveError::Suicide => write!(f, "illegal move: suicide"),
        }
    }
}

/// A Go board state.
#[derive(Clone)]
pub struct Board {
    pub size: usize,
    cells: Vec<Option<Color>>,
    last_move: Option<Point>,
    ko_point: Option<Point>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            size: BOARD_SIZE,
            cells: vec![None; BOARD_SIZE * BOARD_SIZE],
            last_move: None,
            ko_point: None,
        }
    }

    #[inline]
    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    #[inline]
    pub fn is_valid_position(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// The stone at (row, col), or `None` for an empty or out-of-range cell.
    pub fn stone(&self, row: usize, col: usize) -> Option<Color> {
        if !self.is_valid_position(row, col) {
            return None;
        }
        self.cells[self.idx(row, col)]
    }

    /// The most recent successful placement, for display highlighting.
    pub fn last_move(&self) -> Option<Point> {
        self.last_move
    }

    /// The cell banned for the next placement, if the previous placement
    /// captured exactly one stone.
    pub fn ko_point(&self) -> Option<Point> {
        self.ko_point
    }

    fn neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = Point> + '_ {
        let s = self.size;
        let mut v = Vec::with_capacity(4);
        if row > 0 {
            v.push((row - 1, col));
        }
        if row + 1 < s {
            v.push((row + 1, col));
        }
        if col > 0 {
            v.push((row, col - 1));
        }
        if col + 1 < s {
            v.push((row, col + 1));
        }
        v.into_iter()
    }

    /// Attempt to place a stone of `color` at (row, col).
    ///
    /// On success the cell is set, any adjacent opposing group left without
    /// liberties is captured, and the ko point is updated: set to the captured
    /// cell when exactly one single-stone group was taken, cleared otherwise.
    ///
    /// On failure the board is exactly as it was before the call; the suicide
    /// path in particular reverts its tentative stone.
    pub fn place_stone(&mut self, row: usize, col: usize, color: Color) -> Result<(), MoveError> {
        if !self.is_valid_position(row, col) {
            return Err(MoveError::OutOfBounds);
        }
        if self.stone(row, col).is_some() {
            return Err(MoveError::Occupied);
        }
        if self.ko_point == Some((row, col)) {
            return Err(MoveError::Ko);
        }

        let idx = self.idx(row, col);
        self.cells[idx] = Some(color);

        // Capture every neighboring opposing group that is now out of liberties.
        let opponent = color.opponent();
        let mut captured_groups: Vec<Vec<Point>> = Vec::new();
        let mut marked = vec![false; self.size * self.size];
        for (nr, nc) in self.neighbors(row, col) {
            if self.stone(nr, nc) == Some(opponent) && !marked[self.idx(nr, nc)] {
                let group = self.group_at(nr, nc);
                if self.count_liberties(&group) == 0 {
                    for &(gr, gc) in &group {
                        marked[self.idx(gr, gc)] = true;
                    }
                    captured_groups.push(group);
                }
            }
        }
        for group in &captured_groups {
            for &(gr, gc) in group {
                let i = self.idx(gr, gc);
                self.cells[i] = None;
            }
        }

        // Suicide: the placed group ends up with no liberties and took nothing.
        if captured_groups.is_empty() {
            let own_group = self.group_at(row, col);
            if self.count_liberties(&own_group) == 0 {
                self.cells[idx] = None;
                return Err(MoveError::Suicide);
            }
        }

        self.last_move = Some((row, col));
        self.ko_point = match captured_groups.as_slice() {
            [group] if group.len() == 1 => Some(group[0]),
            _ => None,
        };
        Ok(())
    }

    /// Collect the maximal same-colored group containing (row, col).
    ///
    /// Returns an empty vec for an empty or out-of-range cell.
    pub(crate) fn group_at(&self, row: usize, col: usize) -> Vec<Point> {
        let Some(color) = self.stone(row, col) else {
            return Vec::new();
        };
        let mut stack = vec![(row, col)];
        let mut visited = vec![false; self.size * self.size];
        let mut group = Vec::new();
        while let Some((r, c)) = stack.pop() {
            let i = self.idx(r, c);
            if visited[i] {
                continue;
            }
            visited[i] = true;
            group.push((r, c));
            for (nr, nc) in self.neighbors(r, c) {
                if !visited[self.idx(nr, nc)] && self.stone(nr, nc) == Some(color) {
                    stack.push((nr, nc));
                }
            }
        }
        group
    }

    /// Count the distinct empty cells orthogonally adjacent to a group.
    pub(crate) fn count_liberties(&self, group: &[Point]) -> usize {
        let mut seen = vec![false; self.size * self.size];
        let mut liberties = 0;
        for &(r, c) in group {
            for (nr, nc) in self.neighbors(r, c) {
                let i = self.idx(nr, nc);
                if self.stone(nr, nc).is_none() && !seen[i] {
                    seen[i] = true;
                    liberties += 1;
                }
            }
        }
        liberties
    }

    /// Every legal placement for `color`, in row-major order.
    ///
    /// Each empty cell gets a full trial placement on a disposable clone,
    /// so the result is exact under captures, ko, and suicide.
    pub fn legal_moves(&self, color: Color) -> Vec<Point> {
        let mut moves = Vec::new();
        for row in 0..self.size {
            for col in 0..self.size {
                if self.stone(row, col).is_some() {
                    continue;
                }
                let mut trial = self.clone();
                if trial.place_stone(row, col, color).is_ok() {
                    moves.push((row, col));
                }
            }
        }
        moves
    }

    /// Territory for `color`: its stones on the board plus the size of every
    /// empty region whose entire stone boundary is that color.
    pub fn territory_score(&self, color: Color) -> usize {
        let mut score = self.cells.iter().filter(|&&c| c == Some(color)).count();

        let mut visited = vec![false; self.size * self.size];
        for row in 0..self.size {
            for col in 0..self.size {
                if self.stone(row, col).is_none() && !visited[self.idx(row, col)] {
                    let (region, owner) = self.empty_region(row, col, &mut visited);
                    if owner == Some(color) {
                        score += region.len();
                    }
                }
            }
        }
        score
    }

    /// Flood-fill the empty region containing (row, col), recording which
    /// stone colors border it. The region has an owner only when exactly one
    /// color does.
    fn empty_region(
        &self,
        row: usize,
        col: usize,
        visited: &mut [bool],
    ) -> (Vec<Point>, Option<Color>) {
        let mut region = Vec::new();
        let mut stack = vec![(row, col)];
        let mut borders_black = false;
        let mut borders_white = false;

        while let Some((r, c)) = stack.pop() {
            match self.stone(r, c) {
                Some(Color::Black) => {
                    borders_black = true;
                    continue;
                }
                Some(Color::White) => {
                    borders_white = true;
                    continue;
                }
                None => {}
            }
            let i = self.idx(r, c);
            if visited[i] {
                continue;
            }
            visited[i] = true;
            region.push((r, c));
            for (nr, nc) in self.neighbors(r, c) {
                if !visited[self.idx(nr, nc)] {
                    stack.push((nr, nc));
                }
            }
        }

        let owner = match (borders_black, borders_white) {
            (true, false) => Some(Color::Black),
            (false, true) => Some(Color::White),
            _ => None,
        };
        (region, owner)
    }

    /// Board-level end of game: neither color has any legal placement.
    /// Pass-based termination lives in `GameState`, not here.
    pub fn is_game_over(&self) -> bool {
        self.legal_moves(Color::Black).is_empty() && self.legal_moves(Color::White).is_empty()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 0..self.size {
            write!(f, "{col} ")?;
        }
        writeln!(f)?;
        for row in 0..self.size {
            write!(f, "{row} ")?;
            for col in 0..self.size {
                let ch = match self.stone(row, col) {
                    Some(Color::Black) => 'X',
                    Some(Color::White) => 'O',
                    None => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
