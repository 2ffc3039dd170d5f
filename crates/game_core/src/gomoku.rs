//! k-in-a-row on a rectangular board ("five in a row", tic-tac-toe).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{GameEnd, GameError, GameInfo, GameState, PlayerFeatures, PlayerId};

/// The player who moves first.
pub const FIRST: PlayerId = PlayerId(1);
/// The player who moves second.
pub const SECOND: PlayerId = PlayerId(2);

/// Row, column, up-right and down-right line directions.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Largest supported board side.
pub const MAX_SIDE: usize = u8::MAX as usize;

/// Placement of a stone at `(row, col)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: u8,
    pub col: u8,
}

impl Move {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl FromStr for Move {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || GameError::ParseMove(s.to_string());
        let (row, col) = s.trim().split_once(',').ok_or_else(err)?;
        Ok(Move {
            row: row.trim().parse().map_err(|_| err())?,
            col: col.trim().parse().map_err(|_| err())?,
        })
    }
}

/// Two-player k-in-a-row position. `FIRST` moves first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gomoku {
    width: usize,
    height: usize,
    n_in_row: usize,
    cells: Vec<Option<PlayerId>>,
    to_move: PlayerId,
    end: GameEnd,
    moves_played: usize,
}

impl Gomoku {
    /// Empty board. Fails when no line of `n_in_row` fits on the board.
    pub fn new(width: usize, height: usize, n_in_row: usize) -> Result<Self, GameError> {
        let fits = n_in_row <= width || n_in_row <= height;
        if width == 0 || height == 0 || n_in_row == 0 || !fits || width > MAX_SIDE || height > MAX_SIDE {
            return Err(GameError::InvalidBoard {
                width,
                height,
                n_in_row,
            });
        }
        Ok(Self::empty(width, height, n_in_row))
    }

    /// 15x15 board, five in a row.
    pub fn standard() -> Self {
        Self::empty(15, 15, 5)
    }

    /// 3x3 board, three in a row.
    pub fn tictactoe() -> Self {
        Self::empty(3, 3, 3)
    }

    fn empty(width: usize, height: usize, n_in_row: usize) -> Self {
        Self {
            width,
            height,
            n_in_row,
            cells: vec![None; width * height],
            to_move: FIRST,
            end: GameEnd::Ongoing,
            moves_played: 0,
        }
    }

    /// Plays `moves` in order from `self`.
    pub fn with_moves(&self, moves: &[Move]) -> Result<Self, GameError> {
        moves.iter().try_fold(self.clone(), |state, &mv| state.try_apply(mv))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn n_in_row(&self) -> usize {
        self.n_in_row
    }

    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Stone at `(row, col)`, if any. Out-of-range cells read as empty.
    pub fn stone(&self, row: usize, col: usize) -> Option<PlayerId> {
        if row < self.height && col < self.width {
            self.cells[row * self.width + col]
        } else {
            None
        }
    }

    /// Plays `mv`, reporting rule violations instead of panicking.
    pub fn try_apply(&self, mv: Move) -> Result<Self, GameError> {
        let (row, col) = (mv.row as usize, mv.col as usize);
        if self.end.is_terminal() {
            return Err(GameError::GameOver);
        }
        if row >= self.height || col >= self.width {
            return Err(GameError::OutOfBounds { row, col });
        }
        if self.stone(row, col).is_some() {
            return Err(GameError::Occupied { row, col });
        }

        let mut next = self.clone();
        let mover = self.to_move;
        next.cells[row * self.width + col] = Some(mover);
        next.moves_played += 1;
        next.to_move = opponent(mover);

        if next.completes_line(row, col, mover) {
            next.end = GameEnd::Winner(mover);
        } else if next.moves_played == self.cells.len() {
            next.end = GameEnd::Draw;
        }
        Ok(next)
    }

    /// Whether the stone just placed at `(row, col)` finishes a line.
    fn completes_line(&self, row: usize, col: usize, player: PlayerId) -> bool {
        DIRECTIONS.iter().any(|&(dr, dc)| {
            let forward = self.count_from(row, col, dr, dc, player);
            let backward = self.count_from(row, col, -dr, -dc, player);
            1 + forward + backward >= self.n_in_row
        })
    }

    /// Consecutive `player` stones strictly after `(row, col)` in direction `(dr, dc)`.
    fn count_from(&self, row: usize, col: usize, dr: isize, dc: isize, player: PlayerId) -> usize {
        let mut count = 0;
        let (mut r, mut c) = (row as isize + dr, col as isize + dc);
        while self.at(r, c) == Some(Some(player)) {
            count += 1;
            r += dr;
            c += dc;
        }
        count
    }

    /// `None` off the board, otherwise the cell contents.
    fn at(&self, r: isize, c: isize) -> Option<Option<PlayerId>> {
        if r < 0 || c < 0 || r as usize >= self.height || c as usize >= self.width {
            return None;
        }
        Some(self.cells[r as usize * self.width + c as usize])
    }

    fn features(&self, player: PlayerId) -> PlayerFeatures {
        let mut features = PlayerFeatures {
            max_distance: self.distance_to_win(player) as f64,
            ..PlayerFeatures::default()
        };
        let n = self.n_in_row;

        for r in 0..self.height as isize {
            for c in 0..self.width as isize {
                if self.at(r, c) != Some(Some(player)) {
                    continue;
                }
                for &(dr, dc) in &DIRECTIONS {
                    // Only count each run once, from its first stone
                    if self.at(r - dr, c - dc) == Some(Some(player)) {
                        continue;
                    }
                    let len = 1 + self.count_from(r as usize, c as usize, dr, dc, player);
                    let before = self.at(r - dr, c - dc) == Some(None);
                    let after = self.at(r + dr * len as isize, c + dc * len as isize) == Some(None);
                    let open_ends = before as u32 + after as u32;
                    if len < 2 || open_ends == 0 {
                        continue;
                    }

                    if len + 1 == n {
                        if open_ends == 2 {
                            features.live_four += 1;
                        } else {
                            features.four += 1;
                        }
                    } else if len + 2 == n {
                        if open_ends == 2 {
                            features.live_three += 1;
                        } else {
                            features.three += 1;
                        }
                    } else if len + 3 == n && open_ends == 2 {
                        features.live_two += 1;
                    }
                }
            }
        }
        features
    }

    /// Fewest stones `player` still needs in any window free of opponent stones.
    fn distance_to_win(&self, player: PlayerId) -> usize {
        let n = self.n_in_row as isize;
        let mut best = self.n_in_row;

        for r in 0..self.height as isize {
            for c in 0..self.width as isize {
                for &(dr, dc) in &DIRECTIONS {
                    if self.at(r + dr * (n - 1), c + dc * (n - 1)).is_none() {
                        continue;
                    }
                    let mut own = 0;
                    let mut blocked = false;
                    for k in 0..n {
                        match self.at(r + dr * k, c + dc * k) {
                            Some(Some(p)) if p == player => own += 1,
                            Some(Some(_)) => {
                                blocked = true;
                                break;
                            }
                            _ => {}
                        }
                    }
                    if !blocked {
                        best = best.min(self.n_in_row - own);
                    }
                }
            }
        }
        best
    }
}

impl Default for Gomoku {
    fn default() -> Self {
        Self::standard()
    }
}

/// The other seat of a two-player game.
pub fn opponent(player: PlayerId) -> PlayerId {
    if player == FIRST {
        SECOND
    } else {
        FIRST
    }
}

impl GameState for Gomoku {
    type Action = Move;

    fn current_player(&self) -> PlayerId {
        self.to_move
    }

    fn game_end(&self) -> GameEnd {
        self.end
    }

    fn legal_actions(&self) -> Vec<Move> {
        if self.end.is_terminal() {
            return Vec::new();
        }
        (0..self.height)
            .flat_map(|r| (0..self.width).map(move |c| (r, c)))
            .filter(|&(r, c)| self.stone(r, c).is_none())
            .map(|(r, c)| Move::new(r as u8, c as u8))
            .collect()
    }

    /// # Panics
    /// On an illegal move; use [`Gomoku::try_apply`] for untrusted input.
    fn apply(&self, action: Move) -> Self {
        match self.try_apply(action) {
            Ok(next) => next,
            Err(e) => panic!("illegal move {action}: {e}"),
        }
    }

    fn info(&self) -> GameInfo {
        [FIRST, SECOND]
            .into_iter()
            .map(|p| (p, self.features(p)))
            .collect()
    }
}

impl fmt::Display for Gomoku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 0..self.width {
            write!(f, "{:>3}", c)?;
        }
        writeln!(f)?;
        for r in 0..self.height {
            write!(f, "{:>3}", r)?;
            for c in 0..self.width {
                let ch = match self.stone(r, c) {
                    Some(p) if p == FIRST => 'X',
                    Some(_) => 'O',
                    None => '.',
                };
                write!(f, "{:>3}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "gomoku_tests.rs"]
mod gomoku_tests;
