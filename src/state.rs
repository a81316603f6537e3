//! Board representation and move operators for the 8-puzzle.
//!
//! The board is a flat array of nine cells in row-major order. Each cell
//! holds a tile label (`'1'..='8'`) or [`BLANK`]. Cell index `i` sits at
//! column `x = i % 3` and row `y = i / 3`, with `y` growing downward.

use std::fmt;
use std::str::FromStr;

use crate::action::Action;
use crate::error::Error;

/// Number of columns (and rows) on the board.
pub const WIDTH: usize = 3;

/// Number of cells on the board.
pub const CELLS: usize = WIDTH * WIDTH;

/// Marker for the empty cell.
pub const BLANK: char = '_';

/// Converts a cell index to `(x, y)` grid coordinates.
#[inline(always)]
pub const fn coords(index: usize) -> (usize, usize) {
    (index % WIDTH, index / WIDTH)
}

/// Converts `(x, y)` grid coordinates to a cell index.
#[inline(always)]
pub const fn index_at(x: usize, y: usize) -> usize {
    x + WIDTH * y
}

/// A 3x3 configuration with exactly one blank.
///
/// Values are plain copies; the move operators either mutate in place
/// ([`PuzzleState::apply`]) or hand back a new value ([`PuzzleState::try_move`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleState {
    cells: [char; CELLS],
}

/// Result of attempting a move.
///
/// Illegal moves are not errors: they leave the board as it was and report
/// `Unchanged`, so callers that ignore the outcome keep the historical
/// total behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved(PuzzleState),
    Unchanged,
}

impl MoveOutcome {
    pub fn is_moved(&self) -> bool {
        matches!(self, MoveOutcome::Moved(_))
    }

    /// The moved state, or `original` when nothing moved.
    pub fn state_or(self, original: PuzzleState) -> PuzzleState {
        match self {
            MoveOutcome::Moved(state) => state,
            MoveOutcome::Unchanged => original,
        }
    }
}

impl PuzzleState {
    /// The ordered configuration `1 2 3 / 4 5 6 / 7 8 _`.
    pub const GOAL: Self = Self {
        cells: ['1', '2', '3', '4', '5', '6', '7', '8', BLANK],
    };

    /// Builds a state from cells the caller has already validated.
    ///
    /// Use [`str::parse`] for untrusted input.
    pub fn from_cells(cells: [char; CELLS]) -> Self {
        debug_assert_eq!(
            cells.iter().filter(|&&cell| cell == BLANK).count(),
            1,
            "a puzzle state needs exactly one blank"
        );
        Self { cells }
    }

    pub fn cells(&self) -> &[char; CELLS] {
        &self.cells
    }

    /// Symbol at `(x, y)`.
    #[inline]
    pub fn value_at(&self, x: usize, y: usize) -> char {
        self.cells[index_at(x, y)]
    }

    /// Index of the first cell holding `symbol`.
    pub fn position_of(&self, symbol: char) -> Option<usize> {
        self.cells.iter().position(|&cell| cell == symbol)
    }

    /// Index of the blank cell.
    ///
    /// # Panics
    ///
    /// Panics if the state has no blank, which `from_cells` and `FromStr`
    /// never produce.
    pub fn blank_position(&self) -> usize {
        self.position_of(BLANK).expect("puzzle state has no blank cell")
    }

    /// Returns the state after `action`, leaving `self` untouched.
    pub fn try_move(&self, action: Action) -> MoveOutcome {
        let blank = self.blank_position();
        if !action.is_legal_from(blank) {
            return MoveOutcome::Unchanged;
        }

        // legality keeps the target on the board
        let target = (blank as isize + action.blank_offset()) as usize;
        let mut cells = self.cells;
        cells.swap(blank, target);
        MoveOutcome::Moved(Self { cells })
    }

    /// Applies `action` in place; an illegal action leaves the board as is.
    pub fn apply(&mut self, action: Action) -> MoveOutcome {
        let outcome = self.try_move(action);
        if let MoveOutcome::Moved(next) = outcome {
            *self = next;
        }
        outcome
    }

    /// Copy of the state after `action`, or an unchanged copy if illegal.
    pub fn successor(&self, action: Action) -> Self {
        self.try_move(action).state_or(*self)
    }

    pub fn move_up(&mut self) -> MoveOutcome {
        self.apply(Action::Up)
    }

    pub fn move_down(&mut self) -> MoveOutcome {
        self.apply(Action::Down)
    }

    pub fn move_left(&mut self) -> MoveOutcome {
        self.apply(Action::Left)
    }

    pub fn move_right(&mut self) -> MoveOutcome {
        self.apply(Action::Right)
    }

    /// Counts pairs of tiles that appear in the wrong relative order.
    ///
    /// The blank takes no part in any pair.
    pub fn inversions(&self) -> usize {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell != BLANK)
            .map(|(i, &cell)| {
                self.cells[i + 1..]
                    .iter()
                    .filter(|&&later| later != BLANK && later < cell)
                    .count()
            })
            .sum()
    }

    /// A 3-wide board can reach [`PuzzleState::GOAL`] iff its inversion
    /// count is even. Blank position does not matter on odd widths.
    pub fn is_solvable(&self) -> bool {
        self.inversions() % 2 == 0
    }
}

impl AsRef<PuzzleState> for PuzzleState {
    fn as_ref(&self) -> &PuzzleState {
        self
    }
}

impl fmt::Display for PuzzleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "+-------+")?;
        for row in self.cells.chunks(WIDTH) {
            writeln!(f, "| {} {} {} |", row[0], row[1], row[2])?;
        }
        write!(f, "+-------+")
    }
}

impl FromStr for PuzzleState {
    type Err = Error;

    /// Parses nine whitespace-separated single-character tokens in
    /// row-major order. Each of `1`..`8` and `_` must appear exactly once.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        if tokens.len() != CELLS {
            return Err(Error::InvalidTokenCount {
                expected: CELLS,
                got: tokens.len(),
            });
        }

        let mut cells = [BLANK; CELLS];
        // seen[0] tracks the blank, seen[1..=8] the tiles
        let mut seen = [false; CELLS];

        for (position, token) in tokens.iter().enumerate() {
            let mut chars = token.chars();
            let symbol = match (chars.next(), chars.next()) {
                (Some(symbol), None) => symbol,
                _ => {
                    return Err(Error::InvalidSymbol {
                        token: token.to_string(),
                        position,
                    })
                }
            };

            let slot = match symbol {
                BLANK => 0,
                '1'..='8' => symbol as usize - '0' as usize,
                _ => {
                    return Err(Error::InvalidSymbol {
                        token: token.to_string(),
                        position,
                    })
                }
            };

            if seen[slot] {
                return Err(Error::DuplicateSymbol { symbol });
            }
            seen[slot] = true;
            cells[position] = symbol;
        }

        Ok(Self { cells })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn state(s: &str) -> PuzzleState {
        s.parse().expect("test state should parse")
    }

    #[test]
    fn test_coordinate_conversion_roundtrip() {
        for idx in 0..CELLS {
            let (x, y) = coords(idx);
            assert!(x < WIDTH && y < WIDTH, "coords({idx}) out of range");
            assert_eq!(index_at(x, y), idx);
        }
        assert_eq!(coords(5), (2, 1));
        assert_eq!(coords(7), (1, 2));
    }

    #[test]
    fn test_blank_and_position_lookup() {
        let s = state("4 1 3 _ 2 6 7 5 8");
        assert_eq!(s.blank_position(), 3);
        assert_eq!(s.position_of('8'), Some(8));
        assert_eq!(s.position_of('9'), None);
        assert_eq!(s.value_at(1, 2), '5');
    }

    #[test]
    fn test_move_right_from_goal() {
        let mut s = PuzzleState::GOAL;
        let outcome = s.move_right();
        assert!(outcome.is_moved());
        assert_eq!(s, state("1 2 3 4 5 6 7 _ 8"));
    }

    #[test]
    fn test_move_names_follow_the_sliding_tile() {
        // blank in the center; each move pulls the named neighbor in
        let center = state("1 2 3 4 _ 5 6 7 8");
        assert_eq!(center.successor(Action::Left), state("1 2 3 4 5 _ 6 7 8"));
        assert_eq!(center.successor(Action::Right), state("1 2 3 _ 4 5 6 7 8"));
        assert_eq!(center.successor(Action::Up), state("1 2 3 4 7 5 6 _ 8"));
        assert_eq!(center.successor(Action::Down), state("1 _ 3 4 2 5 6 7 8"));
    }

    #[test]
    fn test_illegal_move_is_silent_noop() {
        let mut s = PuzzleState::GOAL;
        assert_eq!(s.try_move(Action::Left), MoveOutcome::Unchanged);
        assert_eq!(s.move_up(), MoveOutcome::Unchanged);
        assert_eq!(s, PuzzleState::GOAL);
        assert_eq!(s.successor(Action::Left), PuzzleState::GOAL);
    }

    #[test]
    fn test_every_move_keeps_one_blank() {
        let s = state("8 6 7 2 5 4 3 _ 1");
        for action in Action::ALL {
            let next = s.successor(action);
            let blanks = next.cells().iter().filter(|&&c| c == BLANK).count();
            assert_eq!(blanks, 1, "after {action}");
        }
    }

    #[test]
    fn test_goal_is_solvable() {
        assert_eq!(PuzzleState::GOAL.inversions(), 0);
        assert!(PuzzleState::GOAL.is_solvable());
    }

    #[test]
    fn test_swapped_pair_is_unsolvable() {
        let s = state("1 2 3 4 5 6 8 7 _");
        assert_eq!(s.inversions(), 1);
        assert!(!s.is_solvable());
    }

    #[test]
    fn test_inversions_ignore_blank() {
        // 8 7 6 5 4 3 2 1 has 28 inversions wherever the blank is
        assert_eq!(state("_ 8 7 6 5 4 3 2 1").inversions(), 28);
        assert_eq!(state("8 7 6 5 _ 4 3 2 1").inversions(), 28);
    }

    #[test]
    fn test_parse_rejects_wrong_token_count() {
        let err = "1 2 3 4 5 6 7 8".parse::<PuzzleState>().unwrap_err();
        assert!(matches!(err, Error::InvalidTokenCount { expected: 9, got: 8 }));
    }

    #[test]
    fn test_parse_rejects_bad_tokens() {
        let err = "1 2 3 4 5 6 7 9 _".parse::<PuzzleState>().unwrap_err();
        assert!(matches!(err, Error::InvalidSymbol { position: 7, .. }));

        let err = "1 2 3 4 5 6 7 88 _".parse::<PuzzleState>().unwrap_err();
        assert!(matches!(err, Error::InvalidSymbol { position: 7, .. }));
    }

    #[test]
    fn test_parse_rejects_duplicates() {
        let err = "1 2 3 4 5 6 7 7 _".parse::<PuzzleState>().unwrap_err();
        assert!(matches!(err, Error::DuplicateSymbol { symbol: '7' }));

        let err = "1 2 3 4 _ 6 7 8 _".parse::<PuzzleState>().unwrap_err();
        assert!(matches!(err, Error::DuplicateSymbol { symbol: BLANK }));
    }

    #[test]
    fn test_parse_accepts_multiline_layout() {
        let s = state("1 2 3\n4 5 6\n7 8 _\n");
        assert_eq!(s, PuzzleState::GOAL);
    }

    #[test]
    fn test_display_layout() {
        insta::assert_snapshot!(state("2 8 3 1 6 4 7 _ 5").to_string(), @r"
        +-------+
        | 2 8 3 |
        | 1 6 4 |
        | 7 _ 5 |
        +-------+
        ");
    }

    fn action_strategy() -> impl Strategy<Value = Action> {
        prop::sample::select(Action::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn prop_legal_moves_preserve_parity(walk in prop::collection::vec(action_strategy(), 0..80)) {
            let mut s = PuzzleState::GOAL;
            for action in walk {
                s.apply(action);
                prop_assert!(s.is_solvable());
            }
        }

        #[test]
        fn prop_move_then_inverse_restores(walk in prop::collection::vec(action_strategy(), 0..40)) {
            let mut s = PuzzleState::GOAL;
            for action in walk {
                s.apply(action);
            }
            for action in Action::ALL {
                if let MoveOutcome::Moved(next) = s.try_move(action) {
                    prop_assert_eq!(next.successor(action.inverse()), s);
                }
            }
        }
    }
}
