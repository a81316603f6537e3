//! Blank-relative moves on the 3x3 board.
//!
//! The names follow the tile that slides, not the blank: `Left` pulls the
//! tile to the right of the blank into it, so the blank itself moves one
//! column right. `Up` likewise moves the blank one row down.

use std::fmt;

use crate::state::{coords, WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
}

impl Action {
    /// Every action, in declaration order.
    pub const ALL: [Action; 4] = [Action::Up, Action::Down, Action::Left, Action::Right];

    /// Signed change of the blank index when this action is applied.
    pub const fn blank_offset(self) -> isize {
        match self {
            Action::Up => WIDTH as isize,
            Action::Down => -(WIDTH as isize),
            Action::Left => 1,
            Action::Right => -1,
        }
    }

    pub const fn inverse(self) -> Self {
        match self {
            Action::Up => Action::Down,
            Action::Down => Action::Up,
            Action::Left => Action::Right,
            Action::Right => Action::Left,
        }
    }

    /// Whether the action stays on the board with the blank at `blank`.
    ///
    /// An action is illegal iff the blank already sits on the edge it would
    /// cross.
    pub const fn is_legal_from(self, blank: usize) -> bool {
        let (x, y) = coords(blank);
        match self {
            Action::Left => x != WIDTH - 1,
            Action::Right => x != 0,
            Action::Up => y != WIDTH - 1,
            Action::Down => y != 0,
        }
    }

    /// One-letter label (`U`, `D`, `L`, `R`).
    pub const fn symbol(self) -> char {
        match self {
            Action::Up => 'U',
            Action::Down => 'D',
            Action::Left => 'L',
            Action::Right => 'R',
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Up => "Up",
            Action::Down => "Down",
            Action::Left => "Left",
            Action::Right => "Right",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverse_is_involution() {
        for action in Action::ALL {
            assert_eq!(action.inverse().inverse(), action);
            assert_ne!(action.inverse(), action);
            assert_eq!(action.blank_offset(), -action.inverse().blank_offset());
        }
    }

    #[test]
    fn test_center_allows_every_action() {
        for action in Action::ALL {
            assert!(action.is_legal_from(4), "{action} should be legal from the center");
        }
    }

    #[test]
    fn test_corners_block_two_actions() {
        let blocked = |blank: usize| {
            Action::ALL
                .iter()
                .filter(|action| !action.is_legal_from(blank))
                .count()
        };
        for corner in [0, 2, 6, 8] {
            assert_eq!(blocked(corner), 2, "corner {corner}");
        }
        for edge in [1, 3, 5, 7] {
            assert_eq!(blocked(edge), 1, "edge {edge}");
        }
    }

    #[test]
    fn test_bottom_right_blank() {
        assert!(!Action::Left.is_legal_from(8));
        assert!(!Action::Up.is_legal_from(8));
        assert!(Action::Right.is_legal_from(8));
        assert!(Action::Down.is_legal_from(8));
    }

    #[test]
    fn test_display_and_symbol() {
        let labels: Vec<String> = Action::ALL
            .iter()
            .map(|action| format!("{action}/{}", action.symbol()))
            .collect();
        assert_eq!(labels, ["Up/U", "Down/D", "Left/L", "Right/R"]);
    }
}
