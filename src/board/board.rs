use std::fmt;

use crate::bitset::Set;
use crate::board::{Cell, CellState, Digit};
use crate::consts::N_CELLS;
use crate::errors::ParseBoardError;
use crate::helper::CellArray;

/// A 9x9 sudoku grid: one [`CellState`] per cell, addressed row-major.
///
/// Freshly parsed boards carry the full candidate set on every open cell;
/// the solver narrows those sets down when it runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board(pub(crate) CellArray<CellState>);

impl Board {
    /// Parses a board from its line representation: exactly 81 characters,
    /// left to right, top to bottom. `.`, `x`, space and `0` denote an empty
    /// cell, `1`-`9` a fixed digit. Anything else is rejected.
    ///
    /// ```
    /// use sudoku_logic::Board;
    ///
    /// let line = "..5.398...82.1...7.4.75.62..3.49.................23.8..91.82.6.5...6.93...894.1..";
    /// let board = Board::from_str_line(line).unwrap();
    /// assert_eq!(board.to_str_line(), line.replace('x', "."));
    /// ```
    pub fn from_str_line(s: &str) -> Result<Board, ParseBoardError> {
        let n_chars = s.chars().count();
        if n_chars != N_CELLS {
            return Err(ParseBoardError::WrongLength(n_chars));
        }

        let mut cells = CellArray([CellState::Candidates(Set::ALL); N_CELLS]);
        for (idx, character) in s.chars().enumerate() {
            match character {
                '.' | 'x' | ' ' | '0' => {}
                '1'..='9' => {
                    let digit = Digit::new(character as u8 - b'0');
                    cells.0[idx] = CellState::Solved(digit);
                }
                _ => {
                    return Err(ParseBoardError::InvalidCharacter {
                        cell: idx,
                        character,
                    })
                }
            }
        }
        Ok(Board(cells))
    }

    /// Prints the board in line representation; open cells become `.`.
    pub fn to_str_line(&self) -> String {
        self.0
            .iter()
            .map(|state| match state.digit() {
                Some(digit) => (b'0' + digit.get()) as char,
                None => '.',
            })
            .collect()
    }

    /// The state of a single cell.
    pub fn cell(&self, cell: Cell) -> CellState {
        self.0[cell]
    }

    /// Whether every cell holds a digit.
    pub fn is_fully_solved(&self) -> bool {
        self.0.iter().all(|state| state.is_solved())
    }

    /// Number of solved cells.
    pub fn n_solved(&self) -> u8 {
        self.0.iter().filter(|state| state.is_solved()).count() as u8
    }

    /// Enter a digit. The candidate set of the cell is gone afterwards.
    pub(crate) fn solve_cell(&mut self, cell: Cell, digit: Digit) {
        self.0[cell] = CellState::Solved(digit);
    }

    /// Replace the candidate set of an open cell. No-op on solved cells.
    pub(crate) fn set_candidates(&mut self, cell: Cell, digits: Set<Digit>) {
        if let CellState::Candidates(_) = self.0[cell] {
            self.0[cell] = CellState::Candidates(digits);
        }
    }

    /// Strike candidates from an open cell. No-op on solved cells.
    pub(crate) fn remove_candidates(&mut self, cell: Cell, digits: Set<Digit>) {
        if let CellState::Candidates(mask) = self.0[cell] {
            self.0[cell] = CellState::Candidates(mask.without(digits));
        }
    }

}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_str_line())
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::Board;
    use serde::de::{Error, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::fmt;

    impl Serialize for Board {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&self.to_str_line())
        }
    }

    struct BoardVisitor;

    impl<'de> Visitor<'de> for BoardVisitor {
        type Value = Board;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("an 81 character sudoku line")
        }

        fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
            Board::from_str_line(v).map_err(E::custom)
        }
    }

    impl<'de> Deserialize<'de> for Board {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_str(BoardVisitor)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_round_trips_fixed_digits() {
        let line = "...2...633....54.1..1..398........9....538....3........263..5..5.37....847...1...";
        let board = Board::from_str_line(line).unwrap();
        assert_eq!(board.to_str_line(), line);
    }

    #[test]
    fn all_empty_markers_are_accepted() {
        let dots = ".".repeat(81);
        for marker in &['.', 'x', ' ', '0'] {
            let line: String = dots.replace('.', &marker.to_string());
            let board = Board::from_str_line(&line).unwrap();
            assert!(!board.is_fully_solved());
            // empty markers round-trip to open cells with the full candidate set
            for cell in Cell::all() {
                assert_eq!(board.cell(cell).candidates(), Some(Set::ALL));
            }
        }
    }

    #[test]
    fn rejects_invalid_characters() {
        let mut line = ".".repeat(81);
        line.replace_range(40..41, "a");
        assert_eq!(
            Board::from_str_line(&line),
            Err(ParseBoardError::InvalidCharacter {
                cell: 40,
                character: 'a'
            })
        );
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(
            Board::from_str_line("123"),
            Err(ParseBoardError::WrongLength(3))
        );
        let too_long = ".".repeat(82);
        assert_eq!(
            Board::from_str_line(&too_long),
            Err(ParseBoardError::WrongLength(82))
        );
    }

    #[test]
    fn solved_cells_have_no_candidate_set() {
        let mut line = ".".repeat(81);
        line.replace_range(0..1, "7");
        let board = Board::from_str_line(&line).unwrap();
        let state = board.cell(Cell::new(0));
        assert!(state.is_solved());
        assert_eq!(state.digit(), Some(Digit::new(7)));
        assert_eq!(state.candidates(), None);
    }
}
