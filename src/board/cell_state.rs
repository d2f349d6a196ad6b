use crate::bitset::Set;
use crate::board::Digit;

/// Contents of a single cell: either a placed digit or the set of digits
/// the cell can still take.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CellState {
    /// The cell holds this digit.
    Solved(Digit),
    /// The cell is open; these digits have not been ruled out yet.
    ///
    /// Once candidate filling has run, an empty set here means the board is
    /// contradictory. The solver reports that instead of continuing.
    Candidates(Set<Digit>),
}

impl CellState {
    /// Whether the cell holds a digit.
    pub fn is_solved(self) -> bool {
        matches!(self, CellState::Solved(_))
    }

    /// The digit in the cell, if solved.
    pub fn digit(self) -> Option<Digit> {
        match self {
            CellState::Solved(digit) => Some(digit),
            CellState::Candidates(_) => None,
        }
    }

    /// The remaining candidates, if the cell is unsolved.
    pub fn candidates(self) -> Option<Set<Digit>> {
        match self {
            CellState::Solved(_) => None,
            CellState::Candidates(digits) => Some(digits),
        }
    }
}
