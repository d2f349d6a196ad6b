//! Error types for board parsing and solving

use crate::board::Cell;

/// Error for [`Board::from_str_line`](crate::Board::from_str_line)
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseBoardError {
    /// Input is not exactly 81 cells long
    #[error("board string should have length 81, found {0}")]
    WrongLength(usize),
    /// Input contains a character that is neither a digit nor an empty-cell marker
    #[error("invalid character {character:?} at cell {cell}")]
    InvalidCharacter {
        /// Flat index of the offending cell, 0..81
        cell: usize,
        /// The character found there
        character: char,
    },
}

/// Error for [`Solver::solve`](crate::Solver::solve)
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SolveError {
    /// An unsolved cell has run out of candidates. The board has no solution.
    #[error("cell {} has no remaining candidates", .0.get())]
    Contradiction(Cell),
}
