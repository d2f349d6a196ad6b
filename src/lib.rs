#![warn(missing_docs)]
//! A human-style sudoku deduction engine
//!
//! ## Overview
//!
//! This library solves sudokus the way a person does: by repeatedly applying
//! logical techniques, cheapest first, until the board is complete or none
//! of them makes progress. There is no backtracking and no guessing; every
//! entered digit is the conclusion of a deduction, and the sequence of
//! deductions is reported back.
//!
//! ## Example
//!
//! ```
//! use sudoku_logic::{Board, Solver};
//!
//! let line = "..5.398...82.1...7.4.75.62..3.49.................23.8..91.82.6.5...6.93...894.1..";
//!
//! let mut board = Board::from_str_line(line).unwrap();
//! let report = Solver::new().solve(&mut board).unwrap();
//!
//! for entry in report.ledger().iter() {
//!     println!(
//!         "round {}: {} ({} cells)",
//!         entry.round,
//!         entry.technique,
//!         entry.cells_changed
//!     );
//! }
//! if report.is_solved() {
//!     println!("{}", board);
//! }
//! ```

pub mod bitset;
pub mod board;
mod combinations;
mod consts;
pub mod errors;
mod helper;
mod solver;
mod techniques;

pub use crate::board::{Board, Cell, CellState, Digit};
pub use crate::errors::{ParseBoardError, SolveError};
pub use crate::solver::{LedgerEntry, Outcome, Solver, SolveLedger, SolveReport};
pub use crate::techniques::Technique;
