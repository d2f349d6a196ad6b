//! The per-round snapshot every technique works on.

use crate::bitset::Set;
use crate::board::{Board, Cell, CellState, Digit, House};
use crate::errors::SolveError;
use crate::helper::{DigitArray, HouseArray};
use crate::solver::result::RoundResult;

/// Everything a technique needs for one round: the board and change log to
/// mutate, and a read-mostly snapshot of the current constraint state.
///
/// Built fresh at the start of every round and never kept across rounds, so
/// each technique sees a consistent picture. `solved` and `unsolved` are
/// exact complements; `candidates[d]` holds the open cells that still accept
/// digit `d`; `houses` holds the 27 unit boards with blocks at `18..27`.
#[derive(Debug)]
pub(crate) struct SudokuContext<'a> {
    pub board: &'a mut Board,
    pub result: &'a mut RoundResult,
    pub solved: Set<Cell>,
    pub unsolved: Set<Cell>,
    pub candidates: DigitArray<Set<Cell>>,
    pub houses: HouseArray<Set<Cell>>,
}

/// Derives the snapshot from the board.
///
/// This is also the contradiction checkpoint: an open cell with an empty
/// candidate set surfaces here as a recoverable error, at the latest one
/// round after a technique emptied it.
pub(crate) fn build_context<'a>(
    board: &'a mut Board,
    result: &'a mut RoundResult,
) -> Result<SudokuContext<'a>, SolveError> {
    let mut solved = Set::NONE;
    let mut candidates = DigitArray([Set::NONE; 9]);

    for cell in Cell::all() {
        match board.cell(cell) {
            CellState::Solved(_) => solved |= cell.as_set(),
            CellState::Candidates(digits) => {
                if digits.is_empty() {
                    return Err(SolveError::Contradiction(cell));
                }
                for digit in digits {
                    candidates[digit] |= cell.as_set();
                }
            }
        }
    }

    let unsolved = !solved;
    let mut houses = HouseArray([Set::NONE; 27]);
    for house in House::all() {
        houses[house] = house.cells();
    }

    let context = SudokuContext {
        board,
        result,
        solved,
        unsolved,
        candidates,
        houses,
    };
    context.debug_validate();
    Ok(context)
}

impl<'a> SudokuContext<'a> {
    // solved/unsolved must partition the 81 cells, and the candidate boards
    // must agree with the per-cell sets
    fn debug_validate(&self) {
        debug_assert_eq!(self.solved | self.unsolved, Set::ALL);
        debug_assert_eq!(self.solved & self.unsolved, Set::NONE);
        #[cfg(debug_assertions)]
        for cell in Cell::all() {
            let mut from_boards = Set::NONE;
            for digit in Digit::all() {
                if self.candidates[digit].contains(cell.as_set()) {
                    from_boards |= digit.as_set();
                }
            }
            let from_cell = self.board.cell(cell).candidates().unwrap_or(Set::NONE);
            debug_assert_eq!(from_boards, from_cell, "cell {}", cell.get());
        }
    }

    /// The nine block unit boards, houses `18..27`.
    pub(crate) fn blocks(&self) -> impl Iterator<Item = Set<Cell>> + '_ {
        (18..27).map(move |idx| self.houses[House::new(idx)])
    }

    /// Open cells whose candidate count lies in `min..=max`.
    ///
    /// Works purely on the candidate boards: one sweep counts how many of
    /// the nine boards hit each cell, tracked as "hit at least n times"
    /// masks, then the range is cut out of those.
    pub(crate) fn cells_with_candidate_count(&self, min: u8, max: u8) -> Set<Cell> {
        debug_assert!(min >= 1 && max < 9 && min <= max);

        let mut hit_at_least = [Set::NONE; 9];
        for digit in Digit::all() {
            let with_digit = self.candidates[digit];
            // promote from the highest count down so one board raises a
            // cell's count by at most one
            for n in (1..=max as usize).rev() {
                let promoted = hit_at_least[n - 1] & with_digit;
                hit_at_least[n] |= promoted;
            }
            hit_at_least[0] |= with_digit;
        }

        let mut in_range = Set::NONE;
        for n in min..=max {
            in_range |= hit_at_least[n as usize - 1];
        }
        in_range.without(hit_at_least[max as usize])
    }

    /// Union of the candidate sets of `cells`.
    pub(crate) fn merged_candidates(&self, cells: Set<Cell>) -> Set<Digit> {
        let mut merged = Set::NONE;
        for cell in cells {
            if let CellState::Candidates(digits) = self.board.cell(cell) {
                merged |= digits;
            }
        }
        merged
    }

    /// Union of the candidate boards of `digits`: every open cell that still
    /// accepts at least one of them.
    pub(crate) fn candidate_cells(&self, digits: Set<Digit>) -> Set<Cell> {
        let mut merged = Set::NONE;
        for digit in digits {
            merged |= self.candidates[digit];
        }
        merged
    }

    /// Strike `digits` from every open cell in `cells` that holds any of
    /// them, capturing each cell's prior state first. Cells without a hit
    /// are left alone and not recorded.
    pub(crate) fn eliminate(&mut self, cells: Set<Cell>, digits: Set<Digit>) {
        for cell in cells {
            if let CellState::Candidates(mask) = self.board.cell(cell) {
                if mask.overlaps(digits) {
                    self.result.record(self.board, cell);
                    self.board.remove_candidates(cell, digits);
                }
            }
        }
    }

    /// Cut the candidate sets of `cells` down to `digits` (set intersection;
    /// never widens a cell), capturing prior states of the cells that
    /// actually shrink.
    pub(crate) fn restrict(&mut self, cells: Set<Cell>, digits: Set<Digit>) {
        for cell in cells {
            if let CellState::Candidates(mask) = self.board.cell(cell) {
                let kept = mask & digits;
                if kept != mask {
                    self.result.record(self.board, cell);
                    self.board.set_candidates(cell, kept);
                }
            }
        }
    }

    /// Enter a digit, capturing the cell's prior state.
    pub(crate) fn solve_cell(&mut self, cell: Cell, digit: Digit) {
        self.result.record(self.board, cell);
        self.board.solve_cell(cell, digit);
    }
}
