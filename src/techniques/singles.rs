//! Naked and hidden singles.

use crate::bitset::Set;
use crate::board::{Cell, Digit, House};
use crate::solver::SudokuContext;

/// A cell whose candidate set has exactly one digit left: enter it.
///
/// Single-candidate cells fall out of one sweep over the nine candidate
/// boards: track which cells have been hit before, and anything hit a
/// second time is out.
pub(crate) fn naked_single(ctx: &mut SudokuContext<'_>) -> bool {
    let mut touched = Set::NONE;
    let mut multiple = ctx.solved;

    for digit in Digit::all() {
        let with_digit = ctx.candidates[digit];
        multiple |= touched & with_digit;
        touched |= with_digit;
    }

    let affected = touched.without(multiple);
    for cell in affected {
        if let Some(digits) = ctx.board.cell(cell).candidates() {
            if let Ok(Some(digit)) = digits.unique() {
                ctx.solve_cell(cell, digit);
            }
        }
    }
    ctx.result.has_changes()
}

/// A digit with exactly one possible cell within some unit: enter it there.
///
/// All finds of the pass are collected before anything is entered, so every
/// detection runs against the same snapshot. Two units can nominate the
/// same cell (possibly for different digits); the first claim wins and the
/// duplicate is dropped rather than entered twice.
pub(crate) fn hidden_single(ctx: &mut SudokuContext<'_>) -> bool {
    let mut claimed = Set::NONE;
    let mut finds: Vec<(Cell, Digit)> = Vec::new();

    for digit in Digit::all() {
        for house in House::all() {
            let in_house = ctx.houses[house] & ctx.candidates[digit];
            if let Ok(Some(cell)) = in_house.unique() {
                if !claimed.contains(cell.as_set()) {
                    claimed |= cell.as_set();
                    finds.push((cell, digit));
                }
            }
        }
    }

    for (cell, digit) in finds {
        ctx.solve_cell(cell, digit);
    }
    ctx.result.has_changes()
}
