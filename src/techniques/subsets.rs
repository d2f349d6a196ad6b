//! Naked and hidden subsets: pairs, triples and quads.

use crate::bitset::Set;
use crate::board::positions::common_units;
use crate::board::{Digit, House};
use crate::combinations::combinations;
use crate::solver::SudokuContext;

/// `depth` open cells of one unit whose merged candidate sets hold no more
/// than `depth` digits: those digits are locked into those cells, so every
/// other cell of every unit shared by all of them loses the digits.
pub(crate) fn naked_subset(ctx: &mut SudokuContext<'_>, depth: u8) -> bool {
    // only cells with 2..=depth candidates can participate
    let pool = ctx.cells_with_candidate_count(2, depth);
    if pool.is_empty() {
        return false;
    }

    for house in House::all() {
        let house_pool = ctx.houses[house] & pool;
        if house_pool.len() < depth {
            continue;
        }
        for cells in combinations(house_pool, depth) {
            let merged = ctx.merged_candidates(cells);
            if merged.len() > depth {
                continue;
            }
            let affected = ctx.candidate_cells(merged) & common_units(cells);
            ctx.eliminate(affected, merged);
        }
    }
    ctx.result.has_changes()
}

/// `depth` digits that occur within one unit only in the same `depth` open
/// cells: those cells must hold exactly those digits, so their other
/// candidates go.
pub(crate) fn hidden_subset(ctx: &mut SudokuContext<'_>, depth: u8) -> bool {
    for house in House::all() {
        let open_cells = ctx.houses[house] & ctx.unsolved;
        // with depth or fewer open cells there is nothing left to hide in
        if open_cells.len() <= depth {
            continue;
        }

        // digits that occur between 2 and depth times in this unit
        let mut pool = Set::NONE;
        for digit in Digit::all() {
            let occurrences = (ctx.candidates[digit] & open_cells).len();
            if occurrences >= 2 && occurrences <= depth {
                pool |= digit.as_set();
            }
        }
        if pool.len() < depth {
            continue;
        }

        for digits in combinations(pool, depth) {
            let cells = ctx.candidate_cells(digits) & open_cells;
            if cells.len() != depth {
                continue;
            }
            // the digits fit those cells exactly; anything else there goes
            ctx.restrict(cells, digits);
        }
    }
    ctx.result.has_changes()
}
