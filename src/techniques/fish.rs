//! X-Wing, the 2-line basic fish.

use crate::bitset::Set;
use crate::board::{Cell, Col, Digit, Row};
use crate::solver::SudokuContext;

/// A digit restricted to exactly two cells in each of two rows, with the
/// four cells stacked into exactly two columns: the digit must sit on one
/// diagonal of that rectangle, so the rest of the two columns loses it.
/// Scans the transposed (column-based) case as well.
pub(crate) fn x_wing(ctx: &mut SudokuContext<'_>) -> bool {
    for digit in Digit::all() {
        let candidates = ctx.candidates[digit];

        let rows: Vec<Set<Cell>> = Row::all().map(|r| candidates & r.cells()).collect();
        let cols: Vec<Set<Cell>> = Col::all().map(|c| candidates & c.cells()).collect();

        scan_lines(ctx, digit, &rows, &cols);
        scan_lines(ctx, digit, &cols, &rows);
    }
    ctx.result.has_changes()
}

// `primary`/`crossing`: the digit's candidate cells per line, both axes
fn scan_lines(
    ctx: &mut SudokuContext<'_>,
    digit: Digit,
    primary: &[Set<Cell>],
    crossing: &[Set<Cell>],
) {
    // lines where the digit has exactly two spots left
    let strict: Vec<Set<Cell>> = primary
        .iter()
        .filter(|line| line.len() == 2)
        .cloned()
        .collect();

    for (idx, &first) in strict.iter().enumerate() {
        for &second in &strict[idx + 1..] {
            let rectangle = first | second;

            // the four cells must occupy exactly two crossing lines,
            // two cells each
            let spanned: Vec<Set<Cell>> = crossing
                .iter()
                .filter(|line| line.overlaps(rectangle))
                .cloned()
                .collect();
            if spanned.len() != 2
                || (spanned[0] & rectangle).len() != 2
                || (spanned[1] & rectangle).len() != 2
            {
                continue;
            }

            let affected = (spanned[0] | spanned[1]).without(rectangle);
            ctx.eliminate(affected, digit.as_set());
        }
    }
}
