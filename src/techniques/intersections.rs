//! Block/line intersections: pointing pairs and box/line reduction.

use crate::bitset::Set;
use crate::board::{Block, Cell, Col, Digit, Row};
use crate::solver::SudokuContext;

/// A digit confined to 2-3 cells of a block that happen to share a row or
/// column: the digit must land in that block, so the rest of the line
/// loses it.
pub(crate) fn pointing_pair(ctx: &mut SudokuContext<'_>) -> bool {
    for block in Block::all() {
        for digit in Digit::all() {
            let in_block = block.cells() & ctx.candidates[digit];
            let count = in_block.len();
            if count < 2 || count > 3 {
                continue;
            }
            if let Some(line) = shared_line(in_block) {
                let affected = (line.without(block.cells())) & ctx.candidates[digit];
                ctx.eliminate(affected, digit.as_set());
            }
        }
    }
    ctx.result.has_changes()
}

/// A digit occurring at least twice in a row or column with all occurrences
/// inside one block: the digit is pinned to that block's slice of the line,
/// so the rest of the block loses it.
pub(crate) fn box_line_reduction(ctx: &mut SudokuContext<'_>) -> bool {
    for digit in Digit::all() {
        let candidates = ctx.candidates[digit];
        let lines = Row::all()
            .map(Row::cells)
            .chain(Col::all().map(Col::cells));

        for line in lines {
            let in_line = line & candidates;
            if in_line.len() < 2 {
                continue;
            }
            let block = match in_line.first() {
                Some(cell) => cell.block(),
                None => continue,
            };
            if !block.cells().contains(in_line) {
                continue;
            }
            let affected = (candidates & block.cells()) ^ in_line;
            ctx.eliminate(affected, digit.as_set());
        }
    }
    ctx.result.has_changes()
}

// the single row or column containing all of `cells`, if any
fn shared_line(cells: Set<Cell>) -> Option<Set<Cell>> {
    let mut iter = cells.into_iter();
    let first = iter.next()?;
    let mut row = Some(first.row());
    let mut col = Some(first.col());
    for cell in iter {
        if row != Some(cell.row()) {
            row = None;
        }
        if col != Some(cell.col()) {
            col = None;
        }
    }
    row.map(Row::cells).or_else(|| col.map(Col::cells))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::board::Board;
    use crate::solver::{build_context, RoundResult};

    fn empty_board() -> Board {
        Board::from_str_line(&".".repeat(81)).unwrap()
    }

    #[test]
    fn pointing_pair_clears_the_rest_of_the_row() {
        let mut board = empty_board();
        let seven = Digit::new(7).as_set();
        // within block 0, digit 7 is confined to cells 1 and 2 of row 0
        for idx in &[0u8, 9, 10, 11, 18, 19, 20] {
            let cell = Cell::new(*idx);
            board.set_candidates(cell, Set::ALL.without(seven));
        }

        let mut result = RoundResult::new();
        let mut ctx = build_context(&mut board, &mut result).unwrap();
        assert!(pointing_pair(&mut ctx));

        // row 0 outside the block lost the 7
        for idx in 3..9 {
            let candidates = board.cell(Cell::new(idx)).candidates().unwrap();
            assert!(!candidates.contains(seven), "cell {}", idx);
        }
        // other rows keep it
        assert!(board.cell(Cell::new(12)).candidates().unwrap().contains(seven));
    }

    #[test]
    fn pointing_pair_needs_a_shared_line() {
        let mut board = empty_board();
        let seven = Digit::new(7).as_set();
        // digit 7 twice in block 0, but on different rows and columns
        for idx in &[0u8, 1, 2, 9, 11, 18, 19] {
            board.set_candidates(Cell::new(*idx), Set::ALL.without(seven));
        }
        // remaining spots for 7 in block 0: cells 10 and 20 (diagonal)

        let mut result = RoundResult::new();
        let mut ctx = build_context(&mut board, &mut result).unwrap();
        assert!(!pointing_pair(&mut ctx));
    }

    #[test]
    fn box_line_reduction_clears_the_rest_of_the_block() {
        let mut board = empty_board();
        let three = Digit::new(3).as_set();
        // in row 0, digit 3 survives only inside block 0 (cells 0..3)
        for idx in 3..9 {
            board.set_candidates(Cell::new(idx), Set::ALL.without(three));
        }

        let mut result = RoundResult::new();
        let mut ctx = build_context(&mut board, &mut result).unwrap();
        assert!(box_line_reduction(&mut ctx));

        // the rest of block 0 lost the 3
        for idx in &[9u8, 10, 11, 18, 19, 20] {
            let candidates = board.cell(Cell::new(*idx)).candidates().unwrap();
            assert!(!candidates.contains(three), "cell {}", idx);
        }
        // row 0 inside the block keeps it
        assert!(board.cell(Cell::new(0)).candidates().unwrap().contains(three));
        // unrelated blocks keep it
        assert!(board.cell(Cell::new(30)).candidates().unwrap().contains(three));
    }

    #[test]
    fn box_line_reduction_needs_containment() {
        let mut board = empty_board();
        let three = Digit::new(3).as_set();
        // digit 3 occurs in row 0 both inside block 0 and block 1
        for idx in 6..9 {
            board.set_candidates(Cell::new(idx), Set::ALL.without(three));
        }

        let mut result = RoundResult::new();
        let mut ctx = build_context(&mut board, &mut result).unwrap();
        assert!(!box_line_reduction(&mut ctx));
    }
}
