//! Unique rectangles, type 1.

use crate::bitset::Set;
use crate::board::Cell;
use crate::solver::SudokuContext;

/// Four open cells on two rows and two columns spanning exactly two blocks,
/// three of them reduced to the same candidate pair: if the fourth corner
/// resolved to one of the pair digits, the rectangle could be swapped into
/// a second valid solution. A proper puzzle has exactly one, so the pair
/// digits cannot stand in the fourth corner.
pub(crate) fn unique_rectangle(ctx: &mut SudokuContext<'_>) -> bool {
    let bivalue = ctx.cells_with_candidate_count(2, 2);
    if bivalue.len() < 3 {
        return false;
    }

    for top in 0..9u8 {
        for bottom in top + 1..9 {
            for left in 0..9u8 {
                for right in left + 1..9 {
                    let corners = [
                        Cell::new(top * 9 + left),
                        Cell::new(top * 9 + right),
                        Cell::new(bottom * 9 + left),
                        Cell::new(bottom * 9 + right),
                    ];
                    check_rectangle(ctx, corners, bivalue);
                }
            }
        }
    }
    ctx.result.has_changes()
}

fn check_rectangle(ctx: &mut SudokuContext<'_>, corners: [Cell; 4], bivalue: Set<Cell>) {
    if !spans_two_blocks(&corners) {
        return;
    }
    let corner_set = corners
        .iter()
        .fold(Set::NONE, |set, &cell| set | cell.as_set());
    if !ctx.unsolved.contains(corner_set) {
        return;
    }

    // three corners must share one candidate pair
    let mut pair = None;
    for &cell in &corners {
        if !bivalue.contains(cell.as_set()) {
            continue;
        }
        let digits = match ctx.board.cell(cell).candidates() {
            Some(digits) => digits,
            None => continue,
        };
        let matching = corners
            .iter()
            .filter(|&&other| ctx.board.cell(other).candidates() == Some(digits))
            .count();
        if matching == 3 {
            pair = Some(digits);
            break;
        }
    }
    let pair = match pair {
        Some(digits) => digits,
        None => return,
    };

    // the remaining corner must carry the pair plus extras; the pair goes
    for &cell in &corners {
        if let Some(digits) = ctx.board.cell(cell).candidates() {
            if digits != pair && digits.contains(pair) {
                ctx.eliminate(cell.as_set(), pair);
            }
        }
    }
}

// the deadly pattern needs its rows in one band and its columns crossing
// exactly two blocks (or the transpose)
fn spans_two_blocks(corners: &[Cell; 4]) -> bool {
    let blocks = [
        corners[0].block(),
        corners[1].block(),
        corners[2].block(),
        corners[3].block(),
    ];
    let vertical = blocks[0] == blocks[2] && blocks[1] == blocks[3] && blocks[0] != blocks[1];
    let horizontal = blocks[0] == blocks[1] && blocks[2] == blocks[3] && blocks[0] != blocks[2];
    vertical || horizontal
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::board::{Board, Digit};
    use crate::solver::{build_context, RoundResult};

    fn digit_set(digits: &[u8]) -> Set<Digit> {
        digits
            .iter()
            .fold(Set::NONE, |set, &d| set | Digit::new(d).as_set())
    }

    #[test]
    fn rectangle_with_one_wide_corner_loses_the_pair_there() {
        let mut board = Board::from_str_line(&".".repeat(81)).unwrap();
        // rows 0 and 3, columns 0 and 1: blocks 0 and 3, three corners {1,2}
        board.set_candidates(Cell::new(0), digit_set(&[1, 2]));
        board.set_candidates(Cell::new(1), digit_set(&[1, 2]));
        board.set_candidates(Cell::new(27), digit_set(&[1, 2]));
        board.set_candidates(Cell::new(28), digit_set(&[1, 2, 5]));

        let mut result = RoundResult::new();
        let mut ctx = build_context(&mut board, &mut result).unwrap();
        assert!(unique_rectangle(&mut ctx));

        assert_eq!(board.cell(Cell::new(28)).candidates(), Some(digit_set(&[5])));
        // the bi-candidate corners stay as they are
        assert_eq!(board.cell(Cell::new(0)).candidates(), Some(digit_set(&[1, 2])));
    }

    #[test]
    fn rectangle_within_one_block_is_not_deadly() {
        let mut board = Board::from_str_line(&".".repeat(81)).unwrap();
        // all four corners inside block 0: rows 0,1 and columns 0,1
        board.set_candidates(Cell::new(0), digit_set(&[1, 2]));
        board.set_candidates(Cell::new(1), digit_set(&[1, 2]));
        board.set_candidates(Cell::new(9), digit_set(&[1, 2]));
        board.set_candidates(Cell::new(10), digit_set(&[1, 2, 5]));

        let mut result = RoundResult::new();
        let mut ctx = build_context(&mut board, &mut result).unwrap();
        assert!(!unique_rectangle(&mut ctx));
    }

    #[test]
    fn four_equal_corners_change_nothing() {
        let mut board = Board::from_str_line(&".".repeat(81)).unwrap();
        board.set_candidates(Cell::new(0), digit_set(&[1, 2]));
        board.set_candidates(Cell::new(1), digit_set(&[1, 2]));
        board.set_candidates(Cell::new(27), digit_set(&[1, 2]));
        board.set_candidates(Cell::new(28), digit_set(&[1, 2]));

        let mut result = RoundResult::new();
        let mut ctx = build_context(&mut board, &mut result).unwrap();
        assert!(!unique_rectangle(&mut ctx));
    }
}
