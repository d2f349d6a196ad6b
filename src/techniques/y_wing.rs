//! Y-Wing over bi-candidate cells.

use crate::board::positions::common_peers;
use crate::solver::SudokuContext;

/// A pivot cell with candidates {a,b}, one pincer {a,c} and one pincer
/// {b,c}, with both pincers seeing the pivot: whichever way the pivot
/// resolves, one pincer becomes c, so every cell seeing both pincers
/// loses c.
pub(crate) fn y_wing(ctx: &mut SudokuContext<'_>) -> bool {
    let bivalue = ctx.cells_with_candidate_count(2, 2);
    if bivalue.len() < 3 {
        return false;
    }

    for pivot in bivalue {
        let pivot_digits = match ctx.board.cell(pivot).candidates() {
            Some(digits) => digits,
            None => continue,
        };
        let mut digits = pivot_digits.into_iter();
        let (first, second) = match (digits.next(), digits.next()) {
            (Some(a), Some(b)) => (a, b),
            _ => continue,
        };

        let seen_bivalue = pivot.peers() & bivalue;
        let mut with_first = seen_bivalue & ctx.candidates[first];
        let mut with_second = seen_bivalue & ctx.candidates[second];
        // cells holding both pivot digits mirror the pivot and pin nothing
        let mirrors = with_first & with_second;
        with_first = with_first.without(mirrors);
        with_second = with_second.without(mirrors);
        if with_first.is_empty() || with_second.is_empty() {
            continue;
        }

        for pincer_a in with_first {
            for pincer_b in with_second {
                let trio = pivot.as_set() | pincer_a.as_set() | pincer_b.as_set();
                let merged = ctx.merged_candidates(trio);
                if merged.len() != 3 {
                    continue;
                }
                let third = merged.without(first.as_set() | second.as_set());
                if let Ok(Some(shared_digit)) = third.unique() {
                    let affected = common_peers(pincer_a.as_set() | pincer_b.as_set())
                        & ctx.candidates[shared_digit];
                    ctx.eliminate(affected, shared_digit.as_set());
                }
            }
        }
    }
    ctx.result.has_changes()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::bitset::Set;
    use crate::board::{Board, Cell, Digit};
    use crate::solver::{build_context, RoundResult};

    fn digit_set(digits: &[u8]) -> Set<Digit> {
        digits
            .iter()
            .fold(Set::NONE, |set, &d| set | Digit::new(d).as_set())
    }

    #[test]
    fn y_wing_strikes_the_pincers_common_peers() {
        let mut board = Board::from_str_line(&".".repeat(81)).unwrap();
        // pivot r0c0 {1,2}, pincers r0c4 {1,3} (row) and r4c0 {2,3} (column)
        board.set_candidates(Cell::new(0), digit_set(&[1, 2]));
        board.set_candidates(Cell::new(4), digit_set(&[1, 3]));
        board.set_candidates(Cell::new(36), digit_set(&[2, 3]));

        let mut result = RoundResult::new();
        let mut ctx = build_context(&mut board, &mut result).unwrap();
        assert!(y_wing(&mut ctx));

        // r4c4 sees both pincers and loses the shared digit 3
        let three = digit_set(&[3]);
        let crossing = Cell::new(40);
        assert!(!board.cell(crossing).candidates().unwrap().contains(three));

        // the pivot cell itself cannot hold 3 and is untouched
        assert_eq!(board.cell(Cell::new(0)).candidates(), Some(digit_set(&[1, 2])));
        // the pincers keep their candidates
        assert_eq!(board.cell(Cell::new(4)).candidates(), Some(digit_set(&[1, 3])));
        assert_eq!(board.cell(Cell::new(36)).candidates(), Some(digit_set(&[2, 3])));
    }

    #[test]
    fn y_wing_needs_a_third_digit() {
        let mut board = Board::from_str_line(&".".repeat(81)).unwrap();
        // three cells over only two digits form no wing
        board.set_candidates(Cell::new(0), digit_set(&[1, 2]));
        board.set_candidates(Cell::new(4), digit_set(&[1, 2]));
        board.set_candidates(Cell::new(36), digit_set(&[1, 2]));

        let mut result = RoundResult::new();
        let mut ctx = build_context(&mut board, &mut result).unwrap();
        assert!(!y_wing(&mut ctx));
    }
}
