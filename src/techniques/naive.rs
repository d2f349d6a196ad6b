//! Candidate initialization and naive elimination.

use crate::bitset::Set;
use crate::board::{Digit, House};
use crate::helper::HouseArray;
use crate::solver::SudokuContext;

/// Derives every open cell's candidate set from scratch: all digits except
/// those already solved somewhere in the cell's row, column or block.
///
/// Runs once before the solve loop. Because the solved digits of the units
/// are excluded right away, this doubles as the first naive elimination.
pub(crate) fn fill_candidates(ctx: &mut SudokuContext<'_>) {
    let house_solved = solved_digits_per_house(ctx);

    for cell in ctx.unsolved {
        let seen = house_solved[cell.row()] | house_solved[cell.col()] | house_solved[cell.block()];
        ctx.result.record(ctx.board, cell);
        ctx.board.set_candidates(cell, Set::ALL.without(seen));
    }
}

/// A unit with a solved digit: strike that digit from the candidate sets of
/// the unit's open cells. Idempotent.
pub(crate) fn naive_elimination(ctx: &mut SudokuContext<'_>) -> bool {
    let house_solved = solved_digits_per_house(ctx);

    for house in House::all() {
        let solved_digits = house_solved[house];
        if solved_digits.is_empty() {
            continue;
        }
        let open_cells = ctx.houses[house] & ctx.unsolved;
        ctx.eliminate(open_cells, solved_digits);
    }
    ctx.result.has_changes()
}

fn solved_digits_per_house(ctx: &SudokuContext<'_>) -> HouseArray<Set<Digit>> {
    let mut house_solved = HouseArray([Set::NONE; 27]);
    for cell in ctx.solved {
        if let Some(digit) = ctx.board.cell(cell).digit() {
            for &house in &cell.houses() {
                house_solved[house] |= digit.as_set();
            }
        }
    }
    house_solved
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::board::{Board, Cell};
    use crate::solver::{build_context, RoundResult};

    fn init(line: &str) -> Board {
        let mut board = Board::from_str_line(line).unwrap();
        let mut result = RoundResult::new();
        let mut ctx = build_context(&mut board, &mut result).unwrap();
        fill_candidates(&mut ctx);
        board
    }

    #[test]
    fn lone_digit_strips_exactly_its_peers() {
        let mut line = ".".repeat(81);
        line.replace_range(0..1, "1");
        let board = init(&line);

        let one = Digit::new(1).as_set();
        let peers = Cell::new(0).peers();
        assert_eq!(peers.len(), 20);
        for cell in Cell::all().filter(|&c| c != Cell::new(0)) {
            let candidates = board.cell(cell).candidates().unwrap();
            if peers.contains(cell.as_set()) {
                assert_eq!(candidates, Set::ALL.without(one), "cell {}", cell.get());
            } else {
                assert_eq!(candidates, Set::ALL, "cell {}", cell.get());
            }
        }
    }

    #[test]
    fn naive_elimination_is_idempotent() {
        let line = "..5.398...82.1...7.4.75.62..3.49.................23.8..91.82.6.5...6.93...894.1..";
        let mut board = init(line);

        // fill_candidates already excludes the units' solved digits,
        // so a follow-up pass has nothing left to do
        let mut result = RoundResult::new();
        let mut ctx = build_context(&mut board, &mut result).unwrap();
        assert!(!naive_elimination(&mut ctx));

        result.reset();
        let mut ctx = build_context(&mut board, &mut result).unwrap();
        assert!(!naive_elimination(&mut ctx));
    }

    #[test]
    fn naive_elimination_picks_up_stale_candidates() {
        let mut line = ".".repeat(81);
        line.replace_range(40..41, "4");
        let mut board = Board::from_str_line(&line).unwrap();

        // candidates start out full; one pass must strike the 4 in its units
        let mut result = RoundResult::new();
        let mut ctx = build_context(&mut board, &mut result).unwrap();
        assert!(naive_elimination(&mut ctx));

        let four = Digit::new(4).as_set();
        for cell in Cell::new(40).peers() {
            assert!(!board.cell(cell).candidates().unwrap().contains(four));
        }

        // and a second pass finds nothing new
        result.reset();
        let mut ctx = build_context(&mut board, &mut result).unwrap();
        assert!(!naive_elimination(&mut ctx));
    }
}
