//! Simple coloring (single's chains).
//!
//! A digit occurring exactly twice in some unit forms a conjugate pair:
//! one of the two cells must hold the digit. Chaining pairs that share a
//! cell and alternately two-coloring the chain gives an either/or over the
//! whole chain, which supports three eliminations.

use crate::bitset::Set;
use crate::board::{Cell, Digit, House};
use crate::solver::SudokuContext;

/// Two-colors one digit's conjugate-pair chains and applies the first
/// coloring rule that produces an elimination.
///
/// At most one digit's chain is resolved per round: the scan returns as
/// soon as a rule fires and leaves further chains to later rounds.
pub(crate) fn simple_coloring(ctx: &mut SudokuContext<'_>) -> bool {
    for digit in Digit::all() {
        let candidates = ctx.candidates[digit];
        let pairs = conjugate_pairs(ctx, digit);
        if pairs.is_empty() {
            continue;
        }

        // cells whose links have been followed already, across all chains
        // of this digit
        let mut handled = Set::NONE;

        for &(start_a, start_b) in &pairs {
            if handled.contains(start_a.as_set()) || handled.contains(start_b.as_set()) {
                continue;
            }

            let chain = color_chain(&pairs, start_a, start_b, &mut handled);
            if (chain.green | chain.blue).len() <= 3 {
                continue;
            }

            // rule: a cell forced into both colors cannot hold the digit
            let overlap = chain.green & chain.blue;
            if !overlap.is_empty() {
                ctx.eliminate(overlap, digit.as_set());
                if ctx.result.has_changes() {
                    return true;
                }
            }

            // rule: two same-colored cells in one unit disprove that color
            for house in House::all() {
                for &colored in &[chain.green, chain.blue] {
                    let in_house = ctx.houses[house] & colored;
                    if in_house.len() > 1 {
                        ctx.eliminate(in_house, digit.as_set());
                        if ctx.result.has_changes() {
                            return true;
                        }
                    }
                }
            }

            // rule: an uncolored candidate seeing both colors loses the digit
            let mut sees_both = Set::NONE;
            for cell in candidates.without(chain.green | chain.blue) {
                let peers = cell.peers();
                if peers.overlaps(chain.green) && peers.overlaps(chain.blue) {
                    sees_both |= cell.as_set();
                }
            }
            if !sees_both.is_empty() {
                ctx.eliminate(sees_both, digit.as_set());
                if ctx.result.has_changes() {
                    return true;
                }
            }
        }
    }
    ctx.result.has_changes()
}

struct Chain {
    green: Set<Cell>,
    blue: Set<Cell>,
}

// Breadth-first two-coloring of the chain containing the pair (a, b).
// Cells reachable with both colors end up in both sets.
fn color_chain(pairs: &[(Cell, Cell)], a: Cell, b: Cell, handled: &mut Set<Cell>) -> Chain {
    let mut open = a.as_set() | b.as_set();
    let mut green = Set::NONE;
    let mut blue = Set::NONE;
    let mut green_pending = a.as_set();
    let mut blue_pending = b.as_set();

    while let Some(cell) = open.first() {
        open.remove(cell.as_set());
        if handled.contains(cell.as_set()) {
            continue;
        }
        *handled |= cell.as_set();

        let cell_set = cell.as_set();
        if green_pending.contains(cell_set) && blue_pending.contains(cell_set) {
            green |= cell_set;
            blue |= cell_set;
            continue;
        }
        let is_green = green_pending.contains(cell_set);
        if is_green {
            green |= cell_set;
        } else {
            blue |= cell_set;
        }

        // every conjugate partner of this cell continues the chain with
        // the opposite color
        let mut partners = Set::NONE;
        for &(p, q) in pairs {
            if p == cell {
                partners |= q.as_set();
            } else if q == cell {
                partners |= p.as_set();
            }
        }
        let next = partners.without(open | *handled);
        open |= next;
        if is_green {
            blue_pending |= next;
        } else {
            green_pending |= next;
        }
    }

    Chain { green, blue }
}

// units where the digit has exactly two spots left
fn conjugate_pairs(ctx: &SudokuContext<'_>, digit: Digit) -> Vec<(Cell, Cell)> {
    let candidates = ctx.candidates[digit];
    let mut pairs = Vec::new();
    for house in House::all() {
        let in_house = ctx.houses[house] & candidates;
        if in_house.len() == 2 {
            let mut cells = in_house.into_iter();
            if let (Some(a), Some(b)) = (cells.next(), cells.next()) {
                pairs.push((a, b));
            }
        }
    }
    pairs
}
