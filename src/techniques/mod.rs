//! The deduction technique library.
//!
//! Every technique is a pure pattern detector over the per-round
//! [`SudokuContext`] snapshot: it scans, and on a hit records the prior
//! state of each cell it is about to touch, then mutates the board. The
//! shared contract is small: tag the round result on entry (hit or miss),
//! capture before mutating, report whether anything changed. Techniques
//! never fail; an emptied candidate set is picked up by the next context
//! build as a contradiction.

use std::fmt;

use crate::solver::SudokuContext;

pub(crate) mod coloring;
pub(crate) mod fish;
pub(crate) mod intersections;
pub(crate) mod naive;
pub(crate) mod rectangles;
pub(crate) mod singles;
pub(crate) mod subsets;
pub(crate) mod y_wing;

/// The deduction techniques, cheapest and most certain first.
///
/// The solve loop applies them in the order of [`Technique::ALL`] and stops
/// at the first one that makes progress.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Technique {
    NaiveElimination,
    NakedSingle,
    HiddenSingle,
    NakedPair,
    NakedTriple,
    HiddenPair,
    HiddenTriple,
    NakedQuad,
    HiddenQuad,
    PointingPair,
    BoxLineReduction,
    XWing,
    YWing,
    SimpleColoring,
    UniqueRectangle,
}

impl Technique {
    /// All techniques in priority order.
    pub const ALL: &'static [Technique] = &[
        Technique::NaiveElimination,
        Technique::NakedSingle,
        Technique::HiddenSingle,
        Technique::NakedPair,
        Technique::NakedTriple,
        Technique::HiddenPair,
        Technique::HiddenTriple,
        Technique::NakedQuad,
        Technique::HiddenQuad,
        Technique::PointingPair,
        Technique::BoxLineReduction,
        Technique::XWing,
        Technique::YWing,
        Technique::SimpleColoring,
        Technique::UniqueRectangle,
    ];

    /// Human-readable name, for ledgers and logs.
    pub fn name(self) -> &'static str {
        use self::Technique::*;
        match self {
            NaiveElimination => "naive elimination",
            NakedSingle => "naked single",
            HiddenSingle => "hidden single",
            NakedPair => "naked pair",
            NakedTriple => "naked triple",
            HiddenPair => "hidden pair",
            HiddenTriple => "hidden triple",
            NakedQuad => "naked quad",
            HiddenQuad => "hidden quad",
            PointingPair => "pointing pair",
            BoxLineReduction => "box/line reduction",
            XWing => "x-wing",
            YWing => "y-wing",
            SimpleColoring => "simple coloring",
            UniqueRectangle => "unique rectangle",
        }
    }

    /// Tags the round result with this technique's identity and runs it.
    /// Returns whether the board changed.
    pub(crate) fn apply(self, ctx: &mut SudokuContext<'_>) -> bool {
        use self::Technique::*;

        ctx.result.set_technique(self);
        match self {
            NaiveElimination => naive::naive_elimination(ctx),
            NakedSingle => singles::naked_single(ctx),
            HiddenSingle => singles::hidden_single(ctx),
            NakedPair => subsets::naked_subset(ctx, 2),
            NakedTriple => subsets::naked_subset(ctx, 3),
            HiddenPair => subsets::hidden_subset(ctx, 2),
            HiddenTriple => subsets::hidden_subset(ctx, 3),
            NakedQuad => subsets::naked_subset(ctx, 4),
            HiddenQuad => subsets::hidden_subset(ctx, 4),
            PointingPair => intersections::pointing_pair(ctx),
            BoxLineReduction => intersections::box_line_reduction(ctx),
            XWing => fish::x_wing(ctx),
            YWing => y_wing::y_wing(ctx),
            SimpleColoring => coloring::simple_coloring(ctx),
            UniqueRectangle => rectangles::unique_rectangle(ctx),
        }
    }
}

impl fmt::Display for Technique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
