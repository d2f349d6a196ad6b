//! Board-geometry constants shared across the crate.

/// The number of cells on a board (9 x 9).
pub(crate) const N_CELLS: usize = 81;

/// The number of houses on a board (9 rows + 9 columns + 9 blocks).
pub(crate) const N_HOUSES: usize = 27;

/// Offset of the column houses within the unified [`House`] numbering:
/// columns occupy indices `9..18`.
///
/// [`House`]: crate::board::House
pub(crate) const COL_OFFSET: u8 = 9;

/// Offset of the block houses within the unified [`House`] numbering:
/// blocks occupy indices `18..27`.
///
/// [`House`]: crate::board::House
pub(crate) const BLOCK_OFFSET: u8 = 18;

/// The default cap on the number of deduction rounds a [`Solver`] runs.
///
/// [`Solver`]: crate::solver::Solver
pub(crate) const DEFAULT_ROUND_LIMIT: u32 = 1000;
