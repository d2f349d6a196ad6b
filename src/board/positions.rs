//! Positions on the board: cells and the units (houses) that contain them.
//!
//! All index types are thin newtypes over `u8`. Their unit membership is
//! expressed as [`Set<Cell>`] bitboards built from octal shift constants:
//! every third octal digit starts a new row, which makes the masks readable.

use crate::bitset::Set;
use crate::consts::{BLOCK_OFFSET, COL_OFFSET};

macro_rules! define_positions {
    ($( $name:ident : $limit:expr, $doc:expr );* $(;)*) => {
        $(
            #[doc = $doc]
            #[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
            pub struct $name(u8);

            impl $name {
                /// Constructs a new instance.
                ///
                /// Out-of-range indices are rejected in debug builds.
                pub fn new(num: u8) -> Self {
                    debug_assert!(num < $limit);
                    $name(num)
                }

                /// Constructs a new instance, or `None` for an out-of-range index.
                pub fn new_checked(num: u8) -> Option<Self> {
                    if num < $limit {
                        Some($name(num))
                    } else {
                        None
                    }
                }

                /// Returns the raw index.
                pub fn get(self) -> u8 {
                    self.0
                }

                /// Returns the raw index as `usize`.
                pub fn as_index(self) -> usize {
                    self.0 as _
                }

                /// Returns an iterator over all instances in ascending order.
                pub fn all() -> impl Iterator<Item = Self> {
                    (0..$limit).map(Self::new)
                }
            }
        )*
    };
}

define_positions!(
    Cell: 81, "One of the 81 cells of the board, row-major.";
    Row: 9, "One of the 9 rows, top to bottom.";
    Col: 9, "One of the 9 columns, left to right.";
    Block: 9, "One of the 9 3x3 blocks, row-major.";
    House: 27, "Any unit: rows are `0..9`, columns `9..18`, blocks `18..27`.";
);

/// A [`House`] broken up into its concrete kind.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[allow(missing_docs)]
pub enum HouseType {
    Row(Row),
    Col(Col),
    Block(Block),
}

impl House {
    /// Splits the house index into row, column or block.
    pub fn categorize(self) -> HouseType {
        match self.0 {
            0..=8 => HouseType::Row(Row::new(self.0)),
            9..=17 => HouseType::Col(Col::new(self.0 - COL_OFFSET)),
            _ => HouseType::Block(Block::new(self.0 - BLOCK_OFFSET)),
        }
    }
}

macro_rules! into_cells {
    ( $( $name:ident => |$arg:ident| $code:block );* $(;)* ) => {
        $(
            impl $name {
                /// The set of cells this position covers.
                pub fn cells(self) -> Set<Cell> {
                    let $arg = self;
                    Set($code)
                }
            }
        )*
    };
}

// the closures here aren't actually closures, they just introduce
// the variables to be used in the code blocks for macro hygiene reasons
into_cells!(
    Row  => |row| { 0o777 << (9 * row.0) };
    Col  => |col| { 0o_001_001_001___001_001_001___001_001_001 << col.0 };
    Block => |block| {
        let band = block.0 / 3;
        let stack = block.0 % 3;
        0o007_007_007 << (band * 27 + stack * 3)
    };
    House => |house| {
        use self::HouseType::*;
        match house.categorize() {
            Row(row) => row.cells().0,
            Col(col) => col.cells().0,
            Block(block) => block.cells().0,
        }
    };
);

///////////////////////////////////////////////////////////////////////////////////////////////
//                                  Conversions
///////////////////////////////////////////////////////////////////////////////////////////////

macro_rules! impl_from {
    ( $( $from:ty, $to:ty, |$arg:ident| $code:block ),* $(,)* ) => {
        $(
            impl From<$from> for $to {
                fn from($arg: $from) -> $to {
                    let $arg = $arg.0;
                    <$to>::new($code)
                }
            }
        )*
    };
}

impl_from!(
    Row, House, |r| { r },
    Col, House, |c| { c + COL_OFFSET },
    Block, House, |b| { b + BLOCK_OFFSET },
    Cell, Row, |c| { c / 9 },
    Cell, Col, |c| { c % 9 },
    Cell, Block, |c| { (c / 27) * 3 + (c % 9) / 3 },
);

impl Cell {
    /// The row containing this cell.
    #[inline(always)]
    pub fn row(self) -> Row {
        Row::from(self)
    }

    /// The column containing this cell.
    #[inline(always)]
    pub fn col(self) -> Col {
        Col::from(self)
    }

    /// The block containing this cell.
    #[inline(always)]
    pub fn block(self) -> Block {
        Block::from(self)
    }

    /// The three houses containing this cell.
    pub fn houses(self) -> [House; 3] {
        [self.row().into(), self.col().into(), self.block().into()]
    }

    /// The 20 cells sharing a row, column or block with this cell,
    /// this cell excluded.
    pub fn peers(self) -> Set<Cell> {
        (self.row().cells() | self.col().cells() | self.block().cells()).without(self.as_set())
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////

/// Union of all units that contain every cell of `cells`, minus the cells
/// themselves. Empty when the cells share no unit.
///
/// This is the elimination zone of a naked subset: any cell that sees all
/// members of the subset.
pub(crate) fn common_units(cells: Set<Cell>) -> Set<Cell> {
    let mut iter = cells.into_iter();
    let first = match iter.next() {
        Some(cell) => cell,
        None => return Set::NONE,
    };

    let mut row = Some(first.row());
    let mut col = Some(first.col());
    let mut block = Some(first.block());
    for cell in iter {
        if row != Some(cell.row()) {
            row = None;
        }
        if col != Some(cell.col()) {
            col = None;
        }
        if block != Some(cell.block()) {
            block = None;
        }
    }

    let mut shared = Set::NONE;
    if let Some(row) = row {
        shared |= row.cells();
    }
    if let Some(col) = col {
        shared |= col.cells();
    }
    if let Some(block) = block {
        shared |= block.cells();
    }
    shared.without(cells)
}

/// Intersection of the peer sets of all cells in `cells`: everything that
/// sees every one of them.
pub(crate) fn common_peers(cells: Set<Cell>) -> Set<Cell> {
    if cells.is_empty() {
        return Set::NONE;
    }
    let mut seen = Set::ALL;
    for cell in cells {
        seen &= cell.peers();
    }
    seen
}
