use std::num::NonZeroU8;

// defined apart from the position types because it is offset by one
/// A digit that can be entered into a cell, `1..=9`.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
pub struct Digit(NonZeroU8);

impl Digit {
    /// Constructs a new `Digit`.
    ///
    /// # Panic
    /// Panics, if the digit is not in the range of `1..=9`.
    pub fn new(digit: u8) -> Self {
        Self::new_checked(digit).expect("digit outside 1..=9")
    }

    /// Constructs a new `Digit`. Returns `None`, if the digit is not in the range of `1..=9`.
    pub fn new_checked(digit: u8) -> Option<Self> {
        if digit > 9 {
            return None;
        }
        NonZeroU8::new(digit).map(Digit)
    }

    /// Constructs a new `Digit` from a 0-based index, i.e. `digit - 1`.
    pub(crate) fn from_index(idx: u8) -> Self {
        Self::new(idx + 1)
    }

    /// Returns an iterator over all digits, `1` through `9`.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..10).map(Digit::new)
    }

    /// Returns the digit contained within.
    pub fn get(self) -> u8 {
        self.0.get()
    }

    /// Returns the digit as a 0-based `usize` index.
    pub fn as_index(self) -> usize {
        self.get() as usize - 1
    }
}
