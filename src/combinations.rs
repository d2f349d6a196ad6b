//! Lazy enumeration of the k-element subsets of a bitset.
//!
//! The subset techniques need every pair, triple or quad out of a filtered
//! pool of cells or digits. [`combinations`] is a pure function from
//! `(set, k)` to a finite, non-restartable sequence of k-element subsets,
//! yielded in lexicographic order of the element indices: no duplicates, no
//! revisits.

use crate::bitset::{Iter as SetIter, Set, SetElement};

/// See [`combinations`].
pub(crate) struct Combinations<T: SetElement> {
    elements: Vec<T>,
    // positions into `elements` for the next subset to yield
    indices: Vec<usize>,
    done: bool,
}

/// All `k`-element subsets of `set`, smallest indices first.
///
/// Yields nothing for `k == 0` or `k > set.len()`.
pub(crate) fn combinations<T: SetElement>(set: Set<T>, k: u8) -> Combinations<T>
where
    Set<T>: PartialEq + Copy,
    SetIter<T>: Iterator<Item = T>,
{
    let elements: Vec<T> = set.into_iter().collect();
    let k = k as usize;
    let done = k == 0 || k > elements.len();
    Combinations {
        indices: (0..k).collect(),
        elements,
        done,
    }
}

impl<T: SetElement + Copy> Iterator for Combinations<T>
where
    Set<T>: PartialEq + Copy,
{
    type Item = Set<T>;

    fn next(&mut self) -> Option<Set<T>> {
        if self.done {
            return None;
        }

        let mut subset = Set::NONE;
        for &idx in &self.indices {
            subset |= self.elements[idx].as_set();
        }

        // lexicographic advance: bump the rightmost index that has room,
        // then reset everything to its right
        let n = self.elements.len();
        let k = self.indices.len();
        let mut pos = k;
        loop {
            if pos == 0 {
                self.done = true;
                break;
            }
            pos -= 1;
            if self.indices[pos] != pos + n - k {
                self.indices[pos] += 1;
                for later in pos + 1..k {
                    self.indices[later] = self.indices[later - 1] + 1;
                }
                break;
            }
        }

        Some(subset)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::board::Digit;

    fn digit_set(digits: &[u8]) -> Set<Digit> {
        digits
            .iter()
            .fold(Set::NONE, |set, &d| set | Digit::new(d).as_set())
    }

    #[test]
    fn pairs_of_four_elements() {
        let pool = digit_set(&[1, 2, 3, 4]);
        let pairs: Vec<_> = combinations(pool, 2).collect();
        let expected: Vec<_> = [
            [1, 2], [1, 3], [1, 4], [2, 3], [2, 4], [3, 4],
        ]
        .iter()
        .map(|pair| digit_set(pair))
        .collect();
        assert_eq!(pairs, expected);
    }

    #[test]
    fn subset_count_is_binomial() {
        let pool = digit_set(&[1, 3, 4, 6, 8, 9]);
        assert_eq!(combinations(pool, 2).count(), 15);
        assert_eq!(combinations(pool, 3).count(), 20);
        assert_eq!(combinations(pool, 4).count(), 15);
    }

    #[test]
    fn full_and_oversized_subsets() {
        let pool = digit_set(&[2, 5, 7]);
        let all: Vec<_> = combinations(pool, 3).collect();
        assert_eq!(all, vec![pool]);
        assert_eq!(combinations(pool, 4).count(), 0);
        assert_eq!(combinations(pool, 0).count(), 0);
    }

    #[test]
    fn no_duplicates() {
        let pool = digit_set(&[1, 2, 3, 4, 5, 6, 7]);
        let mut seen: Vec<Set<Digit>> = combinations(pool, 3).collect();
        let n = seen.len();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), n);
        assert_eq!(n, 35);
    }
}
