use roaring::RoaringBitmap;
use std::{
    fmt::{Debug, Formatter},
    ops::RangeInclusive,
};

/// The set of code points assigned in the Unicode character database.
#[derive(Clone, PartialEq, Default)]
pub struct CodePointSet(RoaringBitmap);
impl CodePointSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, ch: u32) {
        self.0.insert(ch);
    }

    /// Inserts every code point in `range`, returning the number of code points newly added.
    pub fn insert_range(&mut self, range: RangeInclusive<u32>) -> u64 {
        self.0.insert_range(range)
    }

    pub fn contains(&self, ch: u32) -> bool {
        self.0.contains(ch)
    }

    pub fn len(&self) -> u64 {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns how many members of the set fall within `start..=end`.
    pub fn count_in_range(&self, start: u32, end: u32) -> u64 {
        if start > end {
            return 0;
        }
        let below = if start == 0 { 0 } else { self.0.rank(start - 1) };
        self.0.rank(end) - below
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter()
    }
}
impl Debug for CodePointSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[set of {} code points]", self.0.len())
    }
}
impl FromIterator<u32> for CodePointSet {
    fn from_iter<T: IntoIterator<Item = u32>>(iter: T) -> Self {
        CodePointSet(iter.into_iter().collect())
    }
}
