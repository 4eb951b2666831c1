// Copyright 2024 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Unicode range restriction

use core::fmt;
use core::ops::RangeInclusive;

/// An inclusive range of code points, as declared by the CSS
/// [`unicode-range`] descriptor.
///
/// Bounds are not validated. A range whose `first` is greater than its
/// `last` is accepted and contains no code points.
///
/// # Example
///
/// ```
/// # use font_cascade::UnicodeRange;
/// let latin = UnicodeRange::new(0x0000, 0x00FF);
/// assert!(latin.contains('ÿ' as u32));
/// assert!(!latin.contains(0x0100));
/// assert_eq!(latin.to_string(), "U+0-FF");
/// ```
///
/// [`unicode-range`]: https://drafts.csswg.org/css-fonts/#unicode-range-desc
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnicodeRange {
    first: u32,
    last: u32,
}

impl UnicodeRange {
    /// Creates a range covering `first..=last`.
    pub const fn new(first: u32, last: u32) -> Self {
        Self { first, last }
    }

    /// Creates a range covering exactly one code point.
    pub const fn single(code_point: u32) -> Self {
        Self::new(code_point, code_point)
    }

    /// Returns the first code point of the range.
    pub const fn first(self) -> u32 {
        self.first
    }

    /// Returns the last code point of the range, inclusive.
    pub const fn last(self) -> u32 {
        self.last
    }

    /// Test inclusion of a [`char`] or `u32` value
    ///
    /// # Example
    ///
    /// ```
    /// # use font_cascade::UnicodeRange;
    /// let range = UnicodeRange::new(0x41, 0x5A);
    /// assert!(range.contains('A' as u32));
    /// assert!(range.contains('Z' as u32));
    /// assert!(!range.contains('a' as u32));
    /// ```
    #[inline]
    pub const fn contains(self, code_point: u32) -> bool {
        self.first <= code_point && code_point <= self.last
    }
}

impl From<RangeInclusive<u32>> for UnicodeRange {
    fn from(range: RangeInclusive<u32>) -> Self {
        Self::new(*range.start(), *range.end())
    }
}

impl From<RangeInclusive<char>> for UnicodeRange {
    fn from(range: RangeInclusive<char>) -> Self {
        Self::new(*range.start() as u32, *range.end() as u32)
    }
}

/// Formats the range in `unicode-range` notation, `U+41` or `U+41-5A`.
impl fmt::Display for UnicodeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U+{:X}", self.first)?;
        if self.last != self.first {
            write!(f, "-{:X}", self.last)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::UnicodeRange;
    use alloc::string::ToString;

    #[test]
    fn bounds_are_inclusive() {
        let range = UnicodeRange::from(0x0600..=0x06FF);
        assert!(range.contains(0x0600));
        assert!(range.contains(0x06FF));
        assert!(!range.contains(0x05FF));
        assert!(!range.contains(0x0700));
    }

    #[test]
    fn single_code_point() {
        let range = UnicodeRange::single(0x20AC);
        assert_eq!(range.first(), range.last());
        assert!(range.contains(0x20AC));
        assert!(!range.contains(0x20AD));
    }

    #[test]
    fn inverted_range_is_empty() {
        let range = UnicodeRange::new(0x5A, 0x41);
        for c in 0x30..0x70 {
            assert!(!range.contains(c), "U+{c:X} inside an inverted range");
        }
    }

    #[test]
    fn from_char_range() {
        assert_eq!(
            UnicodeRange::from('A'..='Z'),
            UnicodeRange::new(0x41, 0x5A)
        );
    }

    #[test]
    fn display_uses_css_notation() {
        assert_eq!(UnicodeRange::single(0x41).to_string(), "U+41");
        assert_eq!(UnicodeRange::new(0x41, 0x5A).to_string(), "U+41-5A");
        assert_eq!(UnicodeRange::new(0x1F600, 0x1F64F).to_string(), "U+1F600-1F64F");
    }
}
