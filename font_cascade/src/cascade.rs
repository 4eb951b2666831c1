// Copyright 2024 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Prioritized font fallback.

use crate::{Font, UnicodeRange};
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;
use core::ops::ControlFlow;
use smallvec::SmallVec;

type RangeVec = SmallVec<[UnicodeRange; 1]>;

/// A font in a [`FontCascadeList`] together with its `unicode-range`
/// restriction.
pub struct CascadeEntry<F: ?Sized> {
    font: Arc<F>,
    unicode_ranges: Option<RangeVec>,
}

impl<F: ?Sized> CascadeEntry<F> {
    /// Returns the font of this entry.
    pub fn font(&self) -> &Arc<F> {
        &self.font
    }

    /// Returns the ranges this entry is restricted to.
    ///
    /// `None` means the entry is unrestricted. `Some(&[])` is an entry that
    /// is restricted to nothing and never matches.
    pub fn unicode_ranges(&self) -> Option<&[UnicodeRange]> {
        self.unicode_ranges.as_deref()
    }
}

impl<F: Font + ?Sized> CascadeEntry<F> {
    /// Returns `true` if this entry may be used to render `code_point`.
    ///
    /// The font must have a glyph for the code point and, if the entry is
    /// restricted, one of its ranges must contain it.
    pub fn matches(&self, code_point: u32) -> bool {
        if !self.font.contains_glyph(code_point) {
            return false;
        }
        match &self.unicode_ranges {
            None => true,
            Some(ranges) => ranges.iter().any(|range| range.contains(code_point)),
        }
    }
}

impl<F: ?Sized> Clone for CascadeEntry<F> {
    fn clone(&self) -> Self {
        Self {
            font: self.font.clone(),
            unicode_ranges: self.unicode_ranges.clone(),
        }
    }
}

impl<F: ?Sized> fmt::Debug for CascadeEntry<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CascadeEntry")
            .field("font", &Arc::as_ptr(&self.font).cast::<()>())
            .field("unicode_ranges", &self.unicode_ranges())
            .finish()
    }
}

/// An ordered chain of fallback fonts.
///
/// Entries are consulted in insertion order: the first entry added has the
/// highest priority. The list is append-only and never reorders its entries.
///
/// Entries may be restricted to a set of [`UnicodeRange`]s. Following the
/// CSS [`unicode-range`] descriptor, a restricted entry is only used for code
/// points that are both covered by its font and contained in one of its
/// ranges.
///
/// Fonts are compared by identity: two lists are equal when they hold the
/// same [`Arc`] allocations in the same order. Range restrictions do not
/// take part in equality.
///
/// The list carries no synchronization of its own. With `F: Send + Sync`
/// it can be read from several threads at once behind the usual shared
/// reference rules.
///
/// [`unicode-range`]: https://drafts.csswg.org/css-fonts/#descdef-font-face-unicode-range
pub struct FontCascadeList<F: ?Sized = dyn Font + Send + Sync> {
    entries: Vec<CascadeEntry<F>>,
}

impl<F: ?Sized> FontCascadeList<F> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends an unrestricted entry for `font`.
    ///
    /// The entry applies to every code point the font has a glyph for.
    pub fn add(&mut self, font: Arc<F>) {
        self.entries.push(CascadeEntry {
            font,
            unicode_ranges: None,
        });
    }

    /// Appends an entry for `font` restricted to `unicode_ranges`.
    ///
    /// An empty set of ranges is kept as is; the resulting entry never
    /// matches any code point.
    pub fn add_with_unicode_ranges(
        &mut self,
        font: Arc<F>,
        unicode_ranges: impl IntoIterator<Item = UnicodeRange>,
    ) {
        self.entries.push(CascadeEntry {
            font,
            unicode_ranges: Some(unicode_ranges.into_iter().collect()),
        });
    }

    /// Appends all entries of `other` after the entries of `self`, keeping
    /// their relative order.
    ///
    /// Fonts are shared with `other`, and their ranges are copied.
    pub fn extend(&mut self, other: &Self) {
        self.entries.extend(other.entries.iter().cloned());
    }

    /// Calls `visit` with each font in priority order, ignoring range
    /// restrictions, until it returns [`ControlFlow::Break`].
    ///
    /// # Example
    ///
    /// ```
    /// # use std::{ops::ControlFlow, sync::Arc};
    /// # use font_cascade::{Font, FontCascadeList};
    /// # struct Blank;
    /// # impl Font for Blank {
    /// #     fn contains_glyph(&self, _: u32) -> bool { false }
    /// # }
    /// let cascade: FontCascadeList<Blank> =
    ///     [Arc::new(Blank), Arc::new(Blank), Arc::new(Blank)].into_iter().collect();
    /// let mut visited = 0;
    /// cascade.for_each_font(|_| {
    ///     visited += 1;
    ///     if visited == 2 { ControlFlow::Break(()) } else { ControlFlow::Continue(()) }
    /// });
    /// assert_eq!(visited, 2);
    /// ```
    pub fn for_each_font(&self, mut visit: impl FnMut(&Arc<F>) -> ControlFlow<()>) {
        for entry in &self.entries {
            if visit(&entry.font).is_break() {
                break;
            }
        }
    }

    /// Returns `true` if both lists hold the same fonts in the same order.
    ///
    /// Fonts are compared by identity. Range restrictions are ignored.
    /// This is the same comparison as `==`.
    pub fn equals(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self
                .entries
                .iter()
                .zip(&other.entries)
                .all(|(a, b)| Arc::ptr_eq(&a.font, &b.font))
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the list has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the highest priority font, regardless of its ranges.
    pub fn first(&self) -> Option<&Arc<F>> {
        self.entries.first().map(CascadeEntry::font)
    }

    /// Returns an iterator over the entries in priority order.
    pub fn entries(&self) -> core::slice::Iter<'_, CascadeEntry<F>> {
        self.entries.iter()
    }

    /// Returns an iterator over the fonts in priority order, ignoring range
    /// restrictions.
    pub fn fonts(&self) -> impl DoubleEndedIterator<Item = &Arc<F>> + ExactSizeIterator + '_ {
        self.entries.iter().map(CascadeEntry::font)
    }
}

impl<F: Font + ?Sized> FontCascadeList<F> {
    /// Returns the highest priority font that may render `code_point`.
    ///
    /// An entry is skipped when its font has no glyph for the code point.
    /// Otherwise an unrestricted entry matches, and a restricted entry
    /// matches when one of its ranges contains the code point.
    pub fn font_for_code_point(&self, code_point: impl Into<u32>) -> Option<&Arc<F>> {
        let code_point = code_point.into();
        let found = self
            .entries
            .iter()
            .find(|entry| entry.matches(code_point))
            .map(CascadeEntry::font);
        if found.is_none() {
            log::trace!(
                "no font among {} cascade entries for U+{code_point:04X}",
                self.entries.len()
            );
        }
        found
    }
}

impl<F: ?Sized> Default for FontCascadeList<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: ?Sized> Clone for FontCascadeList<F> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<F: ?Sized> PartialEq for FontCascadeList<F> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<F: ?Sized> Eq for FontCascadeList<F> {}

impl<F: ?Sized> fmt::Debug for FontCascadeList<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.entries).finish()
    }
}

/// Collects unrestricted entries in iteration order.
impl<F: ?Sized> FromIterator<Arc<F>> for FontCascadeList<F> {
    fn from_iter<I: IntoIterator<Item = Arc<F>>>(iter: I) -> Self {
        let mut list = Self::new();
        for font in iter {
            list.add(font);
        }
        list
    }
}

impl<'a, F: ?Sized> IntoIterator for &'a FontCascadeList<F> {
    type Item = &'a CascadeEntry<F>;
    type IntoIter = core::slice::Iter<'a, CascadeEntry<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
