// Copyright 2024 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Model for a font.

use crate::{Blob, Charmap, CharmapIndex, Error};
use alloc::boxed::Box;
use alloc::sync::Arc;
use read_fonts::FontRef;

/// Glyph coverage of a font resource.
///
/// This is the only capability a [`FontCascadeList`] needs from its fonts.
/// Fonts are held behind [`Arc`] and compared by address, so implementors
/// need not be comparable themselves.
///
/// [`FontCascadeList`]: crate::FontCascadeList
pub trait Font {
    /// Returns `true` if the font has a renderable glyph for `code_point`.
    fn contains_glyph(&self, code_point: u32) -> bool;
}

/// A font shared between cascades and threads.
pub type SharedFont = Arc<dyn Font + Send + Sync>;

impl<T: Font + ?Sized> Font for &T {
    fn contains_glyph(&self, code_point: u32) -> bool {
        (**self).contains_glyph(code_point)
    }
}

impl<T: Font + ?Sized> Font for Box<T> {
    fn contains_glyph(&self, code_point: u32) -> bool {
        (**self).contains_glyph(code_point)
    }
}

impl<T: Font + ?Sized> Font for Arc<T> {
    fn contains_glyph(&self, code_point: u32) -> bool {
        (**self).contains_glyph(code_point)
    }
}

/// A single face from OpenType font data.
///
/// Coverage comes from the preferred Unicode subtable of the font's `cmap`.
#[derive(Clone, Debug)]
pub struct FontFace {
    blob: Blob<u8>,
    index: u32,
    charmap_index: CharmapIndex,
}

impl FontFace {
    /// Creates a face for the font at `index` in `blob`.
    ///
    /// `index` selects a face inside a font collection and must be `0` for
    /// single font files.
    pub fn new(blob: Blob<u8>, index: u32) -> Result<Self, Error> {
        let font = FontRef::from_index(blob.data(), index).map_err(|err| {
            log::debug!("rejecting font {} at index {index}: {err}", blob.id());
            Error::invalid_font(index)
        })?;
        let Some(charmap_index) = CharmapIndex::new(&font) else {
            log::debug!("rejecting font {} at index {index}: no Unicode cmap", blob.id());
            return Err(Error::missing_charmap(index));
        };
        Ok(Self {
            blob,
            index,
            charmap_index,
        })
    }

    /// Returns the data containing this font.
    pub fn blob(&self) -> &Blob<u8> {
        &self.blob
    }

    /// Returns the index of the font in a collection.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Returns the index used for constructing a [`Charmap`] for this font.
    pub fn charmap_index(&self) -> CharmapIndex {
        self.charmap_index
    }

    /// Returns the character map of this font.
    pub fn charmap(&self) -> Option<Charmap<'_>> {
        self.charmap_index.charmap(self.blob.data())
    }

    /// Returns the nominal glyph for `code_point`, if the font has one.
    pub fn glyph_id(&self, code_point: impl Into<u32>) -> Option<u32> {
        self.charmap()?.map(code_point)
    }
}

impl Font for FontFace {
    fn contains_glyph(&self, code_point: u32) -> bool {
        self.glyph_id(code_point).is_some()
    }
}
