// Copyright 2024 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph coverage through the `cmap` table.

use read_fonts::{
    FontData, FontRead, FontRef, TableProvider, TopLevelTable,
    tables::cmap::{Cmap, CmapSubtable},
    types::GlyphId,
};

/// Location of the preferred `cmap` subtable within some font data.
///
/// This is computed once when a font is loaded so that later coverage
/// queries only need to reparse the subtable header.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct CharmapIndex {
    subtable_offset: u32,
    is_symbol: bool,
    is_mac_roman: bool,
}

impl CharmapIndex {
    /// Finds the best Unicode subtable of the font's `cmap`.
    ///
    /// Returns `None` when the font has no `cmap` or no subtable that can be
    /// used for Unicode lookups.
    pub(crate) fn new(font: &FontRef<'_>) -> Option<Self> {
        let cmap = font.cmap().ok()?;
        let (_, record, _) = cmap.best_subtable()?;
        let table_offset = font
            .table_directory()
            .table_records()
            .iter()
            .find(|record| record.tag() == Cmap::TAG)?
            .offset();
        Some(Self {
            subtable_offset: table_offset.checked_add(record.subtable_offset().to_u32())?,
            is_symbol: record.is_symbol(),
            is_mac_roman: record.is_mac_roman(),
        })
    }

    /// Creates a character map over `font_data`, which must be the same data
    /// this index was computed from.
    pub fn charmap<'a>(&self, font_data: &'a [u8]) -> Option<Charmap<'a>> {
        let data = font_data.get(self.subtable_offset as usize..)?;
        Some(Charmap {
            subtable: CmapSubtable::read(FontData::new(data)).ok()?,
            is_symbol: self.is_symbol,
            is_mac_roman: self.is_mac_roman,
        })
    }
}

/// Mapping from code points to nominal glyph identifiers.
#[derive(Clone)]
pub struct Charmap<'a> {
    subtable: CmapSubtable<'a>,
    is_symbol: bool,
    is_mac_roman: bool,
}

impl core::fmt::Debug for Charmap<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Charmap")
            .field("is_symbol", &self.is_symbol)
            .field("is_mac_roman", &self.is_mac_roman)
            .finish_non_exhaustive()
    }
}

impl Charmap<'_> {
    /// Returns the glyph identifier for the given code point.
    ///
    /// `.notdef` (glyph 0) is reported as `None`.
    pub fn map(&self, code_point: impl Into<u32>) -> Option<u32> {
        let c = code_point.into();
        if let Some(glyph_id) = self.lookup(c) {
            return Some(glyph_id);
        }
        // Symbol fonts place their glyphs in the U+F000..=U+F0FF private use
        // block; the low byte range is an alias for it.
        if self.is_symbol && c <= 0xFF {
            return self.lookup(0xF000 + c);
        }
        None
    }

    /// Returns `true` if the code point maps to a glyph other than `.notdef`.
    #[inline]
    pub fn contains(&self, code_point: impl Into<u32>) -> bool {
        self.map(code_point).is_some()
    }

    fn lookup(&self, c: u32) -> Option<u32> {
        let c = if self.is_mac_roman && c > 0x7F {
            unicode_to_mac_roman(c)?
        } else {
            c
        };
        let glyph_id = match &self.subtable {
            CmapSubtable::Format0(table) => table.map_codepoint(c),
            CmapSubtable::Format4(table) => table.map_codepoint(c),
            CmapSubtable::Format6(table) => table.map_codepoint(c),
            CmapSubtable::Format10(table) => c
                .checked_sub(table.start_char_code())
                .and_then(|index| table.glyph_id_array().get(index as usize))
                .map(|glyph_id| GlyphId::from(glyph_id.get())),
            CmapSubtable::Format12(table) => table.map_codepoint(c),
            CmapSubtable::Format13(table) => table.map_codepoint(c),
            _ => None,
        }?;
        Some(glyph_id.to_u32()).filter(|&id| id != 0)
    }
}

/// Code points of the Mac Roman encoding for bytes `0x80..=0xFF`.
#[rustfmt::skip]
static MAC_ROMAN_HIGH: [u16; 128] = [
    0x00C4, 0x00C5, 0x00C7, 0x00C9, 0x00D1, 0x00D6, 0x00DC, 0x00E1,
    0x00E0, 0x00E2, 0x00E4, 0x00E3, 0x00E5, 0x00E7, 0x00E9, 0x00E8,
    0x00EA, 0x00EB, 0x00ED, 0x00EC, 0x00EE, 0x00EF, 0x00F1, 0x00F3,
    0x00F2, 0x00F4, 0x00F6, 0x00F5, 0x00FA, 0x00F9, 0x00FB, 0x00FC,
    0x2020, 0x00B0, 0x00A2, 0x00A3, 0x00A7, 0x2022, 0x00B6, 0x00DF,
    0x00AE, 0x00A9, 0x2122, 0x00B4, 0x00A8, 0x2260, 0x00C6, 0x00D8,
    0x221E, 0x00B1, 0x2264, 0x2265, 0x00A5, 0x00B5, 0x2202, 0x2211,
    0x220F, 0x03C0, 0x222B, 0x00AA, 0x00BA, 0x03A9, 0x00E6, 0x00F8,
    0x00BF, 0x00A1, 0x00AC, 0x221A, 0x0192, 0x2248, 0x2206, 0x00AB,
    0x00BB, 0x2026, 0x00A0, 0x00C0, 0x00C3, 0x00D5, 0x0152, 0x0153,
    0x2013, 0x2014, 0x201C, 0x201D, 0x2018, 0x2019, 0x00F7, 0x25CA,
    0x00FF, 0x0178, 0x2044, 0x20AC, 0x2039, 0x203A, 0xFB01, 0xFB02,
    0x2021, 0x00B7, 0x201A, 0x201E, 0x2030, 0x00C2, 0x00CA, 0x00C1,
    0x00CB, 0x00C8, 0x00CD, 0x00CE, 0x00CF, 0x00CC, 0x00D3, 0x00D4,
    0xF8FF, 0x00D2, 0x00DA, 0x00DB, 0x00D9, 0x0131, 0x02C6, 0x02DC,
    0x00AF, 0x02D8, 0x02D9, 0x02DA, 0x00B8, 0x02DD, 0x02DB, 0x02C7,
];

/// Returns the Mac Roman byte for a non-ASCII code point, if it has one.
fn unicode_to_mac_roman(c: u32) -> Option<u32> {
    let c = u16::try_from(c).ok()?;
    let index = MAC_ROMAN_HIGH.iter().position(|&m| m == c)?;
    u32::try_from(0x80 + index).ok()
}
