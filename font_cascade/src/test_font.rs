// Copyright 2024 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory OpenType fonts for tests.

use alloc::vec::Vec;

/// Builds a font file containing the given `(tag, data)` tables.
pub(crate) fn table_directory(tables: &[([u8; 4], Vec<u8>)]) -> Vec<u8> {
    let num_tables = u16::try_from(tables.len()).expect("too many tables");
    let mut data = Vec::new();
    data.extend_from_slice(&0x0001_0000_u32.to_be_bytes());
    data.extend_from_slice(&num_tables.to_be_bytes());
    // searchRange, entrySelector and rangeShift are not consulted.
    data.extend_from_slice(&[0; 6]);
    let mut offset = 12 + 16 * tables.len();
    for (tag, table) in tables {
        data.extend_from_slice(tag);
        data.extend_from_slice(&0_u32.to_be_bytes());
        data.extend_from_slice(&u32::try_from(offset).unwrap().to_be_bytes());
        data.extend_from_slice(&u32::try_from(table.len()).unwrap().to_be_bytes());
        offset += table.len();
    }
    for (_, table) in tables {
        data.extend_from_slice(table);
    }
    data
}

/// Builds a font whose only table is a `cmap` with one encoding record
/// pointing at `subtable`.
pub(crate) fn cmap_font(platform_id: u16, encoding_id: u16, subtable: &[u8]) -> Vec<u8> {
    let mut cmap = Vec::new();
    // Header: version 0, one encoding record.
    cmap.extend_from_slice(&0_u16.to_be_bytes());
    cmap.extend_from_slice(&1_u16.to_be_bytes());
    cmap.extend_from_slice(&platform_id.to_be_bytes());
    cmap.extend_from_slice(&encoding_id.to_be_bytes());
    cmap.extend_from_slice(&12_u32.to_be_bytes());
    cmap.extend_from_slice(subtable);
    table_directory(&[(*b"cmap", cmap)])
}

/// Builds a font with a Windows UCS-4 (3, 10) format 12 subtable made of
/// `(first, last, first_glyph)` groups.
pub(crate) fn cmap12_font(groups: &[(u32, u32, u32)]) -> Vec<u8> {
    let num_groups = u32::try_from(groups.len()).unwrap();
    let mut subtable = Vec::new();
    subtable.extend_from_slice(&12_u16.to_be_bytes());
    subtable.extend_from_slice(&0_u16.to_be_bytes());
    subtable.extend_from_slice(&(16 + 12 * num_groups).to_be_bytes());
    subtable.extend_from_slice(&0_u32.to_be_bytes());
    subtable.extend_from_slice(&num_groups.to_be_bytes());
    for &(first, last, glyph) in groups {
        subtable.extend_from_slice(&first.to_be_bytes());
        subtable.extend_from_slice(&last.to_be_bytes());
        subtable.extend_from_slice(&glyph.to_be_bytes());
    }
    cmap_font(3, 10, &subtable)
}

/// Builds a font with a Windows symbol (3, 0) format 4 subtable mapping
/// `first..=last` to glyphs counting up from 1.
pub(crate) fn symbol_font(first: u16, last: u16) -> Vec<u8> {
    // One real segment plus the mandatory 0xFFFF terminator.
    let segments: [(u16, u16, u16); 2] = [
        (first, last, 1_u16.wrapping_sub(first)),
        (0xFFFF, 0xFFFF, 1),
    ];
    let mut subtable = Vec::new();
    subtable.extend_from_slice(&4_u16.to_be_bytes());
    subtable.extend_from_slice(&(16 + 8 * 2_u16).to_be_bytes());
    subtable.extend_from_slice(&0_u16.to_be_bytes());
    subtable.extend_from_slice(&(2 * 2_u16).to_be_bytes());
    // searchRange, entrySelector and rangeShift are not consulted.
    subtable.extend_from_slice(&[0; 6]);
    for &(_, end, _) in &segments {
        subtable.extend_from_slice(&end.to_be_bytes());
    }
    subtable.extend_from_slice(&0_u16.to_be_bytes());
    for &(start, _, _) in &segments {
        subtable.extend_from_slice(&start.to_be_bytes());
    }
    for &(_, _, delta) in &segments {
        subtable.extend_from_slice(&delta.to_be_bytes());
    }
    for _ in &segments {
        subtable.extend_from_slice(&0_u16.to_be_bytes());
    }
    cmap_font(3, 0, &subtable)
}

/// Builds a font with a Macintosh Roman (1, 0) format 0 subtable mapping
/// each `(byte, glyph)` pair.
pub(crate) fn mac_roman_font(glyphs: &[(u8, u8)]) -> Vec<u8> {
    let mut glyph_ids = [0_u8; 256];
    for &(byte, glyph) in glyphs {
        glyph_ids[usize::from(byte)] = glyph;
    }
    let mut subtable = Vec::new();
    subtable.extend_from_slice(&0_u16.to_be_bytes());
    subtable.extend_from_slice(&262_u16.to_be_bytes());
    subtable.extend_from_slice(&0_u16.to_be_bytes());
    subtable.extend_from_slice(&glyph_ids);
    cmap_font(1, 0, &subtable)
}
