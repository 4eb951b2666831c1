// Copyright 2024 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Error produced when font data cannot be used as a [`FontFace`].
///
/// Carries a non-exhaustive [`ErrorKind`] plus the collection index that was
/// requested.
///
/// [`FontFace`]: crate::FontFace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// The non-exhaustive category describing this error.
    kind: ErrorKind,

    /// The index of the font within its data.
    index: u32,
}

impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The index of the font within its data that was requested.
    pub fn index(&self) -> u32 {
        self.index
    }

    pub(crate) fn invalid_font(index: u32) -> Self {
        Self {
            kind: ErrorKind::InvalidFont,
            index,
        }
    }

    pub(crate) fn missing_charmap(index: u32) -> Self {
        Self {
            kind: ErrorKind::MissingCharmap,
            index,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            ErrorKind::InvalidFont => write!(
                f,
                "font data has no readable OpenType font at index {}",
                self.index
            ),
            ErrorKind::MissingCharmap => write!(
                f,
                "font at index {} has no usable Unicode character map",
                self.index
            ),
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The data is not an OpenType font, or the index is past the end of a
    /// font collection.
    InvalidFont,

    /// The font has no `cmap` subtable that maps Unicode code points.
    MissingCharmap,
}
