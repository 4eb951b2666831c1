// Copyright 2024 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Prioritized font fallback with `unicode-range` restrictions.
//!
//! A [`FontCascadeList`] is an ordered chain of fonts consulted in priority
//! order until one of them can render a requested code point. Each entry may
//! be restricted to a set of [`UnicodeRange`]s, following the CSS
//! [`unicode-range`] descriptor: a restricted entry only applies to the
//! intersection of its declared ranges and the font's own character map.
//!
//! Fonts are anything implementing [`Font`] and are shared through [`Arc`],
//! so the same font can sit in several cascades at once. Two entries refer to
//! the same font when their handles point at the same allocation; font data
//! is never compared.
//!
//! [`FontFace`] is a ready-made [`Font`] backed by OpenType data.
//!
//! ```
//! use std::sync::Arc;
//! use font_cascade::{Font, FontCascadeList, UnicodeRange};
//!
//! struct Ascii;
//!
//! impl Font for Ascii {
//!     fn contains_glyph(&self, code_point: u32) -> bool {
//!         code_point < 0x80
//!     }
//! }
//!
//! let capitals: Arc<dyn Font + Send + Sync> = Arc::new(Ascii);
//! let fallback: Arc<dyn Font + Send + Sync> = Arc::new(Ascii);
//!
//! let mut cascade = FontCascadeList::new();
//! cascade.add_with_unicode_ranges(capitals.clone(), [UnicodeRange::from('A'..='Z')]);
//! cascade.add(fallback.clone());
//!
//! assert!(Arc::ptr_eq(cascade.font_for_code_point('Q').unwrap(), &capitals));
//! assert!(Arc::ptr_eq(cascade.font_for_code_point('q').unwrap(), &fallback));
//! assert!(cascade.font_for_code_point('é').is_none());
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): Use the standard library.
//! - `libm`: Forwards to `read-fonts/libm` for `no_std` builds.
//!
//! [`unicode-range`]: https://drafts.csswg.org/css-fonts/#descdef-font-face-unicode-range
//! [`Arc`]: alloc::sync::Arc

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("font_cascade requires either the `std` or `libm` feature to be enabled");

extern crate alloc;

mod cascade;
mod charmap;
mod error;
mod font;
mod unicode_range;

#[cfg(test)]
mod test_font;

pub use linebender_resource_handle::Blob;

pub use cascade::{CascadeEntry, FontCascadeList};
pub use charmap::{Charmap, CharmapIndex};
pub use error::{Error, ErrorKind};
pub use font::{Font, FontFace, SharedFont};
pub use unicode_range::UnicodeRange;
