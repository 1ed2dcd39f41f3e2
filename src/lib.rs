// Copyright 2014 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This crate prepares mixed-script UTF-16 text (Latin, Arabic, CJK, ...
//! interleaved in one logical string) for display pipelines that draw strictly
//! left to right and know nothing about bidirectional text.
//!
//! The logical sequence is carved into maximal runs of either the RTL class
//! (Arabic script and the space character, see [`run_class`]) or everything
//! else. Only the RTL runs are handed to a [Unicode Bidirectional
//! Algorithm][tr9] implementation, behind the [`BidiReorderer`] trait, and
//! their visual order is reversed back for the LTR pipeline. The other runs
//! are copied through untouched, and all runs are concatenated in their
//! original order.
//!
//! ## Example
//!
//! ```rust
//! use mixed_bidi::process;
//!
//! let logical: Vec<u16> = "Hello مرحبا ١٢٣".encode_utf16().collect();
//! let display = process(&logical)?;
//!
//! // The Arabic-Indic number is laid out right to left inside the Arabic run.
//! assert_eq!(String::from_utf16(&display).unwrap(), "Hello مرحبا ٣٢١");
//! # Ok::<(), mixed_bidi::Error>(())
//! ```
//!
//! [tr9]: http://www.unicode.org/reports/tr9/

#![forbid(unsafe_code)]

pub mod compose;
mod direction;
mod error;
pub mod reorder;
pub mod reorderer;
pub mod run_class;
pub mod segment;
pub mod utf16;
pub mod utf8;

pub use crate::direction::Direction;
pub use crate::error::{Error, Result};
pub use crate::reorderer::{BidiReorderer, ReorderFailure, Reordered, UnicodeBidiReorderer};
pub use crate::run_class::{classify, RunClass};
pub use crate::segment::Segment;
pub use crate::utf16::SurrogatePolicy;

/// A logical sequence together with its segments.
///
/// The `segments` partition `text`: in order, without gaps or overlaps.
#[derive(Debug, PartialEq)]
pub struct SegmentedText<'text> {
    /// The logical sequence
    pub text: &'text [u16],

    /// The single-class runs of `text`, in logical order.
    pub segments: Vec<Segment>,
}

impl<'text> SegmentedText<'text> {
    /// Split `text` into segments, passing unpaired surrogates through.
    #[cfg_attr(feature = "flame_it", flamer::flame)]
    pub fn new(text: &'text [u16]) -> SegmentedText<'text> {
        SegmentedText {
            text,
            segments: segment::segments(text),
        }
    }

    /// Split `text` into segments, treating unpaired surrogates as `policy`
    /// says.
    ///
    /// # Errors
    ///
    /// [`Error::UnpairedSurrogate`] for the first unpaired surrogate under
    /// [`SurrogatePolicy::Strict`].
    pub fn with_policy(text: &'text [u16], policy: SurrogatePolicy) -> Result<SegmentedText<'text>> {
        if policy == SurrogatePolicy::Strict {
            utf16::check_pairs(text)?;
        }
        Ok(SegmentedText::new(text))
    }

    /// Compose the display sequence using the `unicode-bidi` reorderer.
    ///
    /// # Errors
    ///
    /// [`Error::Reorder`] if any RTL segment could not be reordered.
    pub fn reorder(&self) -> Result<Vec<u16>> {
        self.reorder_with_reorderer(&UnicodeBidiReorderer)
    }

    /// Compose the display sequence using a custom [`BidiReorderer`].
    ///
    /// # Errors
    ///
    /// [`Error::Reorder`] if any RTL segment could not be reordered.
    pub fn reorder_with_reorderer<R: BidiReorderer>(&self, reorderer: &R) -> Result<Vec<u16>> {
        compose::compose(reorderer, self.text, &self.segments)
    }
}

/// Convert a logical sequence into display order, reordering only its RTL
/// runs.
///
/// # Errors
///
/// [`Error::Reorder`] if any RTL segment could not be reordered; no partial
/// output is returned.
pub fn process(logical: &[u16]) -> Result<Vec<u16>> {
    process_with_reorderer(&UnicodeBidiReorderer, logical)
}

/// [`process`] with a custom [`BidiReorderer`].
///
/// # Errors
///
/// See [`process`].
pub fn process_with_reorderer<R: BidiReorderer>(reorderer: &R, logical: &[u16]) -> Result<Vec<u16>> {
    SegmentedText::new(logical).reorder_with_reorderer(reorderer)
}

/// Convert a logical sequence into display order as a single RTL run,
/// without segmentation.
///
/// # Errors
///
/// [`Error::Reorder`] covering the whole input if it could not be reordered.
pub fn process_single_run(logical: &[u16]) -> Result<Vec<u16>> {
    process_single_run_with_reorderer(&UnicodeBidiReorderer, logical)
}

/// [`process_single_run`] with a custom [`BidiReorderer`].
///
/// # Errors
///
/// See [`process_single_run`].
pub fn process_single_run_with_reorderer<R: BidiReorderer>(
    reorderer: &R,
    logical: &[u16],
) -> Result<Vec<u16>> {
    reorder::reorder_rtl(reorderer, logical).map_err(|source| Error::Reorder {
        segment: 0..logical.len(),
        source,
    })
}
