// Copyright 2015 The Servo Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Error types for segmentation, reordering and output encoding.

use std::ops::Range;

use thiserror::Error;

use crate::reorderer::ReorderFailure;

/// Everything that can abort processing of one logical sequence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The reordering service failed on the RTL segment covering `segment`
    /// (code unit offsets into the logical sequence). The whole call fails.
    #[error("reordering failed for segment {segment:?}: {source}")]
    Reorder {
        segment: Range<usize>,
        #[source]
        source: ReorderFailure,
    },

    /// A surrogate without its partner, reported under the strict policy and
    /// by the UTF-8 encoder.
    #[error("unpaired surrogate 0x{unit:04X} at code unit {index}")]
    UnpairedSurrogate { index: usize, unit: u16 },

    /// A value passed as a code point that is not a Unicode scalar value.
    #[error("0x{0:X} is not a Unicode scalar value")]
    InvalidCodePoint(u32),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
