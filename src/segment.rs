// Copyright 2014 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Partitioning of a logical sequence into single-class runs.

use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::run_class::{classify, RunClass};
use crate::utf16::CodePointIndices;

/// A maximal run of code units sharing one `RunClass`.
///
/// `range` indexes code units of the logical sequence. It never starts or
/// ends between the two halves of a surrogate pair.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Segment {
    pub range: Range<usize>,
    pub class: RunClass,
}

impl Segment {
    #[inline]
    pub fn is_rtl(&self) -> bool {
        self.class.is_rtl()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// The code units of this segment within `text`.
    #[inline]
    pub fn units<'text>(&self, text: &'text [u16]) -> &'text [u16] {
        &text[self.range.clone()]
    }
}

/// Finds the segments of `text`, in logical order.
///
/// Each character is classified by its full code point, so a surrogate pair
/// is classified once and always lands in a single segment. The segments are
/// non-empty, alternate in class, and concatenate back to `text`.
#[cfg_attr(feature = "flame_it", flamer::flame)]
pub fn segments(text: &[u16]) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut chars = CodePointIndices::new(text);

    let mut current_class = match chars.next() {
        Some((_, code_point, len)) => {
            note_unpaired(0, code_point, len);
            classify(code_point)
        }
        None => return segments,
    };
    let mut current_start = 0;

    for (i, code_point, len) in chars {
        note_unpaired(i, code_point, len);
        let class = classify(code_point);
        if class != current_class {
            // End the last segment and start a new one.
            push_segment(&mut segments, current_start..i, current_class);
            current_class = class;
            current_start = i;
        }
    }
    push_segment(&mut segments, current_start..text.len(), current_class);
    segments
}

fn push_segment(segments: &mut Vec<Segment>, range: Range<usize>, class: RunClass) {
    let segment = Segment { range, class };
    debug_assert!(!segment.is_empty());
    debug_assert!(segments.last().map_or(true, |prev| prev.class != class));
    tracing::trace!(range = ?segment.range, ?class, "closed segment");
    segments.push(segment);
}

#[inline]
fn note_unpaired(index: usize, code_point: u32, len: usize) {
    if len == 1 && (0xD800..=0xDFFF).contains(&code_point) {
        tracing::debug!(index, unit = code_point, "passing unpaired surrogate through");
    }
}
