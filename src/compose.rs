// Copyright 2017 The Servo Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Recomposition of segments into display order.

use crate::reorder::reorder_rtl;
use crate::reorderer::BidiReorderer;
use crate::segment::Segment;
use crate::{Error, Result};

/// Concatenate the segments of `text` in logical order: RTL segments go
/// through [`reorder_rtl`], all others are copied verbatim.
///
/// The first failing RTL segment aborts the call.
#[cfg_attr(feature = "flame_it", flamer::flame)]
pub fn compose<R: BidiReorderer>(
    reorderer: &R,
    text: &[u16],
    segments: &[Segment],
) -> Result<Vec<u16>> {
    let mut output = Vec::with_capacity(text.len());
    let mut rtl_segments = 0;

    for segment in segments {
        let units = segment.units(text);
        if segment.is_rtl() {
            let reordered = reorder_rtl(reorderer, units).map_err(|source| Error::Reorder {
                segment: segment.range.clone(),
                source,
            })?;
            output.extend_from_slice(&reordered);
            rtl_segments += 1;
        } else {
            output.extend_from_slice(units);
        }
    }

    tracing::debug!(
        units = text.len(),
        segments = segments.len(),
        rtl_segments,
        "composed display sequence"
    );
    Ok(output)
}
