// Copyright 2017 The Servo Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Reordering of one right-to-left run.

use crate::reorderer::{BidiReorderer, ReorderFailure};
use crate::utf16;
use crate::Direction;

/// Reorder one RTL run for display in a left-to-right pipeline.
///
/// The run is decoded to code points and visually reordered with a
/// right-to-left paragraph direction. When the service resolves the paragraph
/// as RTL, the visual order is then reversed as a whole. The reversal happens
/// on code points, before re-encoding, so surrogate pairs keep their
/// high/low order.
#[cfg_attr(feature = "flame_it", flamer::flame)]
pub fn reorder_rtl<R: BidiReorderer>(
    reorderer: &R,
    units: &[u16],
) -> Result<Vec<u16>, ReorderFailure> {
    let logical = utf16::decode(units);
    let reordered = reorderer.reorder(&logical, Direction::Rtl)?;
    if reordered.visual.len() != logical.len() {
        return Err(ReorderFailure::LengthMismatch {
            expected: logical.len(),
            actual: reordered.visual.len(),
        });
    }
    if let Some(&cp) = reordered.visual.iter().find(|&&cp| cp > 0x10FFFF) {
        return Err(ReorderFailure::InvalidCodePoint(cp));
    }

    let mut visual = reordered.visual;
    if reordered.resolved.is_rtl() {
        visual.reverse();
    }
    Ok(utf16::encode(&visual))
}
