// Copyright 2015 The Servo Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! UTF-8 output encoding of a display sequence.

use crate::utf16::CodePointIndices;
use crate::{Error, Result};

/// Encode code points as UTF-8 (1 to 4 bytes each, by magnitude).
///
/// Surrogate values and values above 0x10FFFF are rejected rather than
/// encoded.
pub fn to_utf8(code_points: &[u32]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(code_points.len());
    let mut buf = [0; 4];
    for &cp in code_points {
        let c = std::char::from_u32(cp).ok_or(Error::InvalidCodePoint(cp))?;
        out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
    }
    Ok(out)
}

/// Encode a UTF-16 display sequence as UTF-8, joining surrogate pairs first.
/// An unpaired surrogate is an error.
pub fn units_to_utf8(units: &[u16]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(units.len());
    let mut buf = [0; 4];
    for (index, cp, _) in CodePointIndices::new(units) {
        let c = std::char::from_u32(cp).ok_or(Error::UnpairedSurrogate {
            index,
            unit: units[index],
        })?;
        out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
    }
    Ok(out)
}
