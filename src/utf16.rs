// Copyright 2023 The Mozilla Foundation. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Conversion between UTF-16 code units and code points.
//!
//! Decoding is lenient: a surrogate that is not part of a well-formed
//! high/low pair is returned as a code point equal to the raw unit, so that
//! indexing stays exact and no unit of the input is ever lost.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

// Convenience functions to check whether a UTF16 code unit is a surrogate.
#[inline]
pub fn is_high_surrogate(code: u16) -> bool {
    (code & 0xFC00) == 0xD800
}
#[inline]
pub fn is_low_surrogate(code: u16) -> bool {
    (code & 0xFC00) == 0xDC00
}

/// How unpaired surrogates in the logical sequence are treated.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SurrogatePolicy {
    /// Pass an unpaired surrogate through as a literal code unit.
    Lenient,
    /// Reject the input at the first unpaired surrogate.
    Strict,
}

impl Default for SurrogatePolicy {
    fn default() -> Self {
        SurrogatePolicy::Lenient
    }
}

/// Decode the character starting at `index`, returning its code point and the
/// number of code units it occupies (1 or 2), or `None` past the end.
///
/// A high surrogate immediately followed by a low surrogate decodes as one
/// supplementary code point. Any other unit, including a lone surrogate,
/// decodes to itself.
#[inline]
pub fn decode_one(text: &[u16], index: usize) -> Option<(u32, usize)> {
    let unit = *text.get(index)?;
    if is_high_surrogate(unit) {
        if let Some(&next) = text.get(index + 1) {
            if is_low_surrogate(next) {
                let high = u32::from(unit - 0xD800);
                let low = u32::from(next - 0xDC00);
                return Some((0x10000 + (high << 10) + low, 2));
            }
        }
    }
    Some((u32::from(unit), 1))
}

/// The UTF-16 form of one code point.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum EncodedUnits {
    One(u16),
    /// High surrogate, then low surrogate.
    Two(u16, u16),
}

impl EncodedUnits {
    #[inline]
    pub fn unit_count(self) -> usize {
        match self {
            EncodedUnits::One(_) => 1,
            EncodedUnits::Two(..) => 2,
        }
    }

    #[inline]
    pub fn push_to(self, out: &mut Vec<u16>) {
        match self {
            EncodedUnits::One(unit) => out.push(unit),
            EncodedUnits::Two(high, low) => {
                out.push(high);
                out.push(low);
            }
        }
    }
}

/// Encode one code point (at most 0x10FFFF) as one or two code units.
#[inline]
pub fn encode_one(code_point: u32) -> EncodedUnits {
    debug_assert!(code_point <= 0x10FFFF, "code point out of range");
    if code_point < 0x10000 {
        EncodedUnits::One(code_point as u16)
    } else {
        let v = code_point - 0x10000;
        EncodedUnits::Two(0xD800 + (v >> 10) as u16, 0xDC00 + (v & 0x3FF) as u16)
    }
}

/// Decode a whole code unit sequence.
pub fn decode(text: &[u16]) -> Vec<u32> {
    CodePointIndices::new(text).map(|(_, cp, _)| cp).collect()
}

/// Encode a sequence of code points, concatenating in order.
pub fn encode(code_points: &[u32]) -> Vec<u16> {
    let encoded: Vec<EncodedUnits> = code_points.iter().map(|&cp| encode_one(cp)).collect();
    let mut out = Vec::with_capacity(encoded.iter().map(|e| e.unit_count()).sum());
    for units in encoded {
        units.push_to(&mut out);
    }
    out
}

/// Iterator over UTF-16 text in a [u16] slice, returning
/// (index, code_point, unit_len) tuples.
#[derive(Debug)]
pub struct CodePointIndices<'text> {
    text: &'text [u16],
    cur_pos: usize,
}

impl<'text> CodePointIndices<'text> {
    #[inline]
    pub fn new(text: &'text [u16]) -> Self {
        CodePointIndices { text, cur_pos: 0 }
    }
}

impl Iterator for CodePointIndices<'_> {
    type Item = (usize, u32, usize);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (code_point, len) = decode_one(self.text, self.cur_pos)?;
        let result = (self.cur_pos, code_point, len);
        self.cur_pos += len;
        Some(result)
    }
}

/// A surrogate code unit that is not half of a well-formed pair.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct UnpairedSurrogate {
    pub index: usize,
    pub unit: u16,
}

impl From<UnpairedSurrogate> for Error {
    fn from(s: UnpairedSurrogate) -> Error {
        Error::UnpairedSurrogate {
            index: s.index,
            unit: s.unit,
        }
    }
}

/// Report every unpaired surrogate in `text`, in order. Processing under the
/// lenient policy tolerates all of them; this lets a caller warn first.
pub fn unpaired_surrogates(text: &[u16]) -> Vec<UnpairedSurrogate> {
    CodePointIndices::new(text)
        .filter(|&(_, cp, len)| len == 1 && (0xD800..=0xDFFF).contains(&cp))
        .map(|(index, _, _)| UnpairedSurrogate {
            index,
            unit: text[index],
        })
        .collect()
}

/// Fail with the first unpaired surrogate, if any.
pub fn check_pairs(text: &[u16]) -> Result<()> {
    match unpaired_surrogates(text).into_iter().next() {
        Some(s) => Err(s.into()),
        None => Ok(()),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_surrogate_predicates() {
        assert!(is_high_surrogate(0xD800));
        assert!(is_high_surrogate(0xDBFF));
        assert!(!is_high_surrogate(0xDC00));
        assert!(is_low_surrogate(0xDC00));
        assert!(is_low_surrogate(0xDFFF));
        assert!(!is_low_surrogate(0xDBFF));
        assert!(!is_low_surrogate(0x0041));
    }

    #[test]
    fn test_decode_one() {
        let text = [0x0041, 0xD83D, 0xDE00, 0x0645];
        assert_eq!(decode_one(&text, 0), Some((0x41, 1)));
        assert_eq!(decode_one(&text, 1), Some((0x1F600, 2)));
        assert_eq!(decode_one(&text, 3), Some((0x0645, 1)));
        assert_eq!(decode_one(&text, 4), None);
    }

    #[test]
    fn test_decode_one_lenient() {
        // Trailing high surrogate.
        assert_eq!(decode_one(&[0x41, 0xD800], 1), Some((0xD800, 1)));
        // High surrogate followed by a non-surrogate.
        assert_eq!(decode_one(&[0xD800, 0x41], 0), Some((0xD800, 1)));
        // Lone low surrogate.
        assert_eq!(decode_one(&[0xDC00, 0x41], 0), Some((0xDC00, 1)));
    }

    #[test]
    fn test_encode_one() {
        assert_eq!(encode_one(0x41), EncodedUnits::One(0x41));
        assert_eq!(encode_one(0xFFFF), EncodedUnits::One(0xFFFF));
        assert_eq!(encode_one(0x10000), EncodedUnits::Two(0xD800, 0xDC00));
        assert_eq!(encode_one(0x1F600), EncodedUnits::Two(0xD83D, 0xDE00));
        assert_eq!(encode_one(0x10FFFF), EncodedUnits::Two(0xDBFF, 0xDFFF));
        assert_eq!(encode_one(0x1F600).unit_count(), 2);
    }

    #[test]
    fn test_round_trip_all_scalar_values() {
        for cp in (0..=0x10FFFFu32).filter(|cp| !(0xD800..=0xDFFF).contains(cp)) {
            let mut units = Vec::new();
            encode_one(cp).push_to(&mut units);
            assert_eq!(decode_one(&units, 0), Some((cp, units.len())));
        }
    }

    #[test]
    fn test_matches_std() {
        let s = "Hello مرحبا 世界 😀";
        let units: Vec<u16> = s.encode_utf16().collect();
        let cps: Vec<u32> = s.chars().map(|c| c as u32).collect();
        assert_eq!(decode(&units), cps);
        assert_eq!(encode(&cps), units);
    }

    #[test]
    fn test_code_point_indices() {
        let text = [0x61, 0xD83D, 0xDE00, 0x62];
        let got: Vec<_> = CodePointIndices::new(&text).collect();
        assert_eq!(got, vec![(0, 0x61, 1), (1, 0x1F600, 2), (3, 0x62, 1)]);
    }

    #[test]
    fn test_unpaired_surrogates() {
        assert_eq!(unpaired_surrogates(&[0x61, 0xD83D, 0xDE00]), vec![]);
        assert_eq!(
            unpaired_surrogates(&[0xDC00, 0x61, 0xD83D, 0xDE00, 0xD800]),
            vec![
                UnpairedSurrogate { index: 0, unit: 0xDC00 },
                UnpairedSurrogate { index: 4, unit: 0xD800 },
            ]
        );
        assert_eq!(check_pairs(&[0x61]), Ok(()));
        assert_eq!(
            check_pairs(&[0x61, 0xD800, 0x62]),
            Err(Error::UnpairedSurrogate { index: 1, unit: 0xD800 })
        );
    }
}
