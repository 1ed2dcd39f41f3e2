// Copyright 2014 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Run classification of code points: which characters are carved into
//! right-to-left runs and handed to the reordering service.

use std::cmp::Ordering::{Equal, Greater, Less};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The two buckets a character can fall into.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RunClass {
    /// Arabic script and the space character; reordered as a right-to-left run.
    Rtl,
    /// Everything else; emitted unchanged.
    Other,
}

impl RunClass {
    #[inline]
    pub fn is_rtl(self) -> bool {
        self == RunClass::Rtl
    }
}

/// Inclusive code point ranges of the RTL class, sorted and non-overlapping.
///
/// U+0020 SPACE is included so that spaces between Arabic words do not split
/// the run. As a consequence a space next to an RTL run always joins it.
pub const RTL_RANGES: &[(u32, u32)] = &[
    (0x0020, 0x0020), // space
    (0x0600, 0x06FF), // Arabic
    (0x0750, 0x077F), // Arabic Supplement
    (0x08A0, 0x08FF), // Arabic Extended-A
    (0xFD50, 0xFDFF), // Arabic Presentation Forms-A (tail)
];

/// Find the `RunClass` of a code point. Total over `u32`; values that are not
/// Unicode scalar values are simply `Other`.
#[inline]
pub fn classify(code_point: u32) -> RunClass {
    if bsearch_range_table(code_point, RTL_RANGES) {
        RunClass::Rtl
    } else {
        RunClass::Other
    }
}

/// Find the `RunClass` of a single char.
#[inline]
pub fn classify_char(c: char) -> RunClass {
    classify(c as u32)
}

fn bsearch_range_table(code_point: u32, r: &'static [(u32, u32)]) -> bool {
    r.binary_search_by(|&(lo, hi)| {
        if lo <= code_point && code_point <= hi {
            Equal
        } else if hi < code_point {
            Less
        } else {
            Greater
        }
    })
    .is_ok()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_table_is_sorted() {
        for &(lo, hi) in RTL_RANGES {
            assert!(lo <= hi);
        }
        for pair in RTL_RANGES.windows(2) {
            assert!(pair[0].1 < pair[1].0);
        }
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify(0x0020), RunClass::Rtl);
        assert_eq!(classify(0x0627), RunClass::Rtl);
        assert_eq!(classify(0x0645), RunClass::Rtl);
        assert_eq!(classify(0x0661), RunClass::Rtl);
        assert_eq!(classify(0x0750), RunClass::Rtl);
        assert_eq!(classify(0x08FF), RunClass::Rtl);
        assert_eq!(classify(0xFDFF), RunClass::Rtl);

        assert_eq!(classify('H' as u32), RunClass::Other);
        assert_eq!(classify('1' as u32), RunClass::Other);
        assert_eq!(classify(0x4E16), RunClass::Other);
        // Hebrew is not part of the RTL class.
        assert_eq!(classify(0x05D0), RunClass::Other);
        assert_eq!(classify(0x1F600), RunClass::Other);
        assert_eq!(classify(0xD83D), RunClass::Other);
    }

    #[test]
    fn test_range_edges() {
        for &(lo, hi) in RTL_RANGES {
            assert_eq!(classify(lo), RunClass::Rtl);
            assert_eq!(classify(hi), RunClass::Rtl);
            assert_eq!(classify(lo - 1), RunClass::Other);
            assert_eq!(classify(hi + 1), RunClass::Other);
        }
    }

    #[test]
    fn test_classify_is_total() {
        assert_eq!(classify(0), RunClass::Other);
        assert_eq!(classify(0x10FFFF), RunClass::Other);
        assert_eq!(classify(0x110000), RunClass::Other);
        assert_eq!(classify(u32::MAX), RunClass::Other);
    }

    #[test]
    fn test_classify_char() {
        assert_eq!(classify_char(' '), RunClass::Rtl);
        assert_eq!(classify_char('\u{062D}'), RunClass::Rtl);
        assert_eq!(classify_char('a'), RunClass::Other);
        assert!(RunClass::Rtl.is_rtl());
        assert!(!RunClass::Other.is_rtl());
    }
}
