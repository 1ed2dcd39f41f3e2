// Copyright 2014 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Paragraph base direction
//!
//! <http://www.unicode.org/reports/tr9/#BD5>

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use unicode_bidi::Level;

/// Paragraph base direction, requested from and reported by a reordering
/// service.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    /// If this direction is left-to-right.
    #[inline]
    pub fn is_ltr(self) -> bool {
        self == Direction::Ltr
    }

    /// If this direction is right-to-left.
    #[inline]
    pub fn is_rtl(self) -> bool {
        self == Direction::Rtl
    }

    /// The lowest embedding level with this direction (0 or 1).
    #[inline]
    pub fn level(self) -> Level {
        match self {
            Direction::Ltr => Level::ltr(),
            Direction::Rtl => Level::rtl(),
        }
    }
}

impl From<Level> for Direction {
    /// Even levels are LTR, odd levels RTL.
    #[inline]
    fn from(level: Level) -> Direction {
        if level.is_rtl() {
            Direction::Rtl
        } else {
            Direction::Ltr
        }
    }
}
