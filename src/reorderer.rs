// Copyright 2015 The Servo Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The bidi reordering service that RTL runs are handed to.

use thiserror::Error;
use unicode_bidi::BidiInfo;

use crate::Direction;

/// Output of a [`BidiReorderer`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Reordered {
    /// The input code points, permuted into visual order.
    pub visual: Vec<u32>,
    /// The paragraph direction the service actually resolved.
    pub resolved: Direction,
}

/// Why a reordering service could not reorder a run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReorderFailure {
    #[error("0x{0:X} is not a Unicode scalar value")]
    InvalidCodePoint(u32),

    #[error("run spans {0} paragraphs; only single-paragraph runs are supported")]
    MultipleParagraphs(usize),

    #[error("reorderer returned {actual} code points for an input of {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Failure reported by a custom service.
    #[error("{0}")]
    Service(String),
}

/// This trait abstracts over an implementation of the Unicode Bidirectional
/// Algorithm that can visually reorder one paragraph of code points.
///
/// Implementations must be stateless from the caller's point of view: each
/// call is independent, and the output is a permutation of the input.
pub trait BidiReorderer {
    /// Reorder `code_points` (one paragraph, logical order) into visual order,
    /// requesting `base` as the paragraph direction.
    fn reorder(&self, code_points: &[u32], base: Direction) -> Result<Reordered, ReorderFailure>;
}

impl<R: BidiReorderer + ?Sized> BidiReorderer for &R {
    #[inline]
    fn reorder(&self, code_points: &[u32], base: Direction) -> Result<Reordered, ReorderFailure> {
        (**self).reorder(code_points, base)
    }
}

/// [`BidiReorderer`] backed by the `unicode-bidi` crate.
#[derive(Copy, Clone, Debug, Default)]
pub struct UnicodeBidiReorderer;

impl BidiReorderer for UnicodeBidiReorderer {
    #[cfg_attr(feature = "flame_it", flamer::flame)]
    fn reorder(&self, code_points: &[u32], base: Direction) -> Result<Reordered, ReorderFailure> {
        // Values that are not chars (lone surrogates) are resolved as U+FFFD
        // and come back out as the original value.
        let text: String = code_points
            .iter()
            .map(|&cp| std::char::from_u32(cp).unwrap_or(std::char::REPLACEMENT_CHARACTER))
            .collect();

        let info = BidiInfo::new(&text, Some(base.level()));
        let para = match info.paragraphs.as_slice() {
            [] => {
                return Ok(Reordered {
                    visual: Vec::new(),
                    resolved: base,
                })
            }
            [para] => para,
            paras => return Err(ReorderFailure::MultipleParagraphs(paras.len())),
        };

        let line = para.range.clone();
        let levels = info.reordered_levels_per_char(para, line);
        let visual = BidiInfo::reorder_visual(&levels)
            .into_iter()
            .map(|logical| code_points[logical])
            .collect();
        Ok(Reordered {
            visual,
            resolved: Direction::from(para.level),
        })
    }
}
