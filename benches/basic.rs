// Copyright 2017 The Servo Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![cfg(all(test, feature = "bench_it"))]
#![feature(test)]

extern crate test;

use test::Bencher;

use mixed_bidi::{process, process_single_run, SegmentedText};

fn to_utf16(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}

const LTR_TEXTS: &[&str] = &["abc def ghi", "abc 123 def 456 ghi 789"];

const MIXED_TEXTS: &[&str] = &[
    "Helloمرحبا123世界",
    "ابجد ۱۲۳ hello هوز ۴۵۶ world حتی ۷۸۹",
];

fn bench_segments(b: &mut Bencher, texts: &[&str]) {
    let texts: Vec<_> = texts.iter().map(|t| to_utf16(t)).collect();
    b.iter(|| {
        for text in &texts {
            SegmentedText::new(text);
        }
    });
}

fn bench_process(b: &mut Bencher, texts: &[&str]) {
    let texts: Vec<_> = texts.iter().map(|t| to_utf16(t)).collect();
    b.iter(|| {
        for text in &texts {
            process(text).unwrap();
        }
    });
}

#[bench]
fn bench_1_segments_for_ltr_texts(b: &mut Bencher) {
    bench_segments(b, LTR_TEXTS);
}

#[bench]
fn bench_2_segments_for_mixed_texts(b: &mut Bencher) {
    bench_segments(b, MIXED_TEXTS);
}

#[bench]
fn bench_3_process_for_ltr_texts(b: &mut Bencher) {
    bench_process(b, LTR_TEXTS);
}

#[bench]
fn bench_4_process_for_mixed_texts(b: &mut Bencher) {
    bench_process(b, MIXED_TEXTS);
}

#[bench]
fn bench_5_process_single_run_for_mixed_texts(b: &mut Bencher) {
    let texts: Vec<_> = MIXED_TEXTS.iter().map(|t| to_utf16(t)).collect();
    b.iter(|| {
        for text in &texts {
            process_single_run(text).unwrap();
        }
    });
}
