//! Benchmarks for grapheme counting and boundary walking in the-sugar.
//!
//! Run with: `cargo bench -p the-sugar --bench grapheme`

use divan::{
  Bencher,
  black_box,
};
use the_sugar::grapheme::{
  grapheme_to_byte,
  len_graphemes,
  nth_prev_grapheme_boundary,
};

fn main() {
  divan::main();
}

const SIZES: [usize; 3] = [100, 10_000, 1_000_000];

/// Repeats `unit` until the text is about `size` bytes, without splitting a
/// `char`.
fn repeat_to(unit: &str, size: usize) -> String {
  let mut s = unit.repeat(size / unit.len() + 1);
  while s.len() > size {
    s.pop();
  }
  s
}

fn ascii(size: usize) -> String {
  repeat_to("The quick brown fox jumps over the lazy dog. ", size)
}

fn cjk(size: usize) -> String {
  repeat_to("漢字文字測試中文日本語韓國語", size)
}

fn emoji(size: usize) -> String {
  repeat_to("😀🎉🇺🇸👍🏽👨‍👩‍👧", size)
}

fn combining(size: usize) -> String {
  repeat_to("a\u{0301}o\u{0308}", size)
}

mod count {
  use super::*;

  #[divan::bench(args = SIZES)]
  fn ascii(bencher: Bencher, size: usize) {
    let text = super::ascii(size);
    bencher.bench(|| len_graphemes(black_box(&text)));
  }

  #[divan::bench(args = SIZES)]
  fn cjk(bencher: Bencher, size: usize) {
    let text = super::cjk(size);
    bencher.bench(|| len_graphemes(black_box(&text)));
  }

  #[divan::bench(args = SIZES)]
  fn emoji(bencher: Bencher, size: usize) {
    let text = super::emoji(size);
    bencher.bench(|| len_graphemes(black_box(&text)));
  }

  #[divan::bench(args = SIZES)]
  fn combining(bencher: Bencher, size: usize) {
    let text = super::combining(size);
    bencher.bench(|| len_graphemes(black_box(&text)));
  }
}

// Walking to the middle of the text from either end.

mod boundary {
  use super::*;

  #[divan::bench(args = SIZES)]
  fn forward_cjk(bencher: Bencher, size: usize) {
    let text = cjk(size);
    let mid = len_graphemes(&text) / 2;
    bencher.bench(|| grapheme_to_byte(black_box(&text), black_box(mid)));
  }

  #[divan::bench(args = SIZES)]
  fn forward_combining(bencher: Bencher, size: usize) {
    let text = combining(size);
    let mid = len_graphemes(&text) / 2;
    bencher.bench(|| grapheme_to_byte(black_box(&text), black_box(mid)));
  }

  #[divan::bench(args = SIZES)]
  fn backward_emoji(bencher: Bencher, size: usize) {
    let text = emoji(size);
    let mid = len_graphemes(&text) / 2;
    bencher.bench(|| nth_prev_grapheme_boundary(black_box(&text), text.len(), black_box(mid)));
  }
}
