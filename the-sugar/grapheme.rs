//! Utility functions to traverse the unicode graphemes of a `str`.
//!
//! Everything above this module works in grapheme offsets; this is the only
//! place that converts between grapheme offsets and byte offsets.

use unicode_segmentation::{
  GraphemeCursor,
  Graphemes,
  UnicodeSegmentation,
};

/// Iterates over the extended grapheme clusters of `text`.
#[inline]
pub fn graphemes(text: &str) -> Graphemes<'_> {
  text.graphemes(true)
}

/// Returns the number of extended grapheme clusters in `text`.
#[must_use]
#[inline]
pub fn len_graphemes(text: &str) -> usize {
  if text.is_ascii() {
    // Every ASCII byte is its own cluster, except for CRLF pairs.
    text.len() - text.matches("\r\n").count()
  } else {
    graphemes(text).count()
  }
}

#[must_use]
pub fn nth_prev_grapheme_boundary(text: &str, byte_idx: usize, n: usize) -> usize {
  assert!(text.is_char_boundary(byte_idx));

  let mut byte_idx = byte_idx;
  let mut gc = GraphemeCursor::new(byte_idx, text.len(), true);

  for _ in 0..n {
    // The whole text is handed to the cursor as a single chunk, so it never
    // asks for more context.
    match gc.prev_boundary(text, 0) {
      Ok(None) => return 0,
      Ok(Some(n)) => byte_idx = n,
      Err(_) => unreachable!(),
    }
  }

  byte_idx
}

#[must_use]
pub fn nth_next_grapheme_boundary(text: &str, byte_idx: usize, n: usize) -> usize {
  assert!(text.is_char_boundary(byte_idx));

  let mut byte_idx = byte_idx;
  let mut gc = GraphemeCursor::new(byte_idx, text.len(), true);

  for _ in 0..n {
    match gc.next_boundary(text, 0) {
      Ok(None) => return text.len(),
      Ok(Some(n)) => byte_idx = n,
      Err(_) => unreachable!(),
    }
  }

  byte_idx
}

/// Finds the next grapheme boundary after the given byte position.
#[must_use]
#[inline(always)]
pub fn next_grapheme_boundary(text: &str, byte_idx: usize) -> usize {
  nth_next_grapheme_boundary(text, byte_idx, 1)
}

/// Finds the previous grapheme boundary before the given byte position.
#[must_use]
#[inline(always)]
pub fn prev_grapheme_boundary(text: &str, byte_idx: usize) -> usize {
  nth_prev_grapheme_boundary(text, byte_idx, 1)
}

/// Converts a grapheme offset into the byte offset where that grapheme
/// starts. Offsets past the end saturate at `text.len()`.
#[must_use]
#[inline]
pub fn grapheme_to_byte(text: &str, grapheme_idx: usize) -> usize {
  nth_next_grapheme_boundary(text, 0, grapheme_idx)
}

/// Returns `true` if `byte_idx` falls between two grapheme clusters.
#[must_use]
pub fn is_grapheme_boundary(text: &str, byte_idx: usize) -> bool {
  if !text.is_char_boundary(byte_idx) {
    return false;
  }
  let mut gc = GraphemeCursor::new(byte_idx, text.len(), true);
  matches!(gc.is_boundary(text, 0), Ok(true))
}
