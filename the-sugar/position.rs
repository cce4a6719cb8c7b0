//! Resolution of signed grapheme positions and ranges, and the slicing
//! operations built on top of them.
//!
//! A non-negative position is an offset from the start of the text. A
//! negative position counts from the end, so `-1` names the last grapheme.
//! Positions are always resolved against the length of the text passed in.

use crate::{
  Error,
  Result,
  grapheme::{
    grapheme_to_byte,
    len_graphemes,
    nth_next_grapheme_boundary,
    nth_prev_grapheme_boundary,
  },
};

/// Applies the negative-from-the-end rule without any bounds checking.
/// Returns `None` when a negative position reaches before the start.
#[inline]
fn offset(len: usize, pos: isize) -> Option<usize> {
  if pos >= 0 {
    Some(pos.unsigned_abs())
  } else {
    len.checked_sub(pos.unsigned_abs())
  }
}

/// Resolves `pos` to the offset of an existing grapheme, in `[0, len)`.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] if the resolved offset does not name a
/// grapheme of `text`. Empty text has no valid positions.
pub fn resolve_position(text: &str, pos: isize) -> Result<usize> {
  let len = len_graphemes(text);
  match offset(len, pos) {
    Some(offset) if offset < len => Ok(offset),
    _ => {
      tracing::trace!(pos, len, "position out of range");
      Err(Error::OutOfRange { pos, len })
    },
  }
}

/// Resolves `pos` to an insertion point, in `[0, len]`. Unlike
/// [`resolve_position`] the offset may equal the length of the text.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] if the resolved offset lies outside
/// `[0, len]`.
pub fn resolve_insertion_point(text: &str, pos: isize) -> Result<usize> {
  let len = len_graphemes(text);
  match offset(len, pos) {
    Some(offset) if offset <= len => Ok(offset),
    _ => {
      tracing::trace!(pos, len, "insertion point out of range");
      Err(Error::OutOfRange { pos, len })
    },
  }
}

/// Resolves the half-open range `start..end` to a pair of grapheme offsets
/// with `start <= end <= len`.
///
/// # Errors
///
/// Returns [`Error::InvalidRange`] if either bound resolves before the start
/// of the text, past its end, or if the resolved start lies after the
/// resolved end.
pub fn resolve_range(text: &str, start: isize, end: isize) -> Result<(usize, usize)> {
  let len = len_graphemes(text);
  match (offset(len, start), offset(len, end)) {
    (Some(from), Some(to)) if from <= to && to <= len => Ok((from, to)),
    _ => {
      tracing::trace!(start, end, len, "invalid range");
      Err(Error::InvalidRange { start, end, len })
    },
  }
}

/// Returns the grapheme at `pos` as a one grapheme string.
///
/// # Errors
///
/// See [`resolve_position`].
pub fn char_at(text: &str, pos: isize) -> Result<String> {
  let offset = resolve_position(text, pos)?;
  let from = grapheme_to_byte(text, offset);
  let to = nth_next_grapheme_boundary(text, from, 1);
  Ok(text[from..to].to_owned())
}

/// Returns the graphemes in the half-open range `start..end`.
///
/// ```
/// use the_sugar::substring;
///
/// assert_eq!(substring("hello", 1, 3).unwrap(), "el");
/// assert_eq!(substring("hello", -3, -1).unwrap(), "ll");
/// assert!(substring("hello", 3, 1).is_err());
/// ```
///
/// # Errors
///
/// See [`resolve_range`].
pub fn substring(text: &str, start: isize, end: isize) -> Result<String> {
  let (start, end) = resolve_range(text, start, end)?;
  let from = grapheme_to_byte(text, start);
  let to = nth_next_grapheme_boundary(text, from, end - start);
  Ok(text[from..to].to_owned())
}

/// Returns the first `n` graphemes of `text`.
///
/// `n <= 0` gives an empty string and `n` at or past the length gives the
/// whole text.
pub fn first(text: &str, n: isize) -> String {
  if n <= 0 {
    return String::new();
  }
  let to = nth_next_grapheme_boundary(text, 0, n.unsigned_abs());
  text[..to].to_owned()
}

/// Returns the last `n` graphemes of `text`. Degenerate values of `n` behave
/// as in [`first`].
pub fn last(text: &str, n: isize) -> String {
  if n <= 0 {
    return String::new();
  }
  let from = nth_prev_grapheme_boundary(text, text.len(), n.unsigned_abs());
  text[from..].to_owned()
}

/// Returns a copy of `text` with `fragment` inserted before the grapheme at
/// the resolved insertion point `pos`.
///
/// # Errors
///
/// See [`resolve_insertion_point`].
pub fn insert(text: &str, pos: isize, fragment: &str) -> Result<String> {
  let offset = resolve_insertion_point(text, pos)?;
  let at = grapheme_to_byte(text, offset);

  let mut res = String::with_capacity(text.len() + fragment.len());
  res.push_str(&text[..at]);
  res.push_str(fragment);
  res.push_str(&text[at..]);
  Ok(res)
}

/// In-place version of [`insert`]. `text` is left untouched on error.
///
/// # Errors
///
/// See [`resolve_insertion_point`].
pub fn insert_in_place(text: &mut String, pos: isize, fragment: &str) -> Result<()> {
  *text = insert(text, pos, fragment)?;
  Ok(())
}
