//! Padding text to a total grapheme length.
//!
//! The pad unit is consumed one grapheme at a time and wraps back to its
//! first grapheme once exhausted, so padding `"hi"` to 5 with `"xy"` yields
//! `"hixyx"`.

use crate::{
  Error,
  Result,
  grapheme::{
    graphemes,
    len_graphemes,
  },
};

/// Pad unit used when the caller has no preference.
pub const DEFAULT_PAD: &str = " ";

/// Appends `len` graphemes of `pad` to `buf`, cycling through `pad` from its
/// first grapheme. `pad` must not be empty.
fn cyclic_fill_with(pad: &str, len: usize, buf: &mut String) {
  debug_assert!(!pad.is_empty());
  graphemes(pad).cycle().take(len).for_each(|g| buf.push_str(g));
}

/// Number of fill graphemes needed to grow `text` to `total_length`, or
/// `None` if it is already long enough.
fn fill_len(text: &str, total_length: usize, pad: &str) -> Result<Option<usize>> {
  if pad.is_empty() {
    tracing::trace!(total_length, "refusing to pad with an empty pad unit");
    return Err(Error::EmptyPadUnit);
  }
  let len = len_graphemes(text);
  Ok((total_length > len).then(|| total_length - len))
}

/// Left justifies `text` in a string of `total_length` graphemes, filling
/// the right side with `pad`.
///
/// # Errors
///
/// Returns [`Error::EmptyPadUnit`] if `pad` is empty, whatever the length.
pub fn left_justify(text: &str, total_length: usize, pad: &str) -> Result<String> {
  let Some(fill) = fill_len(text, total_length, pad)? else {
    return Ok(text.to_owned());
  };

  let mut res = String::with_capacity(text.len() + fill);
  res.push_str(text);
  cyclic_fill_with(pad, fill, &mut res);
  Ok(res)
}

/// Right justifies `text` in a string of `total_length` graphemes, filling
/// the left side with `pad`.
///
/// # Errors
///
/// Returns [`Error::EmptyPadUnit`] if `pad` is empty, whatever the length.
pub fn right_justify(text: &str, total_length: usize, pad: &str) -> Result<String> {
  let Some(fill) = fill_len(text, total_length, pad)? else {
    return Ok(text.to_owned());
  };

  let mut res = String::with_capacity(text.len() + fill);
  cyclic_fill_with(pad, fill, &mut res);
  res.push_str(text);
  Ok(res)
}

/// Centers `text` in a string of `total_length` graphemes.
///
/// When the fill can't be split evenly the extra grapheme goes to the right.
/// Both sides start from the first grapheme of `pad`.
///
/// ```
/// use the_sugar::center;
///
/// assert_eq!(center("hi", 6, "*").unwrap(), "**hi**");
/// assert_eq!(center("hi", 7, "*").unwrap(), "**hi***");
/// assert_eq!(center("x", 6, "ab").unwrap(), "abxaba");
/// ```
///
/// # Errors
///
/// Returns [`Error::EmptyPadUnit`] if `pad` is empty, whatever the length.
pub fn center(text: &str, total_length: usize, pad: &str) -> Result<String> {
  let Some(fill) = fill_len(text, total_length, pad)? else {
    return Ok(text.to_owned());
  };
  let left = fill / 2;
  let right = fill - left;

  let mut res = String::with_capacity(text.len() + fill);
  cyclic_fill_with(pad, left, &mut res);
  res.push_str(text);
  cyclic_fill_with(pad, right, &mut res);
  Ok(res)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn ascii_alnum(s: &str) -> String {
    s.chars().filter(char::is_ascii_alphanumeric).collect()
  }

  #[test]
  fn test_left_justify() {
    assert_eq!(left_justify("hi", 5, "xy").unwrap(), "hixyx");
    assert_eq!(left_justify("hi", 4, DEFAULT_PAD).unwrap(), "hi  ");
    assert_eq!(left_justify("hello", 3, "*").unwrap(), "hello");
    assert_eq!(left_justify("hello", 5, "*").unwrap(), "hello");
    assert_eq!(left_justify("", 3, "ab").unwrap(), "aba");
  }

  #[test]
  fn test_right_justify() {
    assert_eq!(right_justify("hi", 5, "xy").unwrap(), "xyxhi");
    assert_eq!(right_justify("hi", 4, DEFAULT_PAD).unwrap(), "  hi");
    assert_eq!(right_justify("hello", 0, "*").unwrap(), "hello");
  }

  #[test]
  fn test_center() {
    assert_eq!(center("hi", 6, "*").unwrap(), "**hi**");
    assert_eq!(center("hi", 7, "*").unwrap(), "**hi***");
    assert_eq!(center("hi", 3, "*").unwrap(), "hi*");
    assert_eq!(center("hi", 2, "*").unwrap(), "hi");
    assert_eq!(center("x", 8, "abc").unwrap(), "abcxabca");
    assert_eq!(center("", 4, DEFAULT_PAD).unwrap(), "    ");
  }

  #[test]
  fn test_lengths_are_counted_in_graphemes() {
    // "e\u{0301}" is a single grapheme, so only one fill grapheme is needed.
    assert_eq!(left_justify("e\u{0301}", 2, "-").unwrap(), "e\u{0301}-");
    assert_eq!(right_justify("漢字", 3, ".").unwrap(), ".漢字");
  }

  #[test]
  fn test_pad_unit_cycles_by_grapheme() {
    assert_eq!(left_justify("a", 4, "o\u{0308}x").unwrap(), "ao\u{0308}xo\u{0308}");
    assert_eq!(right_justify("a", 3, "🇺🇸🇫🇷").unwrap(), "🇺🇸🇫🇷a");
    assert_eq!(right_justify("a", 4, "🇺🇸🇫🇷").unwrap(), "🇺🇸🇫🇷🇺🇸a");
  }

  #[test]
  fn test_empty_pad_unit() {
    for total_length in [0, 1, 2, 10] {
      assert_eq!(left_justify("hi", total_length, ""), Err(Error::EmptyPadUnit));
      assert_eq!(right_justify("hi", total_length, ""), Err(Error::EmptyPadUnit));
      assert_eq!(center("hi", total_length, ""), Err(Error::EmptyPadUnit));
    }
  }

  quickcheck::quickcheck! {
      fn test_justified_length(s: String, total: u8, pad: String) -> bool {
          let (s, pad) = (ascii_alnum(&s), ascii_alnum(&pad));
          if pad.is_empty() {
              return true;
          }
          let total = total as usize;
          let expected = total.max(s.len());
          [
              left_justify(&s, total, &pad),
              right_justify(&s, total, &pad),
              center(&s, total, &pad),
          ]
          .iter()
          .all(|res| res.as_ref().is_ok_and(|res| len_graphemes(res) == expected))
      }

      fn test_justified_keeps_text(s: String, total: u8, pad: String) -> bool {
          if pad.is_empty() {
              return true;
          }
          let total = total as usize;
          left_justify(&s, total, &pad).is_ok_and(|res| res.starts_with(&s))
            && right_justify(&s, total, &pad).is_ok_and(|res| res.ends_with(&s))
            && center(&s, total, &pad).is_ok_and(|res| res.contains(&s))
      }
  }
}
