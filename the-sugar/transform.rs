//! Whole-text transformations.
//!
//! The `*_in_place` variants overwrite their argument with the result of the
//! matching pure function.

use std::{
  cmp::Ordering,
  fmt::Display,
};

use crate::grapheme::{
  graphemes,
  is_grapheme_boundary,
  prev_grapheme_boundary,
};

/// Reverses the order of the graphemes in `text`, keeping every grapheme
/// intact.
///
/// ```
/// use the_sugar::reverse;
///
/// assert_eq!(reverse("ae\u{0301}z"), "ze\u{0301}a");
/// ```
pub fn reverse(text: &str) -> String {
  graphemes(text).rev().collect()
}

pub fn reverse_in_place(text: &mut String) {
  *text = reverse(text);
}

/// Removes the last grapheme of `text`. Empty text stays empty.
pub fn chop(text: &str) -> String {
  text[..prev_grapheme_boundary(text, text.len())].to_owned()
}

pub fn chop_in_place(text: &mut String) {
  let end = prev_grapheme_boundary(text, text.len());
  text.truncate(end);
}

pub fn clear(text: &mut String) {
  text.clear();
}

pub fn prepend(text: &str, prefix: &str) -> String {
  let mut res = String::with_capacity(prefix.len() + text.len());
  res.push_str(prefix);
  res.push_str(text);
  res
}

/// Appends the display form of `value` to `text`. Integers are appended as
/// their decimal digits, never as code points.
pub fn append(text: &str, value: impl Display) -> String {
  format!("{text}{value}")
}

pub fn upcase(text: &str) -> String {
  text.to_uppercase()
}

pub fn upcase_in_place(text: &mut String) {
  *text = upcase(text);
}

pub fn downcase(text: &str) -> String {
  text.to_lowercase()
}

pub fn downcase_in_place(text: &mut String) {
  *text = downcase(text);
}

/// Three-way comparison of `a` and `b`. Use `compare(a, b) as i8` for a
/// `-1`/`0`/`1` result.
pub fn compare(a: &str, b: &str) -> Ordering {
  a.cmp(b)
}

/// Compares `a` and `b` after lowercasing both.
///
/// ```
/// use std::cmp::Ordering;
///
/// use the_sugar::case_compare;
///
/// assert_eq!(case_compare("Hello", "hELLO"), Ordering::Equal);
/// assert_eq!(case_compare("abc", "ABD") as i8, -1);
/// ```
pub fn case_compare(a: &str, b: &str) -> Ordering {
  compare(&downcase(a), &downcase(b))
}

/// Returns `true` if `text` begins with the graphemes of `prefix`. A prefix
/// that ends in the middle of a grapheme of `text` does not match.
pub fn starts_with(text: &str, prefix: &str) -> bool {
  text.starts_with(prefix) && is_grapheme_boundary(text, prefix.len())
}

/// Returns `true` if `text` ends with the graphemes of `suffix`. A suffix
/// that starts in the middle of a grapheme of `text` does not match.
pub fn ends_with(text: &str, suffix: &str) -> bool {
  text.ends_with(suffix) && is_grapheme_boundary(text, text.len() - suffix.len())
}
