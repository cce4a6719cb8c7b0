//! Grapheme-aware positional string helpers.
//!
//! Positions are counted in extended grapheme clusters. Negative positions
//! count from the end of the text (`-1` is the last cluster) and ranges are
//! half-open.
//!
//! ```
//! use the_sugar::{center, char_at, substring};
//!
//! assert_eq!(char_at("héllo", -1).unwrap(), "o");
//! assert_eq!(substring("héllo", 1, -1).unwrap(), "éll");
//! assert_eq!(center("hi", 7, "*").unwrap(), "**hi***");
//! ```
use thiserror::Error;

pub mod grapheme;
pub mod justify;
pub mod position;
pub mod transform;
#[cfg(feature = "weak-id")]
pub mod weak_id;

pub use grapheme::{
  graphemes,
  len_graphemes,
};
pub use justify::{
  DEFAULT_PAD,
  center,
  left_justify,
  right_justify,
};
pub use position::{
  char_at,
  first,
  insert,
  insert_in_place,
  last,
  resolve_insertion_point,
  resolve_position,
  resolve_range,
  substring,
};
pub use transform::{
  append,
  case_compare,
  chop,
  chop_in_place,
  clear,
  compare,
  downcase,
  downcase_in_place,
  ends_with,
  prepend,
  reverse,
  reverse_in_place,
  starts_with,
  upcase,
  upcase_in_place,
};
#[cfg(feature = "weak-id")]
pub use weak_id::{
  weak_id,
  weak_id_from_seed,
};

/// Errors returned by the positional and padding operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  #[error("position {pos} is out of range for text of length {len}")]
  OutOfRange { pos: isize, len: usize },
  #[error("range {start}..{end} is invalid for text of length {len}")]
  InvalidRange {
    start: isize,
    end:   isize,
    len:   usize,
  },
  #[error("pad unit can not be empty")]
  EmptyPadUnit,
}

pub type Result<T> = std::result::Result<T, Error>;
