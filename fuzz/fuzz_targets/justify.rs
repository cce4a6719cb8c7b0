#![no_main]

mod common;

use libfuzzer_sys::fuzz_target;
use the_sugar::{
  Error,
  center,
  chop,
  left_justify,
  reverse,
  right_justify,
};

use crate::common::scenario_from_bytes;

fuzz_target!(|data: &[u8]| {
  let scenario = scenario_from_bytes(data);
  let (text, pad) = (scenario.text.as_str(), scenario.pad.as_str());
  let total_length = scenario.total_length;

  let results = [
    left_justify(text, total_length, pad),
    right_justify(text, total_length, pad),
    center(text, total_length, pad),
  ];
  if pad.is_empty() {
    assert!(results.iter().all(|res| *res == Err(Error::EmptyPadUnit)));
    return;
  }

  let [left, right, centered] = results.map(|res| res.expect("pad unit is not empty"));
  assert!(left.starts_with(text));
  assert!(right.ends_with(text));
  assert!(centered.contains(text));

  let _ = reverse(text);
  assert!(text.starts_with(&chop(text)));
});
