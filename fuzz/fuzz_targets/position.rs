#![no_main]

mod common;

use libfuzzer_sys::fuzz_target;
use the_sugar::{
  Error,
  char_at,
  first,
  insert,
  last,
  len_graphemes,
  resolve_position,
  resolve_range,
  substring,
};

use crate::common::scenario_from_bytes;

fuzz_target!(|data: &[u8]| {
  let scenario = scenario_from_bytes(data);
  let text = scenario.text.as_str();
  let len = len_graphemes(text);

  match resolve_range(text, scenario.start, scenario.end) {
    Ok((start, end)) => {
      assert!(start <= end && end <= len);
      let slice = substring(text, scenario.start, scenario.end).expect("range resolved");
      assert!(text.contains(&slice));
    },
    Err(err) => {
      assert!(matches!(err, Error::InvalidRange { .. }));
      assert_eq!(substring(text, scenario.start, scenario.end), Err(err));
    },
  }

  match resolve_position(text, scenario.start) {
    Ok(offset) => {
      assert!(offset < len);
      let g = char_at(text, scenario.start).expect("position resolved");
      let i = offset as isize;
      assert_eq!(substring(text, i, i + 1).as_deref(), Ok(g.as_str()));
    },
    Err(err) => assert!(matches!(err, Error::OutOfRange { .. })),
  }

  if let Ok(res) = insert(text, scenario.end, &scenario.pad) {
    assert_eq!(res.len(), text.len() + scenario.pad.len());
  }

  let n = scenario.start;
  let (head, tail) = (first(text, n), last(text, n));
  assert!(text.starts_with(&head) && text.ends_with(&tail));
  if n >= 0 && n.unsigned_abs() >= len {
    assert_eq!(head, text);
    assert_eq!(tail, text);
  }
});
