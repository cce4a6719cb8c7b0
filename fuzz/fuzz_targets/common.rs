const MAX_TEXT_BYTES: usize = 4 * 1024;
const MAX_PAD_BYTES: usize = 64;
const MAX_TOTAL_LENGTH: usize = 8 * 1024;

/// Inputs decoded from the raw fuzzer bytes.
#[derive(Debug, Clone)]
pub struct Scenario {
  pub text:         String,
  pub pad:          String,
  pub start:        isize,
  pub end:          isize,
  pub total_length: usize,
}

pub fn scenario_from_bytes(data: &[u8]) -> Scenario {
  let mut cursor = ByteCursor::new(data);
  let start = cursor.next_i16() as isize;
  let end = cursor.next_i16() as isize;
  let total_length = cursor.next_usize(MAX_TOTAL_LENGTH);
  let pad_len = cursor.next_usize(MAX_PAD_BYTES);
  let pad = lossy_text(cursor.next_bytes(pad_len));
  let text_len = cursor.next_usize(MAX_TEXT_BYTES);
  let text = lossy_text(cursor.next_bytes(text_len));

  Scenario {
    text,
    pad,
    start,
    end,
    total_length,
  }
}

fn lossy_text(bytes: &[u8]) -> String {
  String::from_utf8_lossy(bytes).into_owned()
}

struct ByteCursor<'a> {
  data: &'a [u8],
  pos:  usize,
}

impl<'a> ByteCursor<'a> {
  fn new(data: &'a [u8]) -> Self {
    Self { data, pos: 0 }
  }

  fn next_u8(&mut self) -> u8 {
    let value = self.data.get(self.pos).copied().unwrap_or(0);
    self.pos = self.pos.saturating_add(1);
    value
  }

  fn next_u16(&mut self) -> u16 {
    let lo = self.next_u8() as u16;
    let hi = self.next_u8() as u16;
    lo | (hi << 8)
  }

  fn next_i16(&mut self) -> i16 {
    self.next_u16() as i16
  }

  fn next_usize(&mut self, max: usize) -> usize {
    if max == 0 {
      return 0;
    }
    (self.next_u16() as usize) % (max + 1)
  }

  fn next_bytes(&mut self, len: usize) -> &'a [u8] {
    let start = self.pos.min(self.data.len());
    let end = start.saturating_add(len).min(self.data.len());
    self.pos = end;
    &self.data[start..end]
  }
}
