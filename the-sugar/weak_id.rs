//! A throwaway identifier generator.
//!
//! **This is not a UUID.** Identifiers are a single draw from a
//! non-cryptographic generator seeded with the current time in whole
//! seconds, so every call made within the same second returns the same
//! value and anyone who knows roughly when an identifier was made can
//! reproduce it. Do not use it where uniqueness or unpredictability matters.

use std::time::{
  SystemTime,
  UNIX_EPOCH,
};

/// Upper bound (exclusive) of a generated identifier.
const MAX_ID: u32 = 1 << 31;

/// Returns a variable length decimal identifier seeded from the wall clock.
pub fn weak_id() -> String {
  // A clock set before the epoch just yields the zero seed.
  let seed = SystemTime::now()
    .duration_since(UNIX_EPOCH)
    .map(|elapsed| elapsed.as_secs())
    .unwrap_or_default();
  weak_id_from_seed(seed)
}

/// Returns the identifier [`weak_id`] would produce for `seed`.
pub fn weak_id_from_seed(seed: u64) -> String {
  tracing::trace!(seed, "generating weak identifier");
  let mut rng = fastrand::Rng::with_seed(seed);
  rng.u32(..MAX_ID).to_string()
}
