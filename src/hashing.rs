//! The two independent string hashes behind double hashing.
//!
//! Both hashes run in 32-bit signed wrapping arithmetic over the key bytes. A negative
//! result is shifted into the positive range by adding `i32::MAX` before the remainder
//! is taken, so the home slot and the stride of a key are stable across platforms.

/// Initial multiplier of the primary hash
const PRIMARY_SEED: i32 = 63_689;
/// Factor applied to the primary multiplier after every byte
const PRIMARY_MULTIPLIER: i32 = 378_551;
/// Fixed multiplier of the stride hash
const STEP_MULTIPLIER: i32 = 31;

/// Home slot of `key` in a table of `capacity` slots.
///
/// Returns a value in `0..capacity`, or 0 when `capacity` is 0.
#[must_use]
pub fn primary_hash(key: &str, capacity: usize) -> usize {
    let mut multiplier = PRIMARY_SEED;
    let mut hash: i32 = 0;

    for byte in key.bytes() {
        hash = hash.wrapping_mul(multiplier).wrapping_add(i32::from(byte));
        multiplier = multiplier.wrapping_mul(PRIMARY_MULTIPLIER);
    }

    reduce(hash, capacity)
}

/// Probe stride of `key`, in `1..max_step` (or exactly 1 when `max_step <= 1`).
///
/// A stride that reduces to zero is raised to 1 so a probe always moves.
#[must_use]
pub fn step_hash(key: &str, max_step: usize) -> usize {
    let hash = key
        .bytes()
        .fold(0_i32, |hash, byte| hash.wrapping_mul(STEP_MULTIPLIER).wrapping_add(i32::from(byte)));

    match reduce(hash, max_step) {
        0 => 1,
        step => step,
    }
}

/// Maps a signed hash into `0..modulus`.
fn reduce(hash: i32, modulus: usize) -> usize {
    let hash = i64::from(hash);
    let folded = if hash < 0 { hash.wrapping_add(i64::from(i32::MAX)) } else { hash };
    let modulus = i64::try_from(modulus).unwrap_or(i64::MAX);

    folded
        .checked_rem_euclid(modulus)
        .and_then(|index| usize::try_from(index).ok())
        .unwrap_or(0)
}
