//! Random number generation (xorshift32)

/// Seed used when none is configured
pub const DEFAULT_SEED: u32 = 12345;

/// Advance the xorshift32 state and return the new value.
/// A zero state is a fixed point, callers must seed with non-zero.
#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Uniform sample in [0, 1)
#[inline]
pub fn next_f64(state: &mut u32) -> f64 {
    xorshift32(state) as f64 / (u32::MAX as f64 + 1.0)
}

/// Map a user-provided seed onto a valid xorshift state
#[inline]
pub fn sanitize_seed(seed: u32) -> u32 {
    if seed == 0 { DEFAULT_SEED } else { seed }
}
