//! Bijective scrambling of cell indices.
//!
//! A balanced Feistel network over 42 bits (two 21-bit halves) permutes the
//! power-of-two superset of `[0, TOTAL_CELLS)`. Results that land outside the
//! grid are fed back through the network (cycle walking) until they land inside,
//! which keeps the map a bijection on the grid itself.
//!
//! The key, round count and half width are part of the address format.

use crate::core::constants::{
    MAX_CYCLE_WALK, SHUFFLE_HALF_BITS, SHUFFLE_HALF_MASK, SHUFFLE_KEY, SHUFFLE_ROUNDS,
    TOTAL_CELLS,
};
use crate::util::error::Q3mError;

/// Keyed round function, SplitMix64 finaliser truncated to one half.
fn round_fn(val: u64, round: u64) -> u64 {
    let mut x = val
        .wrapping_add(round.wrapping_mul(SHUFFLE_KEY))
        .wrapping_add(SHUFFLE_KEY);
    x ^= x >> 30;
    x = x.wrapping_mul(0xBF58476D1CE4E5B9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94D049BB133111EB);
    x ^= x >> 31;
    x & SHUFFLE_HALF_MASK
}

fn feistel_encrypt(val: u64) -> u64 {
    let mut left = (val >> SHUFFLE_HALF_BITS) & SHUFFLE_HALF_MASK;
    let mut right = val & SHUFFLE_HALF_MASK;

    for round in 0..SHUFFLE_ROUNDS {
        let new_right = left ^ round_fn(right, round);
        left = right;
        right = new_right;
    }

    (left << SHUFFLE_HALF_BITS) | right
}

fn feistel_decrypt(val: u64) -> u64 {
    let mut left = (val >> SHUFFLE_HALF_BITS) & SHUFFLE_HALF_MASK;
    let mut right = val & SHUFFLE_HALF_MASK;

    for round in (0..SHUFFLE_ROUNDS).rev() {
        let new_left = right ^ round_fn(left, round);
        right = left;
        left = new_left;
    }

    (left << SHUFFLE_HALF_BITS) | right
}

fn cycle_walk(idx: u64, step: fn(u64) -> u64) -> Result<u64, Q3mError> {
    let mut result = step(idx);
    for _ in 0..MAX_CYCLE_WALK {
        if result < TOTAL_CELLS {
            return Ok(result);
        }
        result = step(result);
    }
    Err(Q3mError::CycleWalkExceeded(idx))
}

/// Scrambles a cell index into a shuffled index, both in `[0, TOTAL_CELLS)`.
///
/// # Example
/// ```
/// use q3m_rs::{shuffle, unshuffle};
///
/// # fn main() -> Result<(), q3m_rs::Q3mError> {
/// let s = shuffle(42)?;
/// assert_eq!(unshuffle(s)?, 42);
/// # Ok(())
/// # }
/// ```
pub fn shuffle(idx: u64) -> Result<u64, Q3mError> {
    cycle_walk(idx, feistel_encrypt)
}

/// Inverse of [`shuffle`].
pub fn unshuffle(idx: u64) -> Result<u64, Q3mError> {
    cycle_walk(idx, feistel_decrypt)
}
