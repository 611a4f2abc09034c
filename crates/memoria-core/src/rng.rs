//! Deterministic random number generator
//!
//! Uses a simple xorshift64 algorithm for reproducibility across platforms.
//! The same seed always produces the same board arrangement.

use serde::{Deserialize, Serialize};

/// A deterministic random number generator
///
/// Uses xorshift64 for simplicity and reproducibility.
/// Never use std::random or other non-deterministic sources in game logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRng {
    state: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        // Ensure non-zero state (xorshift requires this)
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate the next raw u64 value
    pub fn next_u64(&mut self) -> u64 {
        // xorshift64 algorithm
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Generate a random index in `0..bound`
    ///
    /// `bound` must be greater than zero.
    pub fn gen_index(&mut self, bound: usize) -> usize {
        (self.next_u64() as usize) % bound
    }

    /// Shuffle a slice in place (Fisher-Yates)
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.gen_index(i + 1);
            slice.swap(i, j);
        }
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}
