//! The Keccak-f[1600] permutation, built from individually addressable step mappings.

#![no_std]

mod constants;
mod round;
mod state;
mod steps;
#[cfg(test)]
mod test_vectors;

pub use constants::*;
pub use round::*;
pub use state::*;
pub use steps::*;

use ks_symmetric::{CryptographicPermutation, Permutation, RoundPermutation};

/// The Keccak-f[1600] permutation.
#[derive(Copy, Clone, Debug, Default)]
pub struct KeccakF;

impl Permutation<KeccakState> for KeccakF {
    fn permute(&self, input: KeccakState) -> KeccakState {
        keccak_f(input)
    }

    fn permute_mut(&self, input: &mut KeccakState) {
        *input = keccak_f(*input);
    }
}

impl CryptographicPermutation<KeccakState> for KeccakF {}

impl RoundPermutation<KeccakState> for KeccakF {
    const NUM_ROUNDS: usize = NUM_ROUNDS;

    fn permute_rounds(&self, input: KeccakState, rounds: usize) -> KeccakState {
        keccak_rounds(input, rounds)
    }
}

impl Permutation<[u64; NUM_LANES]> for KeccakF {
    fn permute_mut(&self, input: &mut [u64; NUM_LANES]) {
        *input = keccak_f(KeccakState::from_lanes(*input)).into_lanes();
    }
}

impl CryptographicPermutation<[u64; NUM_LANES]> for KeccakF {}
