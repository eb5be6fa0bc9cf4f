//! The five step mappings of a Keccak-f round.
//!
//! Every step consumes a state and returns a new one. Theta is additionally split into its
//! three stages so the column parities and the per-column effect can be checked on their own.

use core::array;

use crate::constants::{NUM_LANES, NUM_ROUNDS, RC, RHO_OFFSETS};
use crate::state::KeccakState;

/// Column parities: `C[x] = A[x, 0] ^ A[x, 1] ^ A[x, 2] ^ A[x, 3] ^ A[x, 4]`.
#[must_use]
#[inline]
pub fn theta_c(state: &KeccakState) -> [u64; 5] {
    array::from_fn(|x| (0..5).fold(0, |acc, y| acc ^ state.lane(x, y)))
}

/// The theta effect: `D[x] = C[x - 1] ^ rot(C[x + 1], 1)`.
#[must_use]
#[inline]
pub fn theta_d(c: &[u64; 5]) -> [u64; 5] {
    array::from_fn(|x| c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1))
}

/// XORs `d[x]` into every lane of column `x`.
#[must_use]
#[inline]
pub fn theta_apply(state: KeccakState, d: &[u64; 5]) -> KeccakState {
    let lanes = state.lanes();
    KeccakState::from_lanes(array::from_fn(|i| lanes[i] ^ d[i % 5]))
}

#[must_use]
#[inline]
pub fn theta(state: KeccakState) -> KeccakState {
    let d = theta_d(&theta_c(&state));
    theta_apply(state, &d)
}

/// Rotates lane `(x, y)` left by `RHO_OFFSETS[x][y]`.
#[must_use]
#[inline]
pub fn rho(state: KeccakState) -> KeccakState {
    let lanes = state.lanes();
    KeccakState::from_lanes(array::from_fn(|i| {
        lanes[i].rotate_left(RHO_OFFSETS[i % 5][i / 5])
    }))
}

/// Moves lane `(x, y)` to `(y, 2x + 3y)`.
#[must_use]
#[inline]
pub fn pi(state: KeccakState) -> KeccakState {
    let mut moved = [0; NUM_LANES];
    for y in 0..5 {
        for x in 0..5 {
            moved[y + 5 * ((2 * x + 3 * y) % 5)] = state.lane(x, y);
        }
    }
    KeccakState::from_lanes(moved)
}

/// `A[x, y] ^= !A[x + 1, y] & A[x + 2, y]`, applied to the rows of the input.
#[must_use]
#[inline]
pub fn chi(state: KeccakState) -> KeccakState {
    KeccakState::from_lanes(array::from_fn(|i| {
        let (x, y) = (i % 5, i / 5);
        state.lane(x, y) ^ (!state.lane((x + 1) % 5, y) & state.lane((x + 2) % 5, y))
    }))
}

/// XORs the round constant for `round` into lane `(0, 0)`.
///
/// # Panics
/// Panics if `round >= NUM_ROUNDS`.
#[must_use]
#[inline]
pub fn iota(mut state: KeccakState, round: usize) -> KeccakState {
    assert!(round < NUM_ROUNDS, "round index {round} out of range");
    state[(0, 0)] ^= RC[round];
    state
}
