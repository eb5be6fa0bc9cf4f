use crate::constants::NUM_ROUNDS;
use crate::state::KeccakState;
use crate::steps::{chi, iota, pi, rho, theta};

/// One Keccak-f round: theta, rho, pi, chi, then iota with the constant for `round`.
///
/// # Panics
/// Panics if `round >= NUM_ROUNDS`.
#[must_use]
#[inline]
pub fn round(state: KeccakState, round: usize) -> KeccakState {
    iota(chi(pi(rho(theta(state)))), round)
}

/// Applies rounds `0..num_rounds`.
///
/// # Panics
/// Panics if `num_rounds > NUM_ROUNDS`.
#[must_use]
pub fn keccak_rounds(state: KeccakState, num_rounds: usize) -> KeccakState {
    assert!(
        num_rounds <= NUM_ROUNDS,
        "Keccak-f[1600] has {NUM_ROUNDS} rounds, {num_rounds} requested"
    );
    (0..num_rounds).fold(state, round)
}

/// The full 24-round Keccak-f[1600] permutation.
#[must_use]
pub fn keccak_f(state: KeccakState) -> KeccakState {
    keccak_rounds(state, NUM_ROUNDS)
}
