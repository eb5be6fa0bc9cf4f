use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use ks_keccak::{KeccakF, KeccakState};
use ks_symmetric::CryptographicPermutation;
use tracing::{debug, trace};

use crate::error::{Sha3Error, Sha3Result};
use crate::padding::PaddedBlock;
use crate::params::DigestParams;

/// Where a [`Sponge`] is in its lifecycle.
///
/// A sponge starts out absorbing. The first squeeze moves it to squeezing, and producing the
/// digest moves it to done, after which only [`Sponge::reset`] makes it usable again.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SpongePhase {
    Absorbing,
    Squeezing,
    Done,
}

impl fmt::Display for SpongePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Absorbing => "absorbing",
            Self::Squeezing => "squeezing",
            Self::Done => "done",
        })
    }
}

/// XORs one rate block into the front of the state and permutes.
fn absorb_rate_block<P>(permutation: &P, state: &mut KeccakState, block: &[u8])
where
    P: CryptographicPermutation<KeccakState>,
{
    state.xor_bytes(block);
    permutation.permute_mut(state);
}

/// Fills `out` from the rate region, continuing at `offset` within the current rate.
///
/// The state is permuted whenever the rate has been fully read and more output is needed.
fn squeeze_rate<P>(
    permutation: &P,
    state: &mut KeccakState,
    offset: &mut usize,
    rate_bytes: usize,
    out: &mut [u8],
) where
    P: CryptographicPermutation<KeccakState>,
{
    let mut written = 0;
    while written < out.len() {
        if *offset == rate_bytes {
            trace!("rate exhausted, permuting for more output");
            permutation.permute_mut(state);
            *offset = 0;
        }

        let take = (rate_bytes - *offset).min(out.len() - written);
        let bytes = state.to_bytes();
        out[written..written + take].copy_from_slice(&bytes[*offset..*offset + take]);

        written += take;
        *offset += take;
    }
}

fn check_block_len(block: &[u8], params: &DigestParams) -> Sha3Result<()> {
    let rate_bytes = params.rate_bytes();
    if block.len() != rate_bytes {
        return Err(Sha3Error::BlockLength {
            len: block.len(),
            rate_bytes,
        });
    }
    Ok(())
}

/// XORs a rate-sized block of raw message bytes into the rate region of `state`, then
/// applies Keccak-f.
///
/// Use this for the full, unpadded blocks of a long message. The output of
/// [`pad`](crate::pad) goes through [`absorb_padded`] instead.
pub fn absorb_block(
    mut state: KeccakState,
    params: &DigestParams,
    block: &[u8],
) -> Sha3Result<KeccakState> {
    check_block_len(block, params)?;
    absorb_rate_block(&KeccakF, &mut state, block);
    Ok(state)
}

/// Absorbs the final, padded block of a message.
///
/// Fails with [`Sha3Error::BlockLength`] if `block` was padded for a different rate.
pub fn absorb_padded(
    state: KeccakState,
    params: &DigestParams,
    block: &PaddedBlock,
) -> Sha3Result<KeccakState> {
    absorb_block(state, params, &block.to_lane_bytes())
}

/// Reads the digest for `params` out of a state that has absorbed its final block.
#[must_use]
pub fn squeeze(state: KeccakState, params: &DigestParams) -> Vec<u8> {
    squeeze_bytes(state, params, params.digest_bytes())
}

/// Reads `len` output bytes, permuting again after every `rate_bytes` of output.
#[must_use]
pub fn squeeze_bytes(mut state: KeccakState, params: &DigestParams, len: usize) -> Vec<u8> {
    let mut out = vec![0; len];
    squeeze_rate(&KeccakF, &mut state, &mut 0, params.rate_bytes(), &mut out);
    out
}

/// A sponge over a 1600-bit permutation, with the rate/capacity split of one digest length.
///
/// The sponge owns its state exclusively; hashing independent messages concurrently needs
/// one sponge each.
#[derive(Clone, Debug)]
pub struct Sponge<P = KeccakF> {
    permutation: P,
    params: DigestParams,
    state: KeccakState,
    phase: SpongePhase,
    /// Bytes of the current rate already handed out while squeezing.
    squeeze_offset: usize,
}

impl Sponge<KeccakF> {
    pub fn new(params: DigestParams) -> Self {
        Self::with_permutation(KeccakF, params)
    }
}

impl<P> Sponge<P>
where
    P: CryptographicPermutation<KeccakState>,
{
    pub fn with_permutation(permutation: P, params: DigestParams) -> Self {
        debug!(
            rate_bits = params.rate_bits(),
            capacity_bits = params.capacity_bits(),
            digest_bits = params.digest_bits(),
            "sponge initialized"
        );
        Self {
            permutation,
            params,
            state: KeccakState::new(),
            phase: SpongePhase::Absorbing,
            squeeze_offset: 0,
        }
    }

    #[must_use]
    pub const fn params(&self) -> &DigestParams {
        &self.params
    }

    #[must_use]
    pub const fn phase(&self) -> SpongePhase {
        self.phase
    }

    #[must_use]
    pub const fn state(&self) -> &KeccakState {
        &self.state
    }

    fn ensure_phase(&self, allowed: &[SpongePhase], operation: &'static str) -> Sha3Result<()> {
        if allowed.contains(&self.phase) {
            Ok(())
        } else {
            Err(Sha3Error::InvalidPhase {
                phase: self.phase,
                operation,
            })
        }
    }

    /// Absorbs one rate-sized block of lane bytes.
    pub fn absorb_block(&mut self, block: &[u8]) -> Sha3Result<()> {
        self.ensure_phase(&[SpongePhase::Absorbing], "absorb")?;
        check_block_len(block, &self.params)?;
        self.absorb_unchecked(block);
        Ok(())
    }

    /// Absorbs a padded final block.
    pub fn absorb_padded(&mut self, block: &PaddedBlock) -> Sha3Result<()> {
        self.absorb_block(&block.to_lane_bytes())
    }

    pub(crate) fn absorb_unchecked(&mut self, block: &[u8]) {
        trace!(len = block.len(), "absorbing rate block");
        absorb_rate_block(&self.permutation, &mut self.state, block);
    }

    /// Squeezes the next `out.len()` bytes of output.
    ///
    /// Consecutive calls continue the same output stream.
    pub fn squeeze_into(&mut self, out: &mut [u8]) -> Sha3Result<()> {
        self.ensure_phase(&[SpongePhase::Absorbing, SpongePhase::Squeezing], "squeeze")?;
        self.squeeze_unchecked(out);
        Ok(())
    }

    /// Squeezes the next `len` bytes of an open-ended output stream.
    ///
    /// The sponge stays in [`SpongePhase::Squeezing`]; use [`Self::squeeze_final`] or
    /// [`Self::finalize`] to finish it.
    pub fn squeeze(&mut self, len: usize) -> Sha3Result<Vec<u8>> {
        let mut out = vec![0; len];
        self.squeeze_into(&mut out)?;
        Ok(out)
    }

    /// Squeezes the last `len` bytes of output and finishes the sponge.
    ///
    /// Unlike [`Self::finalize`] this may follow earlier squeezes and may ask for any length.
    pub fn squeeze_final(&mut self, len: usize) -> Sha3Result<Vec<u8>> {
        let out = self.squeeze(len)?;
        self.phase = SpongePhase::Done;
        Ok(out)
    }

    fn squeeze_unchecked(&mut self, out: &mut [u8]) {
        self.phase = SpongePhase::Squeezing;
        squeeze_rate(
            &self.permutation,
            &mut self.state,
            &mut self.squeeze_offset,
            self.params.rate_bytes(),
            out,
        );
    }

    /// Squeezes exactly one digest and finishes the sponge.
    ///
    /// Only valid straight after absorbing; a digest never overlaps output already squeezed.
    pub fn finalize(&mut self) -> Sha3Result<Vec<u8>> {
        self.ensure_phase(&[SpongePhase::Absorbing], "finalize")?;
        let mut digest = vec![0; self.params.digest_bytes()];
        self.finalize_into(&mut digest);
        Ok(digest)
    }

    pub(crate) fn finalize_into(&mut self, digest: &mut [u8]) {
        debug_assert_eq!(digest.len(), self.params.digest_bytes());
        self.squeeze_unchecked(digest);
        self.phase = SpongePhase::Done;
    }

    /// Zeroes the state so the sponge can take a new message.
    pub fn reset(&mut self) {
        self.state = KeccakState::new();
        self.phase = SpongePhase::Absorbing;
        self.squeeze_offset = 0;
    }
}
