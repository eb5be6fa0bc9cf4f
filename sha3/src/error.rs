//! Error types for SHA-3 configuration and sponge usage.

use thiserror::Error;

use crate::sponge::SpongePhase;

/// Errors raised before or between sponge operations.
///
/// The permutation itself cannot fail; every variant is either a bad configuration or a
/// violated precondition, and retrying with the same input fails the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Sha3Error {
    /// The requested digest length is not one of the four SHA-3 lengths.
    #[error("unsupported digest length {bits}, expected one of 224, 256, 384 or 512")]
    UnsupportedDigestLength {
        /// The rejected length, in bits.
        bits: u32,
    },

    /// A message given to the single-block padding does not leave room for the pad.
    #[error("cannot pad {len} bytes into a single {rate_bytes}-byte rate block")]
    BlockTooLong {
        /// Length of the rejected message, in bytes.
        len: usize,
        /// Rate of the requested digest length, in bytes.
        rate_bytes: usize,
    },

    /// A block handed to the absorb phase is not exactly one rate long.
    #[error("expected a {rate_bytes}-byte rate block, got {len} bytes")]
    BlockLength {
        /// Length of the rejected block, in bytes.
        len: usize,
        /// Rate the block had to match, in bytes.
        rate_bytes: usize,
    },

    /// The sponge is not in a phase that allows the operation.
    #[error("cannot {operation} while the sponge is {phase}")]
    InvalidPhase {
        /// Phase the sponge was in when the operation was attempted.
        phase: SpongePhase,
        /// The refused operation, e.g. `"absorb"`.
        operation: &'static str,
    },
}

/// Result type alias for SHA-3 operations.
pub type Sha3Result<T> = core::result::Result<T, Sha3Error>;
