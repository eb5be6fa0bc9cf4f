use core::fmt;

use ks_keccak::{STATE_BITS, STATE_BYTES};
use serde::{Deserialize, Serialize};

use crate::error::{Sha3Error, Sha3Result};

/// One of the four SHA-3 output lengths.
///
/// Serializes as the bit length, and refuses to deserialize any other integer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum DigestLength {
    Sha3_224,
    Sha3_256,
    Sha3_384,
    Sha3_512,
}

impl DigestLength {
    pub const ALL: [Self; 4] = [Self::Sha3_224, Self::Sha3_256, Self::Sha3_384, Self::Sha3_512];

    #[must_use]
    pub const fn bits(self) -> u32 {
        match self {
            Self::Sha3_224 => 224,
            Self::Sha3_256 => 256,
            Self::Sha3_384 => 384,
            Self::Sha3_512 => 512,
        }
    }

    #[must_use]
    pub const fn bytes(self) -> usize {
        self.bits() as usize / 8
    }
}

impl TryFrom<u32> for DigestLength {
    type Error = Sha3Error;

    fn try_from(bits: u32) -> Sha3Result<Self> {
        match bits {
            224 => Ok(Self::Sha3_224),
            256 => Ok(Self::Sha3_256),
            384 => Ok(Self::Sha3_384),
            512 => Ok(Self::Sha3_512),
            _ => Err(Sha3Error::UnsupportedDigestLength { bits }),
        }
    }
}

impl From<DigestLength> for u32 {
    fn from(length: DigestLength) -> Self {
        length.bits()
    }
}

impl fmt::Display for DigestLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SHA3-{}", self.bits())
    }
}

/// The rate/capacity split of the 1600-bit state for one digest length.
///
/// The capacity is twice the digest length and the rate is whatever remains, so
/// `rate_bits() + capacity_bits() == 1600` always holds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DigestParams {
    digest_length: DigestLength,
    rate_bits: usize,
    capacity_bits: usize,
}

impl DigestParams {
    #[must_use]
    pub const fn new(digest_length: DigestLength) -> Self {
        let capacity_bits = 2 * digest_length.bits() as usize;
        Self {
            digest_length,
            rate_bits: STATE_BITS - capacity_bits,
            capacity_bits,
        }
    }

    /// Validates `bits` and derives the split for it.
    pub fn from_bits(bits: u32) -> Sha3Result<Self> {
        DigestLength::try_from(bits).map(Self::new)
    }

    #[must_use]
    pub const fn digest_length(&self) -> DigestLength {
        self.digest_length
    }

    #[must_use]
    pub const fn digest_bits(&self) -> u32 {
        self.digest_length.bits()
    }

    #[must_use]
    pub const fn digest_bytes(&self) -> usize {
        self.digest_length.bytes()
    }

    #[must_use]
    pub const fn rate_bits(&self) -> usize {
        self.rate_bits
    }

    #[must_use]
    pub const fn rate_bytes(&self) -> usize {
        self.rate_bits / 8
    }

    #[must_use]
    pub const fn capacity_bits(&self) -> usize {
        self.capacity_bits
    }

    #[must_use]
    pub const fn capacity_bytes(&self) -> usize {
        self.capacity_bits / 8
    }

    /// Always 200: the digest length moves the rate/capacity boundary, never the state size.
    #[must_use]
    pub const fn state_size_bytes(&self) -> usize {
        STATE_BYTES
    }
}

impl From<DigestLength> for DigestParams {
    fn from(digest_length: DigestLength) -> Self {
        Self::new(digest_length)
    }
}

/// Maps a digest length in bits to its rate/capacity split, rejecting unsupported lengths.
pub fn digest_params(bits: u32) -> Sha3Result<DigestParams> {
    DigestParams::from_bits(bits)
}
