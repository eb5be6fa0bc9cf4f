use alloc::vec;
use alloc::vec::Vec;

use ks_symmetric::CryptographicHasher;
use tracing::instrument;

use crate::error::Sha3Result;
use crate::padding::PaddedBlock;
use crate::params::{DigestLength, DigestParams};
use crate::sponge::Sponge;

/// SHA-3 with a digest length chosen at runtime.
///
/// Messages of any length are accepted: every full rate block is absorbed as is, and the
/// remaining tail (possibly empty) is padded into one final block.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Sha3 {
    params: DigestParams,
}

impl Sha3 {
    #[must_use]
    pub const fn new(digest_length: DigestLength) -> Self {
        Self {
            params: DigestParams::new(digest_length),
        }
    }

    /// Validates `bits` before any hashing can happen.
    pub fn from_bits(bits: u32) -> Sha3Result<Self> {
        DigestParams::from_bits(bits).map(|params| Self { params })
    }

    #[must_use]
    pub const fn params(&self) -> &DigestParams {
        &self.params
    }

    #[must_use]
    pub fn hash(&self, message: &[u8]) -> Vec<u8> {
        let mut digest = vec![0; self.params.digest_bytes()];
        self.hash_into(message, &mut digest);
        digest
    }

    /// Writes the digest of `message` into `digest`, which must be exactly one digest long.
    #[instrument(
        name = "sha3 hash",
        level = "debug",
        skip_all,
        fields(digest_bits = self.params.digest_bits(), len = message.len())
    )]
    pub(crate) fn hash_into(&self, message: &[u8], digest: &mut [u8]) {
        let rate_bytes = self.params.rate_bytes();
        let mut sponge = Sponge::new(self.params);

        let mut blocks = message.chunks_exact(rate_bytes);
        for block in &mut blocks {
            sponge.absorb_unchecked(block);
        }

        let last = PaddedBlock::new_unchecked(blocks.remainder(), rate_bytes);
        sponge.absorb_unchecked(&last.to_lane_bytes());
        sponge.finalize_into(digest);
    }
}

impl CryptographicHasher<u8, Vec<u8>> for Sha3 {
    fn hash_iter<I>(&self, input: I) -> Vec<u8>
    where
        I: IntoIterator<Item = u8>,
    {
        let input = input.into_iter().collect::<Vec<_>>();
        self.hash(&input)
    }

    fn hash_iter_slices<'a, I>(&self, input: I) -> Vec<u8>
    where
        I: IntoIterator<Item = &'a [u8]>,
    {
        let input = input.into_iter().flatten().copied().collect::<Vec<_>>();
        self.hash(&input)
    }

    fn hash_slice(&self, input: &[u8]) -> Vec<u8> {
        self.hash(input)
    }
}

macro_rules! fixed_sha3 {
    ($name:ident, $length:expr, $bytes:literal, $doc:literal) => {
        #[doc = $doc]
        #[derive(Copy, Clone, Debug, Default)]
        pub struct $name;

        impl $name {
            pub const DIGEST_LENGTH: DigestLength = $length;
        }

        impl CryptographicHasher<u8, [u8; $bytes]> for $name {
            fn hash_iter<I>(&self, input: I) -> [u8; $bytes]
            where
                I: IntoIterator<Item = u8>,
            {
                let input = input.into_iter().collect::<Vec<_>>();
                self.hash_slice(&input)
            }

            fn hash_iter_slices<'a, I>(&self, input: I) -> [u8; $bytes]
            where
                I: IntoIterator<Item = &'a [u8]>,
            {
                let input = input.into_iter().flatten().copied().collect::<Vec<_>>();
                self.hash_slice(&input)
            }

            fn hash_slice(&self, input: &[u8]) -> [u8; $bytes] {
                let mut digest = [0; $bytes];
                Sha3::new(Self::DIGEST_LENGTH).hash_into(input, &mut digest);
                digest
            }
        }
    };
}

fixed_sha3!(Sha3_224, DigestLength::Sha3_224, 28, "The SHA3-224 hash function.");
fixed_sha3!(Sha3_256, DigestLength::Sha3_256, 32, "The SHA3-256 hash function.");
fixed_sha3!(Sha3_384, DigestLength::Sha3_384, 48, "The SHA3-384 hash function.");
fixed_sha3!(Sha3_512, DigestLength::Sha3_512, 64, "The SHA3-512 hash function.");
