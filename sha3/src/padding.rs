//! SHA-3 domain-separated padding for the final, sub-rate block of a message.
//!
//! The marker bytes are written in FIPS 202 bit-string order, where the first bit of the
//! string is the most significant bit of the byte: `0110_0000` is the domain suffix `01`
//! followed by the opening `1` of `pad10*1`, and `0000_0001` is its closing `1`. Lanes load
//! bytes least significant bit first, so [`PaddedBlock::to_lane_bytes`] reflects the pad bytes
//! before a block is absorbed. Message bytes are never touched.

use alloc::vec;
use alloc::vec::Vec;

use crate::error::{Sha3Error, Sha3Result};
use crate::params::DigestParams;

/// First pad byte: the domain bits and the opening pad bit.
pub const PAD_MARKER_START: u8 = 0x60;

/// Last pad byte: the closing pad bit.
pub const PAD_MARKER_END: u8 = 0x01;

/// Both markers in one byte, used when the message leaves exactly one free byte.
pub const PAD_MARKER_SINGLE: u8 = PAD_MARKER_START | PAD_MARKER_END;

/// A rate-sized block holding a message followed by its padding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaddedBlock {
    bytes: Vec<u8>,
    message_len: usize,
}

impl PaddedBlock {
    /// Pads `message`, which the caller guarantees is shorter than `rate_bytes`.
    pub(crate) fn new_unchecked(message: &[u8], rate_bytes: usize) -> Self {
        debug_assert!(message.len() < rate_bytes);

        let message_len = message.len();
        let mut bytes = vec![0; rate_bytes];
        bytes[..message_len].copy_from_slice(message);

        if message_len + 1 == rate_bytes {
            bytes[message_len] = PAD_MARKER_SINGLE;
        } else {
            bytes[message_len] = PAD_MARKER_START;
            bytes[rate_bytes - 1] = PAD_MARKER_END;
        }

        Self { bytes, message_len }
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Number of leading message bytes; everything after them is padding.
    ///
    /// The block itself is always exactly one rate long.
    #[must_use]
    pub const fn message_len(&self) -> usize {
        self.message_len
    }

    /// The block as it is XORed into the state, with the pad bytes in lane bit order.
    #[must_use]
    pub fn to_lane_bytes(&self) -> Vec<u8> {
        let mut bytes = self.bytes.clone();
        for byte in &mut bytes[self.message_len..] {
            *byte = byte.reverse_bits();
        }
        bytes
    }
}

/// Pads a message shorter than one rate block into exactly one rate block.
///
/// Splitting longer messages into blocks is up to the caller; a message of `rate_bytes` or
/// more is rejected rather than truncated.
pub fn pad(message: &[u8], params: &DigestParams) -> Sha3Result<PaddedBlock> {
    let rate_bytes = params.rate_bytes();
    if message.len() >= rate_bytes {
        return Err(Sha3Error::BlockTooLong {
            len: message.len(),
            rate_bytes,
        });
    }
    Ok(PaddedBlock::new_unchecked(message, rate_bytes))
}
