use core::ops::{Index, IndexMut};

use crate::constants::{LANE_BYTES, NUM_LANES, STATE_BYTES};

/// The 1600-bit Keccak state, viewed as a 5x5 grid of 64-bit lanes.
///
/// Lane `(x, y)` is stored at index `x + 5 * y`, which is also the order in which lanes appear
/// in the serialized byte form. Each lane is serialized little-endian.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct KeccakState {
    lanes: [u64; NUM_LANES],
}

#[inline]
const fn lane_index(x: usize, y: usize) -> usize {
    assert!(x < 5 && y < 5, "lane coordinates out of range");
    x + 5 * y
}

impl KeccakState {
    /// The all-zero state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lanes: [0; NUM_LANES],
        }
    }

    #[must_use]
    pub const fn from_lanes(lanes: [u64; NUM_LANES]) -> Self {
        Self { lanes }
    }

    #[must_use]
    pub const fn into_lanes(self) -> [u64; NUM_LANES] {
        self.lanes
    }

    #[must_use]
    pub const fn lanes(&self) -> &[u64; NUM_LANES] {
        &self.lanes
    }

    /// Returns lane `(x, y)`.
    ///
    /// # Panics
    /// Panics if `x` or `y` is not in `0..5`.
    #[must_use]
    #[inline]
    pub const fn lane(&self, x: usize, y: usize) -> u64 {
        self.lanes[lane_index(x, y)]
    }

    #[inline]
    pub fn set_lane(&mut self, x: usize, y: usize, value: u64) {
        self.lanes[lane_index(x, y)] = value;
    }

    /// Builds a state from its 200-byte serialization.
    #[must_use]
    pub fn from_bytes(bytes: &[u8; STATE_BYTES]) -> Self {
        let mut state = Self::new();
        state.xor_bytes(bytes);
        state
    }

    /// Serializes the state, lane `(0, 0)` first, each lane little-endian.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; STATE_BYTES] {
        let mut bytes = [0; STATE_BYTES];
        self.read_bytes(&mut bytes);
        bytes
    }

    /// XORs `bytes` into the serialized state starting at byte 0.
    ///
    /// A trailing partial lane only touches its low-order bytes.
    ///
    /// # Panics
    /// Panics if `bytes` is longer than the state.
    pub fn xor_bytes(&mut self, bytes: &[u8]) {
        assert!(
            bytes.len() <= STATE_BYTES,
            "cannot XOR {} bytes into a {STATE_BYTES}-byte state",
            bytes.len()
        );
        for (lane, chunk) in self.lanes.iter_mut().zip(bytes.chunks(LANE_BYTES)) {
            let mut buf = [0; LANE_BYTES];
            buf[..chunk.len()].copy_from_slice(chunk);
            *lane ^= u64::from_le_bytes(buf);
        }
    }

    /// Copies the first `out.len()` bytes of the serialized state into `out`.
    ///
    /// # Panics
    /// Panics if `out` is longer than the state.
    pub fn read_bytes(&self, out: &mut [u8]) {
        assert!(
            out.len() <= STATE_BYTES,
            "cannot read {} bytes from a {STATE_BYTES}-byte state",
            out.len()
        );
        for (chunk, lane) in out.chunks_mut(LANE_BYTES).zip(self.lanes.iter()) {
            let len = chunk.len();
            chunk.copy_from_slice(&lane.to_le_bytes()[..len]);
        }
    }
}

impl From<[u64; NUM_LANES]> for KeccakState {
    fn from(lanes: [u64; NUM_LANES]) -> Self {
        Self::from_lanes(lanes)
    }
}

impl From<KeccakState> for [u64; NUM_LANES] {
    fn from(state: KeccakState) -> Self {
        state.into_lanes()
    }
}

impl Index<(usize, usize)> for KeccakState {
    type Output = u64;

    fn index(&self, (x, y): (usize, usize)) -> &u64 {
        &self.lanes[lane_index(x, y)]
    }
}

impl IndexMut<(usize, usize)> for KeccakState {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut u64 {
        &mut self.lanes[lane_index(x, y)]
    }
}
