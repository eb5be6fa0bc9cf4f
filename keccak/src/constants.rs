/// Number of rounds in Keccak-f[1600].
pub const NUM_ROUNDS: usize = 24;

/// Number of 64-bit lanes in the state.
pub const NUM_LANES: usize = 25;

/// Width of a lane in bytes.
pub const LANE_BYTES: usize = 8;

/// Width of the state in bytes.
pub const STATE_BYTES: usize = NUM_LANES * LANE_BYTES;

/// Width of the state in bits. This is the `b` of Keccak-f[b].
pub const STATE_BITS: usize = STATE_BYTES * 8;

/// Round constants, XORed into lane `(0, 0)` by iota.
pub const RC: [u64; NUM_ROUNDS] = [
    0x0000000000000001,
    0x0000000000008082,
    0x800000000000808A,
    0x8000000080008000,
    0x000000000000808B,
    0x0000000080000001,
    0x8000000080008081,
    0x8000000000008009,
    0x000000000000008A,
    0x0000000000000088,
    0x0000000080008009,
    0x000000008000000A,
    0x000000008000808B,
    0x800000000000008B,
    0x8000000000008089,
    0x8000000000008003,
    0x8000000000008002,
    0x8000000000000080,
    0x000000000000800A,
    0x800000008000000A,
    0x8000000080008081,
    0x8000000000008080,
    0x0000000080000001,
    0x8000000080008008,
];

/// Rotation offsets used by rho, indexed as `RHO_OFFSETS[x][y]`.
pub const RHO_OFFSETS: [[u32; 5]; 5] = [
    [0, 36, 3, 41, 18],
    [1, 44, 10, 45, 2],
    [62, 6, 43, 15, 61],
    [28, 55, 25, 21, 56],
    [27, 20, 39, 8, 14],
];
