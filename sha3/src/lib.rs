//! SHA-3 as a sponge over Keccak-f[1600].
//!
//! The pieces are usable on their own: [`pad`] builds the final rate block, [`absorb_padded`]
//! (or [`absorb_block`] for full message blocks) and [`squeeze`] run the two sponge phases
//! over a [`KeccakState`], and [`digest_params`]
//! derives the rate/capacity split for a digest length. [`Sponge`] ties them together as a
//! state machine, and [`Sha3`] plus the fixed-size hashers hash whole messages.

#![no_std]

extern crate alloc;

mod error;
mod hasher;
mod padding;
mod params;
mod sponge;

pub use error::*;
pub use hasher::*;
pub use ks_keccak::KeccakState;
pub use padding::*;
pub use params::*;
pub use sponge::*;
