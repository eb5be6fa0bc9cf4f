//! A framework for symmetric cryptography primitives.

#![no_std]

mod hasher;
mod permutation;

pub use hasher::*;
pub use permutation::*;
