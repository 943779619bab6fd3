//! Bit-exact software model of a word-serial Montgomery RSA accelerator
//! datapath.
//!
//! The accelerator iterates a high-radix (w = 32) MonPro/REDC loop over
//! fixed 256-bit registers; exponents are decomposed into Variable-Length
//! Non-zero-Window (VLNW) schedules that a hardware controller executes,
//! and precomputed schedules are loaded into the controller through a
//! fixed three-register wire format. This crate models that datapath
//! word-for-word so register traces can be diffed against RTL simulation:
//!
//! - [`Unsigned`]: fixed-capacity word arrays standing in for the
//!   register file (no dynamically sized integers anywhere),
//! - [`Modulus`] / [`Montgomery`] / [`monpro`]: the per-key context and
//!   the word-serial multiply-reduce,
//! - [`vlnw_schedule`] / [`Schedule`]: exponent decomposition,
//! - [`OddPowerTable`] and [`pow_vlnw`]: precompute and the sequencer,
//! - [`RegisterImage`]: the bit-exact schedule loading format,
//! - [`PublicKey`] / [`PrivateKey`]: the RSA boundary on top.
//!
//! Key generation, padding, and message encoding are external
//! collaborators; the model consumes already-valid integers.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod arithmetic;
pub use arithmetic::{mod_inverse, monpro, Modulus, Montgomery};
mod digit;
pub use digit::{Digit, DIGIT_BITS};
mod error;
pub use error::{Error, Result};
mod exponent;
pub use exponent::{pow_vlnw, PowOutput};
mod key;
pub use key::{PrivateKey, PublicKey};
mod numbers;
pub use numbers::{BigEndian, Unsigned};
mod powers;
pub use powers::OddPowerTable;
mod registers;
pub use registers::{RegisterImage, REGISTER_BITS, REGISTER_COUNT};
mod schedule;
pub use schedule::{vlnw_schedule, Schedule, Window};

#[cfg(test)]
mod fixtures;

/// Maximal nonzero-window width of the deployment. The register format's
/// 4-bit value and 2-bit length fields are sized for this.
pub const WINDOW_BITS: usize = 4;

/// The 256-bit deployment: eight datapath words.
pub type Uint256 = Unsigned<8>;
