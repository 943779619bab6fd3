//! The datapath word.
//!
//! The modeled accelerator carries a 32-bit multiplier, so the radix is
//! fixed at $w = 32$: the `n0'` constant, the per-iteration right shift of
//! the reducer and the schedule register fields are all sized against this
//! width. A switchable digit would silently change $R$ and the wire
//! format, so unlike a general bignum library there is no 64-bit option.

/// A word of the hardware datapath. [`Unsigned`](crate::Unsigned) is
/// composed of many digits.
pub type Digit = u32;

/// Unsigned type with twice as many bits as [`Digit`], wide enough for a
/// digit product plus two digit-sized addends.
pub(crate) type DoubleDigit = u64;

/// Signed counterpart of [`DoubleDigit`], for borrow chains.
pub(crate) type SignedDoubleDigit = i64;

/// Bits per digit.
pub const DIGIT_BITS: usize = Digit::BITS as usize;
