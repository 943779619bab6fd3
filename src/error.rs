//! Error types.
//!
//! Every failure in this crate is terminal for the call that raised it:
//! all inputs are pure values, so there is no transient class and no
//! retry policy. Nothing is silently recovered.

use core::fmt;

/// Failure kinds surfaced by the datapath model.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// Modulus is even or zero, hence unusable as a Montgomery modulus.
    /// Raised at context construction, before any arithmetic.
    InvalidModulus,
    /// The word-width inverse used to derive `n0'` does not exist
    /// (`gcd(a, m) != 1`). Same root cause as [`Error::InvalidModulus`],
    /// surfaced during setup.
    NoInverse,
    /// Message or ciphertext is not strictly below the modulus.
    MessageRange,
    /// A window violates the VLNW invariants (even nonzero value, value
    /// out of range, or a zero window longer than one bit). Unreachable
    /// from a correct scheduler; indicates a logic defect, not bad input.
    InvalidWindow,
    /// Schedule has too many entries or payload bits for the fixed
    /// three-register layout.
    CapacityExceeded,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidModulus => f.write_str("modulus must be odd and nonzero"),
            Error::NoInverse => f.write_str("no modular inverse exists"),
            Error::MessageRange => f.write_str("value not below the modulus"),
            Error::InvalidWindow => f.write_str("window violates VLNW invariants"),
            Error::CapacityExceeded => f.write_str("schedule exceeds register capacity"),
        }
    }
}

impl core::error::Error for Error {}

/// [`Error`] or success.
pub type Result<T> = core::result::Result<T, Error>;
