//! Modular inverses.
//!
//! The only inverse the datapath ever needs is word-sized: once per key,
//! $n_0' = -(n \bmod 2^{32})^{-1} \bmod 2^{32}$ is derived and loaded next
//! to the modulus. The solver is nevertheless a general `a^{-1} mod m`,
//! since it is also the place where an unusable modulus surfaces.

use crate::{Digit, DIGIT_BITS, Error, Result};

/// Inverse of `a` modulo `m`: the unique `x` in `[0, m)` with
/// $a \cdot x \equiv 1 \pmod m$.
///
/// Iterative extended Euclidean algorithm (loop instead of recursion, so
/// the depth is independent of the operand widths). Fails with
/// [`Error::NoInverse`] when $\gcd(a, m) \ne 1$ — e.g. an even word
/// against a power of two, or `a == 0`.
pub fn mod_inverse(a: u64, m: u64) -> Result<u64> {
    if m == 0 {
        return Err(Error::NoInverse);
    }

    let (mut r0, mut r1) = (m as i128, (a % m) as i128);
    let (mut t0, mut t1) = (0i128, 1i128);

    while r1 != 0 {
        let quotient = r0 / r1;
        let remainder = r0 - quotient * r1;
        r0 = r1;
        r1 = remainder;
        let coefficient = t0 - quotient * t1;
        t0 = t1;
        t1 = coefficient;
    }

    if r0 != 1 {
        return Err(Error::NoInverse);
    }
    Ok(t0.rem_euclid(m as i128) as u64)
}

/// $n_0' = -n_0^{-1} \bmod 2^{32}$ for the low modulus word $n_0$.
///
/// This is the digit the reducer multiplies each low accumulator word by
/// to make the subsequent right shift exact.
pub(crate) fn n0_prime(n0: Digit) -> Result<Digit> {
    let two_to_the_w = 1u64 << DIGIT_BITS;
    let inverse = mod_inverse(n0 as u64, two_to_the_w)?;
    Ok(((two_to_the_w - inverse) % two_to_the_w) as Digit)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn small_inverses() {
        assert_eq!(mod_inverse(3, 10), Ok(7));
        assert_eq!(mod_inverse(17, 3120), Ok(2753));
        assert_eq!(mod_inverse(1, 1), Ok(0));

        for a in (1u64..200).step_by(2) {
            let inverse = mod_inverse(a, 256).unwrap();
            assert_eq!((a * inverse) % 256, 1);
        }
    }

    #[test]
    fn no_inverse() {
        assert_eq!(mod_inverse(2, 4), Err(Error::NoInverse));
        assert_eq!(mod_inverse(6, 9), Err(Error::NoInverse));
        assert_eq!(mod_inverse(0, 7), Err(Error::NoInverse));
        assert_eq!(mod_inverse(5, 0), Err(Error::NoInverse));
    }

    #[test]
    fn word_constant() {
        // low word of the bring-up modulus, constant from the hardware trace
        assert_eq!(n0_prime(0xf8ff768d), Ok(0x8833c3bb));

        for n0 in [1u32, 3, 0xffff_ffff, 0x1000_0001] {
            let n0p = n0_prime(n0).unwrap();
            // n · n0' ≡ -1 (mod 2^32)
            assert_eq!(n0.wrapping_mul(n0p), Digit::MAX);
        }

        assert_eq!(n0_prime(0x8000_0000), Err(Error::NoInverse));
    }
}
