//! Modular arithmetic for odd fixed-width moduli.
//!
//! The [`Modulus`] context is constructed once per key and carries the
//! derived word constant $n_0' = -(n \bmod 2^{32})^{-1} \bmod 2^{32}$ the
//! reducer is loaded with. Values in the Montgomery domain are tagged by
//! the [`Montgomery`] type, which borrows its context: the two domains
//! cannot be mixed, and conversion only happens through
//! [`Modulus::to_montgomery`] and [`Montgomery::retrieve`].

use zeroize::Zeroize;

use crate::{Digit, Error, Result, Unsigned};

mod add;
mod invert;
mod montgomery;
mod subtract;

pub use invert::mod_inverse;
pub use montgomery::monpro;

pub(crate) use add::add_assign_carry;

/// Immutable per-key context: an odd modulus and its word constant.
///
/// The modulus is bounded by $2^{32L}$ by construction (it lives in `L`
/// datapath words); oddness and nonzeroness are validated here, before
/// any arithmetic can run.
#[derive(Clone, Debug, Eq, PartialEq, Zeroize)]
pub struct Modulus<const L: usize> {
    n: Unsigned<L>,
    n0_prime: Digit,
}

impl<const L: usize> Modulus<L> {
    /// Validate `n` and derive $n_0'$.
    ///
    /// Fails with [`Error::InvalidModulus`] for an even or zero modulus.
    /// The inverse behind $n_0'$ exists for every odd word, so the
    /// [`Error::NoInverse`] path is the same root cause surfaced by the
    /// solver itself.
    pub fn new(n: Unsigned<L>) -> Result<Self> {
        if n.is_zero() || !n.is_odd() {
            return Err(Error::InvalidModulus);
        }
        let n0_prime = invert::n0_prime(n.words()[0])?;
        Ok(Self { n, n0_prime })
    }

    pub fn as_unsigned(&self) -> &Unsigned<L> {
        &self.n
    }

    /// $n_0'$, the digit the reducer multiplies each low word by.
    pub fn n0_prime(&self) -> Digit {
        self.n0_prime
    }

    /// Map into the Montgomery domain: $\bar{a} = a \cdot 2^{32L} \bmod n$.
    ///
    /// The caller guarantees `a < n` (checked at the message boundary).
    pub fn to_montgomery(&self, a: &Unsigned<L>) -> Montgomery<'_, L> {
        montgomery::to_montgomery(a, self)
    }

    /// Adopt a residue that is already in Montgomery representation,
    /// e.g. one read back from the hardware.
    pub fn from_raw_montgomery(&self, y: Unsigned<L>) -> Result<Montgomery<'_, L>> {
        if &y >= self.as_unsigned() {
            return Err(Error::MessageRange);
        }
        Ok(Montgomery { y, n: self })
    }
}

/// Montgomery representation of $[a]_n$, as $[a \cdot 2^{32L}]_n$.
///
/// "Montgomery multiplication" is the induced ring structure: the product
/// of two domain values through [`monpro`] stays in the domain, and the
/// reduction after each multiplication is a plain right shift instead of
/// a modular division.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Montgomery<'n, const L: usize> {
    y: Unsigned<L>,
    n: &'n Modulus<L>,
}

impl<'n, const L: usize> Montgomery<'n, L> {
    /// Leave the Montgomery domain: $\text{MonPro}(\bar{a}, 1) = a$.
    pub fn retrieve(&self) -> Unsigned<L> {
        montgomery::monpro(&self.y, &Unsigned::one(), self.n)
    }

    /// The raw register contents of the domain value.
    pub fn as_unsigned(&self) -> &Unsigned<L> {
        &self.y
    }
}

impl<const L: usize> Zeroize for Montgomery<'_, L> {
    fn zeroize(&mut self) {
        self.y.zeroize();
    }
}

/// No way of ensuring both factors share a modulus on the type level;
/// hence a runtime debug_assert instead.
impl<'l, 'n, const L: usize> core::ops::Mul for &'l Montgomery<'n, L> {
    type Output = Montgomery<'n, L>;

    fn mul(self, other: Self) -> Self::Output {
        debug_assert_eq!(self.n.as_unsigned(), other.n.as_unsigned());
        Montgomery {
            y: montgomery::monpro(&self.y, &other.y, self.n),
            n: self.n,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn modulus_validation() {
        assert_eq!(
            Modulus::new(Unsigned::<2>::from_digit(220)),
            Err(Error::InvalidModulus)
        );
        assert_eq!(Modulus::new(Unsigned::<2>::ZERO), Err(Error::InvalidModulus));
        assert!(Modulus::new(Unsigned::<2>::from_digit(221)).is_ok());
        assert!(Modulus::new(Unsigned::<2>::from_digit(1)).is_ok());
    }

    #[test]
    fn raw_montgomery_range() {
        let ctx = Modulus::new(Unsigned::<1>::from_digit(221)).unwrap();
        assert!(ctx.from_raw_montgomery(Unsigned::from_digit(220)).is_ok());
        assert_eq!(
            ctx.from_raw_montgomery(Unsigned::from_digit(221)),
            Err(Error::MessageRange)
        );
    }
}
