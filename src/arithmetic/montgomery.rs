//! Word-serial Montgomery multiplication (MonPro) and domain conversion.
//!
//! This is the multiply-reduce the accelerator iterates: per digit of the
//! first operand, accumulate that digit times the whole of the second
//! operand, inject the multiple of `n` that zeroes the low accumulator
//! word, and shift right by one word. Each iteration retires exactly 32
//! bits, so after `L` iterations the accumulator holds
//! $\bar{a} \cdot \bar{b} \cdot 2^{-32L} \bmod n$ up to one final
//! subtraction. See Algorithm 14.32 in the
//! [Handbook of Applied Cryptography][hac] for the word-level recurrence.
//!
//! The accumulator stays below $2n$ at every loop entry, so a single
//! conditional subtraction at the end completes the reduction (the
//! "add-n-then-shift" invariant). The model keeps the one-wide-multiplier
//! shape of the datapath: one operand digit against the full other
//! operand per pass, not a two-dimensional digit-by-digit cross product.
//!
//! [hac]: https://cacr.uwaterloo.ca/hac/about/chap14.pdf

use crate::{Digit, DIGIT_BITS, Unsigned};
use crate::digit::DoubleDigit;

use super::{add, Modulus, Montgomery};
use super::subtract::sub_assign_borrow;

/// Multiply-accumulate with carry: one cell of the multiplier array.
#[inline]
fn mac(acc: Digit, x: Digit, y: Digit, carry: &mut Digit) -> Digit {
    let wide = acc as DoubleDigit + (x as DoubleDigit) * (y as DoubleDigit) + *carry as DoubleDigit;
    *carry = (wide >> DIGIT_BITS) as Digit;
    wide as Digit
}

/// $\text{MonPro}(\bar{a}, \bar{b}) = \bar{a} \cdot \bar{b} \cdot 2^{-32L} \bmod n$,
/// with the result below `n`.
///
/// Both operands must be below `n`; the modulus context guarantees `n` is
/// odd, which makes the per-iteration shift exact.
pub fn monpro<const L: usize>(
    a_bar: &Unsigned<L>,
    b_bar: &Unsigned<L>,
    ctx: &Modulus<L>,
) -> Unsigned<L> {
    let n = ctx.as_unsigned();
    debug_assert!(a_bar < n && b_bar < n);

    let mut u = Unsigned::<L>::ZERO;
    let mut u_hi: DoubleDigit = 0;

    for i in 0..L {
        // u += A[i] · b̄: one pass of the wide multiplier
        let mut carry = 0;
        for j in 0..L {
            u.0[j] = mac(u.0[j], a_bar.0[i], b_bar.0[j], &mut carry);
        }
        u_hi += carry as DoubleDigit;

        // m is chosen so u + m·n ≡ 0 (mod 2^32)
        let m = u.0[0].wrapping_mul(ctx.n0_prime());
        let mut carry = 0;
        for j in 0..L {
            u.0[j] = mac(u.0[j], m, n.0[j], &mut carry);
        }
        u_hi += carry as DoubleDigit;
        debug_assert_eq!(u.0[0], 0);

        // exact shift: the guaranteed-zero digit falls off
        for j in 0..L - 1 {
            u.0[j] = u.0[j + 1];
        }
        u.0[L - 1] = u_hi as Digit;
        u_hi >>= DIGIT_BITS;
    }

    // u < 2n, so at most one subtraction remains; a set u_hi is the
    // 2^(32L) term and is consumed by the subtraction's borrow
    reduce_once(u, u_hi as Digit, n)
}

#[cfg(not(feature = "ct-maybe"))]
fn reduce_once<const L: usize>(mut u: Unsigned<L>, u_hi: Digit, n: &Unsigned<L>) -> Unsigned<L> {
    if u_hi != 0 || &u >= n {
        sub_assign_borrow(&mut u, n);
    }
    u
}

#[cfg(feature = "ct-maybe")]
fn reduce_once<const L: usize>(u: Unsigned<L>, u_hi: Digit, n: &Unsigned<L>) -> Unsigned<L> {
    use subtle::Choice;

    let mut difference = u.clone();
    let borrow = sub_assign_borrow(&mut difference, n);
    let needs_reduction = Choice::from((u_hi != 0) as u8) | Choice::from((borrow == 0) as u8);
    super::subtract::conditional_select(&u, &difference, needs_reduction)
}

/// $\bar{a} = a \cdot 2^{32L} \bmod n$, realized as `32·L` modular
/// doublings (exact for `a < n`, no division anywhere).
pub(crate) fn to_montgomery<'n, const L: usize>(
    a: &Unsigned<L>,
    ctx: &'n Modulus<L>,
) -> Montgomery<'n, L> {
    debug_assert!(a < ctx.as_unsigned());

    let mut y = a.clone();
    for _ in 0..Unsigned::<L>::BITS {
        add::double_mod(&mut y, ctx.as_unsigned());
    }
    Montgomery { y, n: ctx }
}
