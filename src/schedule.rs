//! Variable-Length Non-zero-Window (VLNW) exponent scheduling.
//!
//! The exponent is decomposed, scanning from bit 0 upward, into an
//! ordered sequence of windows: a clear bit becomes its own `(0, 1)`
//! window, and a set bit opens a maximal window of `min(d, remaining)`
//! bits whose value is read LSB-first (so it is always odd). Zero runs
//! are deliberately not coalesced and nonzero windows are not trimmed —
//! the decomposition is valid either way, and the uniform shape matches
//! the sequencer this model is checked against, at the cost of not being
//! the minimal-multiplication one.
//!
//! The construction order is LSB-first. Execution and hardware loading
//! use the reversed, MSB-first view.

use alloc::vec::Vec;

use crate::{Digit, Error, RegisterImage, Result, Unsigned};
use crate::arithmetic::add_assign_carry;

/// One schedule entry: a window `value` covering `len` exponent bits.
///
/// Invariants: `1 <= len <= d`; `value < 2^d`; a zero value has length
/// exactly 1; a nonzero value is odd.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Window {
    pub value: u8,
    pub len: u8,
}

impl Window {
    /// Checked constructor; [`Error::InvalidWindow`] when the invariants
    /// do not hold for window width `d`.
    pub fn new(value: u8, len: u8, d: usize) -> Result<Self> {
        let valid = len >= 1
            && len as usize <= d
            && (value as usize) < (1usize << d)
            && if value == 0 { len == 1 } else { value & 1 == 1 };
        if valid {
            Ok(Self { value, len })
        } else {
            Err(Error::InvalidWindow)
        }
    }

    pub fn is_zero(&self) -> bool {
        self.value == 0
    }
}

/// An ordered window decomposition of an exponent, in construction
/// (LSB-first) order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Schedule {
    windows: Vec<Window>,
}

impl Schedule {
    /// The windows in construction (LSB-first) order.
    pub fn windows(&self) -> &[Window] {
        &self.windows
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Execution order: most significant window first.
    pub fn iter_msb(&self) -> impl Iterator<Item = &Window> {
        self.windows.iter().rev()
    }

    /// Reconstruct the exponent from the lowest window up:
    /// `E += value << shift; shift += len`.
    pub fn replay_lsb<const L: usize>(&self) -> Unsigned<L> {
        let mut exponent = Unsigned::<L>::ZERO;
        let mut shift = 0;
        for window in &self.windows {
            let mut value = Unsigned::<L>::from_digit(window.value as Digit);
            value <<= shift;
            let carry = add_assign_carry(&mut exponent, &value);
            debug_assert_eq!(carry, 0);
            shift += window.len as usize;
        }
        exponent
    }

    /// Reconstruct the exponent from the execution order:
    /// `E = (E << len) + value` per window, most significant first.
    pub fn replay_msb<const L: usize>(&self) -> Unsigned<L> {
        let mut exponent = Unsigned::<L>::ZERO;
        for window in self.windows.iter().rev() {
            exponent <<= window.len as usize;
            let carry = add_assign_carry(&mut exponent, &[window.value as Digit]);
            debug_assert_eq!(carry, 0);
        }
        exponent
    }

    /// Squarings the exponentiator will execute: every window's length
    /// except the topmost, which is consumed as a pure load.
    pub fn squarings(&self) -> usize {
        self.windows
            .iter()
            .rev()
            .skip(1)
            .map(|window| window.len as usize)
            .sum()
    }

    /// Multiplications the exponentiator will execute: one per nonzero
    /// window below the topmost.
    pub fn multiplies(&self) -> usize {
        self.windows
            .iter()
            .filter(|window| !window.is_zero())
            .count()
            .saturating_sub(1)
    }

    /// Pack the execution-order view into the controller's register
    /// image.
    pub fn to_register_image(&self) -> Result<RegisterImage> {
        let execution_order: Vec<Window> = self.iter_msb().copied().collect();
        RegisterImage::encode(&execution_order)
    }
}

/// Decompose `exponent` into its VLNW schedule for window width `d`
/// (1 ≤ d ≤ 8).
///
/// Exponent zero yields an empty schedule; callers special-case it before
/// exponentiation.
pub fn vlnw_schedule<const L: usize>(exponent: &Unsigned<L>, d: usize) -> Result<Schedule> {
    debug_assert!((1..=8).contains(&d));

    let bits = exponent.bit_length();
    let mut windows = Vec::new();
    let mut i = 0;

    while i < bits {
        if !exponent.bit(i) {
            windows.push(Window::new(0, 1, d)?);
            i += 1;
        } else {
            let len = core::cmp::min(d, bits - i);
            let mut value = 0u8;
            for j in 0..len {
                if exponent.bit(i + j) {
                    value |= 1 << j;
                }
            }
            windows.push(Window::new(value, len as u8, d)?);
            i += len;
        }
    }

    Ok(Schedule { windows })
}
