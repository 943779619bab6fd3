//! The VLNW exponentiation sequencer.
//!
//! Walks the schedule in execution (MSB-first) order. The topmost window
//! is consumed as a pure load of its table entry — squaring the domain
//! representation of one would be a no-op, so the hardware skips it — and
//! every later window costs `len` squarings plus one multiplication when
//! nonzero. The MonPro dependency chain is strictly sequential; there is
//! nothing to parallelize inside one call.

use crate::{
    vlnw_schedule, Error, Modulus, OddPowerTable, Result, Unsigned,
};

/// Result of one exponentiation, with its instrumentation.
///
/// The MonPro count is part of the return value on purpose: concurrent
/// calls share nothing, so there is no process-wide counter to race on.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PowOutput<const L: usize> {
    /// `base^exponent mod n`.
    pub value: Unsigned<L>,
    /// MonPro invocations spent: odd-power precompute, schedule walk,
    /// and the final domain exit.
    pub monpro_invocations: usize,
}

/// `base^exponent mod n` by windowed Montgomery exponentiation with
/// window width `d`.
///
/// `base` must be strictly below the modulus ([`Error::MessageRange`]
/// otherwise). The degenerate cases are resolved before the sequencer
/// starts: a modulus of one maps everything to zero, and exponent zero
/// yields one.
pub fn pow_vlnw<const L: usize>(
    base: &Unsigned<L>,
    exponent: &Unsigned<L>,
    modulus: &Modulus<L>,
    d: usize,
) -> Result<PowOutput<L>> {
    if modulus.as_unsigned().is_one() {
        return Ok(PowOutput {
            value: Unsigned::ZERO,
            monpro_invocations: 0,
        });
    }
    if base >= modulus.as_unsigned() {
        return Err(Error::MessageRange);
    }
    if exponent.is_zero() {
        return Ok(PowOutput {
            value: Unsigned::one(),
            monpro_invocations: 0,
        });
    }

    let schedule = vlnw_schedule(exponent, d)?;
    let mut monpro_invocations = 0;

    let base_bar = modulus.to_montgomery(base);
    let table = OddPowerTable::precompute(&base_bar, d);
    monpro_invocations += table.monpro_invocations();

    let mut windows = schedule.iter_msb();
    // the topmost window contains the exponent's leading set bit, so it
    // is nonzero and the schedule is nonempty
    let first = windows.next().ok_or(Error::InvalidWindow)?;
    let mut acc = table.get(first.value)?.clone();

    for window in windows {
        for _ in 0..window.len {
            acc = &acc * &acc;
            monpro_invocations += 1;
        }
        if !window.is_zero() {
            acc = &acc * table.get(window.value)?;
            monpro_invocations += 1;
        }
    }

    let value = acc.retrieve();
    monpro_invocations += 1;

    Ok(PowOutput {
        value,
        monpro_invocations,
    })
}

#[cfg(test)]
mod test {
    use super::*;

    fn ctx(n: u32) -> Modulus<1> {
        Modulus::new(Unsigned::from_digit(n)).unwrap()
    }

    #[test]
    fn nineteen_to_the_fifth() {
        // 19^5 mod 221 = 15
        let output = pow_vlnw(
            &Unsigned::from_digit(19),
            &Unsigned::from_digit(5),
            &ctx(221),
            4,
        )
        .unwrap();
        assert_eq!(output.value.words(), &[15]);

        // and back: 15^77 mod 221 = 19
        let output = pow_vlnw(
            &Unsigned::from_digit(15),
            &Unsigned::from_digit(77),
            &ctx(221),
            4,
        )
        .unwrap();
        assert_eq!(output.value.words(), &[19]);
    }

    #[test]
    fn binary_window_width() {
        let output = pow_vlnw(
            &Unsigned::from_digit(19),
            &Unsigned::from_digit(5),
            &ctx(221),
            1,
        )
        .unwrap();
        assert_eq!(output.value.words(), &[15]);
        // load, two squarings, one multiplication, one domain exit
        assert_eq!(output.monpro_invocations, 4);
    }

    #[test]
    fn monpro_metering() {
        // exponent 0x1234, d = 4: 8 precompute + 9 squarings + 1
        // multiplication + 1 domain exit
        let output = pow_vlnw(
            &Unsigned::from_digit(19),
            &Unsigned::from_digit(0x1234),
            &ctx(221),
            4,
        )
        .unwrap();
        assert_eq!(output.monpro_invocations, 19);
    }

    #[test]
    fn degenerate_cases() {
        // modulus one maps everything to zero
        let output = pow_vlnw(
            &Unsigned::ZERO,
            &Unsigned::from_digit(7),
            &ctx(1),
            4,
        )
        .unwrap();
        assert!(output.value.is_zero());

        // exponent zero yields one
        let output = pow_vlnw(&Unsigned::from_digit(19), &Unsigned::ZERO, &ctx(221), 4).unwrap();
        assert!(output.value.is_one());
        assert_eq!(output.monpro_invocations, 0);

        // zero base stays zero
        let output = pow_vlnw(
            &Unsigned::ZERO,
            &Unsigned::from_digit(5),
            &ctx(221),
            4,
        )
        .unwrap();
        assert!(output.value.is_zero());
    }

    #[test]
    fn base_must_be_reduced() {
        assert_eq!(
            pow_vlnw(
                &Unsigned::from_digit(221),
                &Unsigned::from_digit(5),
                &ctx(221),
                4
            ),
            Err(Error::MessageRange)
        );
    }
}
