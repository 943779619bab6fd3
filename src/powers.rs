//! Precomputed odd powers of the base, in Montgomery form.
//!
//! Before exponentiation starts, the controller fills a small register
//! file with $\bar{M}^1, \bar{M}^3, \ldots, \bar{M}^{2^d-1}$. The chain is
//! inherently sequential: each entry is the previous odd power times
//! $\bar{M}^2$.

use alloc::vec::Vec;

use crate::{Error, Montgomery, Result};

/// Dense table of the odd powers $\bar{M}^w$ for $w = 1, 3, \ldots, 2^d-1$,
/// indexed by $(w-1)/2$. Immutable once built; read-only during the
/// schedule walk.
pub struct OddPowerTable<'n, const L: usize> {
    entries: Vec<Montgomery<'n, L>>,
    monpro_invocations: usize,
}

impl<'n, const L: usize> OddPowerTable<'n, L> {
    /// Build the table for window width `d` (1 ≤ d ≤ 8).
    ///
    /// Exactly $2^{d-1}$ entries; `monpro_invocations` records the cost of
    /// the $\bar{M}^2$ step plus the chain.
    pub fn precompute(base_bar: &Montgomery<'n, L>, d: usize) -> Self {
        debug_assert!((1..=8).contains(&d));

        let count = 1usize << (d - 1);
        let mut entries = Vec::with_capacity(count);
        entries.push(base_bar.clone());
        let mut monpro_invocations = 0;

        if count > 1 {
            let m_squared = base_bar * base_bar;
            monpro_invocations += 1;
            for i in 1..count {
                let next = &entries[i - 1] * &m_squared;
                monpro_invocations += 1;
                entries.push(next);
            }
        }

        Self { entries, monpro_invocations }
    }

    /// The entry for an odd window value; [`Error::InvalidWindow`] for an
    /// even, zero, or out-of-range value.
    pub fn get(&self, value: u8) -> Result<&Montgomery<'n, L>> {
        if value == 0 || value & 1 == 0 {
            return Err(Error::InvalidWindow);
        }
        self.entries
            .get((value as usize - 1) / 2)
            .ok_or(Error::InvalidWindow)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// MonPro calls spent building the table.
    pub fn monpro_invocations(&self) -> usize {
        self.monpro_invocations
    }
}
