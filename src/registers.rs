//! The schedule register image the hardware controller is loaded with.
//!
//! Three 256-bit registers, bit-exact:
//!
//! ```text
//! reg0[255:249]  entry count, 7 bits, MSB first
//! reg0[248:3]    first 246 payload bits, MSB first
//! reg0[2:0]      reserved, written as zero, ignored on read
//! reg1[255:0]    next 256 payload bits
//! reg2[255:0]    next 256 payload bits, zero-padded tail
//! ```
//!
//! Each entry is 6 payload bits: `[5:2]` the window value, `[1:0]` the
//! window length minus one. Entries appear in execution (MSB-first)
//! order, the order the sequencer consumes them.

use alloc::string::String;
use alloc::vec::Vec;

use crate::{Error, Result, Window, WINDOW_BITS};

/// Number of schedule registers.
pub const REGISTER_COUNT: usize = 3;
/// Width of each schedule register.
pub const REGISTER_BITS: usize = 256;

const COUNT_BITS: usize = 7;
const ENTRY_BITS: usize = 6;
const REG0_RESERVED_BITS: usize = 3;
const REG0_PAYLOAD_BITS: usize = REGISTER_BITS - COUNT_BITS - REG0_RESERVED_BITS;
const PAYLOAD_CAPACITY: usize = REG0_PAYLOAD_BITS + (REGISTER_COUNT - 1) * REGISTER_BITS;

/// Bit-exact image of the three schedule registers.
///
/// Stored as one flat 768-bit buffer; bit 0 is reg0's bit 255.
#[derive(Clone, Eq, PartialEq)]
#[cfg_attr(not(feature = "hex-debug"), derive(Debug))]
pub struct RegisterImage {
    bits: [u8; REGISTER_COUNT * REGISTER_BITS / 8],
}

/// Global bit position of payload bit `k`, skipping the reserved tail of
/// reg0.
fn payload_index(k: usize) -> usize {
    if k < REG0_PAYLOAD_BITS {
        COUNT_BITS + k
    } else {
        REGISTER_BITS + (k - REG0_PAYLOAD_BITS)
    }
}

impl RegisterImage {
    /// Pack an execution-order (MSB-first) schedule.
    ///
    /// Fails with [`Error::CapacityExceeded`] when the entry count does
    /// not fit the 7-bit field or the payload does not fit the three
    /// registers, and with [`Error::InvalidWindow`] for entries wider
    /// than the 6-bit field (a schedule built for d > 4).
    pub fn encode(entries: &[Window]) -> Result<Self> {
        if entries.len() >= 1 << COUNT_BITS {
            return Err(Error::CapacityExceeded);
        }
        if entries.len() * ENTRY_BITS > PAYLOAD_CAPACITY {
            return Err(Error::CapacityExceeded);
        }

        let mut image = Self {
            bits: [0; REGISTER_COUNT * REGISTER_BITS / 8],
        };

        for bit in 0..COUNT_BITS {
            if (entries.len() >> (COUNT_BITS - 1 - bit)) & 1 == 1 {
                image.set_bit(bit);
            }
        }

        for (index, window) in entries.iter().enumerate() {
            if window.value > 0xf || window.len > 4 || window.len == 0 {
                return Err(Error::InvalidWindow);
            }
            let code = (window.value << 2) | (window.len - 1);
            for bit in 0..ENTRY_BITS {
                if (code >> (ENTRY_BITS - 1 - bit)) & 1 == 1 {
                    image.set_bit(payload_index(index * ENTRY_BITS + bit));
                }
            }
        }

        Ok(image)
    }

    /// Unpack back into the execution-order schedule. Exact inverse of
    /// [`RegisterImage::encode`] for any image it produced.
    pub fn decode(&self) -> Result<Vec<Window>> {
        let mut count = 0usize;
        for bit in 0..COUNT_BITS {
            count = (count << 1) | self.get_bit(bit) as usize;
        }
        if count * ENTRY_BITS > PAYLOAD_CAPACITY {
            return Err(Error::CapacityExceeded);
        }

        let mut entries = Vec::with_capacity(count);
        for index in 0..count {
            let mut code = 0u8;
            for bit in 0..ENTRY_BITS {
                code = (code << 1) | self.get_bit(payload_index(index * ENTRY_BITS + bit));
            }
            entries.push(Window::new(code >> 2, (code & 0b11) + 1, WINDOW_BITS)?);
        }
        Ok(entries)
    }

    /// The bytes of one register, most significant byte first.
    pub fn reg(&self, index: usize) -> &[u8] {
        assert!(index < REGISTER_COUNT);
        let bytes = REGISTER_BITS / 8;
        &self.bits[bytes * index..bytes * (index + 1)]
    }

    /// One register as the `0x…` literal the load scripts take.
    pub fn reg_hex(&self, index: usize) -> String {
        use core::fmt::Write;

        let mut hex = String::with_capacity(2 + REGISTER_BITS / 4);
        hex.push_str("0x");
        for byte in self.reg(index) {
            let _ = write!(hex, "{:02x}", byte);
        }
        hex
    }

    fn set_bit(&mut self, index: usize) {
        self.bits[index / 8] |= 0x80 >> (index % 8);
    }

    fn get_bit(&self, index: usize) -> u8 {
        (self.bits[index / 8] >> (7 - index % 8)) & 1
    }
}

#[cfg(feature = "hex-debug")]
impl core::fmt::Debug for RegisterImage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RegisterImage")
            .field("reg0", &format_args!("{}", delog::hex_str!(self.reg(0), 32)))
            .field("reg1", &format_args!("{}", delog::hex_str!(self.reg(1), 32)))
            .field("reg2", &format_args!("{}", delog::hex_str!(self.reg(2), 32)))
            .finish()
    }
}
