//! Shared test fixtures: the 256-bit key set and MonPro operands from the
//! hardware bring-up traces.

use hex_literal::hex;

use crate::{Digit, Uint256};

pub fn key_n() -> Uint256 {
    Uint256::from_be_bytes(&hex!(
        "99925173ad65686715385ea800cd28120288fc70a9bc98dd4c90d676f8ff768d"
    ))
}

pub fn key_e() -> Uint256 {
    Uint256::from_digit(0x1_0001)
}

pub fn key_d() -> Uint256 {
    Uint256::from_be_bytes(&hex!(
        "0cea1651ef44be1f1f1476b7539bed10d73e3aac782bd9999a1e5a790932bfe9"
    ))
}

/// `n0'` of [`key_n`], as loaded into the reducer.
pub const KEY_N0_PRIME: Digit = 0x8833c3bb;

pub fn operand_a() -> Uint256 {
    Uint256::from_be_bytes(&hex!(
        "5b9e402b76181c9c95ce28ced7dde4c04d1e1f5773e9e67e4c907c8fa7c390cc"
    ))
}

pub fn operand_b() -> Uint256 {
    Uint256::from_be_bytes(&hex!(
        "1808a604ed7dedcf26e8e371a4e312a51fae740f749aaac0ac10c9cc3469d8d4"
    ))
}
