//! RSA boundary round trips against reference arithmetic, using the
//! 256-bit bring-up key set.

use hex_literal::hex;
use num_bigint::BigUint;
use proptest::prelude::*;

use rsa_accel_model::{Error, PrivateKey, PublicKey, Uint256};

const KEY_N: [u8; 32] =
    hex!("99925173ad65686715385ea800cd28120288fc70a9bc98dd4c90d676f8ff768d");
const KEY_D: [u8; 32] =
    hex!("0cea1651ef44be1f1f1476b7539bed10d73e3aac782bd9999a1e5a790932bfe9");
const KEY_E: u32 = 0x1_0001;

fn private_key() -> PrivateKey<8> {
    PrivateKey::new(
        Uint256::from_be_bytes(&KEY_N),
        Uint256::from_digit(KEY_E),
        Uint256::from_be_bytes(&KEY_D),
    )
    .unwrap()
}

#[test]
fn textbook_scenario() {
    // n = 221, e = 5, d = 77: encrypt(19) = 19^5 mod 221 = 15
    let private = PrivateKey::<1>::new(
        rsa_accel_model::Unsigned::from_digit(221),
        rsa_accel_model::Unsigned::from_digit(5),
        rsa_accel_model::Unsigned::from_digit(77),
    )
    .unwrap();

    let message = rsa_accel_model::Unsigned::from_digit(19);
    let ciphertext = private.public_key().encrypt(&message).unwrap();
    assert_eq!(ciphertext.words(), &[15]);
    assert_eq!(private.decrypt(&ciphertext).unwrap(), message);
}

#[test]
fn out_of_range_ciphertext() {
    let private = private_key();
    let too_large = Uint256::from_be_bytes(&hex!(
        "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
    ));
    assert_eq!(private.decrypt(&too_large).unwrap_err(), Error::MessageRange);
}

#[test]
fn rejects_even_modulus() {
    let even = Uint256::from_digit(0x10);
    assert_eq!(
        PublicKey::new(even, Uint256::from_digit(KEY_E)).unwrap_err(),
        Error::InvalidModulus
    );
}

proptest! {
    #[test]
    fn encrypt_matches_reference_and_round_trips(bytes in any::<[u8; 32]>()) {
        let n = BigUint::from_bytes_be(&KEY_N);
        let m = BigUint::from_bytes_be(&bytes) % &n;
        let message = Uint256::from_be_bytes(&m.to_bytes_be());

        let private = private_key();
        let ciphertext = private.public_key().encrypt(&message).unwrap();

        let expected = m.modpow(&BigUint::from(KEY_E), &n);
        prop_assert_eq!(
            BigUint::from_bytes_be(ciphertext.to_be_bytes().as_be_bytes()),
            expected
        );
        prop_assert_eq!(private.decrypt(&ciphertext).unwrap(), message);
    }
}
