//! RSA keys.
//!
//! The key material boundary of the model: moduli and exponents arrive
//! from an external key-generation collaborator, already mathematically
//! valid. This module validates only what the datapath itself requires —
//! an odd modulus and in-range messages — and never touches primality.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{pow_vlnw, Modulus, Result, Unsigned, WINDOW_BITS};

/// RSA public key: modulus context and public exponent.
#[derive(Clone, Debug, Zeroize)]
pub struct PublicKey<const L: usize> {
    modulus: Modulus<L>,
    e: Unsigned<L>,
}

impl<const L: usize> PublicKey<L> {
    /// Fails with [`crate::Error::InvalidModulus`] for an even or zero
    /// modulus.
    pub fn new(n: Unsigned<L>, e: Unsigned<L>) -> Result<Self> {
        Ok(Self {
            modulus: Modulus::new(n)?,
            e,
        })
    }

    pub fn modulus(&self) -> &Modulus<L> {
        &self.modulus
    }

    /// [RSAEP][rsaep]: `message^e mod n`, for messages strictly below the
    /// modulus ([`crate::Error::MessageRange`] otherwise).
    ///
    /// [rsaep]: https://tools.ietf.org/html/rfc8017#section-5.1.1
    pub fn encrypt(&self, message: &Unsigned<L>) -> Result<Unsigned<L>> {
        pow_vlnw(message, &self.e, &self.modulus, WINDOW_BITS).map(|output| output.value)
    }
}

/// RSA private key: the public half plus the private exponent, which is
/// wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey<const L: usize> {
    public_key: PublicKey<L>,
    d: Unsigned<L>,
}

impl<const L: usize> PrivateKey<L> {
    pub fn new(n: Unsigned<L>, e: Unsigned<L>, d: Unsigned<L>) -> Result<Self> {
        Ok(Self {
            public_key: PublicKey::new(n, e)?,
            d,
        })
    }

    pub fn public_key(&self) -> &PublicKey<L> {
        &self.public_key
    }

    /// [RSADP][rsadp]: `ciphertext^d mod n`.
    ///
    /// [rsadp]: https://tools.ietf.org/html/rfc8017#section-5.1.2
    pub fn decrypt(&self, ciphertext: &Unsigned<L>) -> Result<Unsigned<L>> {
        pow_vlnw(ciphertext, &self.d, &self.public_key.modulus, WINDOW_BITS)
            .map(|output| output.value)
    }
}
