//! Toy RSA module
//!
//! Textbook RSA applied one character at a time: each code point `m` becomes
//! `m^e mod n` and the ciphertext is the resulting sequence of integers.
//! The demonstration key pair uses p = 61 and q = 53, so only characters with
//! a code point below 3233 can be encrypted. This offers no security at all.

use std::fmt;

use num_bigint::BigUint;
use once_cell::sync::Lazy;
use tracing::debug;

use crate::error::{CipherError, Result};

/// First prime of the demonstration key pair
pub const DEMO_P: u64 = 61;

/// Second prime of the demonstration key pair
pub const DEMO_Q: u64 = 53;

/// Public exponent search starts here
pub const MIN_PUBLIC_EXPONENT: u64 = 17;

static DEMO_KEY_PAIR: Lazy<RsaKeyPair> = Lazy::new(|| {
    let key_pair = RsaKeyPair::derive(DEMO_P, DEMO_Q).unwrap();
    debug!(
        "Derived demonstration RSA key pair: n = {}, e = {}",
        key_pair.public.modulus(),
        key_pair.public.exponent()
    );
    key_pair
});

/// Greatest common divisor
pub fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

/// Modular multiplicative inverse of `e` modulo `phi` (extended Euclid).
///
/// Returns `Some(0)` for `phi == 1` and `None` when `e` and `phi` share a factor.
pub fn mod_inverse(e: i64, phi: i64) -> Option<i64> {
    if phi == 1 {
        return Some(0);
    }

    let (mut a, mut m) = (e, phi);
    let (mut x0, mut x1) = (0i64, 1i64);
    while a > 1 {
        if m == 0 {
            return None;
        }
        let q = a / m;
        (a, m) = (m, a % m);
        (x0, x1) = (x1 - q * x0, x0);
    }
    if a != 1 {
        return None;
    }

    if x1 < 0 {
        x1 += phi;
    }
    Some(x1)
}

/// Public half of a key pair (e, n).
///
/// Only [`RsaKeyPair::derive`] builds keys, so the modulus is always at least 6.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicKey {
    modulus: BigUint,
    exponent: BigUint,
}

impl RsaPublicKey {
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    pub fn exponent(&self) -> &BigUint {
        &self.exponent
    }
}

/// Private half of a key pair (d, n)
#[derive(Clone, PartialEq, Eq)]
pub struct RsaPrivateKey {
    modulus: BigUint,
    exponent: BigUint,
}

impl RsaPrivateKey {
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    pub fn exponent(&self) -> &BigUint {
        &self.exponent
    }
}

impl fmt::Debug for RsaPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RsaPrivateKey")
            .field("modulus", &self.modulus)
            // Don't log the private exponent
            .finish_non_exhaustive()
    }
}

/// RSA key pair derived from two primes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaKeyPair {
    pub public: RsaPublicKey,
    pub private: RsaPrivateKey,
    /// Euler's totient (p - 1)(q - 1)
    pub totient: BigUint,
}

impl RsaKeyPair {
    /// Derive a key pair from the primes `p` and `q`.
    ///
    /// The public exponent is the smallest integer from 17 upward that is
    /// coprime with the totient; the private exponent is its inverse modulo
    /// the totient. Primality of the inputs is not checked.
    pub fn derive(p: u64, q: u64) -> Result<Self> {
        let degenerate = || CipherError::DegenerateKeyPair { p, q };
        if p < 2 || q < 2 {
            return Err(degenerate());
        }

        let modulus = p.checked_mul(q).ok_or_else(degenerate)?;
        let totient = (p - 1) * (q - 1);
        if totient < 2 {
            return Err(degenerate());
        }

        let mut e = MIN_PUBLIC_EXPONENT;
        while gcd(e, totient) != 1 {
            e += 1;
        }

        let signed_totient = i64::try_from(totient).map_err(|_| degenerate())?;
        let signed_e = i64::try_from(e).map_err(|_| degenerate())?;
        let d = mod_inverse(signed_e, signed_totient).ok_or_else(degenerate)?;

        let modulus = BigUint::from(modulus);
        Ok(Self {
            public: RsaPublicKey {
                modulus: modulus.clone(),
                exponent: BigUint::from(e),
            },
            private: RsaPrivateKey {
                modulus,
                exponent: BigUint::from(d.unsigned_abs()),
            },
            totient: BigUint::from(totient),
        })
    }

    /// Demonstration key pair (p = 61, q = 53), derived once per process
    pub fn demo() -> &'static Self {
        &DEMO_KEY_PAIR
    }

    pub fn encryptor(&self) -> RsaEncryptor {
        RsaEncryptor::new(self.public.clone())
    }

    pub fn decryptor(&self) -> RsaDecryptor {
        RsaDecryptor::new(self.private.clone())
    }
}

/// Encrypts text with a public key
#[derive(Debug, Clone)]
pub struct RsaEncryptor {
    key: RsaPublicKey,
}

impl RsaEncryptor {
    pub fn new(key: RsaPublicKey) -> Self {
        Self { key }
    }

    /// Encrypt every character of `text` into `code_point^e mod n`.
    ///
    /// Fails on the first character whose code point is not below the modulus,
    /// since it could not be recovered.
    pub fn encrypt(&self, text: &str) -> Result<Vec<BigUint>> {
        text.chars()
            .map(|symbol| {
                let plain_int = BigUint::from(u32::from(symbol));
                if plain_int >= self.key.modulus {
                    return Err(CipherError::CodePointTooLarge {
                        symbol,
                        modulus: self.key.modulus.clone(),
                    });
                }
                Ok(plain_int.modpow(&self.key.exponent, &self.key.modulus))
            })
            .collect()
    }
}

/// Decrypts integer sequences with a private key
#[derive(Debug, Clone)]
pub struct RsaDecryptor {
    key: RsaPrivateKey,
}

impl RsaDecryptor {
    pub fn new(key: RsaPrivateKey) -> Self {
        Self { key }
    }

    /// Decrypt each integer with `c^d mod n` and join the characters in order
    pub fn decrypt(&self, cipher: &[BigUint]) -> Result<String> {
        cipher
            .iter()
            .map(|cipher_int| {
                let plain_int = cipher_int.modpow(&self.key.exponent, &self.key.modulus);
                u32::try_from(&plain_int)
                    .ok()
                    .and_then(char::from_u32)
                    .ok_or(CipherError::InvalidCodePoint(plain_int))
            })
            .collect()
    }
}

/// Encrypt `text` with the demonstration key pair
pub fn rsa_encrypt(text: &str) -> Result<Vec<BigUint>> {
    RsaKeyPair::demo().encryptor().encrypt(text)
}

/// Decrypt `cipher` with the demonstration key pair
pub fn rsa_decrypt(cipher: &[BigUint]) -> Result<String> {
    RsaKeyPair::demo().decryptor().decrypt(cipher)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(17, 3120), 1);
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(7, 0), 7);
    }

    #[test]
    fn test_mod_inverse() {
        assert_eq!(mod_inverse(17, 3120), Some(2753));
        assert_eq!(mod_inverse(3, 11), Some(4));
        assert_eq!(mod_inverse(5, 1), Some(0));
        assert_eq!(mod_inverse(6, 9), None);
    }

    #[test]
    fn test_demo_key_pair() {
        let key_pair = RsaKeyPair::demo();
        assert_eq!(key_pair.public.modulus, BigUint::from(3233u32));
        assert_eq!(key_pair.public.exponent, BigUint::from(17u32));
        assert_eq!(key_pair.private.exponent, BigUint::from(2753u32));
        assert_eq!(key_pair.totient, BigUint::from(3120u32));

        let product = &key_pair.public.exponent * &key_pair.private.exponent;
        assert_eq!(product % &key_pair.totient, BigUint::from(1u32));
    }

    #[test]
    fn test_demo_key_pair_is_shared() {
        assert!(std::ptr::eq(RsaKeyPair::demo(), RsaKeyPair::demo()));
    }

    #[test]
    fn test_public_exponent_skips_common_factors() {
        // totient = 102 * 2 = 204 = 12 * 17, and gcd(18, 204) = 6
        let key_pair = RsaKeyPair::derive(103, 3).unwrap();
        assert_eq!(key_pair.public.exponent, BigUint::from(19u32));

        let product = &key_pair.public.exponent * &key_pair.private.exponent;
        assert_eq!(product % &key_pair.totient, BigUint::from(1u32));
    }

    #[test]
    fn test_degenerate_primes() {
        assert_eq!(
            RsaKeyPair::derive(1, 53),
            Err(CipherError::DegenerateKeyPair { p: 1, q: 53 })
        );
        assert_eq!(
            RsaKeyPair::derive(2, 2),
            Err(CipherError::DegenerateKeyPair { p: 2, q: 2 })
        );
    }

    #[test]
    fn test_smallest_key_pair_round_trips() {
        // n = 6 is the smallest modulus derive accepts
        let key_pair = RsaKeyPair::derive(2, 3).unwrap();
        assert_eq!(key_pair.public.modulus(), &BigUint::from(6u32));
        assert_eq!(key_pair.private.modulus(), key_pair.public.modulus());

        let text: String = (0u32..6).filter_map(char::from_u32).collect();
        let cipher = key_pair.encryptor().encrypt(&text).unwrap();
        assert_eq!(key_pair.decryptor().decrypt(&cipher).unwrap(), text);
        assert!(key_pair.encryptor().encrypt("\u{6}").is_err());
    }

    #[test]
    fn test_known_ciphertext() {
        let cipher = rsa_encrypt("A").unwrap();
        assert_eq!(cipher, vec![BigUint::from(2790u32)]);
        assert_eq!(rsa_decrypt(&cipher).unwrap(), "A");
    }

    #[test]
    fn test_round_trip_every_code_point_below_modulus() {
        let key_pair = RsaKeyPair::demo();
        let (n, e, d) = (
            &key_pair.public.modulus,
            &key_pair.public.exponent,
            &key_pair.private.exponent,
        );
        for m in 0u32..3233 {
            let m = BigUint::from(m);
            assert_eq!(m.modpow(e, n).modpow(d, n), m);
        }
    }

    #[test]
    fn test_round_trip_polish_text() {
        let text = "Zażółć gęślą jaźń!";
        let cipher = rsa_encrypt(text).unwrap();
        assert_eq!(cipher.len(), text.chars().count());
        assert_eq!(rsa_decrypt(&cipher).unwrap(), text);
    }

    #[test]
    fn test_code_point_too_large() {
        assert_eq!(
            rsa_encrypt("a€"),
            Err(CipherError::CodePointTooLarge {
                symbol: '€',
                modulus: BigUint::from(3233u32),
            })
        );
    }

    #[test]
    fn test_debug_hides_private_exponent() {
        let output = format!("{:?}", RsaKeyPair::demo().private);
        assert!(!output.contains("2753"));
    }
}
