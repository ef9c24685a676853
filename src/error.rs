//! Error handling module
//!
//! Defines the error types raised by the cipher functions.

use num_bigint::BigUint;
use thiserror::Error;

/// Main error type for cipher operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// Shift key outside the accepted range
    #[error("Shift key {key} is out of range, valid range is {min} to {max}")]
    InvalidKeyRange { key: i64, min: i64, max: i64 },

    /// Digraph symbol missing from the Playfair matrix
    #[error("Symbol '{0}' not found in the matrix")]
    SymbolNotFound(char),

    /// Running key is empty or contains symbols outside the alphabet
    #[error("Invalid running key: {0:?}")]
    InvalidRunningKey(String),

    /// Plaintext character that cannot be represented below the RSA modulus
    #[error("Character {symbol:?} has a code point too large for modulus {modulus}")]
    CodePointTooLarge { symbol: char, modulus: BigUint },

    /// Decrypted RSA value that is not a valid character
    #[error("Decrypted value {0} is not a valid character")]
    InvalidCodePoint(BigUint),

    /// Primes that cannot produce a usable key pair
    #[error("Cannot derive a key pair from p = {p}, q = {q}")]
    DegenerateKeyPair { p: u64, q: u64 },
}

/// Result type alias for cipher operations
pub type Result<T> = std::result::Result<T, CipherError>;
