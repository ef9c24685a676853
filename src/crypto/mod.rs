//! Cipher module
//!
//! Classical ciphers over the Polish alphabet:
//! - Caesar shift cipher
//! - Polybius square (two-digit grid coordinates)
//! - Vigenère running-key cipher
//! - Playfair digraph matrix cipher
//! - Toy RSA with a fixed demonstration key pair

pub mod caesar;
pub mod playfair;
pub mod polybius;
pub mod rsa;
pub mod vigenere;

// Re-export commonly used functions and types
pub use caesar::{caesar_decrypt, caesar_encrypt};
pub use playfair::{playfair_decrypt, playfair_encrypt, PlayfairMatrix};
pub use polybius::{polybius_decrypt, polybius_encrypt};
pub use rsa::{rsa_decrypt, rsa_encrypt, RsaDecryptor, RsaEncryptor, RsaKeyPair};
pub use vigenere::{vigenere_decrypt, vigenere_encrypt};

/// Available ciphers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Caesar,
    Polybius,
    Vigenere,
    Playfair,
    Rsa,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Caesar,
        Algorithm::Polybius,
        Algorithm::Vigenere,
        Algorithm::Playfair,
        Algorithm::Rsa,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Caesar => "caesar",
            Algorithm::Polybius => "polybius",
            Algorithm::Vigenere => "vigenere",
            Algorithm::Playfair => "playfair",
            Algorithm::Rsa => "rsa",
        }
    }

    /// Parse a cipher name, case-insensitively
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "caesar" => Some(Algorithm::Caesar),
            "polybius" => Some(Algorithm::Polybius),
            "vigenere" => Some(Algorithm::Vigenere),
            "playfair" => Some(Algorithm::Playfair),
            "rsa" => Some(Algorithm::Rsa),
            _ => None,
        }
    }

    /// Whether the cipher takes a user-supplied key
    pub fn takes_key(&self) -> bool {
        matches!(
            self,
            Algorithm::Caesar | Algorithm::Vigenere | Algorithm::Playfair
        )
    }
}

/// Encrypt or decrypt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Encrypt => "encrypt",
            Direction::Decrypt => "decrypt",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "encrypt" | "enc" => Some(Direction::Encrypt),
            "decrypt" | "dec" => Some(Direction::Decrypt),
            _ => None,
        }
    }
}
