//! Request execution
//!
//! Runs a single encrypt/decrypt request against one cipher, taking missing
//! keys from the configuration. A configured key is checked only when the
//! request falls back to it. RSA ciphertext travels as space-separated
//! decimal integers.

use anyhow::{Context, Result};
use num_bigint::BigUint;
use tracing::debug;

use crate::config::CipherConfig;
use crate::crypto::{self, caesar, vigenere, Algorithm, Direction};

/// A single cipher invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub algorithm: Algorithm,
    pub direction: Direction,
    pub input: String,
    /// Overrides the configured key for ciphers that take one
    pub key: Option<String>,
}

/// Execute `request` and return the transformed text
pub fn run(request: &Request, config: &CipherConfig) -> Result<String> {
    debug!(
        algorithm = request.algorithm.as_str(),
        direction = request.direction.as_str(),
        input_len = request.input.chars().count(),
        "Running cipher request"
    );

    let input = request.input.as_str();
    let key = request.key.as_deref();

    let output = match (request.algorithm, request.direction) {
        (Algorithm::Caesar, direction) => {
            let shift = match key {
                Some(key) => key
                    .trim()
                    .parse()
                    .with_context(|| format!("Shift key must be an integer, got {:?}", key))?,
                None => {
                    caesar::validate_shift_key(config.shift_key)
                        .context("Configured shift_key is invalid")?;
                    config.shift_key
                }
            };
            match direction {
                Direction::Encrypt => crypto::caesar_encrypt(input, shift)?,
                Direction::Decrypt => crypto::caesar_decrypt(input, shift)?,
            }
        }
        (Algorithm::Polybius, Direction::Encrypt) => crypto::polybius_encrypt(input),
        (Algorithm::Polybius, Direction::Decrypt) => crypto::polybius_decrypt(input),
        (Algorithm::Vigenere, direction) => {
            let key = match key {
                Some(key) => key,
                None => {
                    vigenere::validate_running_key(&config.running_key)
                        .context("Configured running_key is invalid")?;
                    config.running_key.as_str()
                }
            };
            match direction {
                Direction::Encrypt => crypto::vigenere_encrypt(input, key)?,
                Direction::Decrypt => crypto::vigenere_decrypt(input, key)?,
            }
        }
        (Algorithm::Playfair, direction) => {
            let key = key.unwrap_or(&config.matrix_key);
            match direction {
                Direction::Encrypt => crypto::playfair_encrypt(input, key)?,
                Direction::Decrypt => crypto::playfair_decrypt(input, key)?,
            }
        }
        (Algorithm::Rsa, Direction::Encrypt) => format_cipher(&crypto::rsa_encrypt(input)?),
        (Algorithm::Rsa, Direction::Decrypt) => crypto::rsa_decrypt(&parse_cipher(input)?)?,
    };

    Ok(output)
}

/// Render an RSA ciphertext as space-separated decimal integers
pub fn format_cipher(cipher: &[BigUint]) -> String {
    cipher
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse whitespace-separated decimal integers
pub fn parse_cipher(text: &str) -> Result<Vec<BigUint>> {
    text.split_whitespace()
        .map(|token| {
            token
                .parse::<BigUint>()
                .with_context(|| format!("Malformed RSA ciphertext token: {:?}", token))
        })
        .collect()
}
