//! Vigenère cipher
//!
//! Every character position `i` is shifted by the alphabet index of key symbol
//! `i % key_len`. The key cycles over character positions, not over letters:
//! characters outside the alphabet are copied unchanged but still use up their
//! key slot.

use crate::alphabet::{self, ALPHABET, ALPHABET_LEN};
use crate::error::{CipherError, Result};

/// Encrypt `text` with the running `key`
pub fn vigenere_encrypt(text: &str, key: &str) -> Result<String> {
    let shifts = validate_running_key(key)?;
    Ok(apply(text, &shifts, |index, shift| (index + shift) % ALPHABET_LEN))
}

/// Decrypt `text` with the running `key`
pub fn vigenere_decrypt(text: &str, key: &str) -> Result<String> {
    let shifts = validate_running_key(key)?;
    Ok(apply(text, &shifts, |index, shift| {
        (index + ALPHABET_LEN - shift) % ALPHABET_LEN
    }))
}

/// Check `key` and return the alphabet index of every key symbol.
///
/// The key must be non-empty and made of alphabet symbols only; it is taken
/// as given, without lowercasing.
pub fn validate_running_key(key: &str) -> Result<Vec<usize>> {
    let shifts = key
        .chars()
        .map(alphabet::index_of)
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| CipherError::InvalidRunningKey(key.to_string()))?;

    if shifts.is_empty() {
        return Err(CipherError::InvalidRunningKey(key.to_string()));
    }
    Ok(shifts)
}

fn apply(text: &str, shifts: &[usize], step: impl Fn(usize, usize) -> usize) -> String {
    text.chars()
        .enumerate()
        .map(|(i, c)| match alphabet::index_of(c) {
            Some(index) => ALPHABET[step(index, shifts[i % shifts.len()])],
            None => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_single_symbol_key_acts_as_shift() {
        assert_eq!(vigenere_encrypt("abc", "b").unwrap(), "bćd");
        assert_eq!(vigenere_decrypt("bćd", "b").unwrap(), "abc");
    }

    #[test]
    fn test_key_cycles() {
        assert_eq!(vigenere_encrypt("aaaa", "ab").unwrap(), "abab");
    }

    #[test]
    fn test_passthrough_consumes_key_slot() {
        // the space takes the `b` slot, so `b` is shifted by `a` (0)
        assert_eq!(vigenere_encrypt("a b", "ab").unwrap(), "a b");
        assert_eq!(vigenere_encrypt("ab", "ab").unwrap(), "ać");
    }

    #[test]
    fn test_round_trip() {
        let text = "zażółć gęślą jaźń";
        for key in ["klucz", "ż", "ąęśćź"] {
            let encrypted = vigenere_encrypt(text, key).unwrap();
            assert_eq!(vigenere_decrypt(&encrypted, key).unwrap(), text);
        }
    }

    #[test]
    fn test_validate_running_key() {
        assert_eq!(validate_running_key("ażb").unwrap(), vec![0, 34, 2]);
        assert!(validate_running_key("").is_err());
        assert!(validate_running_key("a b").is_err());
    }

    #[test]
    fn test_invalid_keys() {
        assert_eq!(
            vigenere_encrypt("abc", ""),
            Err(CipherError::InvalidRunningKey(String::new()))
        );
        assert_eq!(
            vigenere_decrypt("abc", "Klucz"),
            Err(CipherError::InvalidRunningKey("Klucz".to_string()))
        );
    }
}
