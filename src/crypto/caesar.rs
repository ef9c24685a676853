//! Caesar (shift) cipher
//!
//! Shifts every alphabet symbol by a fixed number of positions, wrapping around
//! the end of the alphabet. Characters outside the alphabet are left untouched.

use crate::alphabet::{self, ALPHABET_LEN, MAX_SHIFT_KEY, MIN_SHIFT_KEY};
use crate::error::{CipherError, Result};

/// Reject keys outside `[MIN_SHIFT_KEY, MAX_SHIFT_KEY]`.
pub fn validate_shift_key(key: i64) -> Result<usize> {
    if !(MIN_SHIFT_KEY..=MAX_SHIFT_KEY).contains(&key) {
        return Err(CipherError::InvalidKeyRange {
            key,
            min: MIN_SHIFT_KEY,
            max: MAX_SHIFT_KEY,
        });
    }
    Ok(key as usize)
}

/// Encrypt `text` by shifting each alphabet symbol `key` positions forward
pub fn caesar_encrypt(text: &str, key: i64) -> Result<String> {
    let shift = validate_shift_key(key)?;
    Ok(shift_text(text, shift))
}

/// Decrypt `text` by shifting each alphabet symbol `key` positions back
pub fn caesar_decrypt(text: &str, key: i64) -> Result<String> {
    let shift = validate_shift_key(key)?;
    Ok(shift_text(text, ALPHABET_LEN - shift))
}

fn shift_text(text: &str, shift: usize) -> String {
    text.chars()
        .map(|c| match alphabet::index_of(c) {
            Some(index) => alphabet::ALPHABET[(index + shift) % ALPHABET_LEN],
            None => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_encrypt_shifts_forward() {
        assert_eq!(caesar_encrypt("abc", 1).unwrap(), "ącć");
        assert_eq!(caesar_decrypt("ącć", 1).unwrap(), "abc");
    }

    #[test]
    fn test_wraps_around_alphabet_end() {
        assert_eq!(caesar_encrypt("ż", 1).unwrap(), "a");
        assert_eq!(caesar_decrypt("a", 1).unwrap(), "ż");
        assert_eq!(caesar_encrypt("a", 34).unwrap(), "ż");
    }

    #[test]
    fn test_non_alphabet_passthrough() {
        assert_eq!(caesar_encrypt("Ala ma kota!", 3).unwrap(), "Anc oc mqwc!");
    }

    #[test]
    fn test_round_trip_all_keys() {
        let text = "zażółćgęśląjaźń";
        for key in MIN_SHIFT_KEY..=MAX_SHIFT_KEY {
            let encrypted = caesar_encrypt(text, key).unwrap();
            assert_eq!(caesar_decrypt(&encrypted, key).unwrap(), text);
        }
    }

    #[test]
    fn test_rejects_out_of_range_keys() {
        for key in [-5, 0, 35, 100] {
            let expected = CipherError::InvalidKeyRange {
                key,
                min: 1,
                max: 34,
            };
            assert_eq!(caesar_encrypt("abc", key), Err(expected.clone()));
            assert_eq!(caesar_decrypt("abc", key), Err(expected));
        }
    }
}
