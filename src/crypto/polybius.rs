//! Polybius square cipher
//!
//! Each alphabet symbol is written as its one-based `<row><col>` coordinate in a
//! 6x6 grid laid out row-major. The 36th cell holds no letter, so decoding its
//! coordinate (or any coordinate outside the grid) yields nothing.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::alphabet::{self, GRID_SIDE};

static DIGIT_PAIR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]{2}").unwrap());

/// Encode `text` as space-separated coordinates.
///
/// Characters outside the alphabet are emitted unchanged as their own token,
/// so `"a b"` becomes `"11   13"`.
pub fn polybius_encrypt(text: &str) -> String {
    text.chars()
        .map(|c| match alphabet::index_of(c) {
            Some(index) => format!("{}{}", index / GRID_SIDE + 1, index % GRID_SIDE + 1),
            None => c.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decode every two-digit coordinate found in `text`.
///
/// Everything that is not part of a digit pair is ignored, and pairs that do
/// not address a letter (row or column 0, beyond 6, or the empty last cell)
/// are dropped silently.
pub fn polybius_decrypt(text: &str) -> String {
    DIGIT_PAIR
        .find_iter(text)
        .filter_map(|pair| {
            let digits = pair.as_str().as_bytes();
            let row = usize::from(digits[0] - b'0');
            let col = usize::from(digits[1] - b'0');
            if !(1..=GRID_SIDE).contains(&row) || !(1..=GRID_SIDE).contains(&col) {
                return None;
            }
            alphabet::symbol_at((row - 1) * GRID_SIDE + (col - 1))
        })
        .collect()
}
