//! Polish alphabet module
//!
//! The 35 lowercase letters of the Polish alphabet (including `q`, `v` and `x`)
//! in their canonical order. Every cipher in this crate indexes symbols through
//! this table, so the order must never change.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Canonical symbol order
pub const ALPHABET: [char; 35] = [
    'a', 'ą', 'b', 'c', 'ć', 'd', 'e', 'ę', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'ł', 'm', 'n',
    'ń', 'o', 'ó', 'p', 'q', 'r', 's', 'ś', 't', 'u', 'v', 'w', 'x', 'y', 'z', 'ź', 'ż',
];

/// Number of symbols in the alphabet
pub const ALPHABET_LEN: usize = ALPHABET.len();

/// Smallest accepted shift key
pub const MIN_SHIFT_KEY: i64 = 1;

/// Largest accepted shift key
pub const MAX_SHIFT_KEY: i64 = ALPHABET_LEN as i64 - 1;

/// Side length of the coordinate grid and the Playfair matrix
pub const GRID_SIDE: usize = 6;

/// Number of cells in a 6x6 grid
pub const GRID_CELLS: usize = GRID_SIDE * GRID_SIDE;

/// Non-alphabet symbol filling grid cells past the end of the alphabet
pub const PLACEHOLDER: char = '-';

/// Symbol inserted between doubled letters and after an odd trailing letter
pub const FILLER: char = 'x';

static INDEX: Lazy<HashMap<char, usize>> = Lazy::new(|| {
    ALPHABET
        .iter()
        .enumerate()
        .map(|(i, &symbol)| (symbol, i))
        .collect()
});

/// Position of `symbol` in the alphabet, if it belongs to it
pub fn index_of(symbol: char) -> Option<usize> {
    INDEX.get(&symbol).copied()
}

/// Symbol at `index`, or `None` past the end of the alphabet
pub fn symbol_at(index: usize) -> Option<char> {
    ALPHABET.get(index).copied()
}

/// Whether `symbol` belongs to the alphabet
pub fn contains(symbol: char) -> bool {
    INDEX.contains_key(&symbol)
}

/// Lowercase `text` and drop every character outside the alphabet.
pub fn sanitize(text: &str) -> String {
    text.to_lowercase().chars().filter(|&c| contains(c)).collect()
}
