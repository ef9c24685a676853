//! Playfair (digraph matrix) cipher
//!
//! A 6x6 matrix is seeded with the sanitized key, followed by the rest of the
//! alphabet and a single placeholder cell. Plaintext is split into digraphs
//! and each pair is substituted according to its position in the matrix:
//!
//! - same row: take the symbols to the right (wrapping)
//! - same column: take the symbols below (wrapping)
//! - otherwise: swap the columns of the rectangle corners
//!
//! Encryption breaks doubled letters with a filler `x`, but decryption splits
//! the ciphertext into plain two-symbol chunks and only removes a single
//! trailing `x`. Round trips therefore keep inserted fillers, and a
//! placeholder emitted into the ciphertext is stripped again on decryption.

use std::collections::{HashMap, HashSet};

use tracing::trace;

use crate::alphabet::{self, ALPHABET, FILLER, GRID_CELLS, GRID_SIDE, PLACEHOLDER};
use crate::error::{CipherError, Result};

/// Column/row step for encryption (right/down)
const FORWARD: usize = 1;

/// Column/row step for decryption (left/up)
const BACKWARD: usize = GRID_SIDE - 1;

/// Keyed 6x6 substitution matrix
#[derive(Debug, Clone)]
pub struct PlayfairMatrix {
    cells: [[char; GRID_SIDE]; GRID_SIDE],
    positions: HashMap<char, (usize, usize)>,
}

impl PlayfairMatrix {
    /// Build the matrix for `key`.
    ///
    /// The key is lowercased and stripped of non-alphabet characters; repeated
    /// symbols keep only their first occurrence.
    pub fn new(key: &str) -> Self {
        let sanitized = alphabet::sanitize(key);
        trace!(key_len = sanitized.chars().count(), "Building Playfair matrix");

        let mut seen = HashSet::with_capacity(GRID_CELLS);
        let mut symbols: Vec<char> = sanitized
            .chars()
            .chain(ALPHABET.iter().copied())
            .filter(|&c| seen.insert(c))
            .collect();
        symbols.resize(GRID_CELLS, PLACEHOLDER);

        let mut cells = [[PLACEHOLDER; GRID_SIDE]; GRID_SIDE];
        for (i, symbol) in symbols.into_iter().enumerate() {
            cells[i / GRID_SIDE][i % GRID_SIDE] = symbol;
        }
        Self::from_cells(cells)
    }

    /// Wrap an existing grid without any validation.
    ///
    /// When a symbol appears more than once, lookups resolve to its first
    /// occurrence in row-major order.
    pub fn from_cells(cells: [[char; GRID_SIDE]; GRID_SIDE]) -> Self {
        let mut positions = HashMap::with_capacity(GRID_CELLS);
        for (row, line) in cells.iter().enumerate() {
            for (col, &symbol) in line.iter().enumerate() {
                positions.entry(symbol).or_insert((row, col));
            }
        }
        Self { cells, positions }
    }

    pub fn cells(&self) -> &[[char; GRID_SIDE]; GRID_SIDE] {
        &self.cells
    }

    /// Zero-based `(row, col)` of `symbol`
    pub fn position(&self, symbol: char) -> Result<(usize, usize)> {
        self.positions
            .get(&symbol)
            .copied()
            .ok_or(CipherError::SymbolNotFound(symbol))
    }

    /// Encrypt `text`, ignoring every character outside the alphabet
    pub fn encrypt(&self, text: &str) -> Result<String> {
        let sanitized = alphabet::sanitize(text);
        let mut out = String::with_capacity(sanitized.len() + 2);
        for (a, b) in digraphs(&sanitized) {
            let (x, y) = self.substitute(a, b, FORWARD)?;
            out.push(x);
            out.push(y);
        }
        Ok(out)
    }

    /// Decrypt `text` chunk by chunk.
    ///
    /// A dangling last symbol is copied as is, and one trailing filler is
    /// dropped from the result.
    pub fn decrypt(&self, text: &str) -> Result<String> {
        let sanitized: Vec<char> = alphabet::sanitize(text).chars().collect();
        let mut out = String::with_capacity(sanitized.len() * 2);
        for chunk in sanitized.chunks(2) {
            match *chunk {
                [a, b] => {
                    let (x, y) = self.substitute(a, b, BACKWARD)?;
                    out.push(x);
                    out.push(y);
                }
                [a] => out.push(a),
                _ => {}
            }
        }
        if out.ends_with(FILLER) {
            out.pop();
        }
        Ok(out)
    }

    fn substitute(&self, a: char, b: char, step: usize) -> Result<(char, char)> {
        let (row1, col1) = self.position(a)?;
        let (row2, col2) = self.position(b)?;

        let pair = if row1 == row2 {
            (
                self.cells[row1][(col1 + step) % GRID_SIDE],
                self.cells[row2][(col2 + step) % GRID_SIDE],
            )
        } else if col1 == col2 {
            (
                self.cells[(row1 + step) % GRID_SIDE][col1],
                self.cells[(row2 + step) % GRID_SIDE][col2],
            )
        } else {
            (self.cells[row1][col2], self.cells[row2][col1])
        };
        Ok(pair)
    }
}

/// Split sanitized text into digraphs.
///
/// A pair of identical symbols becomes `(symbol, x)` and pairing resumes at the
/// second symbol; an odd last symbol is padded with `x`.
pub fn digraphs(sanitized: &str) -> Vec<(char, char)> {
    let symbols: Vec<char> = sanitized.chars().collect();
    let mut pairs = Vec::with_capacity(symbols.len() / 2 + 1);
    let mut i = 0;
    while i < symbols.len() {
        let a = symbols[i];
        let b = symbols.get(i + 1).copied().unwrap_or(FILLER);
        if a == b {
            pairs.push((a, FILLER));
            i += 1;
        } else {
            pairs.push((a, b));
            i += 2;
        }
    }
    pairs
}

/// Encrypt `text` with a matrix built from `key`
pub fn playfair_encrypt(text: &str, key: &str) -> Result<String> {
    PlayfairMatrix::new(key).encrypt(text)
}

/// Decrypt `text` with a matrix built from `key`
pub fn playfair_decrypt(text: &str, key: &str) -> Result<String> {
    PlayfairMatrix::new(key).decrypt(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_matrix_layout() {
        let matrix = PlayfairMatrix::new("Key!");
        let cells = matrix.cells();
        assert_eq!(cells[0], ['k', 'e', 'y', 'a', 'ą', 'b']);
        assert_eq!(cells[1], ['c', 'ć', 'd', 'ę', 'f', 'g']);
        assert_eq!(cells[5], ['w', 'x', 'z', 'ź', 'ż', PLACEHOLDER]);
    }

    #[test]
    fn test_matrix_contains_alphabet_once() {
        for key in ["", "key", "zażółć gęślą jaźń", "aaaa", "ŻÓŁW"] {
            let matrix = PlayfairMatrix::new(key);
            let flat: Vec<char> = matrix.cells().iter().flatten().copied().collect();
            for symbol in ALPHABET {
                assert_eq!(flat.iter().filter(|&&c| c == symbol).count(), 1);
            }
            assert_eq!(flat.iter().filter(|&&c| c == PLACEHOLDER).count(), 1);
        }
    }

    #[test]
    fn test_digraphs() {
        assert_eq!(digraphs("hello"), vec![('h', 'e'), ('l', 'x'), ('l', 'o')]);
        assert_eq!(digraphs("abc"), vec![('a', 'b'), ('c', 'x')]);
        assert_eq!(digraphs("x"), vec![('x', 'x')]);
        assert!(digraphs("").is_empty());
    }

    #[test]
    fn test_same_row_and_column_rules() {
        let matrix = PlayfairMatrix::new("key");
        assert_eq!(matrix.encrypt("ke").unwrap(), "ey");
        assert_eq!(matrix.decrypt("ey").unwrap(), "ke");
        assert_eq!(matrix.encrypt("kc").unwrap(), "ch");
        assert_eq!(matrix.decrypt("ch").unwrap(), "kc");
    }

    #[test]
    fn test_rules_wrap_around() {
        let matrix = PlayfairMatrix::new("key");
        assert_eq!(matrix.encrypt("wk").unwrap(), "kc");
        assert_eq!(matrix.decrypt("kc").unwrap(), "wk");
    }

    #[test]
    fn test_hello_with_key() {
        let encrypted = playfair_encrypt("Hello", "key").unwrap();
        assert_eq!(encrypted, "ikiźjó");
        assert_eq!(playfair_decrypt(&encrypted, "key").unwrap(), "helxlo");
    }

    #[test]
    fn test_odd_length_filler_stripped() {
        let encrypted = playfair_encrypt("a", "key").unwrap();
        assert_eq!(encrypted, "eź");
        assert_eq!(playfair_decrypt(&encrypted, "key").unwrap(), "a");

        let encrypted = playfair_encrypt("x", "key").unwrap();
        assert_eq!(encrypted, "zz");
        assert_eq!(playfair_decrypt(&encrypted, "key").unwrap(), "x");
    }

    #[test]
    fn test_dangling_symbol_passes_through() {
        assert_eq!(playfair_decrypt("abc", "key").unwrap(), "yąc");
        // The dangling filler itself is the trailing x that gets stripped
        assert_eq!(playfair_decrypt("abx", "key").unwrap(), "yą");
    }

    #[test]
    fn test_placeholder_in_ciphertext_is_lossy() {
        let encrypted = playfair_encrypt("źż", "key").unwrap();
        assert_eq!(encrypted, format!("ż{}", PLACEHOLDER));
        assert_eq!(playfair_decrypt(&encrypted, "key").unwrap(), "ż");
    }

    #[test]
    fn test_symbol_not_found() {
        let matrix = PlayfairMatrix::from_cells([['a'; GRID_SIDE]; GRID_SIDE]);
        assert_eq!(matrix.position('a').unwrap(), (0, 0));
        assert_eq!(matrix.encrypt("ab"), Err(CipherError::SymbolNotFound('b')));
        assert_eq!(matrix.decrypt("ba"), Err(CipherError::SymbolNotFound('b')));
    }
}
