//! Polish Ciphers Library
//!
//! Classical ciphers over the 35-letter Polish alphabet, intended for teaching.
//! None of them offer any real protection.
//!
//! ## Modules
//!
//! - `alphabet` - The canonical symbol order and lookups shared by every cipher
//! - `config` - Default keys and logging configuration
//! - `crypto` - Caesar, Polybius, Vigenère, Playfair and toy RSA ciphers
//! - `error` - Error types and result definitions
//! - `runner` - Executes a single encrypt/decrypt request

pub mod alphabet;
pub mod config;
pub mod crypto;
pub mod error;
pub mod runner;

// Re-export commonly used types
pub use config::CipherConfig;
pub use crypto::{Algorithm, Direction};
pub use error::{CipherError, Result};
pub use runner::Request;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
