//! Error types for the cyrcipher library.

use std::fmt;

/// Errors produced by key validation, text normalization and the ciphers.
///
/// Every failure aborts the current operation without partial output. A
/// cipher instance that reported an error from `encrypt`/`decrypt` remains
/// valid for later calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherError {
    /// Key has no non-whitespace content.
    EmptyKey,
    /// Key contains a whitespace character.
    WhitespaceInKey,
    /// Key contains a character outside the alphabet (either case).
    InvalidKeyChar,
    /// PolyShift key of two or more letters that are all the same.
    WeakKey,
    /// RouteTable column count is zero or negative.
    InvalidKey,
    /// Plaintext holds no alphabet letters after normalization.
    EmptyPlaintext,
    /// Ciphertext is empty.
    EmptyCiphertext,
    /// Ciphertext contains a whitespace character.
    WhitespaceInCiphertext,
    /// Ciphertext contains a character outside the uppercase alphabet.
    InvalidCiphertextChar,
}

impl fmt::Display for CipherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherError::EmptyKey => write!(f, "Empty key"),
            CipherError::WhitespaceInKey => write!(f, "Whitespace in key"),
            CipherError::InvalidKeyChar => write!(f, "Invalid character in key"),
            CipherError::WeakKey => write!(f, "Weak key"),
            CipherError::InvalidKey => {
                write!(f, "Invalid key: column count must be positive")
            }
            CipherError::EmptyPlaintext => write!(f, "Empty open text"),
            CipherError::EmptyCiphertext => write!(f, "Empty cipher text"),
            CipherError::WhitespaceInCiphertext => write!(f, "Whitespace in cipher text"),
            CipherError::InvalidCiphertextChar => {
                write!(f, "Invalid character in cipher text")
            }
        }
    }
}

impl std::error::Error for CipherError {}
