//! Common interface of the text ciphers.

use crate::error::CipherError;

/// A symmetric cipher over the Russian alphabet.
///
/// `encrypt` accepts natural-language text and normalizes it first;
/// `decrypt` accepts only text made of uppercase alphabet letters. For every
/// plaintext `p` with at least one letter,
/// `decrypt(encrypt(p))` equals `p` with non-letters removed and case folded.
pub trait TextCipher {
    /// Encrypts a plaintext message.
    ///
    /// # Errors
    /// Returns [`CipherError::EmptyPlaintext`] if `plain` holds no alphabet
    /// letter.
    fn encrypt(&self, plain: &str) -> Result<String, CipherError>;

    /// Decrypts a ciphertext message.
    ///
    /// # Errors
    /// Returns [`CipherError::EmptyCiphertext`],
    /// [`CipherError::WhitespaceInCiphertext`] or
    /// [`CipherError::InvalidCiphertextChar`] for malformed ciphertext.
    fn decrypt(&self, cipher: &str) -> Result<String, CipherError>;
}
