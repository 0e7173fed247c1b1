//! PolyShift: polyalphabetic shift cipher keyed by a word of the alphabet.
//!
//! Each key letter is a shift amount equal to its alphabet position. Letter
//! `i` of the message is shifted by key letter `i mod |key|`, modulo the
//! alphabet size.

use crate::alphabet::SIZE;
use crate::cipher::TextCipher;
use crate::error::CipherError;
use crate::normalizer::{self, NormalizedText};

/// Alphabet size as a shift modulus.
const MODULUS: u8 = SIZE as u8;

/// Vigenère-style cipher with shifts taken from an alphabet key.
///
/// # Examples
///
/// ```
/// use cyrcipher::PolyShift;
///
/// let cipher = PolyShift::new("БВГ").unwrap();
/// assert_eq!(cipher.encrypt("ааааа").unwrap(), "БВГБВ");
/// assert_eq!(cipher.decrypt("БВГБВ").unwrap(), "ААААА");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolyShift {
    shifts: Vec<u8>,
}

impl PolyShift {
    /// Creates a cipher from a key word.
    ///
    /// Lowercase key letters are folded to uppercase.
    ///
    /// # Parameters
    /// - `key`: The key word, letters of the alphabet only.
    ///
    /// # Errors
    /// Returns [`CipherError::EmptyKey`], [`CipherError::WhitespaceInKey`],
    /// [`CipherError::InvalidKeyChar`] or [`CipherError::WeakKey`]; see
    /// [`normalize_key`](crate::normalizer::normalize_key).
    ///
    /// ```
    /// use cyrcipher::{CipherError, PolyShift};
    ///
    /// assert_eq!(PolyShift::new("ААА"), Err(CipherError::WeakKey));
    /// ```
    pub fn new(key: &str) -> Result<Self, CipherError> {
        let shifts = normalizer::normalize_key(key)?;
        Ok(PolyShift { shifts })
    }

    /// Returns the shift sequence derived from the key.
    pub fn shifts(&self) -> &[u8] {
        &self.shifts
    }

    /// Encrypts a plaintext message.
    ///
    /// # Errors
    /// Returns [`CipherError::EmptyPlaintext`] if `plain` holds no alphabet
    /// letter.
    pub fn encrypt(&self, plain: &str) -> Result<String, CipherError> {
        let text = normalizer::normalize_plaintext(plain)?;
        Ok(self.apply(&text, |p, k| (p + k) % MODULUS))
    }

    /// Decrypts a ciphertext message.
    ///
    /// # Errors
    /// Returns [`CipherError::EmptyCiphertext`],
    /// [`CipherError::WhitespaceInCiphertext`] or
    /// [`CipherError::InvalidCiphertextChar`] for malformed ciphertext.
    pub fn decrypt(&self, cipher: &str) -> Result<String, CipherError> {
        let text = normalizer::normalize_ciphertext(cipher)?;
        Ok(self.apply(&text, |c, k| (c + MODULUS - k) % MODULUS))
    }

    /// Combines every letter with its key shift.
    fn apply(&self, text: &NormalizedText, op: impl Fn(u8, u8) -> u8) -> String {
        let positions = text
            .positions()
            .iter()
            .zip(self.shifts.iter().cycle())
            .map(|(&p, &k)| op(p, k))
            .collect();
        normalizer::from_positions(positions).to_string()
    }
}

impl TextCipher for PolyShift {
    fn encrypt(&self, plain: &str) -> Result<String, CipherError> {
        PolyShift::encrypt(self, plain)
    }

    fn decrypt(&self, cipher: &str) -> Result<String, CipherError> {
        PolyShift::decrypt(self, cipher)
    }
}
