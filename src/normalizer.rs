//! Validation and normalization of keys and messages.
//!
//! Plaintext is permissive: whitespace and anything outside the alphabet is
//! dropped and lowercase letters are folded to uppercase. Ciphertext is
//! strict: it must consist solely of uppercase alphabet letters.
//!
//! Whitespace is any character for which [`char::is_whitespace`] holds.

use std::fmt;

use crate::alphabet;
use crate::error::CipherError;

/// A non-empty message reduced to alphabet positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    positions: Vec<u8>,
}

impl NormalizedText {
    /// Number of letters.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always `false`; normalization rejects empty messages.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Alphabet positions of the letters, in message order.
    pub fn positions(&self) -> &[u8] {
        &self.positions
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&alphabet::spell(&self.positions))
    }
}

/// Validates a PolyShift key and converts it to shift amounts.
///
/// Checks run in this order:
/// 1. no non-whitespace content: [`CipherError::EmptyKey`];
/// 2. any whitespace at all: [`CipherError::WhitespaceInKey`];
/// 3. a character outside both cases of the alphabet:
///    [`CipherError::InvalidKeyChar`];
/// 4. two or more letters, all equal: [`CipherError::WeakKey`].
///
/// # Returns
/// The key letters as alphabet positions, lowercase folded to uppercase.
///
/// # Errors
/// Returns the first failing check above.
pub fn normalize_key(key: &str) -> Result<Vec<u8>, CipherError> {
    if key.chars().all(char::is_whitespace) {
        return Err(CipherError::EmptyKey);
    }
    if key.chars().any(char::is_whitespace) {
        return Err(CipherError::WhitespaceInKey);
    }

    let shifts = key
        .chars()
        .map(|c| alphabet::fold_case(c).ok_or(CipherError::InvalidKeyChar))
        .collect::<Result<Vec<u8>, _>>()?;

    if shifts.len() > 1 && shifts.iter().all(|&s| s == shifts[0]) {
        return Err(CipherError::WeakKey);
    }
    Ok(shifts)
}

/// Normalizes a plaintext message.
///
/// Whitespace, digits, punctuation, Latin letters and every other character
/// outside the alphabet are dropped silently. Lowercase letters are folded
/// to uppercase.
///
/// # Errors
/// Returns [`CipherError::EmptyPlaintext`] if no alphabet letter remains.
pub fn normalize_plaintext(text: &str) -> Result<NormalizedText, CipherError> {
    let positions: Vec<u8> = text.chars().filter_map(alphabet::fold_case).collect();
    if positions.is_empty() {
        return Err(CipherError::EmptyPlaintext);
    }
    Ok(NormalizedText { positions })
}

/// Validates a ciphertext message.
///
/// No case folding takes place: a lowercase letter is an invalid character.
/// Whitespace anywhere in the message is reported ahead of invalid
/// characters.
///
/// # Errors
/// - [`CipherError::EmptyCiphertext`] if `text` is empty.
/// - [`CipherError::WhitespaceInCiphertext`] if `text` holds whitespace.
/// - [`CipherError::InvalidCiphertextChar`] if `text` holds any character
///   outside the uppercase alphabet.
pub fn normalize_ciphertext(text: &str) -> Result<NormalizedText, CipherError> {
    if text.is_empty() {
        return Err(CipherError::EmptyCiphertext);
    }
    if text.chars().any(char::is_whitespace) {
        return Err(CipherError::WhitespaceInCiphertext);
    }
    let positions = text
        .chars()
        .map(|c| alphabet::ord(c).ok_or(CipherError::InvalidCiphertextChar))
        .collect::<Result<Vec<u8>, _>>()?;
    Ok(NormalizedText { positions })
}

/// Builds a normalized text from positions already known to be in range.
pub(crate) fn from_positions(positions: Vec<u8>) -> NormalizedText {
    debug_assert!(!positions.is_empty());
    debug_assert!(positions.iter().all(|&p| usize::from(p) < alphabet::SIZE));
    NormalizedText { positions }
}
