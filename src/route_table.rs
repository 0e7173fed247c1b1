//! RouteTable: columnar route transposition.
//!
//! The message is written into a table row by row, left to right, and read
//! out column by column, right to left, each column top to bottom. Only the
//! last row may be short; its missing cells are skipped when reading.
//!
//! The table is never materialised. [`Layout`] knows the height of every
//! column and yields the row-major index of each cell in route order, which
//! is enough to gather letters for encryption and to scatter them back for
//! decryption.

use crate::cipher::TextCipher;
use crate::error::CipherError;
use crate::normalizer::{self, NormalizedText};

/// Shape of the table for a message of a given length.
struct Layout {
    /// Columns that hold at least one letter.
    width: usize,
    /// Height of the full columns.
    rows: usize,
    /// Columns `0..full_cols` hold `rows` letters, the rest `rows - 1`.
    full_cols: usize,
}

impl Layout {
    /// Computes the layout of `len` letters in a table of `cols` columns.
    ///
    /// Columns beyond the message length stay empty, so the table is
    /// narrowed to `min(cols, len)` columns without changing the route.
    ///
    /// # Parameters
    /// - `cols`: Column count, at least 1.
    /// - `len`: Message length, at least 1.
    fn new(cols: usize, len: usize) -> Self {
        let width = cols.min(len);
        let rows = len.div_ceil(width);
        let full_cols = match len % width {
            0 => width,
            tail => tail,
        };
        Layout {
            width,
            rows,
            full_cols,
        }
    }

    /// Number of letters in column `col`.
    fn height(&self, col: usize) -> usize {
        if col < self.full_cols {
            self.rows
        } else {
            self.rows - 1
        }
    }

    /// Row-major message indices in reading order: columns right to left,
    /// each top to bottom.
    fn route(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.width)
            .rev()
            .flat_map(move |col| (0..self.height(col)).map(move |row| row * self.width + col))
    }
}

/// Route transposition cipher keyed by a column count.
///
/// # Examples
///
/// ```
/// use cyrcipher::RouteTable;
///
/// let cipher = RouteTable::new(3).unwrap();
/// assert_eq!(cipher.encrypt("Привет, мир").unwrap(), "ИТРРЕИПВМ");
/// assert_eq!(cipher.decrypt("ИТРРЕИПВМ").unwrap(), "ПРИВЕТМИР");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteTable {
    cols: usize,
}

impl RouteTable {
    /// Creates a cipher with the given number of table columns.
    ///
    /// Any positive count is accepted: one column leaves messages unchanged
    /// and a count at least the message length reverses it. Counts beyond
    /// the platform's `usize` range behave like `usize::MAX`.
    ///
    /// # Parameters
    /// - `cols`: Number of columns.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidKey`] if `cols <= 0`.
    ///
    /// ```
    /// use cyrcipher::{CipherError, RouteTable};
    ///
    /// assert_eq!(RouteTable::new(0), Err(CipherError::InvalidKey));
    /// assert_eq!(RouteTable::new(-3), Err(CipherError::InvalidKey));
    /// ```
    pub fn new(cols: i64) -> Result<Self, CipherError> {
        if cols <= 0 {
            return Err(CipherError::InvalidKey);
        }
        let cols = usize::try_from(cols).unwrap_or(usize::MAX);
        Ok(RouteTable { cols })
    }

    /// Returns the number of table columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Encrypts a plaintext message.
    ///
    /// # Errors
    /// Returns [`CipherError::EmptyPlaintext`] if `plain` holds no alphabet
    /// letter.
    pub fn encrypt(&self, plain: &str) -> Result<String, CipherError> {
        let text = normalizer::normalize_plaintext(plain)?;
        let letters = text.positions();
        let layout = Layout::new(self.cols, letters.len());
        let positions = layout.route().map(|i| letters[i]).collect();
        Ok(normalizer::from_positions(positions).to_string())
    }

    /// Decrypts a ciphertext message.
    ///
    /// Any non-empty length is a valid ciphertext for any column count.
    ///
    /// # Errors
    /// Returns [`CipherError::EmptyCiphertext`],
    /// [`CipherError::WhitespaceInCiphertext`] or
    /// [`CipherError::InvalidCiphertextChar`] for malformed ciphertext.
    pub fn decrypt(&self, cipher: &str) -> Result<String, CipherError> {
        let text = normalizer::normalize_ciphertext(cipher)?;
        Ok(self.unroute(&text).to_string())
    }

    /// Places ciphertext letters back at their row-major positions.
    fn unroute(&self, text: &NormalizedText) -> NormalizedText {
        let letters = text.positions();
        let layout = Layout::new(self.cols, letters.len());
        let mut positions = vec![0u8; letters.len()];
        for (index, &letter) in layout.route().zip(letters) {
            positions[index] = letter;
        }
        normalizer::from_positions(positions)
    }
}

impl TextCipher for RouteTable {
    fn encrypt(&self, plain: &str) -> Result<String, CipherError> {
        RouteTable::encrypt(self, plain)
    }

    fn decrypt(&self, cipher: &str) -> Result<String, CipherError> {
        RouteTable::decrypt(self, cipher)
    }
}
