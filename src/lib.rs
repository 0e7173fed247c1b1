//! Classical ciphers over the Russian alphabet.
//!
//! Two educational symmetric ciphers working on the 33-letter uppercase
//! alphabet `АБВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯ`:
//!
//! - [`PolyShift`]: polyalphabetic shift (Vigenère-style) keyed by a word of
//!   the alphabet.
//! - [`RouteTable`]: columnar route transposition keyed by a column count.
//!
//! These ciphers offer no confidentiality and exist for teaching only.
//!
//! # Architecture
//!
//! ```text
//! alphabet    (letter table, positions, case folding)
//!     ↓
//! normalizer  (key / plaintext / ciphertext validation)
//!     ↓
//! PolyShift, RouteTable  (TextCipher implementations)
//!     ↓
//! session     (interactive console dialogue used by the binary)
//! ```
//!
//! Plaintext is permissive: anything other than alphabet letters is dropped
//! and lowercase is folded. Ciphertext is strict: only uppercase letters of
//! the alphabet are accepted.
//!
//! # Examples
//!
//! ```
//! use cyrcipher::PolyShift;
//!
//! let cipher = PolyShift::new("Б").unwrap();
//! let secret = cipher.encrypt("Привет, мир!").unwrap();
//! assert_eq!(secret, "РСЙГЁУНЙС");
//! assert_eq!(cipher.decrypt(&secret).unwrap(), "ПРИВЕТМИР");
//! ```
//!
//! Both ciphers implement [`TextCipher`] and can be used interchangeably:
//!
//! ```
//! use cyrcipher::{RouteTable, TextCipher};
//!
//! let cipher: Box<dyn TextCipher> = Box::new(RouteTable::new(5).unwrap());
//! assert_eq!(cipher.encrypt("ПРИВЕТМИР").unwrap(), "ЕВРИИРМПТ");
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod error;
pub mod normalizer;
pub mod session;

mod cipher;
mod poly_shift;
mod route_table;

pub use cipher::TextCipher;
pub use error::CipherError;
pub use poly_shift::PolyShift;
pub use route_table::RouteTable;
