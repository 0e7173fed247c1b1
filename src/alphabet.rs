//! The Russian alphabet shared by both ciphers.
//!
//! Letters are identified by their position in [`UPPER`]. Positions are
//! resolved with a direct offset into the Cyrillic block (U+0410..U+042F
//! for uppercase, U+0430..U+044F for lowercase) with `Ё`/`ё` special-cased,
//! since they live outside that block and sit between `Е` and `Ж`.

/// Number of letters in the alphabet.
pub const SIZE: usize = 33;

/// Uppercase alphabet in cipher order.
pub const UPPER: [char; SIZE] = [
    'А', 'Б', 'В', 'Г', 'Д', 'Е', 'Ё', 'Ж', 'З', 'И', 'Й', 'К', 'Л', 'М', 'Н', 'О', 'П', 'Р',
    'С', 'Т', 'У', 'Ф', 'Х', 'Ц', 'Ч', 'Ш', 'Щ', 'Ъ', 'Ы', 'Ь', 'Э', 'Ю', 'Я',
];

/// Lowercase counterparts of [`UPPER`], position for position.
pub const LOWER: [char; SIZE] = [
    'а', 'б', 'в', 'г', 'д', 'е', 'ё', 'ж', 'з', 'и', 'й', 'к', 'л', 'м', 'н', 'о', 'п', 'р',
    'с', 'т', 'у', 'ф', 'х', 'ц', 'ч', 'ш', 'щ', 'ъ', 'ы', 'ь', 'э', 'ю', 'я',
];

/// Position of `Ё` (and `ё`) in the alphabet.
const YO: u8 = 6;

/// Returns the position of an uppercase letter.
///
/// # Returns
/// `Some(0..SIZE)` for a letter of [`UPPER`], `None` for anything else
/// (lowercase letters included).
pub fn ord(c: char) -> Option<u8> {
    match c {
        'Ё' => Some(YO),
        'А'..='Е' => Some((c as u32 - 'А' as u32) as u8),
        'Ж'..='Я' => Some((c as u32 - 'Ж' as u32) as u8 + YO + 1),
        _ => None,
    }
}

/// Returns the position of a lowercase letter of [`LOWER`].
fn lower_ord(c: char) -> Option<u8> {
    match c {
        'ё' => Some(YO),
        'а'..='е' => Some((c as u32 - 'а' as u32) as u8),
        'ж'..='я' => Some((c as u32 - 'ж' as u32) as u8 + YO + 1),
        _ => None,
    }
}

/// Returns the uppercase letter at `position`.
///
/// # Panics
/// Panics if `position >= SIZE`. Positions produced by [`ord`] and
/// [`fold_case`] are always in range.
pub fn chr(position: u8) -> char {
    UPPER[usize::from(position)]
}

/// Folds a letter of either case to its position in the alphabet.
///
/// # Returns
/// The position of `c` if it belongs to [`UPPER`] or [`LOWER`], `None`
/// for any other character.
pub fn fold_case(c: char) -> Option<u8> {
    ord(c).or_else(|| lower_ord(c))
}

/// Returns `true` if `c` is an uppercase letter of the alphabet.
pub fn is_letter(c: char) -> bool {
    ord(c).is_some()
}

/// Renders a sequence of positions as uppercase letters.
pub(crate) fn spell(positions: &[u8]) -> String {
    positions.iter().map(|&p| chr(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ord_chr_roundtrip() {
        for (i, &c) in UPPER.iter().enumerate() {
            assert_eq!(ord(c), Some(i as u8), "ord mismatch for {}", c);
            assert_eq!(chr(i as u8), c);
        }
    }

    #[test]
    fn test_lower_matches_upper() {
        for (i, &c) in LOWER.iter().enumerate() {
            assert_eq!(fold_case(c), Some(i as u8), "fold mismatch for {}", c);
        }
    }

    #[test]
    fn test_yo_placement() {
        assert_eq!(ord('Е'), Some(5));
        assert_eq!(ord('Ё'), Some(6));
        assert_eq!(ord('Ж'), Some(7));
        assert_eq!(ord('Я'), Some(32));
        assert_eq!(fold_case('ё'), Some(6));
    }

    #[test]
    fn test_lowercase_is_not_a_letter() {
        assert_eq!(ord('а'), None);
        assert!(!is_letter('я'));
        assert!(is_letter('Я'));
    }

    #[test]
    fn test_foreign_characters() {
        for c in ['A', 'z', '1', ' ', ',', 'Ѐ', 'Ђ', 'ѐ', 'є', 'Ї', '\u{0400}', '\u{0450}'] {
            assert_eq!(fold_case(c), None, "{:?} must not be a letter", c);
        }
    }

    #[test]
    fn test_spell() {
        assert_eq!(spell(&[16, 17, 9]), "ПРИ");
        assert_eq!(spell(&[]), "");
    }
}
