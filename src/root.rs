//! Root extraction and sharp transposition.
//!
//! Roots can be spelled plain (`G`, `C`), flat (`D-`, `G-`) or sharp
//! (`G#`). Sharps are pruned from the vocabulary by rewriting them as the
//! flat of the next natural letter up, and the flat spelling of C collapses
//! to B, so extraction always lands in the 13-spelling output domain.

use crate::error::KernError;
use crate::types::{NoteLetter, Root};

/// Extract the canonical root pitch class from a raw chord token.
///
/// - `<letter>-...` keeps the flat spelling (`D-7` → `D-`)
/// - `<letter>#...` transposes to the next letter's flat (`G#min7` → `A-`)
/// - anything else takes the first character alone (`Cmaj` → `C`)
///
/// The `C-` → `B` rewrite is applied by the [`Root`] constructors.
///
/// # Example
/// ```
/// use kernchord::{extract_root, NoteLetter, Root};
///
/// assert_eq!(extract_root("D-7")?, Root::with_flat(NoteLetter::D));
/// assert_eq!(extract_root("G#min7")?, Root::with_flat(NoteLetter::A));
/// assert_eq!(extract_root("C-maj")?, Root::natural(NoteLetter::B));
/// # Ok::<(), kernchord::KernError>(())
/// ```
pub fn extract_root(token: &str) -> Result<Root, KernError> {
    let mut chars = token.chars();
    let first = chars.next().ok_or_else(|| KernError::UnknownNote {
        token: token.to_string(),
    })?;

    match chars.next() {
        Some('-') => {
            let letter = note_letter(first, token)?;
            Ok(Root::with_flat(letter))
        }
        Some('#') if NoteLetter::from_char(first).is_some() => transpose_sharp(token),
        _ => {
            let letter = note_letter(first, token)?;
            Ok(Root::natural(letter))
        }
    }
}

/// Rewrite a sharp root as the flat of the next natural letter (`G#` → `A-`,
/// wrapping `B#` → `C-` → `B`).
///
/// Calling this on a token without a sharp is a contract violation and
/// fails hard; it is never an expected runtime condition.
pub fn transpose_sharp(token: &str) -> Result<Root, KernError> {
    if !token.contains('#') {
        return Err(KernError::MissingSharp {
            token: token.to_string(),
        });
    }

    let first = token.chars().next().ok_or_else(|| KernError::UnknownNote {
        token: token.to_string(),
    })?;
    let letter = note_letter(first, token)?;
    Ok(Root::with_flat(letter.next()))
}

fn note_letter(c: char, token: &str) -> Result<NoteLetter, KernError> {
    NoteLetter::from_char(c).ok_or_else(|| KernError::UnknownNote {
        token: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_root_takes_first_char() {
        assert_eq!(extract_root("Cmaj7").unwrap(), Root::natural(NoteLetter::C));
        assert_eq!(extract_root("G").unwrap(), Root::natural(NoteLetter::G));
    }

    #[test]
    fn test_flat_root_keeps_two_chars() {
        assert_eq!(extract_root("D-7").unwrap(), Root::with_flat(NoteLetter::D));
        assert_eq!(extract_root("E-min").unwrap(), Root::with_flat(NoteLetter::E));
    }

    #[test]
    fn test_c_flat_rewrites_to_b() {
        assert_eq!(extract_root("C-7").unwrap(), Root::natural(NoteLetter::B));
    }

    #[test]
    fn test_sharps_transpose_to_next_flat() {
        assert_eq!(
            extract_root("G#min7").unwrap(),
            Root::with_flat(NoteLetter::A)
        );
        assert_eq!(extract_root("C#").unwrap(), Root::with_flat(NoteLetter::D));
        // B# wraps to C-, which collapses to B
        assert_eq!(extract_root("B#7").unwrap(), Root::natural(NoteLetter::B));
    }

    #[test]
    fn test_no_sharp_survives_extraction() {
        for token in ["A#", "C#maj7", "D#min", "F#7", "G#"] {
            let root = extract_root(token).unwrap();
            assert!(!root.to_string().contains('#'), "sharp leaked from {token}");
        }
    }

    #[test]
    fn test_transpose_without_sharp_is_contract_violation() {
        let err = transpose_sharp("Cmaj").unwrap_err();
        assert!(matches!(err, KernError::MissingSharp { .. }));
    }

    #[test]
    fn test_unknown_letter_fails() {
        assert!(matches!(
            extract_root("x-7"),
            Err(KernError::UnknownNote { .. })
        ));
        assert!(matches!(
            transpose_sharp("x#"),
            Err(KernError::UnknownNote { .. })
        ));
    }
}
