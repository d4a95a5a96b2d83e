//! Seven-quality ordered-rule classifier.
//!
//! Reduces chords to the full jazz5 vocabulary: maj, min, maj7, min7,
//! dominant seventh, half-diminished seventh and diminished seventh.
//! Tokens that match none of the substring rules fall through to a regex
//! pass for extended/altered/slash shapes, all of which resolve to major;
//! whatever still matches nothing is recorded in the diagnostics and
//! defaults to major as well.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::classify::{is_chord, strip_symbols};
use crate::error::KernError;
use crate::root::extract_root;
use crate::types::{Diagnostics, Quality, SimplifiedChord};

/// Symbol set for note-vs-chord detection. Flat, sharp and accent all count
/// as decoration here: `G#` is a note, not a chord.
const NOTE_SYMBOLS: [char; 3] = ['-', '#', '^'];

/// Decoration stripped before quality matching: accent mark, harmonic or
/// arpeggio marker, pause sign, and the user-assignable symbol. Flats and
/// sharps survive so the fallback patterns can still see altered tones.
const PLAYSTYLE_SYMBOLS: [char; 4] = ['^', '*', ';', '+'];

/// Ordered substring rules; the first match wins. The order is load-bearing:
/// `maj7`/`min7` must precede the bare `7`, which must precede `maj`/`min`,
/// and the half-diminished `h` outranks the diminished `o`.
const QUALITY_RULES: [(&str, Quality); 7] = [
    ("maj7", Quality::Maj7),
    ("min7", Quality::Min7),
    ("h", Quality::HalfDim7),
    ("o", Quality::Dim7),
    ("7", Quality::Dom7),
    ("maj", Quality::Maj),
    ("min", Quality::Min),
];

// Fallback families for shapes outside the substring rules: bare extensions
// like C7/F#9/A-13, add/sus/aug/dim and altered tones, and slash chords.
static BASIC_CHORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-G]#?-?\d{1,2}").unwrap());
static EXTENDED_CHORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-G]#?(add|sus|aug|dim|\d{0,2}(#5|b5|#9|b9))").unwrap());
static SLASH_CHORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-G](#|-)?(/[A-G](#|-)?)?").unwrap());

/// Simplify one token to the seven-quality vocabulary.
pub fn simplify(
    token: &str,
    diagnostics: &mut Diagnostics,
) -> Result<Option<SimplifiedChord>, KernError> {
    if !is_chord(token, &NOTE_SYMBOLS) {
        return Ok(None);
    }

    let root = extract_root(token)?;
    let stripped = strip_symbols(token, &PLAYSTYLE_SYMBOLS);

    // Stripping can reduce a decorated note down to a bare one
    if !is_chord(&stripped, &NOTE_SYMBOLS) {
        return Ok(None);
    }

    for (pattern, quality) in QUALITY_RULES {
        if stripped.contains(pattern) {
            return Ok(Some(SimplifiedChord::new(root, quality)));
        }
    }

    if BASIC_CHORD.is_match(&stripped)
        || EXTENDED_CHORD.is_match(&stripped)
        || SLASH_CHORD.is_match(&stripped)
    {
        return Ok(Some(SimplifiedChord::new(root, Quality::Maj)));
    }

    // Soft fallback: still a chord by the checks above, but nothing matched.
    // Keep it inspectable instead of failing the batch.
    diagnostics.record_not_found(&stripped);
    Ok(Some(SimplifiedChord::new(root, Quality::Maj)))
}
