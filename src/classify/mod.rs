//! # Chord Classification
//!
//! This module decides whether a raw token is a chord at all and, if so,
//! reduces it to a [`SimplifiedChord`].
//!
//! ## Two Strategies
//!
//! Two classifier variants exist and are deliberately kept separate:
//!
//! - [`jazz5`] - seven-quality ordered-rule classifier with a regex fallback
//!   pass that folds unknown shapes into major
//! - [`majmin`] - folds everything into major or minor, with its own rule
//!   precedence and fallback triggers
//!
//! The variants diverge in precedence and fallback semantics (e.g. `dim`
//! resolves to the diminished family in one and to minor in the other), so
//! they produce different output for ambiguous tokens. They are not
//! reconcilable into one rule set without changing output; callers select
//! one via [`Strategy`] and use it consistently.
//!
//! ## Shared Pipeline Shape
//!
//! Each variant runs the same pass ordering over a token:
//!
//! 1. chord/note check on the raw token
//! 2. root extraction (before stripping, so flats/sharps are still visible)
//! 3. playstyle-symbol stripping with the variant's symbol set
//! 4. chord/note check again (stripping can reduce `C^` to a bare `C`)
//! 5. ordered quality rules, first match wins
//!
//! ## Entry Points
//! - [`simplify_token`] - one token through the selected strategy
//! - [`batch_simplify`] - a token stream, silently dropping non-chords

pub mod jazz5;
pub mod majmin;

use crate::error::KernError;
use crate::types::{Diagnostics, SimplifiedChord, Strategy};

/// Decide whether a token is a chord annotation or a bare note/rest.
///
/// Rejects when a rest marker `r` appears in the first two characters, and
/// when the token (after normalizing every `C-` spelling to `B`) is at most
/// two characters matching `<A-G><optional symbol>` for the given symbol
/// set. The empty token is rejected outright. Everything else is presumed
/// to be a chord.
pub fn is_chord(token: &str, note_symbols: &[char]) -> bool {
    if token.is_empty() {
        return false;
    }
    if token.chars().take(2).any(|c| c == 'r') {
        return false;
    }

    let token = token.replace("C-", "B");
    if token.chars().count() <= 2 {
        let mut chars = token.chars();
        if let Some(first) = chars.next() {
            if ('A'..='G').contains(&first) {
                match chars.next() {
                    None => return false,
                    Some(second) if note_symbols.contains(&second) => return false,
                    Some(_) => {}
                }
            }
        }
    }

    true
}

/// Delete every occurrence of each symbol from the token.
///
/// Plain character deletion, order-independent; stripping twice yields the
/// same result as stripping once.
pub fn strip_symbols(token: &str, symbols: &[char]) -> String {
    token.chars().filter(|c| !symbols.contains(c)).collect()
}

/// Simplify one raw token under the selected strategy.
///
/// `Ok(None)` means the token was rejected as not-a-chord (a rest, a bare
/// note, or a decorated note); callers filter these out silently. Errors
/// are contract violations and must not be swallowed.
pub fn simplify_token(
    token: &str,
    strategy: Strategy,
    diagnostics: &mut Diagnostics,
) -> Result<Option<SimplifiedChord>, KernError> {
    match strategy {
        Strategy::Jazz5 => jazz5::simplify(token, diagnostics),
        Strategy::MajMin => majmin::simplify(token, diagnostics),
    }
}

/// Simplify a token stream, dropping rejected non-chords.
pub fn batch_simplify(
    tokens: &[String],
    strategy: Strategy,
    diagnostics: &mut Diagnostics,
) -> Result<Vec<SimplifiedChord>, KernError> {
    let mut chords = Vec::new();
    for token in tokens {
        if let Some(chord) = simplify_token(token, strategy, diagnostics)? {
            chords.push(chord);
        }
    }
    Ok(chords)
}
