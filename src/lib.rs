//! # kernchord
//!
//! Chord extraction and simplification for **kern jazz corpora.
//!
//! Takes one notation file's text, reconstructs the section play order,
//! and reduces every chord annotation to a canonical `<root><quality>`
//! token from a small closed vocabulary, discarding rests, bare notes and
//! playstyle decoration along the way.
//!
//! ## Pipeline
//! 1. [`extract_chords`] / [`extract_timed_chords`] - section/sequence
//!    reconstruction into an ordered raw token stream
//! 2. [`expand_stream`] - optional duration expansion onto the quarter grid
//! 3. [`batch_simplify`] - classification and simplification under a
//!    selected [`Strategy`]
//! 4. [`encode_chords`] - optional index encoding for a sequence model

pub mod classify;
pub mod duration;
pub mod encode;
pub mod error;
pub mod extract;
pub mod report;
pub mod root;
pub mod types;

pub use classify::{batch_simplify, is_chord, simplify_token, strip_symbols};
pub use duration::{expand, expand_stream};
pub use encode::{encode_chords, Encoding, PAD_SYMBOL};
pub use error::KernError;
pub use extract::{extract_chords, extract_timed_chords};
pub use report::simplification_report;
pub use root::{extract_root, transpose_sharp};
pub use types::{
    Diagnostics, Notation, NoteLetter, Quality, Root, SimplifiedChord, Strategy,
};

/// Run the full pipeline over one notation text.
///
/// Durations are dropped: each chord appears once per annotation. Returns
/// the simplified sequence together with the run's diagnostics.
///
/// # Example
/// ```rust
/// use kernchord::{simplify_text, Strategy};
///
/// let text = "*>[A,B]\n*>A\n4G#min7^\n*>B\n4D-7(Cmaj)\n";
/// let (chords, diagnostics) = simplify_text(text, Strategy::Jazz5)?;
/// let rendered: Vec<String> = chords.iter().map(|c| c.to_string()).collect();
/// assert_eq!(rendered, vec!["A-:min7", "D-:7"]);
/// assert!(diagnostics.is_empty());
/// # Ok::<(), kernchord::KernError>(())
/// ```
pub fn simplify_text(
    text: &str,
    strategy: Strategy,
) -> Result<(Vec<SimplifiedChord>, Diagnostics), KernError> {
    let tokens = extract::extract_chords(text)?;
    let mut diagnostics = Diagnostics::new();
    let chords = classify::batch_simplify(&tokens, strategy, &mut diagnostics)?;
    Ok((chords, diagnostics))
}

/// Run the full pipeline with duration expansion: each chord is repeated
/// according to its duration code on the 4/4 quarter-step grid.
pub fn simplify_text_expanded(
    text: &str,
    strategy: Strategy,
) -> Result<(Vec<SimplifiedChord>, Diagnostics), KernError> {
    let tokens = extract::extract_timed_chords(text)?;
    let expanded = duration::expand_stream(&tokens)?;
    let mut diagnostics = Diagnostics::new();
    let chords = classify::batch_simplify(&expanded, strategy, &mut diagnostics)?;
    Ok((chords, diagnostics))
}

/// Raw-token → simplified-chord pairs for one text, for the
/// [`simplification_report`]. Rejected non-chords are omitted.
pub fn simplification_pairs(
    text: &str,
    strategy: Strategy,
    notation: Notation,
) -> Result<(Vec<(String, String)>, Diagnostics), KernError> {
    let tokens = extract::extract_chords(text)?;
    let mut diagnostics = Diagnostics::new();
    let mut pairs = Vec::new();
    for token in &tokens {
        if let Some(chord) = classify::simplify_token(token, strategy, &mut diagnostics)? {
            pairs.push((token.clone(), chord.render(notation)));
        }
    }
    Ok((pairs, diagnostics))
}
