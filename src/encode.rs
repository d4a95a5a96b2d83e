//! # Vocabulary Encoding
//!
//! This module is the collaborator boundary toward a sequence model: it
//! turns batches of simplified chord sequences into padded index sequences.
//!
//! ## Contract
//! - the vocabulary is the sorted, deduplicated set of chords in the batch
//! - chord indices start at 1; index 0 is reserved for the padding symbol
//! - every sequence is truncated and zero-padded to the longest sequence
//!   length in the batch
//!
//! All sequences must use one rendering convention consistently; mixing
//! `A-min7` and `A-:min7` spellings would split the vocabulary.

use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

/// Symbol mapped to index 0 in both directions
pub const PAD_SYMBOL: &str = "pad";

/// Encoded batch: vocabulary, bidirectional chord↔index maps, and the
/// padded index sequences
#[derive(Debug, Clone, Serialize)]
pub struct Encoding {
    /// Sorted deduplicated chord vocabulary (padding symbol excluded)
    pub vocab: Vec<String>,
    pub chord_to_idx: HashMap<String, usize>,
    pub idx_to_chord: HashMap<usize, String>,
    /// One row per input sequence, all rows the same length
    pub padded_sequences: Vec<Vec<usize>>,
    /// Highest index in use plus one, i.e. vocabulary size including padding
    pub vocab_size: usize,
}

/// Encode a batch of chord sequences.
///
/// # Example
/// ```
/// use kernchord::encode_chords;
///
/// let batch = vec![
///     vec!["C:maj".to_string(), "D:min".to_string()],
///     vec!["C:maj".to_string()],
/// ];
/// let encoding = encode_chords(&batch);
/// assert_eq!(encoding.vocab, vec!["C:maj", "D:min"]);
/// assert_eq!(encoding.padded_sequences, vec![vec![1, 2], vec![1, 0]]);
/// assert_eq!(encoding.vocab_size, 3);
/// ```
pub fn encode_chords(sequences: &[Vec<String>]) -> Encoding {
    let vocab: Vec<String> = sequences
        .iter()
        .flatten()
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let mut chord_to_idx: HashMap<String, usize> = vocab
        .iter()
        .enumerate()
        .map(|(i, chord)| (chord.clone(), i + 1))
        .collect();
    let mut idx_to_chord: HashMap<usize, String> = vocab
        .iter()
        .enumerate()
        .map(|(i, chord)| (i + 1, chord.clone()))
        .collect();

    let max_length = sequences.iter().map(Vec::len).max().unwrap_or(0);

    let padded_sequences: Vec<Vec<usize>> = sequences
        .iter()
        .map(|sequence| {
            let mut encoded: Vec<usize> = sequence
                .iter()
                .take(max_length)
                .map(|chord| chord_to_idx[chord.as_str()])
                .collect();
            encoded.resize(max_length, 0);
            encoded
        })
        .collect();

    let vocab_size = vocab.len() + 1;

    chord_to_idx.insert(PAD_SYMBOL.to_string(), 0);
    idx_to_chord.insert(0, PAD_SYMBOL.to_string());

    Encoding {
        vocab,
        chord_to_idx,
        idx_to_chord,
        padded_sequences,
        vocab_size,
    }
}
