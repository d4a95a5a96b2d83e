//! # Section/Sequence Reconstruction
//!
//! This module turns one notation file's text into an ordered raw token
//! stream.
//!
//! ## Input Convention
//! - `*>[A,A,B]` declares the comma-separated section play order
//! - `*>A` (no bracket) opens the section named `A`
//! - a line starting with a digit is content: `<duration><optional
//!   '.'><token>(<optional alternate chord, discarded>)`
//!
//! ## Reconstruction Rules
//! Content lines are bucketed into the currently open section while a play
//! order is in effect, and into a single unnamed accumulator otherwise.
//! After the scan the sections are concatenated in declared order; sections
//! the order never mentions are dropped, and an order entry naming a
//! section that never appeared is an error. A single-entry play order also
//! opens the section it names, for files that declare one sequence but
//! carry no separate section header.
//!
//! ## Outlier Safeguard
//! A stream that concatenates past 300 tokens is cut to its first 200,
//! regardless of which section produced the excess. This applies on the
//! ordered and the unordered path alike.
//!
//! ## Entry Points
//! - [`extract_chords`] - duration prefixes stripped from each token
//! - [`extract_timed_chords`] - full content lines kept for later
//!   [duration expansion](crate::duration)

use std::collections::HashMap;

use crate::error::KernError;

/// Marker opening the play-order directive, e.g. `*>[A,A,B]`
const ORDER_MARKER: &str = "*>[";
/// Marker opening a named section, e.g. `*>A`
const SECTION_MARKER: &str = "*>";

/// Token streams longer than this are outliers...
const OUTLIER_THRESHOLD: usize = 300;
/// ...and get cut to this many tokens
const OUTLIER_KEEP: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DurationHandling {
    /// Drop the duration prefix and the parenthetical alternate chord
    Strip,
    /// Keep the full content line for downstream expansion
    Keep,
}

/// Extract the ordered token stream with duration prefixes stripped.
///
/// # Example
/// ```
/// use kernchord::extract_chords;
///
/// let text = "*>[A,B]\n*>A\n4C:maj(Amin)\n*>B\n4D:min\n";
/// assert_eq!(extract_chords(text)?, vec!["C:maj", "D:min"]);
/// # Ok::<(), kernchord::KernError>(())
/// ```
pub fn extract_chords(text: &str) -> Result<Vec<String>, KernError> {
    scan(text, DurationHandling::Strip)
}

/// Extract the ordered stream of full content lines, duration prefixes
/// included, ready for [`expand_stream`](crate::duration::expand_stream).
pub fn extract_timed_chords(text: &str) -> Result<Vec<String>, KernError> {
    scan(text, DurationHandling::Keep)
}

fn scan(text: &str, handling: DurationHandling) -> Result<Vec<String>, KernError> {
    let mut sections: HashMap<String, Vec<String>> = HashMap::new();
    let mut order: Vec<String> = Vec::new();
    let mut current: Option<String> = None;
    let mut unnamed: Vec<String> = Vec::new();

    for line in text.trim().lines() {
        if let Some(rest) = line.strip_prefix(ORDER_MARKER) {
            let rest = rest.strip_suffix(']').unwrap_or(rest);
            order = rest.split(',').map(str::to_string).collect();
            // Some files declare a single-section order with no separate
            // section header; open that section right away.
            if order.len() == 1 {
                current = Some(order[0].clone());
                sections.insert(order[0].clone(), Vec::new());
            }
        } else if let Some(name) = line.strip_prefix(SECTION_MARKER) {
            current = Some(name.to_string());
            sections.insert(name.to_string(), Vec::new());
        }

        if line.chars().next().map_or(false, |c| c.is_ascii_digit()) {
            let token = content_of(line, handling);
            match (&current, order.is_empty()) {
                (Some(name), false) => {
                    // current is always present in the map once set
                    if let Some(buffer) = sections.get_mut(name) {
                        buffer.push(token);
                    }
                }
                _ => unnamed.push(token),
            }
        }
    }

    if order.is_empty() {
        return Ok(truncate_outlier(unnamed));
    }

    let mut sequence = Vec::new();
    for name in &order {
        let buffer = sections
            .get(name)
            .ok_or_else(|| KernError::UnknownSection { name: name.clone() })?;
        sequence.extend(buffer.iter().cloned());
    }
    Ok(truncate_outlier(sequence))
}

/// Pull the token out of a content line.
fn content_of(line: &str, handling: DurationHandling) -> String {
    match handling {
        DurationHandling::Keep => line.to_string(),
        DurationHandling::Strip => {
            // a dotted duration marker shifts the content offset by one
            let body = if line.chars().nth(1) == Some('.') {
                &line[2..]
            } else {
                &line[1..]
            };
            // the parenthetical alternate chord is discarded
            match body.find('(') {
                Some(i) => body[..i].to_string(),
                None => body.to_string(),
            }
        }
    }
}

fn truncate_outlier(mut tokens: Vec<String>) -> Vec<String> {
    if tokens.len() > OUTLIER_THRESHOLD {
        tokens.truncate(OUTLIER_KEEP);
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_concatenate_in_declared_order() {
        let text = "*>[B,A]\n*>A\n4C:maj\n*>B\n4D:min\n";
        assert_eq!(extract_chords(text).unwrap(), vec!["D:min", "C:maj"]);
    }

    #[test]
    fn test_repeated_section_in_order_repeats_tokens() {
        let text = "*>[A,A]\n*>A\n4Cmaj7\n";
        assert_eq!(extract_chords(text).unwrap(), vec!["Cmaj7", "Cmaj7"]);
    }

    #[test]
    fn test_single_entry_order_opens_its_own_section() {
        // no separate *>A header
        let text = "*>[A]\n4Cmaj7\n2D-7\n";
        assert_eq!(extract_chords(text).unwrap(), vec!["Cmaj7", "D-7"]);
    }

    #[test]
    fn test_no_order_accumulates_in_file_order() {
        let text = "4Cmaj7\n2.D-7\n1G7\n";
        assert_eq!(extract_chords(text).unwrap(), vec!["Cmaj7", "D-7", "G7"]);
    }

    #[test]
    fn test_dotted_duration_shifts_content_offset() {
        let text = "2.Amin7(Cmaj)\n";
        assert_eq!(extract_chords(text).unwrap(), vec!["Amin7"]);
    }

    #[test]
    fn test_alternate_chord_in_parens_discarded() {
        let text = "4C:maj(Amin)\n";
        assert_eq!(extract_chords(text).unwrap(), vec!["C:maj"]);
    }

    #[test]
    fn test_sections_missing_from_order_are_dropped() {
        let text = "*>[A]\n*>A\n4Cmaj7\n*>B\n4D7\n";
        assert_eq!(extract_chords(text).unwrap(), vec!["Cmaj7"]);
    }

    #[test]
    fn test_order_naming_unknown_section_fails() {
        let text = "*>[A,Z]\n*>A\n4Cmaj7\n";
        assert!(matches!(
            extract_chords(text),
            Err(KernError::UnknownSection { .. })
        ));
    }

    #[test]
    fn test_reopening_a_section_resets_its_buffer() {
        let text = "*>[A]\n*>A\n4Cmaj7\n*>A\n4D7\n";
        assert_eq!(extract_chords(text).unwrap(), vec!["D7"]);
    }

    #[test]
    fn test_outlier_stream_truncates_to_200() {
        let mut text = String::from("*>[A]\n");
        for _ in 0..301 {
            text.push_str("4Cmaj7\n");
        }
        let tokens = extract_chords(&text).unwrap();
        assert_eq!(tokens.len(), 200);
        assert!(tokens.iter().all(|t| t == "Cmaj7"));
    }

    #[test]
    fn test_outlier_rule_applies_without_order_too() {
        let mut text = String::new();
        for _ in 0..301 {
            text.push_str("4Cmaj7\n");
        }
        assert_eq!(extract_chords(&text).unwrap().len(), 200);
    }

    #[test]
    fn test_stream_of_exactly_300_is_untouched() {
        let mut text = String::new();
        for _ in 0..300 {
            text.push_str("4Cmaj7\n");
        }
        assert_eq!(extract_chords(&text).unwrap().len(), 300);
    }

    #[test]
    fn test_timed_extraction_keeps_full_lines() {
        let text = "*>[A]\n2.Amin7(Cmaj)\n1B-\n";
        assert_eq!(
            extract_timed_chords(text).unwrap(),
            vec!["2.Amin7(Cmaj)", "1B-"]
        );
    }

    #[test]
    fn test_content_before_any_section_goes_unnamed_and_is_dropped() {
        // an order exists but no section is open yet when content appears;
        // the stray token lands in the unnamed accumulator, which the
        // ordered result ignores
        let text = "*>[A,B]\n4X7\n*>A\n4Cmaj7\n*>B\n4D7\n";
        assert_eq!(extract_chords(text).unwrap(), vec!["Cmaj7", "D7"]);
    }
}
