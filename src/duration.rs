//! # Duration Expansion
//!
//! Expands duration-prefixed tokens into time-quantized runs on a
//! 4/4-normalized quarter-step grid: each duration code maps to a fixed
//! repeat count and the content token is emitted that many times.
//!
//! The duration vocabulary is closed by design; an unrecognized code is a
//! data-quality defect to surface, never something to default silently.

use crate::error::KernError;

/// Quarter-step repeat count for each duration code
fn repeats_for(code: &str) -> Option<usize> {
    match code {
        "1" => Some(4),
        "2" => Some(2),
        "4" => Some(1),
        "8" => Some(4),
        "2." => Some(3),
        "4." => Some(1),
        "1." => Some(6),
        _ => None,
    }
}

/// Expand one duration-prefixed token into its repeated content run.
///
/// A dotted marker in the second position makes the two-character code the
/// lookup key and shifts the content offset; the parenthetical alternate
/// chord is discarded either way.
///
/// # Example
/// ```
/// use kernchord::expand;
///
/// assert_eq!(expand("2.Amin7(Cmaj)")?, vec!["Amin7", "Amin7", "Amin7"]);
/// assert_eq!(expand("1B-")?, vec!["B-", "B-", "B-", "B-"]);
/// # Ok::<(), kernchord::KernError>(())
/// ```
pub fn expand(token: &str) -> Result<Vec<String>, KernError> {
    let mut chars = token.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => {
            return Err(KernError::UnknownDuration {
                code: String::new(),
                token: String::new(),
            })
        }
    };
    let dotted = chars.next() == Some('.');
    let (code, content) = token.split_at(first.len_utf8() + usize::from(dotted));

    let repeats = repeats_for(code).ok_or_else(|| KernError::UnknownDuration {
        code: code.to_string(),
        token: token.to_string(),
    })?;

    let content = match content.find('(') {
        Some(i) => &content[..i],
        None => content,
    };

    Ok(vec![content.to_string(); repeats])
}

/// Expand a whole token stream, preserving order.
pub fn expand_stream(tokens: &[String]) -> Result<Vec<String>, KernError> {
    let mut expanded = Vec::new();
    for token in tokens {
        expanded.extend(expand(token)?);
    }
    Ok(expanded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_note_repeats_four_times() {
        assert_eq!(expand("1B-").unwrap(), vec!["B-"; 4]);
    }

    #[test]
    fn test_dotted_half_repeats_three_times() {
        assert_eq!(expand("2.Amin7(x)").unwrap(), vec!["Amin7"; 3]);
    }

    #[test]
    fn test_quarter_passes_through_once() {
        assert_eq!(expand("4Cmaj7").unwrap(), vec!["Cmaj7"]);
        assert_eq!(expand("4.Cmaj7").unwrap(), vec!["Cmaj7"]);
    }

    #[test]
    fn test_half_and_dotted_whole() {
        assert_eq!(expand("2G7").unwrap(), vec!["G7"; 2]);
        assert_eq!(expand("1.G7").unwrap(), vec!["G7"; 6]);
    }

    #[test]
    fn test_unknown_code_fails_hard() {
        let err = expand("3Cmaj").unwrap_err();
        assert!(matches!(err, KernError::UnknownDuration { .. }));
        assert_eq!(err.to_string(), "unknown duration code '3' in token '3Cmaj'");
    }

    #[test]
    fn test_stream_expansion_preserves_order() {
        let tokens = vec!["2Cmaj7".to_string(), "4D7".to_string()];
        assert_eq!(
            expand_stream(&tokens).unwrap(),
            vec!["Cmaj7", "Cmaj7", "D7"]
        );
    }
}
