//! # Simplification Report
//!
//! Renders a two-column plain-text table grouping original token spellings
//! under the simplified label they were reduced to. Used for eyeballing how
//! much notational noise each vocabulary entry absorbs.

use std::collections::BTreeMap;
use std::fmt::Write;

/// Render the report from raw-token → simplified-chord pairs.
///
/// One row per simplified label (sorted); the original spellings are
/// deduplicated, kept in first-seen order, and word-wrapped to `width`
/// columns in the right-hand column.
///
/// # Example
/// ```
/// use kernchord::simplification_report;
///
/// let pairs = vec![
///     ("Cmaj7".to_string(), "C:maj7".to_string()),
///     ("Cmaj7^".to_string(), "C:maj7".to_string()),
///     ("Dmin".to_string(), "D:min".to_string()),
/// ];
/// let report = simplification_report(&pairs, 60);
/// assert!(report.contains("C:maj7  Cmaj7 Cmaj7^"));
/// assert!(report.contains("D:min   Dmin"));
/// ```
pub fn simplification_report(pairs: &[(String, String)], width: usize) -> String {
    let mut groups: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for (raw, simplified) in pairs {
        let originals = groups.entry(simplified.as_str()).or_default();
        if !originals.contains(&raw.as_str()) {
            originals.push(raw.as_str());
        }
    }

    let label_width = groups.keys().map(|label| label.len()).max().unwrap_or(0);
    let indent = label_width + 2;

    let mut report = String::new();
    for (label, originals) in &groups {
        let _ = write!(report, "{label:<label_width$}  ");
        let mut column = indent;
        for (i, original) in originals.iter().enumerate() {
            if i > 0 {
                // wrap before overflowing the requested width
                if column + 1 + original.len() > width {
                    let _ = write!(report, "\n{:indent$}", "");
                    column = indent;
                } else {
                    report.push(' ');
                    column += 1;
                }
            }
            report.push_str(original);
            column += original.len();
        }
        report.push('\n');
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(entries: &[(&str, &str)]) -> Vec<(String, String)> {
        entries
            .iter()
            .map(|(raw, simplified)| (raw.to_string(), simplified.to_string()))
            .collect()
    }

    #[test]
    fn test_groups_originals_under_label() {
        let report = simplification_report(
            &pairs(&[("Cmaj7", "C:maj7"), ("Cmaj7^", "C:maj7"), ("Dmin", "D:min")]),
            60,
        );
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines, vec!["C:maj7  Cmaj7 Cmaj7^", "D:min   Dmin"]);
    }

    #[test]
    fn test_originals_deduplicate() {
        let report = simplification_report(&pairs(&[("Cmaj7", "C:maj7"), ("Cmaj7", "C:maj7")]), 60);
        assert_eq!(report, "C:maj7  Cmaj7\n");
    }

    #[test]
    fn test_long_groups_wrap_and_indent() {
        let report = simplification_report(
            &pairs(&[("Cmaj7", "C:maj7"), ("Cmaj7^", "C:maj7"), ("Cmaj9", "C:maj7")]),
            16,
        );
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0], "C:maj7  Cmaj7");
        assert_eq!(lines[1], "        Cmaj7^");
        assert_eq!(lines[2], "        Cmaj9");
    }

    #[test]
    fn test_empty_pairs_render_empty() {
        assert_eq!(simplification_report(&[], 60), "");
    }
}
