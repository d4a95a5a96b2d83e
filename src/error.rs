//! # Error Types
//!
//! This module defines all error types for the kernchord pipeline.
//!
//! Rejected non-chord tokens are not errors: classifiers signal those with
//! `Ok(None)` and batch helpers filter them silently. The variants here are
//! either caller contract violations (`MissingSharp`, `UnknownNote`) or
//! data-quality defects that must surface rather than corrupt the output
//! vocabulary (`UnknownDuration`, `UnknownSection`).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum KernError {
    /// Sharp transposition invoked on a token without a sharp.
    ///
    /// This is a defect in caller logic, not a data problem; silently
    /// returning a wrong root would corrupt the downstream vocabulary.
    #[error("transpose called on '{token}' which has no sharp")]
    MissingSharp { token: String },

    /// A chord-classified token does not start with a natural note letter.
    #[error("'{token}' does not start with a note letter A-G")]
    UnknownNote { token: String },

    /// Duration code outside the closed duration vocabulary.
    ///
    /// # Example
    /// ```
    /// # use kernchord::KernError;
    /// let err = KernError::UnknownDuration {
    ///     code: "3".to_string(),
    ///     token: "3Cmaj".to_string(),
    /// };
    /// assert_eq!(err.to_string(), "unknown duration code '3' in token '3Cmaj'");
    /// ```
    #[error("unknown duration code '{code}' in token '{token}'")]
    UnknownDuration { code: String, token: String },

    /// The play-order directive references a section that never appeared.
    #[error("play order references unknown section '{name}'")]
    UnknownSection { name: String },
}
