//! # Core Types
//!
//! This module defines the type vocabulary for the simplification pipeline.
//!
//! ## Type Hierarchy
//! ```text
//! SimplifiedChord
//!   ├── root: Root
//!   │     ├── letter: NoteLetter (A-G)
//!   │     └── flat: bool
//!   └── quality: Quality (maj, min, maj7, min7, dom, hdim7, dim)
//! ```
//!
//! ## Key Concepts
//!
//! ### Root
//! The pitch class identifying a chord's fundamental note. Sharps never
//! survive into a `Root` (they are rewritten as the flat of the next natural
//! letter at extraction time), and the flat spelling of C is rewritten to B,
//! so the full output domain is the 13 spellings
//! `A B C D E F G A- B- D- E- F- G-`.
//!
//! ### Quality
//! The closed seven-label harmonic vocabulary. Every classified chord gets
//! exactly one quality.
//!
//! ### Notation
//! The two separator conventions for rendering a [`SimplifiedChord`]:
//! plain (`A-min7`) and MIREX-style (`A-:min7`). The two are not
//! interchangeable within one pipeline run; pick one and stick with it.
//!
//! ## Related Modules
//! - `root` - Extracts `Root` from raw tokens
//! - `classify` - Produces `SimplifiedChord` values
//! - `encode` - Consumes rendered chord strings

use serde::Serialize;
use std::fmt;

/// Natural note letters A through G
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteLetter {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl NoteLetter {
    /// Parse from a single uppercase character
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(NoteLetter::A),
            'B' => Some(NoteLetter::B),
            'C' => Some(NoteLetter::C),
            'D' => Some(NoteLetter::D),
            'E' => Some(NoteLetter::E),
            'F' => Some(NoteLetter::F),
            'G' => Some(NoteLetter::G),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            NoteLetter::A => 'A',
            NoteLetter::B => 'B',
            NoteLetter::C => 'C',
            NoteLetter::D => 'D',
            NoteLetter::E => 'E',
            NoteLetter::F => 'F',
            NoteLetter::G => 'G',
        }
    }

    /// The next natural letter in the scale cycle, wrapping G back to A.
    /// Used when rewriting a sharp as the flat of the next step up.
    pub fn next(&self) -> Self {
        match self {
            NoteLetter::A => NoteLetter::B,
            NoteLetter::B => NoteLetter::C,
            NoteLetter::C => NoteLetter::D,
            NoteLetter::D => NoteLetter::E,
            NoteLetter::E => NoteLetter::F,
            NoteLetter::F => NoteLetter::G,
            NoteLetter::G => NoteLetter::A,
        }
    }
}

impl fmt::Display for NoteLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A canonical root pitch class: a natural letter with an optional flat.
///
/// Constructors normalize the enharmonic duplicate: `C♭` is always rewritten
/// to `B`, so `Root::with_flat(NoteLetter::C)` yields a natural B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Root {
    pub letter: NoteLetter,
    pub flat: bool,
}

impl Root {
    pub fn natural(letter: NoteLetter) -> Self {
        Self { letter, flat: false }
    }

    /// Flat root, with the C♭ → B rewrite applied.
    pub fn with_flat(letter: NoteLetter) -> Self {
        if letter == NoteLetter::C {
            Self {
                letter: NoteLetter::B,
                flat: false,
            }
        } else {
            Self { letter, flat: true }
        }
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.flat {
            write!(f, "{}-", self.letter)
        } else {
            write!(f, "{}", self.letter)
        }
    }
}

/// The closed harmonic-quality vocabulary ("jazz5" labels).
///
/// Exactly one quality is assigned per classified token; the classifiers'
/// rule order guarantees no token resolves to two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quality {
    Maj,
    Min,
    Maj7,
    Min7,
    Dom7,
    HalfDim7,
    Dim7,
}

impl Quality {
    /// Bare label used by the plain rendering convention
    pub fn plain_label(&self) -> &'static str {
        match self {
            Quality::Maj => "maj",
            Quality::Min => "min",
            Quality::Maj7 => "maj7",
            Quality::Min7 => "min7",
            Quality::Dom7 => "dom",
            Quality::HalfDim7 => "hdim7",
            Quality::Dim7 => "dim",
        }
    }

    /// Label used after the colon in the MIREX-style convention
    pub fn mirex_label(&self) -> &'static str {
        match self {
            Quality::Maj => "maj",
            Quality::Min => "min",
            Quality::Maj7 => "maj7",
            Quality::Min7 => "min7",
            Quality::Dom7 => "7",
            Quality::HalfDim7 => "hdim7",
            Quality::Dim7 => "dim7",
        }
    }
}

/// Rendering convention for simplified chords.
///
/// The two conventions produce incompatible vocabularies (`A-min7` vs
/// `A-:min7`); a pipeline run must use one consistently. MIREX is the
/// default since it is what the downstream vocabulary encoding expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Notation {
    /// Bare suffix: `C`, `A-min7`, `Gdom`
    Plain,
    /// Colon-separated: `C:maj`, `A-:min7`, `G:7`
    #[default]
    Mirex,
}

impl Notation {
    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "plain" => Some(Notation::Plain),
            "mirex" => Some(Notation::Mirex),
            _ => None,
        }
    }
}

/// A canonical `<root><quality>` token, the model's vocabulary unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SimplifiedChord {
    pub root: Root,
    pub quality: Quality,
}

impl SimplifiedChord {
    pub fn new(root: Root, quality: Quality) -> Self {
        Self { root, quality }
    }

    /// Render under the given separator convention
    pub fn render(&self, notation: Notation) -> String {
        match notation {
            Notation::Plain => format!("{}{}", self.root, self.quality.plain_label()),
            Notation::Mirex => format!("{}:{}", self.root, self.quality.mirex_label()),
        }
    }
}

impl fmt::Display for SimplifiedChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(Notation::Mirex))
    }
}

/// Which classifier variant to run.
///
/// The two variants diverge in rule precedence and fallback semantics and
/// are deliberately not unified; unifying would silently change output for
/// ambiguous tokens. Callers select one explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Seven-quality ordered-rule classifier
    #[default]
    Jazz5,
    /// Two-quality classifier that folds everything into maj/min
    MajMin,
}

impl Strategy {
    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "jazz5" => Some(Strategy::Jazz5),
            "majmin" => Some(Strategy::MajMin),
            _ => None,
        }
    }
}

/// Per-run diagnostic accumulator.
///
/// Collects tokens that passed the chord check but matched no classification
/// rule. Owned by the caller and threaded through each pipeline run; merge
/// accumulators across runs if aggregate diagnostics are needed. Contents
/// are deduplicated and carry no ordering guarantee.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Diagnostics {
    /// Tokens the seven-quality classifier could only classify via its
    /// absolute major fallback
    pub not_found: Vec<String>,
    /// Tokens longer than two characters that exhausted every maj/min rule.
    /// Believed unreachable for corpus-shaped data; kept reportable until
    /// that is confirmed.
    pub unhandled: Vec<String>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_not_found(&mut self, token: &str) {
        if !self.not_found.iter().any(|t| t == token) {
            self.not_found.push(token.to_string());
        }
    }

    pub(crate) fn record_unhandled(&mut self, token: &str) {
        if !self.unhandled.iter().any(|t| t == token) {
            self.unhandled.push(token.to_string());
        }
    }

    /// Fold another accumulator into this one, keeping entries deduplicated
    pub fn merge(&mut self, other: Diagnostics) {
        for token in other.not_found {
            self.record_not_found(&token);
        }
        for token in other.unhandled {
            self.record_unhandled(&token);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.not_found.is_empty() && self.unhandled.is_empty()
    }
}
