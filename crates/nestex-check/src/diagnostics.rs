use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One nesting problem found during a scan.
///
/// `line` is the 1-based line on which the problem was *detected*; for an
/// unterminated open that is the end-of-input line, while the opener's own
/// line travels inside the [`DiagnosticKind`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub line: u32,
    #[serde(flatten)]
    pub kind: DiagnosticKind,
}

/// The three ways a document's nesting can be wrong.
///
/// All spellings are carried as the rendered strings (`"}"`, `"\\end{align}"`)
/// rather than as symbols, so a serialized report stands on its own.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data")]
pub enum DiagnosticKind {
    /// A closing token arrived while nothing was open.
    #[error("unexpected \"{closer}\", closed without opening")]
    UnopenedClose { closer: String },

    /// A closing token arrived that does not match the innermost open
    /// construct. The wrong closer is reported and dropped; the construct
    /// stays open so the true closer can still match later.
    #[error(
        "unexpected \"{got}\", expected \"{expected}\" (to close \"{opener}\" from line {opened_at})"
    )]
    MismatchedClose {
        got: String,
        expected: String,
        opener: String,
        opened_at: u32,
    },

    /// Input ended while this construct was still open.
    #[error(
        "Unexpected end of input, expected \"{expected}\" (to close \"{opener}\" from line {opened_at})"
    )]
    UnterminatedOpen {
        expected: String,
        opener: String,
        opened_at: u32,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            // End-of-input events are not anchored to a token the author
            // wrote, so they render without a line prefix.
            kind @ DiagnosticKind::UnterminatedOpen { .. } => write!(f, "{kind}"),
            kind => write!(f, "Line {}: {kind}", self.line),
        }
    }
}

/// The outcome of scanning one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub diagnostics: Vec<Diagnostic>,
}

impl Report {
    /// True iff the scan produced no diagnostics at all.
    ///
    /// A mismatched close fails the document even when the stack happens to
    /// drain by end of input; leftover opens fail it even when no mismatch
    /// was ever reported. The two signals are independent.
    pub fn balanced(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for diagnostic in &self.diagnostics {
            writeln!(f, "{diagnostic}")?;
        }
        Ok(())
    }
}
