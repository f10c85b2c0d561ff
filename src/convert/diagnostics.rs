//! Non-fatal findings collected during a conversion.

use std::fmt;

use crate::bible::{Book, Verse};
use crate::error::Location;

/// A problem in the source that does not stop the conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Markup with no conversion rule; it was skipped.
    UnknownNode { name: String, location: Location },
    /// External link without `www`; only its text was kept.
    IgnoredHyperlink { target: String, location: Location },
    /// A footnote no `*` marker claimed.
    UnusedFootnote { verse: Verse, content: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnknownNode { name, location } => {
                write!(f, "Unrecognized element '{name}' (at {location})")
            }
            Diagnostic::IgnoredHyperlink { target, location } => {
                write!(f, "Ignoring hyperlink to '{target}' (at {location})")
            }
            Diagnostic::UnusedFootnote { verse, content } => {
                write!(f, "Unused footnote in verse {verse}: {content}")
            }
        }
    }
}

/// Summary of a finished conversion.
#[derive(Debug, Clone, Default)]
pub struct ConversionReport {
    /// Books that had a source document, in output order.
    pub books: Vec<Book>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ConversionReport {
    pub fn unused_footnotes(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d, Diagnostic::UnusedFootnote { .. }))
            .count()
    }
}
