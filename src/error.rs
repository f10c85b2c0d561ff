//! Error types for osisgen operations.

use std::fmt;

use thiserror::Error;

use crate::reference::ReferenceError;

/// Position in the source text when an error or diagnostic was raised.
///
/// The chapter is the one verses are currently attributed to, so a verse
/// printed inside a neighbouring chapter reports its logical chapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
}

impl Location {
    pub fn new(book: impl Into<String>, chapter: u32, verse: u32) -> Self {
        Self {
            book: book.into(),
            chapter,
            verse,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:{}", self.book, self.chapter, self.verse)
    }
}

/// Errors that can occur while converting a Bible to OSIS.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The source markup does not follow the expected conventions.
    #[error("{message} (at {location})")]
    DataFormat { message: String, location: Location },

    /// A citation could not be decoded.
    #[error("{source} (at {location})")]
    Reference {
        #[source]
        source: ReferenceError,
        location: Location,
    },

    #[error("canon contains no books")]
    EmptyCanon,

    #[error("Missing source document: {0}")]
    MissingDocument(String),

    /// Structural open/close events did not pair up. Carries the depth at
    /// which the mismatch was detected.
    #[error("Unbalanced output at structural depth {0}")]
    Unbalanced(usize),
}

impl Error {
    pub(crate) fn data_format(message: impl Into<String>, location: Location) -> Self {
        Error::DataFormat {
            message: message.into(),
            location,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
