//! Verse coordinates.

use std::fmt;

use super::Book;

/// A position in the biblical text.
///
/// Inside a reference, chapter 0 stands for the whole book and verse 0 for
/// the whole chapter (or its title position). Emitted verses always carry
/// non-zero numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Verse {
    pub book: Book,
    pub chapter: u32,
    pub verse: u32,
}

impl Verse {
    pub const fn new(book: Book, chapter: u32, verse: u32) -> Self {
        Self {
            book,
            chapter,
            verse,
        }
    }

    /// A whole-book reference.
    pub const fn book(book: Book) -> Self {
        Self::new(book, 0, 0)
    }

    /// A whole-chapter reference.
    pub const fn chapter(book: Book, chapter: u32) -> Self {
        Self::new(book, chapter, 0)
    }

    pub fn with_verse(self, verse: u32) -> Self {
        Self { verse, ..self }
    }

    pub fn is_whole_book(&self) -> bool {
        self.chapter == 0 && self.verse == 0
    }

    pub fn is_whole_chapter(&self) -> bool {
        self.chapter != 0 && self.verse == 0
    }
}

impl fmt::Display for Verse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:{}", self.book, self.chapter, self.verse)
    }
}
