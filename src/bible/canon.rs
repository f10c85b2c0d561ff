//! Canon abstraction: which books exist and how many verses each chapter has.

use super::{Book, Verse};

/// One book of a canon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookEntry {
    book: Book,
    /// Verse count per chapter. Index 0 is the front-matter chapter.
    verses_by_chapter: Vec<u16>,
    /// Names the book may be cited by. The first one is the primary name.
    aliases: Vec<String>,
}

impl BookEntry {
    pub fn new<S: Into<String>>(
        book: Book,
        verses_by_chapter: impl Into<Vec<u16>>,
        aliases: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            book,
            verses_by_chapter: verses_by_chapter.into(),
            aliases: aliases.into_iter().map(Into::into).collect(),
        }
    }

    pub fn book(&self) -> Book {
        self.book
    }

    /// Number of biblical chapters (the front-matter chapter is not counted).
    pub fn chapters(&self) -> u32 {
        self.verses_by_chapter.len().saturating_sub(1) as u32
    }

    pub fn verse_count(&self, chapter: u32) -> Option<u32> {
        self.verses_by_chapter
            .get(chapter as usize)
            .map(|&count| u32::from(count))
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn primary_name(&self) -> &str {
        self.aliases.first().map(String::as_str).unwrap_or("")
    }

    /// Case-insensitive full-string alias match.
    pub fn has_alias(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.aliases.iter().any(|alias| alias.to_lowercase() == name)
    }
}

/// Ordered book list with per-chapter verse bounds.
///
/// Canons differ between translation traditions (Joel has 3 chapters in
/// English Bibles and 4 in German ones), so every verse computation goes
/// through a canon.
pub trait Canon {
    /// Every book of the canon, in canonical order.
    fn books(&self) -> &[BookEntry];

    fn entry(&self, book: Book) -> Option<&BookEntry> {
        self.books().iter().find(|entry| entry.book == book)
    }

    /// Position of a book in canonical order.
    fn position(&self, book: Book) -> Option<usize> {
        self.books().iter().position(|entry| entry.book == book)
    }

    /// Resolve a book name against every alias of every book.
    fn find_book(&self, name: &str) -> Option<Book> {
        self.books()
            .iter()
            .find(|entry| entry.has_alias(name))
            .map(|entry| entry.book)
    }

    /// A verse is valid when its book is part of the canon and both numbers
    /// are within bounds. Verse 0 (the title position) is always in bounds.
    fn is_valid(&self, verse: Verse) -> bool {
        self.entry(verse.book).is_some_and(|entry| {
            verse.chapter <= entry.chapters()
                && entry
                    .verse_count(verse.chapter)
                    .is_some_and(|count| verse.verse <= count)
        })
    }

    /// The last verse of a chapter, or of the whole book for chapter 0.
    fn last_verse(&self, book: Book, chapter: u32) -> Option<Verse> {
        let entry = self.entry(book)?;
        let chapter = if chapter == 0 {
            entry.chapters()
        } else {
            chapter
        };
        let count = entry.verse_count(chapter)?;
        Some(Verse::new(book, chapter, count))
    }

    /// The verse following `verse`, rolling over into the next chapter and
    /// then into the next book of the canon.
    ///
    /// Returns `None` only past the final verse of the final book.
    fn successor(&self, verse: Verse) -> Option<Verse> {
        let next = verse.with_verse(verse.verse + 1);
        if self.is_valid(next) {
            return Some(next);
        }

        let next = Verse::new(verse.book, verse.chapter + 1, 1);
        if self.is_valid(next) {
            return Some(next);
        }

        let position = self.position(verse.book)?;
        self.books()
            .get(position + 1)
            .map(|entry| Verse::new(entry.book, 1, 1))
    }
}

/// A canon assembled at runtime from explicit book entries.
#[derive(Debug, Clone, Default)]
pub struct SimpleCanon {
    books: Vec<BookEntry>,
}

impl SimpleCanon {
    pub fn new(books: Vec<BookEntry>) -> Self {
        Self { books }
    }
}

impl Canon for SimpleCanon {
    fn books(&self) -> &[BookEntry] {
        &self.books
    }
}

/// Static description of a canon: book, verse counts, aliases.
pub(crate) type CanonTable = &'static [(Book, &'static [u16], &'static [&'static str])];

pub(crate) fn entries_from_table(table: CanonTable) -> Vec<BookEntry> {
    table
        .iter()
        .map(|&(book, verses, aliases)| BookEntry::new(book, verses, aliases.iter().copied()))
        .collect()
}
