//! Bible references and the citation parser.
//!
//! A citation such as `Mt 1,2;4,3` decodes into one [`VerseReference`] per
//! `;`-separated item. References can be expanded into the concrete verses
//! they cover with the help of a [`Canon`].

mod parser;
mod syntax;

use std::fmt;

use thiserror::Error;

use crate::bible::{Canon, Verse};

pub use parser::{ParseContext, ReferenceParser};
pub use syntax::ReferenceSyntax;

/// Which number of a citation failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberField {
    Chapter,
    ChapterRangeStart,
    ChapterRangeEnd,
    Verse,
    RangeStartVerse,
    RangeEndChapter,
    RangeEndVerse,
}

impl fmt::Display for NumberField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NumberField::Chapter => "chapter number",
            NumberField::ChapterRangeStart => "chapter start number",
            NumberField::ChapterRangeEnd => "chapter end number",
            NumberField::Verse => "verse number",
            NumberField::RangeStartVerse => "start verse number",
            NumberField::RangeEndChapter => "end chapter number",
            NumberField::RangeEndVerse => "end verse number",
        };
        f.write_str(name)
    }
}

/// Errors raised while decoding citation text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReferenceError {
    #[error("Invalid {field} in reference '{reference}'")]
    InvalidNumber {
        field: NumberField,
        reference: String,
    },

    #[error("Unknown book name '{0}'")]
    UnknownBook(String),

    #[error("Invalid chapter range in reference '{0}'")]
    InvalidChapterRange(String),
}

/// A decoded citation, keeping the text it was decoded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerseReference {
    /// One verse, a whole chapter (verse 0) or a whole book (chapter 0).
    Single { verse: Verse, text: String },
    /// An inclusive span of verses, possibly crossing chapters.
    Range {
        start: Verse,
        end: Verse,
        text: String,
    },
    /// Listed verses of one chapter.
    Multiple { verses: Vec<Verse>, text: String },
}

impl VerseReference {
    /// The citation text this reference was decoded from.
    pub fn text(&self) -> &str {
        match self {
            VerseReference::Single { text, .. }
            | VerseReference::Range { text, .. }
            | VerseReference::Multiple { text, .. } => text,
        }
    }

    /// Every concrete verse the reference covers.
    ///
    /// A range ending on verse 0 runs to the end of that chapter and keeps
    /// the end chapter's title position ahead of its first verse, so the
    /// result is in canonical order. Walking stops once the canonical
    /// position passes the end verse, so a reversed range yields only its
    /// end.
    pub fn expand(&self, canon: &dyn Canon) -> Vec<Verse> {
        match self {
            VerseReference::Single { verse, .. } => vec![*verse],
            VerseReference::Multiple { verses, .. } => verses.clone(),
            VerseReference::Range { start, end, .. } => expand_range(canon, *start, *end),
        }
    }
}

fn expand_range(canon: &dyn Canon, start: Verse, end: Verse) -> Vec<Verse> {
    if start == end {
        return vec![start];
    }

    let last = if end.verse == 0 {
        canon.last_verse(end.book, end.chapter).unwrap_or(end)
    } else {
        end
    };
    let key = |verse: Verse| {
        canon
            .position(verse.book)
            .map(|position| (position, verse.chapter, verse.verse))
    };

    let mut verses = Vec::new();
    if let Some(last_key) = key(last) {
        let mut current = Some(start);
        while let Some(verse) = current {
            match key(verse) {
                Some(k) if k <= last_key => verses.push(verse),
                _ => break,
            }
            if verse == last {
                break;
            }
            current = canon.successor(verse);
        }
    }

    if !verses.contains(&end) {
        let end_key = key(end);
        let at = verses
            .iter()
            .position(|&verse| key(verse) > end_key)
            .unwrap_or(verses.len());
        verses.insert(at, end);
    }
    verses
}

impl fmt::Display for VerseReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bible::{Book, BookEntry, SimpleCanon};

    fn canon() -> SimpleCanon {
        SimpleCanon::new(vec![
            BookEntry::new(Book::Obadiah, vec![0, 21], ["Obd"]),
            BookEntry::new(Book::Jonah, vec![0, 16, 11, 10, 11], ["Jona"]),
        ])
    }

    fn range(start: Verse, end: Verse) -> VerseReference {
        VerseReference::Range {
            start,
            end,
            text: String::new(),
        }
    }

    #[test]
    fn test_expand_range_within_chapter() {
        let verses = range(Verse::new(Book::Jonah, 1, 2), Verse::new(Book::Jonah, 1, 4))
            .expand(&canon());
        assert_eq!(
            verses,
            vec![
                Verse::new(Book::Jonah, 1, 2),
                Verse::new(Book::Jonah, 1, 3),
                Verse::new(Book::Jonah, 1, 4),
            ]
        );
    }

    #[test]
    fn test_expand_range_across_books() {
        let verses = range(Verse::new(Book::Obadiah, 1, 20), Verse::new(Book::Jonah, 1, 1))
            .expand(&canon());
        assert_eq!(
            verses,
            vec![
                Verse::new(Book::Obadiah, 1, 20),
                Verse::new(Book::Obadiah, 1, 21),
                Verse::new(Book::Jonah, 1, 1),
            ]
        );
    }

    #[test]
    fn test_expand_reversed_range_yields_end() {
        let end = Verse::new(Book::Jonah, 1, 2);
        let verses = range(Verse::new(Book::Jonah, 2, 5), end).expand(&canon());
        assert_eq!(verses, vec![end]);
    }

    #[test]
    fn test_expand_chapter_range() {
        let verses = range(Verse::chapter(Book::Jonah, 3), Verse::chapter(Book::Jonah, 4))
            .expand(&canon());
        assert_eq!(verses.first(), Some(&Verse::chapter(Book::Jonah, 3)));
        assert_eq!(verses.len(), 1 + 10 + 11 + 1);
        assert_eq!(verses[11], Verse::chapter(Book::Jonah, 4));
        assert_eq!(verses[12], Verse::new(Book::Jonah, 4, 1));
        assert_eq!(verses.last(), Some(&Verse::new(Book::Jonah, 4, 11)));

        let keys: Vec<_> = verses.iter().map(|v| (v.chapter, v.verse)).collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(keys, sorted);
    }
}
