//! Structural state threaded through one document traversal.

use crate::bible::{Book, Verse};

/// Which structural levels are open and where in the text we are.
///
/// At most one instance of each level is open at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraversalState {
    pub introduction: bool,
    pub major_section: bool,
    pub section: bool,
    pub subsection: bool,
    pub paragraph: bool,
    pub chapter: bool,
    pub verse: bool,
    pub footnote: bool,

    pub chapter_number: u32,
    pub verse_number: u32,
    /// Logical chapter of a verse printed inside a neighbouring chapter.
    pub deviating_chapter: Option<u32>,
    /// Characters of the next text node already consumed by a citation.
    pub chars_to_ignore: usize,
}

impl TraversalState {
    /// The chapter verses are currently attributed to.
    pub fn current_chapter(&self) -> u32 {
        self.deviating_chapter.unwrap_or(self.chapter_number)
    }

    pub fn current_verse(&self, book: Book) -> Verse {
        Verse::new(book, self.current_chapter(), self.verse_number)
    }

    /// Number of open levels that the output nests (milestones excluded).
    pub fn open_levels(&self) -> usize {
        [
            self.introduction,
            self.major_section,
            self.section,
            self.subsection,
            self.paragraph,
            self.footnote,
        ]
        .into_iter()
        .filter(|&open| open)
        .count()
    }
}
