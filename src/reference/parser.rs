//! Citation text decoder.

use super::{NumberField, ReferenceError, ReferenceSyntax, VerseReference};
use crate::bible::{Book, Canon, Verse};

/// Book context a citation is resolved in.
///
/// Citations without a book name refer to the book cited last in the same
/// context, or to the book being converted when nothing was cited yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseContext {
    current_book: Book,
    last_book: Option<Book>,
}

impl ParseContext {
    pub fn new(current_book: Book) -> Self {
        Self {
            current_book,
            last_book: None,
        }
    }

    pub fn current_book(&self) -> Book {
        self.current_book
    }

    pub fn last_book(&self) -> Option<Book> {
        self.last_book
    }

    pub fn clear_last_book(&mut self) {
        self.last_book = None;
    }
}

/// Decodes free-form citations like `Mk 1,1-3,2` into [`VerseReference`]s.
pub struct ReferenceParser<'a> {
    canon: &'a dyn Canon,
    syntax: &'a ReferenceSyntax,
}

impl<'a> ReferenceParser<'a> {
    pub fn new(canon: &'a dyn Canon, syntax: &'a ReferenceSyntax) -> Self {
        Self { canon, syntax }
    }

    pub fn syntax(&self) -> &ReferenceSyntax {
        self.syntax
    }

    /// Parse every `;`-separated item of `text`. Empty items are skipped.
    pub fn parse(
        &self,
        text: &str,
        context: &mut ParseContext,
    ) -> Result<Vec<VerseReference>, ReferenceError> {
        text.split(|c: char| self.syntax.is_item_separator(c))
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(|item| self.parse_item(item, context))
            .collect()
    }

    /// The book name a citation item starts with, or `""` when it has none.
    pub fn book_name<'t>(&self, item: &'t str) -> &'t str {
        item[..self.book_end(item)].trim()
    }

    /// Byte offset where the book name of `item` ends.
    ///
    /// The book name ends with the last letter before the first
    /// chapter/verse separator, so "Jesaja 40,13f" keeps its suffix and
    /// "1. Mose 3,5" keeps its leading numeral.
    fn book_end(&self, item: &str) -> usize {
        let syntax = self.syntax;
        let search = match item.find(|c: char| syntax.is_chapter_verse_separator(c)) {
            Some(separator) if separator > 0 => {
                let before = item[..separator]
                    .char_indices()
                    .next_back()
                    .map_or(0, |(i, _)| i);
                &item[..before]
            }
            _ => item,
        };
        end_of_last_letter(search)
    }

    fn parse_item(
        &self,
        item: &str,
        context: &mut ParseContext,
    ) -> Result<VerseReference, ReferenceError> {
        let syntax = self.syntax;
        let text = item.to_string();

        let book_end = self.book_end(item);
        let (book_text, rest) = item.split_at(book_end);

        let book = self.resolve_book(book_text.trim(), context)?;
        let rest = rest
            .trim()
            .trim_start_matches(|c: char| syntax.is_list_separator(c));
        if rest.trim().is_empty() {
            if book_end == item.len() {
                return Ok(VerseReference::Single {
                    verse: Verse::book(book),
                    text,
                });
            }
            return Err(invalid(NumberField::Chapter, item));
        }

        let Some((chapter_text, separator, verses_text)) = split_at_first(rest, |c| {
            syntax.is_chapter_verse_separator(c) || syntax.is_range_separator(c)
        }) else {
            let chapter = number(rest, NumberField::Chapter, item)?;
            return Ok(VerseReference::Single {
                verse: Verse::chapter(book, chapter),
                text,
            });
        };

        if syntax.is_range_separator(separator) {
            if chapter_text.trim().is_empty() || verses_text.trim().is_empty() {
                return Err(ReferenceError::InvalidChapterRange(text));
            }
            let start = number(chapter_text, NumberField::ChapterRangeStart, item)?;
            let end = number(verses_text, NumberField::ChapterRangeEnd, item)?;
            return Ok(VerseReference::Range {
                start: Verse::chapter(book, start),
                end: Verse::chapter(book, end),
                text,
            });
        }

        let chapter = number(chapter_text, NumberField::Chapter, item)?;
        let verses_text = verses_text.trim();
        let has_range = verses_text.contains(|c: char| syntax.is_range_separator(c));
        let has_list = verses_text.contains(|c: char| syntax.is_list_separator(c));

        if let Some((single, plural)) = syntax.strip_following_marker(verses_text)
            && !single.contains(|c: char| syntax.is_range_separator(c) || syntax.is_list_separator(c))
        {
            let start = Verse::new(book, chapter, number(single, NumberField::Verse, item)?);
            let mut end = self.canon.successor(start).unwrap_or(start);
            if plural {
                end = self.canon.successor(end).unwrap_or(end);
            }
            return Ok(VerseReference::Range { start, end, text });
        }

        match (has_range, has_list) {
            (false, false) => Ok(VerseReference::Single {
                verse: Verse::new(book, chapter, number(verses_text, NumberField::Verse, item)?),
                text,
            }),
            (true, true) => {
                // Sub-ranges stay inside the chapter.
                let last_verse = self
                    .canon
                    .entry(book)
                    .and_then(|entry| entry.verse_count(chapter))
                    .unwrap_or(0);
                let mut numbers = Vec::new();
                for piece in list_pieces(syntax, verses_text) {
                    match split_at_first(piece, |c: char| syntax.is_range_separator(c)) {
                        None => numbers.push(number(piece, NumberField::Verse, item)?),
                        Some((start, _, end)) => {
                            let start = number(start, NumberField::RangeStartVerse, item)?;
                            let end = number(end, NumberField::RangeEndVerse, item)?;
                            if end < start || end > last_verse {
                                return Err(invalid(NumberField::RangeEndVerse, item));
                            }
                            numbers.extend(start..=end);
                        }
                    }
                }
                numbers.sort_unstable();
                numbers.dedup();
                self.multiple(book, chapter, numbers, text)
            }
            (true, false) => {
                let Some((start, _, end)) =
                    split_at_first(verses_text, |c: char| syntax.is_range_separator(c))
                else {
                    return Err(invalid(NumberField::RangeStartVerse, item));
                };
                let start = Verse::new(
                    book,
                    chapter,
                    number(start, NumberField::RangeStartVerse, item)?,
                );
                let end_separator = |c: char| syntax.is_chapter_verse_separator(c);
                let end = match split_at_first(end.trim(), end_separator) {
                    None => Verse::new(book, chapter, number(end, NumberField::RangeEndVerse, item)?),
                    Some((end_chapter, _, end_verse)) => Verse::new(
                        book,
                        number(end_chapter, NumberField::RangeEndChapter, item)?,
                        number(end_verse, NumberField::RangeEndVerse, item)?,
                    ),
                };
                Ok(VerseReference::Range { start, end, text })
            }
            (false, true) => {
                let numbers = list_pieces(syntax, verses_text)
                    .map(|piece| number(piece, NumberField::Verse, item))
                    .collect::<Result<Vec<_>, _>>()?;
                self.multiple(book, chapter, numbers, text)
            }
        }
    }

    fn multiple(
        &self,
        book: Book,
        chapter: u32,
        numbers: Vec<u32>,
        text: String,
    ) -> Result<VerseReference, ReferenceError> {
        if numbers.is_empty() {
            return Err(invalid(NumberField::Verse, &text));
        }
        let verses = numbers
            .into_iter()
            .map(|verse| Verse::new(book, chapter, verse))
            .collect();
        Ok(VerseReference::Multiple { verses, text })
    }

    fn resolve_book(
        &self,
        name: &str,
        context: &mut ParseContext,
    ) -> Result<Book, ReferenceError> {
        let book = if name.is_empty() {
            context.last_book.unwrap_or(context.current_book)
        } else if self.syntax.is_self_reference(name) {
            context.current_book
        } else {
            self.canon
                .find_book(name)
                .ok_or_else(|| ReferenceError::UnknownBook(name.to_string()))?
        };
        context.last_book = Some(book);
        Ok(book)
    }
}

fn invalid(field: NumberField, reference: &str) -> ReferenceError {
    ReferenceError::InvalidNumber {
        field,
        reference: reference.to_string(),
    }
}

fn number(text: &str, field: NumberField, reference: &str) -> Result<u32, ReferenceError> {
    text.trim()
        .parse()
        .map_err(|_| invalid(field, reference))
}

/// Non-empty pieces of a `.`-separated verse list.
fn list_pieces<'t>(syntax: &'t ReferenceSyntax, text: &'t str) -> impl Iterator<Item = &'t str> {
    text.split(move |c: char| syntax.is_list_separator(c))
        .filter(|piece| !piece.trim().is_empty())
}

/// Byte offset just past the last alphabetic character, or 0.
fn end_of_last_letter(text: &str) -> usize {
    text.char_indices()
        .rev()
        .find(|(_, c)| c.is_alphabetic())
        .map_or(0, |(i, c)| i + c.len_utf8())
}

/// Split around the first character matching `pred`.
fn split_at_first(text: &str, pred: impl Fn(char) -> bool) -> Option<(&str, char, &str)> {
    text.char_indices()
        .find(|&(_, c)| pred(c))
        .map(|(i, c)| (&text[..i], c, &text[i + c.len_utf8()..]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bible::NeueCanon;

    fn parse(text: &str) -> Result<Vec<VerseReference>, ReferenceError> {
        let canon = NeueCanon::new();
        let syntax = ReferenceSyntax::default();
        let parser = ReferenceParser::new(&canon, &syntax);
        parser.parse(text, &mut ParseContext::new(Book::Mark))
    }

    fn single(text: &str) -> VerseReference {
        let mut references = parse(text).unwrap();
        assert_eq!(references.len(), 1, "{text}");
        references.remove(0)
    }

    #[test]
    fn test_whole_book() {
        match single("Lukas") {
            VerseReference::Single { verse, .. } => assert_eq!(verse, Verse::book(Book::Luke)),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_single_chapter() {
        match single("Lk 13") {
            VerseReference::Single { verse, .. } => {
                assert_eq!(verse, Verse::chapter(Book::Luke, 13))
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_chapter_range_with_en_dash() {
        match single("Lk 1–3") {
            VerseReference::Range { start, end, .. } => {
                assert_eq!(start, Verse::chapter(Book::Luke, 1));
                assert_eq!(end, Verse::chapter(Book::Luke, 3));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_cross_chapter_range() {
        match single("Mk 1,1-3,2") {
            VerseReference::Range { start, end, .. } => {
                assert_eq!(start, Verse::new(Book::Mark, 1, 1));
                assert_eq!(end, Verse::new(Book::Mark, 3, 2));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_list_with_ranges_is_sorted_and_unique() {
        match single("2. Mose 3,8.13-15.14") {
            VerseReference::Multiple { verses, .. } => {
                let numbers: Vec<u32> = verses.iter().map(|v| v.verse).collect();
                assert_eq!(numbers, vec![8, 13, 14, 15]);
                assert!(verses.iter().all(|v| v.book == Book::Exodus && v.chapter == 3));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_list_sub_range_is_bounded_by_chapter() {
        for text in ["Lk 1,1-4000000000.3", "Lk 1,5-81.3", "Lk 1,9-4.12"] {
            assert!(
                matches!(
                    parse(text),
                    Err(ReferenceError::InvalidNumber {
                        field: NumberField::RangeEndVerse,
                        ..
                    })
                ),
                "{text}"
            );
        }
        match single("Lk 1,78-80.3") {
            VerseReference::Multiple { verses, .. } => {
                let numbers: Vec<u32> = verses.iter().map(|v| v.verse).collect();
                assert_eq!(numbers, vec![3, 78, 79, 80]);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_plain_list_keeps_order() {
        match single("Lk 1,10.8") {
            VerseReference::Multiple { verses, .. } => {
                let numbers: Vec<u32> = verses.iter().map(|v| v.verse).collect();
                assert_eq!(numbers, vec![10, 8]);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_following_marker_with_dot() {
        match single("Jesaja 40,13ff.") {
            VerseReference::Range { start, end, .. } => {
                assert_eq!(start, Verse::new(Book::Isaiah, 40, 13));
                assert_eq!(end, Verse::new(Book::Isaiah, 40, 15));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_self_reference_word() {
        match single("Kap. 3,5") {
            VerseReference::Single { verse, .. } => {
                assert_eq!(verse, Verse::new(Book::Mark, 3, 5))
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_missing_book_uses_current_book() {
        match single("3,5") {
            VerseReference::Single { verse, .. } => {
                assert_eq!(verse, Verse::new(Book::Mark, 3, 5))
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_unknown_book() {
        assert_eq!(
            parse("Xyz 1,2"),
            Err(ReferenceError::UnknownBook("Xyz".to_string()))
        );
    }

    #[test]
    fn test_invalid_verse_number() {
        assert!(matches!(
            parse("Lk 1,x2"),
            Err(ReferenceError::InvalidNumber {
                field: NumberField::Verse,
                ..
            })
        ));
    }

    #[test]
    fn test_empty_items_are_skipped() {
        assert!(parse(" ; ;").unwrap().is_empty());
        assert_eq!(parse("Lk 1,2;").unwrap().len(), 1);
    }

    #[test]
    fn test_context_remembers_last_book() {
        let canon = NeueCanon::new();
        let syntax = ReferenceSyntax::default();
        let parser = ReferenceParser::new(&canon, &syntax);
        let mut context = ParseContext::new(Book::Mark);

        parser.parse("Lk 1,2", &mut context).unwrap();
        assert_eq!(context.last_book(), Some(Book::Luke));
        let references = parser.parse("4,3", &mut context).unwrap();
        assert_eq!(
            references[0],
            VerseReference::Single {
                verse: Verse::new(Book::Luke, 4, 3),
                text: "4,3".to_string(),
            }
        );

        context.clear_last_book();
        let references = parser.parse("4,3", &mut context).unwrap();
        assert!(matches!(
            references[0],
            VerseReference::Single { verse, .. } if verse.book == Book::Mark
        ));
    }
}
