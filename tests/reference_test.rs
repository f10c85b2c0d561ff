//! Citation decoding and verse arithmetic against the NeÜ canon.

use osisgen::bible::{Book, Canon, NeueCanon, Verse};
use osisgen::reference::{
    NumberField, ParseContext, ReferenceError, ReferenceParser, ReferenceSyntax, VerseReference,
};
use proptest::prelude::*;

fn parse_in(book: Book, text: &str) -> Result<Vec<VerseReference>, ReferenceError> {
    let canon = NeueCanon::new();
    let syntax = ReferenceSyntax::default();
    let parser = ReferenceParser::new(&canon, &syntax);
    parser.parse(text, &mut ParseContext::new(book))
}

fn verses(text: &str) -> Vec<Vec<Verse>> {
    let canon = NeueCanon::new();
    parse_in(Book::Jonah, text)
        .unwrap()
        .iter()
        .map(|reference| reference.expand(&canon))
        .collect()
}

// ============================================================================
// Citation forms
// ============================================================================

#[test]
fn test_verse_range() {
    let references = parse_in(Book::Jonah, "Lk 1,2-4").unwrap();
    assert_eq!(
        references,
        vec![VerseReference::Range {
            start: Verse::new(Book::Luke, 1, 2),
            end: Verse::new(Book::Luke, 1, 4),
            text: "Lk 1,2-4".to_string(),
        }]
    );
}

#[test]
fn test_book_carried_across_items() {
    let references = parse_in(Book::Jonah, "Mt 1,2;4,3").unwrap();
    let singles: Vec<Verse> = references
        .iter()
        .map(|reference| match reference {
            VerseReference::Single { verse, .. } => *verse,
            other => panic!("unexpected {other:?}"),
        })
        .collect();
    assert_eq!(
        singles,
        vec![
            Verse::new(Book::Matthew, 1, 2),
            Verse::new(Book::Matthew, 4, 3),
        ]
    );
}

#[test]
fn test_following_verse() {
    let canon = NeueCanon::new();
    let start = Verse::new(Book::Isaiah, 40, 13);
    let references = parse_in(Book::Jonah, "Jesaja 40,13f").unwrap();
    assert_eq!(
        references,
        vec![VerseReference::Range {
            start,
            end: canon.successor(start).unwrap(),
            text: "Jesaja 40,13f".to_string(),
        }]
    );
}

#[test]
fn test_verse_list() {
    assert_eq!(
        verses("Lk 1,8.9.10"),
        vec![vec![
            Verse::new(Book::Luke, 1, 8),
            Verse::new(Book::Luke, 1, 9),
            Verse::new(Book::Luke, 1, 10),
        ]]
    );
    assert!(matches!(
        parse_in(Book::Jonah, "Lk 1,8.9.10").unwrap()[0],
        VerseReference::Multiple { .. }
    ));
}

#[test]
fn test_following_verses_cross_chapter_boundary() {
    assert_eq!(
        verses("Mk 1,44ff"),
        vec![vec![
            Verse::new(Book::Mark, 1, 44),
            Verse::new(Book::Mark, 1, 45),
            Verse::new(Book::Mark, 2, 1),
        ]]
    );
}

#[test]
fn test_cross_chapter_range_expands_through_boundary() {
    let expanded = verses("Mk 1,44-2,2");
    assert_eq!(
        expanded,
        vec![vec![
            Verse::new(Book::Mark, 1, 44),
            Verse::new(Book::Mark, 1, 45),
            Verse::new(Book::Mark, 2, 1),
            Verse::new(Book::Mark, 2, 2),
        ]]
    );
}

#[test]
fn test_whole_book_and_chapter() {
    assert_eq!(verses("Obadja"), vec![vec![Verse::book(Book::Obadiah)]]);
    assert_eq!(verses("Lk 13"), vec![vec![Verse::chapter(Book::Luke, 13)]]);
}

#[test]
fn test_chapter_range() {
    let references = parse_in(Book::Jonah, "Mal 2-3").unwrap();
    assert_eq!(
        references[0],
        VerseReference::Range {
            start: Verse::chapter(Book::Malachi, 2),
            end: Verse::chapter(Book::Malachi, 3),
            text: "Mal 2-3".to_string(),
        }
    );
}

#[test]
fn test_self_reference_resolves_to_current_book() {
    assert_eq!(
        verses("Kapitel 2,1"),
        vec![vec![Verse::new(Book::Jonah, 2, 1)]]
    );
    assert_eq!(verses("2,1"), vec![vec![Verse::new(Book::Jonah, 2, 1)]]);
}

#[test]
fn test_numbered_book_name() {
    assert_eq!(
        verses("1. Mose 1,1"),
        vec![vec![Verse::new(Book::Genesis, 1, 1)]]
    );
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_unknown_book_is_rejected() {
    assert_eq!(
        parse_in(Book::Jonah, "Henoch 1,9"),
        Err(ReferenceError::UnknownBook("Henoch".to_string()))
    );
}

#[test]
fn test_bad_chapter_number_is_rejected() {
    assert!(matches!(
        parse_in(Book::Jonah, "Lk x,3"),
        Err(ReferenceError::InvalidNumber {
            field: NumberField::Chapter,
            ..
        })
    ));
}

// ============================================================================
// Canon arithmetic
// ============================================================================

#[test]
fn test_successor_rolls_over_chapter_and_book() {
    let canon = NeueCanon::new();
    assert_eq!(
        canon.successor(Verse::new(Book::Mark, 1, 45)),
        Some(Verse::new(Book::Mark, 2, 1))
    );
    assert_eq!(
        canon.successor(Verse::new(Book::Malachi, 3, 24)),
        Some(Verse::new(Book::Matthew, 1, 1))
    );
    let last = canon.last_verse(Book::Revelation, 0).unwrap();
    assert_eq!(canon.successor(last), None);
}

/// Every valid, non-title verse of the canon.
fn any_verse() -> impl Strategy<Value = Verse> {
    let canon = NeueCanon::new();
    let books: Vec<Book> = canon.books().iter().map(|entry| entry.book()).collect();
    prop::sample::select(books)
        .prop_flat_map(|book| {
            let chapters = NeueCanon::new().entry(book).map_or(1, |e| e.chapters());
            (Just(book), 1..=chapters)
        })
        .prop_flat_map(|(book, chapter)| {
            let count = NeueCanon::new()
                .entry(book)
                .and_then(|e| e.verse_count(chapter))
                .unwrap_or(1);
            (Just(book), Just(chapter), 1..=count)
        })
        .prop_map(|(book, chapter, verse)| Verse::new(book, chapter, verse))
}

proptest! {
    #[test]
    fn prop_single_verse_range_expands_to_itself(verse in any_verse()) {
        let canon = NeueCanon::new();
        let range = VerseReference::Range {
            start: verse,
            end: verse,
            text: String::new(),
        };
        prop_assert_eq!(range.expand(&canon), vec![verse]);
    }

    #[test]
    fn prop_successor_moves_forward(verse in any_verse()) {
        let canon = NeueCanon::new();
        let key = |v: Verse| (canon.position(v.book), v.chapter, v.verse);
        if let Some(next) = canon.successor(verse) {
            prop_assert!(canon.is_valid(next));
            prop_assert!(key(next) > key(verse));
            prop_assert_eq!(next.verse == 1, verse == canon.last_verse(verse.book, verse.chapter).unwrap());
        } else {
            prop_assert_eq!(verse, canon.last_verse(Book::Revelation, 0).unwrap());
        }
    }

    #[test]
    fn prop_range_to_successor_has_two_verses(verse in any_verse()) {
        let canon = NeueCanon::new();
        if let Some(next) = canon.successor(verse) {
            let range = VerseReference::Range {
                start: verse,
                end: next,
                text: String::new(),
            };
            prop_assert_eq!(range.expand(&canon), vec![verse, next]);
        }
    }
}
