//! Footnote prescan: which footnote block belongs to which verse.
//!
//! Footnote blocks sit at the end of a chapter in the source while their
//! `*` markers sit in the running text. The prescan reads the citation at
//! the start of every block and queues the block under each cited verse;
//! the walker later pops blocks as it meets markers.

use std::collections::{HashMap, VecDeque};

use log::debug;

use crate::bible::{BookEntry, Canon, Verse};
use crate::dom::{Document, NodeId, NodeKind};
use crate::error::{Error, Location, Result};
use crate::reference::{ParseContext, ReferenceParser};

/// One footnote block and the verses it was queued under.
#[derive(Debug, Clone)]
pub struct FootnoteRecord {
    pub node: NodeId,
    pub verses: Vec<Verse>,
    consumed: bool,
}

impl FootnoteRecord {
    pub fn is_consumed(&self) -> bool {
        self.consumed
    }
}

/// Per-verse FIFO queues of footnote blocks.
///
/// A block cited for several verses is queued under each of them but can
/// be taken only once.
#[derive(Debug, Clone, Default)]
pub struct FootnoteIndex {
    records: Vec<FootnoteRecord>,
    queues: HashMap<Verse, VecDeque<usize>>,
}

impl FootnoteIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan every footnote division of `doc`.
    pub fn build(
        doc: &Document,
        parser: &ReferenceParser<'_>,
        canon: &dyn Canon,
        entry: &BookEntry,
    ) -> Result<Self> {
        let mut index = Self::new();
        let mut pending = vec![doc.root()];
        while let Some(id) = pending.pop() {
            if doc.kind(id).is_some_and(NodeKind::is_footnote) {
                let verses = footnote_verses(doc, id, parser, canon, entry)?;
                index.insert(id, verses);
                continue;
            }
            let mut children: Vec<_> = doc.children(id).collect();
            children.reverse();
            pending.extend(children);
        }
        debug!(
            "{}: indexed {} footnote(s) over {} verse(s)",
            entry.primary_name(),
            index.len(),
            index.queues.len()
        );
        Ok(index)
    }

    /// Queue a block under each of `verses`, after blocks queued earlier.
    pub fn insert(&mut self, node: NodeId, verses: Vec<Verse>) {
        let record = self.records.len();
        for verse in &verses {
            self.queues.entry(*verse).or_default().push_back(record);
        }
        self.records.push(FootnoteRecord {
            node,
            verses,
            consumed: false,
        });
    }

    /// Pop the oldest unconsumed block queued for `verse`.
    pub fn take(&mut self, verse: Verse) -> Option<NodeId> {
        let queue = self.queues.get_mut(&verse)?;
        while let Some(index) = queue.pop_front() {
            if let Some(record) = self.records.get_mut(index)
                && !record.consumed
            {
                record.consumed = true;
                return Some(record.node);
            }
        }
        None
    }

    /// Take a block for `verse`, falling back to verse 1 of its chapter, the
    /// chapter's title position and the next chapter's title position.
    ///
    /// The fallbacks cover markers placed in titles that precede the verse
    /// their footnote cites.
    pub fn take_with_fallback(&mut self, verse: Verse) -> Option<NodeId> {
        let candidates = [
            verse,
            verse.with_verse(1),
            verse.with_verse(0),
            Verse::chapter(verse.book, verse.chapter.saturating_add(1)),
        ];
        candidates.into_iter().find_map(|candidate| self.take(candidate))
    }

    /// Blocks that were never taken.
    pub fn unused(&self) -> impl Iterator<Item = &FootnoteRecord> {
        self.records.iter().filter(|record| !record.consumed)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Decode the citation leading a footnote block into the verses it covers.
fn footnote_verses(
    doc: &Document,
    id: NodeId,
    parser: &ReferenceParser<'_>,
    canon: &dyn Canon,
    entry: &BookEntry,
) -> Result<Vec<Verse>> {
    let syntax = parser.syntax();
    let location = Location::new(entry.primary_name(), 0, 0);
    let Some(first) = doc.first_child(id) else {
        return Err(Error::data_format("Empty footnote", location));
    };

    let citation = match doc.kind(first) {
        Some(NodeKind::Text(text)) => {
            let text = text.trim();
            let Some((citation, _)) = text.split_once(syntax.footnote_terminator) else {
                return Err(Error::data_format(
                    format!("Unknown footnote reference format '{text}'"),
                    location,
                ));
            };
            let first_item = citation
                .split(|c: char| syntax.is_item_separator(c))
                .next()
                .unwrap_or(citation);
            let prefix = parser.book_name(first_item);
            if !prefix.is_empty()
                && (canon.find_book(prefix).is_some() || syntax.is_self_reference(prefix))
            {
                citation.to_string()
            } else {
                format!("{} {citation}", entry.primary_name())
            }
        }
        // A linked citation already names its book.
        Some(NodeKind::Hyperlink { .. }) => doc.inner_text(first),
        _ => {
            return Err(Error::data_format(
                format!("Invalid footnote reference format '{}'", doc.inner_text(id)),
                location,
            ));
        }
    };

    let mut context = ParseContext::new(entry.book());
    let references = parser
        .parse(&citation, &mut context)
        .map_err(|source| Error::Reference {
            source,
            location: location.clone(),
        })?;
    if references.is_empty() {
        return Err(Error::data_format(
            format!("Footnote reference is empty in '{}'", doc.inner_text(id)),
            location,
        ));
    }

    let mut verses = Vec::new();
    for reference in &references {
        for verse in reference.expand(canon) {
            if !verses.contains(&verse) {
                verses.push(verse);
            }
        }
    }
    Ok(verses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bible::{Book, NeueCanon};
    use crate::dom::DivisionRole;
    use crate::reference::ReferenceSyntax;

    fn footnote(doc: &mut Document, parent: NodeId, text: &str) -> NodeId {
        let div = doc.append(parent, NodeKind::Division(DivisionRole::Footnote));
        doc.append_text(div, text);
        div
    }

    fn build(doc: &Document) -> Result<FootnoteIndex> {
        let canon = NeueCanon::new();
        let syntax = ReferenceSyntax::default();
        let parser = ReferenceParser::new(&canon, &syntax);
        let entry = canon.entry(Book::Jonah).cloned().unwrap();
        FootnoteIndex::build(doc, &parser, &canon, &entry)
    }

    #[test]
    fn test_prescan_prepends_current_book() {
        let mut doc = Document::new();
        let root = doc.root();
        let first = footnote(&mut doc, root, "1,3: Tarsis lag im Westen.");
        let second = footnote(&mut doc, root, "1,3: Zweite Anmerkung.");

        let mut index = build(&doc).unwrap();
        assert_eq!(index.len(), 2);
        let verse = Verse::new(Book::Jonah, 1, 3);
        assert_eq!(index.take(verse), Some(first));
        assert_eq!(index.take(verse), Some(second));
        assert_eq!(index.take(verse), None);
        assert_eq!(index.unused().count(), 0);
    }

    #[test]
    fn test_prescan_keeps_explicit_book() {
        let mut doc = Document::new();
        let root = doc.root();
        let note = footnote(&mut doc, root, "Mt 12,40: Zitat.");

        let mut index = build(&doc).unwrap();
        assert_eq!(index.take(Verse::new(Book::Matthew, 12, 40)), Some(note));
    }

    #[test]
    fn test_prescan_keeps_numbered_book() {
        let mut doc = Document::new();
        let root = doc.root();
        let genesis = footnote(&mut doc, root, "1. Mose 3,5: Zitat.");
        let sabbath = footnote(&mut doc, root, "1Mo 2,3: Sabbat.");
        let chapter = footnote(&mut doc, root, "Kap. 2,1: Fisch.");

        let mut index = build(&doc).unwrap();
        assert_eq!(index.take(Verse::new(Book::Genesis, 3, 5)), Some(genesis));
        assert_eq!(index.take(Verse::new(Book::Genesis, 2, 3)), Some(sabbath));
        assert_eq!(index.take(Verse::new(Book::Jonah, 2, 1)), Some(chapter));
        assert_eq!(index.unused().count(), 0);
    }

    #[test]
    fn test_fallback_at_last_chapter_number() {
        let mut index = FootnoteIndex::new();
        assert_eq!(
            index.take_with_fallback(Verse::new(Book::Jonah, u32::MAX, 3)),
            None
        );
    }

    #[test]
    fn test_range_footnote_is_taken_once() {
        let mut doc = Document::new();
        let root = doc.root();
        footnote(&mut doc, root, "2,3-5: Psalm.");

        let mut index = build(&doc).unwrap();
        assert!(index.take(Verse::new(Book::Jonah, 2, 4)).is_some());
        assert_eq!(index.take(Verse::new(Book::Jonah, 2, 3)), None);
        assert_eq!(index.take(Verse::new(Book::Jonah, 2, 5)), None);
        assert_eq!(index.unused().count(), 0);
    }

    #[test]
    fn test_fallback_order() {
        let mut index = FootnoteIndex::new();
        let title = NodeId(7);
        let next_chapter = NodeId(8);
        index.insert(title, vec![Verse::chapter(Book::Jonah, 2)]);
        index.insert(next_chapter, vec![Verse::chapter(Book::Jonah, 3)]);

        let current = Verse::new(Book::Jonah, 2, 0);
        assert_eq!(index.take_with_fallback(current), Some(title));
        assert_eq!(index.take_with_fallback(current), Some(next_chapter));
        assert_eq!(index.take_with_fallback(current), None);
    }

    #[test]
    fn test_fallback_prefers_first_verse() {
        let mut index = FootnoteIndex::new();
        index.insert(NodeId(1), vec![Verse::chapter(Book::Psalms, 119)]);
        index.insert(NodeId(2), vec![Verse::new(Book::Psalms, 119, 1)]);
        assert_eq!(
            index.take_with_fallback(Verse::chapter(Book::Psalms, 119)),
            Some(NodeId(1))
        );
        assert_eq!(
            index.take_with_fallback(Verse::new(Book::Psalms, 119, 5)),
            Some(NodeId(2))
        );
    }

    #[test]
    fn test_footnote_without_terminator_is_error() {
        let mut doc = Document::new();
        let root = doc.root();
        footnote(&mut doc, root, "keine Stellenangabe");
        assert!(matches!(build(&doc), Err(Error::DataFormat { .. })));
    }

    #[test]
    fn test_empty_footnote_is_error() {
        let mut doc = Document::new();
        let root = doc.root();
        doc.append(root, NodeKind::Division(DivisionRole::Footnote));
        assert!(matches!(build(&doc), Err(Error::DataFormat { .. })));
    }

    #[test]
    fn test_nested_footnotes_are_found() {
        let mut doc = Document::new();
        let root = doc.root();
        let wrapper = doc.append(root, NodeKind::Other("section".to_string()));
        footnote(&mut doc, wrapper, "4,6: Rizinus.");
        let mut index = build(&doc).unwrap();
        assert!(index.take(Verse::new(Book::Jonah, 4, 6)).is_some());
    }
}
