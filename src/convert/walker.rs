//! Depth-first traversal turning a source tree into OSIS events.

use std::collections::{HashSet, VecDeque};
use std::io::Write;

use log::warn;

use super::diagnostics::Diagnostic;
use super::footnotes::FootnoteIndex;
use super::state::TraversalState;
use crate::bible::{BookEntry, Canon, Verse};
use crate::dom::{
    DivisionRole, Document, Emphasis, ImageKind, NodeId, NodeKind, ParagraphRole, SpanRole,
};
use crate::error::{Error, Location, Result};
use crate::export::{OsisWriter, TextStyle};
use crate::reference::{ParseContext, ReferenceError, ReferenceParser, ReferenceSyntax};

/// Link targets that navigate the source site rather than cite a verse.
const NAVIGATION_TARGETS: [&str; 2] = ["index.htm", "#top"];

/// Whether traversal of the current document goes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Stop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    Book,
    /// The foreword has sections and paragraphs but no chapters.
    Foreword,
}

/// Walks one document. A fresh walker is used for every book.
pub(crate) struct Walker<'a, 'o, 'n, W: Write> {
    doc: &'a Document,
    canon: &'a dyn Canon,
    syntax: &'a ReferenceSyntax,
    parser: ReferenceParser<'a>,
    entry: &'a BookEntry,
    mode: Mode,
    out: &'o mut OsisWriter<'n, W>,
    diagnostics: &'o mut Vec<Diagnostic>,
    footnotes: FootnoteIndex,
    context: ParseContext,
    state: TraversalState,
    /// Chapter markers converted ahead of the heading that precedes them.
    handled: HashSet<NodeId>,
}

impl<'a, 'o, 'n, W: Write> Walker<'a, 'o, 'n, W> {
    pub(crate) fn new(
        doc: &'a Document,
        canon: &'a dyn Canon,
        syntax: &'a ReferenceSyntax,
        entry: &'a BookEntry,
        mode: Mode,
        out: &'o mut OsisWriter<'n, W>,
        diagnostics: &'o mut Vec<Diagnostic>,
    ) -> Self {
        Self {
            doc,
            canon,
            syntax,
            parser: ReferenceParser::new(canon, syntax),
            entry,
            mode,
            out,
            diagnostics,
            footnotes: FootnoteIndex::new(),
            context: ParseContext::new(entry.book()),
            state: TraversalState::default(),
            handled: HashSet::new(),
        }
    }

    /// Emit a whole book: its division, title, body and every close.
    pub(crate) fn convert_book(mut self, title: &str) -> Result<()> {
        self.out.start_book(self.entry.book())?;
        self.out.title(title)?;
        self.prescan()?;
        self.walk_body()?;
        self.report_unused_footnotes();
        self.end_all()?;
        self.out.end_book()
    }

    /// Emit the foreword as an introduction with one titled major section.
    pub(crate) fn convert_foreword(mut self, title: &str) -> Result<()> {
        self.start_introduction()?;
        self.start_major_section()?;
        if !title.trim().is_empty() {
            self.out.title(title)?;
        }
        self.prescan()?;
        self.walk_body()?;
        self.report_unused_footnotes();
        self.end_all()
    }

    fn prescan(&mut self) -> Result<()> {
        self.footnotes = FootnoteIndex::build(self.doc, &self.parser, self.canon, self.entry)?;
        Ok(())
    }

    fn walk_body(&mut self) -> Result<()> {
        let root = self.doc.root();
        self.walk_children(root, TextStyle::PLAIN)?;
        Ok(())
    }

    fn walk_children(&mut self, id: NodeId, style: TextStyle) -> Result<Flow> {
        let doc = self.doc;
        for child in doc.children(id) {
            if self.walk(child, style)? == Flow::Stop {
                return Ok(Flow::Stop);
            }
        }
        Ok(Flow::Continue)
    }

    fn walk(&mut self, id: NodeId, style: TextStyle) -> Result<Flow> {
        if self.handled.contains(&id) {
            return Ok(Flow::Continue);
        }
        let doc = self.doc;
        let Some(kind) = doc.kind(id) else {
            return Ok(Flow::Continue);
        };

        match kind {
            NodeKind::Root => return self.walk_children(id, style),
            NodeKind::Paragraph(ParagraphRole::Summary) => {
                self.out.start_paragraph()?;
                self.out.line(TextStyle::ITALIC, doc.inner_text(id).trim())?;
                self.out.end_paragraph()?;
            }
            NodeKind::Paragraph(ParagraphRole::Normal) => return self.paragraph(id, style),
            NodeKind::Text(text) => self.text(text, style)?,
            NodeKind::Emphasis(emphasis) => {
                let style = match emphasis {
                    Emphasis::Bold => TextStyle { bold: true, ..style },
                    Emphasis::Italic => TextStyle {
                        italic: true,
                        ..style
                    },
                };
                return self.walk_children(id, style);
            }
            NodeKind::Heading(level) => self.heading(id, *level)?,
            NodeKind::Hyperlink { target } => {
                return self.hyperlink(id, target.as_deref(), style);
            }
            NodeKind::Image(ImageKind::Note) => self.out.text("♪")?,
            NodeKind::Image(ImageKind::Unsupported(source)) => {
                return Err(self.error(format!("Unknown image source '{source}'")));
            }
            NodeKind::Span(SpanRole::Chapter) => self.chapter_marker(id)?,
            NodeKind::Span(SpanRole::Verse) => self.verse_marker(id)?,
            NodeKind::Span(SpanRole::Subheading) => self.heading(id, 4)?,
            NodeKind::Span(SpanRole::Other(class)) => {
                return Err(self.error(format!("Unknown span class '{class}'")));
            }
            NodeKind::Division(role) => return self.division(id, role, style),
            NodeKind::LineBreak => self.out.line_break()?,
            NodeKind::List => {}
            NodeKind::HorizontalRule => return Ok(Flow::Stop),
            NodeKind::Other(name) => {
                let location = self.location();
                self.diagnose(Diagnostic::UnknownNode {
                    name: name.clone(),
                    location,
                });
            }
        }
        Ok(Flow::Continue)
    }

    fn paragraph(&mut self, id: NodeId, style: TextStyle) -> Result<Flow> {
        if self.has_only_empty_children(id) {
            return Ok(Flow::Continue);
        }
        if !self.state.paragraph {
            self.start_paragraph()?;
        }
        if self.walk_children(id, style)? == Flow::Stop {
            return Ok(Flow::Stop);
        }
        if self.state.paragraph {
            self.out.end_line()?;
        }
        // Close verse and chapter here only when the next marker is near;
        // otherwise the text after this paragraph still belongs to them.
        if self.state.verse && self.upcoming_marker(id, false).is_some() {
            self.end_verse()?;
        }
        if self.state.chapter && self.upcoming_marker(id, true).is_some() {
            self.end_chapter()?;
        }
        if self.state.paragraph {
            self.end_paragraph()?;
        }
        Ok(Flow::Continue)
    }

    fn has_only_empty_children(&self, id: NodeId) -> bool {
        self.doc.children(id).all(|child| {
            let text = self.doc.inner_text(child);
            text.trim().is_empty()
        })
    }

    fn text(&mut self, text: &str, style: TextStyle) -> Result<()> {
        let mut text = if self.state.chars_to_ignore > 0 {
            let skip = self.state.chars_to_ignore.min(text.chars().count());
            self.state.chars_to_ignore -= skip;
            text.chars().skip(skip).collect()
        } else {
            text.to_string()
        };
        text = text.replace('\u{a0}', " ");
        if self.out.line_ended() {
            text = text.trim_start().to_string();
        }
        if text.trim().is_empty() {
            return Ok(());
        }

        let rest = self.substitute_footnotes(&text)?;
        self.out.styled_text(style, rest)
    }

    /// Emit `text` up to each footnote indicator followed by the footnote
    /// itself. Returns the text after the last indicator.
    fn substitute_footnotes<'t>(&mut self, text: &'t str) -> Result<&'t str> {
        let syntax = self.syntax;
        let indicator = syntax.footnote_indicator.as_str();
        let mut rest = text;
        while !self.state.footnote
            && !indicator.is_empty()
            && let Some(position) = rest.find(indicator)
        {
            self.out.text(&rest[..position])?;
            rest = &rest[position + indicator.len()..];

            let verse = self.state.current_verse(self.entry.book());
            let Some(footnote) = self.footnotes.take_with_fallback(verse) else {
                return Err(self.error("Footnote missing"));
            };
            self.convert_footnote(footnote)?;
        }
        Ok(rest)
    }

    fn convert_footnote(&mut self, id: NodeId) -> Result<()> {
        let doc = self.doc;
        self.start_footnote()?;
        for (position, child) in doc.children(id).enumerate() {
            match position {
                0 => {
                    // Drop the leading citation, keep what follows it.
                    let text = doc.inner_text(child);
                    let text = text.trim_start();
                    let remainder = text
                        .split_once(self.syntax.footnote_terminator)
                        .map_or(text, |(_, rest)| rest)
                        .trim_start();
                    if !remainder.trim().is_empty() {
                        self.out.text(remainder)?;
                    }
                }
                1 => {
                    if matches!(doc.kind(child), Some(NodeKind::Hyperlink { .. })) {
                        self.out.text("")?;
                    }
                    self.walk(child, TextStyle::PLAIN)?;
                }
                _ => {
                    self.walk(child, TextStyle::PLAIN)?;
                }
            }
        }
        self.out.end_line()?;
        self.end_footnote()
    }

    fn heading(&mut self, id: NodeId, level: u8) -> Result<()> {
        if self.state.introduction && self.mode == Mode::Book {
            self.end_all()?;
        }

        match self.mode {
            Mode::Foreword => {
                if self.state.paragraph {
                    self.end_paragraph()?;
                }
                if self.state.section {
                    self.end_section()?;
                }
                self.start_section()?;
            }
            Mode::Book => {
                if self.state.paragraph {
                    self.end_paragraph()?;
                }
                if self.state.subsection {
                    self.end_subsection()?;
                }
                if level <= 3 && self.state.section {
                    self.end_section()?;
                }
                if level <= 2 && self.state.major_section {
                    self.end_major_section()?;
                }

                // A chapter's title precedes its number in the source. Start
                // the chapter first so readers break the page before the title.
                if let Some(marker) = self.upcoming_marker(id, true) {
                    self.walk(marker, TextStyle::PLAIN)?;
                    self.handled.insert(marker);
                }

                match level {
                    ..=2 => self.start_major_section()?,
                    3 => self.start_section()?,
                    _ => self.start_subsection()?,
                }
            }
        }

        let title = self.heading_title(id);
        let indicator = self.syntax.footnote_indicator.as_str();
        if indicator.is_empty() || !title.contains(indicator) {
            return self.out.title(&title);
        }

        self.out.start_title()?;
        let rest = self.substitute_footnotes(&title)?;
        self.out.text(rest)?;
        self.out.end_line()?;
        self.out.end_title()
    }

    /// Title text of a heading: its own text and link text, minus the
    /// decoration prefix used in the foreword.
    fn heading_title(&self, id: NodeId) -> String {
        let doc = self.doc;
        let mut title = String::new();
        for child in doc.children(id) {
            match doc.kind(child) {
                Some(NodeKind::Text(text)) => title.push_str(text),
                Some(NodeKind::Hyperlink { .. }) => title.push_str(&doc.inner_text(child)),
                _ => {}
            }
        }
        let title = title.replace('\u{a0}', " ");
        let title = title.trim_start();
        title
            .strip_prefix(self.syntax.title_prefix.as_str())
            .unwrap_or(title)
            .trim_start()
            .to_string()
    }

    fn chapter_marker(&mut self, id: NodeId) -> Result<()> {
        let label = self.doc.inner_text(id);
        let chapter: u32 = label
            .trim()
            .parse()
            .map_err(|_| self.error(format!("Invalid chapter number '{}'", label.trim())))?;

        // A repeated marker for the open chapter carries no boundary.
        if self.state.chapter && chapter == self.state.current_chapter() {
            return Ok(());
        }
        if self.state.verse {
            self.end_verse()?;
        }
        if self.state.chapter {
            self.end_chapter()?;
        }
        self.start_chapter(chapter)
    }

    fn verse_marker(&mut self, id: NodeId) -> Result<()> {
        let label = self.doc.inner_text(id);
        let mut label = label.trim().to_string();
        if label.contains(['(', ')']) {
            let opening = label.matches('(').count();
            let closing = label.matches(')').count();
            if opening != closing {
                return Err(self.error(format!(
                    "Uneven number of opening and closing parentheses in verse '{label}'"
                )));
            }
            label = label.replace(['(', ')'], "").trim().to_string();
        }
        let label = label.trim_end_matches('.');

        let separator = label
            .char_indices()
            .find(|&(_, c)| self.syntax.is_chapter_verse_separator(c));
        let (chapter, verse) = match separator {
            None => (None, label),
            Some((position, c)) => (
                Some(&label[..position]),
                &label[position + c.len_utf8()..],
            ),
        };
        let chapter = chapter
            .map(|chapter| {
                chapter
                    .trim()
                    .parse::<u32>()
                    .map_err(|_| self.error(format!("Invalid chapter number in verse '{label}'")))
            })
            .transpose()?;
        let verse: u32 = verse
            .trim()
            .parse()
            .map_err(|_| self.error(format!("Invalid verse number '{label}'")))?;

        if self.state.verse {
            self.end_verse()?;
        }
        if !self.state.chapter && self.mode == Mode::Book {
            self.start_chapter(self.state.chapter_number + 1)?;
        }
        self.start_verse(verse, chapter)
    }

    fn hyperlink(&mut self, id: NodeId, target: Option<&str>, style: TextStyle) -> Result<Flow> {
        let doc = self.doc;
        let text = doc.inner_text(id);
        // Bare anchors mark jump targets.
        if target.is_none() && text.trim().is_empty() {
            return Ok(Flow::Continue);
        }
        let target = target.unwrap_or(&text).to_string();
        let lowered = target.to_lowercase();

        if !self.syntax.is_external_link(&lowered) {
            let navigation = lowered.contains(NAVIGATION_TARGETS[0])
                || lowered.trim().starts_with(NAVIGATION_TARGETS[1]);
            if navigation {
                return self.walk_children(id, style);
            }
            let successor = doc
                .next_sibling(id)
                .and_then(|sibling| doc.kind(sibling))
                .and_then(NodeKind::as_text);
            self.convert_reference(&text, successor)?;
        } else if !lowered.contains("www") {
            let location = self.location();
            self.diagnose(Diagnostic::IgnoredHyperlink {
                target: target.clone(),
                location,
            });
            let text = text.trim();
            if !text.is_empty() {
                self.out.text(text)?;
            }
        } else {
            self.out.hyperlink(&text, &target)?;
        }
        Ok(Flow::Continue)
    }

    /// Emit the citation of a link, extended by the numbers that directly
    /// follow it (`<a>Lk 1</a>,3` cites Lk 1,3).
    fn convert_reference(&mut self, text: &str, successor: Option<&str>) -> Result<()> {
        let mut citation = text.to_string();
        if let Some(successor) = successor.filter(|s| !s.trim().is_empty()) {
            let end = successor
                .char_indices()
                .find(|&(_, c)| !self.syntax.is_reference_char(c))
                .map_or(successor.len(), |(position, _)| position);
            let part = successor[..end].trim_end();
            if let Some(last_digit) = part.rfind(|c: char| c.is_ascii_digit()) {
                let part = &part[..=last_digit];
                if !part.trim().is_empty() {
                    citation.push_str(part);
                    self.state.chars_to_ignore = part.chars().count();
                }
            }
        }

        let references = self
            .parser
            .parse(&citation, &mut self.context)
            .map_err(|source| self.reference_error(source))?;
        for reference in &references {
            self.out.reference(reference)?;
        }
        Ok(())
    }

    fn division(&mut self, id: NodeId, role: &DivisionRole, style: TextStyle) -> Result<Flow> {
        match (role, self.mode) {
            (DivisionRole::Introduction, _) => {
                if !self.state.introduction {
                    if self.state.paragraph {
                        self.end_paragraph()?;
                    }
                    self.start_introduction()?;
                }
                if self.state.paragraph {
                    self.end_paragraph()?;
                }
                self.start_paragraph()?;
                let flow = self.walk_children(id, style)?;
                if self.state.paragraph {
                    self.end_paragraph()?;
                }
                Ok(flow)
            }
            (_, Mode::Foreword) => {
                if self.state.paragraph {
                    self.end_paragraph()?;
                }
                self.start_paragraph()?;
                let flow = self.walk_children(id, style)?;
                self.out.end_line()?;
                if self.state.paragraph {
                    self.end_paragraph()?;
                }
                Ok(flow)
            }
            // Footnotes are emitted where their markers are.
            (DivisionRole::Footnote, Mode::Book) => Ok(Flow::Continue),
            (DivisionRole::Other(class), Mode::Book) => {
                let location = self.location();
                self.diagnose(Diagnostic::UnknownNode {
                    name: format!("div.{class}"),
                    location,
                });
                Ok(Flow::Continue)
            }
        }
    }

    /// Find the verse or chapter marker that comes next in reading order,
    /// looking past whitespace, headings and footnote blocks.
    ///
    /// With `chapter_only`, verse markers and markers repeating the open
    /// chapter do not count.
    fn upcoming_marker(&self, id: NodeId, chapter_only: bool) -> Option<NodeId> {
        let doc = self.doc;
        let mut pending: VecDeque<NodeId> = doc.next_sibling(id).into_iter().collect();
        let mut seen = HashSet::new();

        while let Some(node) = pending.pop_front() {
            if !seen.insert(node) {
                continue;
            }
            match doc.kind(node)? {
                NodeKind::Span(SpanRole::Verse) => {
                    return (!chapter_only).then_some(node);
                }
                NodeKind::Span(SpanRole::Chapter) => {
                    let number = doc.inner_text(node).trim().parse::<u32>().ok();
                    if chapter_only && number == Some(self.state.chapter_number) {
                        return None;
                    }
                    return Some(node);
                }
                NodeKind::Division(DivisionRole::Footnote)
                | NodeKind::Heading(_)
                | NodeKind::Span(SpanRole::Subheading) => {
                    pending.extend(doc.next_sibling(node));
                }
                NodeKind::Text(text) => {
                    if !text.trim().is_empty() {
                        return None;
                    }
                    pending.extend(doc.next_sibling(node));
                }
                _ => {
                    let children: Vec<_> = doc.children(node).collect();
                    for child in children.into_iter().rev() {
                        pending.push_front(child);
                    }
                    pending.extend(doc.next_sibling(node));
                }
            }
        }
        None
    }

    fn report_unused_footnotes(&mut self) {
        let doc = self.doc;
        let unused: Vec<_> = self
            .footnotes
            .unused()
            .map(|record| Diagnostic::UnusedFootnote {
                verse: record
                    .verses
                    .first()
                    .copied()
                    .unwrap_or(Verse::book(self.entry.book())),
                content: doc.inner_text(record.node).trim().to_string(),
            })
            .collect();
        for diagnostic in unused {
            self.diagnose(diagnostic);
        }
    }

    fn diagnose(&mut self, diagnostic: Diagnostic) {
        warn!("{diagnostic}");
        self.diagnostics.push(diagnostic);
    }

    fn location(&self) -> Location {
        Location::new(
            self.entry.primary_name(),
            self.state.current_chapter(),
            self.state.verse_number,
        )
    }

    fn error(&self, message: impl Into<String>) -> Error {
        Error::data_format(message, self.location())
    }

    fn reference_error(&self, source: ReferenceError) -> Error {
        Error::Reference {
            source,
            location: self.location(),
        }
    }

    // Structural open/close events. Each keeps the state flags and the
    // writer in step.

    /// Close every open level, innermost first.
    fn end_all(&mut self) -> Result<()> {
        if self.state.footnote {
            self.end_footnote()?;
        }
        if self.state.verse {
            self.end_verse()?;
        }
        if self.state.chapter {
            self.end_chapter()?;
        }
        if self.state.paragraph {
            self.end_paragraph()?;
        }
        if self.state.subsection {
            self.end_subsection()?;
        }
        if self.state.section {
            self.end_section()?;
        }
        if self.state.major_section {
            self.end_major_section()?;
        }
        if self.state.introduction {
            self.end_introduction()?;
        }
        debug_assert_eq!(self.state.open_levels(), 0);
        Ok(())
    }

    fn start_introduction(&mut self) -> Result<()> {
        self.out.start_introduction()?;
        self.state.introduction = true;
        Ok(())
    }

    fn end_introduction(&mut self) -> Result<()> {
        self.out.end_introduction()?;
        self.state.introduction = false;
        Ok(())
    }

    fn start_major_section(&mut self) -> Result<()> {
        self.out.start_major_section()?;
        self.state.major_section = true;
        Ok(())
    }

    fn end_major_section(&mut self) -> Result<()> {
        self.out.end_major_section()?;
        self.state.major_section = false;
        Ok(())
    }

    fn start_section(&mut self) -> Result<()> {
        self.out.start_section()?;
        self.state.section = true;
        Ok(())
    }

    fn end_section(&mut self) -> Result<()> {
        self.out.end_section()?;
        self.state.section = false;
        Ok(())
    }

    fn start_subsection(&mut self) -> Result<()> {
        self.out.start_subsection()?;
        self.state.subsection = true;
        Ok(())
    }

    fn end_subsection(&mut self) -> Result<()> {
        self.out.end_subsection()?;
        self.state.subsection = false;
        Ok(())
    }

    fn start_paragraph(&mut self) -> Result<()> {
        self.out.start_paragraph()?;
        self.state.paragraph = true;
        Ok(())
    }

    fn end_paragraph(&mut self) -> Result<()> {
        self.out.end_paragraph()?;
        self.state.paragraph = false;
        Ok(())
    }

    fn start_footnote(&mut self) -> Result<()> {
        self.out.start_footnote()?;
        self.state.footnote = true;
        Ok(())
    }

    fn end_footnote(&mut self) -> Result<()> {
        self.out.end_footnote()?;
        self.state.footnote = false;
        self.context.clear_last_book();
        Ok(())
    }

    fn start_chapter(&mut self, chapter: u32) -> Result<()> {
        self.state.chapter_number = chapter;
        self.state.verse_number = 0;
        self.state.deviating_chapter = None;
        self.out.start_chapter(self.entry.book(), chapter)?;
        self.state.chapter = true;
        Ok(())
    }

    fn end_chapter(&mut self) -> Result<()> {
        self.out
            .end_chapter(self.entry.book(), self.state.chapter_number)?;
        self.state.chapter = false;
        Ok(())
    }

    fn start_verse(&mut self, verse: u32, deviating_chapter: Option<u32>) -> Result<()> {
        self.state.verse_number = verse;
        self.state.deviating_chapter = deviating_chapter;
        self.out
            .start_verse(self.state.current_verse(self.entry.book()))?;
        self.state.verse = true;
        Ok(())
    }

    fn end_verse(&mut self) -> Result<()> {
        self.out
            .end_verse(self.state.current_verse(self.entry.book()))?;
        self.state.verse = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bible::{Book, NeueCanon, OsisNaming};

    fn convert(doc: &Document) -> Result<(String, Vec<Diagnostic>)> {
        let canon = NeueCanon::new();
        let syntax = ReferenceSyntax::default();
        let entry = canon.entry(Book::Jonah).cloned().unwrap();
        let mut out = OsisWriter::new(Vec::new(), &OsisNaming);
        let mut diagnostics = Vec::new();
        Walker::new(
            doc,
            &canon,
            &syntax,
            &entry,
            Mode::Book,
            &mut out,
            &mut diagnostics,
        )
        .convert_book("Jona")?;
        let xml = String::from_utf8(out.finish()?).unwrap();
        Ok((xml, diagnostics))
    }

    fn span(doc: &mut Document, parent: NodeId, role: SpanRole, label: &str) {
        let span = doc.append(parent, NodeKind::Span(role));
        doc.append_text(span, label);
    }

    fn paragraph(doc: &mut Document) -> NodeId {
        let root = doc.root();
        doc.append(root, NodeKind::Paragraph(ParagraphRole::Normal))
    }

    #[test]
    fn test_verse_closes_before_next_marker() {
        let mut doc = Document::new();
        let p = paragraph(&mut doc);
        span(&mut doc, p, SpanRole::Chapter, "1");
        span(&mut doc, p, SpanRole::Verse, "1");
        doc.append_text(p, "Das Wort.");
        let p = paragraph(&mut doc);
        span(&mut doc, p, SpanRole::Verse, "2");
        doc.append_text(p, "Mach dich auf.");

        let (xml, diagnostics) = convert(&doc).unwrap();
        assert!(diagnostics.is_empty());
        assert_eq!(
            xml,
            "<div type=\"book\" osisID=\"Jonah\">\n\
             \t<title>Jona</title>\n\
             \t<p>\n\
             \t\t<chapter sID=\"Jonah.1\" osisID=\"Jonah.1\"/>\n\
             \t\t<verse sID=\"Jonah.1.1\" osisID=\"Jonah.1.1\"/>\n\
             \t\tDas Wort.\n\
             \t\t<verse eID=\"Jonah.1.1\"/>\n\
             \t</p>\n\
             \t<p>\n\
             \t\t<verse sID=\"Jonah.1.2\" osisID=\"Jonah.1.2\"/>\n\
             \t\tMach dich auf.\n\
             \t</p>\n\
             \t<verse eID=\"Jonah.1.2\"/>\n\
             \t<chapter eID=\"Jonah.1\"/>\n\
             </div>\n"
        );
    }

    #[test]
    fn test_chapter_starts_before_its_heading() {
        let mut doc = Document::new();
        let root = doc.root();
        let heading = doc.append(root, NodeKind::Heading(3));
        doc.append_text(heading, "Jona flieht");
        let p = paragraph(&mut doc);
        span(&mut doc, p, SpanRole::Chapter, "1");
        span(&mut doc, p, SpanRole::Verse, "1");
        doc.append_text(p, "Text");

        let (xml, _) = convert(&doc).unwrap();
        let chapter = xml.find("<chapter sID=\"Jonah.1\"").unwrap();
        let section = xml.find("<div type=\"section\">").unwrap();
        assert!(chapter < section);
        assert_eq!(xml.matches("<chapter sID=").count(), 1);
        assert!(xml.contains("<title>Jona flieht</title>"));
    }

    #[test]
    fn test_footnote_is_substituted_at_marker() {
        let mut doc = Document::new();
        let p = paragraph(&mut doc);
        span(&mut doc, p, SpanRole::Chapter, "1");
        span(&mut doc, p, SpanRole::Verse, "1");
        doc.append_text(p, "Jona* floh.");
        let root = doc.root();
        let note = doc.append(root, NodeKind::Division(DivisionRole::Footnote));
        doc.append_text(note, "1,1: Erklärung.");

        let (xml, diagnostics) = convert(&doc).unwrap();
        assert!(diagnostics.is_empty());
        assert!(xml.contains(
            "\t\tJona<note type=\"explanation\" n=\"*\">\n\
             \t\t\tErklärung.\n\
             \t\t</note> floh.\n"
        ));
    }

    #[test]
    fn test_unused_footnote_is_reported_once() {
        let mut doc = Document::new();
        let p = paragraph(&mut doc);
        span(&mut doc, p, SpanRole::Chapter, "1");
        span(&mut doc, p, SpanRole::Verse, "1");
        doc.append_text(p, "Ohne Markierung.");
        let root = doc.root();
        let note = doc.append(root, NodeKind::Division(DivisionRole::Footnote));
        doc.append_text(note, "1,2-3: Nie benutzt.");

        let (_, diagnostics) = convert(&doc).unwrap();
        assert_eq!(
            diagnostics,
            vec![Diagnostic::UnusedFootnote {
                verse: Verse::new(Book::Jonah, 1, 2),
                content: "1,2-3: Nie benutzt.".to_string(),
            }]
        );
    }

    #[test]
    fn test_missing_footnote_is_error() {
        let mut doc = Document::new();
        let p = paragraph(&mut doc);
        span(&mut doc, p, SpanRole::Chapter, "1");
        span(&mut doc, p, SpanRole::Verse, "1");
        doc.append_text(p, "Stern* ohne Anmerkung.");
        assert!(matches!(convert(&doc), Err(Error::DataFormat { .. })));
    }

    #[test]
    fn test_link_citation_absorbs_following_numbers() {
        let mut doc = Document::new();
        let p = paragraph(&mut doc);
        span(&mut doc, p, SpanRole::Chapter, "1");
        span(&mut doc, p, SpanRole::Verse, "1");
        doc.append_text(p, "Siehe ");
        let link = doc.append(
            p,
            NodeKind::Hyperlink {
                target: Some("lk.html#1".to_string()),
            },
        );
        doc.append_text(link, "Lk 1");
        doc.append_text(p, ",3 und mehr");

        let (xml, _) = convert(&doc).unwrap();
        assert!(xml.contains(
            "Siehe <reference osisRef=\"Luke.1.3\">Lk 1,3</reference> und mehr\n"
        ));
    }

    #[test]
    fn test_external_link_without_www_keeps_text() {
        let mut doc = Document::new();
        let p = paragraph(&mut doc);
        let link = doc.append(
            p,
            NodeKind::Hyperlink {
                target: Some("http://example.org".to_string()),
            },
        );
        doc.append_text(link, "Beispiel");

        let (xml, diagnostics) = convert(&doc).unwrap();
        assert!(xml.contains("\t\tBeispiel\n"));
        assert!(!xml.contains("<a href"));
        assert!(matches!(
            diagnostics.as_slice(),
            [Diagnostic::IgnoredHyperlink { .. }]
        ));
    }

    #[test]
    fn test_www_link_is_kept() {
        let mut doc = Document::new();
        let p = paragraph(&mut doc);
        doc.append_text(p, "Mehr unter ");
        let link = doc.append(p, NodeKind::hyperlink("http://www.neue.de"));
        doc.append_text(link, "NeÜ online");

        let (xml, diagnostics) = convert(&doc).unwrap();
        assert!(diagnostics.is_empty());
        assert!(xml.contains("Mehr unter <a href=\"http://www.neue.de\">NeÜ online</a>\n"));
    }

    #[test]
    fn test_heading_footnote_falls_back_to_first_verse() {
        let mut doc = Document::new();
        let p = paragraph(&mut doc);
        span(&mut doc, p, SpanRole::Chapter, "1");
        span(&mut doc, p, SpanRole::Verse, "1");
        doc.append_text(p, "Vorher.");
        let root = doc.root();
        let heading = doc.append(root, NodeKind::Heading(3));
        doc.append_text(heading, "Alef*");
        let p = paragraph(&mut doc);
        span(&mut doc, p, SpanRole::Chapter, "2");
        span(&mut doc, p, SpanRole::Verse, "1");
        doc.append_text(p, "Glücklich.");
        let note = doc.append(root, NodeKind::Division(DivisionRole::Footnote));
        doc.append_text(note, "2,1: Erster Buchstabe.");

        let (xml, diagnostics) = convert(&doc).unwrap();
        assert!(diagnostics.is_empty());
        let chapter = xml.find("<chapter sID=\"Jonah.2\"").unwrap();
        let title = xml.find("<title>\n").unwrap();
        let note = xml.find("Alef<note type=\"explanation\" n=\"*\">").unwrap();
        let end_title = xml[note..].find("</title>").unwrap() + note;
        assert!(chapter < title && title < note);
        assert!(xml[note..end_title].contains("Erster Buchstabe."));
        assert!(xml[end_title..].contains("<verse sID=\"Jonah.2.1\""));
    }

    #[test]
    fn test_repeated_chapter_marker_is_ignored() {
        let mut doc = Document::new();
        let p = paragraph(&mut doc);
        span(&mut doc, p, SpanRole::Chapter, "1");
        span(&mut doc, p, SpanRole::Verse, "1");
        doc.append_text(p, "Erster.");
        let p = paragraph(&mut doc);
        span(&mut doc, p, SpanRole::Chapter, "1");
        span(&mut doc, p, SpanRole::Verse, "2");
        doc.append_text(p, "Zweiter.");

        let (xml, _) = convert(&doc).unwrap();
        assert_eq!(xml.matches("<chapter sID=").count(), 1);
        assert_eq!(xml.matches("<chapter eID=").count(), 1);
        assert!(xml.ends_with("\t<verse eID=\"Jonah.1.2\"/>\n\t<chapter eID=\"Jonah.1\"/>\n</div>\n"));
    }

    #[test]
    fn test_lookahead_skips_footnote_division() {
        let mut doc = Document::new();
        let p = paragraph(&mut doc);
        span(&mut doc, p, SpanRole::Chapter, "1");
        span(&mut doc, p, SpanRole::Verse, "1");
        doc.append_text(p, "Erster*");
        let root = doc.root();
        let note = doc.append(root, NodeKind::Division(DivisionRole::Footnote));
        doc.append_text(note, "1,1: Anmerkung.");
        let p = paragraph(&mut doc);
        span(&mut doc, p, SpanRole::Verse, "2");
        doc.append_text(p, "Zweiter.");

        let (xml, diagnostics) = convert(&doc).unwrap();
        assert!(diagnostics.is_empty());
        assert!(xml.contains("\t\t<verse eID=\"Jonah.1.1\"/>\n\t</p>\n"));
        assert_eq!(xml.matches("Anmerkung.").count(), 1);
        assert!(!xml.contains("1,1:"));
    }

    #[test]
    fn test_deviating_chapter_numbers_verse() {
        let mut doc = Document::new();
        let p = paragraph(&mut doc);
        span(&mut doc, p, SpanRole::Chapter, "1");
        span(&mut doc, p, SpanRole::Verse, "2,1");
        doc.append_text(p, "Versetzt.");

        let (xml, _) = convert(&doc).unwrap();
        assert!(xml.contains("<verse sID=\"Jonah.2.1\" osisID=\"Jonah.2.1\"/>"));
        assert!(xml.contains("<chapter eID=\"Jonah.1\"/>"));
    }

    #[test]
    fn test_uneven_parentheses_in_verse_is_error() {
        let mut doc = Document::new();
        let p = paragraph(&mut doc);
        span(&mut doc, p, SpanRole::Chapter, "1");
        span(&mut doc, p, SpanRole::Verse, "(3");
        assert!(matches!(convert(&doc), Err(Error::DataFormat { .. })));
    }

    #[test]
    fn test_horizontal_rule_stops_and_balances() {
        let mut doc = Document::new();
        let p = paragraph(&mut doc);
        span(&mut doc, p, SpanRole::Chapter, "1");
        span(&mut doc, p, SpanRole::Verse, "1");
        doc.append_text(p, "Ende.");
        let root = doc.root();
        doc.append(root, NodeKind::HorizontalRule);
        let p = paragraph(&mut doc);
        doc.append_text(p, "Nach dem Strich");

        let (xml, _) = convert(&doc).unwrap();
        assert!(!xml.contains("Nach dem Strich"));
        assert!(xml.ends_with("\t<chapter eID=\"Jonah.1\"/>\n</div>\n"));
    }

    #[test]
    fn test_unknown_node_is_diagnosed() {
        let mut doc = Document::new();
        let root = doc.root();
        doc.append(root, NodeKind::Other("table".to_string()));

        let (_, diagnostics) = convert(&doc).unwrap();
        assert!(matches!(
            diagnostics.as_slice(),
            [Diagnostic::UnknownNode { name, .. }] if name == "table"
        ));
    }

    #[test]
    fn test_implicit_chapter_for_leading_verse() {
        let mut doc = Document::new();
        let p = paragraph(&mut doc);
        span(&mut doc, p, SpanRole::Verse, "1");
        doc.append_text(p, "Ohne Kapitelzahl.");

        let (xml, _) = convert(&doc).unwrap();
        assert!(xml.contains("<chapter sID=\"Jonah.1\" osisID=\"Jonah.1\"/>"));
    }
}
