//! Conversion of source documents into one OSIS stream.
//!
//! [`Converter`] drives the whole run: header, foreword, every book of the
//! canon in order, footer. Each document is walked depth first while a
//! [`TraversalState`] tracks which structural levels are open.

mod diagnostics;
mod footnotes;
mod state;
mod walker;

use std::collections::HashMap;
use std::io::Write;

use log::info;

pub use diagnostics::{ConversionReport, Diagnostic};
pub use footnotes::{FootnoteIndex, FootnoteRecord};
pub use state::TraversalState;

use crate::bible::{Book, Canon, NamingScheme};
use crate::dom::SourceDocument;
use crate::error::{Error, Result};
use crate::export::OsisWriter;
use crate::reference::ReferenceSyntax;
use walker::{Mode, Walker};

/// Metadata written into the OSIS header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkInfo {
    /// Work identifier, e.g. `GerNeUe`.
    pub name: String,
    pub title: String,
    pub language: String,
    pub ref_system: String,
}

impl Default for WorkInfo {
    fn default() -> Self {
        Self {
            name: "GerNeUe".to_string(),
            title: "NeÜ - Neue evangelistische Übersetzung".to_string(),
            language: "de".to_string(),
            ref_system: "Bible.German".to_string(),
        }
    }
}

impl WorkInfo {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_ref_system(mut self, ref_system: impl Into<String>) -> Self {
        self.ref_system = ref_system.into();
        self
    }
}

/// Supplies the parsed documents of one Bible edition.
pub trait DocumentSource {
    /// The foreword; every edition has one.
    fn foreword(&self) -> Result<SourceDocument>;

    /// The document of `book`, or `None` if the edition lacks it.
    fn book(&self, book: Book) -> Result<Option<SourceDocument>>;
}

/// Documents held in memory, mostly for tests and embedding.
#[derive(Debug, Clone)]
pub struct MemorySource {
    foreword: SourceDocument,
    books: HashMap<Book, SourceDocument>,
}

impl MemorySource {
    pub fn new(foreword: SourceDocument) -> Self {
        Self {
            foreword,
            books: HashMap::new(),
        }
    }

    pub fn with_book(mut self, book: Book, document: SourceDocument) -> Self {
        self.books.insert(book, document);
        self
    }
}

impl DocumentSource for MemorySource {
    fn foreword(&self) -> Result<SourceDocument> {
        Ok(self.foreword.clone())
    }

    fn book(&self, book: Book) -> Result<Option<SourceDocument>> {
        Ok(self.books.get(&book).cloned())
    }
}

/// Converts a [`DocumentSource`] into OSIS XML.
pub struct Converter<'a> {
    canon: &'a dyn Canon,
    naming: &'a dyn NamingScheme,
    syntax: ReferenceSyntax,
    work: WorkInfo,
}

impl<'a> Converter<'a> {
    pub fn new(canon: &'a dyn Canon, naming: &'a dyn NamingScheme) -> Self {
        Self {
            canon,
            naming,
            syntax: ReferenceSyntax::default(),
            work: WorkInfo::default(),
        }
    }

    pub fn with_syntax(mut self, syntax: ReferenceSyntax) -> Self {
        self.syntax = syntax;
        self
    }

    pub fn with_work(mut self, work: WorkInfo) -> Self {
        self.work = work;
        self
    }

    pub fn work(&self) -> &WorkInfo {
        &self.work
    }

    /// Write the whole edition to `sink` and hand the sink back.
    pub fn convert<S, W>(&self, source: &S, sink: W) -> Result<(W, ConversionReport)>
    where
        S: DocumentSource + ?Sized,
        W: Write,
    {
        // Citations in the foreword without a book resolve to the first book.
        let Some(first) = self.canon.books().first() else {
            return Err(Error::EmptyCanon);
        };

        let mut out = OsisWriter::new(sink, self.naming);
        let mut report = ConversionReport::default();
        out.write_header(&self.work)?;

        let foreword = source.foreword()?;
        info!("Converting foreword");
        Walker::new(
            &foreword.body,
            self.canon,
            &self.syntax,
            first,
            Mode::Foreword,
            &mut out,
            &mut report.diagnostics,
        )
        .convert_foreword(&foreword.title)?;

        for entry in self.canon.books() {
            let Some(document) = source.book(entry.book())? else {
                info!("No document for {}, skipping", entry.book());
                continue;
            };
            info!("Converting {}", entry.primary_name());
            Walker::new(
                &document.body,
                self.canon,
                &self.syntax,
                entry,
                Mode::Book,
                &mut out,
                &mut report.diagnostics,
            )
            .convert_book(&document.title)?;
            report.books.push(entry.book());
        }

        out.write_footer()?;
        let sink = out.finish()?;
        info!(
            "Converted {} book(s), {} diagnostic(s)",
            report.books.len(),
            report.diagnostics.len()
        );
        Ok((sink, report))
    }
}
