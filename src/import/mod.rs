//! Loading the NeÜ HTML edition.
//!
//! Files are decoded with [`crate::util::decode_document`], parsed by
//! html5ever into an [`HtmlArena`] and classified into the typed
//! [`crate::dom::Document`] the converter walks.

mod arena;
mod classify;
mod tree_sink;

use std::fs;
use std::path::{Path, PathBuf};

use html5ever::driver::ParseOpts;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use log::debug;

pub use arena::{HtmlArena, HtmlNodeData, HtmlNodeId};
pub use classify::{book_document, foreword_document};
pub use tree_sink::ArenaSink;

use crate::bible::Book;
use crate::convert::DocumentSource;
use crate::dom::SourceDocument;
use crate::error::{Error, Result};
use crate::util::decode_document;

/// File holding the foreword.
pub const FOREWORD_FILE: &str = "index.html";

/// Parse an HTML string.
pub fn parse_html(html: &str) -> HtmlArena {
    parse_document(ArenaSink::new(), ParseOpts::default())
        .from_utf8()
        .one(html.as_bytes())
        .into_arena()
}

/// Read, decode and parse an HTML file.
pub fn load_html(path: &Path) -> Result<HtmlArena> {
    let bytes = fs::read(path)?;
    let html = decode_document(&bytes);
    debug!("Parsing {} ({} bytes)", path.display(), bytes.len());
    Ok(parse_html(&html))
}

/// File name of `book` in the NeÜ edition. The edition has no apocrypha.
pub fn file_name(book: Book) -> Option<&'static str> {
    use Book::*;
    let name = match book {
        Genesis => "1mo.html",
        Exodus => "2mo.html",
        Leviticus => "3mo.html",
        Numbers => "4mo.html",
        Deuteronomy => "5mo.html",
        Joshua => "jos.html",
        Judges => "ri.html",
        Ruth => "rut.html",
        FirstSamuel => "1sam.html",
        SecondSamuel => "2sam.html",
        FirstKings => "1koe.html",
        SecondKings => "2koe.html",
        FirstChronicles => "1chr.html",
        SecondChronicles => "2chr.html",
        Ezra => "esra.html",
        Nehemiah => "neh.html",
        Esther => "est.html",
        Job => "hiob.html",
        Psalms => "ps.html",
        Proverbs => "spr.html",
        Ecclesiastes => "pred.html",
        SongOfSongs => "hl.html",
        Isaiah => "jes.html",
        Jeremiah => "jer.html",
        Lamentations => "kla.html",
        Ezekiel => "hes.html",
        Daniel => "dan.html",
        Hosea => "hos.html",
        Joel => "joel.html",
        Amos => "amos.html",
        Obadiah => "obadja.html",
        Jonah => "jona.html",
        Micah => "mi.html",
        Nahum => "nah.html",
        Habakkuk => "hab.html",
        Zephaniah => "zef.html",
        Haggai => "hag.html",
        Zechariah => "sach.html",
        Malachi => "mal.html",
        Matthew => "mt.html",
        Mark => "mk.html",
        Luke => "lk.html",
        John => "jo.html",
        Acts => "apg.html",
        Romans => "roe.html",
        FirstCorinthians => "1kor.html",
        SecondCorinthians => "2kor.html",
        Galatians => "gal.html",
        Ephesians => "eph.html",
        Philippians => "phil.html",
        Colossians => "kol.html",
        FirstThessalonians => "1thes.html",
        SecondThessalonians => "2thes.html",
        FirstTimothy => "1tim.html",
        SecondTimothy => "2tim.html",
        Titus => "tit.html",
        Philemon => "phm.html",
        Hebrews => "hebr.html",
        James => "jak.html",
        FirstPeter => "1pt.html",
        SecondPeter => "2pt.html",
        FirstJohn => "1jo.html",
        SecondJohn => "2jo.html",
        ThirdJohn => "3jo.html",
        Jude => "jud.html",
        Revelation => "off.html",
        _ => return None,
    };
    Some(name)
}

/// A directory holding the HTML edition.
#[derive(Debug, Clone)]
pub struct HtmlDirectory {
    root: PathBuf,
}

impl HtmlDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Where the file of `book` would be.
    pub fn book_path(&self, book: Book) -> Option<PathBuf> {
        file_name(book).map(|name| self.root.join(name))
    }

    pub fn foreword_path(&self) -> PathBuf {
        self.root.join(FOREWORD_FILE)
    }
}

impl DocumentSource for HtmlDirectory {
    fn foreword(&self) -> Result<SourceDocument> {
        let path = self.foreword_path();
        if !path.is_file() {
            return Err(Error::MissingDocument(path.display().to_string()));
        }
        Ok(foreword_document(&load_html(&path)?))
    }

    fn book(&self, book: Book) -> Result<Option<SourceDocument>> {
        let Some(path) = self.book_path(book).filter(|path| path.is_file()) else {
            return Ok(None);
        };
        Ok(Some(book_document(&load_html(&path)?)))
    }
}
