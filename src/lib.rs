//! # osisgen
//!
//! Converts the chapter/verse annotated HTML of the NeÜ Bible into a single
//! OSIS 2.1.1 XML document.
//!
//! ## Features
//!
//! - Book, section, chapter and verse structure with milestone markers
//! - German scripture citations resolved into `osisRef` references
//! - Footnotes moved from the end of each chapter to their markers
//! - Pluggable canon (book list, chapter and verse counts) and book naming
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::fs::File;
//! use std::io::BufWriter;
//!
//! use osisgen::bible::{NeueCanon, OsisNaming};
//! use osisgen::convert::Converter;
//! use osisgen::import::HtmlDirectory;
//!
//! let canon = NeueCanon::new();
//! let source = HtmlDirectory::new("neue/");
//! let sink = BufWriter::new(File::create("neue.osis.xml")?);
//!
//! let (_, report) = Converter::new(&canon, &OsisNaming).convert(&source, sink)?;
//! println!("{} books, {} warnings", report.books.len(), report.diagnostics.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Scripture references
//!
//! ```
//! use osisgen::bible::{Book, NeueCanon, Verse};
//! use osisgen::reference::{ParseContext, ReferenceParser, ReferenceSyntax};
//!
//! let canon = NeueCanon::new();
//! let syntax = ReferenceSyntax::default();
//! let parser = ReferenceParser::new(&canon, &syntax);
//! let mut context = ParseContext::new(Book::Matthew);
//!
//! let references = parser.parse("Lk 1,2-4; 3,5", &mut context)?;
//! assert_eq!(references.len(), 2);
//! assert_eq!(
//!     references[1].expand(&canon),
//!     vec![Verse::new(Book::Luke, 3, 5)]
//! );
//! # Ok::<(), osisgen::reference::ReferenceError>(())
//! ```

pub mod bible;
pub mod convert;
pub mod dom;
pub mod error;
pub mod export;
pub mod import;
pub mod reference;
pub mod util;

pub use error::{Error, Result};
