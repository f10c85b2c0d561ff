//! Export module for writing converted Bibles.
//!
//! [`OsisWriter`] serializes structural and text events as OSIS 2.1.1 XML
//! into any [`std::io::Write`] sink.
//!
//! # Example
//!
//! ```
//! use osisgen::bible::{Book, OsisNaming, Verse};
//! use osisgen::export::OsisWriter;
//!
//! let mut writer = OsisWriter::new(Vec::new(), &OsisNaming);
//! writer.start_book(Book::Jonah)?;
//! writer.start_chapter(Book::Jonah, 1)?;
//! writer.start_verse(Verse::new(Book::Jonah, 1, 1))?;
//! writer.end_verse(Verse::new(Book::Jonah, 1, 1))?;
//! writer.end_chapter(Book::Jonah, 1)?;
//! writer.end_book()?;
//! let xml = String::from_utf8(writer.finish()?).unwrap();
//! assert!(xml.contains(r#"<verse sID="Jonah.1.1" osisID="Jonah.1.1"/>"#));
//! # Ok::<(), osisgen::Error>(())
//! ```

mod osis;

pub use osis::{OsisWriter, TextStyle};
