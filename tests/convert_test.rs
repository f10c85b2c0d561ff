//! End-to-end conversion tests over a small NeÜ edition.
//!
//! The fixture directory holds the foreword and two books; every other book
//! of the canon is missing and must be skipped.

use osisgen::bible::{Book, NeueCanon, OsisNaming, Usfm3Naming, Verse};
use osisgen::convert::{ConversionReport, Converter, Diagnostic, MemorySource, WorkInfo};
use osisgen::dom::{Document, NodeKind, ParagraphRole, SourceDocument, SpanRole};
use osisgen::import::HtmlDirectory;
use osisgen::Error;

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/neue");

fn convert_fixtures() -> (String, ConversionReport) {
    let canon = NeueCanon::new();
    let source = HtmlDirectory::new(FIXTURES_DIR);
    let (sink, report) = Converter::new(&canon, &OsisNaming)
        .convert(&source, Vec::new())
        .expect("Failed to convert fixtures");
    (String::from_utf8(sink).unwrap(), report)
}

/// Slice of `xml` holding the book division `id`.
fn book_section<'a>(xml: &'a str, id: &str) -> &'a str {
    let start = xml
        .find(&format!("<div type=\"book\" osisID=\"{id}\">"))
        .expect("book present");
    let rest = &xml[start..];
    let end = rest.find("\n\t\t</div>\n").expect("book closed");
    &rest[..end]
}

// ============================================================================
// Document structure
// ============================================================================

#[test]
fn test_books_in_canon_order() {
    let (xml, report) = convert_fixtures();
    assert_eq!(report.books, vec![Book::Obadiah, Book::Jonah]);

    let obadiah = xml.find("osisID=\"Obad\"").unwrap();
    let jonah = xml.find("osisID=\"Jonah\"").unwrap();
    assert!(obadiah < jonah);
    assert!(!xml.contains("osisID=\"Gen\""));
}

#[test]
fn test_output_is_balanced() {
    let (xml, _) = convert_fixtures();

    assert_eq!(xml.matches("<div ").count(), xml.matches("</div>").count());
    assert_eq!(xml.matches("<p>").count(), xml.matches("</p>").count());
    assert_eq!(
        xml.matches("<chapter sID=").count(),
        xml.matches("<chapter eID=").count()
    );
    assert_eq!(
        xml.matches("<verse sID=").count(),
        xml.matches("<verse eID=").count()
    );
    assert_eq!(xml.matches("<note ").count(), xml.matches("</note>").count());
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n"));
    assert!(xml.ends_with("\t</osisText>\n</osis>\n"));
}

#[test]
fn test_foreword_is_introduction() {
    let (xml, _) = convert_fixtures();
    let body = &xml[xml.find("</header>").unwrap()..];

    assert!(body.starts_with(
        "</header>\n\
         \t\n\
         \t\t<div type=\"introduction\">\n\
         \t\t\t<div type=\"majorSection\">\n\
         \t\t\t\t<title>Vorwort</title>\n"
    ));
    assert!(body.contains("<title>Zur Textgestalt</title>"));
    assert!(body.contains(
        "Querverweise wie <reference osisRef=\"Jonah.1.3\">Jona 1,3</reference> sind verlinkt.\n"
    ));
    assert!(!body.contains("nach oben"));
}

#[test]
fn test_chapter_precedes_its_heading() {
    let (xml, _) = convert_fixtures();
    let jonah = book_section(&xml, "Jonah");

    let chapter = jonah.find("<chapter sID=\"Jonah.1\"").unwrap();
    let major = jonah.find("<div type=\"majorSection\">").unwrap();
    assert!(chapter < major);

    let chapter_two = jonah.find("<chapter sID=\"Jonah.2\"").unwrap();
    let prayer = jonah.find("<title>Das Gebet im Fisch</title>").unwrap();
    assert!(chapter_two < prayer);
    assert!(jonah.find("<chapter eID=\"Jonah.1\"").unwrap() < chapter_two);
}

#[test]
fn test_book_introduction_and_titles() {
    let (xml, _) = convert_fixtures();
    let jonah = book_section(&xml, "Jonah");

    assert!(jonah.contains("\t\t\t<title>Jona</title>\n"));
    assert!(jonah.contains("\t\t\t<div type=\"introduction\">\n"));
    assert!(jonah.contains(
        "Jesus nennt ihn in <reference osisRef=\"Matt.12.40\">Mt 12,40</reference>.\n"
    ));
    assert!(!jonah.contains("Inhalt"));
}

#[test]
fn test_implicit_chapter_for_single_chapter_book() {
    let (xml, _) = convert_fixtures();
    let obadiah = book_section(&xml, "Obad");

    assert!(obadiah.contains("<chapter sID=\"Obad.1\" osisID=\"Obad.1\"/>"));
    assert!(obadiah.contains("<verse sID=\"Obad.1.21\" osisID=\"Obad.1.21\"/>"));
    assert!(obadiah.contains("<reference osisRef=\"Jonah.1.2\">Jona 1,2</reference>."));
}

// ============================================================================
// Footnotes
// ============================================================================

#[test]
fn test_footnotes_follow_their_markers() {
    let (xml, _) = convert_fixtures();
    let jonah = book_section(&xml, "Jonah");

    assert!(jonah.contains(
        "nach Ninive<note type=\"explanation\" n=\"*\">\n\
         \t\t\t\t\t\t\t<hi type=\"italic\">Ninive</hi> war die Hauptstadt Assyriens.\n\
         \t\t\t\t\t\t</note>, in die große Stadt!“\n"
    ));
    assert!(jonah.contains("Tarsis<note type=\"explanation\" n=\"*\">"));
    assert!(jonah.contains("Tarsis lag im äußersten Westen."));
    assert!(!jonah.contains("1,3:"));
}

#[test]
fn test_unused_footnote_is_reported() {
    let (xml, report) = convert_fixtures();

    assert_eq!(report.unused_footnotes(), 1);
    assert_eq!(
        report.diagnostics,
        vec![Diagnostic::UnusedFootnote {
            verse: Verse::new(Book::Jonah, 2, 5),
            content: "2,5: Diese Anmerkung hat keine Markierung.".to_string(),
        }]
    );
    assert!(!xml.contains("keine Markierung"));
}

// ============================================================================
// Inline content
// ============================================================================

#[test]
fn test_inline_styles_and_images() {
    let (xml, _) = convert_fixtures();
    let jonah = book_section(&xml, "Jonah");

    assert!(jonah.contains("Da betete Jona ♪ zu Jahwe, <hi type=\"bold\">seinem Gott</hi>."));
    assert!(jonah.contains("\t\t\t\t\t\t<hi type=\"italic\">Ein Danklied</hi>\n"));
}

#[test]
fn test_horizontal_rule_ends_book() {
    let (xml, _) = convert_fixtures();
    assert!(!xml.contains("Impressum"));
    assert!(xml.contains(
        "\t\t\t\t\t<verse eID=\"Jonah.2.2\"/>\n\t\t\t\t\t<chapter eID=\"Jonah.2\"/>\n"
    ));
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_usfm_naming_and_work_info() {
    let canon = NeueCanon::new();
    let source = HtmlDirectory::new(FIXTURES_DIR);
    let work = WorkInfo::default()
        .with_name("GerNeUeTest")
        .with_title("NeÜ & Test");
    let (sink, _) = Converter::new(&canon, &Usfm3Naming)
        .with_work(work)
        .convert(&source, Vec::new())
        .unwrap();
    let xml = String::from_utf8(sink).unwrap();

    assert!(xml.contains("<div type=\"book\" osisID=\"JON\">"));
    assert!(xml.contains("<verse sID=\"JON.1.1\" osisID=\"JON.1.1\"/>"));
    assert!(xml.contains("osisIDWork=\"GerNeUeTest\""));
    assert!(xml.contains("<title>NeÜ &amp; Test</title>"));
    assert!(xml.contains("<identifier type=\"OSIS\">GerNeUeTest.HtmlConverted</identifier>"));
}

#[test]
fn test_missing_foreword_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let canon = NeueCanon::new();
    let source = HtmlDirectory::new(dir.path());
    let result = Converter::new(&canon, &OsisNaming).convert(&source, Vec::new());
    assert!(matches!(result, Err(Error::MissingDocument(_))));
}

#[test]
fn test_unknown_book_in_citation_is_error() {
    let mut body = Document::new();
    let root = body.root();
    let p = body.append(root, NodeKind::Paragraph(ParagraphRole::Normal));
    let verse = body.append(p, NodeKind::Span(SpanRole::Verse));
    body.append_text(verse, "1");
    let link = body.append(p, NodeKind::hyperlink("x.html"));
    body.append_text(link, "Hesekiel-Apokryph 3,1");

    let canon = NeueCanon::new();
    let source = MemorySource::new(SourceDocument::new("Vorwort", Document::new()))
        .with_book(Book::Obadiah, SourceDocument::new("Obadja", body));
    let result = Converter::new(&canon, &OsisNaming).convert(&source, Vec::new());
    assert!(matches!(result, Err(Error::Reference { .. })));
}
