//! OSIS XML emitter.
//!
//! Every structural open increments the indentation by one tab and every
//! close decrements it again. Chapter and verse boundaries are milestones
//! (`sID`/`eID` pairs) and leave the indentation unchanged.

use std::io::Write;

use quick_xml::escape::escape;

use crate::bible::{Book, NamingScheme, Verse};
use crate::convert::WorkInfo;
use crate::error::{Error, Result};
use crate::reference::VerseReference;

/// Inline text styling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl TextStyle {
    pub const PLAIN: TextStyle = TextStyle {
        bold: false,
        italic: false,
        underline: false,
    };

    pub const ITALIC: TextStyle = TextStyle {
        bold: false,
        italic: true,
        underline: false,
    };

    pub fn is_plain(&self) -> bool {
        !(self.bold || self.italic || self.underline)
    }
}

/// Indentation of the body inside `<osis><osisText>`.
const HEADER_DEPTH: usize = 2;

/// Streams OSIS markup into a writer.
pub struct OsisWriter<'a, W: Write> {
    out: W,
    naming: &'a dyn NamingScheme,
    indent: usize,
    line_ended: bool,
}

impl<'a, W: Write> OsisWriter<'a, W> {
    pub fn new(out: W, naming: &'a dyn NamingScheme) -> Self {
        Self {
            out,
            naming,
            indent: 0,
            line_ended: true,
        }
    }

    /// Number of structural elements currently open below `<osisText>`.
    pub fn depth(&self) -> usize {
        self.indent.saturating_sub(HEADER_DEPTH)
    }

    /// Whether the last write finished a line.
    pub fn line_ended(&self) -> bool {
        self.line_ended
    }

    /// Check that every open element was closed and hand back the sink.
    pub fn finish(mut self) -> Result<W> {
        if self.indent != 0 {
            return Err(Error::Unbalanced(self.indent));
        }
        self.out.flush()?;
        Ok(self.out)
    }

    pub fn write_header(&mut self, work: &WorkInfo) -> Result<()> {
        let name = escape(work.name.as_str());
        let title = escape(work.title.as_str());
        let language = escape(work.language.as_str());
        let ref_system = escape(work.ref_system.as_str());

        let header = [
            r#"<?xml version="1.0" encoding="UTF-8" ?>"#.to_string(),
            r#"<osis xsi:schemaLocation="http://www.bibletechnologies.net/2003/OSIS/namespace"#
                .to_string(),
            "\thttps://www.crosswire.org/~dmsmith/osis/osisCore.2.1.1-cw-latest.xsd\"".to_string(),
            "\txmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\"".to_string(),
            "\txmlns=\"http://www.bibletechnologies.net/2003/OSIS/namespace\">".to_string(),
            "\t".to_string(),
            format!(
                "\t<osisText osisIDWork=\"{name}\" osisRefWork=\"defaultReferenceScheme\" xml:lang=\"{language}\">"
            ),
            "\t\t".to_string(),
            "\t\t<header>".to_string(),
            format!("\t\t\t<work osisWork=\"{name}\">"),
            format!("\t\t\t\t<title>{title}</title>"),
            "\t\t\t\t<type type=\"OSIS\">Bible</type>".to_string(),
            format!("\t\t\t\t<identifier type=\"OSIS\">{name}.HtmlConverted</identifier>"),
            format!("\t\t\t\t<refSystem>{ref_system}</refSystem>"),
            "\t\t\t</work>".to_string(),
            "\t\t\t<work osisWork=\"defaultReferenceScheme\">".to_string(),
            format!("\t\t\t\t<refSystem>{ref_system}</refSystem>"),
            "\t\t\t</work>".to_string(),
            "\t\t</header>".to_string(),
            "\t".to_string(),
        ];
        for line in &header {
            self.line_at(self.indent, line)?;
        }
        self.indent += HEADER_DEPTH;
        Ok(())
    }

    pub fn write_footer(&mut self) -> Result<()> {
        self.indent = self
            .indent
            .checked_sub(HEADER_DEPTH)
            .ok_or(Error::Unbalanced(self.indent))?;
        self.line_at(self.indent, "\t</osisText>")?;
        self.line_at(self.indent, "</osis>")
    }

    pub fn start_book(&mut self, book: Book) -> Result<()> {
        let line = format!(r#"<div type="book" osisID="{}">"#, self.naming.code(book));
        self.open(&line)
    }

    pub fn end_book(&mut self) -> Result<()> {
        self.close("</div>")
    }

    pub fn start_major_section(&mut self) -> Result<()> {
        self.open(r#"<div type="majorSection">"#)
    }

    pub fn end_major_section(&mut self) -> Result<()> {
        self.close("</div>")
    }

    pub fn start_section(&mut self) -> Result<()> {
        self.open(r#"<div type="section">"#)
    }

    pub fn end_section(&mut self) -> Result<()> {
        self.close("</div>")
    }

    pub fn start_subsection(&mut self) -> Result<()> {
        self.open(r#"<div type="subSection">"#)
    }

    pub fn end_subsection(&mut self) -> Result<()> {
        self.close("</div>")
    }

    pub fn start_introduction(&mut self) -> Result<()> {
        self.open(r#"<div type="introduction">"#)
    }

    pub fn end_introduction(&mut self) -> Result<()> {
        self.close("</div>")
    }

    pub fn start_paragraph(&mut self) -> Result<()> {
        self.open("<p>")
    }

    pub fn end_paragraph(&mut self) -> Result<()> {
        self.close("</p>")
    }

    pub fn start_chapter(&mut self, book: Book, chapter: u32) -> Result<()> {
        let id = format!("{}.{chapter}", self.naming.code(book));
        self.line_at(self.indent, &format!(r#"<chapter sID="{id}" osisID="{id}"/>"#))
    }

    pub fn end_chapter(&mut self, book: Book, chapter: u32) -> Result<()> {
        let id = format!("{}.{chapter}", self.naming.code(book));
        self.line_at(self.indent, &format!(r#"<chapter eID="{id}"/>"#))
    }

    pub fn start_verse(&mut self, verse: Verse) -> Result<()> {
        let id = self.verse_id(verse);
        self.line_at(self.indent, &format!(r#"<verse sID="{id}" osisID="{id}"/>"#))
    }

    pub fn end_verse(&mut self, verse: Verse) -> Result<()> {
        let id = self.verse_id(verse);
        self.line_at(self.indent, &format!(r#"<verse eID="{id}"/>"#))
    }

    /// A one-line `<title>`.
    pub fn title(&mut self, title: &str) -> Result<()> {
        self.line_at(self.indent, &format!("<title>{}</title>", escape(title)))
    }

    /// Open a multi-line `<title>` whose content may contain notes.
    pub fn start_title(&mut self) -> Result<()> {
        self.open("<title>")
    }

    pub fn end_title(&mut self) -> Result<()> {
        self.close("</title>")
    }

    /// Open an explanatory note inline, continuing the current line.
    pub fn start_footnote(&mut self) -> Result<()> {
        self.write_line(r#"<note type="explanation" n="*">"#)?;
        self.indent += 1;
        Ok(())
    }

    /// Close a note without ending the line, so text may follow directly.
    pub fn end_footnote(&mut self) -> Result<()> {
        self.indent = self
            .indent
            .checked_sub(1)
            .ok_or(Error::Unbalanced(0))?;
        self.write_at(self.indent, "</note>")
    }

    pub fn line_break(&mut self) -> Result<()> {
        self.line_at(self.indent, "<lb/>")
    }

    /// Running text: indented after a line end, appended otherwise.
    pub fn text(&mut self, text: &str) -> Result<()> {
        self.raw_text(&escape(text))
    }

    pub fn styled_text(&mut self, style: TextStyle, text: &str) -> Result<()> {
        let mut markup = String::new();
        if style.bold {
            markup.push_str(r#"<hi type="bold">"#);
        }
        if style.underline {
            markup.push_str(r#"<hi type="underline">"#);
        }
        if style.italic {
            markup.push_str(r#"<hi type="italic">"#);
        }
        markup.push_str(&escape(text));
        if style.italic {
            markup.push_str("</hi>");
        }
        if style.underline {
            markup.push_str("</hi>");
        }
        if style.bold {
            markup.push_str("</hi>");
        }
        self.raw_text(&markup)
    }

    /// A complete line of styled text.
    pub fn line(&mut self, style: TextStyle, text: &str) -> Result<()> {
        self.write_at(self.indent, "")?;
        self.styled_text(style, text)?;
        self.end_line()
    }

    /// Finish the current line unless it is already finished.
    pub fn end_line(&mut self) -> Result<()> {
        if self.line_ended {
            return Ok(());
        }
        self.write_line("")
    }

    pub fn hyperlink(&mut self, text: &str, target: &str) -> Result<()> {
        self.write(&format!(
            r#"<a href="{}">{}</a>"#,
            escape(target),
            escape(text)
        ))
    }

    pub fn reference(&mut self, reference: &VerseReference) -> Result<()> {
        let target = match reference {
            VerseReference::Single { verse, .. } => self.ref_id(*verse),
            VerseReference::Range { start, end, .. } => {
                format!("{}-{}", self.ref_id(*start), self.ref_id(*end))
            }
            VerseReference::Multiple { verses, .. } => verses
                .iter()
                .map(|verse| self.ref_id(*verse))
                .collect::<Vec<_>>()
                .join(" "),
        };
        self.write(&format!(
            r#"<reference osisRef="{target}">{}</reference>"#,
            escape(reference.text())
        ))
    }

    fn verse_id(&self, verse: Verse) -> String {
        format!(
            "{}.{}.{}",
            self.naming.code(verse.book),
            verse.chapter,
            verse.verse
        )
    }

    /// `osisRef` value; zero verse and chapter numbers are left out.
    fn ref_id(&self, verse: Verse) -> String {
        let code = self.naming.code(verse.book);
        if verse.verse != 0 {
            format!("{code}.{}.{}", verse.chapter, verse.verse)
        } else if verse.chapter != 0 {
            format!("{code}.{}", verse.chapter)
        } else {
            code.to_string()
        }
    }

    fn raw_text(&mut self, markup: &str) -> Result<()> {
        if self.line_ended {
            self.write_at(self.indent, markup)
        } else {
            self.write(markup)
        }
    }

    fn open(&mut self, line: &str) -> Result<()> {
        self.line_at(self.indent, line)?;
        self.indent += 1;
        Ok(())
    }

    fn close(&mut self, line: &str) -> Result<()> {
        self.indent = self
            .indent
            .checked_sub(1)
            .ok_or(Error::Unbalanced(0))?;
        self.line_at(self.indent, line)
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.out.write_all(text.as_bytes())?;
        self.line_ended = text.ends_with('\n');
        Ok(())
    }

    fn write_at(&mut self, indent: usize, text: &str) -> Result<()> {
        self.write_tabs(indent)?;
        self.out.write_all(text.as_bytes())?;
        self.line_ended = false;
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> Result<()> {
        self.out.write_all(text.as_bytes())?;
        self.out.write_all(b"\n")?;
        self.line_ended = true;
        Ok(())
    }

    /// Write `text` on a line of its own.
    fn line_at(&mut self, indent: usize, text: &str) -> Result<()> {
        self.end_line()?;
        self.write_tabs(indent)?;
        self.write_line(text)
    }

    fn write_tabs(&mut self, indent: usize) -> Result<()> {
        for _ in 0..indent {
            self.out.write_all(b"\t")?;
        }
        Ok(())
    }
}
