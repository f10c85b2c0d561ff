//! Node kinds of the typed source tree.

/// What a node of the source tree represents.
///
/// Loaders classify their markup into these kinds; the converter matches on
/// them exhaustively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Document root; never emitted.
    Root,
    Paragraph(ParagraphRole),
    Text(String),
    Emphasis(Emphasis),
    /// Heading level 2, 3 or 4.
    Heading(u8),
    /// A link. Without a target the display text is used as target.
    Hyperlink { target: Option<String> },
    Image(ImageKind),
    Span(SpanRole),
    Division(DivisionRole),
    LineBreak,
    /// Lists carry no biblical text and are skipped.
    List,
    /// Ends the current document.
    HorizontalRule,
    /// Markup no rule exists for, named by its tag.
    Other(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphRole {
    Normal,
    /// Chapter summary, rendered as one italic line.
    Summary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Bold,
    Italic,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageKind {
    /// Music note marking a song.
    Note,
    Unsupported(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanRole {
    /// Verse number label.
    Verse,
    /// Chapter number label.
    Chapter,
    /// Minor heading inside running text.
    Subheading,
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DivisionRole {
    Introduction,
    /// Footnote block; its leading citation names the verse it belongs to.
    Footnote,
    Other(String),
}

impl NodeKind {
    pub fn text(text: impl Into<String>) -> Self {
        NodeKind::Text(text.into())
    }

    pub fn hyperlink(target: impl Into<String>) -> Self {
        NodeKind::Hyperlink {
            target: Some(target.into()),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            NodeKind::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn is_footnote(&self) -> bool {
        matches!(self, NodeKind::Division(DivisionRole::Footnote))
    }
}
