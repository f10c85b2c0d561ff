//! Reduce parsed HTML to the typed source tree.

use crate::dom::{
    DivisionRole, Document, Emphasis, ImageKind, NodeId, NodeKind, ParagraphRole, SourceDocument,
    SpanRole,
};

use super::arena::{HtmlArena, HtmlNodeData, HtmlNodeId};

/// File name of the music-note image.
const NOTE_IMAGE: &str = "note.png";

/// A book page: titled by its first `p.u0`.
pub fn book_document(arena: &HtmlArena) -> SourceDocument {
    extract(arena, arena.find_by_tag_and_class("p", "u0"))
}

/// The foreword page: titled by its first `h2`.
pub fn foreword_document(arena: &HtmlArena) -> SourceDocument {
    extract(arena, arena.find_by_tag("h2"))
}

/// Title text of `title` plus the siblings following it as body. Without a
/// title node the whole `<body>` is content.
fn extract(arena: &HtmlArena, title: Option<HtmlNodeId>) -> SourceDocument {
    let mut body = Document::new();
    let root = body.root();

    let (title, first) = match title {
        Some(node) => (
            clean_text(&arena.inner_text(node)).trim().to_string(),
            arena.next_sibling(node),
        ),
        None => {
            let container = arena.find_by_tag("body").unwrap_or(arena.document());
            (String::new(), arena.children(container).next())
        }
    };

    let mut current = first;
    while let Some(node) = current {
        classify(arena, node, &mut body, root);
        current = arena.next_sibling(node);
    }
    SourceDocument::new(title, body)
}

fn classify(arena: &HtmlArena, id: HtmlNodeId, doc: &mut Document, parent: NodeId) {
    let Some(node) = arena.get(id) else {
        return;
    };
    let kind = match &node.data {
        HtmlNodeData::Text(text) => {
            doc.append_text(parent, clean_text(text));
            return;
        }
        HtmlNodeData::Element { name, .. } => element_kind(arena, id, name.local.as_ref()),
        HtmlNodeData::Document | HtmlNodeData::Ignored => return,
    };

    let node = doc.append(parent, kind);
    for child in arena.children(id) {
        classify(arena, child, doc, node);
    }
}

fn element_kind(arena: &HtmlArena, id: HtmlNodeId, tag: &str) -> NodeKind {
    match tag {
        "p" if arena.has_class(id, "u1") => NodeKind::Paragraph(ParagraphRole::Summary),
        "p" => NodeKind::Paragraph(ParagraphRole::Normal),
        "b" | "strong" | "em" => NodeKind::Emphasis(Emphasis::Bold),
        "i" => NodeKind::Emphasis(Emphasis::Italic),
        "h2" => NodeKind::Heading(2),
        "h3" => NodeKind::Heading(3),
        "h4" => NodeKind::Heading(4),
        "a" => NodeKind::Hyperlink {
            target: arena.get_attr(id, "href").map(str::to_string),
        },
        "img" => {
            let source = arena.get_attr(id, "src").unwrap_or_default();
            let file = source.rsplit('/').next().unwrap_or(source);
            if file.eq_ignore_ascii_case(NOTE_IMAGE) {
                NodeKind::Image(ImageKind::Note)
            } else {
                NodeKind::Image(ImageKind::Unsupported(source.to_string()))
            }
        }
        "span" => NodeKind::Span(span_role(arena, id)),
        "div" => NodeKind::Division(division_role(arena, id)),
        "br" => NodeKind::LineBreak,
        "ul" | "ol" => NodeKind::List,
        "hr" => NodeKind::HorizontalRule,
        other => NodeKind::Other(other.to_string()),
    }
}

fn span_role(arena: &HtmlArena, id: HtmlNodeId) -> SpanRole {
    if arena.has_class(id, "vers") {
        SpanRole::Verse
    } else if arena.has_class(id, "kap") {
        SpanRole::Chapter
    } else if arena.has_class(id, "u2") {
        SpanRole::Subheading
    } else {
        SpanRole::Other(arena.element_classes(id).join(" "))
    }
}

fn division_role(arena: &HtmlArena, id: HtmlNodeId) -> DivisionRole {
    if arena.has_class(id, "e") {
        DivisionRole::Introduction
    } else if arena.has_class(id, "fn") {
        DivisionRole::Footnote
    } else {
        DivisionRole::Other(arena.element_classes(id).join(" "))
    }
}

fn clean_text(text: &str) -> String {
    text.replace('\u{a0}', " ")
}
