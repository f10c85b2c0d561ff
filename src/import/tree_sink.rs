//! html5ever TreeSink building an [`HtmlArena`].

use std::borrow::Cow;
use std::cell::RefCell;

use html5ever::tendril::StrTendril;
use html5ever::tree_builder::{ElementFlags, NodeOrText, QuirksMode, TreeSink};
use html5ever::{Attribute as Html5Attribute, QualName};
use log::trace;

use super::arena::{Attribute, HtmlArena, HtmlNodeData, HtmlNodeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeHandle(pub HtmlNodeId);

impl Default for NodeHandle {
    fn default() -> Self {
        NodeHandle(HtmlNodeId::NONE)
    }
}

/// TreeSink over an [`HtmlArena`].
///
/// html5ever calls every method through `&self`, so the arena sits in a
/// `RefCell`.
pub struct ArenaSink {
    arena: RefCell<HtmlArena>,
}

impl Default for ArenaSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ArenaSink {
    pub fn new() -> Self {
        Self {
            arena: RefCell::new(HtmlArena::new()),
        }
    }

    pub fn into_arena(self) -> HtmlArena {
        self.arena.into_inner()
    }

    fn append_to(&self, parent: HtmlNodeId, child: NodeOrText<NodeHandle>) {
        let mut arena = self.arena.borrow_mut();
        match child {
            NodeOrText::AppendNode(node) => arena.append(parent, node.0),
            NodeOrText::AppendText(text) => arena.append_text(parent, &text),
        }
    }
}

impl TreeSink for ArenaSink {
    type Handle = NodeHandle;
    type Output = Self;
    type ElemName<'a>
        = &'a QualName
    where
        Self: 'a;

    fn finish(self) -> Self::Output {
        self
    }

    fn parse_error(&self, msg: Cow<'static, str>) {
        // The sources are hand-written HTML; recover like a browser.
        trace!("HTML parse error: {msg}");
    }

    fn get_document(&self) -> Self::Handle {
        NodeHandle(self.arena.borrow().document())
    }

    fn elem_name<'a>(&'a self, target: &'a Self::Handle) -> Self::ElemName<'a> {
        static EMPTY: QualName = QualName {
            prefix: None,
            ns: html5ever::ns!(),
            local: html5ever::local_name!(""),
        };

        let arena = self.arena.borrow();
        match arena.get(target.0).map(|n| &n.data) {
            Some(HtmlNodeData::Element { name, .. }) => {
                // SAFETY: nodes are never removed from the arena and an
                // element's name is never mutated, so the QualName lives as
                // long as `self` even though the RefCell guard does not.
                unsafe { std::mem::transmute::<&QualName, &'a QualName>(name) }
            }
            _ => &EMPTY,
        }
    }

    fn create_element(
        &self,
        name: QualName,
        attrs: Vec<Html5Attribute>,
        _flags: ElementFlags,
    ) -> Self::Handle {
        let attrs = attrs
            .into_iter()
            .map(|a| Attribute {
                name: a.name,
                value: a.value.to_string(),
            })
            .collect();
        NodeHandle(self.arena.borrow_mut().create_element(name, attrs))
    }

    fn create_comment(&self, _text: StrTendril) -> Self::Handle {
        NodeHandle(self.arena.borrow_mut().create_ignored())
    }

    fn create_pi(&self, _target: StrTendril, _data: StrTendril) -> Self::Handle {
        NodeHandle(self.arena.borrow_mut().create_ignored())
    }

    fn append(&self, parent: &Self::Handle, child: NodeOrText<Self::Handle>) {
        self.append_to(parent.0, child);
    }

    fn append_based_on_parent_node(
        &self,
        element: &Self::Handle,
        prev_element: &Self::Handle,
        child: NodeOrText<Self::Handle>,
    ) {
        let parent = self
            .arena
            .borrow()
            .get(element.0)
            .map(|n| n.parent)
            .filter(HtmlNodeId::is_some);
        match parent {
            Some(parent) => self.append_to(parent, child),
            None => self.append_to(prev_element.0, child),
        }
    }

    fn append_doctype_to_document(
        &self,
        _name: StrTendril,
        _public_id: StrTendril,
        _system_id: StrTendril,
    ) {
    }

    fn get_template_contents(&self, target: &Self::Handle) -> Self::Handle {
        *target
    }

    fn same_node(&self, x: &Self::Handle, y: &Self::Handle) -> bool {
        x.0 == y.0
    }

    fn set_quirks_mode(&self, _mode: QuirksMode) {}

    fn append_before_sibling(&self, sibling: &Self::Handle, new_node: NodeOrText<Self::Handle>) {
        let mut arena = self.arena.borrow_mut();
        let node = match new_node {
            NodeOrText::AppendNode(node) => node.0,
            NodeOrText::AppendText(text) => arena.create_text(text.to_string()),
        };
        arena.insert_before(sibling.0, node);
    }

    fn add_attrs_if_missing(&self, target: &Self::Handle, attrs: Vec<Html5Attribute>) {
        let mut arena = self.arena.borrow_mut();
        if let Some(node) = arena.get_mut(target.0)
            && let HtmlNodeData::Element {
                attrs: existing, ..
            } = &mut node.data
        {
            for attr in attrs {
                if !existing.iter().any(|a| a.name == attr.name) {
                    existing.push(Attribute {
                        name: attr.name,
                        value: attr.value.to_string(),
                    });
                }
            }
        }
    }

    fn remove_from_parent(&self, target: &Self::Handle) {
        self.arena.borrow_mut().detach(target.0);
    }

    fn reparent_children(&self, node: &Self::Handle, new_parent: &Self::Handle) {
        let mut arena = self.arena.borrow_mut();
        let children: Vec<_> = arena.children(node.0).collect();
        for child in children {
            arena.detach(child);
            arena.append(new_parent.0, child);
        }
    }
}

#[cfg(test)]
mod tests {
    use html5ever::driver::ParseOpts;
    use html5ever::parse_document;
    use html5ever::tendril::TendrilSink;

    use super::*;

    fn parse_html(html: &str) -> HtmlArena {
        parse_document(ArenaSink::new(), ParseOpts::default())
            .from_utf8()
            .one(html.as_bytes())
            .into_arena()
    }

    #[test]
    fn test_builds_body() {
        let arena = parse_html("<html><body><p class=\"u0\">Jona</p></body></html>");
        let p = arena.find_by_tag("p").expect("should find p");
        assert!(arena.has_class(p, "u0"));
        assert_eq!(arena.inner_text(p), "Jona");
    }

    #[test]
    fn test_comments_are_ignored_nodes() {
        let arena = parse_html("<body><!-- Kommentar --><p>Text</p></body>");
        let body = arena.find_by_tag("body").expect("should find body");
        let first = arena.children(body).next().expect("body has children");
        assert!(matches!(
            arena.get(first).map(|n| &n.data),
            Some(HtmlNodeData::Ignored)
        ));
    }

    #[test]
    fn test_misnested_markup_is_repaired() {
        let arena = parse_html("<body><p><b>fett<i>kursiv</b> weiter</i></p></body>");
        let p = arena.find_by_tag("p").expect("should find p");
        assert_eq!(arena.inner_text(p), "fettkursiv weiter");
    }
}
