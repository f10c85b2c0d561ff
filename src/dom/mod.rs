//! Typed source tree.
//!
//! A [`Document`] stores its nodes in one arena vector. Links between nodes
//! are indices into that vector, so traversal never touches reference
//! counts and a node's successor siblings can be visited without holding a
//! borrow of the node itself.

mod node;

pub use node::{DivisionRole, Emphasis, ImageKind, NodeKind, ParagraphRole, SpanRole};

/// Index of a node in a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    /// Sentinel value for no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }

    fn get(self) -> Option<NodeId> {
        (!self.is_none()).then_some(self)
    }
}

#[derive(Debug, Clone)]
pub struct Node {
    pub kind: NodeKind,
    pub parent: NodeId,
    pub first_child: NodeId,
    pub last_child: NodeId,
    pub next_sibling: NodeId,
}

impl Node {
    fn new(kind: NodeKind, parent: NodeId) -> Self {
        Self {
            kind,
            parent,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            next_sibling: NodeId::NONE,
        }
    }
}

/// Ordered tree of typed nodes below a [`NodeKind::Root`].
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeKind::Root, NodeId::NONE)],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0 as usize)
    }

    pub fn kind(&self, id: NodeId) -> Option<&NodeKind> {
        self.get(id).map(|node| &node.kind)
    }

    /// Number of nodes, including the root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Append a new last child to `parent`.
    pub fn append(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::new(kind, parent));

        let previous = self
            .get(parent)
            .map_or(NodeId::NONE, |node| node.last_child);
        if let Some(node) = self.nodes.get_mut(previous.0 as usize) {
            node.next_sibling = id;
        }
        if let Some(node) = self.nodes.get_mut(parent.0 as usize) {
            if node.first_child.is_none() {
                node.first_child = id;
            }
            node.last_child = id;
        }
        id
    }

    pub fn append_text(&mut self, parent: NodeId, text: impl Into<String>) -> NodeId {
        self.append(parent, NodeKind::Text(text.into()))
    }

    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|node| node.first_child.get())
    }

    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|node| node.next_sibling.get())
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|node| node.parent.get())
    }

    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            document: self,
            next: self.first_child(id),
        }
    }

    /// Concatenated text of every text node below `id`.
    pub fn inner_text(&self, id: NodeId) -> String {
        let mut text = String::new();
        self.collect_text(id, &mut text);
        text
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        if let Some(NodeKind::Text(text)) = self.kind(id) {
            out.push_str(text);
        }
        for child in self.children(id) {
            self.collect_text(child, out);
        }
    }
}

/// Iterator over the children of a node.
pub struct Children<'a> {
    document: &'a Document,
    next: Option<NodeId>,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.document.next_sibling(current);
        Some(current)
    }
}

/// A loaded source document: its title and the content following it.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub title: String,
    pub body: Document,
}

impl SourceDocument {
    pub fn new(title: impl Into<String>, body: Document) -> Self {
        Self {
            title: title.into(),
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_links_siblings() {
        let mut doc = Document::new();
        let p = doc.append(doc.root(), NodeKind::Paragraph(ParagraphRole::Normal));
        let a = doc.append_text(p, "a");
        let b = doc.append(p, NodeKind::Emphasis(Emphasis::Bold));
        doc.append_text(b, "b");

        assert_eq!(doc.children(p).collect::<Vec<_>>(), vec![a, b]);
        assert_eq!(doc.next_sibling(a), Some(b));
        assert_eq!(doc.next_sibling(b), None);
        assert_eq!(doc.parent(a), Some(p));
        assert_eq!(doc.parent(doc.root()), None);
    }

    #[test]
    fn test_inner_text() {
        let mut doc = Document::new();
        let p = doc.append(doc.root(), NodeKind::Paragraph(ParagraphRole::Normal));
        doc.append_text(p, "Im ");
        let b = doc.append(p, NodeKind::Emphasis(Emphasis::Italic));
        doc.append_text(b, "Anfang");
        assert_eq!(doc.inner_text(p), "Im Anfang");
        assert_eq!(doc.inner_text(doc.root()), "Im Anfang");
    }
}
