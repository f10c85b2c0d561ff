//! Raw HTML parse tree.
//!
//! html5ever builds into this arena; [`super::classify`] then reduces it to
//! the typed [`crate::dom::Document`] the converter walks.

use html5ever::{LocalName, QualName};

/// Index of a node in an [`HtmlArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HtmlNodeId(pub u32);

impl HtmlNodeId {
    pub const NONE: HtmlNodeId = HtmlNodeId(u32::MAX);

    pub fn is_some(&self) -> bool {
        self.0 != u32::MAX
    }

    pub fn is_none(&self) -> bool {
        self.0 == u32::MAX
    }
}

#[derive(Debug, Clone)]
pub enum HtmlNodeData {
    Document,
    Element {
        name: QualName,
        attrs: Vec<Attribute>,
        /// Split `class` attribute.
        classes: Vec<String>,
    },
    Text(String),
    /// Comments, doctypes and processing instructions. Never classified.
    Ignored,
}

#[derive(Debug, Clone)]
pub struct Attribute {
    pub name: QualName,
    pub value: String,
}

#[derive(Debug)]
pub struct HtmlNode {
    pub data: HtmlNodeData,
    pub parent: HtmlNodeId,
    pub first_child: HtmlNodeId,
    pub last_child: HtmlNodeId,
    pub prev_sibling: HtmlNodeId,
    pub next_sibling: HtmlNodeId,
}

impl HtmlNode {
    fn new(data: HtmlNodeData) -> Self {
        Self {
            data,
            parent: HtmlNodeId::NONE,
            first_child: HtmlNodeId::NONE,
            last_child: HtmlNodeId::NONE,
            prev_sibling: HtmlNodeId::NONE,
            next_sibling: HtmlNodeId::NONE,
        }
    }
}

/// Parsed HTML with index links between nodes.
pub struct HtmlArena {
    nodes: Vec<HtmlNode>,
    document: HtmlNodeId,
}

impl HtmlArena {
    pub fn new() -> Self {
        let mut arena = Self {
            nodes: Vec::new(),
            document: HtmlNodeId::NONE,
        };
        arena.document = arena.alloc(HtmlNode::new(HtmlNodeData::Document));
        arena
    }

    fn alloc(&mut self, node: HtmlNode) -> HtmlNodeId {
        let id = HtmlNodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    pub fn document(&self) -> HtmlNodeId {
        self.document
    }

    pub fn get(&self, id: HtmlNodeId) -> Option<&HtmlNode> {
        if id.is_none() {
            return None;
        }
        self.nodes.get(id.0 as usize)
    }

    pub fn get_mut(&mut self, id: HtmlNodeId) -> Option<&mut HtmlNode> {
        if id.is_none() {
            return None;
        }
        self.nodes.get_mut(id.0 as usize)
    }

    pub fn create_element(&mut self, name: QualName, attrs: Vec<Attribute>) -> HtmlNodeId {
        let classes = attrs
            .iter()
            .find(|attr| attr.name.local.as_ref() == "class")
            .map(|attr| attr.value.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default();
        self.alloc(HtmlNode::new(HtmlNodeData::Element {
            name,
            attrs,
            classes,
        }))
    }

    pub fn create_text(&mut self, text: String) -> HtmlNodeId {
        self.alloc(HtmlNode::new(HtmlNodeData::Text(text)))
    }

    pub fn create_ignored(&mut self) -> HtmlNodeId {
        self.alloc(HtmlNode::new(HtmlNodeData::Ignored))
    }

    pub fn append(&mut self, parent: HtmlNodeId, child: HtmlNodeId) {
        let last_child = self
            .get(parent)
            .map(|n| n.last_child)
            .unwrap_or(HtmlNodeId::NONE);

        if let Some(child_node) = self.get_mut(child) {
            child_node.parent = parent;
            child_node.prev_sibling = last_child;
            child_node.next_sibling = HtmlNodeId::NONE;
        }

        if let Some(last_node) = self.get_mut(last_child) {
            last_node.next_sibling = child;
        }

        if let Some(parent_node) = self.get_mut(parent) {
            if parent_node.first_child.is_none() {
                parent_node.first_child = child;
            }
            parent_node.last_child = child;
        }
    }

    pub fn insert_before(&mut self, sibling: HtmlNodeId, new_node: HtmlNodeId) {
        let Some((parent, prev)) = self.get(sibling).map(|n| (n.parent, n.prev_sibling)) else {
            return;
        };

        if let Some(new) = self.get_mut(new_node) {
            new.parent = parent;
            new.prev_sibling = prev;
            new.next_sibling = sibling;
        }
        if let Some(sib) = self.get_mut(sibling) {
            sib.prev_sibling = new_node;
        }
        if prev.is_some() {
            if let Some(p) = self.get_mut(prev) {
                p.next_sibling = new_node;
            }
        } else if let Some(par) = self.get_mut(parent) {
            par.first_child = new_node;
        }
    }

    /// Append text, merging with a trailing text child.
    pub fn append_text(&mut self, parent: HtmlNodeId, text: &str) {
        let last_child = self
            .get(parent)
            .map(|n| n.last_child)
            .unwrap_or(HtmlNodeId::NONE);

        if let Some(last) = self.get_mut(last_child)
            && let HtmlNodeData::Text(existing) = &mut last.data
        {
            existing.push_str(text);
            return;
        }

        let text_node = self.create_text(text.to_string());
        self.append(parent, text_node);
    }

    /// Unlink `id` from its parent and siblings.
    pub fn detach(&mut self, id: HtmlNodeId) {
        let Some((parent, prev, next)) = self
            .get(id)
            .map(|n| (n.parent, n.prev_sibling, n.next_sibling))
        else {
            return;
        };

        if prev.is_some() {
            if let Some(p) = self.get_mut(prev) {
                p.next_sibling = next;
            }
        } else if let Some(p) = self.get_mut(parent) {
            p.first_child = next;
        }

        if next.is_some() {
            if let Some(n) = self.get_mut(next) {
                n.prev_sibling = prev;
            }
        } else if let Some(p) = self.get_mut(parent) {
            p.last_child = prev;
        }

        if let Some(node) = self.get_mut(id) {
            node.parent = HtmlNodeId::NONE;
            node.prev_sibling = HtmlNodeId::NONE;
            node.next_sibling = HtmlNodeId::NONE;
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Only the document node exists.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    pub fn children(&self, parent: HtmlNodeId) -> HtmlChildren<'_> {
        let first = self
            .get(parent)
            .map(|n| n.first_child)
            .unwrap_or(HtmlNodeId::NONE);
        HtmlChildren {
            arena: self,
            current: first,
        }
    }

    pub fn next_sibling(&self, id: HtmlNodeId) -> Option<HtmlNodeId> {
        self.get(id)
            .map(|n| n.next_sibling)
            .filter(HtmlNodeId::is_some)
    }

    /// First node in document order matching `predicate`.
    pub fn find<F>(&self, predicate: F) -> Option<HtmlNodeId>
    where
        F: Fn(HtmlNodeId, &HtmlNode) -> bool,
    {
        let mut stack = vec![self.document];
        while let Some(id) = stack.pop() {
            if let Some(node) = self.get(id) {
                if predicate(id, node) {
                    return Some(id);
                }
                let mut children: Vec<_> = self.children(id).collect();
                children.reverse();
                stack.extend(children);
            }
        }
        None
    }

    pub fn find_by_tag(&self, tag: &str) -> Option<HtmlNodeId> {
        self.find(|id, _| self.element_name(id).is_some_and(|name| name.as_ref() == tag))
    }

    /// First `tag` element carrying `class`.
    pub fn find_by_tag_and_class(&self, tag: &str, class: &str) -> Option<HtmlNodeId> {
        self.find(|id, _| {
            self.element_name(id).is_some_and(|name| name.as_ref() == tag)
                && self.has_class(id, class)
        })
    }

    pub fn element_name(&self, id: HtmlNodeId) -> Option<&LocalName> {
        self.get(id).and_then(|n| match &n.data {
            HtmlNodeData::Element { name, .. } => Some(&name.local),
            _ => None,
        })
    }

    pub fn get_attr(&self, id: HtmlNodeId, attr_name: &str) -> Option<&str> {
        self.get(id).and_then(|n| match &n.data {
            HtmlNodeData::Element { attrs, .. } => attrs
                .iter()
                .find(|a| a.name.local.as_ref() == attr_name)
                .map(|a| a.value.as_str()),
            _ => None,
        })
    }

    pub fn element_classes(&self, id: HtmlNodeId) -> &[String] {
        static EMPTY: &[String] = &[];
        self.get(id)
            .and_then(|n| match &n.data {
                HtmlNodeData::Element { classes, .. } => Some(classes.as_slice()),
                _ => None,
            })
            .unwrap_or(EMPTY)
    }

    pub fn has_class(&self, id: HtmlNodeId, class: &str) -> bool {
        self.element_classes(id)
            .iter()
            .any(|c| c.eq_ignore_ascii_case(class))
    }

    pub fn text_content(&self, id: HtmlNodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.data {
            HtmlNodeData::Text(s) => Some(s.as_str()),
            _ => None,
        })
    }

    /// Concatenated text of `id` and its descendants.
    pub fn inner_text(&self, id: HtmlNodeId) -> String {
        let mut text = String::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(content) = self.text_content(current) {
                text.push_str(content);
            }
            let mut children: Vec<_> = self.children(current).collect();
            children.reverse();
            stack.extend(children);
        }
        text
    }
}

impl Default for HtmlArena {
    fn default() -> Self {
        Self::new()
    }
}

pub struct HtmlChildren<'a> {
    arena: &'a HtmlArena,
    current: HtmlNodeId,
}

impl Iterator for HtmlChildren<'_> {
    type Item = HtmlNodeId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_none() {
            return None;
        }
        let id = self.current;
        self.current = self
            .arena
            .get(id)
            .map(|n| n.next_sibling)
            .unwrap_or(HtmlNodeId::NONE);
        Some(id)
    }
}
