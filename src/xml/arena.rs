//! Arena-based element tree for schemaless XML.
//!
//! All nodes are stored in a contiguous vector; parent/child/sibling links
//! use indices into that vector. The tree is read-only after parsing, which
//! keeps classification and rendering free of reference-counted sharing.

/// Unique identifier for a node in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value for no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check if this is a valid node ID.
    pub fn is_some(&self) -> bool {
        self.0 != u32::MAX
    }

    /// Check if this is the sentinel value.
    pub fn is_none(&self) -> bool {
        self.0 == u32::MAX
    }
}

/// An attribute on an element, in document order.
#[derive(Debug, Clone)]
pub struct Attr {
    pub name: String,
    pub value: String,
}

/// Node type in the arena.
#[derive(Debug, Clone)]
pub enum NodeData {
    /// Document root (sentinel; its sole element child is the root element).
    Document,
    /// Element with name and attributes.
    Element { name: String, attrs: Vec<Attr> },
    /// Text content.
    Text(String),
}

/// A node in the element tree.
#[derive(Debug)]
pub struct Node {
    pub data: NodeData,
    pub parent: NodeId,
    pub first_child: NodeId,
    pub last_child: NodeId,
    pub next_sibling: NodeId,
}

impl Node {
    fn new(data: NodeData) -> Self {
        Self {
            data,
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            next_sibling: NodeId::NONE,
        }
    }
}

/// Arena-allocated XML tree.
#[derive(Debug)]
pub struct XmlTree {
    nodes: Vec<Node>,
    document: NodeId,
}

impl XmlTree {
    /// Create a new empty tree with a document root.
    pub fn new() -> Self {
        let mut tree = Self {
            nodes: Vec::new(),
            document: NodeId::NONE,
        };
        tree.document = tree.alloc(NodeData::Document);
        tree
    }

    /// Allocate a new node in the arena.
    pub fn alloc(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::new(data));
        id
    }

    /// Get the document root ID.
    pub fn document(&self) -> NodeId {
        self.document
    }

    /// Get the root element (the document's single element child), if any.
    pub fn root_element(&self) -> Option<NodeId> {
        self.child_elements(self.document).next()
    }

    /// Get a node by ID.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0 as usize)
    }

    /// Append a child to a parent node.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[child.0 as usize].parent = parent;

        let last = self.nodes[parent.0 as usize].last_child;
        if last.is_none() {
            self.nodes[parent.0 as usize].first_child = child;
        } else {
            self.nodes[last.0 as usize].next_sibling = child;
        }
        self.nodes[parent.0 as usize].last_child = child;
    }

    /// Element name, or empty string for non-element nodes.
    pub fn name(&self, id: NodeId) -> &str {
        match self.node(id).map(|n| &n.data) {
            Some(NodeData::Element { name, .. }) => name,
            _ => "",
        }
    }

    /// Element attributes, in document order.
    pub fn attrs(&self, id: NodeId) -> &[Attr] {
        match self.node(id).map(|n| &n.data) {
            Some(NodeData::Element { attrs, .. }) => attrs,
            _ => &[],
        }
    }

    /// Look up an attribute value by exact name.
    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.attrs(id)
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Iterate over the element children of a node, in document order.
    pub fn child_elements(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(id)
            .filter(|&c| matches!(self.node(c).map(|n| &n.data), Some(NodeData::Element { .. })))
    }

    /// Iterate over all children of a node, in document order.
    pub fn children(&self, id: NodeId) -> ChildIter<'_> {
        ChildIter {
            tree: self,
            next: self.node(id).map(|n| n.first_child).unwrap_or(NodeId::NONE),
        }
    }

    /// Whether a node has any element children.
    pub fn has_element_children(&self, id: NodeId) -> bool {
        self.child_elements(id).next().is_some()
    }

    /// Concatenated text of all descendant text nodes, in document order.
    ///
    /// Matches DOM `textContent`: no separators are inserted between
    /// adjacent text runs. Uses an explicit stack, so input nesting depth
    /// cannot overflow the thread stack.
    pub fn deep_text(&self, id: NodeId) -> String {
        let mut result = String::new();
        let mut stack = vec![id];

        while let Some(current) = stack.pop() {
            if let Some(node) = self.node(current) {
                if let NodeData::Text(text) = &node.data {
                    result.push_str(text);
                }
                // Reverse so the first child is processed first.
                let children: Vec<NodeId> = self.children(current).collect();
                for &child in children.iter().rev() {
                    stack.push(child);
                }
            }
        }

        result
    }

    /// First element with the given name, in document order, anywhere in
    /// the tree.
    pub fn find_element(&self, name: &str) -> Option<NodeId> {
        let mut stack = vec![self.document];

        while let Some(current) = stack.pop() {
            if self.name(current) == name {
                return Some(current);
            }
            let children: Vec<NodeId> = self.child_elements(current).collect();
            for &child in children.iter().rev() {
                stack.push(child);
            }
        }

        None
    }
}

impl Default for XmlTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a node's children.
pub struct ChildIter<'a> {
    tree: &'a XmlTree,
    next: NodeId,
}

impl Iterator for ChildIter<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if self.next.is_none() {
            return None;
        }
        let current = self.next;
        self.next = self
            .tree
            .node(current)
            .map(|n| n.next_sibling)
            .unwrap_or(NodeId::NONE);
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(tree: &mut XmlTree, parent: NodeId, name: &str) -> NodeId {
        let id = tree.alloc(NodeData::Element {
            name: name.to_string(),
            attrs: Vec::new(),
        });
        tree.append_child(parent, id);
        id
    }

    fn text(tree: &mut XmlTree, parent: NodeId, content: &str) {
        let id = tree.alloc(NodeData::Text(content.to_string()));
        tree.append_child(parent, id);
    }

    #[test]
    fn test_root_element() {
        let mut tree = XmlTree::new();
        assert!(tree.root_element().is_none());

        let doc = tree.document();
        let root = element(&mut tree, doc, "book");
        assert_eq!(tree.root_element(), Some(root));
        assert_eq!(tree.name(root), "book");
    }

    #[test]
    fn test_children_in_order() {
        let mut tree = XmlTree::new();
        let doc = tree.document();
        let root = element(&mut tree, doc, "root");
        let a = element(&mut tree, root, "a");
        let b = element(&mut tree, root, "b");
        let c = element(&mut tree, root, "c");

        let children: Vec<NodeId> = tree.child_elements(root).collect();
        assert_eq!(children, vec![a, b, c]);
    }

    #[test]
    fn test_attr_lookup() {
        let mut tree = XmlTree::new();
        let doc = tree.document();
        let id = tree.alloc(NodeData::Element {
            name: "chapter".to_string(),
            attrs: vec![Attr {
                name: "title".to_string(),
                value: "Intro".to_string(),
            }],
        });
        tree.append_child(doc, id);

        assert_eq!(tree.attr(id, "title"), Some("Intro"));
        assert_eq!(tree.attr(id, "name"), None);
    }

    #[test]
    fn test_deep_text_concatenation() {
        let mut tree = XmlTree::new();
        let doc = tree.document();
        let root = element(&mut tree, doc, "p");
        text(&mut tree, root, "Hello ");
        let em = element(&mut tree, root, "em");
        text(&mut tree, em, "wor");
        text(&mut tree, root, "ld");

        assert_eq!(tree.deep_text(root), "Hello world");
    }

    #[test]
    fn test_find_element_document_order() {
        let mut tree = XmlTree::new();
        let doc = tree.document();
        let root = element(&mut tree, doc, "root");
        let first = element(&mut tree, root, "section");
        let inner = element(&mut tree, first, "title");
        text(&mut tree, inner, "First");
        let second = element(&mut tree, root, "title");
        text(&mut tree, second, "Second");

        // The nested title comes first in document order.
        assert_eq!(tree.find_element("title"), Some(inner));
        assert!(tree.find_element("missing").is_none());
    }

    #[test]
    fn test_has_element_children() {
        let mut tree = XmlTree::new();
        let doc = tree.document();
        let root = element(&mut tree, doc, "root");
        let leaf = element(&mut tree, root, "leaf");
        text(&mut tree, leaf, "text only");

        assert!(tree.has_element_children(root));
        assert!(!tree.has_element_children(leaf));
    }
}
