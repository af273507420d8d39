//! Arena-backed element tree.
//!
//! Only elements are nodes. The text of an element is the concatenation of
//! its direct text children; comments and processing instructions are not kept.

/// Index of an element inside an [`XmlTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone, PartialEq)]
pub struct ElementNode {
    /// Qualified name as written in the document (`prefix:local` or `local`).
    pub name: String,
    pub attributes: Vec<(String, String)>,
    /// Namespace declarations made on this element (`None` is the default namespace).
    pub namespaces: Vec<(Option<String>, String)>,
    pub text: String,
    pub children: Vec<NodeId>,
    parent: Option<NodeId>,
}

impl ElementNode {
    fn new(name: impl Into<String>, parent: Option<NodeId>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            namespaces: Vec::new(),
            text: String::new(),
            children: Vec::new(),
            parent,
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// A mutable element tree with a single root element.
///
/// Removed elements are detached from their parent but stay in the arena, so
/// a `NodeId` never dangles. Everything reachable from the root is live.
#[derive(Debug, Clone)]
pub struct XmlTree {
    nodes: Vec<ElementNode>,
}

impl XmlTree {
    pub fn new(root_name: impl Into<String>) -> Self {
        Self {
            nodes: vec![ElementNode::new(root_name, None)],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn element(&self, id: NodeId) -> &ElementNode {
        &self.nodes[id.0]
    }

    pub fn element_mut(&mut self, id: NodeId) -> &mut ElementNode {
        &mut self.nodes[id.0]
    }

    /// Appends a new element as the last child of `parent`.
    pub fn append_child(&mut self, parent: NodeId, name: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(ElementNode::new(name, Some(parent)));
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Detaches `id` from its parent. Returns `false` for the root.
    pub fn detach(&mut self, id: NodeId) -> bool {
        let Some(parent) = self.nodes[id.0].parent.take() else {
            return false;
        };
        self.nodes[parent.0].children.retain(|child| *child != id);
        true
    }

    /// Sets an attribute, replacing the value in place if it already exists.
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: impl Into<String>) {
        let value = value.into();
        let attributes = &mut self.nodes[id.0].attributes;
        match attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value,
            None => attributes.push((name.to_string(), value)),
        }
    }

    /// Iterates over every element reachable from the root, in document order.
    pub fn descendants(&self) -> impl Iterator<Item = NodeId> + '_ {
        let mut stack = vec![self.root()];
        std::iter::from_fn(move || {
            let id = stack.pop()?;
            stack.extend(self.nodes[id.0].children.iter().rev().copied());
            Some(id)
        })
    }
}

/// Returns `true` for a well-formed XML name, optionally carrying one
/// `prefix:` part.
pub fn is_xml_name(name: &str) -> bool {
    let mut parts = name.split(':');
    let valid = |part: Option<&str>| part.is_some_and(is_ncname);
    match (parts.next(), parts.next(), parts.next()) {
        (local, None, None) => valid(local),
        (prefix, local @ Some(_), None) => valid(prefix) && valid(local),
        _ => false,
    }
}

fn is_ncname(part: &str) -> bool {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
}
