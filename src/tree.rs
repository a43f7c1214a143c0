/// A node in the skeleton tree: either a file holding opaque content or a
/// directory owning an ordered sequence of children.
///
/// The two walks ([`crate::render`] and [`crate::materialize`]) dispatch by
/// matching on the variant, so classification is total — there is no third,
/// unclassifiable shape to fall through on.
#[derive(Debug, Clone)]
pub enum Node {
    File { name: String, content: String },
    Directory { name: String, children: Vec<Node> },
}

/// The derived kind of a [`Node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Directory,
}

impl Node {
    pub fn file(name: &str, content: &str) -> Self {
        Node::File {
            name: name.to_string(),
            content: content.to_string(),
        }
    }

    pub fn dir(name: &str, children: Vec<Node>) -> Self {
        Node::Directory {
            name: name.to_string(),
            children,
        }
    }

    /// The node's label. Must be unique among siblings to form a valid path.
    pub fn name(&self) -> &str {
        match self {
            Node::File { name, .. } => name,
            Node::Directory { name, .. } => name,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::File { .. } => NodeKind::File,
            Node::Directory { .. } => NodeKind::Directory,
        }
    }
}
