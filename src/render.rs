use crate::tree::Node;

const INDENT: &str = "  ";
const MARKER: &str = "--";

/// Renders the tree as a newline-terminated listing, one line per node.
///
/// Purely a function of the tree; the filesystem is never consulted.
pub fn render(node: &Node) -> String {
    let mut out = String::new();

    for line in lines(node) {
        out.push_str(&line);
        out.push('\n');
    }

    out
}

/// Produces one line per node, pre-order, children in sequence order.
///
/// The prefix for depth `d` is the indent block repeated `d` times followed
/// by the marker block repeated `d` times: `root`, `  --child`,
/// `    ----grandchild`.
pub fn lines(node: &Node) -> Vec<String> {
    let mut lines = Vec::new();

    collect(node, 0, &mut lines);

    lines
}

fn collect(node: &Node, depth: usize, lines: &mut Vec<String>) {
    lines.push(format!(
        "{}{}{}",
        INDENT.repeat(depth),
        MARKER.repeat(depth),
        node.name()
    ));

    if let Node::Directory { children, .. } = node {
        for child in children {
            collect(child, depth + 1, lines);
        }
    }
}
