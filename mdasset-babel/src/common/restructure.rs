//! Nests raw extension markers into [`Node::Extension`] subtrees.
//!
//! Parsers hand custom inline syntax over as flat siblings: an opening raw
//! tag, the content, a closing raw tag. This pass pairs them up with an
//! explicit stack, the same way a flat event stream is rebuilt into a tree.
//!
//! Pairing is local to one node sequence. A tag opened inside a list item can
//! only be closed inside that same item; whatever is still open when a
//! sequence ends is dropped and its content kept in place.

use crate::ir::nodes::Node;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Extension tags with a dedicated span kind.
pub mod tags {
    /// Wraps a file system path.
    pub const PATH: &str = "fs-path";
    /// Wraps a program name.
    pub const PROGRAM: &str = "program";
    /// Wraps an abbreviation. The long form sits in a nested [`ABBREVIATION_LONG`].
    pub const ABBREVIATION: &str = "abbr";
    pub const ABBREVIATION_LONG: &str = "abbr-long";
    /// Self-closing cross-reference link.
    pub const CT_LINK: &str = "ctlink";
}

static MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^<\s*(?P<close>/)?\s*(?P<name>[A-Za-z][A-Za-z0-9_-]*)\s*(?P<empty>/)?\s*>$")
        .expect("marker pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq)]
enum Marker {
    Open(String),
    Close(String),
    SelfClosing(String),
}

/// Classifies a raw HTML run that consists of exactly one tag.
fn marker(node: &Node) -> Option<Marker> {
    let (format, text) = match node {
        Node::RawInline { format, text } | Node::RawBlock { format, text } => (format, text),
        _ => return None,
    };
    if !format.to_ascii_lowercase().starts_with("html") {
        return None;
    }
    let captures = MARKER.captures(text.trim())?;
    let name = captures["name"].to_string();
    match (captures.name("close"), captures.name("empty")) {
        (None, None) => Some(Marker::Open(name)),
        (Some(_), None) => Some(Marker::Close(name)),
        (None, Some(_)) => Some(Marker::SelfClosing(name)),
        (Some(_), Some(_)) => None,
    }
}

struct OpenTag {
    tag: String,
    content: Vec<Node>,
}

/// Rewrites `nodes` so that every matched marker pair becomes one
/// [`Node::Extension`] holding the nodes between them. Never fails.
pub fn restructure(nodes: Vec<Node>) -> Vec<Node> {
    let mut output = Vec::with_capacity(nodes.len());
    let mut stack: Vec<OpenTag> = Vec::new();

    for node in nodes {
        match marker(&node) {
            Some(Marker::SelfClosing(tag)) => place(
                &mut stack,
                &mut output,
                Node::Extension {
                    tag,
                    content: Vec::new(),
                },
            ),
            Some(Marker::Open(tag)) => stack.push(OpenTag {
                tag,
                content: Vec::new(),
            }),
            Some(Marker::Close(tag)) => match stack.iter().rposition(|open| open.tag == tag) {
                Some(index) => {
                    let closed = stack.split_off(index);
                    for dangling in &closed[1..] {
                        debug!(tag = %dangling.tag, closed_by = %tag, "dropping unclosed extension tag");
                    }
                    let content = closed.into_iter().flat_map(|open| open.content).collect();
                    place(&mut stack, &mut output, Node::Extension { tag, content });
                }
                None => debug!(%tag, "dropping unmatched closing extension tag"),
            },
            None => place(&mut stack, &mut output, descend(node)),
        }
    }

    for dangling in stack {
        debug!(tag = %dangling.tag, "dropping extension tag still open at end of sequence");
        output.extend(dangling.content);
    }
    output
}

fn place(stack: &mut [OpenTag], output: &mut Vec<Node>, node: Node) {
    match stack.last_mut() {
        Some(open) => open.content.push(node),
        None => output.push(node),
    }
}

/// Restructures the child sequences of `node`.
fn descend(node: Node) -> Node {
    match node {
        Node::Para(children) => Node::Para(restructure(children)),
        Node::Plain(children) => Node::Plain(restructure(children)),
        Node::BlockQuote(children) => Node::BlockQuote(restructure(children)),
        Node::Emph(children) => Node::Emph(restructure(children)),
        Node::Strong(children) => Node::Strong(restructure(children)),
        Node::Strikeout(children) => Node::Strikeout(restructure(children)),
        Node::Header { level, content } => Node::Header {
            level,
            content: restructure(content),
        },
        Node::Quoted { delimiter, content } => Node::Quoted {
            delimiter,
            content: restructure(content),
        },
        Node::Link { content, target } => Node::Link {
            content: restructure(content),
            target,
        },
        Node::Image { content, target } => Node::Image {
            content: restructure(content),
            target,
        },
        Node::OrderedList(items) => Node::OrderedList(items.into_iter().map(restructure).collect()),
        Node::BulletList(items) => Node::BulletList(items.into_iter().map(restructure).collect()),
        other => other,
    }
}
