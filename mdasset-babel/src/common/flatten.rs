//! Reduces inline node sequences to plain text.
//!
//! Two entry points with different tolerance:
//!
//!     - [`flatten`] never fails. Kinds it has no text for contribute nothing.
//!     - [`consume_literal`] accepts only text-like kinds and wrappers around
//!       them, and fails on anything else. Use it where dropping content would
//!       silently corrupt a structured field (link text).

use crate::error::ConversionError;
use crate::ir::nodes::Node;

/// How formatting wrappers are rendered by [`flatten`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlattenMode {
    /// Inner text only.
    Plain,
    /// Inner text re-wrapped in the mark's literal delimiter (`*`, `**`, `~~`).
    Markup,
}

/// Concatenates the literal text of `nodes`.
pub fn flatten(nodes: &[Node], mode: FlattenMode) -> String {
    let mut text = String::new();
    flatten_into(nodes, mode, &mut text);
    text
}

fn flatten_into(nodes: &[Node], mode: FlattenMode, out: &mut String) {
    for node in nodes {
        match node {
            Node::Str(text) | Node::Code(text) => out.push_str(text),
            Node::Space | Node::SoftBreak => out.push(' '),
            Node::LineBreak => out.push('\n'),
            Node::SingleQuote => out.push('\''),
            Node::DoubleQuote => out.push('"'),
            Node::Quoted { delimiter, content } => {
                flatten_into(delimiter, mode, out);
                flatten_into(content, mode, out);
                flatten_into(delimiter, mode, out);
            }
            Node::Link { content, .. } => flatten_into(content, mode, out),
            Node::Emph(children) => wrap_into(children, "*", mode, out),
            Node::Strong(children) => wrap_into(children, "**", mode, out),
            Node::Strikeout(children) => wrap_into(children, "~~", mode, out),
            Node::Para(children) => {
                flatten_into(children, mode, out);
                out.push('\n');
            }
            Node::Plain(children) | Node::Extension { content: children, .. } => {
                flatten_into(children, mode, out)
            }
            _ => {}
        }
    }
}

fn wrap_into(children: &[Node], mark: &str, mode: FlattenMode, out: &mut String) {
    match mode {
        FlattenMode::Plain => flatten_into(children, mode, out),
        FlattenMode::Markup => {
            out.push_str(mark);
            flatten_into(children, mode, out);
            out.push_str(mark);
        }
    }
}

/// Like [`flatten`] in plain mode, but strict about node kinds.
///
/// Soft breaks become newlines here, as they do in inline spans.
pub fn consume_literal(nodes: &[Node]) -> Result<String, ConversionError> {
    let mut text = String::new();
    consume_into(nodes, 0, &mut text)?;
    Ok(text)
}

fn consume_into(nodes: &[Node], depth: usize, out: &mut String) -> Result<(), ConversionError> {
    for node in nodes {
        match node {
            Node::Str(text) => out.push_str(text),
            Node::Space => out.push(' '),
            Node::SoftBreak | Node::LineBreak => out.push('\n'),
            Node::SingleQuote => out.push('\''),
            Node::DoubleQuote => out.push('"'),
            Node::Quoted { delimiter, content } => {
                consume_into(delimiter, depth + 1, out)?;
                consume_into(content, depth + 1, out)?;
                consume_into(delimiter, depth + 1, out)?;
            }
            Node::Emph(children)
            | Node::Strong(children)
            | Node::Strikeout(children)
            | Node::Para(children)
            | Node::Plain(children)
            | Node::Extension {
                content: children, ..
            } => consume_into(children, depth + 1, out)?,
            other => return Err(ConversionError::unrecognized(other, depth)),
        }
    }
    Ok(())
}
