//! Pandoc JSON parsing
//!
//! Every Pandoc element is an object `{"t": kind, "c": content}`; the shape
//! of `c` depends on the kind. Kinds without a node counterpart are kept as
//! [`Node::Other`] so the engine can report them by name.

use crate::error::FormatError;
use crate::ir::nodes::{Node, Target};
use serde_json::Value;

static NULL: Value = Value::Null;

/// Parse Pandoc JSON into top-level nodes
pub fn parse_pandoc_json(source: &str) -> Result<Vec<Node>, FormatError> {
    let document: Value = serde_json::from_str(source)
        .map_err(|err| FormatError::ParseError(format!("Invalid Pandoc JSON: {err}")))?;
    let blocks = match &document {
        Value::Array(_) => &document,
        Value::Object(fields) => fields
            .get("blocks")
            .ok_or_else(|| malformed("document object has no `blocks`"))?,
        other => return Err(malformed(format!("expected a document, found {other}"))),
    };
    nodes(blocks)
}

fn malformed(message: impl std::fmt::Display) -> FormatError {
    FormatError::ParseError(format!("Malformed Pandoc JSON: {message}"))
}

fn nodes(value: &Value) -> Result<Vec<Node>, FormatError> {
    array(value, "node list")?.iter().map(node).collect()
}

fn node(value: &Value) -> Result<Node, FormatError> {
    let kind = value
        .get("t")
        .and_then(Value::as_str)
        .ok_or_else(|| malformed(format!("expected an element, found {value}")))?;
    let content = value.get("c").unwrap_or(&NULL);
    let part = |index: usize| element(content, index, kind);

    let node = match kind {
        "Str" => Node::Str(string(content, kind)?.to_string()),
        "Space" => Node::Space,
        "SoftBreak" => Node::SoftBreak,
        "LineBreak" => Node::LineBreak,
        "Emph" => Node::Emph(nodes(content)?),
        "Strong" => Node::Strong(nodes(content)?),
        "Strikeout" => Node::Strikeout(nodes(content)?),
        "Quoted" => Node::Quoted {
            delimiter: quote_delimiter(part(0)?)?,
            content: nodes(part(1)?)?,
        },
        "Code" => Node::Code(string(part(1)?, kind)?.to_string()),
        "Link" => Node::Link {
            content: nodes(part(1)?)?,
            target: target(part(2)?)?,
        },
        "Image" => Node::Image {
            content: nodes(part(1)?)?,
            target: target(part(2)?)?,
        },
        "RawInline" => Node::RawInline {
            format: raw_format(part(0)?)?,
            text: string(part(1)?, kind)?.to_string(),
        },
        "Plain" => Node::Plain(nodes(content)?),
        "Para" => Node::Para(nodes(content)?),
        "Header" => Node::Header {
            level: part(0)?
                .as_u64()
                .ok_or_else(|| malformed("header level is not a number"))? as usize,
            content: nodes(part(2)?)?,
        },
        "BlockQuote" => Node::BlockQuote(nodes(content)?),
        "OrderedList" => Node::OrderedList(list_items(part(1)?)?),
        "BulletList" => Node::BulletList(list_items(content)?),
        "CodeBlock" => Node::CodeBlock {
            language: first_class(part(0)?),
            code: string(part(1)?, kind)?.to_string(),
        },
        "RawBlock" => Node::RawBlock {
            format: raw_format(part(0)?)?,
            text: string(part(1)?, kind)?.to_string(),
        },
        other => Node::Other {
            kind: other.to_string(),
        },
    };
    Ok(node)
}

fn array<'v>(value: &'v Value, what: &str) -> Result<&'v [Value], FormatError> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| malformed(format!("expected {what} to be an array, found {value}")))
}

fn string<'v>(value: &'v Value, kind: &str) -> Result<&'v str, FormatError> {
    value
        .as_str()
        .ok_or_else(|| malformed(format!("expected text in {kind}, found {value}")))
}

fn element<'v>(content: &'v Value, index: usize, kind: &str) -> Result<&'v Value, FormatError> {
    array(content, kind)?
        .get(index)
        .ok_or_else(|| malformed(format!("{kind} has no content at position {index}")))
}

fn list_items(value: &Value) -> Result<Vec<Vec<Node>>, FormatError> {
    array(value, "list items")?.iter().map(nodes).collect()
}

/// `[url, title]`
fn target(value: &Value) -> Result<Target, FormatError> {
    let url = string(element(value, 0, "target")?, "target")?;
    let title = string(element(value, 1, "target")?, "target")?;
    Ok(Target::new(url, title))
}

/// A `QuoteType` element, or the quote character itself.
fn quote_delimiter(value: &Value) -> Result<Vec<Node>, FormatError> {
    if let Some(text) = value.as_str() {
        return Ok(vec![Node::str(text)]);
    }
    match value.get("t").and_then(Value::as_str) {
        Some("SingleQuote") => Ok(vec![Node::SingleQuote]),
        Some("DoubleQuote") => Ok(vec![Node::DoubleQuote]),
        _ => Err(malformed(format!("unknown quote type {value}"))),
    }
}

/// Raw formats are plain strings, or `{"t": "Format", "c": name}` in old
/// Pandoc versions.
fn raw_format(value: &Value) -> Result<String, FormatError> {
    value
        .as_str()
        .or_else(|| value.get("c").and_then(Value::as_str))
        .map(str::to_string)
        .ok_or_else(|| malformed(format!("unknown raw format {value}")))
}

/// Language of a code block: the first class of its `[id, classes, attributes]`.
fn first_class(attr: &Value) -> Option<String> {
    attr.get(1)?
        .as_array()?
        .first()?
        .as_str()
        .map(str::to_string)
}
