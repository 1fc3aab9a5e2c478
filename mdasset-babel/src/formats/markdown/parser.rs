//! Markdown parsing
//!
//! Pipeline: Markdown string → Comrak AST → generic nodes

use super::MarkdownOptions;
use crate::error::FormatError;
use crate::ir::nodes::{Node, Target};
use comrak::nodes::{AstNode, ListType, NodeValue};
use comrak::{parse_document, Arena, ComrakOptions};

/// Parse a Markdown string into top-level nodes
pub fn parse_markdown(source: &str, options: &MarkdownOptions) -> Result<Vec<Node>, FormatError> {
    let arena = Arena::new();
    let root = parse_document(&arena, source, &comrak_options(options));
    Ok(blocks(root))
}

fn comrak_options(options: &MarkdownOptions) -> ComrakOptions<'static> {
    let mut comrak = ComrakOptions::default();
    comrak.extension.strikethrough = options.strikethrough;
    comrak.extension.autolink = options.autolink;
    comrak.extension.table = options.table;
    comrak
}

fn blocks<'a>(parent: &'a AstNode<'a>) -> Vec<Node> {
    parent.children().map(block).collect()
}

fn inlines<'a>(parent: &'a AstNode<'a>) -> Vec<Node> {
    parent.children().map(inline).collect()
}

fn block<'a>(node: &'a AstNode<'a>) -> Node {
    match &node.data.borrow().value {
        NodeValue::Paragraph => Node::Para(inlines(node)),

        NodeValue::Heading(heading) => Node::Header {
            level: heading.level as usize,
            content: inlines(node),
        },

        NodeValue::BlockQuote => Node::BlockQuote(blocks(node)),

        NodeValue::List(list) => {
            let items = node.children().map(blocks).collect();
            match list.list_type {
                ListType::Ordered => Node::OrderedList(items),
                ListType::Bullet => Node::BulletList(items),
            }
        }

        NodeValue::CodeBlock(code_block) => {
            let language = code_block
                .info
                .split_whitespace()
                .next()
                .map(str::to_string);
            let code = code_block
                .literal
                .strip_suffix('\n')
                .unwrap_or(&code_block.literal);
            Node::CodeBlock {
                language,
                code: code.to_string(),
            }
        }

        NodeValue::HtmlBlock(html) => Node::RawBlock {
            format: "html".to_string(),
            text: html.literal.trim().to_string(),
        },

        other => Node::Other {
            kind: kind_name(other),
        },
    }
}

fn inline<'a>(node: &'a AstNode<'a>) -> Node {
    match &node.data.borrow().value {
        NodeValue::Text(text) => Node::Str(text.clone()),
        NodeValue::SoftBreak => Node::SoftBreak,
        NodeValue::LineBreak => Node::LineBreak,
        NodeValue::Emph => Node::Emph(inlines(node)),
        NodeValue::Strong => Node::Strong(inlines(node)),
        NodeValue::Strikethrough => Node::Strikeout(inlines(node)),
        NodeValue::Code(code) => Node::Code(code.literal.clone()),
        NodeValue::Link(link) => Node::Link {
            content: inlines(node),
            target: Target::new(link.url.as_str(), link.title.as_str()),
        },
        NodeValue::Image(link) => Node::Image {
            content: inlines(node),
            target: Target::new(link.url.as_str(), link.title.as_str()),
        },
        NodeValue::HtmlInline(html) => Node::raw_html(html.as_str()),
        other => Node::Other {
            kind: kind_name(other),
        },
    }
}

/// Variant name of a comrak node, for diagnostics.
fn kind_name(value: &NodeValue) -> String {
    let debug = format!("{value:?}");
    debug
        .split(|c: char| !c.is_alphanumeric())
        .next()
        .unwrap_or_default()
        .to_string()
}
