//! Inline node sequences to output spans.
//!
//! [`SpanConverter`] handles body text and list items. Images met on the way
//! are not spans; they are lifted into a side channel of blocks the caller
//! places after the paragraph or list. [`to_caption_spans`] is the narrow
//! variant used for image captions.

use crate::asset::{merge_spans, Block, Span};
use crate::common::flatten::{consume_literal, flatten, FlattenMode};
use crate::common::restructure::tags;
use crate::error::ConversionError;
use crate::ir::nodes::{Node, Target};

/// Text formatting in effect while descending into emphasis wrappers.
///
/// A fixed two-level lattice: nesting strong and emphasis in either order
/// gives [`Formatting::StrongEmphasized`], and nothing goes beyond it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Formatting {
    #[default]
    Regular,
    Strong,
    Emphasized,
    StrongEmphasized,
}

impl Formatting {
    pub fn with_strong(self) -> Self {
        match self {
            Formatting::Regular | Formatting::Strong => Formatting::Strong,
            Formatting::Emphasized | Formatting::StrongEmphasized => Formatting::StrongEmphasized,
        }
    }

    pub fn with_emphasis(self) -> Self {
        match self {
            Formatting::Regular | Formatting::Emphasized => Formatting::Emphasized,
            Formatting::Strong | Formatting::StrongEmphasized => Formatting::StrongEmphasized,
        }
    }

    /// A text span of this formatting.
    pub fn span(self, text: impl Into<String>) -> Span {
        match self {
            Formatting::Regular => Span::regular(text),
            Formatting::Strong => Span::strong(text),
            Formatting::Emphasized => Span::emphasized(text),
            Formatting::StrongEmphasized => Span::strong_emphasized(text),
        }
    }
}

/// Converts inline sequences to merged spans, collecting lifted images.
#[derive(Debug, Default)]
pub struct SpanConverter {
    images: Vec<Block>,
}

impl SpanConverter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Converts `nodes` in regular formatting.
    pub fn to_spans(&mut self, nodes: &[Node]) -> Result<Vec<Span>, ConversionError> {
        self.convert(nodes, Formatting::Regular, 0)
    }

    /// Image blocks lifted so far, in document order.
    pub fn into_images(self) -> Vec<Block> {
        self.images
    }

    fn convert(
        &mut self,
        nodes: &[Node],
        formatting: Formatting,
        depth: usize,
    ) -> Result<Vec<Span>, ConversionError> {
        let mut spans = Vec::with_capacity(nodes.len());
        for node in nodes {
            self.convert_node(node, formatting, depth, &mut spans)?;
        }
        Ok(merge_spans(spans))
    }

    fn convert_node(
        &mut self,
        node: &Node,
        formatting: Formatting,
        depth: usize,
        spans: &mut Vec<Span>,
    ) -> Result<(), ConversionError> {
        let inner = depth + 1;
        match node {
            Node::Str(text) => spans.push(formatting.span(text.as_str())),
            Node::Space => spans.push(formatting.span(" ")),
            Node::SoftBreak | Node::LineBreak => spans.push(formatting.span("\n")),
            Node::SingleQuote => spans.push(formatting.span("'")),
            Node::DoubleQuote => spans.push(formatting.span("\"")),
            Node::Quoted { delimiter, content } => {
                spans.extend(self.convert(delimiter, formatting, inner)?);
                spans.extend(self.convert(content, formatting, inner)?);
                spans.extend(self.convert(delimiter, formatting, inner)?);
            }
            Node::Para(children) | Node::Plain(children) => {
                spans.push(Span::container(self.convert(children, formatting, inner)?))
            }
            Node::Code(code) => spans.push(Span::listing(code.as_str())),
            Node::Emph(children) => {
                spans.extend(self.convert(children, formatting.with_emphasis(), inner)?)
            }
            Node::Strong(children) => {
                spans.extend(self.convert(children, formatting.with_strong(), inner)?)
            }
            Node::Strikeout(children) => spans.extend(self.convert(children, formatting, inner)?),
            Node::Link { content, target } => spans.push(Span::link(
                consume_literal(content)?,
                target.url.as_str(),
            )),
            Node::Image { content, target } => self.images.push(image_block(content, target)),
            Node::Extension { tag, content } => {
                spans.extend(self.convert_extension(tag, content, formatting, inner)?)
            }
            Node::RawInline { .. } | Node::RawBlock { .. } => {}
            other => return Err(ConversionError::unrecognized(other, depth)),
        }
        Ok(())
    }

    fn convert_extension(
        &mut self,
        tag: &str,
        content: &[Node],
        formatting: Formatting,
        depth: usize,
    ) -> Result<Vec<Span>, ConversionError> {
        let span = match tag {
            tags::PATH => Span::Path {
                path: flatten(content, FlattenMode::Markup),
            },
            tags::PROGRAM => Span::Program {
                program: flatten(content, FlattenMode::Markup),
            },
            tags::ABBREVIATION => abbreviation(content),
            tags::CT_LINK => Span::CtLink,
            _ => return self.convert(content, formatting, depth),
        };
        Ok(vec![span])
    }
}

fn abbreviation(content: &[Node]) -> Span {
    let long_form = content.iter().position(|node| {
        matches!(node, Node::Extension { tag, .. } if tag == tags::ABBREVIATION_LONG)
    });
    let mut short = content.to_vec();
    let long = match long_form.map(|index| short.remove(index)) {
        Some(Node::Extension { content, .. }) => flatten(&content, FlattenMode::Markup),
        _ => String::new(),
    };
    Span::Abbreviation {
        short: flatten(&short, FlattenMode::Markup),
        long,
    }
}

/// The block an inline image is lifted into.
///
/// Pandoc marks figure images with a `fig:` title prefix; it is not part of
/// the alternative text.
pub fn image_block(content: &[Node], target: &Target) -> Block {
    let alt = target.title.strip_prefix("fig:").unwrap_or(&target.title);
    Block::Image {
        uri: target.url.clone(),
        caption: to_caption_spans(content),
        alt: alt.to_string(),
    }
}

/// Converts an image caption. Only regular, strong and emphasized text
/// spans and links come out of it; anything else is read as text or skipped.
pub fn to_caption_spans(nodes: &[Node]) -> Vec<Span> {
    let mut spans = Vec::new();
    caption_into(nodes, Formatting::Regular, &mut spans);
    merge_spans(spans)
}

fn caption_into(nodes: &[Node], formatting: Formatting, spans: &mut Vec<Span>) {
    for node in nodes {
        match node {
            // the innermost mark decides
            Node::Strong(children) => caption_into(children, Formatting::Strong, spans),
            Node::Emph(children) => caption_into(children, Formatting::Emphasized, spans),
            Node::Link { content, target } => spans.push(Span::link(
                flatten(content, FlattenMode::Plain),
                target.url.as_str(),
            )),
            Node::Image { .. } => {}
            Node::Strikeout(children)
            | Node::Plain(children)
            | Node::Para(children)
            | Node::Extension {
                content: children, ..
            } => caption_into(children, formatting, spans),
            other => {
                let text = flatten(std::slice::from_ref(other), FlattenMode::Plain);
                if !text.is_empty() {
                    spans.push(formatting.span(text));
                }
            }
        }
    }
}
