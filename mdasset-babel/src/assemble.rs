//! Block assembly and metadata capture.
//!
//! The [`Assembler`] walks top-level nodes in document order and turns each
//! into zero or more output blocks. Metadata blocks drive a small state
//! machine on top of that:
//!
//!     - A metadata block with a capture sentinel opens a record whose
//!       capturing field collects every following block.
//!     - A later metadata block without `type` continues the same record. Its
//!       keys are added, the capture it was in ends, and unless it opens a new
//!       capture the record is complete.
//!     - A metadata block with `type` arriving while a record captures starts
//!       a nested record. Once complete it lands in the enclosing capture.
//!     - An empty metadata block (`<!----->`) completes the innermost record.
//!
//! Completed records are appended wherever ordinary blocks would go at that
//! moment, so records nest as deep as the document needs.

use crate::asset::{Block, FieldValue, Record, Span};
use crate::common::flatten::{flatten, FlattenMode};
use crate::common::metadata::{self, Entry};
use crate::common::spans::SpanConverter;
use crate::error::ConversionError;
use crate::ir::nodes::Node;
use tracing::{debug, trace};

/// Assembles a restructured top-level node sequence into blocks.
pub fn assemble(nodes: &[Node]) -> Result<Vec<Block>, ConversionError> {
    let mut assembler = Assembler::new();
    for node in nodes {
        assembler.push(node)?;
    }
    Ok(assembler.finish())
}

/// A record under construction. Frames on the stack always capture.
#[derive(Debug, Default)]
struct Frame {
    record: Record,
    capturing: Option<String>,
}

/// Block loop state: the finished top-level blocks and the open records.
#[derive(Debug, Default)]
pub struct Assembler {
    output: Vec<Block>,
    frames: Vec<Frame>,
}

impl Assembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently capturing.
    pub fn open_records(&self) -> usize {
        self.frames.len()
    }

    /// Handles one top-level node.
    pub fn push(&mut self, node: &Node) -> Result<(), ConversionError> {
        trace!(kind = node.kind(), depth = self.frames.len(), "assembling block");
        match node {
            Node::Para(children) | Node::Plain(children) => {
                let mut converter = SpanConverter::new();
                let spans = converter.to_spans(children)?;
                if !spans.is_empty() {
                    self.emit(Block::Paragraph { spans });
                }
                for image in converter.into_images() {
                    self.emit(image);
                }
            }
            Node::Header { level, content } => self.emit(Block::Heading {
                level: *level,
                text: flatten(content, FlattenMode::Plain),
            }),
            Node::BlockQuote(children) => self.emit(Block::Citation {
                statement: flatten(children, FlattenMode::Plain),
                attribution: String::new(),
            }),
            Node::OrderedList(items) => {
                let (items, images) = list_items(items)?;
                self.emit(Block::OrderedList { items });
                images.into_iter().for_each(|image| self.emit(image));
            }
            Node::BulletList(items) => {
                let (items, images) = list_items(items)?;
                self.emit(Block::UnorderedList { items });
                images.into_iter().for_each(|image| self.emit(image));
            }
            Node::CodeBlock { language, code } => self.emit(Block::Listing {
                language: language.clone().unwrap_or_default(),
                code: code.clone(),
            }),
            Node::RawBlock { text, .. } => match metadata::payload(text) {
                Some(payload) => match metadata::parse_entries(payload) {
                    Ok(entries) => self.apply_metadata(entries),
                    Err(err) => debug!(%err, "ignoring malformed metadata block"),
                },
                None => trace!("ignoring raw block"),
            },
            other => trace!(kind = other.kind(), "ignoring block"),
        }
        Ok(())
    }

    /// Completes the records still open, innermost first, and returns the
    /// top-level blocks.
    pub fn finish(mut self) -> Vec<Block> {
        while let Some(frame) = self.frames.pop() {
            debug!(
                capturing = frame.capturing.as_deref().unwrap_or_default(),
                "completing record left open at end of input"
            );
            self.emit(Block::Record(frame.record));
        }
        self.output
    }

    fn apply_metadata(&mut self, entries: Vec<Entry>) {
        if entries.is_empty() {
            match self.frames.pop() {
                Some(frame) => self.emit(Block::Record(frame.record)),
                None => trace!("empty metadata block with no open record"),
            }
            return;
        }

        let typed = entries.iter().any(|entry| entry.key() == "type");
        let mut frame = match self.frames.pop() {
            Some(parent) if typed => {
                self.frames.push(parent);
                Frame::default()
            }
            Some(mut top) => {
                top.capturing = None;
                top
            }
            None => Frame::default(),
        };

        for entry in entries {
            match entry {
                Entry::Capture { key } => {
                    frame.record.insert(key.clone(), FieldValue::Blocks(Vec::new()));
                    frame.capturing = Some(key);
                }
                Entry::Field { key, value } => frame.record.insert(key, value),
            }
        }

        if frame.capturing.is_some() {
            self.frames.push(frame);
        } else {
            self.emit(Block::Record(frame.record));
        }
    }

    /// Appends to the capturing field of the innermost record, or to the
    /// top-level output when no record is open.
    fn emit(&mut self, block: Block) {
        let target = self.frames.last_mut().and_then(|frame| {
            let key = frame.capturing.as_deref()?;
            frame.record.get_mut(key)
        });
        match target {
            Some(FieldValue::Blocks(blocks)) => blocks.push(block),
            _ => self.output.push(block),
        }
    }
}

/// One container span per item: the first block, then the remaining blocks
/// in a line-break container. Lifted images are returned separately.
fn list_items(items: &[Vec<Node>]) -> Result<(Vec<Span>, Vec<Block>), ConversionError> {
    let mut converter = SpanConverter::new();
    let mut spans = Vec::with_capacity(items.len());
    for item in items {
        let (first, rest) = item.split_at(item.len().min(1));
        let mut item_spans = converter.to_spans(first)?;
        if !rest.is_empty() {
            item_spans.push(Span::LineBreakContainer {
                spans: converter.to_spans(rest)?,
            });
        }
        spans.push(Span::container(item_spans));
    }
    Ok((spans, converter.into_images()))
}
