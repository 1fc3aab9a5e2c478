//! The content-asset model produced by the engine.
//!
//! Every `type` literal and field name here is part of the wire contract with
//! the publishing system and must not change.

pub mod block;
pub mod span;

pub use block::{Block, FieldValue, Record};
pub use span::{merge_spans, Span};

use serde::Serialize;

/// The document envelope: `{"type": "conversion-container", "blocks": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "type", rename = "conversion-container")]
pub struct Conversion {
    pub blocks: Vec<Block>,
}

impl Conversion {
    pub fn new(blocks: Vec<Block>) -> Self {
        Conversion { blocks }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
