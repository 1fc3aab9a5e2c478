//! Blocks and metadata records of the content model.

use crate::asset::span::Span;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::collections::BTreeMap;

/// A top-level, list-item or captured-field unit of the content model.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph {
        spans: Vec<Span>,
    },
    /// Level 1 serializes as `block-heading`, every further level adds a
    /// `sub` qualifier.
    Heading {
        level: usize,
        text: String,
    },
    Citation {
        statement: String,
        attribution: String,
    },
    OrderedList {
        items: Vec<Span>,
    },
    UnorderedList {
        items: Vec<Span>,
    },
    Listing {
        language: String,
        code: String,
    },
    Image {
        uri: String,
        caption: Vec<Span>,
        alt: String,
    },
    Record(Record),
}

impl Block {
    /// The `type` value of this block, if it has one.
    ///
    /// Records answer with their own `type` field, which may be absent.
    pub fn type_name(&self) -> Option<String> {
        let name = match self {
            Block::Paragraph { .. } => "block-paragraph".to_string(),
            Block::Heading { level, .. } => heading_type(*level),
            Block::Citation { .. } => "block-citation".to_string(),
            Block::OrderedList { .. } => "block-ordered-list".to_string(),
            Block::UnorderedList { .. } => "block-unordered-list".to_string(),
            Block::Listing { .. } => "block-listing".to_string(),
            Block::Image { .. } => "block-image".to_string(),
            Block::Record(record) => return record.record_type().map(str::to_string),
        };
        Some(name)
    }
}

fn heading_type(level: usize) -> String {
    format!("block-{}heading", "sub".repeat(level.saturating_sub(1)))
}

impl Serialize for Block {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        match self {
            Block::Paragraph { spans } => {
                map.serialize_entry("type", "block-paragraph")?;
                map.serialize_entry("spans", spans)?;
            }
            Block::Heading { level, text } => {
                map.serialize_entry("type", &heading_type(*level))?;
                map.serialize_entry("heading", text)?;
            }
            Block::Citation {
                statement,
                attribution,
            } => {
                map.serialize_entry("type", "block-citation")?;
                map.serialize_entry("statement", statement)?;
                map.serialize_entry("attribution", attribution)?;
            }
            Block::OrderedList { items } => {
                map.serialize_entry("type", "block-ordered-list")?;
                map.serialize_entry("items", items)?;
            }
            Block::UnorderedList { items } => {
                map.serialize_entry("type", "block-unordered-list")?;
                map.serialize_entry("items", items)?;
            }
            Block::Listing { language, code } => {
                map.serialize_entry("type", "block-listing")?;
                map.serialize_entry("language", language)?;
                map.serialize_entry("code", code)?;
            }
            Block::Image { uri, caption, alt } => {
                map.serialize_entry("type", "block-image")?;
                map.serialize_entry("image_uri", uri)?;
                map.serialize_entry("caption", caption)?;
                map.serialize_entry("alt", alt)?;
            }
            Block::Record(record) => {
                for (key, value) in &record.fields {
                    map.serialize_entry(key, value)?;
                }
            }
        }
        map.end()
    }
}

/// A metadata record: free-form fields, optionally discriminated by `type`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, FieldValue>,
}

impl Record {
    /// Sets a field, replacing any earlier value under the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: FieldValue) {
        self.fields.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut FieldValue> {
        self.fields.get_mut(key)
    }

    /// The discriminating `type` field, when it is a plain string.
    pub fn record_type(&self) -> Option<&str> {
        match self.fields.get("type") {
            Some(FieldValue::Scalar(kind)) => Some(kind),
            _ => None,
        }
    }
}

impl<K: Into<String>> FromIterator<(K, FieldValue)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, FieldValue)>>(iter: I) -> Self {
        Record {
            fields: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        }
    }
}

/// Value of a record field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    /// Strings, and numbers or booleans in their textual form.
    Scalar(String),
    List(Vec<FieldValue>),
    Map(BTreeMap<String, FieldValue>),
    /// A span-shaped value, used for the cross-reference placeholder.
    Span(Span),
    /// Document blocks captured into the field.
    Blocks(Vec<Block>),
}

impl FieldValue {
    pub fn scalar(value: impl Into<String>) -> Self {
        FieldValue::Scalar(value.into())
    }

    pub fn as_blocks(&self) -> Option<&[Block]> {
        match self {
            FieldValue::Blocks(blocks) => Some(blocks),
            _ => None,
        }
    }
}
