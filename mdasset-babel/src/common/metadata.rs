//! Metadata blocks: YAML key/value pairs inside a `<!--- ... -->` comment.
//!
//! ```text
//! <!---
//! type: article-standard
//! title: MD_BLOCK
//! -->
//! ```
//!
//! A value equal to one of the capture sentinels (`MD_BLOCK`, `MD-BLOCK`,
//! `MDBLOCK`) does not become a field value; it asks the assembler to collect
//! the following document blocks into that field. The placeholder
//! `<ctlink />` becomes a cross-reference link span.

use crate::asset::{FieldValue, Span};
use crate::common::restructure::tags;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_yaml::Value;
use std::collections::BTreeMap;
use thiserror::Error;

static DELIMITER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^<!---(?s)(?P<yaml>.*?)-->$").expect("delimiter pattern is valid"));

static CT_LINK_PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^<\s*{}\s*/\s*>$", regex::escape(tags::CT_LINK)))
        .expect("placeholder pattern is valid")
});

const CAPTURE_SENTINELS: [&str; 3] = ["MD_BLOCK", "MD-BLOCK", "MDBLOCK"];

/// Why a metadata payload was ignored.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MetadataError {
    #[error("invalid YAML: {0}")]
    Yaml(String),
    #[error("expected a mapping, found {0}")]
    NotAMapping(&'static str),
}

/// One key of a metadata block, in source order.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    /// The field collects the blocks that follow.
    Capture { key: String },
    Field { key: String, value: FieldValue },
}

impl Entry {
    pub fn key(&self) -> &str {
        match self {
            Entry::Capture { key } | Entry::Field { key, .. } => key,
        }
    }
}

/// The YAML payload of a raw block, if the block is a metadata comment.
pub fn payload(raw: &str) -> Option<&str> {
    DELIMITER
        .captures(raw.trim())
        .and_then(|captures| captures.name("yaml"))
        .map(|payload| payload.as_str())
}

/// Parses a payload into its entries. A blank payload has none.
pub fn parse_entries(payload: &str) -> Result<Vec<Entry>, MetadataError> {
    if payload.trim().is_empty() {
        return Ok(Vec::new());
    }
    let value: Value =
        serde_yaml::from_str(payload).map_err(|err| MetadataError::Yaml(err.to_string()))?;
    let mapping = match value {
        Value::Mapping(mapping) => mapping,
        Value::Null => return Ok(Vec::new()),
        other => return Err(MetadataError::NotAMapping(yaml_kind(&other))),
    };

    Ok(mapping
        .into_iter()
        .map(|(key, value)| {
            let key = key_string(&key);
            if is_capture_sentinel(&value) {
                Entry::Capture { key }
            } else {
                Entry::Field {
                    key,
                    value: normalize(value),
                }
            }
        })
        .collect())
}

fn is_capture_sentinel(value: &Value) -> bool {
    matches!(value, Value::String(text) if CAPTURE_SENTINELS.contains(&text.trim()))
}

/// Converts a YAML value into a record field value.
///
/// Numbers and booleans keep their textual form. The cross-reference
/// placeholder is recognized at any depth.
pub fn normalize(value: Value) -> FieldValue {
    match value {
        Value::Null => FieldValue::Null,
        Value::Bool(flag) => FieldValue::Scalar(flag.to_string()),
        Value::Number(number) => FieldValue::Scalar(number.to_string()),
        Value::String(text) if CT_LINK_PLACEHOLDER.is_match(text.trim()) => {
            FieldValue::Span(Span::CtLink)
        }
        Value::String(text) => FieldValue::Scalar(text),
        Value::Sequence(items) => FieldValue::List(items.into_iter().map(normalize).collect()),
        Value::Mapping(mapping) => FieldValue::Map(
            mapping
                .into_iter()
                .map(|(key, value)| (key_string(&key), normalize(value)))
                .collect::<BTreeMap<_, _>>(),
        ),
        Value::Tagged(tagged) => normalize(tagged.value),
    }
}

fn key_string(key: &Value) -> String {
    match key {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Null => "null".to_string(),
        other => serde_yaml::to_string(other)
            .map(|text| text.trim().to_string())
            .unwrap_or_default(),
    }
}

fn yaml_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
