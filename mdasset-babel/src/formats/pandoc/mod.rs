//! Pandoc JSON AST format implementation
//!
//! Reads the output of `pandoc -t json`, so documents already parsed by
//! Pandoc (with its own markdown dialect and smart quotes) can go through the
//! engine unchanged. Both the full document object and a bare block array
//! are accepted.

pub mod parser;

use crate::error::FormatError;
use crate::format::Reader;
use crate::ir::nodes::Node;

/// Reader for the Pandoc JSON AST
#[derive(Debug, Clone, Copy, Default)]
pub struct PandocJsonFormat;

impl Reader for PandocJsonFormat {
    fn name(&self) -> &str {
        "pandoc-json"
    }

    fn description(&self) -> &str {
        "Pandoc JSON AST (pandoc -t json)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn read(&self, source: &str) -> Result<Vec<Node>, FormatError> {
        parser::parse_pandoc_json(source)
    }
}
