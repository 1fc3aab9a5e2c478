//! Markdown to content-asset conversion
//!
//!     This crate turns an already parsed document tree into the typed content assets of the
//!     publishing system: paragraphs, headings, citations, lists, code listings, images, inline
//!     spans, and free-form metadata records.
//!
//!     TLDR: For reader authors:
//!         - Babel never parses markdown itself, but relies on the format's libraries (comrak, Pandoc)
//!         - A reader maps the parser's tree onto ./ir/nodes.rs and does nothing else
//!         - Custom syntax (extension tags, metadata comments) is passed through as raw HTML nodes; the engine interprets it
//!         - Each reader has unit tests from source text to nodes, and integration tests from source text to JSON
//!
//! Architecture
//!
//!     Conversion runs in two passes over the node tree:
//!
//!         1. Restructuring (./common/restructure.rs): flat raw tag markers like `<fs-path>` ... `</fs-path>`
//!            are paired up into nested extension nodes, in every node sequence of the tree.
//!         2. Assembly (./assemble.rs): top-level nodes become blocks. Inline content goes through the span
//!            converter (./common/spans.rs), and metadata comments drive the record capture state machine.
//!
//!     This is a pure lib, that is, it powers the mdasset cli but is shell agnostic: no code
//!     should be written that supposes a shell environment, be it to std print, env vars etc.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Reader trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── formats
//!     │   ├── <format>
//!     │   │   ├── parser.rs       # Parser adapter
//!     │   │   └── mod.rs
//!     ├── ir                      # Generic node tree
//!     ├── common                  # Restructuring, flattening, spans, metadata
//!     ├── assemble.rs             # Block loop and record capture
//!     ├── asset                   # Output content model
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     ├── <format>
//!     │   └── <testname>.rs
//!     └── fixtures
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.
//!
//! Metadata
//!
//!     Records are written as YAML inside `<!--- ... -->` comments. A value of `MD_BLOCK` makes the
//!     field collect the document blocks that follow, until the next metadata comment. See
//!     ./assemble.rs for the full protocol.

pub mod assemble;
pub mod asset;
pub mod common;
pub mod error;
pub mod format;
pub mod formats;
pub mod ir;
pub mod registry;

pub use asset::{Block, Conversion, FieldValue, Record, Span};
pub use error::{ConversionError, Error, FormatError};
pub use format::Reader;
pub use ir::nodes::Node;
pub use registry::FormatRegistry;

/// Converts a top-level node sequence into content assets.
///
/// Extension markers are restructured first, then blocks are assembled.
/// Fails on the first node kind the span converter cannot represent; no
/// partial output is produced.
pub fn convert(nodes: Vec<Node>) -> Result<Conversion, ConversionError> {
    let nodes = common::restructure::restructure(nodes);
    let blocks = assemble::assemble(&nodes)?;
    Ok(Conversion::new(blocks))
}

/// Reads markdown with the default reader options and converts it.
pub fn convert_markdown(source: &str) -> Result<Conversion, Error> {
    let nodes = formats::markdown::MarkdownFormat::default().read(source)?;
    Ok(convert(nodes)?)
}
