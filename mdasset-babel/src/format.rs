//! Reader trait definition
//!
//! A reader adapts the output of a third-party parser to the generic node
//! tree of [`crate::ir::nodes`]. Readers do no rewriting of their own: raw
//! extension markers and metadata comments are handed over as raw nodes and
//! dealt with by the engine.

use crate::error::FormatError;
use crate::ir::nodes::Node;

/// Trait for input formats
///
/// # Examples
///
/// ```ignore
/// struct PlainText;
///
/// impl Reader for PlainText {
///     fn name(&self) -> &str {
///         "text"
///     }
///
///     fn read(&self, source: &str) -> Result<Vec<Node>, FormatError> {
///         Ok(vec![Node::Para(vec![Node::str(source)])])
///     }
/// }
/// ```
pub trait Reader: Send + Sync {
    /// The name of this format (e.g., "markdown", "pandoc-json")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, without the leading dot.
    ///
    /// Used for automatic format detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Read source text into top-level nodes
    fn read(&self, source: &str) -> Result<Vec<Node>, FormatError>;
}
