//! Error types for reading and conversion

use crate::ir::nodes::Node;
use thiserror::Error;

/// Errors raised by readers and the format registry
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// The source could not be read into a node tree
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Fatal errors of the rewriting engine
///
/// A conversion that fails produces no partial output.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// A node kind reached a converter that has no case for it.
    ///
    /// `depth` is the recursion depth at which the node was met; it is only
    /// there to make the message easier to act on.
    #[error("Unrecognized node at depth {depth}: {node:?}")]
    UnrecognizedNode { node: Box<Node>, depth: usize },
}

impl ConversionError {
    pub(crate) fn unrecognized(node: &Node, depth: usize) -> Self {
        ConversionError::UnrecognizedNode {
            node: Box::new(node.clone()),
            depth,
        }
    }
}

/// Any failure on the way from source text to content assets
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}
