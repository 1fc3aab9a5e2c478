//! Reader implementations
//!
//! Each reader adapts one third-party document tree to the generic nodes of
//! [`crate::ir::nodes`].

pub mod markdown;
pub mod pandoc;

pub use markdown::{MarkdownFormat, MarkdownOptions};
pub use pandoc::PandocJsonFormat;
