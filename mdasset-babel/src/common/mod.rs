//! The rewriting passes shared by every reader: extension restructuring,
//! text flattening, span conversion and metadata parsing.

pub mod flatten;
pub mod metadata;
pub mod restructure;
pub mod spans;
