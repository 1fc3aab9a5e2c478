//! Markdown format tests
//!
//! Markdown source through comrak and the engine, checked on the serialized
//! JSON that consumers see.

mod blocks;
mod documents;
