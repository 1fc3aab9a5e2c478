//! Generic node tree consumed by the engine.
//!
//! Readers (see ./formats) adapt a third-party parser's tree to this
//! representation; everything downstream only ever sees [`nodes::Node`].

pub mod nodes;
