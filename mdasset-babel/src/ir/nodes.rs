//! The generic node tree handed to the engine by a reader.
//!
//! The shape follows the Pandoc AST: one discriminated union for inline and
//! block kinds, so that sequences mixing both (list items, restructured
//! extension content) need no wrapper types.

/// Destination of a link or image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Target {
    pub url: String,
    pub title: String,
}

impl Target {
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Target {
            url: url.into(),
            title: title.into(),
        }
    }
}

/// A unit of the generic document tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A literal text run.
    Str(String),
    Space,
    SoftBreak,
    LineBreak,
    SingleQuote,
    DoubleQuote,
    /// Quoted content. The delimiter is itself an inline sequence, usually a
    /// single quote mark but a literal `Str` is accepted as well.
    Quoted {
        delimiter: Vec<Node>,
        content: Vec<Node>,
    },
    Emph(Vec<Node>),
    Strong(Vec<Node>),
    Strikeout(Vec<Node>),
    Code(String),
    Link {
        content: Vec<Node>,
        target: Target,
    },
    Image {
        content: Vec<Node>,
        target: Target,
    },
    RawInline {
        format: String,
        text: String,
    },

    Plain(Vec<Node>),
    Para(Vec<Node>),
    Header {
        level: usize,
        content: Vec<Node>,
    },
    BlockQuote(Vec<Node>),
    OrderedList(Vec<Vec<Node>>),
    BulletList(Vec<Vec<Node>>),
    CodeBlock {
        language: Option<String>,
        code: String,
    },
    RawBlock {
        format: String,
        text: String,
    },

    /// A custom extension marker pair, nested by the restructurer.
    Extension { tag: String, content: Vec<Node> },

    /// A kind the reader does not map. The original kind name is kept for
    /// error messages.
    Other { kind: String },
}

impl Node {
    /// Shorthand for a text run.
    pub fn str(text: impl Into<String>) -> Self {
        Node::Str(text.into())
    }

    /// Shorthand for an HTML raw inline run.
    pub fn raw_html(text: impl Into<String>) -> Self {
        Node::RawInline {
            format: "html".to_string(),
            text: text.into(),
        }
    }

    /// Name of the node kind, as used in diagnostics.
    pub fn kind(&self) -> &str {
        match self {
            Node::Str(_) => "Str",
            Node::Space => "Space",
            Node::SoftBreak => "SoftBreak",
            Node::LineBreak => "LineBreak",
            Node::SingleQuote => "SingleQuote",
            Node::DoubleQuote => "DoubleQuote",
            Node::Quoted { .. } => "Quoted",
            Node::Emph(_) => "Emph",
            Node::Strong(_) => "Strong",
            Node::Strikeout(_) => "Strikeout",
            Node::Code(_) => "Code",
            Node::Link { .. } => "Link",
            Node::Image { .. } => "Image",
            Node::RawInline { .. } => "RawInline",
            Node::Plain(_) => "Plain",
            Node::Para(_) => "Para",
            Node::Header { .. } => "Header",
            Node::BlockQuote(_) => "BlockQuote",
            Node::OrderedList(_) => "OrderedList",
            Node::BulletList(_) => "BulletList",
            Node::CodeBlock { .. } => "CodeBlock",
            Node::RawBlock { .. } => "RawBlock",
            Node::Extension { .. } => "Extension",
            Node::Other { kind } => kind,
        }
    }
}
