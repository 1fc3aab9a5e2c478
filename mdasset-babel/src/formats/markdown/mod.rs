//! Markdown format implementation
//!
//! # Library Choice
//!
//! We use the `comrak` crate for Markdown parsing: CommonMark compliant,
//! robust, and its optional extensions (tables, strikethrough, autolinks)
//! can be switched on per document source.
//!
//! # Element Mapping Table
//!
//! | Markdown                  | Node                                   |
//! |---------------------------|----------------------------------------|
//! | Paragraph                 | `Para`                                 |
//! | Heading (# ## ###)        | `Header { level }`                     |
//! | Block quote               | `BlockQuote`                           |
//! | List (- or 1.)            | `BulletList` / `OrderedList`           |
//! | Code block                | `CodeBlock`, first info word = language |
//! | HTML block                | `RawBlock { format: "html" }`          |
//! | Text                      | `Str`                                  |
//! | Soft / hard line break    | `SoftBreak` / `LineBreak`              |
//! | *italic* / **bold**       | `Emph` / `Strong`                      |
//! | ~~strikethrough~~         | `Strikeout` (extension)                |
//! | `code`                    | `Code`                                 |
//! | Link / image              | `Link` / `Image`                       |
//! | Inline HTML               | `RawInline { format: "html" }`         |
//!
//! Everything else (thematic breaks, tables, footnotes) becomes `Other` and
//! is left for the engine to skip or reject.
//!
//! Tight and loose list items both hold paragraphs; the distinction is a
//! rendering concern the content model does not carry.

pub mod parser;

use crate::error::FormatError;
use crate::format::Reader;
use crate::ir::nodes::Node;

/// comrak extensions enabled while reading
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkdownOptions {
    pub strikethrough: bool,
    pub autolink: bool,
    pub table: bool,
}

/// Reader for CommonMark Markdown
#[derive(Debug, Clone, Default)]
pub struct MarkdownFormat {
    options: MarkdownOptions,
}

impl MarkdownFormat {
    pub fn new(options: MarkdownOptions) -> Self {
        MarkdownFormat { options }
    }
}

impl Reader for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "CommonMark Markdown format"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn read(&self, source: &str) -> Result<Vec<Node>, FormatError> {
        parser::parse_markdown(source, &self.options)
    }
}
