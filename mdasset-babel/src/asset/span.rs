//! Inline spans of the content model.

use serde::Serialize;
use std::mem;

/// An inline unit of the output content model.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Span {
    #[serde(rename = "span-regular")]
    Regular { text: String },
    #[serde(rename = "span-strong")]
    Strong { text: String },
    #[serde(rename = "span-emphasized")]
    Emphasized { text: String },
    #[serde(rename = "span-strong-emphasized")]
    StrongEmphasized { text: String },
    #[serde(rename = "span-listing")]
    Listing { listing_text: String },
    #[serde(rename = "span-link")]
    Link { link_text: String, url: String },
    #[serde(rename = "span-container")]
    Container { spans: Vec<Span> },
    #[serde(rename = "span-line-break-container")]
    LineBreakContainer { spans: Vec<Span> },
    #[serde(rename = "span-path")]
    Path { path: String },
    #[serde(rename = "span-program")]
    Program { program: String },
    #[serde(rename = "span-abbreviation")]
    Abbreviation { short: String, long: String },
    #[serde(rename = "span-ct-link")]
    CtLink,
}

impl Span {
    pub fn regular(text: impl Into<String>) -> Self {
        Span::Regular { text: text.into() }
    }

    pub fn strong(text: impl Into<String>) -> Self {
        Span::Strong { text: text.into() }
    }

    pub fn emphasized(text: impl Into<String>) -> Self {
        Span::Emphasized { text: text.into() }
    }

    pub fn strong_emphasized(text: impl Into<String>) -> Self {
        Span::StrongEmphasized { text: text.into() }
    }

    pub fn listing(text: impl Into<String>) -> Self {
        Span::Listing {
            listing_text: text.into(),
        }
    }

    pub fn link(link_text: impl Into<String>, url: impl Into<String>) -> Self {
        Span::Link {
            link_text: link_text.into(),
            url: url.into(),
        }
    }

    pub fn container(spans: Vec<Span>) -> Self {
        Span::Container { spans }
    }

    /// The literal `type` value this span serializes with.
    pub fn type_name(&self) -> &'static str {
        match self {
            Span::Regular { .. } => "span-regular",
            Span::Strong { .. } => "span-strong",
            Span::Emphasized { .. } => "span-emphasized",
            Span::StrongEmphasized { .. } => "span-strong-emphasized",
            Span::Listing { .. } => "span-listing",
            Span::Link { .. } => "span-link",
            Span::Container { .. } => "span-container",
            Span::LineBreakContainer { .. } => "span-line-break-container",
            Span::Path { .. } => "span-path",
            Span::Program { .. } => "span-program",
            Span::Abbreviation { .. } => "span-abbreviation",
            Span::CtLink => "span-ct-link",
        }
    }

    /// Folds `next` into `self` when both are of the same mergeable kind.
    ///
    /// Hands `next` back untouched otherwise. Links, abbreviations and
    /// cross-reference links carry independent payloads and never fold.
    pub fn absorb(&mut self, next: Span) -> Result<(), Span> {
        match (self, next) {
            (Span::Regular { text }, Span::Regular { text: more })
            | (Span::Strong { text }, Span::Strong { text: more })
            | (Span::Emphasized { text }, Span::Emphasized { text: more })
            | (Span::StrongEmphasized { text }, Span::StrongEmphasized { text: more })
            | (Span::Listing { listing_text: text }, Span::Listing { listing_text: more })
            | (Span::Path { path: text }, Span::Path { path: more })
            | (Span::Program { program: text }, Span::Program { program: more }) => {
                text.push_str(&more);
                Ok(())
            }
            (Span::Container { spans }, Span::Container { spans: more })
            | (Span::LineBreakContainer { spans }, Span::LineBreakContainer { spans: more }) => {
                spans.extend(more);
                Ok(())
            }
            (_, next) => Err(next),
        }
    }

    pub(crate) fn same_kind(&self, other: &Span) -> bool {
        mem::discriminant(self) == mem::discriminant(other)
    }
}

/// Concatenates adjacent spans of the same mergeable kind.
///
/// Running it on its own output changes nothing.
pub fn merge_spans(spans: Vec<Span>) -> Vec<Span> {
    let mut merged: Vec<Span> = Vec::with_capacity(spans.len());
    for span in spans {
        let rest = match merged.last_mut() {
            Some(last) if last.same_kind(&span) => last.absorb(span),
            _ => Err(span),
        };
        if let Err(span) = rest {
            merged.push(span);
        }
    }
    merged
}
