//! Pandoc JSON documents through the full pipeline.

use crate::common::{fixture, pandoc_blocks, paragraph};
use mdasset_babel::{ConversionError, Error, FormatError, FormatRegistry};
use serde_json::json;

#[test]
fn test_pandoc_article() {
    assert_eq!(
        pandoc_blocks(&fixture("article.pandoc.json")),
        json!([
            {
                "type": "block-info-box",
                "title": "Hinweis",
                "content": [{"type": "block-paragraph", "spans": [
                    {"type": "span-regular", "text": "Die Datei "},
                    {"type": "span-path", "path": "/etc/hosts"},
                    {"type": "span-regular", "text": " bearbeitet "},
                    {"type": "span-program", "program": "vim"},
                    {"type": "span-regular", "text": "."}
                ]}]
            },
            {"type": "block-subheading", "heading": "Zweiter Teil"},
            {"type": "block-paragraph", "spans": [
                {"type": "span-regular", "text": "\"Zitat\" und '"},
                {"type": "span-emphasized", "text": "mehr"},
                {"type": "span-regular", "text": "'"}
            ]},
            {"type": "block-unordered-list", "items": [
                {"type": "span-container", "spans": [{"type": "span-container", "spans": [
                    {"type": "span-regular", "text": "eins"}]}]},
                {"type": "span-container", "spans": [
                    {"type": "span-container", "spans": [{"type": "span-regular", "text": "zwei"}]},
                    {"type": "span-line-break-container", "spans": [
                        {"type": "span-container", "spans": [{"type": "span-regular", "text": "Nachsatz"}]}
                    ]}
                ]}
            ]},
            {"type": "block-listing", "language": "bash", "code": "echo hi"}
        ])
    );
}

#[test]
fn test_bare_block_array() {
    let source = r#"[{"t": "Para", "c": [{"t": "Str", "c": "Hallo"}]}]"#;
    assert_eq!(pandoc_blocks(source), json!([paragraph("Hallo")]));
}

#[test]
fn test_invalid_json_is_a_format_error() {
    let result = FormatRegistry::default().convert("{not json", "pandoc-json");
    assert!(matches!(result, Err(Error::Format(FormatError::ParseError(_)))));
}

#[test]
fn test_unknown_inline_kind_fails_conversion() {
    let source = r#"[{"t": "Para", "c": [
        {"t": "Str", "c": "Fuß"},
        {"t": "Note", "c": [{"t": "Para", "c": [{"t": "Str", "c": "note"}]}]}
    ]}]"#;
    match FormatRegistry::default().convert(source, "pandoc-json") {
        Err(Error::Conversion(ConversionError::UnrecognizedNode { node, .. })) => {
            assert_eq!(node.kind(), "Note");
        }
        other => panic!("expected an unrecognized node, got {other:?}"),
    }
}

#[test]
fn test_unknown_block_kinds_are_skipped() {
    let source = r#"[
        {"t": "HorizontalRule"},
        {"t": "Table", "c": []},
        {"t": "Para", "c": [{"t": "Str", "c": "Rest"}]}
    ]"#;
    assert_eq!(pandoc_blocks(source), json!([paragraph("Rest")]));
}

#[test]
fn test_metadata_in_raw_block_of_other_format() {
    // the payload decides, not the raw format
    let source = r#"[
        {"t": "RawBlock", "c": ["markdown", "<!---\ntype: meta-info\na: b\n-->"]}
    ]"#;
    assert_eq!(pandoc_blocks(source), json!([{"type": "meta-info", "a": "b"}]));
}
