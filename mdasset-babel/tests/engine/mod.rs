//! The engine on hand-built node trees, independent of any reader.

use mdasset_babel::ir::nodes::Target;
use mdasset_babel::{convert, Block, ConversionError, FieldValue, Node, Span};
use serde_json::json;

fn html(text: &str) -> Node {
    Node::raw_html(text)
}

fn meta(yaml: &str) -> Node {
    Node::RawBlock {
        format: "html".to_string(),
        text: format!("<!---\n{yaml}\n-->"),
    }
}

#[test]
fn test_paragraph_with_marks() {
    let conversion = convert(vec![Node::Para(vec![
        Node::str("We"),
        Node::Space,
        Node::Strong(vec![Node::str("are")]),
        Node::SoftBreak,
        Node::Emph(vec![Node::Strong(vec![Node::str("here")])]),
    ])])
    .unwrap();
    assert_eq!(
        conversion.blocks,
        vec![Block::Paragraph {
            spans: vec![
                Span::regular("We "),
                Span::strong("are"),
                Span::regular("\n"),
                Span::strong_emphasized("here"),
            ]
        }]
    );
}

#[test]
fn test_image_is_lifted_out_of_paragraph() {
    let conversion = convert(vec![Node::Para(vec![
        Node::str("See"),
        Node::Image {
            content: vec![Node::Strong(vec![Node::str("Bild")])],
            target: Target::new("bild.png", "fig:Alt"),
        },
        Node::str("here."),
    ])])
    .unwrap();
    assert_eq!(
        conversion.blocks,
        vec![
            Block::Paragraph {
                spans: vec![Span::regular("Seehere.")]
            },
            Block::Image {
                uri: "bild.png".to_string(),
                caption: vec![Span::strong("Bild")],
                alt: "Alt".to_string(),
            },
        ]
    );
}

#[test]
fn test_extension_markers_in_heading_are_flattened() {
    let conversion = convert(vec![Node::Header {
        level: 2,
        content: vec![
            Node::str("Mit"),
            Node::Space,
            html("<program>"),
            Node::str("git"),
            html("</program>"),
        ],
    }])
    .unwrap();
    assert_eq!(
        conversion.blocks,
        vec![Block::Heading {
            level: 2,
            text: "Mit git".to_string()
        }]
    );
}

#[test]
fn test_abbreviation_with_marks() {
    let conversion = convert(vec![Node::Plain(vec![
        html("<abbr>"),
        Node::Strong(vec![Node::str("RAM")]),
        html("<abbr-long>"),
        Node::str("Random"),
        Node::Space,
        Node::Emph(vec![Node::str("Access")]),
        Node::Space,
        Node::str("Memory"),
        html("</abbr-long>"),
        html("</abbr>"),
    ])])
    .unwrap();
    assert_eq!(
        conversion.blocks,
        vec![Block::Paragraph {
            spans: vec![Span::Abbreviation {
                short: "**RAM**".to_string(),
                long: "Random *Access* Memory".to_string(),
            }]
        }]
    );
}

#[test]
fn test_unrecognized_node_produces_no_output() {
    let result = convert(vec![
        Node::Para(vec![Node::str("fine")]),
        Node::Para(vec![Node::Emph(vec![Node::Other {
            kind: "Cite".to_string(),
        }])]),
    ]);
    match result {
        Err(ConversionError::UnrecognizedNode { node, depth }) => {
            assert_eq!(node.kind(), "Cite");
            assert_eq!(depth, 1);
        }
        other => panic!("expected an error, got {other:?}"),
    }
}

#[test]
fn test_nested_records_through_convert() {
    let conversion = convert(vec![
        meta("type: outer\nbody: MD_BLOCK"),
        meta("type: inner\nnote: x"),
        Node::Para(vec![Node::str("after inner")]),
        meta(""),
        Node::Para(vec![Node::str("top")]),
    ])
    .unwrap();

    assert_eq!(conversion.blocks.len(), 2);
    let Block::Record(outer) = &conversion.blocks[0] else {
        panic!("expected a record");
    };
    assert_eq!(outer.record_type(), Some("outer"));
    let body = outer
        .get("body")
        .and_then(FieldValue::as_blocks)
        .expect("body should hold blocks");
    assert_eq!(body.len(), 2);
    assert_eq!(body[0].type_name().as_deref(), Some("inner"));
    assert_eq!(body[1].type_name().as_deref(), Some("block-paragraph"));
}

#[test]
fn test_envelope_serialization() {
    let conversion = convert(vec![Node::CodeBlock {
        language: None,
        code: "ls".to_string(),
    }])
    .unwrap();
    assert_eq!(
        serde_json::to_value(&conversion).unwrap(),
        json!({
            "type": "conversion-container",
            "blocks": [{"type": "block-listing", "language": "", "code": "ls"}]
        })
    );
    let compact = conversion.to_json().unwrap();
    assert!(!compact.contains('\n'));
    assert!(conversion.to_json_pretty().unwrap().contains('\n'));
}
