//! Whole documents read from fixtures.

use crate::common::{fixture, markdown_blocks, markdown_json, paragraph};
use serde_json::json;

#[test]
fn test_mixed_document() {
    assert_eq!(
        markdown_json(&fixture("mixed_document.md")),
        json!({
            "type": "conversion-container",
            "blocks": [
                {"type": "block-heading", "heading": "Heading"},
                {"type": "block-paragraph", "spans": [
                    {"type": "span-regular", "text": "This is a paragraph with "},
                    {"type": "span-strong", "text": "important"},
                    {"type": "span-regular", "text": " content.\n"},
                    {"type": "span-emphasized", "text": "Blockwise emphasized"},
                    {"type": "span-regular", "text": " text continues here\nand "},
                    {"type": "span-strong-emphasized", "text": "strong and emphasized"},
                    {"type": "span-regular", "text": " words, "},
                    {"type": "span-listing", "listing_text": "inline code"},
                    {"type": "span-regular", "text": " and a "},
                    {"type": "span-link", "link_text": "link", "url": "https://ct.de"},
                    {"type": "span-regular", "text": "."}
                ]},
                {"type": "block-subheading", "heading": "smaller Heading"},
                {
                    "type": "block-image",
                    "image_uri": "image.png",
                    "caption": [{"type": "span-regular", "text": "Alt text"}],
                    "alt": "Image title"
                },
                paragraph("The text continues below the second heading."),
                {"type": "block-listing", "language": "python", "code": "print(\"hello\")"},
                {
                    "type": "block-citation",
                    "statement": "This is a citation\nwhich spans over two blocks.\n",
                    "attribution": ""
                },
                paragraph("Closing paragraph.")
            ]
        })
    );
}

#[test]
fn test_toc_big() {
    let blocks = markdown_blocks(&fixture("toc_big.md"));
    assert_eq!(
        blocks,
        json!([{
            "type": "article-table-of-contents",
            "x_id": "1234567890123456789",
            "title": [{"type": "block-heading", "heading": "Inhaltsverzeichnis"}],
            "content": [
                {
                    "type": "toc-block",
                    "title": "Trends & News",
                    "entries": [
                        {"type": "toc-small", "page": "14", "text": [{"type": "block-paragraph", "spans": [
                            {"type": "span-strong", "text": "Prozessoren"},
                            {"type": "span-regular", "text": " werden schneller"}
                        ]}]},
                        {"type": "toc-small", "page": "18", "text": [{"type": "block-paragraph", "spans": [
                            {"type": "span-strong", "text": "Speicher"},
                            {"type": "span-regular", "text": " wird billiger"}
                        ]}]}
                    ]
                },
                {
                    "type": "toc-block",
                    "title": "Test & Kaufberatung",
                    "entries": [{
                        "type": "toc-big",
                        "page": "60",
                        "image": [{
                            "type": "block-image",
                            "image_uri": "notebook.jpg",
                            "caption": [{"type": "span-regular", "text": "Notebook"}],
                            "alt": "Ein Notebook"
                        }],
                        "text": [{"type": "block-paragraph", "spans": [
                            {"type": "span-strong", "text": "Notebooks"},
                            {"type": "span-regular", "text": " im Vergleich"}
                        ]}]
                    }]
                }
            ]
        }])
    );
}

#[test]
fn test_mixed_document_snapshot_shape() {
    let blocks = markdown_blocks(&fixture("mixed_document.md"));
    let kinds: Vec<&str> = blocks
        .as_array()
        .expect("blocks should be an array")
        .iter()
        .filter_map(|block| block["type"].as_str())
        .collect();
    insta::assert_debug_snapshot!(kinds, @r###"
    [
        "block-heading",
        "block-paragraph",
        "block-subheading",
        "block-image",
        "block-paragraph",
        "block-listing",
        "block-citation",
        "block-paragraph",
    ]
    "###);
}
