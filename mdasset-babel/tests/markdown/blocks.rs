use crate::common::{markdown_blocks, paragraph};
use serde_json::json;

#[test]
fn test_two_paragraphs() {
    let blocks = markdown_blocks("This is the text of paragraph 1.\n\nThis is the second text.");
    assert_eq!(
        blocks,
        json!([
            paragraph("This is the text of paragraph 1."),
            paragraph("This is the second text."),
        ])
    );
}

#[test]
fn test_empty_document() {
    assert_eq!(markdown_blocks(""), json!([]));
}

#[test]
fn test_headings_gain_sub_per_level() {
    let md = "Erste Zeile.\n\n# Titel\n\n## Zwischenüberschrift mit Leerzeichen\n\n\
              ### Heading 3\n\n#### Heading 4\n\n##### Heading 5\n\n###### Heading 6\n";
    assert_eq!(
        markdown_blocks(md),
        json!([
            paragraph("Erste Zeile."),
            {"type": "block-heading", "heading": "Titel"},
            {"type": "block-subheading", "heading": "Zwischenüberschrift mit Leerzeichen"},
            {"type": "block-subsubheading", "heading": "Heading 3"},
            {"type": "block-subsubsubheading", "heading": "Heading 4"},
            {"type": "block-subsubsubsubheading", "heading": "Heading 5"},
            {"type": "block-subsubsubsubsubheading", "heading": "Heading 6"},
        ])
    );
}

#[test]
fn test_heading_text_is_plain() {
    assert_eq!(
        markdown_blocks("## A *very* **bold** `claim`"),
        json!([{"type": "block-subheading", "heading": "A very bold claim"}])
    );
}

#[test]
fn test_blockquote_becomes_citation() {
    let md = "As Kayne West said:\n\n> We are living in the future so\n> the present is our past.";
    assert_eq!(
        markdown_blocks(md),
        json!([
            paragraph("As Kayne West said:"),
            {
                "type": "block-citation",
                "statement": "We are living in the future so the present is our past.\n",
                "attribution": ""
            },
        ])
    );
}

#[test]
fn test_code_block() {
    let md = "Erste Zeile.\n\n```python\na = 2\n\nprint(a+3)\n```\n\nLetzte Zeile.";
    assert_eq!(
        markdown_blocks(md),
        json!([
            paragraph("Erste Zeile."),
            {"type": "block-listing", "language": "python", "code": "a = 2\n\nprint(a+3)"},
            paragraph("Letzte Zeile."),
        ])
    );
}

#[test]
fn test_indented_code_block_has_empty_language() {
    assert_eq!(
        markdown_blocks("    ls -la\n"),
        json!([{"type": "block-listing", "language": "", "code": "ls -la"}])
    );
}

#[test]
fn test_standard_image_is_lifted() {
    let md = "Erste Zeile.\n\n![Bildunterschrift mit Beschreibung](https://url.to/image.file)\n\nLetzte Zeile.";
    assert_eq!(
        markdown_blocks(md),
        json!([
            paragraph("Erste Zeile."),
            {
                "type": "block-image",
                "image_uri": "https://url.to/image.file",
                "caption": [{"type": "span-regular", "text": "Bildunterschrift mit Beschreibung"}],
                "alt": ""
            },
            paragraph("Letzte Zeile."),
        ])
    );
}

#[test]
fn test_reference_image_takes_title_as_alt() {
    let md = "![Caption with **bold**][ref]\n\n[ref]: https://url.to/image.file \"Foo bar baz.\"";
    assert_eq!(
        markdown_blocks(md),
        json!([{
            "type": "block-image",
            "image_uri": "https://url.to/image.file",
            "caption": [
                {"type": "span-regular", "text": "Caption with "},
                {"type": "span-strong", "text": "bold"}
            ],
            "alt": "Foo bar baz."
        }])
    );
}

#[test]
fn test_image_follows_paragraph_text() {
    let md = "See here: ![Cap](a.png) and there.";
    assert_eq!(
        markdown_blocks(md),
        json!([
            paragraph("See here:  and there."),
            {
                "type": "block-image",
                "image_uri": "a.png",
                "caption": [{"type": "span-regular", "text": "Cap"}],
                "alt": ""
            },
        ])
    );
}

#[test]
fn test_ordered_lists() {
    let md = "Zeile 1\n\n1. List item\n1. Item 2\n\nAbsatz mit normalem Text\n\n\
              1. Ordered *List* 2\n\n   Eingerückter Absatz\n\n1. Aufzählung geht weiter\n1. Punkt 3\n\nEnde.";
    assert_eq!(
        markdown_blocks(md),
        json!([
            paragraph("Zeile 1"),
            {"type": "block-ordered-list", "items": [
                {"type": "span-container", "spans": [{"type": "span-container", "spans": [
                    {"type": "span-regular", "text": "List item"}]}]},
                {"type": "span-container", "spans": [{"type": "span-container", "spans": [
                    {"type": "span-regular", "text": "Item 2"}]}]}
            ]},
            paragraph("Absatz mit normalem Text"),
            {"type": "block-ordered-list", "items": [
                {"type": "span-container", "spans": [
                    {"type": "span-container", "spans": [
                        {"type": "span-regular", "text": "Ordered "},
                        {"type": "span-emphasized", "text": "List"},
                        {"type": "span-regular", "text": " 2"}]},
                    {"type": "span-line-break-container", "spans": [
                        {"type": "span-container", "spans": [
                            {"type": "span-regular", "text": "Eingerückter Absatz"}]}]}]},
                {"type": "span-container", "spans": [{"type": "span-container", "spans": [
                    {"type": "span-regular", "text": "Aufzählung geht weiter"}]}]},
                {"type": "span-container", "spans": [{"type": "span-container", "spans": [
                    {"type": "span-regular", "text": "Punkt 3"}]}]}
            ]},
            paragraph("Ende."),
        ])
    );
}

#[test]
fn test_unordered_list_with_paths() {
    let md = "* A <fs-path>/foo</fs-path> x.\n* B <fs-path>/bar</fs-path> y.\n";
    assert_eq!(
        markdown_blocks(md),
        json!([{"type": "block-unordered-list", "items": [
            {"type": "span-container", "spans": [{"type": "span-container", "spans": [
                {"type": "span-regular", "text": "A "},
                {"type": "span-path", "path": "/foo"},
                {"type": "span-regular", "text": " x."}]}]},
            {"type": "span-container", "spans": [{"type": "span-container", "spans": [
                {"type": "span-regular", "text": "B "},
                {"type": "span-path", "path": "/bar"},
                {"type": "span-regular", "text": " y."}]}]}
        ]}])
    );
}

#[test]
fn test_list_item_link() {
    assert_eq!(
        markdown_blocks("1. [a](http://b)"),
        json!([{"type": "block-ordered-list", "items": [
            {"type": "span-container", "spans": [{"type": "span-container", "spans": [
                {"type": "span-link", "link_text": "a", "url": "http://b"}]}]}
        ]}])
    );
}

#[test]
fn test_list_images_follow_the_list() {
    let md = "- one ![Cap](a.png)\n- two\n\nAfter.";
    let blocks = markdown_blocks(md);
    assert_eq!(blocks[0]["type"], "block-unordered-list");
    assert_eq!(blocks[1]["type"], "block-image");
    assert_eq!(blocks[1]["image_uri"], "a.png");
    assert_eq!(blocks[2], paragraph("After."));
}

#[test]
fn test_unmapped_blocks_are_skipped() {
    assert_eq!(
        markdown_blocks("Before.\n\n---\n\nAfter."),
        json!([paragraph("Before."), paragraph("After.")])
    );
}

#[test]
fn test_nested_list_is_rejected() {
    let result = mdasset_babel::convert_markdown("- outer\n  - inner\n");
    assert!(matches!(
        result,
        Err(mdasset_babel::Error::Conversion(
            mdasset_babel::ConversionError::UnrecognizedNode { .. }
        ))
    ));
}
