//! Integration tests for the questdown converter

use std::borrow::Cow;

use questdown_core::{classify, convert, is_html_fragment, render_message, ListKind, Tagged};

// ============================================================================
// Empty and Degenerate Input
// ============================================================================

#[test]
fn test_empty_input() {
    assert_eq!(convert(""), "");
}

#[test]
fn test_whitespace_only_input() {
    assert_eq!(convert("   \n\t\n  "), "");
}

#[test]
fn test_plain_text_without_syntax() {
    assert_eq!(convert("just some words"), "<p>just some words</p>");
}

// ============================================================================
// Headings
// ============================================================================

#[test]
fn test_heading_alone_is_not_wrapped() {
    assert_eq!(convert("# Title"), "<h1>Title</h1>");
}

#[test]
fn test_heading_levels() {
    assert_eq!(
        convert("# A\n## B\n### C"),
        "<h1>A</h1>\n<h2>B</h2>\n<h3>C</h3>"
    );
}

#[test]
fn test_four_hashes_is_not_a_heading() {
    assert_eq!(convert("#### D"), "<p>#### D</p>");
}

#[test]
fn test_heading_requires_space() {
    assert_eq!(convert("#NoSpace"), "<p>#NoSpace</p>");
}

#[test]
fn test_indented_hash_is_not_a_heading() {
    assert_eq!(convert(" # indented"), "<p># indented</p>");
}

#[test]
fn test_heading_content_gets_inline_formatting() {
    assert_eq!(
        convert("## Use `a<b`"),
        "<h2>Use <code>a&lt;b</code></h2>"
    );
}

// ============================================================================
// Bold and Italic
// ============================================================================

#[test]
fn test_bold_then_italic_in_one_paragraph() {
    let html = convert("**bold** and *italic*");
    assert_eq!(html, "<p><strong>bold</strong> and <em>italic</em></p>");

    let strong = html.find("<strong>bold</strong>").unwrap();
    let em = html.find("<em>italic</em>").unwrap();
    assert!(strong < em);
}

#[test]
fn test_double_asterisk_is_not_split_into_emphasis() {
    assert_eq!(convert("**x**"), "<p><strong>x</strong></p>");
}

#[test]
fn test_unclosed_bold_stays_literal() {
    assert_eq!(convert("**oops"), "<p>**oops</p>");
}

#[test]
fn test_adjacent_emphasis_spans() {
    assert_eq!(convert("*a**b*"), "<p><em>a</em><em>b</em></p>");
}

#[test]
fn test_bold_with_inner_asterisk_degrades() {
    // No literal `*` is allowed inside `**...**`; the pass falls back
    // to the single-asterisk reading, same as the reference.
    assert_eq!(
        convert("**a *b* c**"),
        "<p>*<em>a </em>b<em> c</em>*</p>"
    );
}

#[test]
fn test_empty_emphasis_is_literal() {
    assert_eq!(convert("*"), "<p>*</p>");
    assert_eq!(convert("**"), "<p>**</p>");
}

#[test]
fn test_stray_double_asterisk_falls_back_to_emphasis() {
    // `** and *` has no closing `**`; the single-asterisk reading
    // wins, same as the reference.
    assert_eq!(convert("** and *"), "<p>*<em> and </em></p>");
}

#[test]
fn test_code_span_inside_bold() {
    assert_eq!(
        convert("**a `b` c**"),
        "<p><strong>a <code>b</code> c</strong></p>"
    );
}

// ============================================================================
// Inline Code
// ============================================================================

#[test]
fn test_inline_code_escapes_angle_brackets() {
    let html = convert("`x < y`");
    assert!(html.contains("<code>x &lt; y</code>"));
    assert_eq!(html, "<p><code>x &lt; y</code></p>");
}

#[test]
fn test_inline_code_is_opaque_to_emphasis() {
    assert_eq!(convert("`*x*`"), "<p><code>*x*</code></p>");
}

#[test]
fn test_ampersand_is_not_escaped() {
    // Known limitation carried over from the reference converter.
    assert_eq!(convert("`a && b`"), "<p><code>a && b</code></p>");
}

#[test]
fn test_empty_backticks_are_literal() {
    assert_eq!(convert("``"), "<p>``</p>");
}

// ============================================================================
// Fenced Code Blocks
// ============================================================================

#[test]
fn test_fenced_code_block() {
    assert_eq!(
        convert("```\nlet x = 1;\n```"),
        "<pre><code>let x = 1;</code></pre>"
    );
}

#[test]
fn test_fence_language_hint_is_not_rendered() {
    assert_eq!(
        convert("```rust\nfn main() {}\n```"),
        "<pre><code>fn main() {}</code></pre>"
    );
}

#[test]
fn test_fenced_code_escapes_angle_brackets() {
    assert_eq!(
        convert("```\na < b > c\n```"),
        "<pre><code>a &lt; b &gt; c</code></pre>"
    );
}

#[test]
fn test_fenced_body_is_trimmed() {
    assert_eq!(
        convert("```\n\n  x\n\n```"),
        "<pre><code>x</code></pre>"
    );
}

#[test]
fn test_code_is_opaque_to_list_and_heading_rules() {
    // Lines that look like list items or headings inside a fence stay
    // code, blank lines included.
    assert_eq!(
        convert("```\n* foo\n# bar\n\n1. baz\n```"),
        "<pre><code>* foo\n# bar\n\n1. baz</code></pre>"
    );
}

#[test]
fn test_unclosed_fence_stays_literal() {
    assert_eq!(convert("``` only"), "<p>``` only</p>");
}

#[test]
fn test_lines_after_unclosed_fence_are_still_processed() {
    assert_eq!(
        convert("```\n* a"),
        "<p>```<br><ul><li>a</li></ul></p>"
    );
}

// ============================================================================
// Bullet Lists
// ============================================================================

#[test]
fn test_bullet_list_is_one_ul() {
    let html = convert("* a\n* b\n* c");
    assert_eq!(html, "<ul><li>a</li><li>b</li><li>c</li></ul>");
    assert_eq!(html.matches("<ul>").count(), 1);
    assert_eq!(html.matches("<li>").count(), 3);
}

#[test]
fn test_indented_bullets_stay_flat() {
    // Indentation is recorded but never nests.
    assert_eq!(
        convert("* a\n  * b\n    * c"),
        "<ul><li>a</li><li>b</li><li>c</li></ul>"
    );
}

#[test]
fn test_blank_line_splits_bullet_runs() {
    assert_eq!(
        convert("* a\n\n* b"),
        "<ul><li>a</li></ul>\n<ul><li>b</li></ul>"
    );
}

#[test]
fn test_bullet_item_content_gets_inline_formatting() {
    assert_eq!(
        convert("* **x** and `y`"),
        "<ul><li><strong>x</strong> and <code>y</code></li></ul>"
    );
}

#[test]
fn test_asterisk_without_space_is_not_a_bullet() {
    assert_eq!(convert("*not a list"), "<p>*not a list</p>");
}

// ============================================================================
// Numbered Lists
// ============================================================================

#[test]
fn test_numbered_list_is_one_ol() {
    let html = convert("1. first\n2. second");
    assert_eq!(html, "<ol><li>first</li><li>second</li></ol>");
    assert_eq!(html.matches("<ol>").count(), 1);
    assert_eq!(html.matches("<li>").count(), 2);
}

#[test]
fn test_source_numbering_is_discarded() {
    assert_eq!(
        convert("7. out\n3. of\n9. order"),
        "<ol><li>out</li><li>of</li><li>order</li></ol>"
    );
}

#[test]
fn test_adjacent_bullet_and_numbered_runs_are_separate_lists() {
    assert_eq!(
        convert("* a\n1. b"),
        "<ul><li>a</li></ul>\n<ol><li>b</li></ol>"
    );
}

#[test]
fn test_digits_without_dot_space_are_plain() {
    assert_eq!(convert("1.x"), "<p>1.x</p>");
}

// ============================================================================
// Paragraphs
// ============================================================================

#[test]
fn test_newlines_inside_a_paragraph_become_br() {
    assert_eq!(convert("a\nb\n\nc"), "<p>a<br>b</p>\n<p>c</p>");
}

#[test]
fn test_paragraph_edges_are_trimmed() {
    assert_eq!(convert("  a\nb  "), "<p>a<br>b</p>");
}

#[test]
fn test_multiple_blank_lines_are_one_boundary() {
    assert_eq!(convert("a\n\n\n\nb"), "<p>a</p>\n<p>b</p>");
}

#[test]
fn test_group_led_by_heading_passes_through_unwrapped() {
    // Matches the reference paragraph rule: a blank-line group whose
    // first element is already HTML is not wrapped.
    assert_eq!(convert("# H\ntext"), "<h1>H</h1>\ntext");
}

#[test]
fn test_authored_html_line_is_not_wrapped() {
    assert_eq!(convert("<span>x</span>"), "<span>x</span>");
}

#[test]
fn test_no_sanitization_is_performed() {
    // Trust boundary belongs to the caller's sanitizer.
    assert_eq!(
        convert("<script>alert(1)</script>"),
        "<script>alert(1)</script>"
    );
}

#[test]
fn test_crlf_input() {
    assert_eq!(convert("# T\r\n\r\na\r\nb"), "<h1>T</h1>\n<p>a<br>b</p>");
}

// ============================================================================
// Mixed Documents
// ============================================================================

#[test]
fn test_full_reply_document() {
    let input = "# Plan\n\nTwo steps, then *done*:\n\n1. install\n2. run\n\n```sh\ncargo test\n```";
    assert_eq!(
        convert(input),
        "<h1>Plan</h1>\n\
         <p>Two steps, then <em>done</em>:</p>\n\
         <ol><li>install</li><li>run</li></ol>\n\
         <pre><code>cargo test</code></pre>"
    );
}

// ============================================================================
// Dispatch (render_message / is_html_fragment)
// ============================================================================

#[test]
fn test_html_detection() {
    assert!(is_html_fragment("<p>hi</p>"));
    assert!(is_html_fragment("<h2>t</h2>"));
    assert!(is_html_fragment("<div>x</div>"));
    assert!(!is_html_fragment("# not html"));
    assert!(!is_html_fragment("<span>open tags only"));
}

#[test]
fn test_existing_html_passes_through_unchanged() {
    let input = "<p>already <strong>rendered</strong></p>";
    let out = render_message(input);
    assert!(matches!(out, Cow::Borrowed(_)));
    assert_eq!(out, input);
}

#[test]
fn test_markdown_is_converted() {
    assert_eq!(render_message("# Title"), "<h1>Title</h1>");
}

#[test]
fn test_render_message_is_idempotent() {
    let first = render_message("**bold**").into_owned();
    let second = render_message(&first);
    assert_eq!(second, first);
}

// ============================================================================
// Classification
// ============================================================================

#[test]
fn test_classify_tags_every_line() {
    let tags = classify("# h\n\n* a\n1. b\nplain");
    assert_eq!(tags.len(), 5);
    assert!(matches!(tags[0], Tagged::Heading { level: 1, text: "h" }));
    assert!(matches!(tags[1], Tagged::Blank));
    assert!(matches!(
        tags[2],
        Tagged::Item {
            kind: ListKind::Unordered,
            ..
        }
    ));
    assert!(matches!(
        tags[3],
        Tagged::Item {
            kind: ListKind::Ordered,
            ..
        }
    ));
    assert!(matches!(tags[4], Tagged::Plain("plain")));
}

#[test]
fn test_classify_records_indent() {
    let tags = classify("  * a");
    assert!(matches!(
        tags[0],
        Tagged::Item {
            kind: ListKind::Unordered,
            indent: 2,
            text: "a"
        }
    ));
}

#[test]
fn test_classify_resolves_fences_first() {
    let tags = classify("```py\nx = 1\n```");
    assert_eq!(tags.len(), 1);
    match &tags[0] {
        Tagged::Code { lang, body } => {
            assert_eq!(*lang, "py");
            assert_eq!(body, &vec!["x = 1"]);
        }
        other => panic!("expected code, got {:?}", other),
    }
}
