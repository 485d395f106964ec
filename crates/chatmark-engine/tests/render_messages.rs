use std::{
    collections::HashMap,
    time::{Duration, Instant},
};

use chatmark_engine::{
    Block, ListGrouping, NoCopies, RenderOptions, Segment, render_message,
    render::html::to_html,
    segment,
    snapshot::{invariants, outline},
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn render(message: &str) -> Vec<Block> {
    let blocks = render_message(message, 0, &NoCopies, &RenderOptions::default());
    invariants(message, &blocks);
    blocks
}

// Fixture-based outline tests

#[test]
fn fixture_design_tips() {
    assert_fixture("design_tips");
}

#[test]
fn fixture_mixed_fences() {
    assert_fixture("mixed_fences");
}

#[test]
fn fixture_unterminated_fence() {
    assert_fixture("unterminated_fence");
}

fn assert_fixture(name: &str) {
    let dir = format!("{}/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let message = std::fs::read_to_string(format!("{dir}/{name}.md")).unwrap();
    let expected = std::fs::read_to_string(format!("{dir}/{name}.outline")).unwrap();

    let blocks = render(&message);
    assert_eq!(outline(&blocks).trim_end(), expected.trim_end());
}

// Segmenter properties

#[rstest]
#[case("")]
#[case("plain text")]
#[case("a\n\nb\n\n* c")]
#[case("``` no newline after the tag ```")]
#[case("```python\nnever closed")]
fn text_without_fences_is_one_segment(#[case] message: &str) {
    let segments = segment(message);
    assert_eq!(segments.len(), 1);
    assert!(matches!(&segments[0], Segment::Text { content, .. } if content == message));
}

#[test]
fn well_formed_fence_splits_into_text_code_text() {
    let segments = segment("before\n```go\n  x := 1  \n```\nafter");
    assert_eq!(segments.len(), 3);
    assert!(matches!(
        &segments[1],
        Segment::Code { language, content, .. } if language == "go" && content == "x := 1"
    ));
}

// Idempotence

#[test]
fn rendering_twice_gives_equal_output() {
    let message = "**1. Focus:**\n\n```python\nx = 1\n```\n\n```js\ny\n```";
    let mut copied = HashMap::new();
    copied.insert("code-block-3-1-0".to_string(), true);
    let options = RenderOptions::default();

    let first = render_message(message, 3, &copied, &options);
    let second = render_message(message, 3, &copied, &options);
    assert_eq!(first, second);
    assert!(first[1].as_code().unwrap().copied);
}

// Highlighting

#[rstest]
#[case("rust")]
#[case("")]
#[case("c++")]
fn unknown_languages_are_not_highlighted(#[case] language: &str) {
    let message = format!("```{language}\nlet s = \"x\"; // hi\n```");
    let blocks = render(&message);
    let code = blocks[0].as_code().unwrap();
    assert_eq!(code.tokens.len(), 1);
    assert_eq!(code.tokens[0].category, None);
    assert_eq!(code.tokens[0].text, code.raw_content);
    assert_eq!(code.highlighted_markup, code.raw_content);
}

#[test]
fn javascript_markup() {
    let blocks = render("```javascript\n// greet\nconst name = \"World\";\n```");
    assert_eq!(
        blocks[0].as_code().unwrap().highlighted_markup,
        "<span style=\"color: #008000\">// greet</span>\n\
         <span style=\"color: #6a0dad\">const</span> \
         <span style=\"color: #87ceeb\">name</span> = \
         <span style=\"color: #ff0000\">\"World\"</span>;"
    );
}

#[test]
fn code_markup_escapes_html() {
    let blocks = render("```html\n<div class=\"x\">&</div>\n```");
    let markup = &blocks[0].as_code().unwrap().highlighted_markup;
    assert!(!markup.contains("<div"));
    assert!(markup.contains("&lt;<span style=\"color: #6a0dad\">div</span>"));
    assert!(markup.contains("&amp;"));
}

// Examples

#[test]
fn example_bold_paragraph() {
    let blocks = render("Hello **world**");
    insta::assert_snapshot!(outline(&blocks).trim_end(), @"p: Hello <strong>world</strong>");
}

#[test]
fn example_python_block() {
    let blocks = render("```python\nprint('hi')\n```");
    assert_eq!(blocks.len(), 1);
    let code = blocks[0].as_code().unwrap();
    assert_eq!(code.language, "python");
    assert_eq!(code.raw_content, "print('hi')");
    assert_eq!(
        code.highlighted_markup,
        "print(<span style=\"color: #ff0000\">'hi'</span>)"
    );
}

#[test]
fn example_nested_list_is_one_block() {
    let blocks = render("* a\n  * b\n* c");
    insta::assert_snapshot!(outline(&blocks).trim_end(), @r"
    ul
      0: a
      1: b
      0: c
    ");
}

#[test]
fn example_nested_list_split_policy() {
    let options = RenderOptions {
        list_grouping: ListGrouping::SplitOnReturnToRoot,
        ..RenderOptions::default()
    };
    let message = "* a\n  * b\n* c";
    let blocks = render_message(message, 0, &NoCopies, &options);
    invariants(message, &blocks);
    assert_eq!(blocks.iter().filter(|b| matches!(b, Block::List(_))).count(), 2);
}

#[test]
fn example_heading() {
    let blocks = render("**1. Building:** details");
    insta::assert_snapshot!(outline(&blocks).trim_end(), @r"
    h3 🚀 Building
    p: details
    ");
}

#[test]
fn heading_directly_followed_by_list() {
    let blocks = render("**1. Building:**\n* first\n* second");
    insta::assert_snapshot!(outline(&blocks).trim_end(), @r"
    h3 🚀 Building
    ul
      0: first
      0: second
    ");
}

#[rstest]
#[case("---")]
#[case("--- ")]
#[case("⸻")]
fn separator_lines(#[case] message: &str) {
    assert_eq!(render(message), vec![Block::Separator]);
}

// Unbalanced brackets

#[rstest]
#[case("[a")]
#[case("[a](")]
#[case("[a](b")]
fn unbalanced_links_render_in_linear_time(#[case] unit: &str) {
    let small = unit.repeat(5_000);
    let large = unit.repeat(80_000);

    let start = Instant::now();
    let blocks = render(&small);
    let small_time = start.elapsed();
    assert_eq!(blocks.len(), 1);

    let start = Instant::now();
    let blocks = render(&large);
    let large_time = start.elapsed();
    assert_eq!(blocks.len(), 1);

    // 16x the input; quadratic scanning would take about 256x as long.
    assert!(
        large_time < small_time * 64 + Duration::from_millis(200),
        "{unit:?}: {small_time:?} for 5k repeats, {large_time:?} for 80k"
    );
}

// Escaping

#[test]
fn user_markup_is_escaped_everywhere() {
    let message = "<img src=x onerror=alert(1)>\n\n* <b>item</b>\n\n**1. <i>Title</i>:**";
    let html = to_html(&render(message));
    assert!(!html.contains("<img"));
    assert!(!html.contains("<b>"));
    assert!(!html.contains("<i>"));
    assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
}

#[test]
fn raw_content_is_the_trimmed_fence_body() {
    let body = "  **Building** [x](y) `z`  ";
    let message = format!("Intro\n```markdown\n{body}\n```");
    let blocks = render(&message);
    let code = blocks.iter().find_map(Block::as_code).unwrap();
    assert_eq!(code.raw_content, body.trim());
}
