//! End-to-end tests for the conversion pass.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::convert::{Converter, HeaderLimits, convert, split_lines};

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(4)]
#[case(5)]
#[case(6)]
fn header_for_every_level(#[case] level: usize) {
    let md = format!("{} X", "#".repeat(level));
    assert_eq!(convert(&md), format!("<h{level}>X</h{level}>"));
}

#[test]
fn leading_whitespace_before_header_is_ignored() {
    assert_eq!(convert(" ## Header 2"), "<h2>Header 2</h2>");
}

#[test]
fn header_without_space_is_paragraph() {
    assert_eq!(convert("#HeaderWithoutSpace"), "<p>#HeaderWithoutSpace</p>");
    assert_eq!(convert("#NoSpace"), "<p>#NoSpace</p>");
}

#[test]
fn hashtag_in_header_is_preserved() {
    assert_eq!(convert("###### Header ###6"), "<h6>Header ###6</h6>");
}

#[test]
fn seven_hashes_render_as_level_six() {
    assert_eq!(convert("####### Deep"), "<h6># Deep</h6>");
}

#[test]
fn hashes_inside_the_window_raise_the_level() {
    assert_eq!(convert("# C# notes"), "<h2>C# notes</h2>");
    assert_eq!(convert("## C#"), "<h3>C#</h3>");
    assert_eq!(convert("# Notes on C#"), "<h1>Notes on C#</h1>");
}

#[test]
fn multiple_headers() {
    assert_eq!(
        convert("# Header 1\n## Header 2\n###### Header 6"),
        "<h1>Header 1</h1>\n<h2>Header 2</h2>\n<h6>Header 6</h6>"
    );
}

#[test]
fn simple_paragraph() {
    assert_eq!(
        convert("This is a simple paragraph."),
        "<p>This is a simple paragraph.</p>"
    );
}

#[test]
fn consecutive_lines_join_with_single_space() {
    assert_eq!(convert("A\nB"), "<p>A B</p>");
    assert_eq!(convert("  A  \n   B   "), "<p>A B</p>");
}

#[test]
fn blank_lines_separate_paragraphs() {
    assert_eq!(convert("A\n\n\nB"), "<p>A</p>\n<p>B</p>");
    assert_eq!(convert("A\n   \t\nB"), "<p>A</p>\n<p>B</p>");
}

#[test]
fn trailing_blank_lines_are_ignored() {
    assert_eq!(
        convert("This is a paragraph.\n\nAnother paragraph.\n\n\n"),
        "<p>This is a paragraph.</p>\n<p>Another paragraph.</p>"
    );
}

#[test]
fn header_closes_paragraph_without_blank_line() {
    assert_eq!(
        convert("intro text\n# Title\nbody"),
        "<p>intro text</p>\n<h1>Title</h1>\n<p>body</p>"
    );
}

#[test]
fn crlf_line_endings() {
    assert_eq!(
        convert("# Title\r\n\r\nA\r\nB\r\n"),
        "<h1>Title</h1>\n<p>A B</p>"
    );
}

#[test]
fn lone_carriage_return_ends_a_line() {
    assert_eq!(convert("# H\r# I"), "<h1>H</h1>\n<h1>I</h1>");
    assert_eq!(convert("A\rB\r\rC\r"), "<p>A B</p>\n<p>C</p>");
}

#[rstest]
#[case::vertical_tab("A\x0bB")]
#[case::form_feed("A\x0cB")]
#[case::file_separator("A\x1cB")]
#[case::group_separator("A\x1dB")]
#[case::record_separator("A\x1eB")]
#[case::next_line("A\u{85}B")]
#[case::line_separator("A\u{2028}B")]
#[case::paragraph_separator("A\u{2029}B")]
fn unicode_line_terminators_split_lines(#[case] md: &str) {
    assert_eq!(split_lines(md).collect::<Vec<_>>(), vec!["A", "B"]);
    assert_eq!(convert(md), "<p>A B</p>");
}

#[rstest]
#[case::empty("", vec![])]
#[case::single_terminator("\n", vec![""])]
#[case::no_trailing_terminator("a\nb", vec!["a", "b"])]
#[case::trailing_crlf("a\r\nb\r\n", vec!["a", "b"])]
#[case::blank_middle_line("a\n\nb", vec!["a", "", "b"])]
#[case::cr_then_lf_pair("a\r\r\nb", vec!["a", "", "b"])]
fn split_lines_drops_only_the_trailing_piece(#[case] text: &str, #[case] expected: Vec<&str>) {
    assert_eq!(split_lines(text).collect::<Vec<_>>(), expected);
}

#[test]
fn inline_link_in_paragraph() {
    assert_eq!(
        convert("This is a [link](http://example.com)."),
        r#"<p>This is a <a href="http://example.com">link</a>.</p>"#
    );
}

#[test]
fn inline_link_in_header() {
    assert_eq!(
        convert("## This is a header [with a link](http://example.com)"),
        r#"<h2>This is a header <a href="http://example.com">with a link</a></h2>"#
    );
}

#[test]
fn multiple_links_on_one_line() {
    assert_eq!(
        convert("This is [link 1](http://example1.com) and [link 2](http://example2.com)."),
        r#"<p>This is <a href="http://example1.com">link 1</a> and <a href="http://example2.com">link 2</a>.</p>"#
    );
}

#[test]
fn link_without_text() {
    assert_eq!(
        convert("[](http://e.com)"),
        r#"<p><a href="http://e.com"></a></p>"#
    );
}

#[test]
fn link_without_text_inside_sentence_keeps_its_wrapper() {
    assert_eq!(
        convert("see [](http://e.com) here"),
        r#"<p>see <p><a href="http://e.com"></a></p> here</p>"#
    );
}

#[test]
fn link_with_spaces() {
    assert_eq!(
        convert("[ link with spaces ]( http://example.com )"),
        r#"<p><a href="http://example.com"> link with spaces </a></p>"#
    );
}

#[test]
fn unterminated_link_is_literal() {
    assert_eq!(
        convert("broken [link](http://e.com"),
        "<p>broken [link](http://e.com</p>"
    );
}

#[test]
fn link_spanning_lines_is_not_rewritten() {
    assert_eq!(
        convert("[first\nsecond](http://e.com)"),
        "<p>[first second](http://e.com)</p>"
    );
}

#[test]
fn user_content_is_not_escaped() {
    assert_eq!(convert("a < b & \"c\""), "<p>a < b & \"c\"</p>");
}

#[rstest]
#[case::empty("")]
#[case::newlines("\n\n\n")]
#[case::spaces("   ")]
#[case::mixed(" \t \n  \r\n \n")]
fn blank_documents_produce_empty_output(#[case] md: &str) {
    assert_eq!(convert(md), "");
}

#[test]
fn output_has_no_trailing_newline() {
    let html = convert("# Title\n\nBody\n");
    assert!(!html.ends_with('\n'));
}

#[test]
fn combined_headers_paragraphs_and_links() {
    let md = "
# Header one

This is a paragraph [with an inline link](http://google.com). Neat, eh?

## Another Header

Another paragraph with [another link](http://example.com).
";
    let expected = r#"<h1>Header one</h1>
<p>This is a paragraph <a href="http://google.com">with an inline link</a>. Neat, eh?</p>
<h2>Another Header</h2>
<p>Another paragraph with <a href="http://example.com">another link</a>.</p>"#;
    assert_eq!(convert(md), expected);
}

#[test]
fn indented_document() {
    let md = "
            # Sample Document

            Hello!

            This is sample markdown for the [Mailchimp](https://www.mailchimp.com) homework assignment.";
    assert_eq!(
        convert(md),
        "<h1>Sample Document</h1>\n<p>Hello!</p>\n<p>This is sample markdown for the <a href=\"https://www.mailchimp.com\">Mailchimp</a> homework assignment.</p>"
    );
}

#[test]
fn narrower_limits_cap_header_level() {
    let converter = Converter::with_limits(HeaderLimits { max_level: 2 });
    assert_eq!(converter.convert("### Three"), "<h2># Three</h2>");
    assert_eq!(converter.convert("# One"), "<h1>One</h1>");
}

#[test]
fn dropped_header_produces_no_block() {
    let converter = Converter::with_limits(HeaderLimits { max_level: 8 });
    assert_eq!(
        converter.convert("before\n####### Seven\nafter"),
        "<p>before</p>\n<p>after</p>"
    );
}

#[test]
fn converter_is_reusable() {
    let converter = Converter::new();
    assert_eq!(converter.convert("# A"), "<h1>A</h1>");
    assert_eq!(converter.convert("# A"), "<h1>A</h1>");
    assert_eq!(converter.limits(), HeaderLimits::default());
}

#[test]
fn converter_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Converter>();
}
