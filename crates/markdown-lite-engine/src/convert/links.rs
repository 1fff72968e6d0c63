use std::borrow::Cow;
use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::kinds::Link;

/// `[text](url)`: text may be empty and may not contain `]`; url is
/// non-empty and may not contain `)`.
fn link_regex() -> &'static Regex {
    static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
    LINK_REGEX.get_or_init(|| Regex::new(r"\[([^\]]*)\]\(([^)]+)\)").expect("Invalid link regex"))
}

fn bare_link_regex() -> &'static Regex {
    static BARE_LINK_REGEX: OnceLock<Regex> = OnceLock::new();
    BARE_LINK_REGEX
        .get_or_init(|| Regex::new(r"^\[\]\(([^)]+)\)$").expect("Invalid bare link regex"))
}

/// Rewrites every `[text](url)` in a single line into an anchor tag.
///
/// Matches are found left to right and never overlap. Unterminated syntax
/// such as `[text](url` is left untouched. Returns the input unchanged
/// (borrowed) when the line holds no links.
///
/// ```
/// use markdown_lite_engine::rewrite_links;
///
/// assert_eq!(
///     rewrite_links("see [docs]( http://e.com )"),
///     r#"see <a href="http://e.com">docs</a>"#
/// );
/// ```
pub fn rewrite_links(line: &str) -> Cow<'_, str> {
    link_regex().replace_all(line, |caps: &Captures<'_>| Link::render(&caps[1], &caps[2]))
}

/// Whether `line` consists of nothing but a single empty-text link.
///
/// Such a line rewrites to a complete `<p>` block on its own.
pub fn is_bare_link(line: &str) -> bool {
    bare_link_regex().is_match(line)
}
