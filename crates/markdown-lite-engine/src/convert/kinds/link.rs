/// Inline link type.
///
/// Knows how an anchor is rendered. Matching `[text](url)` is done in
/// `convert::links`.
pub struct Link;

impl Link {
    /// Renders an anchor. The URL is trimmed, the text is used verbatim.
    ///
    /// Links with empty text get wrapped in their own `<p>`.
    pub fn render(text: &str, url: &str) -> String {
        let url = url.trim();
        if text.is_empty() {
            format!(r#"<p><a href="{url}"></a></p>"#)
        } else {
            format!(r#"<a href="{url}">{text}</a>"#)
        }
    }
}
