/// Paragraph block type.
///
/// Paragraphs have no delimiters - they are the default block when a line
/// is neither blank nor a heading.
pub struct Paragraph;

impl Paragraph {
    pub const OPEN: &'static str = "<p>";
    pub const CLOSE: &'static str = "</p>";

    /// Joins accumulated lines with a single space and wraps the trimmed
    /// result in `<p>`.
    pub fn render<S: AsRef<str>>(lines: &[S]) -> String {
        let joined = lines
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(" ");
        Self::wrap(joined.trim())
    }

    pub fn wrap(text: &str) -> String {
        format!("{}{text}{}", Self::OPEN, Self::CLOSE)
    }
}
