/// ATX heading type with owned marker constant.
///
/// All heading syntax knowledge (the `#` marker, the counting window and
/// the `<hN>` rendering) lives here, not scattered in classifier code.
pub struct Heading;

impl Heading {
    /// The heading marker character.
    pub const MARKER: char = '#';

    /// Counts every marker inside the character window `[start, end)`.
    ///
    /// Markers beyond the window are not counted, so `"####### x"` yields 6
    /// with the default window of `0..6`. Markers after the leading run still
    /// count while inside the window: `"# C# notes"` yields 2.
    pub fn count_markers(s: &str, start: usize, end: usize) -> usize {
        s.chars()
            .take(end)
            .skip(start)
            .filter(|&c| c == Self::MARKER)
            .count()
    }

    /// Strips exactly `level` leading characters and trims the remainder.
    ///
    /// Interior markers are kept: `"###### Header ###6"` at level 6 gives
    /// `"Header ###6"`.
    pub fn content(s: &str, level: usize) -> &str {
        let idx = s.char_indices().nth(level).map_or(s.len(), |(i, _)| i);
        s[idx..].trim()
    }

    pub fn render(level: u8, content: &str) -> String {
        format!("<h{level}>{content}</h{level}>")
    }
}
