use std::sync::OnceLock;

use regex::Regex;

use super::kinds::Heading;

/// Start of the character window scanned for heading markers.
pub const MIN_HEADER_LEVEL: usize = 0;
/// End of the marker window, and the deepest heading level emitted.
pub const MAX_HEADER_LEVEL: usize = 6;

/// Bounds used when counting heading markers.
///
/// Markers are only counted inside `MIN_HEADER_LEVEL..max_level` character
/// positions, and a counted level above `max_level` drops the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderLimits {
    pub max_level: usize,
}

impl Default for HeaderLimits {
    fn default() -> Self {
        Self {
            max_level: MAX_HEADER_LEVEL,
        }
    }
}

/// What a single trimmed, non-blank, link-rewritten line turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// A heading with its level and trimmed content.
    Header { level: u8, content: &'a str },
    /// Heading syntax whose counted level falls outside `1..=6` or above the
    /// configured maximum. Produces no output.
    Dropped { level: usize },
    /// Paragraph text.
    Text,
}

/// One or more `#` followed by whitespace.
fn header_regex() -> &'static Regex {
    static HEADER_REGEX: OnceLock<Regex> = OnceLock::new();
    HEADER_REGEX.get_or_init(|| Regex::new(r"^#+\s").expect("Invalid header regex"))
}

/// Classifies lines for the block construction phase.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineClassifier {
    limits: HeaderLimits,
}

impl LineClassifier {
    pub fn new(limits: HeaderLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> HeaderLimits {
        self.limits
    }

    /// Classifies a trimmed, non-blank line into a [`LineClass`].
    ///
    /// A line is a heading only when its marker run is directly followed by
    /// whitespace, so `#NoSpace` is paragraph text.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        if !header_regex().is_match(line) {
            return LineClass::Text;
        }

        let level = Heading::count_markers(line, MIN_HEADER_LEVEL, self.limits.max_level);
        if level == 0 || level > self.limits.max_level || level > MAX_HEADER_LEVEL {
            return LineClass::Dropped { level };
        }

        LineClass::Header {
            // bounded by MAX_HEADER_LEVEL above
            level: level as u8,
            content: Heading::content(line, level),
        }
    }
}
