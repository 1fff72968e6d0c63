//! # Conversion
//!
//! Single forward pass from restricted Markdown to an HTML fragment.
//!
//! ## Pipeline
//!
//! For each physical line, after trimming surrounding whitespace:
//!
//! 1. **Link rewriting** (`links`): `[text](url)` becomes an anchor tag.
//!    Runs on every non-blank line, so links inside headers are rewritten too.
//! 2. **Line classification** (`classify`): the rewritten line is a header,
//!    a dropped header, or paragraph text.
//! 3. **Block construction** (`builder`): an `HtmlBuilder` accumulates
//!    paragraph lines and emits blocks as headers and blank lines close them.
//!
//! ## Modules
//!
//! - **`kinds`**: Syntax owners with their delimiters and HTML rendering (Heading, Link, Paragraph)
//! - **`links`**: `rewrite_links()` over a single line
//! - **`classify`**: `LineClassifier` produces a `LineClass` for each line
//! - **`builder`**: `HtmlBuilder` two-state machine for paragraph accumulation
//!
//! ## Key Invariants
//!
//! - Conversion is total: every input yields an output string
//! - Blocks are emitted in input order and never revisited
//! - User text is passed through verbatim, without HTML escaping

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod links;

#[cfg(test)]
mod tests;

pub use builder::HtmlBuilder;
pub use classify::{
    HeaderLimits, LineClass, LineClassifier, MAX_HEADER_LEVEL, MIN_HEADER_LEVEL,
};
pub use links::{is_bare_link, rewrite_links};

use std::sync::OnceLock;

use regex::Regex;

/// Line terminators: `\r\n`, `\n`, lone `\r`, vertical tab, form feed,
/// the file/group/record separators, NEL and the Unicode line and paragraph
/// separators.
fn line_break_regex() -> &'static Regex {
    static LINE_BREAK_REGEX: OnceLock<Regex> = OnceLock::new();
    LINE_BREAK_REGEX.get_or_init(|| {
        Regex::new(r"\r\n|[\n\r\x0b\x0c\x1c-\x1e\x85\u{2028}\u{2029}]")
            .expect("Invalid line break regex")
    })
}

/// Splits a document into physical lines.
///
/// A terminator at the very end does not start another line.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut lines = line_break_regex().split(text).peekable();
    std::iter::from_fn(move || {
        let line = lines.next()?;
        if line.is_empty() && lines.peek().is_none() {
            return None;
        }
        Some(line)
    })
}

/// Converts documents with a fixed set of header limits.
///
/// A `Converter` holds no per-document state, so one instance can be shared
/// across threads and reused for any number of documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct Converter {
    classifier: LineClassifier,
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: HeaderLimits) -> Self {
        Self {
            classifier: LineClassifier::new(limits),
        }
    }

    pub fn limits(&self) -> HeaderLimits {
        self.classifier.limits()
    }

    /// Converts a whole document into newline-separated HTML blocks.
    ///
    /// Empty and whitespace-only documents produce an empty string.
    pub fn convert(&self, markdown: &str) -> String {
        let mut builder = HtmlBuilder::new();

        for raw in split_lines(markdown) {
            let line = raw.trim();
            if line.is_empty() {
                builder.push_blank();
                continue;
            }

            let rewritten = rewrite_links(line);
            match self.classifier.classify(&rewritten) {
                LineClass::Header { level, content } => builder.push_header(level, content),
                LineClass::Dropped { level } => {
                    log::debug!("dropping header of level {level}: {line}");
                    builder.push_dropped_header();
                }
                LineClass::Text => builder.push_text(&rewritten, is_bare_link(line)),
            }
        }

        let blocks = builder.finish();
        log::trace!("converted document into {} blocks", blocks.len());
        blocks.join("\n")
    }
}

/// Converts a document using the default header limits.
pub fn convert(markdown: &str) -> String {
    Converter::new().convert(markdown)
}
