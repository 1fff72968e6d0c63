use super::kinds::{Heading, Paragraph};

#[derive(Debug, Clone, Default)]
enum LeafState {
    #[default]
    Idle,
    Paragraph {
        lines: Vec<String>,
        /// Set while the paragraph is a single line that already rewrote
        /// into a complete `<p>` block.
        self_wrapped: bool,
    },
}

/// Two-state machine turning classified lines into HTML blocks.
///
/// Paragraph lines accumulate until a blank line, a header or
/// [`finish`](Self::finish) flushes them. Emitted blocks are never revisited.
#[derive(Debug, Default)]
pub struct HtmlBuilder {
    leaf: LeafState,
    out: Vec<String>,
}

impl HtmlBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_blank(&mut self) {
        self.flush_paragraph();
    }

    pub fn push_header(&mut self, level: u8, content: &str) {
        self.flush_paragraph();
        self.out.push(Heading::render(level, content));
    }

    /// A header over the level limit still closes the open paragraph.
    pub fn push_dropped_header(&mut self) {
        self.flush_paragraph();
    }

    /// Appends a rewritten paragraph line.
    ///
    /// `self_wrapped` marks a line that was nothing but an empty-text link
    /// and is therefore already a `<p>` block.
    pub fn push_text(&mut self, text: &str, self_wrapped: bool) {
        if let LeafState::Paragraph {
            lines,
            self_wrapped: wrapped,
        } = &mut self.leaf
        {
            lines.push(text.to_string());
            *wrapped = false;
            return;
        }

        self.leaf = LeafState::Paragraph {
            lines: vec![text.to_string()],
            self_wrapped,
        };
    }

    pub fn finish(mut self) -> Vec<String> {
        // EOF flush
        self.flush_paragraph();
        self.out
    }

    fn flush_paragraph(&mut self) {
        if let LeafState::Paragraph {
            lines,
            self_wrapped,
        } = std::mem::take(&mut self.leaf)
        {
            let block = if self_wrapped && lines.len() == 1 {
                lines.concat()
            } else {
                Paragraph::render(&lines)
            };
            self.out.push(block);
        }
    }
}
