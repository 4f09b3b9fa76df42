// Wikitext → span list
//
// Escapes the input, then walks it once from left to right. At each step the
// combined `INLINE` pattern finds the next candidate construct; the text before
// it becomes literal text and the construct is handed to its handler. Spans
// are produced in input order and generated markup only appears at render
// time, so nothing is ever matched twice.

pub(crate) mod escape;
pub(crate) mod handlers;
pub(crate) mod patterns;
pub(crate) mod title;

use crate::span::Span;

/// Options for the parse phase.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ParseOptions {
    /// Whether masked `[url label]` links are converted.
    pub external_links: bool,
}

/// Parse state threaded through all handlers.
pub(crate) struct State {
    /// Whether a section reference has already been converted.
    pub section_seen: bool,
    /// Spans produced so far.
    pub spans: Vec<Span>,
    /// Parse options.
    pub options: ParseOptions,
}

impl State {
    fn new(options: ParseOptions) -> Self {
        Self {
            section_seen: false,
            spans: Vec::new(),
            options,
        }
    }

    /// Append literal text, merging with a preceding text span.
    fn push_text(&mut self, value: &str) {
        if value.is_empty() {
            return;
        }
        match self.spans.last_mut() {
            Some(Span::Text(text)) => text.value.push_str(value),
            _ => self.spans.push(Span::text(value)),
        }
    }
}

/// Escape a wikitext snippet and split it into spans.
pub(crate) fn parse(text: &str, options: ParseOptions) -> Vec<Span> {
    let escaped = escape::escape(text);
    let mut state = State::new(options);
    let mut pos = 0;

    while let Some(caps) = patterns::INLINE.captures_at(&escaped, pos) {
        let Some(found) = caps.get(0) else { break };
        state.push_text(&escaped[pos..found.start()]);

        match handlers::one(&mut state, &caps) {
            Some(span) => {
                state.spans.push(span);
                pos = found.end();
            }
            None => {
                // Not a construct after all: keep its first character as text
                // and rescan from the next one.
                let width = found.as_str().chars().next().map_or(1, char::len_utf8);
                let next = found.start() + width;
                state.push_text(&escaped[found.start()..next]);
                pos = next;
            }
        }
    }
    state.push_text(&escaped[pos..]);

    state.spans
}
