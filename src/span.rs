// Span types — the recognized pieces of a wikitext snippet.
//
// A snippet parses into a flat list of spans: literal text interleaved with
// the handful of link constructs we understand. Every string field holds
// already-escaped HTML (entities normalized, `<`, `>` and `&` escaped), so
// the renderer can emit them verbatim inside element content.

// ---------------------------------------------------------------------------
// Span structs
// ---------------------------------------------------------------------------

/// Literal text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Text {
    pub value: String,
}

/// External link, either bare (`http://example.com`) or masked
/// (`[http://example.com label]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalLink {
    /// Target exactly as written. Bare `www.` URLs keep no scheme, so as an
    /// `href` they resolve relative to the embedding page; callers that want
    /// absolute links should prefix them before rendering.
    pub url: String,
    /// Visible label for masked links. `None` for bare links, which show the URL.
    pub label: Option<String>,
}

/// Internal wiki-link (`[[Target|text]]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WikiLink {
    /// Normalized page title: first letter uppercased, spaces as underscores.
    pub title: String,
    /// Visible text. Defaults to the unnormalized path.
    pub text: String,
}

/// Section reference (`/* Section */`) pointing into the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionLink {
    /// Section heading as written (trimmed).
    pub heading: String,
    /// Fragment identifier: the heading with spaces as underscores.
    pub anchor: String,
}

// ---------------------------------------------------------------------------
// Span enum
// ---------------------------------------------------------------------------

/// A recognized piece of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Text(Text),
    ExternalLink(ExternalLink),
    WikiLink(WikiLink),
    SectionLink(SectionLink),
}

impl Span {
    /// Build a text span.
    pub fn text(value: impl Into<String>) -> Self {
        Span::Text(Text { value: value.into() })
    }

    /// Whether this span is literal text.
    pub fn is_text(&self) -> bool {
        matches!(self, Span::Text(_))
    }

    /// Whether this span renders as a link.
    pub fn is_link(&self) -> bool {
        !self.is_text()
    }
}
