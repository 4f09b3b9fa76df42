// wikitext2html — render short wikitext snippets (edit summaries, change-tag
// labels) as HTML that is safe to embed in a page.
//
// Architecture:
//   text → escape → single forward scan → span list → render(resolver) → HTML
//
// Recognized constructs: bare URLs, masked `[url label]` links, the leading
// `/* section */` reference, and `[[wiki-links]]`. Everything else is literal
// escaped text.

mod error;
mod parse;
mod render;
mod resolve;
pub mod span;

pub use error::ConvertError;
pub use resolve::{ArticlePath, PageUrlResolver, ResolveError};

use span::Span;

/// Conversion options.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Whether masked `[url label]` links are converted. Bare URLs are always
    /// linked. Callers enable this for change-tag labels and leave it off for
    /// default edit summaries.
    pub external_links: bool,
    /// Title of the page that `/* section */` references point into. Without
    /// one, section links are bare `#fragment` links.
    pub page: Option<String>,
}

impl Options {
    /// Create a new Options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether masked external links are converted.
    pub fn with_external_links(mut self, external_links: bool) -> Self {
        self.external_links = external_links;
        self
    }

    /// Set the page that section references link into.
    pub fn with_page(mut self, page: impl Into<String>) -> Self {
        self.page = Some(page.into());
        self
    }

    fn parse_options(&self) -> parse::ParseOptions {
        parse::ParseOptions {
            external_links: self.external_links,
        }
    }

    /// The configured page, normalized the same way as wiki-link targets.
    fn page_title(&self) -> Option<String> {
        self.page
            .as_deref()
            .map(|page| parse::title::normalize_title(&parse::escape::escape(page)))
            .filter(|title| !title.is_empty())
    }
}

/// Convert a wikitext snippet to HTML using default options.
///
/// # Examples
///
/// ```
/// use wikitext2html::ArticlePath;
///
/// let wiki = ArticlePath::new("https://en.wikipedia.org/wiki/$1").unwrap();
/// let html = wikitext2html::convert("see [[foo bar|Foo]]", &wiki).unwrap();
/// assert_eq!(
///     html,
///     r#"see <a target="_blank" href="https://en.wikipedia.org/wiki/Foo_bar">Foo</a>"#
/// );
/// ```
pub fn convert<R>(text: &str, resolver: &R) -> Result<String, ConvertError>
where
    R: PageUrlResolver + ?Sized,
{
    convert_with(text, &Options::default(), resolver)
}

/// Convert a wikitext snippet to HTML with custom options.
///
/// Fails only when the resolver does; malformed markup is kept as literal
/// text.
///
/// # Examples
///
/// ```
/// use wikitext2html::{convert_with, ArticlePath, Options};
///
/// let wiki = ArticlePath::new("https://en.wikipedia.org/wiki/$1").unwrap();
/// let options = Options::new().with_external_links(true);
/// let html = convert_with("[https://example.com Example]", &options, &wiki).unwrap();
/// assert_eq!(
///     html,
///     r#"<a target="_blank" rel="nofollow" href="https://example.com">Example</a>"#
/// );
/// ```
pub fn convert_with<R>(text: &str, options: &Options, resolver: &R) -> Result<String, ConvertError>
where
    R: PageUrlResolver + ?Sized,
{
    let spans = parse(text, options);
    render(&spans, options, resolver)
}

/// Escape text the way the converter does before recognizing markup:
/// entities are decoded, then `&`, `<` and `>` are escaped. Quotes are kept.
///
/// Idempotent: `escape(&escape(s)) == escape(s)`.
pub fn escape(text: &str) -> String {
    parse::escape::escape(text)
}

/// Escape a wikitext snippet and split it into spans.
pub fn parse(text: &str, options: &Options) -> Vec<Span> {
    parse::parse(text, options.parse_options())
}

/// Serialize spans to an HTML string.
pub fn render<R>(spans: &[Span], options: &Options, resolver: &R) -> Result<String, ConvertError>
where
    R: PageUrlResolver + ?Sized,
{
    render::render(spans, options.page_title(), resolver)
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use super::*;

    fn wiki(title: &str) -> Result<String, Infallible> {
        Ok(format!("https://en.wikipedia.org/wiki/{title}"))
    }

    #[test]
    fn test_convert_empty() {
        let result = convert("", &wiki).unwrap();
        assert_eq!(result, "");
    }

    #[test]
    fn test_convert_plain_text() {
        let result = convert("fixed typo", &wiki).unwrap();
        assert_eq!(result, "fixed typo");
    }

    #[test]
    fn test_convert_section_with_page() {
        let options = Options::new().with_page("history of rome");
        let result = convert_with("/* Early life */ expand", &options, &wiki).unwrap();
        assert_eq!(
            result,
            concat!(
                r##"<a target="_blank" href="https://en.wikipedia.org/wiki/History_of_rome#Early_life">"##,
                r#"<em class="text-muted">→Early life:</em></a> expand"#
            )
        );
    }

    #[test]
    fn test_options_builder() {
        let options = Options::new().with_external_links(true).with_page("Main Page");

        assert!(options.external_links);
        assert_eq!(options.page.as_deref(), Some("Main Page"));
        assert_eq!(options.page_title().as_deref(), Some("Main_Page"));
    }

    #[test]
    fn test_default_options() {
        let options = Options::default();
        assert!(!options.external_links);
        assert!(options.page.is_none());
        assert!(options.page_title().is_none());
    }

    #[test]
    fn test_blank_page_is_ignored() {
        let options = Options::new().with_page("  ");
        assert!(options.page_title().is_none());
    }
}
