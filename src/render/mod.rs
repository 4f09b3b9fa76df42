// Span list → HTML string serializer.
//
// Walks the spans in order and concatenates their HTML. Wiki-links and the
// section reference need URLs, which come from the caller's resolver; the
// first resolver error aborts rendering.

pub(crate) mod escape;
pub(crate) mod handlers;

use crate::error::ConvertError;
use crate::resolve::PageUrlResolver;
use crate::span::Span;

/// Serializer state threaded through all handlers.
pub(crate) struct State<'a, R: ?Sized> {
    pub resolver: &'a R,
    /// Normalized title of the page section references point into.
    pub page: Option<String>,
    /// Resolved URL of `page`, filled on first use.
    page_url: Option<String>,
}

impl<'a, R> State<'a, R>
where
    R: PageUrlResolver + ?Sized,
{
    pub fn new(page: Option<String>, resolver: &'a R) -> Self {
        Self {
            resolver,
            page,
            page_url: None,
        }
    }

    /// Resolve a normalized page title to its URL.
    pub fn resolve(&self, title: &str) -> Result<String, ConvertError> {
        self.resolver.page_url(title).map_err(|source| {
            #[cfg(feature = "tracing")]
            tracing::debug!(title, error = %source, "page URL resolution failed");
            ConvertError::Resolve {
                title: title.to_string(),
                source,
            }
        })
    }

    /// URL of the current page, or `""` when no page is configured so that
    /// section anchors stay relative to the embedding document.
    pub fn page_url(&mut self) -> Result<&str, ConvertError> {
        if self.page_url.is_none() {
            let url = match &self.page {
                Some(page) => self.resolve(page)?,
                None => String::new(),
            };
            self.page_url = Some(url);
        }
        Ok(self.page_url.as_deref().unwrap_or_default())
    }
}

/// Serialize spans to an HTML string.
pub(crate) fn render<R>(spans: &[Span], page: Option<String>, resolver: &R) -> Result<String, ConvertError>
where
    R: PageUrlResolver + ?Sized,
{
    let mut state = State::new(page, resolver);
    let mut output = String::new();

    for span in spans {
        output.push_str(&handlers::handle(&mut state, span)?);
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::convert::Infallible;

    use super::*;
    use crate::span::{ExternalLink, SectionLink, WikiLink};

    fn wiki(title: &str) -> Result<String, Infallible> {
        Ok(format!("https://wiki.test/{title}"))
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&[], None, &wiki).unwrap(), "");
    }

    #[test]
    fn test_render_bare_link_shows_url() {
        let spans = [Span::ExternalLink(ExternalLink {
            url: "http://example.com".into(),
            label: None,
        })];
        assert_eq!(
            render(&spans, None, &wiki).unwrap(),
            r#"<a target="_blank" rel="nofollow" href="http://example.com">http://example.com</a>"#
        );
    }

    #[test]
    fn test_render_wiki_link_quotes_href() {
        let spans = [Span::WikiLink(WikiLink {
            title: r#"A"b"#.into(),
            text: r#"A"b"#.into(),
        })];
        assert_eq!(
            render(&spans, None, &wiki).unwrap(),
            r#"<a target="_blank" href="https://wiki.test/A&quot;b">A"b</a>"#
        );
    }

    #[test]
    fn test_render_section_without_page_is_fragment_only() {
        let spans = [Span::SectionLink(SectionLink {
            heading: "Early life".into(),
            anchor: "Early_life".into(),
        })];
        assert_eq!(
            render(&spans, None, &wiki).unwrap(),
            r##"<a target="_blank" href="#Early_life"><em class="text-muted">→Early life:</em></a> "##
        );
    }

    #[test]
    fn test_render_page_url_resolved_once() {
        let calls = Cell::new(0);
        let counting = |title: &str| -> Result<String, Infallible> {
            calls.set(calls.get() + 1);
            Ok(format!("https://wiki.test/{title}"))
        };
        let section = Span::SectionLink(SectionLink {
            heading: "A".into(),
            anchor: "A".into(),
        });
        let spans = [section.clone(), Span::text(" "), section];
        let html = render(&spans, Some("Page".into()), &counting).unwrap();
        assert_eq!(calls.get(), 1);
        assert!(html.contains(r##"href="https://wiki.test/Page#A""##));
    }

    #[test]
    fn test_render_resolver_error_aborts() {
        let failing = |_: &str| -> Result<String, std::io::Error> {
            Err(std::io::Error::other("no such wiki"))
        };
        let spans = [
            Span::text("before "),
            Span::WikiLink(WikiLink {
                title: "Foo".into(),
                text: "Foo".into(),
            }),
        ];
        let err = render(&spans, None, &failing).unwrap_err();
        assert!(matches!(err, ConvertError::Resolve { ref title, .. } if title == "Foo"));
    }
}
