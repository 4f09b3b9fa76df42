// Page URL resolution.
//
// The converter never decides where a wiki page lives; it asks the caller.
// Any `Fn(&str) -> Result<String, E>` works as a resolver, and `ArticlePath`
// covers the common case of a wiki with a `$1`-style article path.

use std::error::Error;

use url::Url;

use crate::error::ConvertError;

/// Error type returned by resolvers.
pub type ResolveError = Box<dyn Error + Send + Sync + 'static>;

/// Maps a normalized page title to the URL of that page on the current wiki.
///
/// Titles arrive with spaces replaced by underscores, the first letter
/// uppercased, and HTML special characters already escaped (`&` as `&amp;`),
/// so the returned URL is ready to be placed in an `href` attribute.
pub trait PageUrlResolver {
    fn page_url(&self, title: &str) -> Result<String, ResolveError>;
}

impl<F, E> PageUrlResolver for F
where
    F: Fn(&str) -> Result<String, E>,
    E: Into<ResolveError>,
{
    fn page_url(&self, title: &str) -> Result<String, ResolveError> {
        self(title).map_err(Into::into)
    }
}

/// Resolver built from an article path template such as
/// `https://en.wikipedia.org/wiki/$1`.
///
/// # Examples
///
/// ```
/// use wikitext2html::{ArticlePath, PageUrlResolver};
///
/// let path = ArticlePath::new("https://en.wikipedia.org/wiki/$1").unwrap();
/// assert_eq!(
///     path.page_url("Foo_bar").unwrap(),
///     "https://en.wikipedia.org/wiki/Foo_bar"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticlePath {
    template: String,
}

impl ArticlePath {
    /// Placeholder replaced by the page title.
    pub const PLACEHOLDER: &'static str = "$1";

    /// Create a resolver from a template. A template without `$1` is treated
    /// as a base URL that titles are appended to.
    ///
    /// The template must be an absolute `http` or `https` URL.
    pub fn new(template: impl Into<String>) -> Result<Self, ConvertError> {
        let mut template = template.into();
        if !template.contains(Self::PLACEHOLDER) {
            template.push_str(Self::PLACEHOLDER);
        }

        let sample = template.replace(Self::PLACEHOLDER, "Main_Page");
        let url = match Url::parse(&sample) {
            Ok(url) => url,
            Err(source) => return Err(ConvertError::InvalidArticlePath { template, source }),
        };
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConvertError::UnsupportedScheme {
                scheme: url.scheme().to_string(),
                template,
            });
        }

        Ok(Self { template })
    }

    /// The template, always containing the `$1` placeholder.
    pub fn as_str(&self) -> &str {
        &self.template
    }
}

impl PageUrlResolver for ArticlePath {
    fn page_url(&self, title: &str) -> Result<String, ResolveError> {
        Ok(self.template.replace(Self::PLACEHOLDER, title))
    }
}
