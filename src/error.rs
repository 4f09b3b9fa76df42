use crate::resolve::ResolveError;

/// Errors that can occur during wikitext-to-HTML conversion.
///
/// Malformed markup is never an error; it is left as literal text.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConvertError {
    #[error("could not resolve URL for page \"{title}\": {source}")]
    Resolve {
        title: String,
        #[source]
        source: ResolveError,
    },
    #[error("invalid article path \"{template}\": {source}")]
    InvalidArticlePath {
        template: String,
        #[source]
        source: url::ParseError,
    },
    #[error("article path \"{template}\" uses unsupported scheme \"{scheme}\"")]
    UnsupportedScheme { template: String, scheme: String },
}
