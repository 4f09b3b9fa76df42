// Compiled patterns for the inline constructs.
//
// The URL grammar is shared by bare links, masked links, and the masked-label
// check. Its character class excludes `"`, `<`, `>` and brackets, so a match
// can never break out of an `href` attribute or swallow a neighbouring
// construct. A URL ends on a word character or a balanced parenthetical,
// which keeps trailing sentence punctuation out of the link.

use std::sync::LazyLock;

use regex::Regex;

/// A single URL: `scheme://...` or bare `www....`.
macro_rules! url_pattern {
    () => {
        r#"\b(?:[\w-]+://|www\.)(?:[^\s()<>\[\]"]+|\([^\s()<>\[\]"]*\))*(?:\([^\s()<>\[\]"]*\)|\w)"#
    };
}

/// Matches a URL anywhere in a string.
pub(crate) static URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(url_pattern!()).expect("URL pattern is valid"));

/// Matches the next inline construct. Alternatives are listed in precedence
/// order; the leftmost match wins and ties go to the earlier alternative.
///
/// Groups:
/// - `heading`: section reference `/* heading */` (plus trailing blanks)
/// - `target`: wiki-link `[[target]]`
/// - `masked_url`, `label`: masked link `[url label]`
/// - `url`: bare URL
pub(crate) static INLINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"/\*[ \t]*(?P<heading>.*?)[ \t]*\*/[ \t]*",
        r"|\[\[(?P<target>[^\[\]\n]*)\]\]",
        r"|\[(?P<masked_url>",
        url_pattern!(),
        r")\s+(?P<label>[^\[\]\n]+)\]",
        r"|(?P<url>",
        url_pattern!(),
        r")",
    ))
    .expect("inline pattern is valid")
});
