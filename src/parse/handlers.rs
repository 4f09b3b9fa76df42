// Construct handlers — one function per inline construct.
//
// Each handler receives the captures of an `INLINE` match and either returns
// a span or `None` when the match turns out not to be that construct after
// all. A rejected match is rescanned one character later, so the text it
// covered can still yield other constructs.

use regex::{Captures, Match};

use super::patterns::URL;
use super::title::{normalize_title, section_anchor};
use super::State;
use crate::span::{ExternalLink, SectionLink, Span, WikiLink};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Route a match to its handler based on which alternative matched.
pub(crate) fn one(state: &mut State, caps: &Captures) -> Option<Span> {
    if let Some(heading) = caps.name("heading") {
        return section_link(state, heading.as_str());
    }
    if let Some(target) = caps.name("target") {
        return wiki_link(target.as_str());
    }
    if let (Some(url), Some(label)) = (caps.name("masked_url"), caps.name("label")) {
        return masked_link(state, url, label);
    }
    caps.name("url").and_then(|url| bare_link(url.as_str()))
}

/// Schemes an external link may use. Anything else, `javascript://` in
/// particular, stays literal text.
const PROTOCOLS: &[&str] = &[
    "http", "https", "ftp", "ftps", "sftp", "ssh", "git", "svn", "irc", "ircs", "news", "nntp",
    "telnet", "gopher", "mms", "worldwind",
];

/// Whether a matched URL may become a link. Bare `www.` URLs have no scheme.
fn allowed_scheme(url: &str) -> bool {
    if url.starts_with("www.") {
        return true;
    }
    match url.split_once("://") {
        Some((scheme, _)) => PROTOCOLS.iter().any(|p| p.eq_ignore_ascii_case(scheme)),
        None => true,
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// `/* heading */`. Only the first one in a snippet becomes a link.
fn section_link(state: &mut State, heading: &str) -> Option<Span> {
    if heading.trim().is_empty() {
        return None;
    }
    if state.section_seen {
        #[cfg(feature = "tracing")]
        tracing::debug!(heading, "ignoring additional section reference");
        return None;
    }
    state.section_seen = true;

    #[cfg(feature = "tracing")]
    tracing::trace!(heading, "section reference");
    Some(Span::SectionLink(SectionLink {
        heading: heading.to_string(),
        anchor: section_anchor(heading),
    }))
}

/// `[[path]]`, `[[:path]]`, `[[path|text]]`.
fn wiki_link(target: &str) -> Option<Span> {
    let target = target.strip_prefix(':').unwrap_or(target);
    let (path, text) = match target.split_once('|') {
        Some((path, text)) => (path, Some(text)),
        None => (target, None),
    };

    let path = path.trim();
    if path.is_empty() {
        return None;
    }
    let text = text.filter(|t| !t.trim().is_empty()).unwrap_or(path);

    #[cfg(feature = "tracing")]
    tracing::trace!(path, "wiki-link");
    Some(Span::WikiLink(WikiLink {
        title: normalize_title(path),
        text: text.to_string(),
    }))
}

/// `[url label]`, only when external links are enabled and never when the
/// label is itself a URL.
fn masked_link(state: &State, url: Match, label: Match) -> Option<Span> {
    if !state.options.external_links {
        return None;
    }
    if !allowed_scheme(url.as_str()) {
        #[cfg(feature = "tracing")]
        tracing::debug!(url = url.as_str(), "refusing link with unsupported scheme");
        return None;
    }
    let label = label.as_str().trim();
    if label.is_empty() || URL.is_match(label) {
        #[cfg(feature = "tracing")]
        tracing::debug!(url = url.as_str(), label, "leaving masked link unconverted");
        return None;
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(url = url.as_str(), "masked link");
    Some(Span::ExternalLink(ExternalLink {
        url: url.as_str().to_string(),
        label: Some(label.to_string()),
    }))
}

/// Bare URL.
fn bare_link(url: &str) -> Option<Span> {
    if !allowed_scheme(url) {
        #[cfg(feature = "tracing")]
        tracing::debug!(url, "refusing link with unsupported scheme");
        return None;
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(url, "bare link");
    Some(Span::ExternalLink(ExternalLink {
        url: url.to_string(),
        label: None,
    }))
}
