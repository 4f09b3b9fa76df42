// Span handlers for span → HTML serialization.
//
// One handler per span type. Every tag written here comes from a fixed
// template; span contents are already escaped and are inserted verbatim,
// except in attributes where quotes are escaped as well.

use super::escape::attribute;
use super::State;
use crate::error::ConvertError;
use crate::resolve::PageUrlResolver;
use crate::span::{self, Span};

/// Dispatch to the appropriate handler for a span.
pub(crate) fn handle<R>(state: &mut State<'_, R>, span: &Span) -> Result<String, ConvertError>
where
    R: PageUrlResolver + ?Sized,
{
    match span {
        Span::Text(n) => Ok(handle_text(n)),
        Span::ExternalLink(n) => Ok(handle_external_link(n)),
        Span::WikiLink(n) => handle_wiki_link(state, n),
        Span::SectionLink(n) => handle_section_link(state, n),
    }
}

fn handle_text(node: &span::Text) -> String {
    node.value.clone()
}

fn handle_external_link(node: &span::ExternalLink) -> String {
    let label = node.label.as_deref().unwrap_or(&node.url);
    format!(
        r#"<a target="_blank" rel="nofollow" href="{}">{}</a>"#,
        attribute(&node.url),
        label
    )
}

fn handle_wiki_link<R>(state: &mut State<'_, R>, node: &span::WikiLink) -> Result<String, ConvertError>
where
    R: PageUrlResolver + ?Sized,
{
    let url = state.resolve(&node.title)?;
    Ok(format!(
        r#"<a target="_blank" href="{}">{}</a>"#,
        attribute(&url),
        node.text
    ))
}

fn handle_section_link<R>(
    state: &mut State<'_, R>,
    node: &span::SectionLink,
) -> Result<String, ConvertError>
where
    R: PageUrlResolver + ?Sized,
{
    let page_url = state.page_url()?;
    Ok(format!(
        r#"<a target="_blank" href="{}#{}"><em class="text-muted">→{}:</em></a> "#,
        attribute(page_url),
        attribute(&node.anchor),
        node.heading
    ))
}
