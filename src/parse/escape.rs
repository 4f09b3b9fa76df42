// Input escaping.
//
// Entities are decoded first so that already-escaped input (`&amp;`) is not
// escaped twice, then `&`, `<` and `>` are escaped. Quotes are left alone;
// attribute values get their own quoting at render time.

/// Normalize and escape raw text for use as HTML element content.
pub(crate) fn escape(text: &str) -> String {
    let decoded = html_escape::decode_html_entities(text);
    html_escape::encode_text(&decoded).into_owned()
}
