// Page title and section anchor normalization.

/// Normalize a link path into a page title: trimmed, first letter
/// uppercased, spaces replaced with underscores.
///
/// The input is already escaped, so the result is safe to hand to a
/// resolver and place in an attribute (after quote escaping).
pub(crate) fn normalize_title(path: &str) -> String {
    let mut chars = path.trim().chars();
    let mut title = String::with_capacity(path.len());
    if let Some(first) = chars.next() {
        title.extend(first.to_uppercase());
    }
    for c in chars {
        title.push(if c == ' ' { '_' } else { c });
    }
    title
}

/// Fragment identifier for a section heading.
pub(crate) fn section_anchor(heading: &str) -> String {
    heading.replace(' ', "_")
}
