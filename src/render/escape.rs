// Attribute quoting for generated markup.
//
// Span fields are already escaped for element content, which leaves `"`
// untouched. Anything written inside a double-quoted attribute goes through
// `attribute()` so it cannot close the attribute early.

use std::borrow::Cow;

/// Escape `"` for use inside a double-quoted attribute value.
pub(crate) fn attribute(value: &str) -> Cow<'_, str> {
    if value.contains('"') {
        Cow::Owned(value.replace('"', "&quot;"))
    } else {
        Cow::Borrowed(value)
    }
}
