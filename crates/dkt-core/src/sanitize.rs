//! Input sanitization applied on the validator's accept path.
//!
//! Persisted text is already escaped; downstream consumers of the API render
//! it without further treatment. The escape set neutralizes HTML markup and
//! the characters commonly used to break out of attribute contexts.

/// Trim surrounding whitespace, then escape markup-significant characters.
#[must_use]
pub fn clean(input: &str) -> String {
    escape(input.trim())
}

/// Escape markup-significant characters into entity form.
#[must_use]
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '/' => out.push_str("&#x2F;"),
            '\\' => out.push_str("&#x5C;"),
            '`' => out.push_str("&#96;"),
            other => out.push(other),
        }
    }
    out
}
