//! HTML escaping applied when stored text crosses into rendered output.

/// Encode HTML-significant characters as character references.
///
/// Covers `&`, `<`, `>`, `"`, and `'`, so the result is safe both as element
/// text and inside single- or double-quoted attribute values. Input is never
/// decoded first: escaping an already escaped string escapes it again, which
/// is why callers must apply this exactly once.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len() + input.len() / 8);
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            other => escaped.push(other),
        }
    }
    escaped
}
