//! Escaping for generated MSBuild XML
//!
//! Names and paths come straight out of the solution file and may contain
//! characters that would break the generated project file.

/// Escape text for use in XML element content and double- or
/// single-quoted attribute values
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

/// Escape a path and render it with backslash separators
pub fn escape_path(s: &str) -> String {
    escape_xml(s).replace('/', "\\")
}
