//! C# string literal escaping.
//!
//! Two independent schemes:
//! - **Quoted** (`"..."`): backslash, quote, CR and LF are backslash-escaped.
//! - **Verbatim** (`@"..."`): only the quote is special and is doubled.
//!
//! They are not interchangeable. Running verbatim content through the quoted
//! escaper doubles every backslash in the embedded script; running quoted
//! content through the verbatim escaper leaves raw newlines inside a literal
//! that cannot span lines.

/// Escape text for the inside of a regular C# string literal.
///
/// NEL, LS and PS are C# line terminators too, so they get `\u` escapes.
pub fn escape_quoted(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{0085}' => out.push_str("\\u0085"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c => out.push(c),
        }
    }
    out
}

/// Escape text for the inside of a C# verbatim string literal.
pub fn escape_verbatim(text: &str) -> String {
    text.replace('"', "\"\"")
}

/// `"text"` with quoted escaping applied.
pub fn quoted(text: &str) -> String {
    format!("\"{}\"", escape_quoted(text))
}

/// `@"text"` with verbatim escaping applied.
pub fn verbatim(text: &str) -> String {
    format!("@\"{}\"", escape_verbatim(text))
}
