//! Include-file entries: `{ "name", Encoding.UTF8.GetBytes(@"...") }`.

use std::borrow::Cow;

use crate::escape::{quoted, verbatim};

/// Decode script bytes, replacing invalid UTF-8 with U+FFFD.
pub fn decode(content: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(content)
}

/// A single dictionary initializer entry, without trailing separator.
pub fn entry(name: &str, content: &[u8]) -> String {
    let text = decode(content);
    if matches!(text, Cow::Owned(_)) {
        tracing::warn!(file = name, "include file is not valid UTF-8, replacing bad bytes");
    }
    format!("{{ {}, Encoding.UTF8.GetBytes({}) }}", quoted(name), verbatim(&text))
}
