//! Underscore emphasis conversion

use regex::Regex;
use std::sync::LazyLock;

// A span delimited by a pair of underscores with none in between.
static EMPHASIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("_([^_]*)_").expect("hardcoded pattern is valid"));

/// Replace each `_…_` span with `\textit{…}`.
///
/// A paragraph break inside the span splits it into one `\textit`
/// region per paragraph, since a single region must not straddle a
/// paragraph boundary. Scanning resumes after the replacement text, so
/// underscores are never reconsidered once converted.
pub fn rewrite(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(m) = EMPHASIS.find(rest) {
        // delimiters are single-byte underscores
        let inner = &rest[m.start() + 1..m.end() - 1];
        out.push_str(&rest[..m.start()]);
        out.push_str("\\textit{");
        out.push_str(&inner.replace("\n\n", "}\n\n\\textit{"));
        out.push('}');
        rest = &rest[m.end()..];
    }
    out.push_str(rest);
    out
}
