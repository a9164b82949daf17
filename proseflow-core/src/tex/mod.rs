//! Plain-text to LaTeX markup conversion
//!
//! Converts a reflowed manuscript into LaTeX body markup: reserved
//! characters are escaped, dash and straight-quote runs become their
//! typographic forms, and underscore emphasis becomes `\textit`
//! spans. Works on whole-file contents; no streaming.

pub mod emphasis;
pub mod escape;
pub mod quotes;

/// Run the full conversion pipeline.
///
/// The order is load-bearing: escaping must come first so the
/// rewriters never see unescaped reserved characters, dash
/// substitution must precede quote detection, and quote rewriting must
/// finish before emphasis so the triple-quote fix-up sees every quote
/// already converted.
pub fn convert(text: &str) -> String {
    let text = escape::escape(text);
    let text = quotes::rewrite(&text);
    emphasis::rewrite(&text)
}
