//! Dash and quote rewriting
//!
//! Straight quotes become directional LaTeX quote markup. Double
//! quotes are assumed to delimit whole quoted paragraphs and so must
//! occupy lines by themselves — exactly the shape the reflow engine
//! produces. Single quotes may appear inline; an apostrophe touching a
//! word character is a contraction mark, never a quote delimiter.

use regex::Regex;
use std::sync::LazyLock;

// Double-quoted block: quote, newline, content with no embedded
// quote, newline, quote.
static DOUBLE_QUOTE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("\"\\n([^\"]*)\\n\"").expect("hardcoded pattern is valid"));

/// Rewrite dash and quote runs, in order:
/// 1. `--` becomes `---` (plain substring replace);
/// 2. single-quote spans become `` `…' ``;
/// 3. whole-line double-quote blocks become ``` ``…'' ```;
/// 4. the resulting triple-closing-quote collision gains a
///    `\thinspace` between the first quote and the rest.
///
/// Dash substitution must precede quote detection, and the block
/// rewrite must follow the single-quote rewrite so step 4 sees both
/// conversions.
pub fn rewrite(text: &str) -> String {
    let text = text.replace("--", "---");
    let text = rewrite_single_quotes(&text);
    let text = DOUBLE_QUOTE_BLOCK.replace_all(&text, "``${1}''");
    text.replace("'''", "'\\thinspace''")
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

// Minimal spans delimited by apostrophes not adjacent to a word
// character outside the span. Needs lookaround, so it is scanned by
// hand rather than with the regex crate.
fn rewrite_single_quotes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pos = 0;
    while let Some(offset) = text[pos..].find('\'') {
        let open = pos + offset;
        let can_open = text[..open]
            .chars()
            .next_back()
            .map_or(true, |c| !is_word(c));
        if can_open {
            if let Some(close) = find_closing(text, open + 1) {
                out.push_str(&text[pos..open]);
                out.push('`');
                out.push_str(&text[open + 1..close]);
                out.push('\'');
                pos = close + 1;
                continue;
            }
        }
        out.push_str(&text[pos..open + 1]);
        pos = open + 1;
    }
    out.push_str(&text[pos..]);
    out
}

// The nearest later apostrophe not followed by a word character;
// apostrophes inside contractions are skipped over.
fn find_closing(text: &str, from: usize) -> Option<usize> {
    let mut pos = from;
    while let Some(offset) = text[pos..].find('\'') {
        let candidate = pos + offset;
        let closes = text[candidate + 1..]
            .chars()
            .next()
            .map_or(true, |c| !is_word(c));
        if closes {
            return Some(candidate);
        }
        pos = candidate + 1;
    }
    None
}
