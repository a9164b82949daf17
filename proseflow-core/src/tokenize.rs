//! Word tokenization
//!
//! Splits a semantic line into word tokens, keeping punctuation
//! attached to the word it follows. Tokens never contain spaces.

const NONTERMINAL: &[u8] = b",:;";
const PUNCTUATION: &[char] = &[',', ':', ';', '.', '?', '!'];

/// Tokenize one semantic line.
///
/// Split points are every literal space, and every position directly
/// after `,` `:` `;` that is not at the end of the line and not before
/// an apostrophe. A token that is a single punctuation mark is merged
/// onto the token before it — punctuation never stands alone (unless
/// nothing precedes it). Empty tokens are dropped.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    for raw in raw_tokens(line) {
        let word = raw.trim();
        if word.is_empty() {
            continue;
        }
        if is_lone_mark(word) {
            if let Some(prev) = tokens.last_mut() {
                prev.push_str(word);
                continue;
            }
        }
        tokens.push(word.to_string());
    }
    tokens
}

fn is_lone_mark(word: &str) -> bool {
    let mut chars = word.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => PUNCTUATION.contains(&c),
        _ => false,
    }
}

fn raw_tokens(line: &str) -> Vec<&str> {
    let bytes = line.as_bytes();
    let mut parts = Vec::new();
    let mut start = 0;
    for pos in 0..bytes.len() {
        if bytes[pos] == b' ' {
            parts.push(&line[start..pos]);
            start = pos + 1;
        } else if pos > 0 && NONTERMINAL.contains(&bytes[pos - 1]) && bytes[pos] != b'\'' {
            parts.push(&line[start..pos]);
            start = pos;
        }
    }
    parts.push(&line[start..]);
    parts
}
