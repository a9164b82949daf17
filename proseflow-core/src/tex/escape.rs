//! Reserved-character escaping

/// Characters LaTeX reserves that appear in ordinary prose.
const RESERVED: &[char] = &['#', '%', '&'];

/// Insert a backslash before each reserved character, leaving all
/// other characters unchanged. Pure, total, order-preserving.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if RESERVED.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
