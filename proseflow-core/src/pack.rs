//! Greedy line packing
//!
//! Consumes word tokens from the front of a queue and joins as many as
//! fit into one width-bounded line. Widths are measured in characters,
//! never bytes.

use std::collections::VecDeque;

/// Take one output line from the front of `words`.
///
/// Greedy left-to-right fit: tokens are consumed while the space-joined
/// length stays within `columns`. When even the first token is too
/// wide, a prefix of exactly `columns` characters becomes the line and
/// the remainder is re-queued in front. Returns `None` once the queue
/// is empty. Requires `columns >= 1`; each call consumes at least one
/// character.
pub fn take_line(words: &mut VecDeque<String>, columns: usize) -> Option<String> {
    let mut count = 0;
    let mut length = 0;
    for word in words.iter() {
        let added = word.chars().count() + usize::from(count > 0);
        if length + added > columns {
            break;
        }
        length += added;
        count += 1;
    }

    if count > 0 {
        let mut line = String::with_capacity(length);
        for (i, word) in words.drain(..count).enumerate() {
            if i > 0 {
                line.push(' ');
            }
            line.push_str(&word);
        }
        return Some(line);
    }

    // the front token alone is wider than the line: hard-split it
    let word = words.front_mut()?;
    let cut = word
        .char_indices()
        .nth(columns)
        .map(|(i, _)| i)
        .unwrap_or(word.len());
    let tail = word.split_off(cut);
    Some(std::mem::replace(word, tail))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue(words: &[&str]) -> VecDeque<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn pack_all(words: &[&str], columns: usize) -> Vec<String> {
        let mut queue = queue(words);
        let mut lines = Vec::new();
        while let Some(line) = take_line(&mut queue, columns) {
            lines.push(line);
        }
        lines
    }

    #[test]
    fn fits_words_greedily() {
        assert_eq!(
            pack_all(&["aa", "bb", "cc", "dd"], 5),
            ["aa bb", "cc dd"]
        );
    }

    #[test]
    fn exact_fit_fills_the_line() {
        assert_eq!(pack_all(&["abc", "defg"], 8), ["abc defg"]);
    }

    #[test]
    fn separator_space_counts_toward_the_width() {
        // "aa bb" is 5 chars and does not fit in 4
        assert_eq!(pack_all(&["aa", "bb"], 4), ["aa", "bb"]);
    }

    #[test]
    fn oversized_token_is_hard_split_at_the_width() {
        assert_eq!(
            pack_all(&["abcdefghijklmnopqrst"], 10),
            ["abcdefghij", "klmnopqrst"]
        );
    }

    #[test]
    fn oversized_remainder_can_join_following_words() {
        assert_eq!(pack_all(&["abcdefgh", "ij"], 5), ["abcde", "fgh", "ij"]);
    }

    #[test]
    fn width_one_still_makes_progress() {
        assert_eq!(pack_all(&["abc"], 1), ["a", "b", "c"]);
    }

    #[test]
    fn widths_are_measured_in_characters() {
        // four two-byte characters must not be split mid-char
        assert_eq!(pack_all(&["éééé"], 2), ["éé", "éé"]);
    }

    #[test]
    fn empty_queue_yields_none() {
        let mut empty: VecDeque<String> = VecDeque::new();
        assert_eq!(take_line(&mut empty, 10), None);
    }

    #[test]
    fn remainder_is_requeued_in_front() {
        let mut words = queue(&["abcdef", "xy"]);
        assert_eq!(take_line(&mut words, 4), Some("abcd".to_string()));
        assert_eq!(words, queue(&["ef", "xy"]));
    }
}
