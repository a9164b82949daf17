//! Paragraph reflow driver
//!
//! Reads paragraphs from an input stream and emits width-bounded
//! output lines, one pull at a time. Only one paragraph's lines are
//! ever materialized, so arbitrarily large manuscripts reflow in
//! bounded memory.

use crate::config::ReflowConfig;
use crate::error::Result;
use crate::normalize::normalize;
use crate::pack::take_line;
use crate::segment::semantic_lines;
use crate::tokenize::tokenize;
use std::collections::VecDeque;
use std::io::BufRead;

/// Streaming reflow of a manuscript.
///
/// Iterator items are either a content line terminated by `\n`, or a
/// paragraph-separator block of [`ReflowConfig::paragraph_spacing`]
/// newlines emitted before every paragraph after the first. The input
/// stream is consumed strictly sequentially; the iterator is not
/// restartable.
///
/// A partial final paragraph (end of input with no trailing blank
/// line) is reflowed like any other. Output-line invariant violations
/// are defects in the segmentation or packing logic and abort the
/// process rather than emit non-conforming output.
#[derive(Debug)]
pub struct Reflow<'a, R> {
    reader: R,
    config: &'a ReflowConfig,
    pending: VecDeque<String>,
    first_paragraph: bool,
    done: bool,
}

impl<'a, R: BufRead> Reflow<'a, R> {
    /// Wrap an input stream. Fails when the configuration is invalid.
    pub fn new(reader: R, config: &'a ReflowConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            reader,
            config,
            pending: VecDeque::new(),
            first_paragraph: true,
            done: false,
        })
    }

    /// Read the next paragraph: skip blank lines, then collect trimmed
    /// body lines until a blank line or end of input. An empty result
    /// means end of input.
    fn read_paragraph(&mut self) -> Result<Vec<String>> {
        let mut lines = Vec::new();
        let mut buf = String::new();
        loop {
            buf.clear();
            if self.reader.read_line(&mut buf)? == 0 {
                return Ok(lines);
            }
            let line = buf.trim();
            if !line.is_empty() {
                lines.push(line.to_string());
                break;
            }
        }
        loop {
            buf.clear();
            if self.reader.read_line(&mut buf)? == 0 {
                break;
            }
            let line = buf.trim();
            if line.is_empty() {
                break;
            }
            lines.push(line.to_string());
        }
        Ok(lines)
    }

    /// Reflow one paragraph into `pending`. Returns false on end of
    /// input.
    fn fill_pending(&mut self) -> Result<bool> {
        let lines = self.read_paragraph()?;
        if lines.is_empty() {
            self.done = true;
            return Ok(false);
        }

        if !self.first_paragraph {
            self.pending
                .push_back("\n".repeat(self.config.paragraph_spacing));
        }

        let paragraph = lines
            .iter()
            .map(|line| normalize(line))
            .collect::<Vec<_>>()
            .join(" ");
        for segment in semantic_lines(&paragraph) {
            let mut words: VecDeque<String> = tokenize(segment).into();
            while let Some(line) = take_line(&mut words, self.config.columns) {
                assert!(
                    line.chars().count() <= self.config.columns,
                    "packed line exceeds the configured width: {line:?}"
                );
                assert!(line == line.trim(), "packed line is not trimmed: {line:?}");
                self.pending.push_back(format!("{line}\n"));
            }
        }

        self.first_paragraph = false;
        Ok(true)
    }
}

impl<R: BufRead> Iterator for Reflow<'_, R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Result<String>> {
        loop {
            if let Some(item) = self.pending.pop_front() {
                return Some(Ok(item));
            }
            if self.done {
                return None;
            }
            match self.fill_pending() {
                Ok(true) => {}
                Ok(false) => return None,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reflow(input: &str, columns: usize, paragraph_spacing: usize) -> Vec<String> {
        let config = ReflowConfig {
            columns,
            paragraph_spacing,
        };
        Reflow::new(Cursor::new(input.to_string()), &config)
            .unwrap()
            .map(|item| item.unwrap())
            .collect()
    }

    #[test]
    fn empty_input_emits_nothing() {
        assert_eq!(reflow("", 20, 1), Vec::<String>::new());
        assert_eq!(reflow("\n\n\n", 20, 1), Vec::<String>::new());
    }

    #[test]
    fn single_paragraph_is_packed() {
        assert_eq!(
            reflow("aa bb cc dd\n", 5, 1),
            ["aa bb\n", "cc dd\n"]
        );
    }

    #[test]
    fn paragraphs_are_separated_by_spacing_block() {
        assert_eq!(
            reflow("one\n\ntwo\n", 20, 2),
            ["one\n", "\n\n", "two\n"]
        );
    }

    #[test]
    fn zero_spacing_emits_an_empty_separator_item() {
        assert_eq!(reflow("one\n\ntwo\n", 20, 0), ["one\n", "", "two\n"]);
    }

    #[test]
    fn partial_final_paragraph_is_still_emitted() {
        // no trailing newline or blank line after the last paragraph
        assert_eq!(reflow("first\n\nlast words", 20, 1), [
            "first\n",
            "\n",
            "last words\n"
        ]);
    }

    #[test]
    fn intra_paragraph_line_breaks_are_rejoined() {
        assert_eq!(
            reflow("alpha beta\ngamma\n", 30, 1),
            ["alpha beta gamma\n"]
        );
    }

    #[test]
    fn leading_blank_lines_are_skipped() {
        assert_eq!(reflow("\n\n  \nhello\n", 20, 1), ["hello\n"]);
    }

    #[test]
    fn sentences_start_new_lines() {
        assert_eq!(
            reflow("First one. Second one.\n", 40, 1),
            ["First one.\n", "Second one.\n"]
        );
    }

    #[test]
    fn invalid_config_is_rejected_at_construction() {
        let config = ReflowConfig {
            columns: 0,
            paragraph_spacing: 1,
        };
        assert!(Reflow::new(Cursor::new(String::new()), &config).is_err());
    }

    #[test]
    fn curly_quotes_are_normalized_before_segmentation() {
        assert_eq!(
            reflow("She said, \u{201C}go\u{201D}.\n", 30, 1),
            ["She said,\n", "\"\n", "go\n", "\"\n", ".\n"]
        );
    }
}
