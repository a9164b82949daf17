//! Conversion tests over whole reflowed documents

use proseflow_core::tex;

#[test]
fn reflowed_dialogue_becomes_latex_quotes() {
    // the shape the reflow engine produces: double quotes on their own lines
    let input = "\
He said,
\"
hello
\"
.";
    assert_eq!(tex::convert(input), "He said,\n``hello''\n.");
}

#[test]
fn multi_line_quoted_paragraph() {
    let input = "\"\nfirst line of the quote\nsecond line\n\"";
    assert_eq!(
        tex::convert(input),
        "``first line of the quote\nsecond line''"
    );
}

#[test]
fn contractions_survive_alongside_quotes_and_emphasis() {
    assert_eq!(
        tex::convert("It's a 'test' of _emphasis_."),
        "It's a `test' of \\textit{emphasis}."
    );
}

#[test]
fn nested_single_quote_at_block_end_gets_a_thinspace() {
    let input = "\"\nshe called it 'luck'\n\"";
    assert_eq!(
        tex::convert(input),
        "``she called it `luck'\\thinspace''"
    );
}

#[test]
fn quote_markup_stays_balanced() {
    let input = "'one' and 'two'\n\"\nblock one\n\"\ntext\n\"\nblock two\n\"";
    let output = tex::convert(input);
    assert_eq!(output.matches('`').count(), output.matches('\'').count());
    // two single spans, two double blocks
    assert_eq!(output.matches("``").count(), 2);
    assert_eq!(output.matches("''").count(), 2);
}

#[test]
fn emphasis_spanning_a_paragraph_break_is_split_per_paragraph() {
    let input = "_He walked on.\n\nStill it rained._";
    assert_eq!(
        tex::convert(input),
        "\\textit{He walked on.}\n\n\\textit{Still it rained.}"
    );
}

#[test]
fn dashes_quotes_and_escapes_compose() {
    let input = "Fish & chips -- 50% off, she said--'bargain'.";
    assert_eq!(
        tex::convert(input),
        "Fish \\& chips --- 50\\% off, she said---`bargain'."
    );
}
