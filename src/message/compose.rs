// SPDX-License-Identifier: MPL-2.0
//! Pure composition of message inputs into dialog text.

use super::MessageInput;

/// Separator between lines of one block.
pub const NEW_LINE: &str = "\n";

/// Separator between independent blocks.
pub const NEW_PARAGRAPH: &str = "\n\n";

/// Composes an ordered list of inputs into one display string.
///
/// Absent entries and entries that are empty after trimming are skipped.
/// Every fragment is trimmed before it is appended, so separators never
/// double up and the result never starts with a separator.
pub fn compose<I, T>(inputs: I, verbose: bool) -> String
where
    I: IntoIterator<Item = T>,
    T: Into<MessageInput>,
{
    let mut out = String::new();

    for input in inputs.into_iter().map(Into::<MessageInput>::into) {
        match input {
            MessageInput::Text(text) => append_trim(&mut out, NEW_PARAGRAPH, &text),
            MessageInput::Failure(failure) => {
                append_trim(&mut out, NEW_PARAGRAPH, &failure.render(verbose));
            }
            MessageInput::Lines(lines) => {
                let block_start = out.len();
                for line in &lines {
                    let separator = if out.len() == block_start {
                        NEW_PARAGRAPH
                    } else {
                        NEW_LINE
                    };
                    append_trim(&mut out, separator, line);
                }
            }
        }
    }

    out
}

fn append_trim(out: &mut String, separator: &str, text: &str) {
    let text = text.trim();
    if text.is_empty() {
        return;
    }
    if !out.is_empty() {
        out.push_str(separator);
    }
    out.push_str(text);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Failure;

    fn text(s: &str) -> MessageInput {
        MessageInput::from(s)
    }

    #[test]
    fn texts_are_separated_by_a_paragraph() {
        assert_eq!(compose([text("A"), text("B")], false), "A\n\nB");
    }

    #[test]
    fn lines_start_a_paragraph_then_use_line_breaks() {
        let composed = compose([text("A"), MessageInput::lines(["x", "y"])], false);
        assert_eq!(composed, format!("A{NEW_PARAGRAPH}x{NEW_LINE}y"));
    }

    #[test]
    fn none_and_empty_entries_are_skipped() {
        let inputs = [None, Some(text("")), Some(text("A"))];
        assert_eq!(compose(inputs, false), "A");
    }

    #[test]
    fn fragments_are_trimmed() {
        assert_eq!(compose([text("  A \n"), text("\tB  ")], false), "A\n\nB");
    }

    #[test]
    fn whitespace_only_text_adds_no_separator() {
        assert_eq!(
            compose([text("A"), text("   "), text("B")], false),
            "A\n\nB"
        );
    }

    #[test]
    fn lines_block_as_first_entry_has_no_leading_separator() {
        assert_eq!(
            compose([MessageInput::lines(["x", "y", "z"])], false),
            "x\ny\nz"
        );
    }

    #[test]
    fn empty_lines_inside_a_block_are_skipped() {
        let composed = compose(
            [text("A"), MessageInput::lines(["", "x", "  ", "y"]), text("B")],
            false,
        );
        assert_eq!(composed, "A\n\nx\ny\n\nB");
    }

    #[test]
    fn consecutive_line_blocks_are_separated_by_a_paragraph() {
        let composed = compose(
            [MessageInput::lines(["a", "b"]), MessageInput::lines(["c", "d"])],
            false,
        );
        assert_eq!(composed, "a\nb\n\nc\nd");
    }

    #[test]
    fn failures_follow_the_verbose_flag() {
        let failure = Failure::new("top").with_cause("root cause");
        let inputs = [text("Saving failed."), MessageInput::from(failure)];

        assert_eq!(compose(inputs.clone(), false), "Saving failed.\n\ntop");
        assert_eq!(compose(inputs, true), "Saving failed.\n\ntop\nroot cause");
    }

    #[test]
    fn compose_is_deterministic() {
        let inputs = vec![
            text("A"),
            MessageInput::from(Failure::new("f").with_cause("c")),
            MessageInput::lines(["x", "y"]),
        ];
        assert_eq!(compose(inputs.clone(), true), compose(inputs, true));
    }

    #[test]
    fn empty_input_yields_empty_string() {
        assert_eq!(compose(Vec::<MessageInput>::new(), true), "");
    }
}
