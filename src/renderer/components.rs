/// One level of indentation.
pub const INDENT: &str = "\t";

pub const LINE_TERMINATOR: &str = "\n";

/// Helper for consistent indentation
pub struct IndentationHelper;

impl IndentationHelper {
    pub fn indent_for_depth(depth: usize) -> String {
        INDENT.repeat(depth)
    }
}

/// Appends `text` and the line terminator.
pub fn push_line(output: &mut String, text: &str) {
    output.push_str(text);
    output.push_str(LINE_TERMINATOR);
}

/// The longest prefix of `text` holding at most `max_chars` characters.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
