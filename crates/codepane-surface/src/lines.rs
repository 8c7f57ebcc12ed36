/// Line counting and gutter rendering.

/// Number of display lines in `text`: newline count plus one.
///
/// The empty string is one line, and a trailing newline produces a final
/// empty line that is still counted.
pub fn line_count(text: &str) -> usize {
    text.bytes().filter(|&b| b == b'\n').count() + 1
}

/// Renders 1-based line numbers as gutter markup.
pub fn gutter_markup(line_count: usize) -> String {
    (1..=line_count)
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join("<br>")
}
