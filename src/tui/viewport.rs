//! Fixed-size frame normalisation shared by the search and chat views.
//!
//! bubbletea-rs repaints the whole frame on every update. Lines that are
//! shorter than a previous frame would leave stale glyphs behind, so every
//! line is padded to the terminal width and the frame to its height.

use unicode_width::UnicodeWidthChar;

/// Pads or truncates `output` to exactly `height` lines of `width - 1`
/// columns.
///
/// The last column is left free so terminals that auto-wrap at the right
/// margin do not scroll.
pub(crate) fn normalise_viewport(output: &str, width: u16, height: u16) -> String {
    let safe_width = usize::from(width.max(1)).saturating_sub(1).max(1);
    let rows = usize::from(height.max(1));

    let mut lines: Vec<String> = output
        .lines()
        .map(|line| pad_or_truncate_line(line, safe_width))
        .collect();
    lines.truncate(rows);

    let missing = rows.saturating_sub(lines.len());
    let blank = " ".repeat(safe_width);
    lines.extend(std::iter::repeat_with(|| blank.clone()).take(missing));

    let mut normalised = lines.join("\n");
    normalised.push('\n');
    normalised
}

fn pad_or_truncate_line(line: &str, width: usize) -> String {
    let mut output = String::new();
    let mut visible_width = 0_usize;

    for ch in line.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if char_width == 0 {
            output.push(ch);
            continue;
        }
        if visible_width.saturating_add(char_width) > width {
            break;
        }
        output.push(ch);
        visible_width = visible_width.saturating_add(char_width);
    }

    output.push_str(&" ".repeat(width.saturating_sub(visible_width)));
    output
}
