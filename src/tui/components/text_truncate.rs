//! Width-aware truncation for single-line rows.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

enum WidthTruncationDecision {
    Empty,
    Unchanged,
    DotFallback,
    Ellipsis,
}

fn width_truncation_decision(text: &str, max_width: usize) -> WidthTruncationDecision {
    if max_width == 0 {
        WidthTruncationDecision::Empty
    } else if text.width() <= max_width {
        WidthTruncationDecision::Unchanged
    } else if max_width <= 3 {
        WidthTruncationDecision::DotFallback
    } else {
        WidthTruncationDecision::Ellipsis
    }
}

/// Truncates text to the provided display width and appends an ellipsis.
///
/// Width is measured in terminal columns, not Unicode scalar count.
pub(crate) fn truncate_to_display_width_with_ellipsis(text: &str, max_width: usize) -> String {
    match width_truncation_decision(text, max_width) {
        WidthTruncationDecision::Empty => String::new(),
        WidthTruncationDecision::Unchanged => text.to_owned(),
        WidthTruncationDecision::DotFallback => ".".repeat(max_width),
        WidthTruncationDecision::Ellipsis => {
            let target_width = max_width.saturating_sub(3);
            let mut truncated = String::new();
            let mut current_width = 0_usize;
            for ch in text.chars() {
                let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
                if current_width.saturating_add(char_width) > target_width {
                    break;
                }
                truncated.push(ch);
                current_width = current_width.saturating_add(char_width);
            }
            format!("{truncated}...")
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("hello", 10, "hello")]
    #[case("abcdef", 0, "")]
    #[case("abcdef", 2, "..")]
    #[case("abcdef", 3, "...")]
    #[case("Vintage camera", 10, "Vintage...")]
    #[case("你好世界", 5, "你...")]
    fn truncates_by_display_width(
        #[case] text: &str,
        #[case] width: usize,
        #[case] expected: &str,
    ) {
        assert_eq!(truncate_to_display_width_with_ellipsis(text, width), expected);
    }
}
