//! TUI Widgets
//!
//! Custom widgets for the EntreSupport TUI.

mod landing;
mod progress;
mod report;

pub use landing::landing_lines;
pub use progress::render_progress;
pub use report::report_lines;

/// Word-wrap `text` to `width` columns; words longer than a line are split
pub(crate) fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_len = 0usize;

        for word in paragraph.split_whitespace() {
            let mut chars: Vec<char> = word.chars().collect();

            if current_len > 0 && current_len + 1 + chars.len() <= width {
                current.push(' ');
                current.extend(&chars);
                current_len += 1 + chars.len();
                continue;
            }
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            while chars.len() > width {
                let rest = chars.split_off(width);
                lines.push(chars.into_iter().collect());
                chars = rest;
            }
            current_len = chars.len();
            current = chars.into_iter().collect();
        }

        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::wrap;

    #[test]
    fn test_wrap_words() {
        assert_eq!(wrap("the quick brown fox", 10), vec!["the quick", "brown fox"]);
    }

    #[test]
    fn test_wrap_splits_long_words() {
        assert_eq!(wrap("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_keeps_blank_lines() {
        assert_eq!(wrap("a\n\nb", 10), vec!["a", "", "b"]);
        assert_eq!(wrap("", 10), vec![""]);
    }
}
