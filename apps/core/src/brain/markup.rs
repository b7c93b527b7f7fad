//! Line conventions shared with the rendering layer.
//!
//! A line wrapped in `**...**` is a heading, a line starting with `• ` or `- `
//! is a bullet, a line wrapped in single `*...*` is an italic footnote, and an
//! empty line is a break. Everything else is plain text.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Heading,
    Bullet,
    Footnote,
    Blank,
    Text,
}

pub fn classify_line(line: &str) -> LineKind {
    if line.is_empty() {
        LineKind::Blank
    } else if line.len() >= 4 && line.starts_with("**") && line.ends_with("**") {
        LineKind::Heading
    } else if line.starts_with("• ") || line.starts_with("- ") {
        LineKind::Bullet
    } else if line.len() >= 2 && line.starts_with('*') && line.ends_with('*') {
        LineKind::Footnote
    } else {
        LineKind::Text
    }
}

/// Every line of `text` with its kind.
pub fn lines(text: &str) -> Vec<(LineKind, &str)> {
    text.split('\n').map(|line| (classify_line(line), line)).collect()
}

/// Inner text of a heading or footnote, the line itself otherwise.
pub fn strip_markers(line: &str) -> &str {
    match classify_line(line) {
        LineKind::Heading => &line[2..line.len() - 2],
        LineKind::Footnote => &line[1..line.len() - 1],
        _ => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_lines() {
        assert_eq!(classify_line("**Recommended Foods:**"), LineKind::Heading);
        assert_eq!(classify_line("• Rest"), LineKind::Bullet);
        assert_eq!(classify_line("- Rest"), LineKind::Bullet);
        assert_eq!(classify_line("*Not medical advice*"), LineKind::Footnote);
        assert_eq!(classify_line(""), LineKind::Blank);
        assert_eq!(classify_line("🍎 **Apple**"), LineKind::Text);
        assert_eq!(classify_line("**"), LineKind::Footnote);
    }

    #[test]
    fn test_strip_markers() {
        assert_eq!(strip_markers("**Steps to follow:**"), "Steps to follow:");
        assert_eq!(strip_markers("*footnote*"), "footnote");
        assert_eq!(strip_markers("• item"), "• item");
    }

    #[test]
    fn test_lines_keeps_blanks() {
        let parsed = lines("**Head**\n\n• a");
        let kinds: Vec<LineKind> = parsed.iter().map(|(k, _)| *k).collect();
        assert_eq!(kinds, vec![LineKind::Heading, LineKind::Blank, LineKind::Bullet]);
    }
}
