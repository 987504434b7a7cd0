//! Shared text utilities for diagram rendering
//!
//! Headings, fences and width helpers used by every renderer.

use unicode_width::UnicodeWidthStr;

/// Placeholder emitted in place of a diagram for an empty outline
pub const NO_STRUCTURE: &str = "(No structure detected)";

/// Markdown code fence
pub const FENCE: &str = "```";

/// Display width of a label in terminal columns
///
/// Box borders are sized from this so that wide characters (CJK, emoji)
/// still line up with their frame.
pub fn display_width(label: &str) -> usize {
    UnicodeWidthStr::width(label)
}

/// `unit` repeated once per nesting level
pub fn indent(level: usize, unit: &str) -> String {
    unit.repeat(level)
}

/// `# Code Structure: <title>` followed by a blank line
pub fn plain_heading(title: &str) -> Vec<String> {
    vec![format!("# Code Structure: {}", title), String::new()]
}

/// Lines for an empty outline inside an open fence
pub fn placeholder_block() -> Vec<String> {
    vec![
        FENCE.to_string(),
        NO_STRUCTURE.to_string(),
        FENCE.to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_width_ascii() {
        assert_eq!(display_width("CLASS: Foo"), 10);
    }

    #[test]
    fn test_display_width_wide_chars() {
        // CJK characters take two columns each
        assert_eq!(display_width("日本"), 4);
    }

    #[test]
    fn test_indent() {
        assert_eq!(indent(0, "  "), "");
        assert_eq!(indent(3, "  "), "      ");
        assert_eq!(indent(2, "    "), "        ");
    }

    #[test]
    fn test_plain_heading() {
        assert_eq!(
            plain_heading("app.py"),
            vec!["# Code Structure: app.py".to_string(), String::new()]
        );
    }

    #[test]
    fn test_placeholder_block() {
        assert_eq!(placeholder_block().join("\n"), "```\n(No structure detected)\n```");
    }
}
