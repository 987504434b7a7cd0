//! Terminal colorization for diagram output
//!
//! Applies ANSI escape codes to diagram elements using crossterm. Stripping
//! the escape codes again always yields the uncolored input.

use crossterm::style::{Color, Stylize};

/// Item tags and edge tokens, matched before single glyphs
const TOKENS: &[(&str, Color)] = &[
    ("[FUNCTION]", Color::Green),
    ("[CLASS]", Color::Magenta),
    ("CLASS:", Color::Magenta),
    ("[IF]", Color::Yellow),
    ("[LOOP]", Color::Yellow),
    ("-.->", Color::Yellow),
    ("-->", Color::Yellow),
];

fn paint(text: &str, color: Color) -> String {
    format!("{}", text.to_string().with(color))
}

/// Colorize rendered diagram output
///
/// - Box-drawing glyphs (Unicode and ASCII frames): Cyan
/// - Arrows and flow connectors: Yellow
/// - `[FUNCTION]` tags: Green
/// - `[CLASS]` / `CLASS:` tags: Magenta
/// - `[IF]` / `[LOOP]` tags: Yellow
/// - Headings and labels: Default (terminal color)
pub fn colorize_output(input: &str) -> String {
    let mut result = String::with_capacity(input.len() * 2);

    for line in input.lines() {
        if is_heading(line) {
            result.push_str(line);
        } else if is_arrow_line(line) {
            let trimmed = line.trim_start();
            result.push_str(&line[..line.len() - trimmed.len()]);
            result.push_str(&paint(trimmed, Color::Yellow));
        } else {
            colorize_line(line, &mut result);
        }
        result.push('\n');
    }

    // Remove trailing newline to match input format
    if !input.ends_with('\n') && result.ends_with('\n') {
        result.pop();
    }

    result
}

fn colorize_line(line: &str, out: &mut String) {
    let mut rest = line;
    while let Some(c) = rest.chars().next() {
        if let Some((token, color)) = TOKENS.iter().find(|(token, _)| rest.starts_with(token)) {
            out.push_str(&paint(token, *color));
            rest = &rest[token.len()..];
            continue;
        }

        match glyph_color(line, c) {
            Some(color) => out.push_str(&paint(&c.to_string(), color)),
            None => out.push(c),
        }
        rest = &rest[c.len_utf8()..];
    }
}

fn glyph_color(line: &str, c: char) -> Option<Color> {
    match c {
        '┌' | '┐' | '└' | '┘' | '├' | '┤' | '─' | '│' | '╔' | '╗' | '╚' | '╝' | '╠' | '╣'
        | '═' | '║' => Some(Color::Cyan),
        '↓' => Some(Color::Yellow),
        '+' | '-' | '|' | '#' | '=' if is_frame_context(line, c) => Some(Color::Cyan),
        _ => None,
    }
}

/// Markdown headings carry `#` but are not frames
fn is_heading(line: &str) -> bool {
    line.starts_with("# Code Structure:") || line.starts_with("##") || line.starts_with("```")
}

/// Connector lines of the flow diagram (`  v`, `  +---->`)
fn is_arrow_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed == "v" || (trimmed.starts_with("+--") && trimmed.ends_with('>'))
}

/// Check if a character is likely part of a frame vs text content
fn is_frame_context(line: &str, c: char) -> bool {
    let trimmed = line.trim();
    match c {
        '+' | '-' => {
            trimmed.contains("---") || trimmed.contains("+-") || trimmed.contains("-+")
        }
        '|' => trimmed.starts_with('|') || trimmed.ends_with('|'),
        '#' | '=' => {
            trimmed.contains("#=")
                || trimmed.contains("=#")
                || (trimmed.starts_with('#') && trimmed.ends_with('#'))
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip_ansi(input: &str) -> String {
        let mut out = String::new();
        let mut in_escape = false;
        for c in input.chars() {
            if in_escape {
                if c == 'm' {
                    in_escape = false;
                }
            } else if c == '\x1b' {
                in_escape = true;
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn test_colorize_preserves_content() {
        let input = "╔═════╗\n║ Foo ║\n╠═════╣\n  ↓\n  ┌───────┐\n  │ bar() │\n  └───────┘\n╚═════╝";
        let output = colorize_output(input);
        assert!(output.contains("\x1b["));
        assert_eq!(strip_ansi(&output), input);
    }

    #[test]
    fn test_colorize_line_diagram_tags() {
        let input = "```\n╔═ [CLASS] Foo\n  ┌─ [FUNCTION] bar()\n```\n";
        let output = colorize_output(input);
        assert!(output.contains(&paint("[CLASS]", Color::Magenta)));
        assert!(output.contains(&paint("[FUNCTION]", Color::Green)));
        assert_eq!(strip_ansi(&output), input);
    }

    #[test]
    fn test_headings_left_alone() {
        let input = "# Code Structure: app.py\n## Code Structure: app.py\n### 📚 Components";
        assert_eq!(colorize_output(input), input);
    }

    #[test]
    fn test_ascii_frames_and_arrows() {
        let input = "+-----+\n| a() |\n+-----+\n  |\n  v\n  +---->\n#=====#\n# Foo #";
        let output = colorize_output(input);
        assert!(output.contains(&paint("v", Color::Yellow)));
        assert!(output.contains(&paint("+---->", Color::Yellow)));
        assert_eq!(strip_ansi(&output), input);
    }

    #[test]
    fn test_hyphenated_labels_uncolored() {
        let input = "[-----------]\n| my-helper |";
        let output = colorize_output(input);
        assert!(output.contains("my-helper"));
    }

    #[test]
    fn test_mermaid_edges() {
        let input = "    N0 --> N1\n    N1 -.-> N2";
        let output = colorize_output(input);
        assert!(output.contains(&paint("-->", Color::Yellow)));
        assert!(output.contains(&paint("-.->", Color::Yellow)));
        assert_eq!(strip_ansi(&output), input);
    }

    #[test]
    fn test_no_trailing_newline() {
        let input = "test";
        let output = colorize_output(input);
        assert!(!output.ends_with('\n'));
    }
}
