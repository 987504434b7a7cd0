//! Shared box drawing characters for diagram rendering
//!
//! This module provides consistent glyphs across the text renderers,
//! supporting both ASCII and Unicode modes.

use super::CharacterSet;

/// Box drawing characters for rendering rectangular shapes
#[derive(Debug, Clone, Copy)]
pub struct BoxChars {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
    /// T-junction pointing right (left end of a separator)
    pub t_right: char,
    /// T-junction pointing left (right end of a separator)
    pub t_left: char,
}

impl BoxChars {
    /// Single-line box for leaf items
    pub fn single(style: CharacterSet) -> Self {
        if style.is_ascii() {
            Self::ascii()
        } else {
            Self::unicode()
        }
    }

    /// Double-line box for containers (visually distinct from leaves)
    pub fn double(style: CharacterSet) -> Self {
        match style {
            CharacterSet::Ascii => Self {
                top_left: '#',
                top_right: '#',
                bottom_left: '#',
                bottom_right: '#',
                horizontal: '=',
                vertical: '#',
                t_right: '#',
                t_left: '#',
            },
            CharacterSet::Unicode => Self {
                top_left: '╔',
                top_right: '╗',
                bottom_left: '╚',
                bottom_right: '╝',
                horizontal: '═',
                vertical: '║',
                t_right: '╠',
                t_left: '╣',
            },
        }
    }

    /// ASCII-only box characters
    pub fn ascii() -> Self {
        Self {
            top_left: '+',
            top_right: '+',
            bottom_left: '+',
            bottom_right: '+',
            horizontal: '-',
            vertical: '|',
            t_right: '+',
            t_left: '+',
        }
    }

    /// Unicode box-drawing characters
    pub fn unicode() -> Self {
        Self {
            top_left: '┌',
            top_right: '┐',
            bottom_left: '└',
            bottom_right: '┘',
            horizontal: '─',
            vertical: '│',
            t_right: '├',
            t_left: '┤',
        }
    }

    /// `┌────┐` spanning `width` inner columns
    pub fn top(&self, width: usize) -> String {
        self.rule(self.top_left, width, self.top_right)
    }

    /// `╠════╣` spanning `width` inner columns
    pub fn separator(&self, width: usize) -> String {
        self.rule(self.t_right, width, self.t_left)
    }

    /// `└────┘` spanning `width` inner columns
    pub fn bottom(&self, width: usize) -> String {
        self.rule(self.bottom_left, width, self.bottom_right)
    }

    /// `│ label │`, one space of padding on each side
    pub fn row(&self, label: &str) -> String {
        format!("{v} {label} {v}", v = self.vertical, label = label)
    }

    fn rule(&self, left: char, width: usize, right: char) -> String {
        let mut line = String::with_capacity(width + 2);
        line.push(left);
        line.extend(std::iter::repeat(self.horizontal).take(width));
        line.push(right);
        line
    }
}

impl Default for BoxChars {
    fn default() -> Self {
        Self::unicode()
    }
}

/// Leading glyphs and connectors for the line diagram
#[derive(Debug, Clone, Copy)]
pub struct LineChars {
    /// Lead-in for functions
    pub function: &'static str,
    /// Lead-in for classes
    pub class: &'static str,
    /// Lead-in for control flow and anything else
    pub branch: &'static str,
    /// Vertical connector bridging a level transition
    pub vertical: char,
    /// Downward arrow between stacked boxes
    pub arrow_down: char,
}

impl LineChars {
    /// Get line characters for the given style
    pub fn new(style: CharacterSet) -> Self {
        if style.is_ascii() {
            Self::ascii()
        } else {
            Self::unicode()
        }
    }

    /// ASCII line characters
    pub fn ascii() -> Self {
        Self {
            function: "+-",
            class: "#=",
            branch: "|-",
            vertical: '|',
            arrow_down: 'v',
        }
    }

    /// Unicode line characters
    pub fn unicode() -> Self {
        Self {
            function: "┌─",
            class: "╔═",
            branch: "├─",
            vertical: '│',
            arrow_down: '↓',
        }
    }
}

impl Default for LineChars {
    fn default() -> Self {
        Self::unicode()
    }
}
