//! Logical-line splitter for Python source
//!
//! Physical lines are merged into logical lines the way the Python tokenizer
//! does it: open brackets, trailing backslashes and triple-quoted strings all
//! continue the statement onto the next physical line. Comments are dropped
//! and blank lines produce nothing.

use crate::core::DiagramError;

const TAB_STOP: usize = 8;

/// One Python statement, possibly spanning several physical lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    /// 1-based line on which the statement starts
    pub lineno: usize,
    /// Indentation column, tabs expanded to the next multiple of 8
    pub indent: usize,
    /// Statement text without indentation or comments
    pub text: String,
}

impl LogicalLine {
    /// True when the statement opens an indented block
    pub fn opens_block(&self) -> bool {
        self.text.ends_with(':')
    }
}

#[derive(Debug, Clone, Copy)]
struct OpenString {
    quote: char,
    triple: bool,
    line: usize,
}

#[derive(Debug)]
struct Pending {
    lineno: usize,
    indent: usize,
    text: String,
}

#[derive(Debug, Default)]
struct Splitter {
    lines: Vec<LogicalLine>,
    pending: Option<Pending>,
    string: Option<OpenString>,
    depth: usize,
}

fn measure_indent(line: &str) -> (usize, &str) {
    let mut column = 0;
    for (offset, ch) in line.char_indices() {
        match ch {
            ' ' => column += 1,
            '\t' => column = (column / TAB_STOP + 1) * TAB_STOP,
            '\x0c' => column = 0,
            _ => return (column, &line[offset..]),
        }
    }
    (column, "")
}

impl Splitter {
    fn feed(&mut self, lineno: usize, physical: &str) -> Result<(), DiagramError> {
        let body = match self.pending.as_mut() {
            Some(pending) => {
                pending
                    .text
                    .push(if self.string.is_some() { '\n' } else { ' ' });
                physical
            }
            None => {
                let (indent, rest) = measure_indent(physical);
                if rest.is_empty() || rest.starts_with('#') {
                    return Ok(());
                }
                self.pending = Some(Pending {
                    lineno,
                    indent,
                    text: String::new(),
                });
                rest
            }
        };

        let chars: Vec<char> = body.chars().collect();
        let mut text = String::with_capacity(body.len());
        let mut backslash_continuation = false;
        let mut i = 0;

        while i < chars.len() {
            let ch = chars[i];
            match self.string {
                Some(open) => {
                    if ch == '\\' {
                        text.push(ch);
                        if let Some(&escaped) = chars.get(i + 1) {
                            text.push(escaped);
                            i += 2;
                        } else {
                            backslash_continuation = true;
                            i += 1;
                        }
                        continue;
                    }
                    let closes = if open.triple {
                        chars.get(i..i + 3).is_some_and(|s| s.iter().all(|&c| c == open.quote))
                    } else {
                        ch == open.quote
                    };
                    if closes {
                        let width = if open.triple { 3 } else { 1 };
                        text.extend(std::iter::repeat(open.quote).take(width));
                        self.string = None;
                        i += width;
                    } else {
                        text.push(ch);
                        i += 1;
                    }
                }
                None => match ch {
                    '#' => break,
                    '"' | '\'' => {
                        let triple = chars.get(i..i + 3).is_some_and(|s| s.iter().all(|&c| c == ch));
                        let width = if triple { 3 } else { 1 };
                        text.extend(std::iter::repeat(ch).take(width));
                        self.string = Some(OpenString {
                            quote: ch,
                            triple,
                            line: lineno,
                        });
                        i += width;
                    }
                    '\\' if i + 1 == chars.len() => {
                        backslash_continuation = true;
                        i += 1;
                    }
                    '(' | '[' | '{' => {
                        self.depth += 1;
                        text.push(ch);
                        i += 1;
                    }
                    ')' | ']' | '}' => {
                        self.depth = self.depth.saturating_sub(1);
                        text.push(ch);
                        i += 1;
                    }
                    _ => {
                        text.push(ch);
                        i += 1;
                    }
                },
            }
        }

        if let Some(open) = self.string {
            if !open.triple && !backslash_continuation {
                return Err(DiagramError::analysis_error(
                    "unterminated string literal".to_string(),
                    open.line,
                ));
            }
        }

        if let Some(pending) = self.pending.as_mut() {
            pending.text.push_str(&text);
        }

        let continues = self.string.is_some() || self.depth > 0 || backslash_continuation;
        if !continues {
            self.flush();
        }
        Ok(())
    }

    fn flush(&mut self) {
        if let Some(pending) = self.pending.take() {
            let text = pending.text.trim_end().to_string();
            if !text.is_empty() {
                self.lines.push(LogicalLine {
                    lineno: pending.lineno,
                    indent: pending.indent,
                    text,
                });
            }
        }
    }

    fn finish(mut self) -> Result<Vec<LogicalLine>, DiagramError> {
        if let Some(open) = self.string {
            return Err(DiagramError::analysis_error(
                "unterminated triple-quoted string literal".to_string(),
                open.line,
            ));
        }
        if let Some(pending) = &self.pending {
            return Err(DiagramError::analysis_error(
                "unexpected end of file inside a statement".to_string(),
                pending.lineno,
            ));
        }
        self.flush();
        Ok(self.lines)
    }
}

/// Split `source` into logical lines
pub fn logical_lines(source: &str) -> Result<Vec<LogicalLine>, DiagramError> {
    // Editors on Windows often save UTF-8 with a byte order mark
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let mut splitter = Splitter::default();
    for (index, physical) in source.lines().enumerate() {
        splitter.feed(index + 1, physical)?;
    }
    splitter.finish()
}
