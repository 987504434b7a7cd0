//! Python source analyzer
//!
//! Statements are recognised on logical lines with anchored regexes, and the
//! indentation stack is tracked the same way the Python tokenizer does, so
//! inconsistent dedents are reported instead of silently mis-nesting items.

use anyhow::Result;
use tracing::{debug, span, trace, Level};

use super::lexer::{logical_lines, LogicalLine};
use crate::core::{AnalyzeOptions, Analyzer, DiagramError, Outline, StructureItem};

mod patterns {
    use once_cell::sync::Lazy;
    use regex::Regex;

    pub static FUNCTION: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^(?:async\s+)?def\s+(\w+)").expect("Invalid Python def regex")
    });

    pub static CLASS: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^class\s+(\w+)").expect("Invalid Python class regex"));

    pub static CONDITIONAL: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^(?:if|elif)\b").expect("Invalid Python if regex"));

    pub static FOR_LOOP: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^for\b").expect("Invalid Python for regex"));

    pub static WHILE_LOOP: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^while\b").expect("Invalid Python while regex"));
}

/// What a logical line declares, if anything
#[derive(Debug, Clone, PartialEq, Eq)]
enum Statement {
    Function(String),
    Class(String),
    Conditional,
    ForLoop,
    WhileLoop,
    Plain,
}

fn classify(text: &str) -> Statement {
    if let Some(caps) = patterns::FUNCTION.captures(text) {
        return Statement::Function(caps[1].to_string());
    }
    if let Some(caps) = patterns::CLASS.captures(text) {
        return Statement::Class(caps[1].to_string());
    }
    if patterns::CONDITIONAL.is_match(text) {
        Statement::Conditional
    } else if patterns::FOR_LOOP.is_match(text) {
        Statement::ForLoop
    } else if patterns::WHILE_LOOP.is_match(text) {
        Statement::WhileLoop
    } else {
        Statement::Plain
    }
}

/// Indentation bookkeeping for one pass over the logical lines
#[derive(Debug)]
struct BlockTracker {
    indents: Vec<usize>,
    /// Indentation columns of the enclosing `def`/`class` headers
    scopes: Vec<usize>,
    expect_block: Option<usize>,
}

impl BlockTracker {
    fn new() -> Self {
        Self {
            indents: vec![0],
            scopes: Vec::new(),
            expect_block: None,
        }
    }

    fn current(&self) -> usize {
        self.indents.last().copied().unwrap_or(0)
    }

    /// Validate the line's indentation and return its nesting level
    fn enter(&mut self, line: &LogicalLine) -> Result<usize, DiagramError> {
        let current = self.current();

        if self.expect_block.take().is_some() {
            if line.indent <= current {
                return Err(DiagramError::analysis_error(
                    "expected an indented block".to_string(),
                    line.lineno,
                ));
            }
            self.indents.push(line.indent);
        } else if line.indent > current {
            return Err(DiagramError::analysis_error(
                "unexpected indent".to_string(),
                line.lineno,
            ));
        } else if line.indent < current {
            while self.current() > line.indent {
                self.indents.pop();
            }
            if self.current() != line.indent {
                return Err(DiagramError::analysis_error(
                    "unindent does not match any outer indentation level".to_string(),
                    line.lineno,
                ));
            }
        }

        while self.scopes.last().is_some_and(|&scope| scope >= line.indent) {
            self.scopes.pop();
        }

        if line.opens_block() {
            self.expect_block = Some(line.lineno);
        }
        Ok(self.scopes.len())
    }

    fn open_scope(&mut self, indent: usize) {
        self.scopes.push(indent);
    }

    fn finish(self) -> Result<(), DiagramError> {
        match self.expect_block {
            Some(lineno) => Err(DiagramError::analysis_error(
                "expected an indented block".to_string(),
                lineno,
            )),
            None => Ok(()),
        }
    }
}

/// Analyzer for Python source files
#[derive(Debug, Clone, Copy, Default)]
pub struct PythonAnalyzer;

impl PythonAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Analyzer for PythonAnalyzer {
    fn analyze(&self, source: &str, options: &AnalyzeOptions) -> Result<Outline> {
        let analyze_span = span!(
            Level::DEBUG,
            "analyze_python",
            source_len = source.len(),
            include_control_flow = options.include_control_flow
        );
        let _enter = analyze_span.enter();

        let lines = logical_lines(source)?;
        debug!(logical_lines = lines.len(), "Source split into logical lines");

        let mut tracker = BlockTracker::new();
        let mut outline = Outline::new();

        for line in &lines {
            let level = tracker.enter(line)?;
            let item = match classify(&line.text) {
                Statement::Function(name) => {
                    tracker.open_scope(line.indent);
                    Some(StructureItem::function(name, level, line.lineno))
                }
                Statement::Class(name) => {
                    tracker.open_scope(line.indent);
                    Some(StructureItem::class(name, level, line.lineno))
                }
                Statement::Conditional if options.include_control_flow => {
                    Some(StructureItem::conditional(level, line.lineno))
                }
                Statement::ForLoop if options.include_control_flow => {
                    Some(StructureItem::for_loop(level, line.lineno))
                }
                Statement::WhileLoop if options.include_control_flow => {
                    Some(StructureItem::while_loop(level, line.lineno))
                }
                Statement::Conditional
                | Statement::ForLoop
                | Statement::WhileLoop
                | Statement::Plain => None,
            };

            if let Some(item) = item {
                trace!(kind = %item.kind, name = %item.name, level, line = line.lineno, "Structural item");
                outline.push(item);
            }
        }
        tracker.finish()?;

        debug!(items = outline.len(), "Python analysis complete");
        Ok(outline)
    }

    fn name(&self) -> &'static str {
        "python"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["py", "pyi", "pyw"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ItemKind;
    use std::path::Path;

    fn analyze(source: &str, control_flow: bool) -> Outline {
        PythonAnalyzer::new()
            .analyze(source, &AnalyzeOptions::new(control_flow))
            .unwrap()
    }

    fn summary(outline: &Outline) -> Vec<(ItemKind, String, usize, usize)> {
        outline
            .iter()
            .map(|i| (i.kind, i.name.clone(), i.level, i.position))
            .collect()
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("def run(self):"), Statement::Function("run".to_string()));
        assert_eq!(classify("async def fetch():"), Statement::Function("fetch".to_string()));
        assert_eq!(classify("class Foo(Base):"), Statement::Class("Foo".to_string()));
        assert_eq!(classify("elif x:"), Statement::Conditional);
        assert_eq!(classify("if(x):"), Statement::Conditional);
        assert_eq!(classify("for i in range(3):"), Statement::ForLoop);
        assert_eq!(classify("while True:"), Statement::WhileLoop);
        assert_eq!(classify("iffy = 1"), Statement::Plain);
        assert_eq!(classify("define = 2"), Statement::Plain);
        assert_eq!(classify("classes = []"), Statement::Plain);
    }

    #[test]
    fn test_class_and_methods() {
        let source = "\
class Foo:
    def bar(self):
        pass

    def baz(self):
        return 1


def main():
    Foo().bar()
";
        let outline = analyze(source, false);
        assert_eq!(
            summary(&outline),
            vec![
                (ItemKind::Class, "Foo".to_string(), 0, 1),
                (ItemKind::Function, "bar".to_string(), 1, 2),
                (ItemKind::Function, "baz".to_string(), 1, 5),
                (ItemKind::Function, "main".to_string(), 0, 9),
            ]
        );
    }

    #[test]
    fn test_byte_order_mark_keeps_class_nesting() {
        let source = "\u{feff}class A:\n    def f(self):\n        pass\n    def g(self):\n        pass\n";
        let outline = analyze(source, false);
        assert_eq!(
            summary(&outline),
            vec![
                (ItemKind::Class, "A".to_string(), 0, 1),
                (ItemKind::Function, "f".to_string(), 1, 2),
                (ItemKind::Function, "g".to_string(), 1, 4),
            ]
        );

        let outline = analyze("\u{feff}def f():\n    pass\n", false);
        assert_eq!(summary(&outline), vec![(ItemKind::Function, "f".to_string(), 0, 1)]);
    }

    #[test]
    fn test_control_flow_excluded_by_default() {
        let source = "def f(x):\n    if x:\n        for i in x:\n            pass\n";
        let outline = analyze(source, false);
        assert_eq!(outline.len(), 1);
    }

    #[test]
    fn test_control_flow_does_not_nest() {
        let source = "\
def f(x):
    if x:
        for i in x:
            while i:
                i -= 1
    elif x is None:
        def inner():
            pass
";
        let outline = analyze(source, true);
        assert_eq!(
            summary(&outline),
            vec![
                (ItemKind::Function, "f".to_string(), 0, 1),
                (ItemKind::Conditional, "if statement".to_string(), 1, 2),
                (ItemKind::Loop, "for loop".to_string(), 1, 3),
                (ItemKind::Loop, "while loop".to_string(), 1, 4),
                (ItemKind::Conditional, "if statement".to_string(), 1, 6),
                (ItemKind::Function, "inner".to_string(), 1, 7),
            ]
        );
    }

    #[test]
    fn test_multiline_signature_and_docstring() {
        let source = "\
def f(
    a,
    b,
):
    \"\"\"Docs.

    def fake():
    \"\"\"
    return a


class C: pass
";
        let outline = analyze(source, false);
        assert_eq!(
            summary(&outline),
            vec![
                (ItemKind::Function, "f".to_string(), 0, 1),
                (ItemKind::Class, "C".to_string(), 0, 12),
            ]
        );
    }

    #[test]
    fn test_one_line_class_does_not_capture_following_items() {
        let outline = analyze("class A: pass\ndef f():\n    pass\n", false);
        assert_eq!(outline.get(1).map(|i| i.level), Some(0));
    }

    #[test]
    fn test_decorated_function() {
        let outline = analyze("@cache\ndef f():\n    pass\n", false);
        assert_eq!(summary(&outline), vec![(ItemKind::Function, "f".to_string(), 0, 2)]);
    }

    #[test]
    fn test_empty_source() {
        assert!(analyze("", true).is_empty());
        assert!(analyze("# only a comment\n\n", true).is_empty());
    }

    #[test]
    fn test_unexpected_indent() {
        let err = PythonAnalyzer::new()
            .analyze("x = 1\n    y = 2\n", &AnalyzeOptions::default())
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("unexpected indent"));
        assert!(msg.contains("line 2"));
    }

    #[test]
    fn test_inconsistent_dedent() {
        let source = "def f():\n        x = 1\n    y = 2\n";
        let err = PythonAnalyzer::new()
            .analyze(source, &AnalyzeOptions::default())
            .unwrap_err();
        match err.downcast_ref::<DiagramError>() {
            Some(DiagramError::AnalysisError { line, .. }) => assert_eq!(*line, 3),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_missing_block() {
        assert!(PythonAnalyzer::new()
            .analyze("def f():\nx = 1\n", &AnalyzeOptions::default())
            .is_err());
        assert!(PythonAnalyzer::new()
            .analyze("class A:\n", &AnalyzeOptions::default())
            .is_err());
    }

    #[test]
    fn test_can_analyze() {
        let analyzer = PythonAnalyzer::new();
        assert!(analyzer.can_analyze(Path::new("app.py")));
        assert!(analyzer.can_analyze(Path::new("stubs/mod.pyi")));
        assert!(!analyzer.can_analyze(Path::new("main.rs")));
        assert!(!analyzer.can_analyze(Path::new("Makefile")));
    }
}
