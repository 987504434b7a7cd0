//! Tests for core error types

use codeframe::core::DiagramError;
use codeframe::{analyze_python, render, DiagramStyle, Outline, StructureItem};

#[test]
fn test_invalid_outline() {
    let error = DiagramError::invalid_outline("missing field `level`".to_string());
    let error_msg = format!("{}", error);
    assert!(error_msg.contains("Invalid outline"));
    assert!(error_msg.contains("missing field `level`"));
}

#[test]
fn test_analysis_error() {
    let error = DiagramError::analysis_error("unexpected indent".to_string(), 12);
    assert_eq!(error.to_string(), "Analysis error: unexpected indent at line 12");
}

#[test]
fn test_render_error() {
    let error = DiagramError::render_error("Render failed".to_string());
    let error_msg = format!("{}", error);
    assert!(error_msg.contains("Render error"));
    assert!(error_msg.contains("Render failed"));
}

#[test]
fn test_unknown_analyzer() {
    let error = DiagramError::UnknownAnalyzer {
        name: "cobol".to_string(),
    };
    assert_eq!(error.to_string(), "Unknown analyzer: cobol");
}

#[test]
fn test_io_error_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let error: DiagramError = io.into();
    assert!(matches!(error, DiagramError::IoError { .. }));
    assert!(error.to_string().contains("gone"));
}

#[test]
fn test_json_syntax_error() {
    let error = Outline::from_json("[{").unwrap_err();
    assert!(matches!(error, DiagramError::JsonError { .. }));
}

#[test]
fn test_json_shape_errors_are_invalid_outline() {
    for input in [
        r#"[{"type": "function", "name": "f", "level": -1, "lineno": 1}]"#,
        r#"[{"type": "function", "name": "f", "level": 1.5, "lineno": 1}]"#,
        r#"[{"type": "function", "name": "f", "lineno": 1}]"#,
        r#"{"type": "function"}"#,
    ] {
        let error = Outline::from_json(input).unwrap_err();
        assert!(
            matches!(error, DiagramError::InvalidOutline { .. }),
            "{} gave {:?}",
            input,
            error
        );
    }
}

#[test]
fn test_multiline_name_fails_fast_in_every_renderer() {
    let outline = Outline::from_items(vec![StructureItem::class("Two\rLines", 0, 1)]);
    for &style in DiagramStyle::all() {
        let error = render(&outline, "bad.py", style).unwrap_err();
        assert!(
            matches!(
                error.downcast_ref::<DiagramError>(),
                Some(DiagramError::InvalidOutline { .. })
            ),
            "{} did not reject the outline",
            style
        );
    }
}

#[test]
fn test_analysis_error_downcasts() {
    let error = analyze_python("def f():\n  x = 1\n y = 2\n", false).unwrap_err();
    match error.downcast_ref::<DiagramError>() {
        Some(DiagramError::AnalysisError { line, message }) => {
            assert_eq!(*line, 3);
            assert!(message.contains("unindent"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}
