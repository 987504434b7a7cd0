//! Command-line interface for the codeframe utility
//!
//! Provides a CLI to render the structure of Python source files as line,
//! box, ASCII-art or Mermaid diagrams.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::colorizer::colorize_output;
use codeframe::core::logging::init_logging;
use codeframe::plugins::Orchestrator;
use codeframe::{AnalyzeOptions, CharacterSet, DiagramError, DiagramStyle, Outline, RenderConfig};

/// Codeframe - Render code structure as text diagrams
#[derive(Parser)]
#[command(name = "codeframe")]
#[command(about = "Generate ASCII and Mermaid diagrams of Python code structure")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error|off)
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,
}

/// Log level options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Off,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Off => "off",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a diagram of a source file's structure
    Render(RenderArgs),

    /// Print the extracted outline as JSON
    Outline {
        /// Source file to analyze (use - for stdin)
        input: PathBuf,

        /// Output file for the JSON outline (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Include if statements and loops
        #[arg(long)]
        include_control_flow: bool,
    },

    /// Show supported diagram styles
    Styles {
        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },
}

/// Arguments of the `render` command
#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Source file to analyze (use - for stdin)
    pub input: PathBuf,

    /// Output markdown file (default: <input>_structure.md, use - for stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Include if statements and loops in the diagram
    #[arg(long)]
    pub include_control_flow: bool,

    #[command(flatten)]
    pub style: StyleFlags,

    /// Character set for line and box diagrams
    #[arg(long, value_enum, default_value_t = CharsetChoice::Unicode)]
    pub charset: CharsetChoice,

    /// Treat the input as an outline JSON file instead of source code
    #[arg(long)]
    pub from_outline: bool,

    /// When to use colors in output
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,
}

/// Mutually exclusive diagram style switches
#[derive(Args, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[group(multiple = false)]
pub struct StyleFlags {
    /// Use line-style diagram (default)
    #[arg(short = 'l', long)]
    pub line: bool,

    /// Use box-style diagram with nested boxes
    #[arg(short = 'b', long = "box")]
    pub boxed: bool,

    /// Use ASCII art style with horizontal flow
    #[arg(short = 'a', long)]
    pub ascii_art: bool,

    /// Use GitHub README format with a Mermaid diagram
    #[arg(short = 'g', long = "github", visible_alias = "graph")]
    pub github: bool,
}

impl StyleFlags {
    pub fn style(&self) -> DiagramStyle {
        if self.boxed {
            DiagramStyle::Box
        } else if self.ascii_art {
            DiagramStyle::AsciiArt
        } else if self.github {
            DiagramStyle::GithubGraph
        } else {
            DiagramStyle::Line
        }
    }
}

/// Supported output character sets
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum CharsetChoice {
    Ascii,
    Unicode,
}

impl From<CharsetChoice> for CharacterSet {
    fn from(value: CharsetChoice) -> Self {
        match value {
            CharsetChoice::Ascii => CharacterSet::Ascii,
            CharsetChoice::Unicode => CharacterSet::Unicode,
        }
    }
}

/// When to colorize output
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Use colors if output is a terminal and NO_COLOR is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Where a command's result goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

impl Destination {
    /// Progress messages must not interleave with a diagram on stdout
    fn announce(&self, message: &str) {
        match self {
            Destination::Stdout => eprintln!("{}", message),
            Destination::File(_) => println!("{}", message),
        }
    }
}

fn is_stdio(path: &Path) -> bool {
    path.to_string_lossy() == "-"
}

/// `<stem>_structure.md` next to the input
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    input.with_file_name(format!("{}_structure.md", stem))
}

/// Diagram title: the input's file name, or `stdin`
fn title_for(input: &Path) -> String {
    if is_stdio(input) {
        return "stdin".to_string();
    }
    input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.display().to_string())
}

/// Main CLI application
pub struct CodeframeApp {
    orchestrator: Orchestrator,
}

impl CodeframeApp {
    /// Create a new application instance with default settings
    pub fn new() -> Self {
        Self::with_config(RenderConfig::default())
    }

    /// Create a new application instance with a render config
    pub fn with_config(config: RenderConfig) -> Self {
        Self {
            orchestrator: Orchestrator::with_config(config),
        }
    }

    /// Run the application with the given CLI arguments
    pub fn run(&mut self, cli: Cli) -> Result<()> {
        // Explicit flags win; otherwise init_logging consults the environment
        let log_level = cli
            .log_level
            .map(|level| level.as_str())
            .or(if cli.verbose { Some("info") } else { None });
        let log_format = cli.log_format.map(|format| format.as_str());

        if let Err(e) = init_logging(log_level, log_format) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("Codeframe v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Render(args) => self.render_command(args, cli.verbose),
            Commands::Outline {
                input,
                output,
                include_control_flow,
            } => self.outline_command(input, output, include_control_flow, cli.verbose),
            Commands::Styles { json } => self.styles_command(json, cli.verbose),
        }
    }

    /// Handle the render command
    fn render_command(&mut self, args: RenderArgs, verbose: bool) -> Result<()> {
        self.orchestrator = Orchestrator::with_config(RenderConfig::new(args.charset.into()));

        let destination = match &args.output {
            Some(path) if is_stdio(path) => Destination::Stdout,
            Some(path) => Destination::File(path.clone()),
            None if is_stdio(&args.input) => Destination::Stdout,
            None => Destination::File(default_output_path(&args.input)),
        };

        let outline = if args.from_outline {
            destination.announce(&format!("Loading outline {}...", args.input.display()));
            let content = self.read_input(&args.input)?;
            Outline::from_json(&content)?
        } else {
            self.warn_if_not_python(&args.input);
            destination.announce(&format!("Analyzing {}...", args.input.display()));
            self.analyze(&args.input, args.include_control_flow)?
        };

        if verbose {
            eprintln!("Extracted {} structural elements", outline.len());
        }

        let style = args.style.style();
        let diagram = self
            .orchestrator
            .render(&outline, &title_for(&args.input), style)?;
        debug!(%style, output_len = diagram.len(), "Diagram rendered");

        let final_output = if self.should_colorize(&destination, args.color) {
            colorize_output(&diagram)
        } else {
            diagram
        };
        self.write_output(&destination, &final_output)?;

        if let Destination::File(path) = &destination {
            destination.announce(&format!("Diagram saved to {}", path.display()));
        }
        destination.announce(&format!("Found {} structural elements", outline.len()));
        Ok(())
    }

    /// Handle the outline command
    fn outline_command(
        &self,
        input: PathBuf,
        output: Option<PathBuf>,
        include_control_flow: bool,
        verbose: bool,
    ) -> Result<()> {
        let destination = match output {
            Some(path) if !is_stdio(&path) => Destination::File(path),
            _ => Destination::Stdout,
        };

        self.warn_if_not_python(&input);
        let outline = self.analyze(&input, include_control_flow)?;
        if verbose {
            eprintln!("Extracted {} structural elements", outline.len());
        }

        self.write_output(&destination, &outline.to_json()?)?;
        eprintln!("Found {} structural elements", outline.len());
        Ok(())
    }

    /// Handle the styles command
    fn styles_command(&self, json: bool, verbose: bool) -> Result<()> {
        if verbose {
            eprintln!("Listing supported diagram styles");
        }

        let styles = DiagramStyle::all();
        if json {
            let entries: Vec<_> = styles
                .iter()
                .map(|style| {
                    serde_json::json!({
                        "name": style.to_string(),
                        "description": style.description(),
                        "default": *style == DiagramStyle::default(),
                    })
                })
                .collect();
            let listing = serde_json::json!({
                "supported_styles": entries,
                "total": styles.len(),
            });
            println!("{}", serde_json::to_string_pretty(&listing)?);
        } else {
            println!("Supported diagram styles:");
            for style in styles {
                println!("  {:<13} - {}", style.to_string(), style.description());
            }
            println!();
            println!("Total: {} diagram styles supported", styles.len());
        }

        Ok(())
    }

    fn warn_if_not_python(&self, input: &Path) {
        if !is_stdio(input) && input.extension().and_then(|ext| ext.to_str()) != Some("py") {
            eprintln!("Warning: '{}' is not a .py file", input.display());
        }
    }

    fn analyze(&self, input: &Path, include_control_flow: bool) -> Result<Outline> {
        let source = self.read_input(input)?;
        // stdin has no extension to pick an analyzer by
        let analysis_path = if is_stdio(input) {
            Path::new("stdin.py")
        } else {
            input
        };
        self.orchestrator.analyze(
            &source,
            analysis_path,
            &AnalyzeOptions::new(include_control_flow),
        )
    }

    /// Determine if we should colorize the output based on color choice and output destination
    fn should_colorize(&self, destination: &Destination, color: ColorChoice) -> bool {
        match color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                match destination {
                    Destination::Stdout => crossterm::tty::IsTty::is_tty(&std::io::stdout()),
                    Destination::File(_) => false,
                }
            }
        }
    }

    /// Read input from file or stdin
    pub fn read_input(&self, input: &Path) -> Result<String> {
        if is_stdio(input) {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .map_err(DiagramError::from)
                .context("Failed to read standard input")?;
            return Ok(content);
        }
        if !input.exists() {
            bail!("File '{}' not found", input.display());
        }
        fs::read_to_string(input)
            .map_err(DiagramError::from)
            .with_context(|| format!("Failed to read input file '{}'", input.display()))
    }

    /// Write output to file or stdout
    pub fn write_output(&self, destination: &Destination, content: &str) -> Result<()> {
        match destination {
            Destination::Stdout => {
                let mut stdout = io::stdout().lock();
                let mut emit = || -> io::Result<()> {
                    stdout.write_all(content.as_bytes())?;
                    if !content.is_empty() && !content.ends_with('\n') {
                        stdout.write_all(b"\n")?;
                    }
                    stdout.flush()
                };
                emit()
                    .map_err(DiagramError::from)
                    .context("Failed to write standard output")?;
            }
            Destination::File(path) => {
                fs::write(path, content)
                    .map_err(DiagramError::from)
                    .with_context(|| format!("Failed to write output file '{}'", path.display()))?;
            }
        }
        Ok(())
    }

    /// Get a reference to the orchestrator (for testing)
    #[cfg(test)]
    pub fn orchestrator(&self) -> &Orchestrator {
        &self.orchestrator
    }
}

impl Default for CodeframeApp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use clap::Parser;
    use std::fs;
    use tempfile::tempdir;

    const SAMPLE: &str = "class Foo:\n    def bar(self):\n        pass\n\n\ndef main():\n    pass\n";

    fn run(args: &[&str]) -> Result<()> {
        let cli = Cli::try_parse_from(args).map_err(|e| anyhow!(e.to_string()))?;
        CodeframeApp::new().run(cli)
    }

    #[test]
    fn test_cli_parsing_render_command() {
        let args = vec![
            "codeframe",
            "render",
            "app.py",
            "--output",
            "out.md",
            "-b",
            "--charset",
            "ascii",
            "--include-control-flow",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Render(args) => {
                assert_eq!(args.input.to_string_lossy(), "app.py");
                assert_eq!(args.output.unwrap().to_string_lossy(), "out.md");
                assert_eq!(args.style.style(), DiagramStyle::Box);
                assert_eq!(args.charset, CharsetChoice::Ascii);
                assert!(args.include_control_flow);
                assert!(!args.from_outline);
                assert_eq!(args.color, ColorChoice::Auto); // default
            }
            _ => panic!("Expected Render command"),
        }
    }

    #[test]
    fn test_default_style_is_line() {
        let cli = Cli::try_parse_from(["codeframe", "render", "app.py"]).unwrap();
        match cli.command {
            Commands::Render(args) => {
                assert_eq!(args.style, StyleFlags::default());
                assert_eq!(args.style.style(), DiagramStyle::Line);
                assert_eq!(args.charset, CharsetChoice::Unicode);
            }
            _ => panic!("Expected Render command"),
        }
    }

    #[test]
    fn test_style_flags() {
        for (flag, expected) in [
            ("-l", DiagramStyle::Line),
            ("-b", DiagramStyle::Box),
            ("-a", DiagramStyle::AsciiArt),
            ("-g", DiagramStyle::GithubGraph),
            ("--github", DiagramStyle::GithubGraph),
            ("--graph", DiagramStyle::GithubGraph),
            ("--ascii-art", DiagramStyle::AsciiArt),
        ] {
            let cli = Cli::try_parse_from(["codeframe", "render", "app.py", flag]).unwrap();
            match cli.command {
                Commands::Render(args) => assert_eq!(args.style.style(), expected, "{}", flag),
                _ => panic!("Expected Render command"),
            }
        }
    }

    #[test]
    fn test_style_flags_are_exclusive() {
        let result = Cli::try_parse_from(["codeframe", "render", "app.py", "-b", "-g"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parsing_outline_command() {
        let cli = Cli::try_parse_from(["codeframe", "outline", "app.py", "-o", "app.json"]).unwrap();
        match cli.command {
            Commands::Outline {
                input,
                output,
                include_control_flow,
            } => {
                assert_eq!(input.to_string_lossy(), "app.py");
                assert_eq!(output.unwrap().to_string_lossy(), "app.json");
                assert!(!include_control_flow);
            }
            _ => panic!("Expected Outline command"),
        }
    }

    #[test]
    fn test_cli_parsing_styles_command() {
        let cli = Cli::try_parse_from(["codeframe", "styles", "--json"]).unwrap();
        match cli.command {
            Commands::Styles { json } => assert!(json),
            _ => panic!("Expected Styles command"),
        }
    }

    #[test]
    fn test_logging_flags() {
        let cli = Cli::try_parse_from([
            "codeframe",
            "--verbose",
            "--log-level",
            "debug",
            "--log-format",
            "json",
            "styles",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.log_level, Some(LogLevel::Debug));
        assert_eq!(cli.log_format, Some(LogFormat::Json));
    }

    #[test]
    fn test_render_requires_input() {
        assert!(Cli::try_parse_from(["codeframe", "render"]).is_err());
    }

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("src/app.py")),
            PathBuf::from("src/app_structure.md")
        );
        assert_eq!(
            default_output_path(Path::new("script")),
            PathBuf::from("script_structure.md")
        );
    }

    #[test]
    fn test_title_for() {
        assert_eq!(title_for(Path::new("src/app.py")), "app.py");
        assert_eq!(title_for(Path::new("-")), "stdin");
    }

    #[test]
    fn test_codeframe_app_default() {
        let app = CodeframeApp::default();
        assert_eq!(app.orchestrator().get_analyzers(), vec!["python"]);
    }

    #[test]
    fn test_read_input_from_file() {
        let app = CodeframeApp::new();
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("app.py");
        fs::write(&file_path, SAMPLE).unwrap();

        assert_eq!(app.read_input(&file_path).unwrap(), SAMPLE);
    }

    #[test]
    fn test_read_input_missing_file() {
        let app = CodeframeApp::new();
        let dir = tempdir().unwrap();
        let err = app.read_input(&dir.path().join("missing.py")).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_read_input_io_failure_is_diagram_error() {
        let app = CodeframeApp::new();
        let dir = tempdir().unwrap();

        // A directory exists but cannot be read as text
        let err = app.read_input(dir.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to read input file"));
        assert!(matches!(
            err.downcast_ref::<DiagramError>(),
            Some(DiagramError::IoError { .. })
        ));
    }

    #[test]
    fn test_write_output_io_failure_is_diagram_error() {
        let app = CodeframeApp::new();
        let dir = tempdir().unwrap();
        let target = dir.path().join("missing").join("out.md");

        let err = app
            .write_output(&Destination::File(target), "content")
            .unwrap_err();
        assert!(err.to_string().contains("Failed to write output file"));
        assert!(matches!(
            err.downcast_ref::<DiagramError>(),
            Some(DiagramError::IoError { .. })
        ));
    }

    #[test]
    fn test_write_output_to_file() {
        let app = CodeframeApp::new();
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("output.md");

        app.write_output(&Destination::File(file_path.clone()), "Test output")
            .unwrap();
        assert_eq!(fs::read_to_string(&file_path).unwrap(), "Test output");
    }

    #[test]
    fn test_render_writes_default_output() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("app.py");
        fs::write(&input, SAMPLE).unwrap();

        run(&["codeframe", "render", input.to_str().unwrap(), "-b"]).unwrap();

        let diagram = fs::read_to_string(dir.path().join("app_structure.md")).unwrap();
        assert!(diagram.starts_with("# Code Structure: app.py"));
        assert!(diagram.contains("║ CLASS: Foo ║"));
        assert!(!diagram.contains("\x1b["));
    }

    #[test]
    fn test_render_github_with_explicit_output() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("app.py");
        let output = dir.path().join("README_part.md");
        fs::write(&input, SAMPLE).unwrap();

        run(&[
            "codeframe",
            "render",
            input.to_str().unwrap(),
            "-g",
            "-o",
            output.to_str().unwrap(),
        ])
        .unwrap();

        let diagram = fs::read_to_string(&output).unwrap();
        assert!(diagram.starts_with("## Code Structure: app.py"));
        assert!(diagram.contains("```mermaid"));
        assert!(diagram.contains("#### ⚙️ Functions"));
    }

    #[test]
    fn test_render_from_outline_json() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("outline.json");
        let output = dir.path().join("diagram.md");
        fs::write(
            &input,
            r#"[{"type": "function", "name": "main", "level": 0, "lineno": 1}]"#,
        )
        .unwrap();

        run(&[
            "codeframe",
            "render",
            input.to_str().unwrap(),
            "--from-outline",
            "--charset",
            "ascii",
            "-o",
            output.to_str().unwrap(),
        ])
        .unwrap();

        let diagram = fs::read_to_string(&output).unwrap();
        assert!(diagram.contains("+- [FUNCTION] main()"));
    }

    #[test]
    fn test_render_rejects_malformed_outline_json() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("outline.json");
        fs::write(&input, r#"[{"type": "function", "name": "f", "level": -1, "lineno": 1}]"#)
            .unwrap();

        let result = run(&[
            "codeframe",
            "render",
            input.to_str().unwrap(),
            "--from-outline",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_render_missing_input_fails() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.py");
        let result = run(&["codeframe", "render", missing.to_str().unwrap()]);
        assert!(result.is_err());
        assert!(!dir.path().join("nope_structure.md").exists());
    }

    #[test]
    fn test_render_non_python_file_still_renders() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("script.txt");
        fs::write(&input, SAMPLE).unwrap();

        run(&["codeframe", "render", input.to_str().unwrap()]).unwrap();

        let diagram = fs::read_to_string(dir.path().join("script_structure.md")).unwrap();
        assert!(diagram.contains("[CLASS] Foo"));
    }

    #[test]
    fn test_outline_command_writes_json() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("app.py");
        let output = dir.path().join("app.json");
        fs::write(&input, SAMPLE).unwrap();

        run(&[
            "codeframe",
            "outline",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ])
        .unwrap();

        let outline = Outline::from_json(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(outline.len(), 3);
        assert_eq!(outline.get(2).map(|i| i.name.as_str()), Some("main"));
    }

    #[test]
    fn test_styles_command_json_format() {
        let app = CodeframeApp::new();
        assert!(app.styles_command(true, false).is_ok());
    }

    #[test]
    fn test_styles_command_human_format() {
        let app = CodeframeApp::new();
        assert!(app.styles_command(false, false).is_ok());
    }
}
