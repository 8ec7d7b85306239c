//! Voxtex CLI - Spoken math dictation to LaTeX

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};
#[cfg(feature = "cli")]
use voxtex::{
    detect_graph_command,
    graph::{GraphOutcome, RecordingPlotter},
    notes::{NoteBook, NotesConfig},
    preview::{DisplayMathTypesetter, PreviewLine},
    spoken_to_latex_with_report,
    utils::latex_analysis::metrics_source,
    DictationError, DictationSession, Engine, LossReport,
    PlotOptions, PlotSpec, RecognitionResult, RuleOrder, S2LOptions, SessionEvent,
};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "voxtex")]
#[command(version)]
#[command(about = "Voxtex - Spoken math dictation to LaTeX", long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input file, one utterance per line (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    #[command(flatten)]
    engine: EngineArgs,

    /// Write a loss report JSON to this path
    #[arg(long)]
    loss_log: Option<String>,

    /// Print LaTeX metrics of the output to stderr
    #[arg(long)]
    stats: bool,
}

#[cfg(feature = "cli")]
#[derive(clap::Args, Clone)]
struct EngineArgs {
    /// Use the structured engine (handles nested constructs)
    #[arg(long)]
    structured: bool,

    /// Apply dictionary rules in declaration order
    #[arg(long)]
    legacy_order: bool,

    /// Do not close trailing unclosed \sqrt{ and \frac{..}{
    #[arg(long)]
    no_repair: bool,
}

#[cfg(feature = "cli")]
impl EngineArgs {
    fn options(&self) -> S2LOptions {
        S2LOptions {
            engine: if self.structured {
                Engine::Structured
            } else {
                Engine::Rules
            },
            rule_order: if self.legacy_order {
                RuleOrder::Declaration
            } else {
                RuleOrder::LongestFirst
            },
            repair_delimiters: !self.no_repair,
        }
    }
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Convert utterances to LaTeX (default action)
    Convert {
        /// Input file path
        input: Option<String>,

        /// Output file path
        #[arg(short, long)]
        output: Option<String>,

        #[command(flatten)]
        engine: EngineArgs,

        /// Write a loss report JSON to this path
        #[arg(long)]
        loss_log: Option<String>,

        /// Print LaTeX metrics of the output to stderr
        #[arg(long)]
        stats: bool,
    },

    /// Validate a plot command and print its function-plot config
    Graph {
        /// Utterance or expression, e.g. "plot y = x squared"
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,

        /// Plot container width in pixels
        #[arg(long, default_value_t = 640)]
        width: u32,

        /// Print this many sample points instead of the config
        #[arg(long)]
        samples: Option<usize>,
    },

    /// Replay a transcript through a dictation session
    Dictate {
        /// Transcript file, one final result per line
        input: Option<String>,

        #[command(flatten)]
        engine: EngineArgs,

        /// Print the typeset preview instead of the raw document
        #[arg(long)]
        preview: bool,

        /// Save the resulting document as a note with this title
        #[arg(long)]
        save: Option<String>,
    },

    /// Manage saved notes
    Notes {
        #[command(subcommand)]
        action: NotesAction,
    },

    /// Show version and feature info
    Info,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum NotesAction {
    /// List notes, newest first
    List,
    /// Print a note's content
    Show { id: u64 },
    /// Save a file (or stdin) as a note
    Save {
        title: String,
        input: Option<String>,
    },
    /// Delete a note
    Delete { id: u64 },
}

#[cfg(feature = "cli")]
fn main() -> io::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // Handle subcommands first
    if let Some(cmd) = cli.command {
        return handle_subcommand(cmd);
    }

    let input = read_input(cli.input_file.as_deref())?;
    let result = convert_lines(&input, &cli.engine.options(), cli.loss_log.as_deref())?;
    if cli.stats {
        print_stats(&result);
    }
    write_output(cli.output.as_deref(), &result)
}

#[cfg(feature = "cli")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_env("VOXTEX_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(feature = "cli")]
fn handle_subcommand(cmd: Commands) -> io::Result<()> {
    match cmd {
        Commands::Convert {
            input,
            output,
            engine,
            loss_log,
            stats,
        } => {
            let content = read_input(input.as_deref())?;
            let result = convert_lines(&content, &engine.options(), loss_log.as_deref())?;
            if stats {
                print_stats(&result);
            }
            write_output(output.as_deref(), &result)?;
        }

        Commands::Graph {
            words,
            width,
            samples,
        } => {
            let utterance = words.join(" ");
            let expression = detect_graph_command(&utterance).unwrap_or(utterance);
            let options = PlotOptions {
                container_width: width,
                ..PlotOptions::default()
            };
            let spec = match PlotSpec::from_command(&expression, &options) {
                Ok(spec) => spec,
                Err(err) => {
                    eprintln!("{}", voxtex::graph::GRAPH_ERROR_MESSAGE);
                    eprintln!("  {}", err);
                    std::process::exit(1);
                }
            };
            match samples {
                Some(count) => {
                    for (x, y) in spec.sample(count) {
                        println!("{:.4}\t{:.4}", x, y);
                    }
                }
                None => {
                    let config = spec.to_function_plot_config("#graphContainer");
                    let serialized =
                        serde_json::to_string_pretty(&config).map_err(to_io_error)?;
                    println!("{}", serialized);
                }
            }
        }

        Commands::Dictate {
            input,
            engine,
            preview,
            save,
        } => {
            let transcript = read_input(input.as_deref())?;
            let mut session =
                DictationSession::with_options(engine.options(), PlotOptions::default());
            let mut plotter = RecordingPlotter::default();
            session.start();

            for line in transcript.lines().filter(|l| !l.trim().is_empty()) {
                let results = [RecognitionResult::finalized(line)];
                let event = session.handle_results(&results, &mut plotter);
                if let SessionEvent::Graphed(outcome) = event {
                    match outcome {
                        GraphOutcome::Rendered(spec) => eprintln!("📊 y = {}", spec.expression),
                        GraphOutcome::Failed(message) => eprintln!("✗ {}", message),
                    }
                }
            }
            session.stop();

            if preview {
                for line in session.preview(&DisplayMathTypesetter) {
                    match line {
                        PreviewLine::Placeholder => {
                            println!("{}", voxtex::preview::PREVIEW_PLACEHOLDER)
                        }
                        PreviewLine::Break => println!(),
                        PreviewLine::Math(markup) => println!("{}", markup),
                        PreviewLine::Raw(text) => println!("{}  (not typeset)", text),
                    }
                }
            } else {
                print!("{}", session.document());
            }

            if let Some(title) = save {
                let mut book = open_notebook()?;
                let note = book.save(&title, session.document()).map_err(to_io_error)?;
                eprintln!("✓ Note saved: {} ({})", note.title, note.id);
            }
        }

        Commands::Notes { action } => handle_notes(action)?,

        Commands::Info => {
            println!("Voxtex - Spoken math dictation to LaTeX");
            println!("Version: {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Features:");
            println!("  ✓ Rule engine: patterns, phrase dictionary, delimiter repair");
            println!("  ✓ Structured engine for nested fractions and roots");
            println!("  ✓ Plot command detection with function-plot configs");
            println!("  ✓ Saved notes (VOXTEX_NOTES_DIR, VOXTEX_NOTES_NAMESPACE)");
            println!();
            println!("Logging: set VOXTEX_LOG (e.g. VOXTEX_LOG=debug)");
            println!();
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn handle_notes(action: NotesAction) -> io::Result<()> {
    let mut book = open_notebook()?;
    match action {
        NotesAction::List => {
            if book.is_empty() {
                println!("No saved notes yet.");
            }
            for note in book.recent_first() {
                println!("{}  {}  {}", note.id, note.timestamp, note.title);
                println!("    {}", note.preview().replace('\n', " "));
            }
        }
        NotesAction::Show { id } => match book.get(id) {
            Some(note) => print!("{}", note.content),
            None => {
                eprintln!("✗ No note with id {}", id);
                std::process::exit(1);
            }
        },
        NotesAction::Save { title, input } => {
            let content = read_input(input.as_deref())?;
            let note = book.save(&title, &content).map_err(to_io_error)?;
            eprintln!("✓ Note saved: {} ({})", note.title, note.id);
        }
        NotesAction::Delete { id } => {
            if book.delete(id).map_err(to_io_error)? {
                eprintln!("✓ Deleted note {}", id);
            } else {
                eprintln!("✗ No note with id {}", id);
                std::process::exit(1);
            }
        }
    }
    Ok(())
}

#[cfg(feature = "cli")]
fn open_notebook() -> io::Result<NoteBook<voxtex::notes::FileStore>> {
    let config = NotesConfig::from_env();
    NoteBook::open_configured(&config).map_err(to_io_error)
}

/// Convert each non-blank line as one utterance; blank lines are kept.
#[cfg(feature = "cli")]
fn convert_lines(
    input: &str,
    options: &S2LOptions,
    loss_log: Option<&str>,
) -> io::Result<String> {
    let mut lines = Vec::new();
    let mut losses = Vec::new();

    for line in input.lines() {
        if line.trim().is_empty() {
            lines.push(String::new());
            continue;
        }
        let report = spoken_to_latex_with_report(line, options);
        losses.extend(report.report.losses);
        lines.push(report.content);
    }

    if let Some(path) = loss_log {
        for (idx, loss) in losses.iter_mut().enumerate() {
            loss.id = format!("L{:04}", idx + 1);
        }
        let report = LossReport::new(options.engine.name(), losses, Vec::new());
        let serialized = serde_json::to_string_pretty(&report).map_err(to_io_error)?;
        fs::write(path, serialized)?;
    }

    Ok(lines.join("\n"))
}

#[cfg(feature = "cli")]
fn print_stats(latex: &str) {
    let metrics = metrics_source(latex);
    eprintln!(
        "lines: {}  commands: {}  fractions: {}  roots: {}  integrals: {}  superscripts: {}",
        metrics.lines,
        metrics.commands,
        metrics.fractions,
        metrics.roots,
        metrics.integrals,
        metrics.superscripts
    );
    if !metrics.is_balanced() {
        eprintln!("⚠ {} line(s) with unbalanced braces", metrics.unbalanced_lines);
    }
}

#[cfg(feature = "cli")]
fn read_input(path: Option<&str>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

#[cfg(feature = "cli")]
fn write_output(path: Option<&str>, result: &str) -> io::Result<()> {
    match path {
        Some(path) => {
            let mut file = fs::File::create(path)?;
            writeln!(file, "{}", result)?;
            eprintln!("✓ Output written to: {}", path);
        }
        None => {
            println!("{}", result);
        }
    }
    Ok(())
}

#[cfg(feature = "cli")]
fn to_io_error(err: impl Into<DictationError>) -> io::Error {
    io::Error::new(io::ErrorKind::Other, err.into().to_string())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install voxtex --features cli");
    eprintln!("  voxtex [OPTIONS] [INPUT_FILE]");
}
