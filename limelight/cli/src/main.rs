use std::io::{self, Read};
use std::path::PathBuf;

use clap::{ArgGroup, CommandFactory, Parser};
use clap_complete::{Generator, Shell};
use color_eyre::eyre::{eyre, Context, Result};
use limelight_lib::{recover_source_text, render_report, validate_scope_selector};
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

mod output;
mod sample;

#[derive(Parser)]
#[command(
    name = "lime",
    about = "Scoped search highlighting for HTML source views",
    version
)]
#[command(group = ArgGroup::new("output-mode")
    .args(["page", "recover", "json", "open"])
    .multiple(false))]
struct Cli {
    /// Input file path (reads from stdin if not provided, use "-" for explicit stdin)
    input: Option<PathBuf>,

    /// Text to highlight, matched case-insensitively as a literal
    #[arg(short, long, default_value = "", value_name = "TEXT")]
    query: String,

    /// CSS selector restricting where highlights may apply
    #[arg(short, long, default_value = "", value_name = "SELECTOR")]
    selector: String,

    /// Render the built-in sample document
    #[arg(long, conflicts_with = "input")]
    sample: bool,

    /// Emit a standalone HTML page instead of the bare fragment
    #[arg(long, group = "output-mode")]
    page: bool,

    /// Treat the input as rendered output and recover its source text
    #[arg(long, group = "output-mode")]
    recover: bool,

    /// Output the rendering report as JSON
    #[arg(long, group = "output-mode")]
    json: bool,

    /// Write a standalone page to a temp file and open it in the browser
    #[arg(long, group = "output-mode")]
    open: bool,

    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    completions: Option<Shell>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Initialize tracing subscriber based on verbosity level.
///
/// Verbosity levels:
/// - 0 (default): logging disabled
/// - 1 (-v): INFO for strategy decisions
/// - 2 (-vv): DEBUG for match collection
/// - 3+ (-vvv): TRACE including parser repairs
fn init_tracing(verbose: u8) {
    if verbose == 0 {
        return;
    }

    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            1 => "info,lime=info,limelight_lib=info".to_string(),
            2 => "info,lime=debug,limelight_lib=debug".to_string(),
            _ => "debug,lime=trace,limelight_lib=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_thread_ids(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        print_completions(shell, &mut cmd);
        return Ok(());
    }

    let markup = load_markup(&cli)?;
    tracing::debug!(bytes = markup.len(), "Loaded input");

    if cli.recover {
        print!("{}", recover_source_text(&markup));
        return Ok(());
    }

    let validity = validate_scope_selector(&cli.selector);
    if let Some(message) = validity.message() {
        eprintln!("{message}");
    }

    let report = render_report(&markup, &cli.query, &cli.selector, validity.is_valid());
    tracing::info!(strategy = %report.strategy, marker_count = report.marker_count, "Rendered");

    if cli.json {
        println!(
            "{}",
            output::render_outcome_json(&report, &cli.selector, &validity)?
        );
        return Ok(());
    }

    if cli.open {
        let page = output::standalone_page(&report.html);
        let temp_path = std::env::temp_dir().join("lime-preview.html");
        std::fs::write(&temp_path, &page).wrap_err("Failed to write temp HTML file")?;

        // Non-blocking open, graceful error handling
        if let Err(e) = open::that(&temp_path) {
            eprintln!("Failed to open browser: {e}");
            eprintln!("Preview available at: {}", temp_path.display());
        }
        return Ok(());
    }

    if cli.page {
        println!("{}", output::standalone_page(&report.html));
        return Ok(());
    }

    println!("{}", report.html);
    Ok(())
}

/// Loads markup from the sample, a file path, or stdin.
fn load_markup(cli: &Cli) -> Result<String> {
    if cli.sample {
        return Ok(sample::SAMPLE_DOCUMENT.to_string());
    }
    if let Some(path) = &cli.input {
        if path.to_str() == Some("-") {
            return read_from_stdin();
        }
        return std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read file: {path:?}"));
    }
    if atty::is(atty::Stream::Stdin) {
        // Interactive terminal - no input available
        return Err(eyre!("No input provided. Use `lime --help` for usage."));
    }
    read_from_stdin()
}

fn read_from_stdin() -> Result<String> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .wrap_err("Failed to read from stdin")?;
    Ok(buffer)
}

/// Prints shell completions to stdout.
fn print_completions<G: Generator>(generator: G, cmd: &mut clap::Command) {
    clap_complete::generate(generator, cmd, cmd.get_name().to_string(), &mut std::io::stdout());
}
