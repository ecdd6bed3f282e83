//! CLI definition, tracing setup, and the run command.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::eyre::{Report, Result};
use gander_core::answer::PlaceholderAnswer;
use gander_core::{output, pipeline};
use gander_shared::{AppConfig, OutputPayload, RunConfig, load_config, load_config_from};
use tracing::info;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// Gander: answer a brand question and extract citations, mentions, and sources.
#[derive(Parser, Debug)]
#[command(
    name = "gander",
    version,
    about = "Produce a single JSON with the final answer and extracted fields.",
    long_about = "Produce a single JSON with the final answer and extracted fields.\n\n\
                  This baseline does not perform search. It emits a clean payload and \
                  records the configured budgets to demonstrate shape and invariants."
)]
pub(crate) struct Cli {
    /// Brand name, used to detect mentions.
    #[arg(long)]
    pub brand: String,

    /// Brand's canonical site URL.
    #[arg(long)]
    pub url: String,

    /// End-user question to answer.
    #[arg(long)]
    pub question: String,

    /// Hard cap on web searches [default: 0].
    #[arg(long, env = "GANDER_MAX_SEARCHES", allow_negative_numbers = true)]
    pub max_searches: Option<i64>,

    /// Hard cap on sources included [default: 0].
    #[arg(long, env = "GANDER_MAX_SOURCES", allow_negative_numbers = true)]
    pub max_sources: Option<i64>,

    /// Model identifier [default: gpt-4o-mini].
    #[arg(long, env = "GANDER_MODEL")]
    pub model: Option<String>,

    /// Path to write JSON output (stdout when omitted).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file (defaults to ~/.gander/gander.toml).
    #[arg(long, env = "GANDER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log format: text (default) or json.
    #[arg(long, default_value = "text")]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Log output format.
#[derive(Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
///
/// Logs go to stderr; stdout carries only the payload (or its path).
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "gander=info",
        1 => "gander=debug",
        _ => "gander=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Run
// ---------------------------------------------------------------------------

/// Run the CLI: build the payload, then print it or write it out.
pub(crate) fn run(cli: Cli) -> Result<()> {
    let payload = build_payload(&cli)?;
    let blob = output::render(&payload)?;

    emit(&blob, cli.output.as_deref(), &mut std::io::stdout().lock())
}

/// Deliver the rendered payload: to a file (echoing its path), or as-is to `out`.
fn emit(blob: &str, output_path: Option<&Path>, out: &mut impl Write) -> Result<()> {
    match output_path {
        Some(path) => {
            output::write_to_file(path, blob)?;
            writeln!(out, "{}", path.display())?;
        }
        None => out.write_all(blob.as_bytes())?,
    }
    out.flush()?;

    Ok(())
}

/// Resolve config and run the pipeline with the placeholder generator.
fn build_payload(cli: &Cli) -> Result<OutputPayload> {
    let config = resolve_config(cli)?;

    info!(
        brand = %config.brand,
        url = %config.brand_url,
        model = %config.model,
        max_searches = config.budgets.max_searches,
        max_sources = config.budgets.max_sources,
        "answering brand question"
    );

    pipeline::run(&config, &PlaceholderAnswer).map_err(|e| {
        if e.is_validation() {
            Report::new(e).wrap_err("payload validation failed")
        } else {
            Report::new(e)
        }
    })
}

/// Merge flags over the config file over built-in defaults.
fn resolve_config(cli: &Cli) -> Result<RunConfig> {
    let app: AppConfig = match &cli.config {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    };

    Ok(
        RunConfig::new(&app, cli.brand.as_str(), cli.url.as_str(), cli.question.as_str())
            .with_model(cli.model.clone())
            .with_budgets(cli.max_searches, cli.max_sources),
    )
}
