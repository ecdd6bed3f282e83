//! Gander CLI: answer a brand question and emit extracted facts as JSON.
//!
//! Produces a single payload with the answer, its citations, brand mentions,
//! and owned vs external sources.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    // `.env` feeds the clap `env` fallbacks, so load it before parsing.
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
