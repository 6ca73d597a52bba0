use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

mod run;

#[derive(Debug, Parser)]
#[command(name = "esgdb")]
#[command(about = "ESG data collection and scoring pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the collection pipeline over the company registry.
    Run(RunArgs),
}

#[derive(Debug, Args)]
struct RunArgs {
    /// Cap the number of companies processed (default: ESGDB_RUN_LIMIT).
    #[arg(long)]
    limit: Option<usize>,

    /// Process only the company with this ticker.
    #[arg(long)]
    ticker: Option<String>,

    /// Append results as JSON lines to this file instead of discarding them.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run(args) => run::run(args).await,
    }
}

#[cfg(test)]
mod tests;
