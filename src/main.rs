use anyhow::Result;
use clap::{Parser, Subcommand};
use pubtrends::{scopus, topics, universities};

#[derive(Parser)]
#[command(name = "pubtrends")]
#[command(about = "Compare publication and citation trends across universities")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate topic-model scores per area, institution and year
    Topics(topics::TopicsArgs),
    /// Aggregate Scopus conference exports per institution and year
    Conferences(scopus::ConferencesArgs),
    /// Print the canonical institution for each affiliation string
    Normalize(universities::NormalizeArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        std::env::set_var("RUST_LOG", "debug");
    }

    match cli.command {
        Commands::Topics(args) => topics::run(args),
        Commands::Conferences(args) => scopus::run(args),
        Commands::Normalize(args) => universities::run(args),
    }
}
