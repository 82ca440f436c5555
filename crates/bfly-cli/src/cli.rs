use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "bfly",
    about = "Butterfly ratings API served over HTTP from a single JSON document",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the API server
    Serve(ServeArgs),
    /// Replace the datastore with the sample butterflies, users, and ratings
    InitDb(InitDbArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// Address to listen on (overrides config and PORT)
    #[arg(long)]
    pub bind: Option<String>,
    /// Datastore file (overrides config and DB_PATH)
    #[arg(long)]
    pub db: Option<PathBuf>,
    /// TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct InitDbArgs {
    /// Datastore file (defaults to DB_PATH, then butterflies.db.json)
    #[arg(long)]
    pub db: Option<PathBuf>,
}
