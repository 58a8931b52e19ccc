use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sqlgen",
    version,
    about = "Batch test client for the SQL generation service"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    Run(RunArgs),
    Init(InitArgs),
    Version,
}

#[derive(clap::Args, Clone)]
pub struct RunArgs {
    /// Base URL of the SQL generation service
    #[arg(long, default_value = "http://localhost:8000", env = "SQLGEN_API_URL")]
    pub api_url: String,

    /// Suite file (YAML); the built-in e-commerce suite when omitted
    #[arg(long)]
    pub suite: Option<PathBuf>,

    /// Schema file overriding the suite's schema
    #[arg(long)]
    pub schema: Option<PathBuf>,

    /// Report output path
    #[arg(long, default_value = "test_results.json")]
    pub out: PathBuf,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_seconds: u64,
}

#[derive(clap::Args, Clone)]
pub struct InitArgs {
    #[arg(long, default_value = "suite.yaml")]
    pub suite: PathBuf,
}
