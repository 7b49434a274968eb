use clap::Parser;
use std::path::PathBuf;

/// Serve the unit booking API.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// TOML file layered over the built-in defaults
    #[arg(short, long, env = "APP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write the OpenAPI document to this path instead of serving
    #[arg(long)]
    pub schema: Option<PathBuf>,
}
