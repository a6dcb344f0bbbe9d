use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "taiga")]
#[command(about = "A terminal client for the Taiga project management service", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the config file (defaults to the platform config directory)
    #[arg(long, value_name = "FILE", env = "TAIGA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Id of the project to open
    #[arg(short, long, value_name = "ID", env = "TAIGA_PROJECT")]
    pub project: Option<u64>,

    /// Username to log in with (overrides [auth] username)
    #[arg(short, long, env = "TAIGA_USERNAME")]
    pub username: Option<String>,

    /// Password to log in with
    #[arg(long, env = "TAIGA_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Server URL, e.g. https://taiga.example.com (overrides [host])
    #[arg(long, value_name = "URL")]
    pub host: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
