//! Config given as command line arguments

use std::path::PathBuf;

use clap::{Args, Parser, arg, command};

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about = "Find Your Valentine profile form")]
pub struct ArgsConfig {
    /// TOML config file. Values from environment variables and command
    /// line arguments override values from this file.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Hosted database URL. Overrides SUPABASE_URL environment variable.
    #[arg(long, value_name = "URL")]
    pub store_url: Option<String>,

    /// Hosted database access key. Overrides SUPABASE_ANON_KEY environment
    /// variable.
    #[arg(long, value_name = "KEY")]
    pub store_key: Option<String>,

    /// Table where profiles are inserted.
    #[arg(long, value_name = "NAME")]
    pub table: Option<String>,

    /// Keep submitted profiles in memory instead of sending them to
    /// the hosted database.
    #[arg(long)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub mode: Option<AppMode>,
}

#[derive(Parser, Debug, Clone)]
pub enum AppMode {
    /// Submit one profile without prompts
    Submit(SubmitArgs),
    /// Print default config file to stdout
    DefaultConfig,
}

/// Form values for non-interactive submit. Validation happens later, so
/// every value is plain text here.
#[derive(Args, Debug, Clone, Default)]
pub struct SubmitArgs {
    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub age: String,

    /// One of male, female, non-binary or other
    #[arg(long, default_value = "")]
    pub gender: String,

    #[arg(long, default_value = "")]
    pub email: String,

    #[arg(long, default_value = "")]
    pub interests: String,

    #[arg(long, default_value = "")]
    pub looking_for: String,

    #[arg(long, default_value = "")]
    pub ideal_date: String,

    #[arg(long, default_value = "")]
    pub deal_breakers: String,
}

pub fn get_args() -> ArgsConfig {
    ArgsConfig::parse()
}
