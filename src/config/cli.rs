use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::toml_config::RankingsConfig;
use crate::utils::error::Result;

#[derive(Debug, Clone, Parser)]
#[command(name = "rankings", version)]
#[command(about = "Record contest results and display the league ranking table")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path of the contest results store (overrides the config file)
    #[arg(long, global = true)]
    pub store: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Append every result in a file (one per line), then show the ranking table
    AppendFile {
        /// File with one result per line, e.g. "Alice 10, Bob 20"
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Append a single result, then show the ranking table
    AppendResult {
        /// Result in the form "<name> <score>, <name> <score>"
        #[arg(short, long, allow_hyphen_values = true)]
        result: String,
    },

    /// Delete every stored contest result
    ClearContestResults,

    /// Show the current ranking table
    ShowRankings,
}

impl CliConfig {
    /// Config file (if any) with command-line overrides applied.
    pub fn resolve(&self) -> Result<RankingsConfig> {
        let config = match &self.config {
            Some(path) => RankingsConfig::from_file(path)?,
            None => RankingsConfig::default(),
        };

        Ok(match &self.store {
            Some(store) => config.with_store_path(store.clone()),
            None => config,
        })
    }
}
