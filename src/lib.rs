pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Command};
pub use crate::config::RankingsConfig;

pub use crate::adapters::{FileStore, MemoryStore};
pub use crate::core::parser::{
    parse_line, parse_optional_line, InputError, ValidationOutcome, Violation,
};
pub use crate::core::processor::ResultsProcessor;
pub use crate::core::ranking::{assign_ranks, rank_results, tally};
pub use crate::domain::model::{ContestResult, PointsScheme, RankedEntry, RankingEntry};
pub use crate::utils::error::{RankingsError, Result};
