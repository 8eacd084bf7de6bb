pub mod parser;
pub mod processor;
pub mod ranking;

pub use crate::domain::model::{ContestResult, PointsScheme, RankedEntry, RankingEntry};
pub use crate::domain::ports::{ConfigProvider, ReadOnlyStore, Store};
pub use crate::utils::error::Result;
