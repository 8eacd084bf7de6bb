use std::io::Write;

use crate::core::parser::parse_line;
use crate::core::ranking::rank_results;
use crate::domain::model::{ContestResult, RankedEntry};
use crate::domain::ports::{ConfigProvider, Store};
use crate::utils::error::{RankingsError, Result};

pub const NO_DATA_MESSAGE: &str = "Cannot display the ranking table because no results exist in the contest results store. Please add results, then retry.";
pub const RANKING_HEADER: &str = "The current ranking is:";

/// Validates result batches, persists them and builds the ranking table.
pub struct ResultsProcessor<S: Store, C: ConfigProvider> {
    store: S,
    config: C,
}

impl<S: Store, C: ConfigProvider> ResultsProcessor<S, C> {
    pub fn new(store: S, config: C) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validates every line, then appends them all as one batch.
    ///
    /// The first invalid line aborts the batch before anything is written.
    /// Returns the number of results stored.
    pub fn process<I, L>(&self, lines: I) -> Result<usize>
    where
        I: IntoIterator<Item = L>,
        L: AsRef<str>,
    {
        let mut results: Vec<ContestResult> = Vec::new();

        for (index, line) in lines.into_iter().enumerate() {
            let line_number = index + 1;
            let outcome = parse_line(line.as_ref())
                .map_err(|e| reject(line_number, e.to_string()))?;

            match outcome.first_error() {
                None => results.push(outcome.into_parsed_result()?),
                Some(violation) => return Err(reject(line_number, violation.to_string())),
            }
            tracing::debug!("Line {} parsed: {}", line_number, line.as_ref());
        }

        if !self.store.is_initialized() {
            self.store.initialize()?;
        }

        let json_lines = results
            .iter()
            .map(serde_json::to_string)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        self.store.append_all_lines(&json_lines)?;

        tracing::info!(
            "Stored {} contest result(s) in {}",
            results.len(),
            self.config.store_path()
        );
        Ok(results.len())
    }

    pub fn clear_contest_results(&self) -> Result<()> {
        if self.store.is_initialized() {
            self.store.reset()?;
            tracing::info!("Cleared contest results in {}", self.config.store_path());
        }
        Ok(())
    }

    /// Every stored result, oldest first.
    pub fn load_results(&self) -> Result<Vec<ContestResult>> {
        self.store
            .read_all_lines()?
            .iter()
            .map(|line| serde_json::from_str(line).map_err(RankingsError::from))
            .collect()
    }

    /// `None` when nothing has been stored yet.
    pub fn ranking_table(&self) -> Result<Option<Vec<RankedEntry>>> {
        if !self.store.is_initialized() || self.store.is_empty() {
            return Ok(None);
        }

        let results = self.load_results()?;
        tracing::debug!("Ranking {} stored result(s)", results.len());
        Ok(Some(rank_results(&results, &self.config.points())))
    }

    pub fn display_ranking_table<W: Write>(&self, out: &mut W) -> Result<()> {
        match self.ranking_table()? {
            None => writeln!(out, "{}", NO_DATA_MESSAGE)?,
            Some(rows) => {
                writeln!(out, "{}", RANKING_HEADER)?;
                for row in rows {
                    writeln!(out, "{}", row)?;
                }
            }
        }
        Ok(())
    }
}

fn reject(line: usize, message: String) -> RankingsError {
    tracing::warn!("Rejected batch at line {}: {}", line, message);
    RankingsError::Batch { line, message }
}
