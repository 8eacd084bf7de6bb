//! Parsing and validation of single result lines such as `"Alice 10, Bob 20"`.
//!
//! A line is split at the one [`CONTESTANT_RESULT_SEPARATOR`] into two
//! contestant parts. In each part the rightmost space separates the name from
//! the score, so names may contain spaces.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::domain::model::{ContestResult, CONTESTANT_RESULT_SEPARATOR};
use crate::utils::error::{RankingsError, Result};

const CONTESTANT_SCORE_SEPARATOR: char = ' ';

/// Input that is rejected before any parsing happens.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    #[error("A result must be provided.")]
    Missing,

    #[error("A result must not contain any line breaks, it must be a single line.")]
    MultiLine,

    #[error("A result cannot be empty or white-space.")]
    Blank,
}

/// A broken validation rule.
///
/// Variants are declared in reporting order; the derived `Ord` is the
/// precedence used by [`ValidationOutcome::first_error`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Violation {
    #[error("A result can only contain one {sep} symbol.", sep = CONTESTANT_RESULT_SEPARATOR)]
    MultipleSeparators,

    #[error(
        "A result must be separated into two parts by the {sep} symbol; one part for each contestant's name and score.",
        sep = CONTESTANT_RESULT_SEPARATOR
    )]
    MissingSeparator,

    #[error("A result must include the results for both contestants. Cannot find a result for contestant 1.")]
    NoContestant1Result,

    #[error("A result must include the results for both contestants. Cannot find a result for contestant 2.")]
    NoContestant2Result,

    #[error("A result must include names for both contestants. Cannot find a name for contestant 1.")]
    NoContestant1Name,

    #[error("A result must include scores for both contestants. Cannot find a score for contestant 1.")]
    NoContestant1Score,

    #[error("A result must include names for both contestants. Cannot find a name for contestant 2.")]
    NoContestant2Name,

    #[error("A result must include scores for both contestants. Cannot find a score for contestant 2.")]
    NoContestant2Score,
}

impl Violation {
    /// Every per-contestant violation. A line without exactly one separator
    /// reports all of them alongside the structural violation.
    const ALL_CONTESTANT: [Violation; 6] = [
        Violation::NoContestant1Result,
        Violation::NoContestant2Result,
        Violation::NoContestant1Name,
        Violation::NoContestant1Score,
        Violation::NoContestant2Name,
        Violation::NoContestant2Score,
    ];
}

/// Best-effort name and score extracted from one side of a line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContestantEntry {
    pub name: String,
    pub score: Option<u16>,
}

impl ContestantEntry {
    /// An integer after the last space splits off the name even when it is out
    /// of range, so `"Bob 65536"` is named `Bob` with no score.
    fn parse(part: &str) -> Self {
        let part = part.trim();

        match part.rfind(CONTESTANT_SCORE_SEPARATOR) {
            // Either only a score or only a name.
            None => match part.parse::<i64>() {
                Ok(score) => Self {
                    name: String::new(),
                    score: to_score(score),
                },
                Err(_) => Self {
                    name: part.to_string(),
                    score: None,
                },
            },
            Some(index) => match part[index + 1..].trim().parse::<i64>() {
                Ok(score) => Self {
                    name: part[..index].trim().to_string(),
                    score: to_score(score),
                },
                Err(_) => Self {
                    name: part.to_string(),
                    score: None,
                },
            },
        }
    }

    fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

/// Negative and out-of-range values count as a missing score.
fn to_score(value: i64) -> Option<u16> {
    u16::try_from(value).ok()
}

/// Result of validating one line, computed once at parse time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid(ContestResult),
    Invalid {
        violations: BTreeSet<Violation>,
        contestant1: ContestantEntry,
        contestant2: ContestantEntry,
    },
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid(_))
    }

    pub fn has(&self, violation: Violation) -> bool {
        match self {
            ValidationOutcome::Valid(_) => false,
            ValidationOutcome::Invalid { violations, .. } => violations.contains(&violation),
        }
    }

    /// All violations in reporting order.
    pub fn violations(&self) -> Vec<Violation> {
        match self {
            ValidationOutcome::Valid(_) => Vec::new(),
            ValidationOutcome::Invalid { violations, .. } => violations.iter().copied().collect(),
        }
    }

    /// The single violation reported to users, if any.
    pub fn first_error(&self) -> Option<Violation> {
        match self {
            ValidationOutcome::Valid(_) => None,
            ValidationOutcome::Invalid { violations, .. } => violations.first().copied(),
        }
    }

    pub fn contestant1_name(&self) -> &str {
        match self {
            ValidationOutcome::Valid(result) => &result.contestant1_name,
            ValidationOutcome::Invalid { contestant1, .. } => &contestant1.name,
        }
    }

    /// Zero when no score was found.
    pub fn contestant1_score(&self) -> u16 {
        match self {
            ValidationOutcome::Valid(result) => result.contestant1_score,
            ValidationOutcome::Invalid { contestant1, .. } => contestant1.score.unwrap_or(0),
        }
    }

    pub fn contestant2_name(&self) -> &str {
        match self {
            ValidationOutcome::Valid(result) => &result.contestant2_name,
            ValidationOutcome::Invalid { contestant2, .. } => &contestant2.name,
        }
    }

    /// Zero when no score was found.
    pub fn contestant2_score(&self) -> u16 {
        match self {
            ValidationOutcome::Valid(result) => result.contestant2_score,
            ValidationOutcome::Invalid { contestant2, .. } => contestant2.score.unwrap_or(0),
        }
    }

    pub fn parsed_result(&self) -> Result<&ContestResult> {
        match self {
            ValidationOutcome::Valid(result) => Ok(result),
            ValidationOutcome::Invalid { .. } => Err(RankingsError::InvalidState),
        }
    }

    pub fn into_parsed_result(self) -> Result<ContestResult> {
        match self {
            ValidationOutcome::Valid(result) => Ok(result),
            ValidationOutcome::Invalid { .. } => Err(RankingsError::InvalidState),
        }
    }
}

/// Parses an optional line; `None` is rejected as [`InputError::Missing`].
pub fn parse_optional_line(input: Option<&str>) -> std::result::Result<ValidationOutcome, InputError> {
    parse_line(input.ok_or(InputError::Missing)?)
}

/// Parses one result line.
///
/// Line breaks and blank input are rejected outright. Anything else yields a
/// [`ValidationOutcome`], valid or not.
pub fn parse_line(input: &str) -> std::result::Result<ValidationOutcome, InputError> {
    // Line breaks are checked first so "\r\n" is not reported as blank.
    if input.contains(|c: char| c == '\r' || c == '\n') {
        return Err(InputError::MultiLine);
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputError::Blank);
    }

    let first = trimmed.find(CONTESTANT_RESULT_SEPARATOR);
    let last = trimmed.rfind(CONTESTANT_RESULT_SEPARATOR);

    let index = match (first, last) {
        (Some(first), Some(last)) if first == last => first,
        (first, _) => {
            let structural = if first.is_some() {
                Violation::MultipleSeparators
            } else {
                Violation::MissingSeparator
            };
            let mut violations = BTreeSet::from(Violation::ALL_CONTESTANT);
            violations.insert(structural);

            return Ok(ValidationOutcome::Invalid {
                violations,
                contestant1: ContestantEntry::default(),
                contestant2: ContestantEntry::default(),
            });
        }
    };

    let rest = index + CONTESTANT_RESULT_SEPARATOR.len_utf8();
    let contestant1 = ContestantEntry::parse(&trimmed[..index]);
    let contestant2 = ContestantEntry::parse(&trimmed[rest..]);

    let checks = [
        (index == 0, Violation::NoContestant1Result),
        (rest == trimmed.len(), Violation::NoContestant2Result),
        (!contestant1.has_name(), Violation::NoContestant1Name),
        (contestant1.score.is_none(), Violation::NoContestant1Score),
        (!contestant2.has_name(), Violation::NoContestant2Name),
        (contestant2.score.is_none(), Violation::NoContestant2Score),
    ];
    let violations: BTreeSet<Violation> = checks
        .into_iter()
        .filter(|(failed, _)| *failed)
        .map(|(_, violation)| violation)
        .collect();

    match (violations.is_empty(), contestant1.score, contestant2.score) {
        (true, Some(contestant1_score), Some(contestant2_score)) => {
            Ok(ValidationOutcome::Valid(ContestResult {
                contestant1_name: contestant1.name,
                contestant1_score,
                contestant2_name: contestant2.name,
                contestant2_score,
            }))
        }
        _ => Ok(ValidationOutcome::Invalid {
            violations,
            contestant1,
            contestant2,
        }),
    }
}
