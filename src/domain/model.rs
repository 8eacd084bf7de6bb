use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between the two contestant parts of a result line.
pub const CONTESTANT_RESULT_SEPARATOR: char = ',';

/// One validated pairwise outcome.
///
/// Field names are serialized in PascalCase so existing result logs keep
/// loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ContestResult {
    pub contestant1_name: String,
    pub contestant1_score: u16,
    pub contestant2_name: String,
    pub contestant2_score: u16,
}

impl fmt::Display for ContestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}{} {} {}",
            self.contestant1_name,
            self.contestant1_score,
            CONTESTANT_RESULT_SEPARATOR,
            self.contestant2_name,
            self.contestant2_score
        )
    }
}

/// Points awarded per result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointsScheme {
    pub win: u32,
    pub draw: u32,
    pub loss: u32,
}

impl Default for PointsScheme {
    fn default() -> Self {
        Self {
            win: 3,
            draw: 1,
            loss: 0,
        }
    }
}

impl PointsScheme {
    /// Points for (contestant 1, contestant 2) in a single result.
    pub fn award(&self, result: &ContestResult) -> (u32, u32) {
        use std::cmp::Ordering;

        match result.contestant1_score.cmp(&result.contestant2_score) {
            Ordering::Greater => (self.win, self.loss),
            Ordering::Less => (self.loss, self.win),
            Ordering::Equal => (self.draw, self.draw),
        }
    }
}

/// Accumulated points for one contestant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingEntry {
    pub name: String,
    pub points: u32,
}

/// A ranking entry with its competition rank ("1224" style).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub rank: usize,
    pub name: String,
    pub points: u32,
}

impl RankedEntry {
    pub fn point_label(&self) -> &'static str {
        if self.points == 1 {
            "pt"
        } else {
            "pts"
        }
    }
}

impl fmt::Display for RankedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {}, {} {}",
            self.rank,
            self.name,
            self.points,
            self.point_label()
        )
    }
}
