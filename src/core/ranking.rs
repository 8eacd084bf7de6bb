use std::collections::HashMap;

use crate::domain::model::{ContestResult, PointsScheme, RankedEntry, RankingEntry};

/// Accumulates points per contestant name, ordered by points descending then
/// name ascending. Totals saturate at `u32::MAX`.
pub fn tally(results: &[ContestResult], scheme: &PointsScheme) -> Vec<RankingEntry> {
    let mut totals: HashMap<&str, u32> = HashMap::new();

    for result in results {
        let (points1, points2) = scheme.award(result);
        let total1 = totals.entry(result.contestant1_name.as_str()).or_insert(0);
        *total1 = total1.saturating_add(points1);
        let total2 = totals.entry(result.contestant2_name.as_str()).or_insert(0);
        *total2 = total2.saturating_add(points2);
    }

    let mut entries: Vec<RankingEntry> = totals
        .into_iter()
        .map(|(name, points)| RankingEntry {
            name: name.to_string(),
            points,
        })
        .collect();

    entries.sort_by(|a, b| b.points.cmp(&a.points).then_with(|| a.name.cmp(&b.name)));
    entries
}

/// Labels already-ordered entries with competition ranks: equal points share a
/// rank and the next group's rank is its 1-based position, so `[9, 4, 4, 3]`
/// becomes `[1, 2, 2, 4]`.
pub fn assign_ranks(entries: Vec<RankingEntry>) -> Vec<RankedEntry> {
    entries
        .into_iter()
        .enumerate()
        .scan(None::<(u32, usize)>, |group, (position, entry)| {
            let rank = match *group {
                Some((points, rank)) if points == entry.points => rank,
                _ => position + 1,
            };
            *group = Some((entry.points, rank));

            Some(RankedEntry {
                rank,
                name: entry.name,
                points: entry.points,
            })
        })
        .collect()
}

pub fn rank_results(results: &[ContestResult], scheme: &PointsScheme) -> Vec<RankedEntry> {
    assign_ranks(tally(results, scheme))
}
