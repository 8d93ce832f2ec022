use std::cmp::Reverse;

use crate::config::Tally;
use crate::tally::{find_eliminated_candidate, VoteCount};

/// Anything in `[1, 2)` reads as a single vote.
pub fn plural_suffix(count: Option<VoteCount>) -> &'static str {
    match count {
        Some(c) if c.whole() == 1 => "",
        _ => "s",
    }
}

/// The candidates by decreasing score. Ties keep the order of `candidates`.
pub fn report_order(tally: &Tally, candidates: &[String]) -> Vec<(String, VoteCount)> {
    let mut rows: Vec<(String, VoteCount)> = candidates
        .iter()
        .map(|c| (c.clone(), tally.get(c).cloned().unwrap_or(VoteCount::EMPTY)))
        .collect();
    rows.sort_by_key(|(_, count)| Reverse(count.clone()));
    rows
}

pub fn count_report(tally: &Tally, candidates: &[String]) -> String {
    report_order(tally, candidates)
        .iter()
        .map(|(name, count)| {
            format!(
                "{}: {} vote{}",
                name,
                count.whole(),
                plural_suffix(tally.get(name).cloned())
            )
        })
        .collect::<Vec<String>>()
        .join("\n")
}

/// The report printed at the end of each round.
///
/// ```text
/// A: 4 votes
/// B: 3 votes
/// C: 1 vote
/// -----
/// C eliminated
///
/// ```
pub fn round_report(tally: &Tally, winner: Option<&str>, candidates: &[String]) -> String {
    let result = match winner {
        Some(w) => format!("{} won!", w),
        None => match find_eliminated_candidate(tally, candidates) {
            Some(c) => format!("{} eliminated", c),
            None => "No candidate eliminated".to_string(),
        },
    };
    format!("{}\n-----\n{}\n\n", count_report(tally, candidates), result)
}
