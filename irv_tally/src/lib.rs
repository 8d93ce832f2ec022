/*!
Instant-runoff tally over ranked ballots.

Every round, each ballot gives `1` to its first choice, `0.1` to its second
choice, `0.01` to its third choice and so on. A candidate with strictly more
than half of all the scores wins. Otherwise the candidate with the lowest score
is removed from all the ballots and a new round starts.

```
use irv_tally::builder::Builder;
# use irv_tally::VotingErrors;

let candidates = vec!["Anna".to_string(), "Bob".to_string(), "Clara".to_string()];
let mut builder = Builder::new().candidates(&candidates)?;
builder.add_ranks(&["1", "2", ""])?;
builder.add_ranks(&["", "1", "2"])?;
builder.add_ranks(&["1", "", "2"])?;

let result = builder.run(|stats| print!("{}", stats.report))?;
assert_eq!(result.winner, "Anna");
# Ok::<(), VotingErrors>(())
```
*/
mod ballot;
mod config;
mod report;
mod tally;

pub mod builder;
pub mod manual;

use log::{debug, info};
use std::collections::HashMap;

pub use crate::ballot::*;
pub use crate::config::*;
pub use crate::report::*;
pub use crate::tally::*;

/// Counts the ballots of one round and decides its outcome, without applying it.
pub fn tally_round(ballots: &[Ballot], candidates: &[String], round: u32) -> RoundStats {
    let tally = compute_tally(ballots);
    debug!("tally_round: round {}: tally: {:?}", round, tally);

    let elected = find_winner(&tally);
    let eliminated = match elected {
        Some(_) => None,
        None => find_eliminated_candidate(&tally, candidates),
    };
    let (transfers, exhausted) = match eliminated.as_deref() {
        Some(name) => elimination_transfers(ballots, name, candidates),
        None => (Vec::new(), 0),
    };

    RoundStats {
        round,
        tally: report_order(&tally, candidates),
        total: total_votes(&tally),
        report: round_report(&tally, elected.as_deref(), candidates),
        elected,
        eliminated,
        transfers,
        exhausted,
    }
}

// The ballots that ranked the eliminated candidate first go to their next choice.
fn elimination_transfers(
    ballots: &[Ballot],
    eliminated: &str,
    candidates: &[String],
) -> (Vec<(String, u64)>, u64) {
    let mut transfers: HashMap<&str, u64> = HashMap::new();
    let mut exhausted: u64 = 0;
    for ballot in ballots.iter() {
        match ballot.as_slice() {
            [first, next, ..] if first == eliminated => {
                *transfers.entry(next.as_str()).or_insert(0) += 1;
            }
            [first] if first == eliminated => {
                exhausted += 1;
            }
            _ => {}
        }
    }
    let ordered = candidates
        .iter()
        .filter_map(|c| transfers.get(c.as_str()).map(|n| (c.clone(), *n)))
        .collect();
    (ordered, exhausted)
}

/// Runs a single round.
///
/// Returns the winner with the unchanged ballots, or the eliminated candidate
/// with the ballots and candidates that remain for the next round.
pub fn run_one_round(
    ballots: &[Ballot],
    candidates: &[String],
    round: u32,
) -> Result<RoundResult, VotingErrors> {
    let stats = tally_round(ballots, candidates, round);
    apply_round(stats, ballots, candidates)
}

fn apply_round(
    stats: RoundStats,
    ballots: &[Ballot],
    candidates: &[String],
) -> Result<RoundResult, VotingErrors> {
    if let Some(winner) = stats.elected.clone() {
        info!("Round {}: {} elected", stats.round, winner);
        return Ok(RoundResult {
            outcome: RoundOutcome::Elected(winner),
            ballots: ballots.to_vec(),
            candidates: candidates.to_vec(),
            stats,
        });
    }

    let eliminated = stats
        .eliminated
        .clone()
        .ok_or(VotingErrors::InvalidVotes { round: stats.round })?;
    info!(
        "Round {}: {} eliminated (transfers: {:?}, exhausted: {})",
        stats.round, eliminated, stats.transfers, stats.exhausted
    );

    let remaining: Vec<String> = candidates
        .iter()
        .filter(|c| **c != eliminated)
        .cloned()
        .collect();
    let rem_ballots = remove_candidate(ballots, Some(eliminated.as_str()));
    Ok(RoundResult {
        outcome: RoundOutcome::Eliminated(eliminated),
        ballots: rem_ballots,
        candidates: remaining,
        stats,
    })
}

/// Runs rounds until a candidate is elected.
///
/// `on_round` sees the statistics of every round as soon as it is counted,
/// including a last round that fails with [`VotingErrors::InvalidVotes`].
///
/// Arguments:
/// * `ballots` the ballots, already converted to preference lists
/// * `candidates` the candidates, in the order used to break ties and to print reports
pub fn run_voting_rounds<F>(
    ballots: &[Ballot],
    candidates: &[String],
    mut on_round: F,
) -> Result<VotingResult, VotingErrors>
where
    F: FnMut(&RoundStats),
{
    info!(
        "Processing {:?} ballots, candidates: {:?}",
        ballots.len(),
        candidates
    );

    let mut cur_ballots: Vec<Ballot> = trim_exhausted(ballots.to_vec());
    let num_ballots = cur_ballots.len();
    let mut cur_candidates: Vec<String> = candidates.to_vec();
    let mut cur_stats: Vec<RoundStats> = Vec::new();

    // One candidate leaves every round, the last one standing holds all the votes.
    let max_rounds = candidates.len().max(1) as u32;
    for round in 1..=max_rounds {
        let stats = tally_round(&cur_ballots, &cur_candidates, round);
        on_round(&stats);
        let res = apply_round(stats, &cur_ballots, &cur_candidates)?;
        cur_stats.push(res.stats);
        match res.outcome {
            RoundOutcome::Elected(winner) => {
                let threshold = cur_stats
                    .first()
                    .map(|s| s.total.half())
                    .unwrap_or(VoteCount::EMPTY);
                return Ok(VotingResult {
                    winner,
                    threshold,
                    num_ballots,
                    round_stats: cur_stats,
                });
            }
            RoundOutcome::Eliminated(_) => {
                cur_ballots = res.ballots;
                cur_candidates = res.candidates;
            }
        }
    }
    Err(VotingErrors::NoConvergence)
}

/// Same as [`run_voting_rounds`], without looking at the rounds as they happen.
pub fn run_voting_stats(
    ballots: &[Ballot],
    candidates: &[String],
) -> Result<VotingResult, VotingErrors> {
    run_voting_rounds(ballots, candidates, |_| {})
}
