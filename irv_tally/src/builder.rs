use log::{debug, warn};
use std::collections::HashSet;

pub use crate::config::*;
use crate::{run_voting_rounds, to_ballot};

/// A builder for adding votes.
///
/// The candidates come first, usually from the header row of a file. Every
/// other row holds the ranks given by one voter, in the same column order.
///
/// ```
/// pub use irv_tally::builder::Builder;
/// # use irv_tally::VotingErrors;
///
/// let mut builder = Builder::new()
///     .candidates(&["Anna".to_string(), "Bob".to_string()])?;
///
/// builder.add_ranks(&["2", "1"])?;
/// builder.add_ranks(&["", ""])?;
///
/// assert_eq!(builder.ballots(), &[vec!["Bob".to_string(), "Anna".to_string()]]);
///
/// # Ok::<(), VotingErrors>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Builder {
    pub(crate) _candidates: Option<Vec<String>>,
    pub(crate) _ballots: Vec<Ballot>,
}

impl Builder {
    pub fn new() -> Builder {
        Builder {
            _candidates: None,
            _ballots: Vec::new(),
        }
    }

    /// Registers the candidates. Any ballot added before is discarded.
    pub fn candidates(self, cands: &[String]) -> Result<Builder, VotingErrors> {
        let mut seen: HashSet<&String> = HashSet::new();
        for (idx, name) in cands.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(VotingErrors::EmptyCandidateName { column: idx + 1 });
            }
            if !seen.insert(name) {
                return Err(VotingErrors::DuplicateCandidate { name: name.clone() });
            }
        }
        if !self._ballots.is_empty() {
            warn!(
                "Builder::candidates: dropping {} ballots added before the candidates",
                self._ballots.len()
            );
        }
        Ok(Builder {
            _candidates: Some(cands.to_vec()),
            _ballots: Vec::new(),
        })
    }

    /// Adds the ranks written by one voter.
    ///
    /// Cells that are not positive integers are skipped. A voter that ranked
    /// nobody does not count.
    pub fn add_ranks<S: AsRef<str>>(&mut self, ranks: &[S]) -> Result<(), VotingErrors> {
        let candidates = self
            ._candidates
            .as_deref()
            .ok_or(VotingErrors::EmptyElection)?;
        if ranks.len() > candidates.len() {
            debug!(
                "add_ranks: ignoring {} cells beyond the last candidate",
                ranks.len() - candidates.len()
            );
        }
        let ballot = to_ballot(ranks, candidates);
        if ballot.is_empty() {
            debug!("add_ranks: empty ballot skipped");
        } else {
            self._ballots.push(ballot);
        }
        Ok(())
    }

    pub fn candidate_names(&self) -> &[String] {
        self._candidates.as_deref().unwrap_or(&[])
    }

    pub fn ballots(&self) -> &[Ballot] {
        &self._ballots
    }

    /// Runs the election, see [`crate::run_voting_rounds`].
    pub fn run<F>(&self, on_round: F) -> Result<VotingResult, VotingErrors>
    where
        F: FnMut(&RoundStats),
    {
        let candidates = self
            ._candidates
            .as_deref()
            .ok_or(VotingErrors::EmptyElection)?;
        run_voting_rounds(&self._ballots, candidates, on_round)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn ranks_need_candidates() {
        let mut builder = Builder::new();
        assert_eq!(builder.add_ranks(&["1"]), Err(VotingErrors::EmptyElection));
        assert_eq!(builder.run(|_| {}).err(), Some(VotingErrors::EmptyElection));
        assert!(builder.candidate_names().is_empty());
    }

    #[test]
    fn duplicate_candidates() {
        let res = Builder::new().candidates(&names(&["A", "B", "A"]));
        assert_eq!(
            res.err(),
            Some(VotingErrors::DuplicateCandidate {
                name: "A".to_string()
            })
        );
    }

    #[test]
    fn blank_candidate_name() {
        let res = Builder::new().candidates(&names(&["A", " ", "C"]));
        assert_eq!(
            res.err(),
            Some(VotingErrors::EmptyCandidateName { column: 2 })
        );
    }

    #[test]
    fn builds_ballots_in_rank_order() {
        let mut builder = Builder::new()
            .candidates(&names(&["A", "B", "C", "D"]))
            .unwrap();
        builder.add_ranks(&["3", "4", "1", "2"]).unwrap();
        builder.add_ranks(&["", "", "", ""]).unwrap();
        builder.add_ranks(&["1"]).unwrap();
        assert_eq!(
            builder.ballots(),
            &[names(&["C", "D", "A", "B"]), names(&["A"])]
        );
        assert_eq!(builder.candidate_names(), names(&["A", "B", "C", "D"]).as_slice());
    }

    #[test]
    fn runs_the_election() {
        let rows: &[&[&str]] = &[
            &["1", "2", "3", "4"],
            &["1", "", "2"],
            &["3", "1", "2", "4"],
            &["", "1", "2", ""],
            &["3", "", "1", "2"],
            &["2", "", "", "1"],
            &["1", "", "", "2"],
            &["1", "2", "", ""],
            &["3", "", "2", "1"],
            &["1", "3", "2", ""],
        ];
        let mut builder = Builder::new()
            .candidates(&names(&["A", "B", "C", "D"]))
            .unwrap();
        for row in rows.iter() {
            builder.add_ranks(*row).unwrap();
        }
        let mut reports = String::new();
        let res = builder.run(|s| reports.push_str(&s.report)).unwrap();
        assert_eq!(res.winner, "A");
        assert_eq!(
            reports,
            "A: 5 votes\nB: 2 votes\nD: 2 votes\nC: 1 vote\n-----\nC eliminated\n\n\
             A: 5 votes\nD: 3 votes\nB: 2 votes\n-----\nB eliminated\n\n\
             A: 6 votes\nD: 3 votes\n-----\nA won!\n\n"
        );
    }
}
