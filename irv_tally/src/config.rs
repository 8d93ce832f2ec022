// ********* Input data structures ***********

use std::collections::HashMap;
use std::error::Error;
use std::fmt::Display;

use crate::tally::VoteCount;

/// The preferences of one voter, most preferred candidate first.
///
/// A ballot never contains the same candidate twice. An empty ballot is
/// exhausted and gets dropped by [`crate::remove_candidate`].
pub type Ballot = Vec<String>;

/// The weighted score of every candidate that appears on at least one ballot.
///
/// Candidates that appear on no ballot have no entry at all.
pub type Tally = HashMap<String, VoteCount>;

// ******** Output data structures *********

/// What happened to the election at the end of a round.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum RoundOutcome {
    Elected(String),
    Eliminated(String),
}

/// Statistics for one round
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct RoundStats {
    /// Starts at 1.
    pub round: u32,
    /// The score of every running candidate, in report order.
    /// Candidates without any vote are listed with an empty count.
    pub tally: Vec<(String, VoteCount)>,
    pub total: VoteCount,
    pub elected: Option<String>,
    pub eliminated: Option<String>,
    /// Where the ballots of the eliminated candidate went, in candidate order.
    /// Only ballots that ranked the eliminated candidate first are transferred.
    pub transfers: Vec<(String, u64)>,
    /// Number of ballots that ranked the eliminated candidate first and nobody after.
    pub exhausted: u64,
    /// The human-readable report for this round.
    pub report: String,
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct RoundResult {
    pub outcome: RoundOutcome,
    pub ballots: Vec<Ballot>,
    pub candidates: Vec<String>,
    pub stats: RoundStats,
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct VotingResult {
    pub winner: String,
    /// Half of the total score of the first round. The winner had strictly more.
    pub threshold: VoteCount,
    /// Number of non-exhausted ballots at the start of the election.
    pub num_ballots: usize,
    pub round_stats: Vec<RoundStats>,
}

/// Errors that prevent the algorithm from completing successfully.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum VotingErrors {
    /// No candidate was registered before adding ballots or running.
    EmptyElection,
    /// No winner and nobody left to eliminate in this round.
    InvalidVotes { round: u32 },
    DuplicateCandidate { name: String },
    /// The candidate in this column (starting at 1) has a blank name.
    EmptyCandidateName { column: usize },
    NoConvergence,
}

impl Error for VotingErrors {}

impl Display for VotingErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VotingErrors::EmptyElection => write!(f, "No candidates in this election"),
            VotingErrors::InvalidVotes { round } => write!(f, "Invalid votes (round {})", round),
            VotingErrors::DuplicateCandidate { name } => {
                write!(f, "Candidate {:?} is listed more than once", name)
            }
            VotingErrors::EmptyCandidateName { column } => {
                write!(f, "The candidate in column {} has no name", column)
            }
            VotingErrors::NoConvergence => write!(f, "The election did not converge"),
        }
    }
}
