use std::cmp::max;
use std::fmt;
use std::mem;
use std::ops::{Add, AddAssign};

use crate::config::{Ballot, Tally};

/// An exact decimal score.
///
/// A ballot gives `10^-k` to the candidate at (zero-based) position `k`, so
/// that deeper preferences break ties between candidates with the same number
/// of first choices. The score keeps as many decimal digits as the deepest
/// ballot needs, so comparisons stay exact at any rank depth.
///
/// The fractional digits never end with a zero. The derived ordering on
/// `(whole, fraction)` is then the numeric ordering.
#[derive(Eq, PartialEq, Debug, Clone, PartialOrd, Ord, Hash, Default)]
pub struct VoteCount {
    whole: u64,
    fraction: Vec<u8>,
}

impl VoteCount {
    pub const EMPTY: VoteCount = VoteCount {
        whole: 0,
        fraction: Vec::new(),
    };

    pub fn from_whole(votes: u64) -> VoteCount {
        VoteCount {
            whole: votes,
            fraction: Vec::new(),
        }
    }

    /// The weight of the candidate found at the given position of a ballot.
    pub fn weight_at(position: usize) -> VoteCount {
        if position == 0 {
            return VoteCount::from_whole(1);
        }
        let mut fraction = vec![0u8; position];
        fraction[position - 1] = 1;
        VoteCount { whole: 0, fraction }
    }

    /// The integer part of the score.
    pub fn whole(&self) -> u64 {
        self.whole
    }

    pub fn half(&self) -> VoteCount {
        let mut rem = self.whole % 2;
        let mut fraction: Vec<u8> = Vec::with_capacity(self.fraction.len() + 1);
        for d in self.fraction.iter() {
            let v = rem * 10 + u64::from(*d);
            fraction.push((v / 2) as u8);
            rem = v % 2;
        }
        if rem == 1 {
            fraction.push(5);
        }
        VoteCount::normalized(self.whole / 2, fraction)
    }

    /// Strictly more than half of the total.
    pub fn is_majority_of(&self, total: &VoteCount) -> bool {
        self.clone() + self.clone() > *total
    }

    fn normalized(whole: u64, mut fraction: Vec<u8>) -> VoteCount {
        while fraction.last() == Some(&0) {
            fraction.pop();
        }
        VoteCount { whole, fraction }
    }
}

impl std::iter::Sum for VoteCount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(VoteCount::EMPTY, |acc, vc| acc + vc)
    }
}

impl AddAssign for VoteCount {
    fn add_assign(&mut self, rhs: VoteCount) {
        *self = mem::take(self) + rhs;
    }
}

impl Add for VoteCount {
    type Output = VoteCount;
    fn add(self: VoteCount, rhs: VoteCount) -> VoteCount {
        let len = max(self.fraction.len(), rhs.fraction.len());
        let mut fraction = vec![0u8; len];
        let mut carry = 0u8;
        for i in (0..len).rev() {
            let s = self.fraction.get(i).cloned().unwrap_or(0)
                + rhs.fraction.get(i).cloned().unwrap_or(0)
                + carry;
            fraction[i] = s % 10;
            carry = s / 10;
        }
        VoteCount::normalized(self.whole + rhs.whole + u64::from(carry), fraction)
    }
}

impl fmt::Display for VoteCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.whole)?;
        if !self.fraction.is_empty() {
            write!(f, ".")?;
            for d in self.fraction.iter() {
                write!(f, "{}", d)?;
            }
        }
        Ok(())
    }
}

/// Counts every ballot for every candidate it still ranks, with decaying weights.
pub fn compute_tally(ballots: &[Ballot]) -> Tally {
    let mut tally = Tally::new();
    for ballot in ballots.iter() {
        for (position, name) in ballot.iter().enumerate() {
            let e = tally.entry(name.clone()).or_insert(VoteCount::EMPTY);
            *e += VoteCount::weight_at(position);
        }
    }
    tally
}

pub fn total_votes(tally: &Tally) -> VoteCount {
    tally.values().cloned().sum()
}

/// Returns the candidate with strictly more than half of all the scores, if any.
pub fn find_winner(tally: &Tally) -> Option<String> {
    let total = total_votes(tally);
    tally
        .iter()
        .find(|(_, count)| count.is_majority_of(&total))
        .map(|(name, _)| name.clone())
}

/// Returns the candidate with the lowest score.
///
/// Candidates missing from the tally go first, and ties go to the candidate
/// listed first. Nobody is returned for an empty tally or an empty list.
pub fn find_eliminated_candidate(tally: &Tally, candidates: &[String]) -> Option<String> {
    if tally.is_empty() || candidates.is_empty() {
        return None;
    }
    // None orders before any count: absent candidates are the weakest.
    candidates
        .iter()
        .min_by_key(|name| tally.get(*name).cloned())
        .cloned()
}
