use log::debug;

use crate::config::Ballot;

/// Reads the rank written in a cell, if it is a positive integer.
///
/// The parsing is lenient: leading whitespace is skipped and only the leading
/// digits are read, so `"2nd"` is 2 and `"1.5"` is 1. Blank, zero, negative or
/// unreadable cells carry no preference.
pub fn positive_rank(token: &str) -> Option<u64> {
    let token = token.trim_start();
    let (negative, digits) = match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };
    let rank = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0u64, |acc, d| {
            acc.saturating_mul(10).saturating_add(u64::from(d - b'0'))
        });
    if negative || rank == 0 {
        None
    } else {
        Some(rank)
    }
}

/// Converts the rank cells of one voter into a ballot.
///
/// `ranks` and `candidates` are matched by column. Candidates with the same
/// rank keep their column order. Cells beyond the last candidate are ignored.
pub fn to_ballot<S: AsRef<str>>(ranks: &[S], candidates: &[String]) -> Ballot {
    let mut ranked: Vec<(u64, &String)> = ranks
        .iter()
        .zip(candidates.iter())
        .filter_map(|(token, name)| positive_rank(token.as_ref()).map(|rank| (rank, name)))
        .collect();
    // Stable sort
    ranked.sort_by_key(|(rank, _)| *rank);
    ranked.into_iter().map(|(_, name)| name.clone()).collect()
}

/// Drops the exhausted ballots.
pub fn trim_exhausted(ballots: Vec<Ballot>) -> Vec<Ballot> {
    ballots.into_iter().filter(|b| !b.is_empty()).collect()
}

/// Removes a candidate from all the ballots, then drops the exhausted ones.
pub fn remove_candidate(ballots: &[Ballot], candidate: Option<&str>) -> Vec<Ballot> {
    let candidate = match candidate {
        Some(c) => c,
        None => return ballots.to_vec(),
    };
    let filtered: Vec<Ballot> = ballots
        .iter()
        .map(|ballot| {
            ballot
                .iter()
                .filter(|name| name.as_str() != candidate)
                .cloned()
                .collect()
        })
        .collect();
    let res = trim_exhausted(filtered);
    debug!(
        "remove_candidate: removed {:?}: {} ballots -> {} ballots",
        candidate,
        ballots.len(),
        res.len()
    );
    res
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn ballots(raw: &[&[&str]]) -> Vec<Ballot> {
        raw.iter().map(|b| names(b)).collect()
    }

    #[test]
    fn rank_parsing() {
        assert_eq!(positive_rank("1"), Some(1));
        assert_eq!(positive_rank(" 12"), Some(12));
        assert_eq!(positive_rank("+3"), Some(3));
        assert_eq!(positive_rank("2nd"), Some(2));
        assert_eq!(positive_rank("1.5"), Some(1));
        assert_eq!(positive_rank(""), None);
        assert_eq!(positive_rank("   "), None);
        assert_eq!(positive_rank("0"), None);
        assert_eq!(positive_rank("-1"), None);
        assert_eq!(positive_rank("abc"), None);
        assert_eq!(positive_rank("99999999999999999999999"), Some(u64::MAX));
    }

    #[test]
    fn to_ballot_orders_by_rank() {
        let abcd = names(&["A", "B", "C", "D"]);
        assert_eq!(to_ballot(&["3", "2", "1", ""], &abcd), names(&["C", "B", "A"]));
        assert_eq!(to_ballot(&["1", "2", "3", "4"], &abcd), abcd);
        assert_eq!(to_ballot(&["1", "", "", ""], &abcd), names(&["A"]));
        assert_eq!(to_ballot(&["1", "", "", "2"], &abcd), names(&["A", "D"]));
        assert_eq!(to_ballot(&["3", "", "", "4"], &abcd), names(&["A", "D"]));
        assert_eq!(to_ballot(&["1", "2", "", "4"], &abcd), names(&["A", "B", "D"]));
        assert_eq!(to_ballot(&["3", "4", "1", "2"], &abcd), names(&["C", "D", "A", "B"]));
    }

    #[test]
    fn to_ballot_is_lenient() {
        let abcd = names(&["A", "B", "C", "D"]);
        assert_eq!(to_ballot(&["0", "-2", "x", ""], &abcd), Vec::<String>::new());
        // Equal ranks keep the column order.
        assert_eq!(to_ballot(&["2", "1", "1", "2"], &abcd), names(&["B", "C", "A", "D"]));
        // Short rows and long rows.
        assert_eq!(to_ballot(&["", "1"], &abcd), names(&["B"]));
        assert_eq!(to_ballot(&["", "", "", "1", "2"], &abcd), names(&["D"]));
    }

    #[test]
    fn to_ballot_never_keeps_unranked_candidates() {
        let abcd = names(&["A", "B", "C", "D"]);
        let rows: &[&[&str]] = &[
            &["1", "0", "", "2"],
            &["-1", "3", "zz", " 1"],
            &["", "", "", ""],
            &["4", "4", "4", "4"],
        ];
        for row in rows.iter() {
            let ballot = to_ballot(*row, &abcd);
            for (token, name) in row.iter().zip(abcd.iter()) {
                if positive_rank(token).is_none() {
                    assert!(!ballot.contains(name), "{:?} {:?}", row, ballot);
                }
            }
        }
    }

    #[test]
    fn trim() {
        assert_eq!(trim_exhausted(ballots(&[&[], &[], &[], &[]])), Vec::<Ballot>::new());
        assert_eq!(
            trim_exhausted(ballots(&[&[], &[], &["1", "2", "3"], &[]])),
            ballots(&[&["1", "2", "3"]])
        );
        assert_eq!(
            trim_exhausted(ballots(&[&[], &["A"], &["A", "B", "C", "D"], &["A", "B", "C"], &[]])),
            ballots(&[&["A"], &["A", "B", "C", "D"], &["A", "B", "C"]])
        );
    }

    #[test]
    fn remove() {
        let start = ballots(&[&["B"], &["C", "B", "A"], &["A"], &["D", "B", "C"], &["A", "B", "C"]]);
        assert_eq!(
            remove_candidate(&start, Some("A")),
            ballots(&[&["B"], &["C", "B"], &["D", "B", "C"], &["B", "C"]])
        );
        assert_eq!(remove_candidate(&start, None), start);
        assert_eq!(
            remove_candidate(&start, Some("B")),
            ballots(&[&["C", "A"], &["A"], &["D", "C"], &["A", "C"]])
        );
        let step = remove_candidate(&start, Some("A"));
        let step = remove_candidate(&step, Some("B"));
        assert_eq!(remove_candidate(&step, Some("C")), ballots(&[&["D"]]));
        assert_eq!(
            remove_candidate(&ballots(&[&["A"]]), Some("A")),
            Vec::<Ballot>::new()
        );
    }

    #[test]
    fn remove_drops_exhausted_ballot() {
        let start = ballots(&[
            &["A", "B", "C"],
            &["C", "B", "A"],
            &["A"],
            &["D", "B", "C"],
            &["A", "B", "C"],
        ]);
        assert_eq!(
            remove_candidate(&start, Some("A")),
            ballots(&[&["B", "C"], &["C", "B"], &["D", "B", "C"], &["B", "C"]])
        );
    }
}
