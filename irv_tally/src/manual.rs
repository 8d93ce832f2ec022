/*!

This is the long-form manual for `irv_tally` and `runoff`.

## Input format

The ballots are stored in a table, one voter per row and one candidate per column:

```text
Anna,Bob,Clara,Dave
1,2,3,4
1,,2,
3,1,2,4
,1,2,
```

- The first row holds the names of the candidates. Their order is used to break
  ties and to print the reports.
- Every other row holds the rank that one voter gave to each candidate: `1` for
  the preferred candidate, then `2`, and so on.
- Ranks do not need to be contiguous: `3,,,4` is read as the same ballot as `1,,,2`.
- Blank cells, `0`, negative numbers and text are not errors. They simply mean
  that this voter did not rank this candidate.
- When a voter gives the same rank to several candidates, they are ranked in
  column order.
- Rows that are entirely blank are ignored.

`runoff` reads CSV files by default (see `--delimiter` for other separators).
Excel workbooks are supported with `--input-type xlsx`; the first worksheet is
used unless `--excel-worksheet-name` is given.

## Counting

Each round, a ballot gives `1` to its first choice, `0.1` to its second
choice, `0.01` to its third choice, and so on.

- A candidate with strictly more than half of the sum of all the scores wins.
  Exactly half is not enough.
- Otherwise, the candidate with the lowest score is eliminated. Candidates that
  appear on no ballot at all go first. Remaining ties go to the candidate listed
  first in the header.
- The eliminated candidate is removed from all the ballots. Ballots left empty are
  exhausted and no longer count.

Thanks to the decaying weights, two candidates with the same number of first
choices are separated by their second choices, then third choices, and so on.
The scores are computed with exact decimal arithmetic, whatever the number of ranks.

If no candidate can be eliminated and nobody won (for example, when there are
no ballots at all), the election stops with an `Invalid votes` error.

## Reports

A report is printed after each round:

```text
Anna: 5 votes
Bob: 2 votes
Dave: 2 votes
Clara: 1 vote
-----
Clara eliminated

```

The candidates are sorted by decreasing score, and the fractional part of the
scores is not displayed. Any score between 1 (included) and 2 (excluded) is
displayed as `1 vote`. The last report ends with `<name> won!`.

## Configuration

`runoff` accepts an optional configuration file in JSON with `--config`:

```json
{
  "outputSettings": {
    "contestName": "Board election",
    "contestDate": "2024-05-01",
    "contestJurisdiction": "Springfield",
    "contestOffice": "Chair",
    "outputDirectory": "results"
  },
  "fileSource": {
    "provider": "csv",
    "delimiter": ";",
    "excelWorksheetName": null
  }
}
```

All the fields are optional. The command line flags take precedence over the
configuration file.

## Summary

With `--out <file>` (or `--out stdout`), a summary of all the rounds is written in
JSON. The scores are written as exact decimal strings. A summary written
previously can be checked against a new run with `--reference <file>`.

## Exit status

| Status | Meaning |
|--------|---------|
| 0 | A winner was found, or the help was displayed |
| 1 | The input file does not exist or cannot be read |
| 2 | Wrong command line arguments |
| 3 | Invalid votes: nobody can be elected or eliminated, or the header is invalid |
| 4 | Bad configuration, summary output failure, or mismatch with the reference |

 */
