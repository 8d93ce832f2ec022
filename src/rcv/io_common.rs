use log::warn;
use std::path::Path;

pub fn simplify_file_name(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(path)
        .to_string()
}

/// A row where every cell is blank.
pub fn is_blank_row(row: &[String]) -> bool {
    row.iter().all(|cell| cell.trim().is_empty())
}

/// Splits the first non-blank row (the candidates) from the ballots.
///
/// The names are trimmed, and blank rows are dropped. Blank cells at the end
/// of the header are not candidates: the ranks under them are ignored.
pub fn split_header(records: Vec<Vec<String>>) -> Option<(Vec<String>, Vec<Vec<String>>)> {
    let mut rows = records.into_iter().filter(|r| !is_blank_row(r));
    let mut header: Vec<String> = rows.next()?.iter().map(|c| c.trim().to_string()).collect();
    let num_cells = header.len();
    while header.last().map(|c| c.is_empty()).unwrap_or(false) {
        header.pop();
    }
    if header.len() < num_cells {
        warn!(
            "Ignoring {} blank column(s) at the end of the header",
            num_cells - header.len()
        );
    }
    Some((header, rows.collect()))
}
