// Primitives for reading CSV files.

use log::debug;

use crate::rcv::*;

/// Reads all the rows of a CSV file, header included.
///
/// Rows may have different lengths.
pub fn read_csv_records(path: &str, delimiter: u8) -> RcvResult<Vec<Vec<String>>> {
    let rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_path(path)
        .context(OpeningCsvSnafu { path })?;

    let mut res: Vec<Vec<String>> = Vec::new();
    for (idx, line_r) in rdr.into_records().enumerate() {
        let line = line_r.context(ReadingCsvRecordSnafu {
            path,
            record: idx + 1,
        })?;
        let row: Vec<String> = line.iter().map(|s| s.to_string()).collect();
        debug!("read_csv_records: record {:?}: {:?}", idx + 1, row);
        res.push(row);
    }
    Ok(res)
}
