use calamine::{open_workbook, DataType, Reader, Xlsx};
use log::debug;

use crate::rcv::*;

/// Reads all the rows of a worksheet as text, header included.
///
/// The first worksheet is used when no name is given.
pub fn read_excel_records(path: &str, worksheet: Option<&str>) -> RcvResult<Vec<Vec<String>>> {
    let mut workbook: Xlsx<_> = open_workbook(path).context(OpeningExcelSnafu { path })?;
    let wrange = match worksheet {
        Some(name) => workbook.worksheet_range(name),
        None => workbook.worksheet_range_at(0),
    }
    .context(MissingWorksheetSnafu {
        name: worksheet.unwrap_or("<first>"),
        path,
    })?
    .context(OpeningExcelSnafu { path })?;

    let res: Vec<Vec<String>> = wrange
        .rows()
        .map(|row| row.iter().map(cell_to_token).collect())
        .collect();
    debug!("read_excel_records: {} rows in {:?}", res.len(), path);
    Ok(res)
}

/// The text of a cell, as it would appear in a CSV export.
fn cell_to_token(cell: &DataType) -> String {
    match cell {
        DataType::Empty => "".to_string(),
        DataType::String(s) => s.clone(),
        DataType::Int(i) => i.to_string(),
        DataType::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        DataType::Float(f) => f.to_string(),
        DataType::DateTime(f) => f.to_string(),
        DataType::Bool(b) => b.to_string(),
        other => format!("{:?}", other),
    }
}
