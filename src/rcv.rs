use log::{debug, info, warn};

use irv_tally::builder::Builder;
use irv_tally::*;
use snafu::{prelude::*, Snafu};

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::json;
use serde_json::Map as JSMap;
use serde_json::Value as JSValue;
use text_diff::print_diff;

use crate::args::Args;
use crate::rcv::config_reader::*;

pub mod config_reader;
mod io_common;
mod io_csv;
mod io_excel;

#[derive(Debug, Snafu)]
pub enum RcvError {
    #[snafu(display("Sorry, the file {path} does not exist"))]
    MissingInput { path: String },
    #[snafu(display("Error opening CSV file {path}: {source}"))]
    OpeningCsv { source: csv::Error, path: String },
    #[snafu(display("Error reading record {record} of CSV file {path}: {source}"))]
    ReadingCsvRecord {
        source: csv::Error,
        path: String,
        record: usize,
    },
    #[snafu(display("Error opening Excel file {path}: {source}"))]
    OpeningExcel {
        source: calamine::XlsxError,
        path: String,
    },
    #[snafu(display("No worksheet named {name} in {path}"))]
    MissingWorksheet { name: String, path: String },
    #[snafu(display("The file {path} has no row with candidate names"))]
    EmptyInput { path: String },
    #[snafu(display("Error opening JSON file {path}: {source}"))]
    OpeningJson {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing JSON: {source}"))]
    ParsingJson { source: serde_json::Error },
    #[snafu(display("Error writing the summary to {path}: {source}"))]
    WritingOutput {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Unknown input type {provider:?} (expected csv or xlsx)"))]
    UnknownProvider { provider: String },
    #[snafu(display("Invalid delimiter {delimiter:?}: expected a single ASCII character"))]
    InvalidDelimiter { delimiter: String },
    #[snafu(display("{source}"))]
    Voting { source: VotingErrors },
    #[snafu(display("Difference detected between calculated summary and reference summary"))]
    ReferenceMismatch {},
}

pub type RcvResult<T> = Result<T, RcvError>;

impl RcvError {
    /// The status returned by the process for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            RcvError::MissingInput { .. }
            | RcvError::OpeningCsv { .. }
            | RcvError::ReadingCsvRecord { .. }
            | RcvError::OpeningExcel { .. }
            | RcvError::MissingWorksheet { .. }
            | RcvError::EmptyInput { .. } => 1,
            RcvError::Voting { .. } => 3,
            RcvError::OpeningJson { .. }
            | RcvError::ParsingJson { .. }
            | RcvError::WritingOutput { .. }
            | RcvError::UnknownProvider { .. }
            | RcvError::InvalidDelimiter { .. }
            | RcvError::ReferenceMismatch {} => 4,
        }
    }
}

fn result_stats_to_json(rs: &VotingResult) -> Vec<JSValue> {
    let mut l: Vec<JSValue> = Vec::new();
    for round_stat in rs.round_stats.iter() {
        let mut tally: JSMap<String, JSValue> = JSMap::new();
        for (name, count) in round_stat.tally.iter() {
            tally.insert(name.clone(), json!(count.to_string()));
        }

        let mut tally_results: Vec<JSValue> = Vec::new();
        if let Some(name) = &round_stat.eliminated {
            let mut transfers: JSMap<String, JSValue> = JSMap::new();
            for (t_name, t_count) in round_stat.transfers.iter() {
                transfers.insert(t_name.clone(), json!(t_count.to_string()));
            }
            if round_stat.exhausted > 0 {
                transfers.insert(
                    "exhausted".to_string(),
                    json!(round_stat.exhausted.to_string()),
                );
            }
            tally_results.push(json!({
                "eliminated": name,
                "transfers": transfers
            }));
        }
        if let Some(name) = &round_stat.elected {
            tally_results.push(json!({
                "elected": name,
                "transfers": {}
            }));
        }

        let js = json!({"round": round_stat.round, "tally": tally, "tallyResults": tally_results});
        l.push(js);
    }
    l
}

fn build_summary_js(output_settings: &OutputSettings, contest: &str, rv: &VotingResult) -> JSValue {
    let c = OutputConfig {
        contest: output_settings
            .contest_name
            .clone()
            .unwrap_or_else(|| contest.to_string()),
        date: output_settings.contest_date.clone(),
        jurisdiction: output_settings.contest_jurisdiction.clone(),
        office: output_settings.contest_office.clone(),
        threshold: Some(rv.threshold.to_string()),
    };
    json!({
        "config": c,
        "results": result_stats_to_json(rv) })
}

fn read_ballot_records(path: &str, source: &FileSource) -> RcvResult<Vec<Vec<String>>> {
    ensure!(
        Path::new(path).is_file(),
        MissingInputSnafu {
            path: path.to_string()
        }
    );
    info!("Attempting to read rank file {:?}", path);
    match source.provider() {
        "csv" => io_csv::read_csv_records(path, source.delimiter_byte()?),
        "xlsx" | "excel" => {
            io_excel::read_excel_records(path, source.excel_worksheet_name.as_deref())
        }
        x => UnknownProviderSnafu { provider: x }.fail(),
    }
}

fn output_path(out: &str, output_settings: &OutputSettings) -> PathBuf {
    let p = Path::new(out);
    match &output_settings.output_directory {
        Some(dir) if p.is_relative() => Path::new(dir).join(p),
        _ => p.to_path_buf(),
    }
}

/// Reads the ballots, prints the report of every round and returns the winner.
pub fn run_election(args: &Args) -> RcvResult<String> {
    let config: RcvConfig = match &args.config {
        Some(config_path) => read_config(config_path)?,
        None => RcvConfig::default(),
    };
    info!("config: {:?}", config);
    let source = config.file_source.overridden_by(args);

    let records = read_ballot_records(&args.input, &source)?;
    let (header, rows) = io_common::split_header(records).context(EmptyInputSnafu {
        path: args.input.clone(),
    })?;
    debug!("run_election: candidates: {:?}", header);

    let mut builder = Builder::new().candidates(&header).context(VotingSnafu {})?;
    for row in rows.iter() {
        builder.add_ranks(row.as_slice()).context(VotingSnafu {})?;
    }
    info!(
        "Read {} ballots from {} rows",
        builder.ballots().len(),
        rows.len()
    );

    let result = builder
        .run(|stats| print!("{}", stats.report))
        .context(VotingSnafu {})?;
    info!("Winner: {}", result.winner);

    let contest = io_common::simplify_file_name(&args.input);
    let result_js = build_summary_js(&config.output_settings, &contest, &result);
    let pretty_js_stats = serde_json::to_string_pretty(&result_js).context(ParsingJsonSnafu {})?;

    match args.out.as_deref() {
        None | Some("") => {}
        Some("stdout") => println!("{}", pretty_js_stats),
        Some(out) => {
            let p = output_path(out, &config.output_settings);
            info!("Writing summary to {:?}", p);
            fs::write(&p, &pretty_js_stats).context(WritingOutputSnafu {
                path: p.display().to_string(),
            })?;
        }
    }

    // The reference summary, if provided for comparison
    if let Some(summary_p) = &args.reference {
        let summary_ref = read_summary(summary_p)?;
        let pretty_js_summary_ref =
            serde_json::to_string_pretty(&summary_ref).context(ParsingJsonSnafu {})?;
        if pretty_js_summary_ref != pretty_js_stats {
            warn!("Found differences with the reference string");
            print_diff(
                pretty_js_summary_ref.as_str(),
                pretty_js_stats.as_ref(),
                "\n",
            );
            return ReferenceMismatchSnafu {}.fail();
        }
    }

    Ok(result.winner)
}
