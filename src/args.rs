use clap::Parser;

/// This is an instant-runoff tabulation program.
///
/// It reads a table of ranked ballots and prints the count of every round until a
/// candidate holds a strict majority.
#[derive(Parser, Debug, Clone, Default)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path) The file containing the ballots. The first row holds the names of the
    /// candidates, every following row holds the ranks given by one voter.
    #[clap(value_parser)]
    pub input: String,

    /// (file path, optional) A configuration file in JSON format. See the manual of
    /// irv_tally for the accepted fields.
    #[clap(short, long, value_parser)]
    pub config: Option<String>,

    /// (file path) A reference file containing the outcome of an election in JSON format. If provided, runoff will
    /// check that the tabulated output matches the reference.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    /// (file path, 'stdout' or empty) If specified, the summary of the election will be written in JSON format to the given
    /// location.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (default csv) The type of the input: csv or xlsx.
    #[clap(long, value_parser)]
    pub input_type: Option<String>,

    /// (default: first worksheet) When using an Excel file, indicates the name of the worksheet to use.
    #[clap(long, value_parser)]
    pub excel_worksheet_name: Option<String>,

    /// (default ',') The separator of the CSV file, as a single character.
    #[clap(long, value_parser)]
    pub delimiter: Option<String>,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard error.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn input_is_required() {
        let err = Args::try_parse_from(["runoff"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn help_is_not_an_error() {
        let err = Args::try_parse_from(["runoff", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn all_flags() {
        let args = Args::try_parse_from([
            "runoff",
            "votes.xlsx",
            "--input-type",
            "xlsx",
            "--excel-worksheet-name",
            "Round 1",
            "-o",
            "stdout",
            "--verbose",
        ])
        .unwrap();
        assert_eq!(args.input, "votes.xlsx");
        assert_eq!(args.input_type.as_deref(), Some("xlsx"));
        assert_eq!(args.excel_worksheet_name.as_deref(), Some("Round 1"));
        assert_eq!(args.out.as_deref(), Some("stdout"));
        assert!(args.verbose);
        assert_eq!(args.config, None);
    }
}
