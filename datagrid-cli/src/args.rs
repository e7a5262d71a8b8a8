use std::path::PathBuf;

use clap::Parser;
use clap::ValueEnum;

/// What to print once the table state is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Header, visible rows and pagination footer.
    Grid,
    /// CSV export of the displayed rows.
    Csv,
    /// The emitted query object as JSON.
    Query,
    /// The list endpoint URL for the emitted query.
    Url,
}

/// datagrid - search, filter, sort and page a list response from the terminal
#[derive(Parser, Debug)]
#[command(name = "datagrid")]
#[command(version)]
#[command(about = "Apply data table state to a list response", long_about = None)]
pub struct Cli {
    /// Table definition (`{ "columns": [...], "config": {...} }`)
    #[arg(short = 't', long = "table")]
    pub table: PathBuf,

    /// List response body (legacy or paginated envelope)
    #[arg(short = 'd', long = "data")]
    pub data: PathBuf,

    /// Search text
    #[arg(short = 's', long = "search")]
    pub search: Option<String>,

    /// Column key to sort by
    #[arg(long = "sort")]
    pub sort: Option<String>,

    /// Sort descending (with --sort)
    #[arg(long = "desc", requires = "sort")]
    pub desc: bool,

    /// Column filter as key=value (repeatable; value "all" clears)
    #[arg(short = 'F', long = "filter", value_name = "KEY=VALUE")]
    pub filters: Vec<String>,

    /// Page to show (1-based)
    #[arg(short = 'p', long = "page", default_value = "1")]
    pub page: usize,

    /// Rows per page (default: from the table config)
    #[arg(long = "page-size")]
    pub page_size: Option<usize>,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "grid")]
    pub format: OutputFormat,

    /// API base URL (for --format url)
    #[arg(long = "base-url", env = "DATAGRID_BASE_URL")]
    pub base_url: Option<String>,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Splits a `key=value` filter argument.
pub fn parse_filter(arg: &str) -> Option<(&str, &str)> {
    let (key, value) = arg.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key, value.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filter() {
        assert_eq!(parse_filter("status=active"), Some(("status", "active")));
        assert_eq!(parse_filter(" status = all "), Some(("status", "all")));
        assert_eq!(parse_filter("joined="), Some(("joined", "")));
        assert_eq!(parse_filter("status"), None);
        assert_eq!(parse_filter("=active"), None);
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from([
            "datagrid", "--table", "t.json", "--data", "d.json", "--sort", "name", "--desc", "-F",
            "status=active", "-F", "role=admin", "--format", "csv",
        ])
        .unwrap();

        assert_eq!(cli.sort.as_deref(), Some("name"));
        assert!(cli.desc);
        assert_eq!(cli.filters, ["status=active", "role=admin"]);
        assert_eq!(cli.format, OutputFormat::Csv);
        assert_eq!(cli.page, 1);
    }

    #[test]
    fn test_desc_requires_sort() {
        assert!(Cli::try_parse_from(["datagrid", "-t", "t.json", "-d", "d.json", "--desc"]).is_err());
    }
}
