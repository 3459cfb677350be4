//! CLI argument definitions for the CPI reshaper.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use cpi_ingest::DEFAULT_SOURCE_URL;
use cpi_model::Layout;
use cpi_output::LineTerminator;

#[derive(Parser)]
#[command(
    name = "cpi-reshape",
    version,
    about = "Reshape the World Bank CPI table from wide to long CSV",
    long_about = "Reshape the World Bank consumer price index table from wide format\n\
                  (one column per year) to long format (one row per country and year).\n\n\
                  Country codes are translated from ISO 3166-1 alpha-3 to alpha-2;\n\
                  codes without a match are written as XK."
)]
pub struct Cli {
    /// URL or path of the wide CSV.
    #[arg(value_name = "SOURCE", default_value = DEFAULT_SOURCE_URL)]
    pub source: String,

    /// Directory to write into; output goes to stdout when omitted.
    ///
    /// The file written is <FILENAME>/cpi-long.csv (or cpi-wide.csv with
    /// --layout wide). The directory must already exist.
    #[arg(short = 'o', long = "output", value_name = "FILENAME")]
    pub output: Option<PathBuf>,

    /// Output layout.
    #[arg(long = "layout", value_enum, default_value = "long")]
    pub layout: LayoutArg,

    /// CSV with alpha_2 and alpha_3 columns to use instead of the built-in table.
    #[arg(long = "country-codes", value_name = "PATH")]
    pub country_codes: Option<PathBuf>,

    /// HTTP request timeout in seconds (default: wait indefinitely).
    #[arg(long = "timeout", value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Record terminator for the output.
    #[arg(long = "line-ending", value_enum, default_value = "crlf")]
    pub line_ending: LineEndingArg,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}

/// CLI layout choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LayoutArg {
    /// iso2c, year, cpi
    Long,
    /// Country Name, Country Code, Year, CPI
    Wide,
}

impl From<LayoutArg> for Layout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Long => Layout::Narrow,
            LayoutArg::Wide => Layout::Wide,
        }
    }
}

/// CLI line ending choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LineEndingArg {
    Crlf,
    Lf,
}

impl From<LineEndingArg> for LineTerminator {
    fn from(arg: LineEndingArg) -> Self {
        match arg {
            LineEndingArg::Crlf => LineTerminator::Crlf,
            LineEndingArg::Lf => LineTerminator::Lf,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["cpi-reshape"]).unwrap();
        assert_eq!(cli.source, DEFAULT_SOURCE_URL);
        assert!(cli.output.is_none());
        assert_eq!(Layout::from(cli.layout), Layout::Narrow);
        assert_eq!(LineTerminator::from(cli.line_ending), LineTerminator::Crlf);
        assert!(cli.timeout().is_none());
        assert!(!cli.verbosity.is_present());
    }

    #[test]
    fn all_options() {
        let cli = Cli::try_parse_from([
            "cpi-reshape",
            "cpi.csv",
            "-o",
            "out",
            "--layout",
            "wide",
            "--country-codes",
            "codes.csv",
            "--timeout",
            "30",
            "--line-ending",
            "lf",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.source, "cpi.csv");
        assert_eq!(cli.output, Some(PathBuf::from("out")));
        assert_eq!(cli.layout, LayoutArg::Wide);
        assert_eq!(cli.country_codes, Some(PathBuf::from("codes.csv")));
        assert_eq!(cli.timeout(), Some(Duration::from_secs(30)));
        assert_eq!(cli.line_ending, LineEndingArg::Lf);
        assert!(cli.verbosity.is_present());
    }

    #[test]
    fn unknown_layout_is_rejected() {
        assert!(Cli::try_parse_from(["cpi-reshape", "--layout", "tall"]).is_err());
    }
}
