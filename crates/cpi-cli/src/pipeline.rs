//! The reshaping run: open the source, reshape, write.
//!
//! All three stages are lazy, so rows flow from the source to the sink one at
//! a time while [`run`] drives the writer.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use cpi_ingest::{FetchOptions, Source, open_source};
use cpi_model::Layout;
use cpi_output::{Destination, OutputError, OutputOptions, write_csv};
use cpi_standards::CountryTable;
use cpi_transform::{ReshapeStats, reshape};

use crate::cli::Cli;

/// Everything a run needs, resolved from the command line.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub source: Source,
    /// Directory receiving the output file; `None` writes to stdout.
    pub output_dir: Option<PathBuf>,
    pub layout: Layout,
    /// Replacement country table; `None` uses the built-in ISO 3166-1 table.
    pub country_codes: Option<PathBuf>,
    pub fetch: FetchOptions,
    pub output: OutputOptions,
}

impl RunOptions {
    pub fn new(source: Source) -> Self {
        Self {
            source,
            output_dir: None,
            layout: Layout::default(),
            country_codes: None,
            fetch: FetchOptions::default(),
            output: OutputOptions::default(),
        }
    }

    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let source = Source::parse(&cli.source).context("parse source")?;
        Ok(Self {
            source,
            output_dir: cli.output.clone(),
            layout: cli.layout.into(),
            country_codes: cli.country_codes.clone(),
            fetch: FetchOptions::default().with_timeout(cli.timeout()),
            output: OutputOptions {
                terminator: cli.line_ending.into(),
            },
        })
    }

    #[must_use]
    pub fn with_output_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.output_dir = dir;
        self
    }

    #[must_use]
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn with_country_codes(mut self, path: Option<PathBuf>) -> Self {
        self.country_codes = path;
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.fetch = self.fetch.with_timeout(timeout);
        self
    }

    /// The file written for this run, if any.
    pub fn output_path(&self) -> Option<PathBuf> {
        output_path(self.output_dir.as_deref(), self.layout)
    }
}

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub source: String,
    pub layout: Layout,
    pub destination: Destination,
    /// Records written, header included.
    pub records: usize,
    pub stats: ReshapeStats,
}

impl RunResult {
    pub fn wrote_file(&self) -> bool {
        matches!(self.destination, Destination::File(_))
    }
}

/// `<dir>/<layout file name>`; the directory is taken as given.
pub fn output_path(dir: Option<&Path>, layout: Layout) -> Option<PathBuf> {
    dir.map(|dir| dir.join(layout.file_name()))
}

/// Load the country table from `path`, or the built-in table.
pub fn load_countries(path: Option<&Path>) -> Result<CountryTable> {
    match path {
        Some(path) => CountryTable::from_path(path)
            .with_context(|| format!("load country codes from {}", path.display())),
        None => CountryTable::iso3166().context("load built-in country codes"),
    }
}

/// Run one reshape from source to destination.
pub fn run(options: &RunOptions) -> Result<RunResult> {
    let source_id = options.source.to_string();
    let run_span = info_span!("run", source = %source_id, layout = %options.layout);
    let _run_guard = run_span.enter();

    let countries = load_countries(options.country_codes.as_deref())?;
    debug!(countries = countries.len(), "country table loaded");

    let csv = {
        let _fetch = info_span!("fetch").entered();
        open_source(&options.source, &options.fetch)
            .with_context(|| format!("read {source_id}"))?
    };
    info!(columns = csv.header.len(), "source opened");

    // Rows are reshaped as the writer pulls them, so both run in one stage.
    let mut rows = reshape(options.layout, csv.header, csv.rows, &countries);
    let path = options.output_path();
    let summary = {
        let _stage = info_span!("reshape_write").entered();
        match write_csv(rows.by_ref(), path.as_deref(), &options.output) {
            Ok(summary) => summary,
            Err(OutputError::Transform(error)) => {
                return Err(anyhow::Error::new(error).context(format!("reshape {source_id}")));
            }
            Err(error) => return Err(anyhow::Error::new(error).context("write output")),
        }
    };

    let stats = rows.stats().clone();
    info!(
        records = summary.records,
        observations = stats.observations,
        unmapped = stats.unmapped_codes.len(),
        "run complete"
    );
    Ok(RunResult {
        source: source_id,
        layout: options.layout,
        destination: summary.destination,
        records: summary.records,
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_is_a_directory_prefix() {
        assert_eq!(
            output_path(Some(Path::new("out")), Layout::Narrow),
            Some(PathBuf::from("out/cpi-long.csv"))
        );
        assert_eq!(
            output_path(Some(Path::new("out")), Layout::Wide),
            Some(PathBuf::from("out/cpi-wide.csv"))
        );
        assert_eq!(output_path(None, Layout::Narrow), None);
    }

    #[test]
    fn options_builder() {
        let options = RunOptions::new(Source::default())
            .with_output_dir(Some(PathBuf::from("out")))
            .with_layout(Layout::Wide)
            .with_timeout(Some(Duration::from_secs(3)));
        assert_eq!(options.output_path(), Some(PathBuf::from("out/cpi-wide.csv")));
        assert_eq!(options.fetch.timeout, Some(Duration::from_secs(3)));
        assert!(options.country_codes.is_none());
    }

    #[test]
    fn built_in_countries_load() {
        let countries = load_countries(None).unwrap();
        assert_eq!(countries.alpha2_for("ISL"), Some("IS"));
    }
}
