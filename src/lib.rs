//! Lexmetrics - lexical statistics for plain-text files
//!
//! This library tokenizes UTF-8 text, computes the type/token ratio and the
//! trigram repetition rate, and writes them as a fixed five-line
//! `key=value` report.

use std::io;
use std::path::{Path, PathBuf};

pub mod cli;
pub mod config;
pub mod metrics;
pub mod output;
pub mod tokenize;
pub mod utils;

pub use cli::{Cli, Commands, SummaryFormat};
pub use config::Config;
pub use metrics::{compute_text_metrics, lexical_diversity, trigram_repetition, TextMetrics};
pub use output::{write_report, MeasureOutcome, Report};
pub use tokenize::tokenize;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MetricsError>;

/// Error types specific to measuring a text file
#[derive(thiserror::Error, Debug)]
pub enum MetricsError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Invalid input {}: {reason}", path.display())]
    InvalidInput { path: PathBuf, reason: String },

    #[error("I/O failure on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Default report name for an input file: `<stem>_text_metrics.txt`
pub fn default_output_name(input: &Path) -> String {
    utils::report_name_for(input, config::DEFAULT_REPORT_SUFFIX)
}

/// Measure one text file and write its report.
///
/// The report lands in `output_dir` (the current directory when `None`),
/// under `output_name`. The input is validated before anything is
/// created on disk, so a missing input leaves the output side untouched.
pub fn measure_file(
    input: impl AsRef<Path>,
    output_name: &str,
    output_dir: Option<&Path>,
) -> Result<MeasureOutcome> {
    let input = input.as_ref();

    utils::check_input_file(input)?;
    let text = utils::read_utf8(input)?;
    tracing::info!("Measuring {}", input.display());

    let metrics = compute_text_metrics(&text);
    tracing::debug!(
        n_words = metrics.n_words,
        v_unique = metrics.v_unique,
        "Computed metrics for {}",
        input.display()
    );

    let out_base = match output_dir {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir().map_err(|source| MetricsError::Io {
            path: PathBuf::from("."),
            source,
        })?,
    };
    let destination = out_base.join(output_name);

    let report = Report::new(utils::source_name(input), metrics);
    let output_path = write_report(&report, &destination)?;

    Ok(MeasureOutcome {
        report,
        output_path,
    })
}
