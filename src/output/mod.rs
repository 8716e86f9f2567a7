use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::SummaryFormat;
use crate::metrics::TextMetrics;
use crate::{MetricsError, Result};

/// Metrics for one input, tagged with where they came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Input file name (final path component)
    pub input_file: String,

    #[serde(flatten)]
    pub metrics: TextMetrics,
}

/// Result of a full measure run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasureOutcome {
    pub report: Report,

    /// Where the report file was written
    pub output_path: PathBuf,
}

impl Report {
    pub fn new(input_file: impl Into<String>, metrics: TextMetrics) -> Self {
        Self {
            input_file: input_file.into(),
            metrics,
        }
    }

    /// Render the five-line `key=value` block written to report files
    pub fn render(&self) -> String {
        format!(
            "input_file={}\nN_words={}\nV_unique={}\nlexical_diversity={:.10}\ntrigram_repetition={:.10}\n",
            self.input_file,
            self.metrics.n_words,
            self.metrics.v_unique,
            self.metrics.lexical_diversity,
            self.metrics.trigram_repetition,
        )
    }
}

/// Write a report to `destination`, creating parent directories as needed.
///
/// Any existing file is replaced. The content goes to a temporary file in
/// the same directory first and is renamed into place, so the destination
/// either holds the full report or is left as it was.
pub fn write_report(report: &Report, destination: &Path) -> Result<PathBuf> {
    let io_err = |source| MetricsError::Io {
        path: destination.to_path_buf(),
        source,
    };

    let parent = match destination.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs_err::create_dir_all(parent).map_err(io_err)?;

    let mut builder = tempfile::Builder::new();
    if let Some(permissions) = report_permissions(destination) {
        builder.permissions(permissions);
    }
    let mut tmp = builder.tempfile_in(parent).map_err(io_err)?;
    tmp.write_all(report.render().as_bytes()).map_err(io_err)?;
    tmp.persist(destination).map_err(|e| io_err(e.error))?;

    tracing::info!("Report written to {}", destination.display());
    Ok(destination.to_path_buf())
}

/// Permissions for a new report file.
///
/// An existing report keeps its mode. Otherwise the file is created like a
/// plain write would create it (0666 filtered by the process umask), not
/// with the owner-only mode temp files get by default.
fn report_permissions(destination: &Path) -> Option<std::fs::Permissions> {
    match std::fs::metadata(destination) {
        Ok(metadata) if metadata.is_file() => Some(metadata.permissions()),
        _ => default_permissions(),
    }
}

#[cfg(unix)]
fn default_permissions() -> Option<std::fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(std::fs::Permissions::from_mode(0o666))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<std::fs::Permissions> {
    None
}

/// Render a console summary of a measure run
pub fn format_summary(outcome: &MeasureOutcome, format: &SummaryFormat) -> anyhow::Result<String> {
    let content = match format {
        SummaryFormat::Text => {
            let m = &outcome.report.metrics;
            format!(
                "{}\n  N_words:            {}\n  V_unique:           {}\n  lexical_diversity:  {:.10}\n  trigram_repetition: {:.10}\nWrote results to: {}",
                outcome.report.input_file,
                m.n_words,
                m.v_unique,
                m.lexical_diversity,
                m.trigram_repetition,
                outcome.output_path.display(),
            )
        }
        SummaryFormat::Json => serde_json::to_string_pretty(outcome)?,
    };

    Ok(content)
}

/// Print a measure run summary to stdout
pub fn print_summary(outcome: &MeasureOutcome, format: &SummaryFormat) -> anyhow::Result<()> {
    let content = format_summary(outcome, format)?;
    println!("{}", content);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::compute_text_metrics;
    use tempfile::TempDir;

    fn cat_report() -> Report {
        Report::new("cats.txt", compute_text_metrics("the cat sat on the mat the cat sat"))
    }

    #[test]
    fn test_render_exact_block() {
        assert_eq!(
            cat_report().render(),
            "input_file=cats.txt\n\
             N_words=9\n\
             V_unique=5\n\
             lexical_diversity=0.5555555556\n\
             trigram_repetition=0.1428571429\n"
        );
    }

    #[test]
    fn test_render_empty_metrics() {
        let report = Report::new("empty.txt", compute_text_metrics(""));
        assert_eq!(
            report.render(),
            "input_file=empty.txt\n\
             N_words=0\n\
             V_unique=0\n\
             lexical_diversity=0.0000000000\n\
             trigram_repetition=0.0000000000\n"
        );
    }

    #[test]
    fn test_write_report_creates_parents() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("nested/deeper/out.txt");

        let written = write_report(&cat_report(), &dest).unwrap();

        assert_eq!(written, dest);
        assert_eq!(fs_err::read_to_string(&dest).unwrap(), cat_report().render());
    }

    #[test]
    fn test_write_report_overwrites() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("out.txt");
        fs_err::write(&dest, "stale content that is longer than nothing").unwrap();

        write_report(&cat_report(), &dest).unwrap();

        assert_eq!(fs_err::read_to_string(&dest).unwrap(), cat_report().render());
        // only the report remains, no stray temp files
        assert_eq!(fs_err::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_write_report_uses_ordinary_file_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("out.txt");
        let plain = dir.path().join("plain.txt");
        fs_err::write(&plain, "x").unwrap();

        write_report(&cat_report(), &dest).unwrap();

        let mode = |p: &Path| fs_err::metadata(p).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode(&dest), mode(&plain));
    }

    #[cfg(unix)]
    #[test]
    fn test_write_report_keeps_existing_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("out.txt");
        fs_err::write(&dest, "old").unwrap();
        fs_err::set_permissions(&dest, std::fs::Permissions::from_mode(0o640)).unwrap();

        write_report(&cat_report(), &dest).unwrap();

        let mode = fs_err::metadata(&dest).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o640);
    }

    #[test]
    fn test_write_report_onto_directory_fails_cleanly() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("out.txt");
        fs_err::create_dir(&dest).unwrap();

        let err = write_report(&cat_report(), &dest).unwrap_err();

        assert!(matches!(err, MetricsError::Io { .. }));
        assert!(dest.is_dir());
        assert_eq!(fs_err::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_json_summary_fields() {
        let outcome = MeasureOutcome {
            report: cat_report(),
            output_path: PathBuf::from("out/cats_text_metrics.txt"),
        };

        let json = format_summary(&outcome, &SummaryFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["report"]["input_file"], "cats.txt");
        assert_eq!(value["report"]["n_words"], 9);
        assert_eq!(value["report"]["v_unique"], 5);
        assert_eq!(value["output_path"], "out/cats_text_metrics.txt");
    }

    #[test]
    fn test_text_summary_mentions_output() {
        let outcome = MeasureOutcome {
            report: cat_report(),
            output_path: PathBuf::from("cats_text_metrics.txt"),
        };

        let text = format_summary(&outcome, &SummaryFormat::Text).unwrap();
        assert!(text.starts_with("cats.txt\n"));
        assert!(text.contains("lexical_diversity:  0.5555555556"));
        assert!(text.ends_with("Wrote results to: cats_text_metrics.txt"));
    }
}
