use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "lexmetrics",
    about = "Lexmetrics - Measure lexical diversity and trigram repetition of text files",
    version,
    long_about = "A small CLI tool that tokenizes UTF-8 text files and writes a five-line report with the token count, distinct token count, lexical diversity (V/N) and trigram repetition rate."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress summaries and progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Measure a single text file and write its report
    Measure {
        /// UTF-8 text file to measure
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Report file name (default: <input stem>_text_metrics.txt)
        #[arg(short, long, value_name = "NAME")]
        out_name: Option<String>,

        /// Directory for the report (default: configured output dir, else current dir)
        #[arg(short = 'd', long, value_name = "DIR")]
        out_dir: Option<PathBuf>,

        /// Console summary format
        #[arg(short, long, value_enum)]
        format: Option<SummaryFormat>,
    },

    /// Measure several text files, one report each
    Batch {
        /// UTF-8 text files to measure
        #[arg(value_name = "FILES", required = true)]
        inputs: Vec<PathBuf>,

        /// Directory for the reports (default: configured output dir, else current dir)
        #[arg(short = 'd', long, value_name = "DIR")]
        out_dir: Option<PathBuf>,

        /// Console summary format
        #[arg(short, long, value_enum)]
        format: Option<SummaryFormat>,
    },

    /// Show or initialize the configuration file
    Config {
        /// Show current configuration
        #[arg(short, long)]
        show: bool,

        /// Write a default configuration file
        #[arg(long)]
        init: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryFormat {
    /// Human-readable lines
    Text,
    /// JSON object
    Json,
}

impl std::fmt::Display for SummaryFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SummaryFormat::Text => write!(f, "text"),
            SummaryFormat::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_measure() {
        let cli = Cli::try_parse_from([
            "lexmetrics", "measure", "bowling.txt", "-o", "b.txt", "-d", "out", "-f", "json",
        ])
        .unwrap();

        match cli.command {
            Commands::Measure { input, out_name, out_dir, format } => {
                assert_eq!(input, PathBuf::from("bowling.txt"));
                assert_eq!(out_name.as_deref(), Some("b.txt"));
                assert_eq!(out_dir, Some(PathBuf::from("out")));
                assert_eq!(format, Some(SummaryFormat::Json));
            }
            _ => panic!("expected measure"),
        }
    }

    #[test]
    fn test_batch_requires_inputs() {
        assert!(Cli::try_parse_from(["lexmetrics", "batch"]).is_err());
    }
}
