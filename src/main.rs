use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lexmetrics::cli::{Cli, Commands};
use lexmetrics::config::Config;
use lexmetrics::output;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing (stderr, so stdout only carries summaries)
    let default_filter = if cli.verbose { "lexmetrics=debug" } else { "lexmetrics=info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::load()?;

    match cli.command {
        Commands::Measure {
            input,
            out_name,
            out_dir,
            format,
        } => {
            let out_name = out_name.unwrap_or_else(|| config.report_name_for(&input));
            let out_dir = out_dir.or_else(|| config.output.output_dir.clone());
            let format = format.unwrap_or(config.output.default_format);

            let outcome = lexmetrics::measure_file(&input, &out_name, out_dir.as_deref())
                .with_context(|| format!("Failed to measure {}", input.display()))?;

            if !cli.quiet {
                output::print_summary(&outcome, &format)?;
            }
        }
        Commands::Batch {
            inputs,
            out_dir,
            format,
        } => {
            let out_dir = out_dir.or_else(|| config.output.output_dir.clone());
            let format = format.unwrap_or(config.output.default_format);

            let progress = ProgressBar::new(inputs.len() as u64);
            if cli.quiet {
                progress.set_draw_target(ProgressDrawTarget::hidden());
            }
            progress.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
                    .progress_chars("=> "),
            );

            let mut outcomes = Vec::with_capacity(inputs.len());
            for input in &inputs {
                progress.set_message(input.display().to_string());

                let out_name = config.report_name_for(input);
                let outcome = lexmetrics::measure_file(input, &out_name, out_dir.as_deref())
                    .with_context(|| format!("Failed to measure {}", input.display()))?;

                outcomes.push(outcome);
                progress.inc(1);
            }
            progress.finish_and_clear();

            if !cli.quiet {
                match format {
                    lexmetrics::SummaryFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&outcomes)?);
                    }
                    lexmetrics::SummaryFormat::Text => {
                        for outcome in &outcomes {
                            output::print_summary(outcome, &format)?;
                        }
                    }
                }
                eprintln!("{} Measured {} file(s)", style("✓").green().bold(), outcomes.len());
            }
        }
        Commands::Config { show, init } => {
            if init {
                let path = Config::default().save()?;
                println!("Default configuration written to: {}", path.display());
            }
            if show || !init {
                config.display();
            }
        }
    }

    Ok(())
}
