//! Command-line interface: argument parsing, runtime setup, and the mapping
//! from parsed arguments to an [`AnalysisRequest`].

pub mod args;
pub mod setup;

pub use args::{parse_args, Cli, Commands, InputArgs, ScreamCommands, ToxicCommands};
pub use setup::{init_runtime, resolve_config};

use crate::commands;
use crate::config::{validate_config_result, AnalyticsConfig};
use crate::context::{AnalysisRequest, Task};
use crate::core::ToxicType;
use anyhow::{Context, Result};

/// Run a parsed command line to completion.
pub fn run(cli: Cli) -> Result<()> {
    init_runtime(cli.verbosity, cli.plain);

    match cli.command {
        Commands::Init { force } => commands::init::init_config(force),
        command => {
            let config = resolve_config(cli.config.as_deref(), cli.threshold)?;
            let request = build_request(command, config)?;
            commands::execute(&request)
        }
    }
}

/// Fold per-command flags into `config` and pair it with the task to run.
pub fn build_request(command: Commands, mut config: AnalyticsConfig) -> Result<AnalysisRequest> {
    let (io, task) = match command {
        Commands::Report(io) => (io, Task::Report),
        Commands::Toxic { command } => match command {
            ToxicCommands::Counts(io) => (io, Task::ToxicCounts),
            ToxicCommands::Filter { io, toxic_type } => {
                let toxic_type: ToxicType = toxic_type
                    .parse()
                    .with_context(|| format!("Unknown toxicity type '{toxic_type}'"))?;
                (io, Task::ToxicFilter { toxic_type })
            }
        },
        Commands::Scream { command } => match command {
            ScreamCommands::Mean(io) => (io, Task::ScreamMean),
            ScreamCommands::List { io, above } => {
                if let Some(above) = above {
                    config.thresholds.scream_index = above;
                }
                (io, Task::ScreamList)
            }
            ScreamCommands::Annotate { input } => {
                let io = InputArgs {
                    input,
                    format: None,
                    output: None,
                };
                (io, Task::ScreamAnnotate)
            }
        },
        Commands::Sentiment { io, negative_label } => {
            if let Some(label) = negative_label {
                config.sentiment.negative_label = label;
            }
            (io, Task::Sentiment)
        }
        Commands::Partitions { io, count } => {
            if let Some(count) = count {
                config.partitions.count = count;
            }
            (io, Task::Partitions)
        }
        Commands::Peaks {
            io,
            label,
            top,
            window_seconds,
        } => {
            if let Some(top) = top {
                config.peaks.top = top;
            }
            if let Some(window_seconds) = window_seconds {
                config.peaks.window_seconds = window_seconds;
            }
            (io, Task::Peaks { label })
        }
        Commands::Init { .. } => anyhow::bail!("init does not analyze an input file"),
    };

    validate_config_result(&config).context("Invalid settings")?;

    Ok(AnalysisRequest::new(io.input, task, config)
        .with_format(io.format)
        .with_output(io.output))
}
