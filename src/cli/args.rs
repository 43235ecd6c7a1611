use crate::io::output::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "commentscope")]
#[command(about = "Toxicity, sentiment and activity analytics for chat comment dumps", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Configuration file (defaults to the nearest .commentscope.toml)
    #[arg(long, global = true, env = "COMMENTSCOPE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub plain: bool,

    /// Toxicity threshold; a score must be strictly greater to count
    #[arg(long, global = true)]
    pub threshold: Option<f64>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Input file plus output destination, shared by every analysis command.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// JSON file holding an array of comments
    pub input: PathBuf,

    /// Output format (defaults to the config file setting, then terminal)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Full dashboard: toxicity, sentiment, scream index, authors and peaks
    Report(InputArgs),

    /// Toxicity scores against the threshold
    Toxic {
        #[command(subcommand)]
        command: ToxicCommands,
    },

    /// Scream index (share of uppercase letters)
    Scream {
        #[command(subcommand)]
        command: ScreamCommands,
    },

    /// Sentiment label counts and negativity percentage
    Sentiment {
        #[command(flatten)]
        io: InputArgs,

        /// Label counted as negative
        #[arg(long)]
        negative_label: Option<String>,
    },

    /// Split the stream timeline into equal-duration partitions
    Partitions {
        #[command(flatten)]
        io: InputArgs,

        /// Number of partitions
        #[arg(short = 'n', long = "count")]
        count: Option<usize>,
    },

    /// Busiest time windows, or those with the highest share of a sentiment
    Peaks {
        #[command(flatten)]
        io: InputArgs,

        /// Rank by the share of comments with this sentiment label
        #[arg(long)]
        label: Option<String>,

        /// Number of windows to show
        #[arg(long)]
        top: Option<usize>,

        /// Window width in seconds
        #[arg(long = "window")]
        window_seconds: Option<u64>,
    },

    /// Initialize a .commentscope.toml configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum ToxicCommands {
    /// Comments above the threshold per toxicity type, plus the toxic share
    Counts(InputArgs),

    /// Comments whose score for one type is above the threshold
    Filter {
        #[command(flatten)]
        io: InputArgs,

        /// Toxicity type, e.g. insult or "Severe Toxicity"
        #[arg(short = 't', long = "type")]
        toxic_type: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ScreamCommands {
    /// Mean scream index
    Mean(InputArgs),

    /// Comments whose scream index is above the scream threshold
    List {
        #[command(flatten)]
        io: InputArgs,

        /// Scream threshold override
        #[arg(long)]
        above: Option<f64>,
    },

    /// Compute scream_index for every comment and rewrite the file in place
    Annotate {
        /// JSON file holding an array of comments
        input: PathBuf,
    },
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
