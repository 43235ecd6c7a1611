pub mod errors;
pub mod time;
pub mod types;

pub use errors::{Error, Result};
pub use time::{elapsed_seconds, format_elapsed, format_seconds, parse_elapsed};
pub use types::{CommentRecord, ToxicType, ToxicityScores};

/// Score above which a toxicity or scream value counts as a hit.
pub const DEFAULT_THRESHOLD: f64 = 0.7;

/// Width of a peak window in seconds.
pub const DEFAULT_WINDOW_SECONDS: u64 = 300;

/// Number of peak windows returned by default.
pub const DEFAULT_TOP_PEAKS: usize = 5;

/// Number of time partitions produced by default.
pub const DEFAULT_PARTITIONS: usize = 5;

/// Upper bound on the number of time partitions.
pub const MAX_PARTITIONS: usize = 10_000;

/// Sentiment label counted as negative by the negativity gauge.
pub const DEFAULT_NEGATIVE_LABEL: &str = "NEG";
