// Export modules for library usage
pub mod analytics;
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod context;
pub mod core;
pub mod formatting;
pub mod io;
pub mod observability;

// Re-export commonly used types
pub use crate::core::{CommentRecord, Error, Result, ToxicType, ToxicityScores, DEFAULT_THRESHOLD};

pub use crate::analytics::{
    build_report, count_by_field, count_by_threshold, count_sentiments, count_toxic_types,
    filter_by_threshold, filter_by_type_name, filter_screaming, mean_scream_index,
    negativity_percentage, partition_by_time, scream_index, top_peaks_by_count,
    top_peaks_by_ratio, toxic_ratio, AnalysisReport, PeakOptions, PeakWindow, TimePartition,
};

pub use crate::config::{load_config, AnalyticsConfig};
pub use crate::context::{AnalysisRequest, Task};
pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
pub use crate::io::{annotate_file, load_records, save_records};
