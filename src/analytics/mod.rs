//! Stateless analytics over a loaded list of comments.
//!
//! Every function takes the records as a read-only slice and returns a new
//! derived value. Callers that need the same result twice should keep it
//! rather than recompute.

pub mod aggregate;
pub mod partition;
pub mod peaks;
pub mod report;
pub mod scream;
pub mod threshold;

pub use aggregate::{count_by_field, count_sentiments, negativity_percentage, top_authors, AuthorActivity};
pub use partition::{partition_by_time, TimePartition};
pub use peaks::{peak_windows, top_peaks_by_count, top_peaks_by_ratio, PeakOptions, PeakWindow};
pub use report::{build_report, AnalysisReport, ReportMetadata};
pub use scream::{
    annotate_scream_index, filter_screaming, mean_scream_index, scream_index, with_scream_index,
};
pub use threshold::{
    count_by_threshold, count_toxic_types, filter_by_threshold, filter_by_type_name, is_toxic,
    toxic_ratio, ToxicTypeCounts,
};
