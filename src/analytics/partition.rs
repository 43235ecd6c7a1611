//! Equal-duration partitioning of a comment timeline.

use crate::core::time::duration_secs;
use crate::core::{CommentRecord, Error, Result, MAX_PARTITIONS};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One of N contiguous time buckets. The interval is `[start, end)`, except for
/// the final bucket which also contains `end`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimePartition {
    pub index: usize,
    #[serde(with = "duration_secs")]
    pub start: Duration,
    #[serde(with = "duration_secs")]
    pub end: Duration,
    pub comments: Vec<CommentRecord>,
}

impl TimePartition {
    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }
}

/// Split the span between the earliest and latest comment into `n` equal
/// partitions and assign every comment to exactly one of them.
pub fn partition_by_time(records: &[CommentRecord], n: usize) -> Result<Vec<TimePartition>> {
    if records.is_empty() {
        return Err(Error::invalid_input("cannot partition an empty comment list"));
    }
    if n == 0 {
        return Err(Error::invalid_input("partition count must be at least 1"));
    }
    if n > MAX_PARTITIONS {
        return Err(Error::invalid_input(format!(
            "partition count {n} exceeds the limit of {MAX_PARTITIONS}"
        )));
    }
    let divisor = u32::try_from(n)
        .map_err(|_| Error::invalid_input(format!("partition count {n} is too large")))?;

    let times = records
        .iter()
        .enumerate()
        .map(|(i, r)| r.elapsed(i))
        .collect::<Result<Vec<_>>>()?;

    // Non-empty input guarantees both bounds.
    let min = times.iter().copied().min().unwrap_or_default();
    let max = times.iter().copied().max().unwrap_or_default();
    let size = (max - min) / divisor;

    let mut partitions: Vec<TimePartition> = (0..divisor)
        .map(|i| TimePartition {
            index: i as usize,
            start: min + size * i,
            end: if i + 1 == divisor { max } else { min + size * (i + 1) },
            comments: Vec::new(),
        })
        .collect();

    // `[start, end)` per bucket; the last one also takes `max`.
    let last = partitions.len() - 1;
    for (record, &t) in records.iter().zip(&times) {
        let slot = match size.as_nanos() {
            0 => last,
            step => usize::try_from((t - min).as_nanos() / step)
                .unwrap_or(last)
                .min(last),
        };
        partitions[slot].comments.push(record.clone());
    }

    tracing::debug!(
        partitions = n,
        span_secs = (max - min).as_secs(),
        "partitioned {} comments",
        records.len()
    );
    Ok(partitions)
}
