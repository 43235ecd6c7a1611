//! Fixed-width activity windows and their rankings.
//!
//! Windows start at the earliest comment and advance by `window_seconds`
//! while the window start is before the latest comment. A timeline whose
//! comments share a single instant still gets one window. A comment exactly
//! at the latest time is counted in the final window even when it sits on
//! that window's end boundary.

use crate::core::{CommentRecord, Error, Result, DEFAULT_TOP_PEAKS, DEFAULT_WINDOW_SECONDS};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeakWindow {
    /// Window start, in seconds since stream start.
    pub start: u64,
    /// Window end (exclusive), in seconds since stream start.
    pub end: u64,
    pub count: usize,
    pub sentiment_match_count: usize,
}

impl PeakWindow {
    /// Share of comments in the window matching the target label; 0.0 when empty.
    pub fn ratio(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sentiment_match_count as f64 / self.count as f64
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeakOptions {
    pub window_seconds: u64,
    pub top: usize,
}

impl Default for PeakOptions {
    fn default() -> Self {
        Self {
            window_seconds: DEFAULT_WINDOW_SECONDS,
            top: DEFAULT_TOP_PEAKS,
        }
    }
}

impl PeakOptions {
    fn validate(&self) -> Result<()> {
        if self.window_seconds == 0 {
            return Err(Error::invalid_input("peak window width must be at least 1 second"));
        }
        if self.top == 0 {
            return Err(Error::invalid_input("number of peaks must be at least 1"));
        }
        Ok(())
    }
}

/// Every window over the timeline, in chronological order. When `label` is
/// given, `sentiment_match_count` counts comments with that sentiment.
pub fn peak_windows(
    records: &[CommentRecord],
    window_seconds: u64,
    label: Option<&str>,
) -> Result<Vec<PeakWindow>> {
    if records.is_empty() {
        return Err(Error::invalid_input("cannot detect peaks in an empty comment list"));
    }
    if window_seconds == 0 {
        return Err(Error::invalid_input("peak window width must be at least 1 second"));
    }

    let times = records
        .iter()
        .enumerate()
        .map(|(i, r)| r.elapsed_seconds(i))
        .collect::<Result<Vec<_>>>()?;
    let min = times.iter().copied().min().unwrap_or_default();
    let max = times.iter().copied().max().unwrap_or_default();

    let window_count = (max - min).div_ceil(window_seconds).max(1);
    let mut windows: Vec<PeakWindow> = (0..window_count)
        .map(|i| {
            let start = i
                .checked_mul(window_seconds)
                .and_then(|offset| min.checked_add(offset));
            let end = start.and_then(|start| start.checked_add(window_seconds));
            match (start, end) {
                (Some(start), Some(end)) => Ok(PeakWindow {
                    start,
                    end,
                    count: 0,
                    sentiment_match_count: 0,
                }),
                _ => Err(Error::invalid_input(format!(
                    "peak window of {window_seconds}s starting at {min}s overflows the timeline"
                ))),
            }
        })
        .collect::<Result<_>>()?;

    let last = windows.len() - 1;
    for (record, &t) in records.iter().zip(&times) {
        let slot = usize::try_from((t - min) / window_seconds)
            .unwrap_or(last)
            .min(last);
        let window = &mut windows[slot];
        window.count += 1;
        if label.is_some() && record.sentiment.as_deref() == label {
            window.sentiment_match_count += 1;
        }
    }

    Ok(windows)
}

fn by_start(a: &PeakWindow, b: &PeakWindow) -> Ordering {
    a.start.cmp(&b.start)
}

/// Busiest windows by comment count; ties go to the earliest window.
pub fn top_peaks_by_count(records: &[CommentRecord], options: PeakOptions) -> Result<Vec<PeakWindow>> {
    options.validate()?;
    let mut windows = peak_windows(records, options.window_seconds, None)?;

    windows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| by_start(a, b)));
    windows.truncate(options.top);
    Ok(windows)
}

/// Windows with the highest share of comments labelled `label`. Windows
/// without comments are excluded; ties go to the earliest window.
pub fn top_peaks_by_ratio(
    records: &[CommentRecord],
    label: &str,
    options: PeakOptions,
) -> Result<Vec<PeakWindow>> {
    options.validate()?;
    let mut windows: Vec<PeakWindow> = peak_windows(records, options.window_seconds, Some(label))?
        .into_iter()
        .filter(|w| w.count > 0)
        .collect();

    windows.sort_by(|a, b| {
        b.ratio()
            .partial_cmp(&a.ratio())
            .unwrap_or(Ordering::Equal)
            .then_with(|| by_start(a, b))
    });
    windows.truncate(options.top);

    tracing::debug!(label, returned = windows.len(), "ranked sentiment peaks");
    Ok(windows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn at(secs: u64, sentiment: &str) -> CommentRecord {
        let time = format!("{}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60);
        CommentRecord::new("msg").with_time(time).with_sentiment(sentiment)
    }

    #[test]
    fn test_one_window_width_yields_one_peak() {
        let records = vec![at(100, "POS"), at(400, "NEG")];
        let peaks = top_peaks_by_count(&records, PeakOptions::default()).unwrap();
        assert_eq!(
            peaks,
            vec![PeakWindow { start: 100, end: 400, count: 2, sentiment_match_count: 0 }]
        );
    }

    #[test]
    fn test_single_instant_yields_one_window() {
        let windows = peak_windows(&[at(42, "NEU")], 300, Some("NEU")).unwrap();
        assert_eq!(windows.len(), 1);
        assert_eq!((windows[0].start, windows[0].end), (42, 342));
        assert_eq!(windows[0].sentiment_match_count, 1);
    }

    #[test]
    fn test_windows_cover_timeline() {
        let records = vec![at(0, "POS"), at(299, "POS"), at(300, "NEG"), at(901, "NEG")];
        let windows = peak_windows(&records, 300, None).unwrap();
        let counts: Vec<_> = windows.iter().map(|w| (w.start, w.count)).collect();
        assert_eq!(counts, vec![(0, 2), (300, 1), (600, 0), (900, 1)]);
    }

    #[test]
    fn test_count_ranking_breaks_ties_by_start() {
        let records = vec![
            at(0, "POS"),
            at(10, "POS"),
            at(300, "NEG"),
            at(310, "NEG"),
            at(620, "NEG"),
            at(630, "NEG"),
            at(640, "NEG"),
        ];
        let options = PeakOptions { window_seconds: 300, top: 2 };
        let peaks = top_peaks_by_count(&records, options).unwrap();
        assert_eq!(peaks.iter().map(|p| p.start).collect::<Vec<_>>(), vec![600, 0]);

        let options = PeakOptions { window_seconds: 300, top: 3 };
        let peaks = top_peaks_by_count(&records, options).unwrap();
        assert_eq!(peaks.iter().map(|p| p.start).collect::<Vec<_>>(), vec![600, 0, 300]);
    }

    #[test]
    fn test_ratio_ranking_skips_empty_windows() {
        let records = vec![
            at(0, "NEG"),
            at(10, "POS"),
            at(700, "NEG"),
            at(1000, "NEG"),
            at(1010, "POS"),
        ];
        let peaks = top_peaks_by_ratio(&records, "NEG", PeakOptions::default()).unwrap();
        let summary: Vec<_> = peaks.iter().map(|p| (p.start, p.ratio())).collect();
        // Windows: [0,300) 1/2, [300,600) empty, [600,900) 1/1, [900,1200) 1/2
        assert_eq!(summary, vec![(600, 1.0), (0, 0.5), (900, 0.5)]);
    }

    #[test]
    fn test_invalid_parameters() {
        let records = vec![at(0, "POS")];
        assert!(matches!(top_peaks_by_count(&[], PeakOptions::default()), Err(Error::InvalidInput(_))));
        assert!(matches!(
            top_peaks_by_count(&records, PeakOptions { window_seconds: 300, top: 0 }),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(peak_windows(&records, 0, None), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_window_past_u64_range_is_rejected() {
        let records = vec![at(10, "POS")];
        assert!(matches!(peak_windows(&records, u64::MAX, None), Err(Error::InvalidInput(_))));
        assert!(matches!(
            top_peaks_by_count(&records, PeakOptions { window_seconds: u64::MAX, top: 1 }),
            Err(Error::InvalidInput(_))
        ));

        // The widest window that still fits is accepted.
        let windows = peak_windows(&records, u64::MAX - 10, None).unwrap();
        assert_eq!(windows, vec![PeakWindow { start: 10, end: u64::MAX, count: 1, sentiment_match_count: 0 }]);
    }
}
