use commentscope::{
    build_report, partition_by_time, top_peaks_by_count, top_peaks_by_ratio, AnalyticsConfig,
    CommentRecord, PeakOptions, ToxicType,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use std::path::Path;

/// A four-hour stream with bursts every twenty minutes.
fn synthetic_stream(comments: usize) -> Vec<CommentRecord> {
    const SENTIMENTS: [&str; 3] = ["NEG", "NEU", "POS"];
    (0..comments)
        .map(|i| {
            let base = (i as u64 * 14_400) / comments as u64;
            let burst = if (base / 1_200) % 2 == 0 { base } else { base - base % 300 };
            let seconds = burst.min(14_399);
            CommentRecord::new(if i % 7 == 0 { "WHAT A PLAY" } else { "nice one chat" })
                .with_author(format!("viewer{}", i % 97))
                .with_time(format!("{}:{:02}:{:02}", seconds / 3600, (seconds / 60) % 60, seconds % 60))
                .with_sentiment(SENTIMENTS[i % SENTIMENTS.len()])
                .with_score(ToxicType::Toxicity, (i % 100) as f64 / 100.0)
        })
        .collect()
}

fn benchmark_windows(c: &mut Criterion) {
    let mut group = c.benchmark_group("window_analytics");
    for size in [1_000usize, 10_000, 50_000] {
        let records = synthetic_stream(size);

        group.bench_with_input(BenchmarkId::new("partition_by_time", size), &records, |b, r| {
            b.iter(|| partition_by_time(black_box(r), 12).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("peaks_by_count", size), &records, |b, r| {
            b.iter(|| top_peaks_by_count(black_box(r), PeakOptions::default()).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("peaks_by_ratio", size), &records, |b, r| {
            b.iter(|| top_peaks_by_ratio(black_box(r), "NEG", PeakOptions::default()).unwrap())
        });
    }
    group.finish();
}

fn benchmark_report(c: &mut Criterion) {
    let records = synthetic_stream(10_000);
    let config = AnalyticsConfig::default();

    c.bench_function("build_report_10k", |b| {
        b.iter(|| build_report(black_box(&records), Path::new("bench.json"), &config).unwrap())
    });
}

criterion_group!(benches, benchmark_windows, benchmark_report);
criterion_main!(benches);
