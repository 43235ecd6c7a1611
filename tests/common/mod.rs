// Shared fixtures for commentscope integration tests
#![allow(dead_code)]

use commentscope::{CommentRecord, ToxicType};
use indoc::indoc;
use std::fs;
use std::path::{Path, PathBuf};

/// A short stream: two bursts of activity ten minutes apart.
pub const SAMPLE_COMMENTS: &str = indoc! {r#"
    [
      {"message": "hello chat", "author": "ana", "time_elapsed": "0:00:05", "sentiment": "POS",
       "toxicity": 0.02, "insult": 0.01},
      {"message": "THIS IS RIGGED", "author": "bruno", "time_elapsed": "0:00:40", "sentiment": "NEG",
       "toxicity": 0.91, "insult": 0.75, "obscene": 0.2},
      {"message": "lol", "author": "ana", "time_elapsed": "0:01:10", "sentiment": "NEU",
       "toxicity": 0.05},
      {"message": "you are an idiot", "author": "caio", "time_elapsed": "0:10:00", "sentiment": "NEG",
       "toxicity": 0.88, "insult": 0.93, "threat": 0.1},
      {"message": "GG WP", "author": "dani", "time_elapsed": "0:10:30", "sentiment": "POS",
       "toxicity": 0.01, "badge": "subscriber"},
      {"message": "bye", "author": "ana", "time_elapsed": "0:12:00", "sentiment": "NEU",
       "toxicity": "n/a"}
    ]
"#};

pub fn write_fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

pub fn sample_records() -> Vec<CommentRecord> {
    serde_json::from_str(SAMPLE_COMMENTS).unwrap()
}

/// A comment at `time` with optional sentiment and toxicity score.
pub fn comment(time: &str, sentiment: Option<&str>, toxicity: Option<f64>) -> CommentRecord {
    let mut record = CommentRecord::new(format!("at {time}")).with_time(time);
    if let Some(sentiment) = sentiment {
        record = record.with_sentiment(sentiment);
    }
    if let Some(score) = toxicity {
        record = record.with_score(ToxicType::Toxicity, score);
    }
    record
}

/// Format whole seconds as `H:MM:SS`.
pub fn hms(seconds: u64) -> String {
    format!("{}:{:02}:{:02}", seconds / 3600, (seconds / 60) % 60, seconds % 60)
}
