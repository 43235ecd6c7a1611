//! Occurrence counts of categorical fields.

use crate::core::CommentRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Count each distinct value of `field`. Records without the field are skipped;
/// values are not checked against any label set.
pub fn count_by_field(records: &[CommentRecord], field: &str) -> BTreeMap<String, usize> {
    records
        .iter()
        .filter_map(|record| record.categorical(field))
        .fold(BTreeMap::new(), |mut acc, value| {
            *acc.entry(value.into_owned()).or_insert(0) += 1;
            acc
        })
}

pub fn count_sentiments(records: &[CommentRecord]) -> BTreeMap<String, usize> {
    count_by_field(records, "sentiment")
}

/// Share of records labelled `negative_label`, as a percentage in 0..=100.
pub fn negativity_percentage(records: &[CommentRecord], negative_label: &str) -> f64 {
    if records.is_empty() {
        return 0.0;
    }

    let negative = records
        .iter()
        .filter(|r| r.sentiment.as_deref() == Some(negative_label))
        .count();
    negative as f64 * 100.0 / records.len() as f64
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorActivity {
    pub author: String,
    pub comments: usize,
}

/// Most active authors, by comment count then name. Empty author names are skipped.
pub fn top_authors(records: &[CommentRecord], limit: usize) -> Vec<AuthorActivity> {
    let mut authors: Vec<AuthorActivity> = count_by_field(records, "author")
        .into_iter()
        .filter(|(author, _)| !author.is_empty())
        .map(|(author, comments)| AuthorActivity { author, comments })
        .collect();

    authors.sort_by(|a, b| b.comments.cmp(&a.comments).then_with(|| a.author.cmp(&b.author)));
    authors.truncate(limit);
    authors
}
