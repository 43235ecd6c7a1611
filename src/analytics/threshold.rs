//! Threshold counting and filtering over toxicity scores.
//!
//! A score "hits" when it is strictly greater than the threshold. Missing or
//! non-numeric scores never hit, in both counting and filtering.

use crate::core::{CommentRecord, Result, ToxicType};
use std::collections::BTreeMap;

/// Per-type hit counts. Types with no hits are absent.
pub type ToxicTypeCounts = BTreeMap<ToxicType, usize>;

pub fn exceeds(score: Option<f64>, threshold: f64) -> bool {
    score.is_some_and(|s| s > threshold)
}

/// Count records whose score for each of `fields` exceeds `threshold`.
pub fn count_by_threshold(
    records: &[CommentRecord],
    fields: &[ToxicType],
    threshold: f64,
) -> ToxicTypeCounts {
    records.iter().fold(BTreeMap::new(), |mut acc, record| {
        fields
            .iter()
            .filter(|&&kind| exceeds(record.score(kind), threshold))
            .for_each(|&kind| *acc.entry(kind).or_insert(0) += 1);
        acc
    })
}

/// Hit counts over every toxic type.
pub fn count_toxic_types(records: &[CommentRecord], threshold: f64) -> ToxicTypeCounts {
    count_by_threshold(records, &ToxicType::ALL, threshold)
}

/// Records whose `field` score exceeds `threshold`.
pub fn filter_by_threshold(
    records: &[CommentRecord],
    field: ToxicType,
    threshold: f64,
) -> Vec<&CommentRecord> {
    records
        .iter()
        .filter(|record| exceeds(record.score(field), threshold))
        .collect()
}

/// Like [`filter_by_threshold`], taking a field or display name such as
/// `"Severe Toxicity"`. Unknown names fail with `FieldNotFound`.
pub fn filter_by_type_name<'a>(
    records: &'a [CommentRecord],
    name: &str,
    threshold: f64,
) -> Result<Vec<&'a CommentRecord>> {
    let field: ToxicType = name.parse()?;
    let filtered = filter_by_threshold(records, field, threshold);
    tracing::debug!(field = %field, matched = filtered.len(), "filtered records");
    Ok(filtered)
}

/// Whether any toxic type on the record exceeds `threshold`.
pub fn is_toxic(record: &CommentRecord, threshold: f64) -> bool {
    ToxicType::ALL
        .iter()
        .any(|&kind| exceeds(record.score(kind), threshold))
}

/// Fraction of records with at least one toxic type above `threshold`.
/// Empty input yields 0.0.
pub fn toxic_ratio(records: &[CommentRecord], threshold: f64) -> f64 {
    if records.is_empty() {
        return 0.0;
    }

    let toxic = records.iter().filter(|r| is_toxic(r, threshold)).count();
    toxic as f64 / records.len() as f64
}
