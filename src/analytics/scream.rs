//! Scream index: the share of uppercase letters among all letters of a message.

use crate::core::CommentRecord;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

/// One character of Unicode general category Letter (Lu, Ll, Lt, Lm, Lo).
static LETTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{L}").unwrap());

/// Uppercase letters divided by letters; 0.0 for text without letters.
pub fn scream_index(text: &str) -> f64 {
    let (letters, upper) = LETTER
        .find_iter(text)
        .fold((0usize, 0usize), |(letters, upper), m| {
            let is_upper = m.as_str().chars().all(char::is_uppercase);
            (letters + 1, upper + usize::from(is_upper))
        });

    if letters == 0 {
        0.0
    } else {
        upper as f64 / letters as f64
    }
}

/// Copies of `records` with `scream_index` computed from each message.
pub fn annotate_scream_index(records: &[CommentRecord]) -> Vec<CommentRecord> {
    records
        .iter()
        .map(|record| CommentRecord {
            scream_index: Some(scream_index(&record.message)),
            ..record.clone()
        })
        .collect()
}

/// `records` as-is when any of them carries a stored scream index, otherwise
/// annotated copies. The flag reports whether the indices were computed.
pub fn with_scream_index(records: &[CommentRecord]) -> (Cow<'_, [CommentRecord]>, bool) {
    if records.is_empty() || records.iter().any(|r| r.scream_index.is_some()) {
        (Cow::Borrowed(records), false)
    } else {
        tracing::debug!("no stored scream index, deriving from messages");
        (Cow::Owned(annotate_scream_index(records)), true)
    }
}

/// Mean of the scream indices present on `records`; 0.0 when none are.
pub fn mean_scream_index(records: &[CommentRecord]) -> f64 {
    let (sum, count) = records
        .iter()
        .filter_map(|r| r.scream_index)
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Records whose scream index exceeds `threshold`. Missing indices count as 0.
pub fn filter_screaming(records: &[CommentRecord], threshold: f64) -> Vec<&CommentRecord> {
    records
        .iter()
        .filter(|r| r.scream_index.unwrap_or(0.0) > threshold)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_scream_index_examples() {
        assert_eq!(scream_index("123!!!"), 0.0);
        assert_eq!(scream_index(""), 0.0);
        assert_eq!(scream_index("ABC"), 1.0);
        assert!(close(scream_index("AbC"), 2.0 / 3.0));
        assert_eq!(scream_index("HELLO world"), 0.5);
    }

    #[test]
    fn test_scream_index_non_latin() {
        assert_eq!(scream_index("ПРИВЕТ"), 1.0);
        assert_eq!(scream_index("привет"), 0.0);
        assert!(close(scream_index("ÀÉ îõ"), 0.5));
        // Scripts without case have letters but no uppercase.
        assert_eq!(scream_index("こんにちは"), 0.0);
    }

    #[test]
    fn test_roman_numerals_are_not_letters() {
        assert_eq!(scream_index("Ⅻ"), 0.0);
        assert_eq!(scream_index("Ⅻ AB"), 1.0);
    }

    #[test]
    fn test_letter_like_symbols_are_not_letters() {
        // Circled letters are symbols (So) even though they carry case.
        assert_eq!(scream_index("ⒶⒷⒸ"), 0.0);
        assert_eq!(scream_index("Ⓗi"), 0.0);
        assert_eq!(scream_index("ⒶB"), 1.0);
        // Spacing vowel signs (Mc) are marks, only the consonants count.
        assert_eq!(scream_index("\u{915}\u{93E}"), 0.0);
        assert_eq!(scream_index("\u{93E}A"), 1.0);
    }

    #[test]
    fn test_titlecase_letters_count_but_are_not_uppercase() {
        assert_eq!(scream_index("\u{1C5}"), 0.0);
        assert_eq!(scream_index("\u{1C5}\u{1C4}"), 0.5);
    }

    #[test]
    fn test_annotate_does_not_mutate_input() {
        let records = vec![CommentRecord::new("LOL"), CommentRecord::new("ok")];
        let annotated = annotate_scream_index(&records);

        assert!(records.iter().all(|r| r.scream_index.is_none()));
        assert_eq!(annotated[0].scream_index, Some(1.0));
        assert_eq!(annotated[1].scream_index, Some(0.0));
        assert_eq!(annotated[0].message, "LOL");
    }

    #[test]
    fn test_mean_scream_index_ignores_missing() {
        assert_eq!(mean_scream_index(&[]), 0.0);
        assert_eq!(mean_scream_index(&[CommentRecord::new("x")]), 0.0);

        let records = vec![
            CommentRecord::new("a").with_scream_index(1.0),
            CommentRecord::new("b"),
            CommentRecord::new("c").with_scream_index(0.5),
        ];
        assert_eq!(mean_scream_index(&records), 0.75);
    }

    #[test]
    fn test_filter_screaming() {
        let records = vec![
            CommentRecord::new("a").with_scream_index(0.9),
            CommentRecord::new("b").with_scream_index(0.7),
            CommentRecord::new("c"),
        ];
        let loud = filter_screaming(&records, 0.7);
        assert_eq!(loud.len(), 1);
        assert_eq!(loud[0].message, "a");
    }

    #[test]
    fn test_with_scream_index_prefers_stored_values() {
        let stored = vec![CommentRecord::new("abc").with_scream_index(0.9), CommentRecord::new("x")];
        let (records, computed) = with_scream_index(&stored);
        assert!(!computed);
        assert_eq!(records[0].scream_index, Some(0.9));

        let bare = vec![CommentRecord::new("ABC")];
        let (records, computed) = with_scream_index(&bare);
        assert!(computed);
        assert_eq!(records[0].scream_index, Some(1.0));
    }
}
