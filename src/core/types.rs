use super::errors::{Error, Result};
use super::time;
use crate::common::text::capitalize_first;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Toxicity subtype scored per comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToxicType {
    Toxicity,
    SevereToxicity,
    Obscene,
    IdentityAttack,
    Insult,
    Threat,
    SexualExplicit,
}

impl ToxicType {
    pub const ALL: [ToxicType; 7] = [
        ToxicType::Toxicity,
        ToxicType::SevereToxicity,
        ToxicType::Obscene,
        ToxicType::IdentityAttack,
        ToxicType::Insult,
        ToxicType::Threat,
        ToxicType::SexualExplicit,
    ];

    /// Canonical field name as it appears in the input JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Toxicity => "toxicity",
            Self::SevereToxicity => "severe_toxicity",
            Self::Obscene => "obscene",
            Self::IdentityAttack => "identity_attack",
            Self::Insult => "insult",
            Self::Threat => "threat",
            Self::SexualExplicit => "sexual_explicit",
        }
    }

    /// Human-readable label, e.g. "Severe Toxicity".
    pub fn display_name(&self) -> String {
        self.as_str()
            .split('_')
            .map(capitalize_first)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Parse a field or display name. Case-insensitive, spaces and dashes
    /// are read as underscores.
    pub fn parse(name: &str) -> Option<Self> {
        let normalized = name.trim().to_lowercase().replace([' ', '-'], "_");
        Self::ALL.into_iter().find(|t| t.as_str() == normalized)
    }
}

impl fmt::Display for ToxicType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToxicType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s).ok_or_else(|| Error::field_not_found(s, None))
    }
}

/// Per-type toxicity scores. Absent and non-numeric values are `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToxicityScores {
    #[serde(default, deserialize_with = "lenient_score", skip_serializing_if = "Option::is_none")]
    pub toxicity: Option<f64>,
    #[serde(default, deserialize_with = "lenient_score", skip_serializing_if = "Option::is_none")]
    pub severe_toxicity: Option<f64>,
    #[serde(default, deserialize_with = "lenient_score", skip_serializing_if = "Option::is_none")]
    pub obscene: Option<f64>,
    #[serde(default, deserialize_with = "lenient_score", skip_serializing_if = "Option::is_none")]
    pub identity_attack: Option<f64>,
    #[serde(default, deserialize_with = "lenient_score", skip_serializing_if = "Option::is_none")]
    pub insult: Option<f64>,
    #[serde(default, deserialize_with = "lenient_score", skip_serializing_if = "Option::is_none")]
    pub threat: Option<f64>,
    #[serde(default, deserialize_with = "lenient_score", skip_serializing_if = "Option::is_none")]
    pub sexual_explicit: Option<f64>,
}

impl ToxicityScores {
    pub fn get(&self, kind: ToxicType) -> Option<f64> {
        match kind {
            ToxicType::Toxicity => self.toxicity,
            ToxicType::SevereToxicity => self.severe_toxicity,
            ToxicType::Obscene => self.obscene,
            ToxicType::IdentityAttack => self.identity_attack,
            ToxicType::Insult => self.insult,
            ToxicType::Threat => self.threat,
            ToxicType::SexualExplicit => self.sexual_explicit,
        }
    }

    pub fn set(&mut self, kind: ToxicType, score: Option<f64>) {
        let slot = match kind {
            ToxicType::Toxicity => &mut self.toxicity,
            ToxicType::SevereToxicity => &mut self.severe_toxicity,
            ToxicType::Obscene => &mut self.obscene,
            ToxicType::IdentityAttack => &mut self.identity_attack,
            ToxicType::Insult => &mut self.insult,
            ToxicType::Threat => &mut self.threat,
            ToxicType::SexualExplicit => &mut self.sexual_explicit,
        };
        *slot = score;
    }

    /// Present scores in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (ToxicType, f64)> + '_ {
        ToxicType::ALL
            .into_iter()
            .filter_map(|kind| self.get(kind).map(|score| (kind, score)))
    }
}

fn lenient_score<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(Value::as_f64))
}

/// One chat or stream comment.
///
/// Unknown keys are kept in `extra` so a load/annotate/save cycle preserves them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommentRecord {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_elapsed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<String>,
    #[serde(flatten)]
    pub toxicity: ToxicityScores,
    #[serde(default, deserialize_with = "lenient_score", skip_serializing_if = "Option::is_none")]
    pub scream_index: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CommentRecord {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_time(mut self, time_elapsed: impl Into<String>) -> Self {
        self.time_elapsed = Some(time_elapsed.into());
        self
    }

    pub fn with_sentiment(mut self, sentiment: impl Into<String>) -> Self {
        self.sentiment = Some(sentiment.into());
        self
    }

    pub fn with_score(mut self, kind: ToxicType, score: f64) -> Self {
        self.toxicity.set(kind, Some(score));
        self
    }

    pub fn with_scream_index(mut self, scream_index: f64) -> Self {
        self.scream_index = Some(scream_index);
        self
    }

    /// Elapsed time since stream start. `index` is only used for error reporting.
    pub fn elapsed(&self, index: usize) -> Result<Duration> {
        self.elapsed_seconds(index).map(Duration::from_secs)
    }

    pub fn elapsed_seconds(&self, index: usize) -> Result<u64> {
        let raw = self
            .time_elapsed
            .as_deref()
            .ok_or_else(|| Error::field_not_found("time_elapsed", Some(index)))?;
        time::elapsed_seconds(raw)
    }

    pub fn score(&self, kind: ToxicType) -> Option<f64> {
        self.toxicity.get(kind)
    }

    /// The highest toxicity score present on the record.
    pub fn strongest_score(&self) -> Option<(ToxicType, f64)> {
        self.toxicity
            .iter()
            .max_by(|a, b| a.1.total_cmp(&b.1))
    }

    /// String value of a categorical field, looked up by name.
    pub fn categorical(&self, field: &str) -> Option<Cow<'_, str>> {
        match field {
            "message" => Some(Cow::Borrowed(self.message.as_str())),
            "author" => Some(Cow::Borrowed(self.author.as_str())),
            "sentiment" => self.sentiment.as_deref().map(Cow::Borrowed),
            "time_elapsed" => self.time_elapsed.as_deref().map(Cow::Borrowed),
            other => match self.extra.get(other)? {
                Value::String(s) => Some(Cow::Borrowed(s.as_str())),
                Value::Bool(b) => Some(Cow::Owned(b.to_string())),
                Value::Number(n) => Some(Cow::Owned(n.to_string())),
                _ => None,
            },
        }
    }
}
