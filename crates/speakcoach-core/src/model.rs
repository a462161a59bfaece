//! Core data model types for speakcoach.
//!
//! These are the fundamental types the whole system uses to represent
//! practice modes, CEFR levels, and scored attempts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::scoring::AttemptScores;

/// Which practice mode an attempt belongs to.
///
/// Serialized forms match the persisted history and CSV export exactly,
/// including the space in "Free Talk".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PracticeTab {
    Phrases,
    Situations,
    #[serde(rename = "Free Talk")]
    FreeTalk,
    #[serde(rename = "CEFR")]
    Cefr,
}

impl fmt::Display for PracticeTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PracticeTab::Phrases => write!(f, "Phrases"),
            PracticeTab::Situations => write!(f, "Situations"),
            PracticeTab::FreeTalk => write!(f, "Free Talk"),
            PracticeTab::Cefr => write!(f, "CEFR"),
        }
    }
}

impl FromStr for PracticeTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "phrases" => Ok(PracticeTab::Phrases),
            "situations" => Ok(PracticeTab::Situations),
            "free talk" | "free-talk" | "freetalk" => Ok(PracticeTab::FreeTalk),
            "cefr" => Ok(PracticeTab::Cefr),
            other => Err(format!("unknown practice tab: {other}")),
        }
    }
}

/// CEFR proficiency tier used to select practice difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CefrLevel {
    A1,
    A2,
    B1,
    B2,
}

impl fmt::Display for CefrLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CefrLevel::A1 => write!(f, "A1"),
            CefrLevel::A2 => write!(f, "A2"),
            CefrLevel::B1 => write!(f, "B1"),
            CefrLevel::B2 => write!(f, "B2"),
        }
    }
}

impl FromStr for CefrLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "A1" => Ok(CefrLevel::A1),
            "A2" => Ok(CefrLevel::A2),
            "B1" => Ok(CefrLevel::B1),
            "B2" => Ok(CefrLevel::B2),
            other => Err(format!("unknown CEFR level: {other}")),
        }
    }
}

/// One scored practice interaction.
///
/// Immutable once created. The score fields only come from an
/// [`AttemptScores`] value produced by the attempt scorer, so `overall`
/// always stays the weighted composite of the other three sub-scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attempt {
    /// Creation time, epoch milliseconds.
    pub timestamp: i64,
    /// Practice mode this attempt was made in.
    pub tab: PracticeTab,
    /// CEFR level, absent outside the CEFR tab. Persisted as `""` when absent.
    #[serde(default, with = "level_serde")]
    pub level: Option<CefrLevel>,
    /// The prompt sentence being practiced.
    pub target: String,
    /// Pronunciation sub-score, 0-100.
    pub pronunciation: u8,
    /// Grammar sub-score, 0-100.
    pub grammar: u8,
    /// Fluency sub-score, 0-100.
    pub fluency: u8,
    /// Weighted composite of the three sub-scores, 0-100.
    pub overall: u8,
    /// Words-per-minute estimate.
    pub wpm: u32,
}

impl Attempt {
    /// Build an attempt from scorer output, stamped with the current time.
    pub fn new(
        tab: PracticeTab,
        level: Option<CefrLevel>,
        target: impl Into<String>,
        scores: AttemptScores,
    ) -> Self {
        Self::with_timestamp(chrono::Utc::now().timestamp_millis(), tab, level, target, scores)
    }

    /// Build an attempt with an explicit creation time.
    pub fn with_timestamp(
        timestamp: i64,
        tab: PracticeTab,
        level: Option<CefrLevel>,
        target: impl Into<String>,
        scores: AttemptScores,
    ) -> Self {
        Self {
            timestamp,
            tab,
            level,
            target: target.into(),
            pronunciation: scores.pronunciation,
            grammar: scores.grammar,
            fluency: scores.fluency,
            overall: scores.overall,
            wpm: scores.wpm,
        }
    }
}

/// Persists `Option<CefrLevel>` as its display string, with `""` for `None`,
/// matching the established history format.
mod level_serde {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::CefrLevel;

    pub fn serialize<S: Serializer>(
        level: &Option<CefrLevel>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match level {
            Some(l) => serializer.serialize_str(&l.to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<CefrLevel>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw.is_empty() {
            return Ok(None);
        }
        raw.parse().map(Some).map_err(serde::de::Error::custom)
    }
}
