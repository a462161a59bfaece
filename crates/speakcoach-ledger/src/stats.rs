//! Filtering and aggregation over attempt history.

use std::fmt;
use std::str::FromStr;

use speakcoach_core::model::{Attempt, CefrLevel, PracticeTab};

/// Equality filter over the tab and level dimensions.
///
/// An unset dimension matches every attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttemptFilter {
    pub tab: Option<PracticeTab>,
    pub level: Option<CefrLevel>,
}

impl AttemptFilter {
    /// True when `attempt` matches every set dimension.
    pub fn matches(&self, attempt: &Attempt) -> bool {
        self.tab.map_or(true, |t| attempt.tab == t)
            && self.level.map_or(true, |l| attempt.level == Some(l))
    }

    /// Subsequence of `attempts` matching this filter, order preserved.
    pub fn apply(&self, attempts: &[Attempt]) -> Vec<Attempt> {
        attempts
            .iter()
            .filter(|a| self.matches(a))
            .cloned()
            .collect()
    }
}

/// Numeric attempt fields the dashboard can aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreField {
    Pronunciation,
    Grammar,
    Fluency,
    Overall,
    Wpm,
}

impl ScoreField {
    /// Every aggregatable field, in display order.
    pub const ALL: [ScoreField; 5] = [
        ScoreField::Pronunciation,
        ScoreField::Grammar,
        ScoreField::Fluency,
        ScoreField::Overall,
        ScoreField::Wpm,
    ];

    fn value(self, attempt: &Attempt) -> u32 {
        match self {
            ScoreField::Pronunciation => u32::from(attempt.pronunciation),
            ScoreField::Grammar => u32::from(attempt.grammar),
            ScoreField::Fluency => u32::from(attempt.fluency),
            ScoreField::Overall => u32::from(attempt.overall),
            ScoreField::Wpm => attempt.wpm,
        }
    }
}

impl fmt::Display for ScoreField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreField::Pronunciation => write!(f, "pronunciation"),
            ScoreField::Grammar => write!(f, "grammar"),
            ScoreField::Fluency => write!(f, "fluency"),
            ScoreField::Overall => write!(f, "overall"),
            ScoreField::Wpm => write!(f, "wpm"),
        }
    }
}

impl FromStr for ScoreField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pronunciation" => Ok(ScoreField::Pronunciation),
            "grammar" => Ok(ScoreField::Grammar),
            "fluency" => Ok(ScoreField::Fluency),
            "overall" => Ok(ScoreField::Overall),
            "wpm" => Ok(ScoreField::Wpm),
            other => Err(format!("unknown score field: {other}")),
        }
    }
}

/// Rounded arithmetic mean of `field` across `attempts`; 0 when empty.
pub fn average(attempts: &[Attempt], field: ScoreField) -> u32 {
    if attempts.is_empty() {
        return 0;
    }
    let sum: u64 = attempts.iter().map(|a| u64::from(field.value(a))).sum();
    (sum as f64 / attempts.len() as f64).round() as u32
}
