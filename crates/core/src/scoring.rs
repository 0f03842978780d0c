//! Per-answer scoring.
//!
//! [`score_answer`] is the single source of an answer's 0–10 score. The normaliser
//! ([`normalize`]) and the category aggregator both build on it; only the normaliser considers
//! question weight and raises red flags.

use crate::answer::{AnswerValue, QuestionId};
use crate::category::QuestionArea;
use crate::constants::{
    ABSENT_KEYWORDS, ABSENT_SCORE, HIGH_RATING_THRESHOLD, MAX_ANSWER_SCORE, MILD_KEYWORDS,
    MILD_SCORE, MODERATE_KEYWORDS, MODERATE_SCORE, MULTIPLE_SYMPTOMS_MIN_ITEMS, NEUTRAL_SCORE,
    SELECTION_POINTS_PER_ITEM, SEVERE_KEYWORDS, SEVERE_SCORE,
};
use crate::profile::Weight;
use serde::{Deserialize, Serialize};

/// Severity tier of a text answer, decided by case-sensitive keyword match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeverityTier {
    Severe,
    Moderate,
    Mild,
    Absent,
    /// Text matching no keyword, e.g. "Sometimes".
    Neutral,
}

impl SeverityTier {
    /// Tiers are tested from most to least severe; the first match wins.
    pub fn of_text(text: &str) -> Self {
        if contains_any(text, &SEVERE_KEYWORDS) {
            Self::Severe
        } else if contains_any(text, &MODERATE_KEYWORDS) {
            Self::Moderate
        } else if contains_any(text, &MILD_KEYWORDS) {
            Self::Mild
        } else if contains_any(text, &ABSENT_KEYWORDS) {
            Self::Absent
        } else {
            Self::Neutral
        }
    }

    pub fn score(self) -> f64 {
        match self {
            Self::Severe => SEVERE_SCORE,
            Self::Moderate => MODERATE_SCORE,
            Self::Mild => MILD_SCORE,
            Self::Absent => ABSENT_SCORE,
            Self::Neutral => NEUTRAL_SCORE,
        }
    }
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(*keyword))
}

/// Which symptom list a normalised answer is recorded in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    Critical,
    Moderate,
    Mild,
    None,
}

/// Score of one answer, independent of question weight.
///
/// Numeric ratings pass through unclamped.
pub fn score_answer(value: &AnswerValue) -> f64 {
    match value {
        AnswerValue::Text(text) => SeverityTier::of_text(text).score(),
        AnswerValue::Scale(_) => value.rating().unwrap_or(NEUTRAL_SCORE),
        AnswerValue::Selection(items) => {
            (items.len() as f64 * SELECTION_POINTS_PER_ITEM).min(MAX_ANSWER_SCORE)
        }
        AnswerValue::Unrecognised(_) => NEUTRAL_SCORE,
    }
}

/// Whether a numeric rating counts as high severity.
pub fn is_high_rating(rating: f64) -> bool {
    rating >= HIGH_RATING_THRESHOLD
}

/// Result of normalising one answer.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedAnswer {
    pub score: f64,
    pub bucket: Bucket,
    /// Text recorded in the bucket, present unless the bucket is [`Bucket::None`].
    pub label: Option<String>,
    pub red_flag: Option<String>,
}

impl NormalizedAnswer {
    fn unrecorded(score: f64) -> Self {
        Self {
            score,
            bucket: Bucket::None,
            label: None,
            red_flag: None,
        }
    }

    fn recorded(score: f64, bucket: Bucket, label: String) -> Self {
        Self {
            score,
            bucket,
            label: Some(label),
            red_flag: None,
        }
    }
}

/// Score an answer and decide its bucket and any red flag.
pub fn normalize(question: QuestionId, value: &AnswerValue, weight: Weight) -> NormalizedAnswer {
    let score = score_answer(value);

    match value {
        AnswerValue::Text(text) => match SeverityTier::of_text(text) {
            SeverityTier::Severe if weight == Weight::Critical => NormalizedAnswer {
                score,
                bucket: Bucket::Critical,
                label: Some(text.clone()),
                red_flag: Some(format!("Severe {}: {}", QuestionArea::of(question), text)),
            },
            SeverityTier::Severe | SeverityTier::Moderate => {
                NormalizedAnswer::recorded(score, Bucket::Moderate, text.clone())
            }
            SeverityTier::Mild => NormalizedAnswer::recorded(score, Bucket::Mild, text.clone()),
            SeverityTier::Absent | SeverityTier::Neutral => NormalizedAnswer::unrecorded(score),
        },
        AnswerValue::Scale(_) => {
            let mut normalized = NormalizedAnswer::unrecorded(score);
            if weight == Weight::Critical && is_high_rating(score) {
                normalized.red_flag = Some(format!("High severity rating: {score}/10"));
            }
            normalized
        }
        AnswerValue::Selection(items) if items.len() >= MULTIPLE_SYMPTOMS_MIN_ITEMS => {
            NormalizedAnswer::recorded(
                score,
                Bucket::Moderate,
                format!("Multiple symptoms: {}", items.join(", ")),
            )
        }
        AnswerValue::Selection(_) | AnswerValue::Unrecognised(_) => {
            NormalizedAnswer::unrecorded(score)
        }
    }
}
