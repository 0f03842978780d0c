//! Overall risk assessment of a questionnaire.

use crate::answer::Answers;
use crate::constants::MAX_ANSWER_SCORE;
use crate::profile::ConditionProfile;
use crate::scoring::{normalize, Bucket};
use serde::{Deserialize, Serialize};

/// Outcome of normalising every answer in a questionnaire.
///
/// Symptom and red-flag lists are ordered by question identifier.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Weighted percentage of the maximum possible score, 0–100.
    pub overall_risk: u8,
    pub critical_symptoms: Vec<String>,
    pub moderate_symptoms: Vec<String>,
    pub mild_symptoms: Vec<String>,
    pub red_flags: Vec<String>,
    /// How much of the expected questionnaire was answered, 0–100.
    pub confidence_level: u8,
}

/// Convert a ratio into a rounded percentage in `0..=100`.
///
/// An overflowing ratio saturates at 100; NaN maps to 0.
pub(crate) fn percentage(ratio: f64) -> u8 {
    if ratio.is_nan() {
        return 0;
    }
    (ratio.clamp(0.0, 1.0) * 100.0).round() as u8
}

/// Assess `answers` against a condition profile.
///
/// `expected_question_count` is the answer count at which confidence reaches 100.
pub fn assess(
    profile: &ConditionProfile,
    answers: &Answers,
    expected_question_count: u32,
) -> RiskAssessment {
    let mut assessment = RiskAssessment::default();
    let mut total_score = 0.0;
    let mut max_score = 0.0;

    for (question, value) in answers.iter() {
        let weight = profile.weight_of(question);
        let normalized = normalize(question, value, weight);

        total_score += normalized.score * weight.multiplier();
        max_score += MAX_ANSWER_SCORE * weight.multiplier();

        if let Some(label) = normalized.label {
            match normalized.bucket {
                Bucket::Critical => assessment.critical_symptoms.push(label),
                Bucket::Moderate => assessment.moderate_symptoms.push(label),
                Bucket::Mild => assessment.mild_symptoms.push(label),
                Bucket::None => {}
            }
        }
        if let Some(flag) = normalized.red_flag {
            assessment.red_flags.push(flag);
        }
    }

    assessment.overall_risk = if max_score > 0.0 {
        percentage(total_score / max_score)
    } else {
        0
    };
    assessment.confidence_level = if expected_question_count > 0 {
        percentage(answers.len() as f64 / f64::from(expected_question_count))
    } else {
        0
    };

    assessment
}
