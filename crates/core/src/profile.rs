//! Per-condition question weighting.

use crate::answer::QuestionId;
use crate::TriageResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use triage_types::ConditionSlug;

/// How much a question counts towards the overall score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weight {
    Standard,
    Moderate,
    Critical,
}

impl Weight {
    pub fn multiplier(self) -> f64 {
        match self {
            Self::Standard => 1.0,
            Self::Moderate => 2.0,
            Self::Critical => 3.0,
        }
    }
}

/// Critical and moderate question lists for one condition.
///
/// Unlisted questions weigh [`Weight::Standard`]. A question on both lists is critical.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConditionProfile {
    #[serde(default)]
    pub critical: Vec<QuestionId>,
    #[serde(default)]
    pub moderate: Vec<QuestionId>,
    /// Number of questions in this condition's questionnaire, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_count: Option<u32>,
}

/// Profile used for conditions with no configuration.
pub static FALLBACK_PROFILE: ConditionProfile = ConditionProfile {
    critical: Vec::new(),
    moderate: Vec::new(),
    question_count: None,
};

impl ConditionProfile {
    pub fn new(critical: Vec<QuestionId>, moderate: Vec<QuestionId>) -> Self {
        Self {
            critical,
            moderate,
            question_count: None,
        }
    }

    pub fn weight_of(&self, question: QuestionId) -> Weight {
        if self.critical.contains(&question) {
            Weight::Critical
        } else if self.moderate.contains(&question) {
            Weight::Moderate
        } else {
            Weight::Standard
        }
    }
}

/// Profiles for the conditions the questionnaires ship with.
pub fn builtin_profiles() -> TriageResult<BTreeMap<ConditionSlug, ConditionProfile>> {
    const TABLE: [(&str, &[QuestionId], &[QuestionId]); 5] = [
        // fever, breathing difficulty, blood in phlegm
        ("common-cold", &[4, 11, 25], &[1, 2, 5, 8]),
        ("seasonal-allergies", &[11, 23], &[1, 2, 13, 14]),
        ("migraine-headache", &[3, 12, 27], &[1, 6, 8, 10]),
        // nausea, abdominal pain, dehydration
        ("gastroenteritis", &[9, 26, 31], &[1, 6, 8, 10]),
        ("anxiety-disorder", &[27, 28, 29], &[1, 8, 10, 39]),
    ];

    let mut profiles = BTreeMap::new();
    for (slug, critical, moderate) in TABLE {
        let mut profile = ConditionProfile::new(critical.to_vec(), moderate.to_vec());
        profile.question_count = Some(crate::constants::DEFAULT_EXPECTED_QUESTION_COUNT);
        profiles.insert(ConditionSlug::parse(slug)?, profile);
    }
    Ok(profiles)
}
