//! Triage recommendation levels.

use crate::assessment::RiskAssessment;
use crate::constants::{
    MUST_CRITICAL_COUNT, MUST_RED_FLAG_COUNT, MUST_RISK_THRESHOLD, SHOULD_CRITICAL_COUNT,
    SHOULD_RED_FLAG_COUNT, SHOULD_RISK_THRESHOLD,
};
use serde::Serialize;

/// The three triage outcomes, least to most urgent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    Can,
    Should,
    Must,
}

impl RecommendationKind {
    /// Whether booking a consultation should be offered.
    pub fn recommends_consultation(self) -> bool {
        self != Self::Can
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

/// Static guidance for one [`RecommendationKind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RecommendationLevel {
    pub level: RecommendationKind,
    pub title: &'static str,
    pub description: &'static str,
    pub urgency: Urgency,
    pub timeframe: &'static str,
    pub actions: &'static [&'static str],
}

pub const MUST: RecommendationLevel = RecommendationLevel {
    level: RecommendationKind::Must,
    title: "Must Consult a Doctor Immediately",
    description: "Your symptoms indicate a potentially serious condition requiring immediate medical evaluation. Do not delay seeking professional care.",
    urgency: Urgency::High,
    timeframe: "Within 2-4 hours",
    actions: &[
        "Contact your doctor immediately or go to emergency room",
        "Do not drive yourself if symptoms are severe",
        "Bring a list of current medications",
        "Have someone accompany you if possible",
    ],
};

pub const SHOULD: RecommendationLevel = RecommendationLevel {
    level: RecommendationKind::Should,
    title: "Should Consult a Doctor Soon",
    description: "Your symptoms suggest a condition that warrants professional medical evaluation within the next day or two.",
    urgency: Urgency::Medium,
    timeframe: "Within 24-48 hours",
    actions: &[
        "Schedule an appointment with your primary care doctor",
        "Monitor symptoms closely for any worsening",
        "Keep a symptom diary",
        "Avoid strenuous activities until evaluated",
    ],
};

pub const CAN: RecommendationLevel = RecommendationLevel {
    level: RecommendationKind::Can,
    title: "Can Monitor or Consult if Needed",
    description: "Your symptoms appear mild to moderate. Continue monitoring and consider consulting a doctor if symptoms persist or worsen.",
    urgency: Urgency::Low,
    timeframe: "Within 1-2 weeks if symptoms persist",
    actions: &[
        "Continue with appropriate home care measures",
        "Monitor symptoms for any changes",
        "Maintain good hydration and rest",
        "Consult a doctor if symptoms worsen or persist beyond expected timeframe",
    ],
};

impl RecommendationLevel {
    pub fn for_kind(kind: RecommendationKind) -> Self {
        match kind {
            RecommendationKind::Can => CAN,
            RecommendationKind::Should => SHOULD,
            RecommendationKind::Must => MUST,
        }
    }
}

/// Classify from raw counts. Each tier is an OR over its three conditions.
pub fn classify_counts(
    overall_risk: u8,
    red_flags: usize,
    critical_symptoms: usize,
) -> RecommendationLevel {
    let kind = if overall_risk >= MUST_RISK_THRESHOLD
        || red_flags >= MUST_RED_FLAG_COUNT
        || critical_symptoms >= MUST_CRITICAL_COUNT
    {
        RecommendationKind::Must
    } else if overall_risk >= SHOULD_RISK_THRESHOLD
        || red_flags >= SHOULD_RED_FLAG_COUNT
        || critical_symptoms >= SHOULD_CRITICAL_COUNT
    {
        RecommendationKind::Should
    } else {
        RecommendationKind::Can
    };
    RecommendationLevel::for_kind(kind)
}

pub fn classify(assessment: &RiskAssessment) -> RecommendationLevel {
    classify_counts(
        assessment.overall_risk,
        assessment.red_flags.len(),
        assessment.critical_symptoms.len(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assessment(overall_risk: u8, red_flags: usize, critical: usize) -> RiskAssessment {
        RiskAssessment {
            overall_risk,
            red_flags: vec!["flag".to_string(); red_flags],
            critical_symptoms: vec!["Severe".to_string(); critical],
            ..RiskAssessment::default()
        }
    }

    #[test]
    fn risk_threshold_boundaries() {
        assert_eq!(classify(&assessment(75, 0, 0)).level, RecommendationKind::Must);
        assert_eq!(classify(&assessment(74, 0, 0)).level, RecommendationKind::Should);
        assert_eq!(classify(&assessment(45, 0, 0)).level, RecommendationKind::Should);
        assert_eq!(classify(&assessment(44, 0, 0)).level, RecommendationKind::Can);
        assert_eq!(classify(&assessment(0, 0, 0)).level, RecommendationKind::Can);
    }

    #[test]
    fn red_flags_escalate_regardless_of_score() {
        assert_eq!(classify(&assessment(10, 3, 0)).level, RecommendationKind::Must);
        assert_eq!(classify(&assessment(10, 1, 0)).level, RecommendationKind::Should);
    }

    #[test]
    fn critical_symptoms_escalate_regardless_of_score() {
        assert_eq!(classify(&assessment(10, 0, 2)).level, RecommendationKind::Must);
        assert_eq!(classify(&assessment(10, 0, 1)).level, RecommendationKind::Should);
    }

    #[test]
    fn must_level_content() {
        let level = classify(&assessment(90, 0, 0));
        assert_eq!(level.title, "Must Consult a Doctor Immediately");
        assert_eq!(level.urgency, Urgency::High);
        assert_eq!(level.timeframe, "Within 2-4 hours");
        assert_eq!(level.actions.len(), 4);
        assert_eq!(
            level.actions[0],
            "Contact your doctor immediately or go to emergency room"
        );
    }

    #[test]
    fn should_level_content() {
        let level = classify(&assessment(50, 0, 0));
        assert_eq!(level.title, "Should Consult a Doctor Soon");
        assert_eq!(level.urgency, Urgency::Medium);
        assert_eq!(level.timeframe, "Within 24-48 hours");
        assert_eq!(level.actions[2], "Keep a symptom diary");
    }

    #[test]
    fn can_level_content() {
        let level = classify(&assessment(0, 0, 0));
        assert_eq!(level.title, "Can Monitor or Consult if Needed");
        assert_eq!(level.urgency, Urgency::Low);
        assert_eq!(level.timeframe, "Within 1-2 weeks if symptoms persist");
        assert_eq!(level.actions[2], "Maintain good hydration and rest");
    }

    #[test]
    fn consultation_offered_above_can() {
        assert!(!RecommendationKind::Can.recommends_consultation());
        assert!(RecommendationKind::Should.recommends_consultation());
        assert!(RecommendationKind::Must.recommends_consultation());
        assert_eq!(RecommendationLevel::for_kind(RecommendationKind::Should), SHOULD);
    }

    #[test]
    fn level_serializes_lowercase() {
        let json = serde_json::to_value(MUST).expect("serialize");
        assert_eq!(json["level"], "must");
        assert_eq!(json["urgency"], "high");
    }
}
