//! Assessment report and the presentation data derived from it.

use crate::aggregate::SymptomAnalysis;
use crate::assessment::RiskAssessment;
use crate::constants::{HIGHLIGHT_LIMIT, HIGH_BAND_THRESHOLD, MEDIUM_BAND_THRESHOLD};
use crate::recommendation::RecommendationLevel;
use serde::Serialize;

/// Coarse band of the overall risk score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskBand {
    Low,
    Medium,
    High,
}

impl RiskBand {
    pub fn of(overall_risk: u8) -> Self {
        if overall_risk >= HIGH_BAND_THRESHOLD {
            Self::High
        } else if overall_risk >= MEDIUM_BAND_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Chart colour for the likelihood slice.
    pub fn color(self) -> &'static str {
        match self {
            Self::High => "#ef4444",
            Self::Medium => "#f59e0b",
            Self::Low => "#10b981",
        }
    }
}

impl std::fmt::Display for RiskBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
        }
    }
}

/// One slice of the likelihood chart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChartSlice {
    pub name: &'static str,
    pub value: u8,
    pub color: &'static str,
}

const UNCERTAINTY_COLOR: &str = "#e5e7eb";

/// Likelihood vs. uncertainty split of the overall risk score.
pub fn likelihood_chart(overall_risk: u8) -> [ChartSlice; 2] {
    let likelihood = overall_risk.min(100);
    [
        ChartSlice {
            name: "Likelihood of Condition",
            value: likelihood,
            color: RiskBand::of(likelihood).color(),
        },
        ChartSlice {
            name: "Uncertainty",
            value: 100 - likelihood,
            color: UNCERTAINTY_COLOR,
        },
    ]
}

/// The first few entries of each symptom list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SymptomHighlights {
    pub critical: Vec<String>,
    pub moderate: Vec<String>,
    pub mild: Vec<String>,
}

impl SymptomHighlights {
    pub fn from_assessment(assessment: &RiskAssessment) -> Self {
        fn head(items: &[String]) -> Vec<String> {
            items.iter().take(HIGHLIGHT_LIMIT).cloned().collect()
        }

        Self {
            critical: head(&assessment.critical_symptoms),
            moderate: head(&assessment.moderate_symptoms),
            mild: head(&assessment.mild_symptoms),
        }
    }
}

/// Everything produced by one evaluation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AssessmentReport {
    pub condition: String,
    pub condition_name: String,
    /// Whether the condition had a configured profile.
    pub condition_configured: bool,
    pub assessment: RiskAssessment,
    pub symptom_analysis: Vec<SymptomAnalysis>,
    pub recommendation: RecommendationLevel,
    pub risk_band: RiskBand,
    pub likelihood_chart: [ChartSlice; 2],
    pub highlights: SymptomHighlights,
    pub consultation_recommended: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_band_thresholds() {
        assert_eq!(RiskBand::of(0), RiskBand::Low);
        assert_eq!(RiskBand::of(39), RiskBand::Low);
        assert_eq!(RiskBand::of(40), RiskBand::Medium);
        assert_eq!(RiskBand::of(69), RiskBand::Medium);
        assert_eq!(RiskBand::of(70), RiskBand::High);
        assert_eq!(RiskBand::High.to_string(), "High");
    }

    #[test]
    fn likelihood_chart_splits_to_one_hundred() {
        let [likelihood, uncertainty] = likelihood_chart(42);
        assert_eq!(likelihood.value, 42);
        assert_eq!(likelihood.color, "#f59e0b");
        assert_eq!(uncertainty.value, 58);
        assert_eq!(uncertainty.color, "#e5e7eb");

        let [high, rest] = likelihood_chart(100);
        assert_eq!(high.color, "#ef4444");
        assert_eq!(rest.value, 0);

        assert_eq!(likelihood_chart(5)[0].color, "#10b981");
    }

    #[test]
    fn highlights_take_first_three() {
        let assessment = RiskAssessment {
            moderate_symptoms: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            mild_symptoms: vec!["x".into()],
            ..RiskAssessment::default()
        };
        let highlights = SymptomHighlights::from_assessment(&assessment);
        assert_eq!(highlights.moderate, vec!["a", "b", "c"]);
        assert_eq!(highlights.mild, vec!["x"]);
        assert!(highlights.critical.is_empty());
    }
}
