//! The risk assessment engine.
//!
//! [`evaluate`] runs the full pipeline: answers are normalised into a
//! [`RiskAssessment`](crate::RiskAssessment), aggregated per symptom category, and classified
//! into a [`RecommendationLevel`](crate::RecommendationLevel). It never
//! fails: unknown conditions use the fallback profile and malformed values score neutrally.

use crate::aggregate::analyze_categories;
use crate::answer::Answers;
use crate::assessment::assess;
use crate::config::EngineConfig;
use crate::recommendation::classify;
use crate::report::{likelihood_chart, AssessmentReport, RiskBand, SymptomHighlights};
use std::sync::Arc;
use triage_types::ConditionSlug;

/// Evaluate one questionnaire for `condition` under `cfg`.
pub fn evaluate(cfg: &EngineConfig, condition: &str, answers: &Answers) -> AssessmentReport {
    let configured = cfg.is_configured(condition);
    if !configured {
        tracing::debug!(condition, "no profile configured, weighting all questions equally");
    }

    let assessment = assess(
        cfg.profile(condition),
        answers,
        cfg.expected_question_count(),
    );
    let symptom_analysis = analyze_categories(cfg.categories(), answers);
    let recommendation = classify(&assessment);

    tracing::debug!(
        condition,
        answered = answers.len(),
        overall_risk = assessment.overall_risk,
        red_flags = assessment.red_flags.len(),
        level = ?recommendation.level,
        "evaluated questionnaire"
    );

    AssessmentReport {
        condition: condition.to_owned(),
        condition_name: ConditionSlug::parse(condition)
            .map(|slug| slug.display_name())
            .unwrap_or_else(|_| condition.to_owned()),
        condition_configured: configured,
        risk_band: RiskBand::of(assessment.overall_risk),
        likelihood_chart: likelihood_chart(assessment.overall_risk),
        highlights: SymptomHighlights::from_assessment(&assessment),
        consultation_recommended: recommendation.level.recommends_consultation(),
        assessment,
        symptom_analysis,
        recommendation,
    }
}

/// Assessment operations bound to a shared configuration.
#[derive(Clone, Debug)]
pub struct AssessmentService {
    cfg: Arc<EngineConfig>,
}

impl AssessmentService {
    pub fn new(cfg: Arc<EngineConfig>) -> Self {
        Self { cfg }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.cfg
    }

    pub fn evaluate(&self, condition: &str, answers: &Answers) -> AssessmentReport {
        evaluate(&self.cfg, condition, answers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answer::AnswerValue;
    use crate::recommendation::RecommendationKind;

    fn service() -> AssessmentService {
        AssessmentService::new(Arc::new(EngineConfig::builtin().expect("builtin config")))
    }

    fn migraine_answers() -> Answers {
        let mut answers = Answers::new();
        answers.insert(1, "More than 6 months");
        answers.insert(3, 9);
        answers.insert(12, "Frequently");
        answers.insert(27, "Poor");
        answers
    }

    #[test]
    fn empty_answers_classify_as_can() {
        let report = service().evaluate("common-cold", &Answers::new());
        assert_eq!(report.assessment.overall_risk, 0);
        assert_eq!(report.assessment.confidence_level, 0);
        assert!(report.assessment.critical_symptoms.is_empty());
        assert!(report.assessment.moderate_symptoms.is_empty());
        assert!(report.assessment.mild_symptoms.is_empty());
        assert!(report.assessment.red_flags.is_empty());
        assert_eq!(report.recommendation.level, RecommendationKind::Can);
        assert_eq!(report.symptom_analysis.len(), 6);
        assert!(!report.consultation_recommended);
    }

    #[test]
    fn migraine_scenario_raises_numeric_red_flag() {
        let report = service().evaluate("migraine-headache", &migraine_answers());

        assert_eq!(
            report.assessment.red_flags,
            vec!["High severity rating: 9/10"]
        );
        assert!(report.recommendation.level >= RecommendationKind::Should);
        // 1: moderate, 4*2; 3: critical, 9*3; 12: critical, 4*3; 27: critical, 4*3
        // (8 + 27 + 12 + 12) / (20 + 30 + 30 + 30) = 59 / 110
        assert_eq!(report.assessment.overall_risk, 54);
        assert_eq!(report.assessment.confidence_level, 8);
        assert!(report.condition_configured);
        assert_eq!(report.condition_name, "migraine headache");
    }

    #[test]
    fn unknown_condition_uses_equal_weights() {
        let answers = migraine_answers();
        let report = service().evaluate("nonexistent-condition", &answers);
        assert!(!report.condition_configured);
        // (4 + 9 + 4 + 4) / 40
        assert_eq!(report.assessment.overall_risk, 53);
        assert!(report.assessment.red_flags.is_empty());
        assert_eq!(report.recommendation.level, RecommendationKind::Should);
    }

    #[test]
    fn condition_name_keeps_non_slug_input() {
        let report = service().evaluate("Common Cold", &Answers::new());
        assert_eq!(report.condition_name, "Common Cold");
        assert!(!report.condition_configured);
    }

    #[test]
    fn overflowing_rating_saturates_risk() {
        let mut answers = Answers::new();
        answers.insert(3, 1e308);
        let report = service().evaluate("migraine-headache", &answers);
        assert_eq!(report.assessment.overall_risk, 100);
        assert_eq!(report.recommendation.level, RecommendationKind::Must);
        assert_eq!(report.assessment.red_flags.len(), 1);
    }

    #[test]
    fn evaluation_is_deterministic() {
        let svc = service();
        let answers = migraine_answers();
        let first = svc.evaluate("migraine-headache", &answers);
        for _ in 0..5 {
            assert_eq!(svc.evaluate("migraine-headache", &answers), first);
        }
    }

    #[test]
    fn two_critical_severe_answers_require_immediate_care() {
        let mut answers = Answers::new();
        answers.insert(4, "Severe fever");
        answers.insert(11, "Extreme");
        for q in 30..=45 {
            answers.insert(q, "No");
        }
        let report = service().evaluate("common-cold", &answers);
        assert_eq!(report.assessment.critical_symptoms.len(), 2);
        assert_eq!(
            report.assessment.red_flags,
            vec![
                "Severe general symptoms: Severe fever",
                "Severe respiratory symptoms: Extreme"
            ]
        );
        assert!(report.assessment.overall_risk < 45);
        assert_eq!(report.recommendation.level, RecommendationKind::Must);
        assert!(report.consultation_recommended);
    }

    #[test]
    fn malformed_values_score_neutrally() {
        let mut answers = Answers::new();
        answers.insert(50, AnswerValue::Unrecognised(serde_json::json!({"x": 1})));
        let report = service().evaluate("common-cold", &answers);
        assert_eq!(report.assessment.overall_risk, 40);
        assert!(report.assessment.moderate_symptoms.is_empty());
    }

    #[test]
    fn bounds_hold_for_extreme_inputs() {
        let mut answers = Answers::new();
        for q in 1..=40 {
            answers.insert(q, if q % 2 == 0 { 1000 } else { -1000 });
        }
        let report = service().evaluate("gastroenteritis", &answers);
        assert!(report.assessment.overall_risk <= 100);
        assert!(report.assessment.confidence_level <= 100);
        assert!(report.symptom_analysis.iter().all(|a| a.severity <= 100));
    }

    #[test]
    fn multi_select_answer_is_recorded_as_moderate() {
        let mut answers = Answers::new();
        answers.insert(
            2,
            vec![
                "Wheezing",
                "Shortness of breath",
                "Chest tightness",
                "Persistent cough",
            ],
        );
        let report = service().evaluate("common-cold", &answers);
        // question 2 is moderate for common-cold: 8*2 / 10*2
        assert_eq!(report.assessment.overall_risk, 80);
        assert_eq!(
            report.assessment.moderate_symptoms,
            vec!["Multiple symptoms: Wheezing, Shortness of breath, Chest tightness, Persistent cough"]
        );
        assert_eq!(report.recommendation.level, RecommendationKind::Must);
    }
}
