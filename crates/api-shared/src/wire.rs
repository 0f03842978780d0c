//! Request and response bodies exchanged over the triage APIs.
//!
//! Core engine types stay free of API schema derives; these mirrors carry the `ToSchema`
//! annotations and are built from the core values with `From`.

use serde::{Deserialize, Serialize};
use triage_core::{
    AssessmentReport, ChartSlice, ConditionProfile, ConditionSlug, RecommendationKind,
    RecommendationLevel, RiskAssessment, RiskBand, Submission, SymptomAnalysis, SymptomHighlights,
    Urgency,
};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Body of `POST /assessments/{condition}`.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct AssessmentReq {
    /// Optional identifier the submission is filed under.
    #[serde(default)]
    pub user_id: Option<String>,
    /// Object keyed by question number. Values may be text, a 1-10 rating or a list of
    /// selected options.
    #[schema(value_type = Object)]
    pub answers: serde_json::Value,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct AssessmentRes {
    pub submission_id: String,
    pub submitted_at: String,
    pub report: ReportBody,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ConditionSummary {
    pub slug: String,
    pub name: String,
    pub critical_questions: Vec<u32>,
    pub moderate_questions: Vec<u32>,
}

impl ConditionSummary {
    pub fn new(slug: &ConditionSlug, profile: &ConditionProfile) -> Self {
        Self {
            slug: slug.as_str().to_owned(),
            name: slug.display_name(),
            critical_questions: profile.critical.clone(),
            moderate_questions: profile.moderate.clone(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ListConditionsRes {
    pub conditions: Vec<ConditionSummary>,
    pub expected_question_count: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SubmissionRes {
    pub id: String,
    pub user_id: Option<String>,
    pub condition: String,
    #[schema(value_type = Object)]
    pub answers: serde_json::Value,
    pub submitted_at: String,
}

impl SubmissionRes {
    /// Wire form of a stored submission.
    pub fn from_submission(submission: &Submission) -> Result<Self, serde_json::Error> {
        Ok(Self {
            id: submission.id.to_string(),
            user_id: submission.user_id.clone(),
            condition: submission.condition.clone(),
            answers: serde_json::to_value(&submission.answers)?,
            submitted_at: submission.submitted_at.to_rfc3339(),
        })
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ListSubmissionsRes {
    pub submissions: Vec<SubmissionRes>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct RiskAssessmentBody {
    pub overall_risk: u8,
    pub critical_symptoms: Vec<String>,
    pub moderate_symptoms: Vec<String>,
    pub mild_symptoms: Vec<String>,
    pub red_flags: Vec<String>,
    pub confidence_level: u8,
}

impl From<&RiskAssessment> for RiskAssessmentBody {
    fn from(a: &RiskAssessment) -> Self {
        Self {
            overall_risk: a.overall_risk,
            critical_symptoms: a.critical_symptoms.clone(),
            moderate_symptoms: a.moderate_symptoms.clone(),
            mild_symptoms: a.mild_symptoms.clone(),
            red_flags: a.red_flags.clone(),
            confidence_level: a.confidence_level,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SymptomAnalysisBody {
    pub category: String,
    pub severity: u8,
    pub weight: f64,
    pub risk_factors: Vec<String>,
}

impl From<&SymptomAnalysis> for SymptomAnalysisBody {
    fn from(s: &SymptomAnalysis) -> Self {
        Self {
            category: s.category.clone(),
            severity: s.severity,
            weight: s.weight,
            risk_factors: s.risk_factors.clone(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct RecommendationBody {
    /// One of `must`, `should` or `can`.
    pub level: String,
    pub title: String,
    pub description: String,
    /// One of `high`, `medium` or `low`.
    pub urgency: String,
    pub timeframe: String,
    pub actions: Vec<String>,
}

impl From<&RecommendationLevel> for RecommendationBody {
    fn from(r: &RecommendationLevel) -> Self {
        let level = match r.level {
            RecommendationKind::Must => "must",
            RecommendationKind::Should => "should",
            RecommendationKind::Can => "can",
        };
        let urgency = match r.urgency {
            Urgency::High => "high",
            Urgency::Medium => "medium",
            Urgency::Low => "low",
        };
        Self {
            level: level.into(),
            title: r.title.into(),
            description: r.description.into(),
            urgency: urgency.into(),
            timeframe: r.timeframe.into(),
            actions: r.actions.iter().map(|a| (*a).to_owned()).collect(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ChartSliceBody {
    pub name: String,
    pub value: u8,
    pub color: String,
}

impl From<&ChartSlice> for ChartSliceBody {
    fn from(c: &ChartSlice) -> Self {
        Self {
            name: c.name.into(),
            value: c.value,
            color: c.color.into(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct HighlightsBody {
    pub critical: Vec<String>,
    pub moderate: Vec<String>,
    pub mild: Vec<String>,
}

impl From<&SymptomHighlights> for HighlightsBody {
    fn from(h: &SymptomHighlights) -> Self {
        Self {
            critical: h.critical.clone(),
            moderate: h.moderate.clone(),
            mild: h.mild.clone(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ReportBody {
    pub condition: String,
    pub condition_name: String,
    pub condition_configured: bool,
    pub assessment: RiskAssessmentBody,
    pub symptom_analysis: Vec<SymptomAnalysisBody>,
    pub recommendation: RecommendationBody,
    /// One of `low`, `medium` or `high`.
    pub risk_band: String,
    pub likelihood_chart: Vec<ChartSliceBody>,
    pub highlights: HighlightsBody,
    pub consultation_recommended: bool,
}

impl From<&AssessmentReport> for ReportBody {
    fn from(r: &AssessmentReport) -> Self {
        let risk_band = match r.risk_band {
            RiskBand::High => "high",
            RiskBand::Medium => "medium",
            RiskBand::Low => "low",
        };
        Self {
            condition: r.condition.clone(),
            condition_name: r.condition_name.clone(),
            condition_configured: r.condition_configured,
            assessment: (&r.assessment).into(),
            symptom_analysis: r.symptom_analysis.iter().map(Into::into).collect(),
            recommendation: (&r.recommendation).into(),
            risk_band: risk_band.into(),
            likelihood_chart: r.likelihood_chart.iter().map(Into::into).collect(),
            highlights: (&r.highlights).into(),
            consultation_recommended: r.consultation_recommended,
        }
    }
}
