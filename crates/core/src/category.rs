//! Symptom categories and question areas.
//!
//! Two independent groupings exist:
//! - [`CategoryDefinition`]s drive the per-category severity breakdown and are configurable.
//! - [`QuestionArea`] is a fixed lookup used only to word red-flag messages.
//!
//! Neither grouping requires a question to belong to exactly one group.

use crate::answer::QuestionId;
use serde::{Deserialize, Serialize};
use triage_types::NonEmptyText;

/// A named group of questions with an informational display weight.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryDefinition {
    pub name: NonEmptyText,
    pub questions: Vec<QuestionId>,
    /// Chart weight. Not folded into the category's own severity.
    pub weight: f64,
}

impl CategoryDefinition {
    pub fn contains(&self, question: QuestionId) -> bool {
        self.questions.contains(&question)
    }
}

/// The six categories shipped with the engine, in display order.
pub fn builtin_categories() -> Vec<CategoryDefinition> {
    const TABLE: [(&str, &[QuestionId], f64); 6] = [
        ("Pain & Discomfort", &[1, 3, 7, 15, 30], 2.5),
        ("Respiratory", &[2, 5, 11, 24, 25], 3.0),
        ("Neurological", &[6, 12, 27, 28], 2.8),
        ("Gastrointestinal", &[9, 26], 2.2),
        ("General Health", &[8, 10, 20, 29], 2.0),
        ("Sensory", &[13, 14, 22, 23], 2.3),
    ];

    TABLE
        .iter()
        .filter_map(|(name, questions, weight)| {
            NonEmptyText::new(name).ok().map(|name| CategoryDefinition {
                name,
                questions: questions.to_vec(),
                weight: *weight,
            })
        })
        .collect()
}

/// Body area a question is about, used to word red flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionArea {
    PainDiscomfort,
    Respiratory,
    Neurological,
    Gastrointestinal,
    General,
}

impl QuestionArea {
    const PAIN: &'static [QuestionId] = &[1, 3, 7, 15, 30];
    const RESPIRATORY: &'static [QuestionId] = &[2, 5, 11, 24, 25];
    const NEUROLOGICAL: &'static [QuestionId] = &[6, 12, 27, 28];
    const GASTROINTESTINAL: &'static [QuestionId] = &[9, 26];

    /// Resolve the area of a question; earlier areas win when lists overlap.
    pub fn of(question: QuestionId) -> Self {
        if Self::PAIN.contains(&question) {
            Self::PainDiscomfort
        } else if Self::RESPIRATORY.contains(&question) {
            Self::Respiratory
        } else if Self::NEUROLOGICAL.contains(&question) {
            Self::Neurological
        } else if Self::GASTROINTESTINAL.contains(&question) {
            Self::Gastrointestinal
        } else {
            Self::General
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::PainDiscomfort => "pain/discomfort",
            Self::Respiratory => "respiratory symptoms",
            Self::Neurological => "neurological symptoms",
            Self::Gastrointestinal => "gastrointestinal symptoms",
            Self::General => "general symptoms",
        }
    }
}

impl std::fmt::Display for QuestionArea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
