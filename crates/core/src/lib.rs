//! # Triage Core
//!
//! Core business logic for symptom questionnaire triage.
//!
//! This crate contains the risk assessment engine and the configuration it runs on:
//! - Answer normalisation into per-answer scores, symptom buckets and red flags
//! - Per-category severity breakdown
//! - Classification into a recommendation level
//! - Configuration tables (condition profiles, categories) resolved once at startup
//!
//! **No API concerns**: HTTP servers, request parsing and CLI output belong in `api-rest`,
//! `api-shared` or `triage-cli`.

pub mod aggregate;
pub mod answer;
pub mod assessment;
pub mod category;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod profile;
pub mod recommendation;
pub mod report;
pub mod scoring;
pub mod submission;

pub use aggregate::SymptomAnalysis;
pub use answer::{AnswerValue, Answers, QuestionId};
pub use assessment::RiskAssessment;
pub use category::{CategoryDefinition, QuestionArea};
pub use config::EngineConfig;
pub use constants::DEFAULT_REST_ADDR;
pub use engine::{evaluate, AssessmentService};
pub use error::{TriageError, TriageResult};
pub use profile::{ConditionProfile, Weight};
pub use recommendation::{classify, RecommendationKind, RecommendationLevel, Urgency};
pub use report::{AssessmentReport, ChartSlice, RiskBand, SymptomHighlights};
pub use submission::{InMemorySubmissionStore, Submission, SubmissionStore};

pub use triage_types::{ConditionSlug, NonEmptyText, TextError};
