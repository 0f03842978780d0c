//! Constants used throughout the triage core crate.
//!
//! Scoring keywords, score values and classification thresholds live here so that the
//! normaliser, the category aggregator and the classifier read from one table.

/// Answer text containing any of these is in the severe tier.
pub const SEVERE_KEYWORDS: [&str; 3] = ["Severe", "High", "Extreme"];

/// Answer text containing any of these is in the moderate tier.
pub const MODERATE_KEYWORDS: [&str; 2] = ["Moderate", "Medium"];

/// Answer text containing any of these is in the mild tier.
pub const MILD_KEYWORDS: [&str; 3] = ["Mild", "Low", "Slight"];

/// Answer text containing any of these reports the symptom as absent.
pub const ABSENT_KEYWORDS: [&str; 2] = ["No", "Normal"];

pub const SEVERE_SCORE: f64 = 10.0;
pub const MODERATE_SCORE: f64 = 6.0;
pub const MILD_SCORE: f64 = 3.0;
pub const ABSENT_SCORE: f64 = 0.0;

/// Score for text that matches no tier, and for values of an unrecognised shape.
pub const NEUTRAL_SCORE: f64 = 4.0;

/// Maximum score a single answer is normalised against.
pub const MAX_ANSWER_SCORE: f64 = 10.0;

/// Points per selected item in a multi-select answer.
pub const SELECTION_POINTS_PER_ITEM: f64 = 2.0;

/// Multi-select answers with at least this many items are recorded as a moderate symptom.
pub const MULTIPLE_SYMPTOMS_MIN_ITEMS: usize = 4;

/// Numeric ratings at or above this are treated as high severity.
pub const HIGH_RATING_THRESHOLD: f64 = 8.0;

/// Default number of answered questions at which confidence saturates.
pub const DEFAULT_EXPECTED_QUESTION_COUNT: u32 = 50;

pub const MUST_RISK_THRESHOLD: u8 = 75;
pub const MUST_RED_FLAG_COUNT: usize = 3;
pub const MUST_CRITICAL_COUNT: usize = 2;

pub const SHOULD_RISK_THRESHOLD: u8 = 45;
pub const SHOULD_RED_FLAG_COUNT: usize = 1;
pub const SHOULD_CRITICAL_COUNT: usize = 1;

/// Overall risk at or above this is banded high.
pub const HIGH_BAND_THRESHOLD: u8 = 70;

/// Overall risk at or above this is banded medium.
pub const MEDIUM_BAND_THRESHOLD: u8 = 40;

/// Number of entries per symptom bucket shown as highlights.
pub const HIGHLIGHT_LIMIT: usize = 3;

/// Default REST listen address when `TRIAGE_REST_ADDR` is unset.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:3000";
