//! Raw questionnaire answers.
//!
//! Answers arrive as a JSON object keyed by decimal question identifiers, with values that are
//! option labels, numeric scale ratings, or lists of selected options. Values of any other shape
//! are kept as [`AnswerValue::Unrecognised`] so that scoring can degrade instead of failing.

use crate::{TriageError, TriageResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Identifier of a question within a questionnaire (positive integer).
pub type QuestionId = u32;

/// One raw answer value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    /// Free text or a selected option label, e.g. `"Severe"`.
    Text(String),
    /// Numeric scale rating, conventionally 1–10. Kept as submitted so that `9` stays an
    /// integer when stored.
    Scale(serde_json::Number),
    /// Labels picked in a multi-select question.
    Selection(Vec<String>),
    /// Any other JSON value.
    Unrecognised(serde_json::Value),
}

impl AnswerValue {
    /// Classify an arbitrary JSON value.
    pub fn from_json(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::String(text) => Self::Text(text),
            Value::Number(n) => Self::Scale(n),
            Value::Array(items) if items.iter().all(Value::is_string) => Self::Selection(
                items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::String(label) => Some(label),
                        _ => None,
                    })
                    .collect(),
            ),
            other => Self::Unrecognised(other),
        }
    }

    /// Numeric rating, if this is a scale answer.
    pub fn rating(&self) -> Option<f64> {
        match self {
            Self::Scale(n) => n.as_f64(),
            _ => None,
        }
    }

    /// Whether the value counts as an answer when aggregating a category.
    ///
    /// Empty text, a zero rating, `null` and `false` are treated as unanswered. Whitespace-only
    /// text is an answer.
    pub fn is_present(&self) -> bool {
        match self {
            Self::Text(text) => !text.is_empty(),
            Self::Scale(_) => self.rating().is_some_and(|rating| rating != 0.0),
            Self::Selection(_) => true,
            Self::Unrecognised(value) => !matches!(
                value,
                serde_json::Value::Null | serde_json::Value::Bool(false)
            ),
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<f64> for AnswerValue {
    /// NaN and infinities have no JSON form and become `Unrecognised(null)`.
    fn from(rating: f64) -> Self {
        serde_json::Number::from_f64(rating)
            .map_or(Self::Unrecognised(serde_json::Value::Null), Self::Scale)
    }
}

impl From<i32> for AnswerValue {
    fn from(rating: i32) -> Self {
        Self::Scale(rating.into())
    }
}

impl From<Vec<&str>> for AnswerValue {
    fn from(labels: Vec<&str>) -> Self {
        Self::Selection(labels.into_iter().map(str::to_owned).collect())
    }
}

/// All answers for one questionnaire instance, ordered by question identifier.
///
/// Inserting an identifier twice keeps the last value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answers(BTreeMap<QuestionId, AnswerValue>);

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the answer for `question`.
    pub fn insert(&mut self, question: QuestionId, value: impl Into<AnswerValue>) {
        self.0.insert(question, value.into());
    }

    pub fn get(&self, question: QuestionId) -> Option<&AnswerValue> {
        self.0.get(&question)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate answers in ascending question order.
    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, &AnswerValue)> {
        self.0.iter().map(|(id, value)| (*id, value))
    }

    /// Build answers from a JSON object such as `{"1": "Severe", "3": 9}`.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::InvalidAnswers`] if the value is not an object or a key is not a
    /// positive integer. Values never cause an error.
    pub fn from_json_value(value: serde_json::Value) -> TriageResult<Self> {
        let serde_json::Value::Object(entries) = value else {
            return Err(TriageError::InvalidAnswers(
                "answers must be a JSON object keyed by question identifier".into(),
            ));
        };

        let mut answers = Self::new();
        for (key, raw) in entries {
            let question = parse_question_id(&key)?;
            answers.insert(question, AnswerValue::from_json(raw));
        }
        Ok(answers)
    }

    /// Parse answers from JSON text. See [`Answers::from_json_value`].
    pub fn from_json_str(text: &str) -> TriageResult<Self> {
        let value: serde_json::Value = serde_json::from_str(text)
            .map_err(|e| TriageError::InvalidAnswers(format!("malformed JSON: {e}")))?;
        Self::from_json_value(value)
    }
}

impl FromIterator<(QuestionId, AnswerValue)> for Answers {
    fn from_iter<I: IntoIterator<Item = (QuestionId, AnswerValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

fn parse_question_id(key: &str) -> TriageResult<QuestionId> {
    match key.trim().parse::<QuestionId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(TriageError::InvalidAnswers(format!(
            "question identifier must be a positive integer, got {key:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_json_classifies_each_shape() {
        assert_eq!(
            AnswerValue::from_json(json!("Severe")),
            AnswerValue::Text("Severe".into())
        );
        assert_eq!(AnswerValue::from_json(json!(7)), AnswerValue::from(7));
        assert_eq!(AnswerValue::from_json(json!(8.5)).rating(), Some(8.5));
        assert_eq!(
            AnswerValue::from_json(json!(["Wheezing", "Cough"])),
            AnswerValue::Selection(vec!["Wheezing".into(), "Cough".into()])
        );
        assert_eq!(
            AnswerValue::from_json(json!(true)),
            AnswerValue::Unrecognised(json!(true))
        );
        assert_eq!(
            AnswerValue::from_json(json!([1, 2])),
            AnswerValue::Unrecognised(json!([1, 2]))
        );
    }

    #[test]
    fn presence_follows_answered_semantics() {
        assert!(AnswerValue::from("Mild").is_present());
        assert!(!AnswerValue::from("").is_present());
        assert!(AnswerValue::from("  ").is_present());
        assert!(AnswerValue::from(3).is_present());
        assert!(!AnswerValue::from(0).is_present());
        assert!(!AnswerValue::from(f64::NAN).is_present());
        assert!(AnswerValue::Selection(vec![]).is_present());
        assert!(!AnswerValue::Unrecognised(json!(null)).is_present());
        assert!(AnswerValue::Unrecognised(json!({"a": 1})).is_present());
    }

    #[test]
    fn from_json_value_orders_by_question_id() {
        let answers =
            Answers::from_json_value(json!({"12": "Frequently", "3": 9, "1": "More than 6 months"}))
                .expect("valid answers");
        let ids: Vec<QuestionId> = answers.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![1, 3, 12]);
    }

    #[test]
    fn from_json_value_rejects_non_numeric_keys() {
        let err = Answers::from_json_value(json!({"abc": "No"})).expect_err("should reject key");
        assert!(matches!(err, TriageError::InvalidAnswers(msg) if msg.contains("positive integer")));
    }

    #[test]
    fn from_json_value_rejects_zero_key() {
        let err = Answers::from_json_value(json!({"0": "No"})).expect_err("should reject zero");
        assert!(matches!(err, TriageError::InvalidAnswers(_)));
    }

    #[test]
    fn from_json_value_rejects_non_object() {
        let err = Answers::from_json_value(json!(["No"])).expect_err("should reject array");
        assert!(matches!(err, TriageError::InvalidAnswers(msg) if msg.contains("JSON object")));
    }

    #[test]
    fn from_json_str_reports_malformed_json() {
        let err = Answers::from_json_str("{\"1\": ").expect_err("should reject");
        assert!(matches!(err, TriageError::InvalidAnswers(msg) if msg.contains("malformed JSON")));
    }

    #[test]
    fn serialized_answers_keep_number_form() {
        let answers = Answers::from_json_value(json!({"3": 9, "1": "Mild", "7": 8.5}))
            .expect("valid answers");
        let value = serde_json::to_value(&answers).expect("serialize");
        assert_eq!(value, json!({"1": "Mild", "3": 9, "7": 8.5}));
        assert_eq!(value["3"].as_u64(), Some(9));

        let back: Answers = serde_json::from_value(value).expect("deserialize");
        assert_eq!(back, answers);
    }

    #[test]
    fn insert_keeps_last_value() {
        let mut answers = Answers::new();
        answers.insert(5, "Mild");
        answers.insert(5, "Severe");
        assert_eq!(answers.len(), 1);
        assert_eq!(answers.get(5), Some(&AnswerValue::from("Severe")));
    }
}
