//! Per-category severity breakdown.

use crate::answer::{AnswerValue, Answers};
use crate::category::CategoryDefinition;
use crate::scoring::{is_high_rating, score_answer, SeverityTier};
use serde::{Deserialize, Serialize};

/// Severity of one symptom category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SymptomAnalysis {
    pub category: String,
    /// Average answer score in the category × 10, in `0..=100`.
    pub severity: u8,
    pub weight: f64,
    pub risk_factors: Vec<String>,
}

/// Analyse each category in order. Always yields one entry per category.
pub fn analyze_categories(
    categories: &[CategoryDefinition],
    answers: &Answers,
) -> Vec<SymptomAnalysis> {
    categories
        .iter()
        .map(|category| analyze_category(category, answers))
        .collect()
}

fn analyze_category(category: &CategoryDefinition, answers: &Answers) -> SymptomAnalysis {
    let name = category.name.as_str();
    let lowercase = name.to_lowercase();
    let mut total = 0.0;
    let mut answered = 0usize;
    let mut risk_factors = Vec::new();

    let present = answers
        .iter()
        .filter(|(question, value)| category.contains(*question) && value.is_present());

    for (_, value) in present {
        let score = score_answer(value);
        answered += 1;
        total += score;

        match value {
            AnswerValue::Text(text) if SeverityTier::of_text(text) == SeverityTier::Severe => {
                risk_factors.push(format!("Severe {lowercase}"));
            }
            AnswerValue::Scale(_) if is_high_rating(score) => {
                risk_factors.push(format!("High {lowercase} severity"));
            }
            _ => {}
        }
    }

    let severity = if answered > 0 {
        let average = total / answered as f64;
        (average * 10.0).clamp(0.0, 100.0).round() as u8
    } else {
        0
    };

    SymptomAnalysis {
        category: name.to_owned(),
        severity,
        weight: category.weight,
        risk_factors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::builtin_categories;

    fn find<'a>(analysis: &'a [SymptomAnalysis], name: &str) -> &'a SymptomAnalysis {
        analysis
            .iter()
            .find(|a| a.category == name)
            .expect("category present")
    }

    #[test]
    fn empty_answers_yield_six_zero_categories() {
        let analysis = analyze_categories(&builtin_categories(), &Answers::new());
        assert_eq!(analysis.len(), 6);
        assert!(analysis.iter().all(|a| a.severity == 0 && a.risk_factors.is_empty()));
        assert_eq!(analysis[0].weight, 2.5);
    }

    #[test]
    fn severity_is_average_times_ten() {
        let mut answers = Answers::new();
        answers.insert(2, "Severe");
        answers.insert(5, "Mild");
        answers.insert(11, 8);
        let analysis = analyze_categories(&builtin_categories(), &answers);
        let respiratory = find(&analysis, "Respiratory");
        // (10 + 3 + 8) / 3 * 10 = 70
        assert_eq!(respiratory.severity, 70);
        assert_eq!(
            respiratory.risk_factors,
            vec!["Severe respiratory", "High respiratory severity"]
        );
    }

    #[test]
    fn unanswered_questions_are_excluded() {
        let mut answers = Answers::new();
        answers.insert(9, "Moderate");
        answers.insert(26, "");
        let analysis = analyze_categories(&builtin_categories(), &answers);
        assert_eq!(find(&analysis, "Gastrointestinal").severity, 60);
    }

    #[test]
    fn whitespace_text_counts_as_answered() {
        let mut answers = Answers::new();
        answers.insert(9, "Moderate");
        answers.insert(26, "  ");
        let analysis = analyze_categories(&builtin_categories(), &answers);
        // (6 + 4) / 2 * 10
        assert_eq!(find(&analysis, "Gastrointestinal").severity, 50);
    }

    #[test]
    fn answers_outside_categories_do_not_count() {
        let mut answers = Answers::new();
        answers.insert(4, "Severe");
        answers.insert(31, 10);
        let analysis = analyze_categories(&builtin_categories(), &answers);
        assert!(analysis.iter().all(|a| a.severity == 0));
    }

    #[test]
    fn severity_clamps_out_of_range_ratings() {
        let mut answers = Answers::new();
        answers.insert(13, 40);
        let analysis = analyze_categories(&builtin_categories(), &answers);
        assert_eq!(find(&analysis, "Sensory").severity, 100);
    }

    #[test]
    fn overlapping_membership_counts_in_each_category() {
        let categories = vec![
            CategoryDefinition {
                name: triage_types::NonEmptyText::new("A").expect("name"),
                questions: vec![1, 2],
                weight: 1.0,
            },
            CategoryDefinition {
                name: triage_types::NonEmptyText::new("B").expect("name"),
                questions: vec![2],
                weight: 1.0,
            },
        ];
        let mut answers = Answers::new();
        answers.insert(2, "Severe");
        let analysis = analyze_categories(&categories, &answers);
        assert_eq!(analysis[0].severity, 100);
        assert_eq!(analysis[1].severity, 100);
        assert_eq!(analysis[1].risk_factors, vec!["Severe b"]);
    }

    #[test]
    fn multi_select_uses_shared_scoring() {
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
        let analysis = analyze_categories(&builtin_categories(), &answers);
        assert_eq!(find(&analysis, "Respiratory").severity, 80);
    }
}
