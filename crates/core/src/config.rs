//! Engine configuration.
//!
//! Condition profiles, symptom categories and the confidence normalisation constant are resolved
//! once at process startup and then passed into the engine by reference. Nothing in the engine
//! reads process-wide state, so an evaluation depends only on its inputs and this value.

use crate::category::{builtin_categories, CategoryDefinition};
use crate::constants::DEFAULT_EXPECTED_QUESTION_COUNT;
use crate::profile::{builtin_profiles, ConditionProfile, FALLBACK_PROFILE};
use crate::{TriageError, TriageResult};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use triage_types::ConditionSlug;

/// Engine configuration resolved at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    profiles: BTreeMap<ConditionSlug, ConditionProfile>,
    categories: Vec<CategoryDefinition>,
    expected_question_count: u32,
}

impl EngineConfig {
    /// Create a new `EngineConfig`.
    ///
    /// Profiles whose declared `question_count` differs from `expected_question_count` are
    /// reported with a warning; confidence keeps using `expected_question_count`.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::InvalidConfig`] if `expected_question_count` is zero or a category
    /// weight is negative or not finite.
    pub fn new(
        profiles: BTreeMap<ConditionSlug, ConditionProfile>,
        categories: Vec<CategoryDefinition>,
        expected_question_count: u32,
    ) -> TriageResult<Self> {
        if expected_question_count == 0 {
            return Err(TriageError::InvalidConfig(
                "expected_question_count must be greater than zero".into(),
            ));
        }

        if let Some(category) = categories
            .iter()
            .find(|c| !c.weight.is_finite() || c.weight < 0.0)
        {
            return Err(TriageError::InvalidConfig(format!(
                "category {:?} has invalid weight {}",
                category.name.as_str(),
                category.weight
            )));
        }

        for (slug, profile) in &profiles {
            if let Some(count) = profile.question_count {
                if count != expected_question_count {
                    tracing::warn!(
                        condition = %slug,
                        question_count = count,
                        expected_question_count,
                        "questionnaire length differs from the confidence normalisation constant"
                    );
                }
            }
        }

        Ok(Self {
            profiles,
            categories,
            expected_question_count,
        })
    }

    /// The configuration shipped with the engine.
    pub fn builtin() -> TriageResult<Self> {
        Self::new(
            builtin_profiles()?,
            builtin_categories(),
            DEFAULT_EXPECTED_QUESTION_COUNT,
        )
    }

    /// Parse configuration from YAML text.
    ///
    /// Sections left out of the document keep their built-in values. Schema errors report the
    /// path to the failing field.
    ///
    /// ```yaml
    /// expected_question_count: 50
    /// conditions:
    ///   common-cold:
    ///     critical: [4, 11, 25]
    ///     moderate: [1, 2, 5, 8]
    ///     question_count: 50
    /// categories:
    ///   - name: Respiratory
    ///     questions: [2, 5, 11, 24, 25]
    ///     weight: 3.0
    /// ```
    pub fn from_yaml_str(yaml_text: &str) -> TriageResult<Self> {
        let deserializer = serde_yaml::Deserializer::from_str(yaml_text);

        let file = match serde_path_to_error::deserialize::<_, ConfigFile>(deserializer) {
            Ok(parsed) => parsed,
            Err(err) => {
                let path = err.path().to_string();
                let source = err.into_inner();
                let path = if path.is_empty() || path == "." {
                    "<root>"
                } else {
                    path.as_str()
                };
                return Err(TriageError::ConfigParse(format!(
                    "config schema mismatch at {path}: {source}"
                )));
            }
        };

        let profiles = match file.conditions {
            Some(conditions) => conditions,
            None => builtin_profiles()?,
        };
        let categories = file.categories.unwrap_or_else(builtin_categories);
        let expected = file
            .expected_question_count
            .unwrap_or(DEFAULT_EXPECTED_QUESTION_COUNT);

        Self::new(profiles, categories, expected)
    }

    /// Read and parse a YAML configuration file.
    pub fn from_yaml_file(path: &Path) -> TriageResult<Self> {
        let text = std::fs::read_to_string(path).map_err(TriageError::ConfigRead)?;
        Self::from_yaml_str(&text)
    }

    /// Resolve configuration without reading environment variables.
    ///
    /// If `override_file` is provided it is loaded, otherwise the built-in tables are used.
    pub fn load(override_file: Option<&Path>) -> TriageResult<Self> {
        match override_file {
            Some(path) => {
                tracing::info!("loading engine config from {}", path.display());
                Self::from_yaml_file(path)
            }
            None => Self::builtin(),
        }
    }

    /// Profile for `condition`, or the all-standard fallback when it is not configured.
    pub fn profile(&self, condition: &str) -> &ConditionProfile {
        self.profiles.get(condition).unwrap_or(&FALLBACK_PROFILE)
    }

    pub fn is_configured(&self, condition: &str) -> bool {
        self.profiles.contains_key(condition)
    }

    pub fn profiles(&self) -> impl Iterator<Item = (&ConditionSlug, &ConditionProfile)> {
        self.profiles.iter()
    }

    pub fn categories(&self) -> &[CategoryDefinition] {
        &self.categories
    }

    pub fn expected_question_count(&self) -> u32 {
        self.expected_question_count
    }
}

/// On-disk configuration document.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    expected_question_count: Option<u32>,
    #[serde(default)]
    conditions: Option<BTreeMap<ConditionSlug, ConditionProfile>>,
    #[serde(default)]
    categories: Option<Vec<CategoryDefinition>>,
}
