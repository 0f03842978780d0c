//! Questionnaire submission storage.
//!
//! Submitted answers are handed to a [`SubmissionStore`]. The engine itself never touches the
//! store; services record a submission alongside evaluating it. Hosted persistence would
//! implement the trait; [`InMemorySubmissionStore`] backs the bundled REST service and tests.

use crate::answer::Answers;
use crate::{TriageError, TriageResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;
use uuid::Uuid;

/// A stored questionnaire submission.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: Uuid,
    pub user_id: Option<String>,
    pub condition: String,
    pub answers: Answers,
    pub submitted_at: DateTime<Utc>,
}

/// Storage for raw questionnaire answers keyed by user and condition.
pub trait SubmissionStore: Send + Sync {
    /// Persist a submission and return the stored record.
    fn record(
        &self,
        user_id: Option<String>,
        condition: &str,
        answers: &Answers,
    ) -> TriageResult<Submission>;

    /// Fetch a submission by id.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::SubmissionNotFound`] if no submission has that id.
    fn get(&self, id: Uuid) -> TriageResult<Submission>;

    /// All submissions for a user, oldest first.
    fn list_for_user(&self, user_id: &str) -> TriageResult<Vec<Submission>>;
}

/// Process-local [`SubmissionStore`].
#[derive(Debug, Default)]
pub struct InMemorySubmissionStore {
    inner: RwLock<Recorded>,
}

#[derive(Debug, Default)]
struct Recorded {
    by_id: HashMap<Uuid, Submission>,
    /// Ids in recording order.
    order: Vec<Uuid>,
}

impl InMemorySubmissionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SubmissionStore for InMemorySubmissionStore {
    fn record(
        &self,
        user_id: Option<String>,
        condition: &str,
        answers: &Answers,
    ) -> TriageResult<Submission> {
        let submission = Submission {
            id: Uuid::new_v4(),
            user_id: user_id.filter(|u| !u.trim().is_empty()),
            condition: condition.to_owned(),
            answers: answers.clone(),
            submitted_at: Utc::now(),
        };

        {
            let mut recorded = self.inner.write().map_err(|_| TriageError::StorePoisoned)?;
            recorded.order.push(submission.id);
            recorded.by_id.insert(submission.id, submission.clone());
        }

        tracing::info!(id = %submission.id, condition, "recorded submission");
        Ok(submission)
    }

    fn get(&self, id: Uuid) -> TriageResult<Submission> {
        self.inner
            .read()
            .map_err(|_| TriageError::StorePoisoned)?
            .by_id
            .get(&id)
            .cloned()
            .ok_or(TriageError::SubmissionNotFound(id))
    }

    fn list_for_user(&self, user_id: &str) -> TriageResult<Vec<Submission>> {
        let recorded = self.inner.read().map_err(|_| TriageError::StorePoisoned)?;
        let found = recorded
            .order
            .iter()
            .filter_map(|id| recorded.by_id.get(id))
            .filter(|s| s.user_id.as_deref() == Some(user_id))
            .cloned()
            .collect();
        Ok(found)
    }
}
