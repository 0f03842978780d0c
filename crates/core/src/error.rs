#[derive(Debug, thiserror::Error)]
pub enum TriageError {
    #[error("invalid answers: {0}")]
    InvalidAnswers(String),
    #[error("failed to read config file: {0}")]
    ConfigRead(std::io::Error),
    #[error("failed to parse config: {0}")]
    ConfigParse(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("invalid text: {0}")]
    Text(#[from] triage_types::TextError),
    #[error("submission not found: {0}")]
    SubmissionNotFound(uuid::Uuid),
    #[error("submission store lock poisoned")]
    StorePoisoned,
}

pub type TriageResult<T> = std::result::Result<T, TriageError>;
