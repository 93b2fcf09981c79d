use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("malformed date '{0}' (expected YYYY-MM-DD)")]
    MalformedDate(String),

    #[error("task '{0}' is already pending")]
    DuplicateTask(String),

    #[error("task '{0}' not found")]
    TaskNotFound(String),

    #[error("snapshot '{0}' is unreadable: {1}")]
    PersistenceUnreadable(String, String),

    #[error("locked by another process: {0}")]
    Locked(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TaskError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "invalid_input",
            Self::MalformedDate(_) => "malformed_date",
            Self::DuplicateTask(_) => "duplicate_task",
            Self::TaskNotFound(_) => "task_not_found",
            Self::PersistenceUnreadable(_, _) => "persistence_unreadable",
            Self::Locked(_) => "locked",
            Self::Io(_) => "io_error",
            Self::Json(_) => "json_error",
        }
    }
}

pub type Result<T> = std::result::Result<T, TaskError>;
