use thiserror::Error;

#[derive(Debug, Error)]
pub enum HomeplanError {
    #[error("task {0} not found")]
    TaskNotFound(String),

    #[error("task rejected: {0}")]
    TaskRejected(&'static str),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl HomeplanError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::TaskNotFound(_) => "task_not_found",
            Self::TaskRejected(_) => "task_rejected",
            Self::Io(_) => "io_error",
            Self::Json(_) => "json_error",
        }
    }
}

pub type Result<T> = std::result::Result<T, HomeplanError>;
