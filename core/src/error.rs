use thiserror::Error;

#[derive(Error, Debug)]
pub enum LabError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid {field}: '{value}'")]
    InvalidInput { field: &'static str, value: String },

    #[error("Missing input line for {field}")]
    MissingInput { field: &'static str },

    #[error("Process exited with code {code:?}: {stderr}")]
    ProcessFailed { code: Option<i32>, stderr: String },

    #[error("Process timed out after {secs}s")]
    Timeout { secs: u64 },

    #[error("Unknown lab '{name}'")]
    UnknownLab { name: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type LabResult<T> = Result<T, LabError>;
