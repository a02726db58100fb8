use thiserror::Error;

use crate::form::FormErrors;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("user '{0}' not found")]
    UserNotFound(u64),

    #[error("invalid gender '{0}'")]
    InvalidGender(String),

    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("form validation failed: {0}")]
    Validation(FormErrors),

    #[error("invalid session command on line {line}: {message}")]
    Session { line: usize, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, RosterError>;
