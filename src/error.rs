use crate::models::profile::ProfileFieldError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Invalid store profile: {}", describe_field_errors(.0))]
    Validation(Vec<ProfileFieldError>),

    #[error("Duplicate milestone id in seed: {0}")]
    DuplicateMilestone(String),

    #[error("Product not found: {0}")]
    ProductNotFound(String),

    #[error("Store state lock error")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn describe_field_errors(errors: &[ProfileFieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}
