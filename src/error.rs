//! Error types shared across screens.

use thiserror::Error;

/// Errors from the assessment flow controller.
#[derive(Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum AssessmentError {
    #[error("question {0} is not part of this assessment")]
    UnknownQuestion(u32),
    #[error("option {index} does not exist for question {question_id}")]
    UnknownOption { question_id: u32, index: usize },
}

/// Errors from the resume intake.
#[derive(Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum IntakeError {
    #[error("unsupported file type `{0}`")]
    UnsupportedFormat(String),
    #[error("no file selected")]
    NoFile,
    #[error("a resume is already being processed")]
    Busy,
    #[error("resume analysis failed: {0}")]
    Extraction(String),
}

/// Errors from the session key/value store.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StoreError {
    #[error("session storage is not available")]
    Unavailable,
    #[error("storage backend rejected the operation: {0}")]
    Backend(String),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
