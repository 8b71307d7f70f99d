//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::{AnswerError, BankError, BankName, QuestionError};

/// Errors emitted while loading a question bank from any source.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BankLoadError {
    #[error("question bank `{0}` not found")]
    NotFound(BankName),
    #[error(transparent)]
    Bank(#[from] BankError),
    #[error("question bank `{bank}` is not valid JSON: {message}")]
    Parse { bank: BankName, message: String },
    #[error("question {index} in bank `{bank}` is malformed: {source}")]
    Malformed {
        bank: BankName,
        index: usize,
        #[source]
        source: QuestionError,
    },
    #[error("failed to read question bank `{bank}`: {source}")]
    Io {
        bank: BankName,
        #[source]
        source: std::io::Error,
    },
    #[error("request for question bank `{bank}` failed with status {status}")]
    HttpStatus {
        bank: BankName,
        status: reqwest::StatusCode,
    },
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl BankLoadError {
    /// True when the bank simply has nothing to show (absent or empty), as opposed to a
    /// failure while fetching or parsing it.
    #[must_use]
    pub fn is_no_data(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::Bank(BankError::Empty { .. }))
    }
}

/// Errors emitted by quiz attempts and the bank board.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("no question banks configured")]
    NoBanks,
    #[error("unknown question bank `{0}`")]
    UnknownBank(BankName),
    #[error("no quiz is ready for the active bank")]
    NotReady,
    #[error("quiz already submitted")]
    AlreadySubmitted,
    #[error(transparent)]
    Answer(#[from] AnswerError),
}
