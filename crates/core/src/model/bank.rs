use thiserror::Error;

use crate::model::ids::BankName;
use crate::model::question::Question;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BankError {
    #[error("question bank `{name}` has no questions")]
    Empty { name: BankName },
}

/// A named, ordered collection of questions. Source of truth for sessions; never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    name: BankName,
    questions: Vec<Question>,
}

impl QuestionBank {
    /// # Errors
    ///
    /// Returns `BankError::Empty` if `questions` is empty, so that a missing or blank bank
    /// never turns into a zero-question quiz.
    pub fn new(name: BankName, questions: Vec<Question>) -> Result<Self, BankError> {
        if questions.is_empty() {
            return Err(BankError::Empty { name });
        }
        Ok(Self { name, questions })
    }

    #[must_use]
    pub fn name(&self) -> &BankName {
        &self.name
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Number of questions. Always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
