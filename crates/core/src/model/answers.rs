use std::collections::BTreeMap;
use thiserror::Error;

use crate::model::ids::OptionKey;
use crate::model::session::QuizSession;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnswerError {
    #[error("question position {position} is out of range (session has {total} questions)")]
    PositionOutOfRange { position: usize, total: usize },

    #[error("option `{key}` does not belong to question {position}")]
    UnknownOption { position: usize, key: OptionKey },
}

/// The user's selections for one session, keyed by position in the shuffled order.
///
/// Holds at most one choice per position. There is no way to clear it; a new session
/// starts with a new, empty set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    choices: BTreeMap<usize, OptionKey>,
}

impl AnswerSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `key` as the answer for `position`, replacing any earlier choice.
    ///
    /// Returns the previous choice, if there was one.
    ///
    /// # Errors
    ///
    /// Returns `AnswerError::PositionOutOfRange` if the session has no such position and
    /// `AnswerError::UnknownOption` if `key` is not one of that question's options.
    pub fn record(
        &mut self,
        session: &QuizSession,
        position: usize,
        key: OptionKey,
    ) -> Result<Option<OptionKey>, AnswerError> {
        let question = session
            .question(position)
            .ok_or(AnswerError::PositionOutOfRange {
                position,
                total: session.len(),
            })?;
        if !question.question().has_option(&key) {
            return Err(AnswerError::UnknownOption { position, key });
        }
        Ok(self.choices.insert(position, key))
    }

    #[must_use]
    pub fn get(&self, position: usize) -> Option<&OptionKey> {
        self.choices.get(&position)
    }

    /// Number of positions with a recorded choice.
    #[must_use]
    pub fn len(&self) -> usize {
        self.choices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }
}
