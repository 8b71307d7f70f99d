use serde::Deserialize;
use std::collections::BTreeMap;
use thiserror::Error;

use crate::model::ids::OptionKey;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("question needs at least two options, got {count}")]
    TooFewOptions { count: usize },

    #[error("option `{key}` has empty text")]
    EmptyOptionText { key: OptionKey },

    #[error("correct answer `{key}` is not one of the options")]
    MissingCorrectAnswer { key: OptionKey },
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A single multiple-choice question. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    options: BTreeMap<OptionKey, String>,
    correct_answer: OptionKey,
}

impl Question {
    /// Build a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the prompt is blank, fewer than two options are given,
    /// an option has blank text, or `correct_answer` is not one of the option keys.
    pub fn new(
        prompt: impl Into<String>,
        options: impl IntoIterator<Item = (OptionKey, String)>,
        correct_answer: OptionKey,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }

        let options: BTreeMap<OptionKey, String> = options.into_iter().collect();
        if options.len() < 2 {
            return Err(QuestionError::TooFewOptions {
                count: options.len(),
            });
        }
        if let Some((key, _)) = options.iter().find(|(_, text)| text.trim().is_empty()) {
            return Err(QuestionError::EmptyOptionText { key: key.clone() });
        }
        if !options.contains_key(&correct_answer) {
            return Err(QuestionError::MissingCorrectAnswer {
                key: correct_answer,
            });
        }

        Ok(Self {
            prompt,
            options,
            correct_answer,
        })
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Option keys in their authored (sorted) order.
    pub fn option_keys(&self) -> impl Iterator<Item = &OptionKey> {
        self.options.keys()
    }

    #[must_use]
    pub fn option_text(&self, key: &OptionKey) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn has_option(&self, key: &OptionKey) -> bool {
        self.options.contains_key(key)
    }

    #[must_use]
    pub fn correct_answer(&self) -> &OptionKey {
        &self.correct_answer
    }

    #[must_use]
    pub fn is_correct(&self, key: &OptionKey) -> bool {
        self.correct_answer == *key
    }
}

//
// ─── RAW RECORD ────────────────────────────────────────────────────────────────
//

/// Question as authored in a bank file, before validation.
///
/// The prompt is read from `question`, with `prompt` accepted as an alias.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuestionRecord {
    #[serde(alias = "prompt")]
    pub question: String,
    pub options: BTreeMap<OptionKey, String>,
    pub correct_answer: OptionKey,
}

impl TryFrom<QuestionRecord> for Question {
    type Error = QuestionError;

    fn try_from(record: QuestionRecord) -> Result<Self, Self::Error> {
        Question::new(record.question, record.options, record.correct_answer)
    }
}
