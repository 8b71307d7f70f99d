use rand::Rng;
use std::sync::Arc;

use quiz_core::grade;
use quiz_core::model::{AnswerSet, OptionKey, QuestionBank, QuizResult, QuizSession};

use super::progress::AttemptProgress;
use crate::error::QuizError;

/// One attempt at a bank: the shuffled session, the answers so far, and the result once
/// submitted.
///
/// Answers can be changed freely until `submit`; afterwards the attempt is read-only
/// until `restart` draws a fresh session from the same bank.
#[derive(Debug, Clone)]
pub struct QuizAttempt {
    bank: Arc<QuestionBank>,
    session: QuizSession,
    answers: AnswerSet,
    result: Option<QuizResult>,
}

impl QuizAttempt {
    #[must_use]
    pub fn start(bank: Arc<QuestionBank>) -> Self {
        Self::start_with_rng(bank, &mut rand::rng())
    }

    #[must_use]
    pub fn start_with_rng<R: Rng + ?Sized>(bank: Arc<QuestionBank>, rng: &mut R) -> Self {
        let session = QuizSession::build(&bank, rng);
        Self {
            bank,
            session,
            answers: AnswerSet::new(),
            result: None,
        }
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    #[must_use]
    pub fn selected(&self, position: usize) -> Option<&OptionKey> {
        self.answers.get(position)
    }

    #[must_use]
    pub fn result(&self) -> Option<&QuizResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.result.is_some()
    }

    #[must_use]
    pub fn progress(&self) -> AttemptProgress {
        AttemptProgress {
            total: self.session.len(),
            answered: self.answers.len(),
            submitted: self.is_submitted(),
        }
    }

    /// Select `key` for the question at `position`, replacing any earlier choice.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::AlreadySubmitted` after submission and `QuizError::Answer`
    /// for a position or key the session does not know.
    pub fn record(&mut self, position: usize, key: OptionKey) -> Result<(), QuizError> {
        if self.is_submitted() {
            return Err(QuizError::AlreadySubmitted);
        }
        self.answers.record(&self.session, position, key)?;
        Ok(())
    }

    /// Grade the attempt. The first result is kept; later calls return it unchanged.
    pub fn submit(&mut self) -> &QuizResult {
        let session = &self.session;
        let answers = &self.answers;
        self.result.get_or_insert_with(|| grade(session, answers))
    }

    /// Discard answers and result and reshuffle the same bank.
    pub fn restart(&mut self) {
        self.restart_with_rng(&mut rand::rng());
    }

    pub fn restart_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        *self = Self::start_with_rng(Arc::clone(&self.bank), rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{AnswerError, BankName, Question};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn key(raw: &str) -> OptionKey {
        OptionKey::new(raw).unwrap()
    }

    fn bank() -> Arc<QuestionBank> {
        let questions = (0..4)
            .map(|i| {
                Question::new(
                    format!("Q{i}"),
                    [(key("a"), format!("a{i}")), (key("b"), format!("b{i}"))],
                    key(if i % 2 == 0 { "a" } else { "b" }),
                )
                .unwrap()
            })
            .collect();
        Arc::new(QuestionBank::new(BankName::new("paper1").unwrap(), questions).unwrap())
    }

    #[test]
    fn record_is_frozen_after_submit() {
        let mut attempt = QuizAttempt::start_with_rng(bank(), &mut StdRng::seed_from_u64(1));
        attempt.record(0, key("a")).unwrap();
        attempt.submit();

        assert_eq!(attempt.record(1, key("a")), Err(QuizError::AlreadySubmitted));
        assert_eq!(attempt.answers().len(), 1);
    }

    #[test]
    fn submit_keeps_the_first_result() {
        let mut attempt = QuizAttempt::start_with_rng(bank(), &mut StdRng::seed_from_u64(2));
        let correct = attempt.session().questions()[0].correct_answer().clone();
        attempt.record(0, correct).unwrap();

        let first = attempt.submit().clone();
        let second = attempt.submit().clone();
        assert_eq!(first, second);
        assert_eq!(first.correct(), 1);
        assert_eq!(first.incorrect(), 3);
        assert!(attempt.progress().submitted);
    }

    #[test]
    fn invalid_answers_are_rejected() {
        let mut attempt = QuizAttempt::start(bank());
        assert!(matches!(
            attempt.record(9, key("a")),
            Err(QuizError::Answer(AnswerError::PositionOutOfRange { .. }))
        ));
        assert!(matches!(
            attempt.record(0, key("q")),
            Err(QuizError::Answer(AnswerError::UnknownOption { .. }))
        ));
    }

    #[test]
    fn restart_discards_answers_and_result() {
        let mut attempt = QuizAttempt::start_with_rng(bank(), &mut StdRng::seed_from_u64(3));
        attempt.record(0, key("a")).unwrap();
        attempt.record(1, key("b")).unwrap();
        attempt.submit();

        attempt.restart_with_rng(&mut StdRng::seed_from_u64(4));

        assert!(attempt.answers().is_empty());
        assert!(attempt.result().is_none());
        assert_eq!(attempt.session().len(), 4);
        assert_eq!(
            attempt.progress(),
            AttemptProgress {
                total: 4,
                answered: 0,
                submitted: false
            }
        );
        attempt.record(0, key("b")).unwrap();
    }
}
