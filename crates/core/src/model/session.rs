use rand::Rng;

use crate::model::bank::QuestionBank;
use crate::model::ids::{BankName, OptionKey};
use crate::model::question::Question;
use crate::shuffle::{shuffle_in_place, shuffled};

/// A question as presented in one session, with its own option display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionQuestion {
    question: Question,
    option_order: Vec<OptionKey>,
}

impl SessionQuestion {
    #[must_use]
    pub fn question(&self) -> &Question {
        &self.question
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        self.question.prompt()
    }

    #[must_use]
    pub fn correct_answer(&self) -> &OptionKey {
        self.question.correct_answer()
    }

    /// Option keys in display order.
    #[must_use]
    pub fn option_order(&self) -> &[OptionKey] {
        &self.option_order
    }

    /// `(key, text)` pairs in display order.
    pub fn ordered_options(&self) -> impl Iterator<Item = (&OptionKey, &str)> {
        self.option_order.iter().filter_map(|key| {
            self.question
                .option_text(key)
                .map(|text| (key, text))
        })
    }
}

/// One randomized presentation of a bank for a single attempt.
///
/// The question order and every question's option order are drawn once at construction
/// and stay fixed for the lifetime of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    bank: BankName,
    questions: Vec<SessionQuestion>,
}

impl QuizSession {
    /// Build a session using the thread-local RNG.
    #[must_use]
    pub fn new(bank: &QuestionBank) -> Self {
        Self::build(bank, &mut rand::rng())
    }

    /// Build a session with an explicit RNG.
    ///
    /// Questions are shuffled first, then each question's options independently.
    /// The bank itself is only read.
    #[must_use]
    pub fn build<R: Rng + ?Sized>(bank: &QuestionBank, rng: &mut R) -> Self {
        let mut order: Vec<&Question> = bank.questions().iter().collect();
        shuffle_in_place(&mut order, rng);

        let questions = order
            .into_iter()
            .map(|question| {
                let keys: Vec<OptionKey> = question.option_keys().cloned().collect();
                SessionQuestion {
                    question: question.clone(),
                    option_order: shuffled(&keys, &mut *rng),
                }
            })
            .collect();

        Self {
            bank: bank.name().clone(),
            questions,
        }
    }

    #[must_use]
    pub fn bank(&self) -> &BankName {
        &self.bank
    }

    #[must_use]
    pub fn questions(&self) -> &[SessionQuestion] {
        &self.questions
    }

    #[must_use]
    pub fn question(&self, position: usize) -> Option<&SessionQuestion> {
        self.questions.get(position)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
