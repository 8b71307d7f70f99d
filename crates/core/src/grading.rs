use crate::model::{AnswerSet, QuestionOutcome, QuizResult, QuizSession};

/// Score `answers` against the session's answer key in one pass.
///
/// A position is correct iff its recorded key equals that question's correct key.
/// Missing entries are incorrect; there is no partial credit.
#[must_use]
pub fn grade(session: &QuizSession, answers: &AnswerSet) -> QuizResult {
    let outcomes = session
        .questions()
        .iter()
        .enumerate()
        .map(|(position, question)| {
            let selected = answers.get(position).cloned();
            let is_correct = selected
                .as_ref()
                .is_some_and(|key| question.question().is_correct(key));
            QuestionOutcome {
                position,
                selected,
                correct_answer: question.correct_answer().clone(),
                is_correct,
            }
        })
        .collect();

    QuizResult::from_outcomes(outcomes)
}
