use crate::model::ids::OptionKey;

/// Grading outcome for one question position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionOutcome {
    pub position: usize,
    pub selected: Option<OptionKey>,
    pub correct_answer: OptionKey,
    pub is_correct: bool,
}

impl QuestionOutcome {
    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.selected.is_some()
    }
}

/// Score summary for a submitted session.
///
/// `correct + incorrect == total` always holds; unanswered questions count as incorrect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResult {
    total: usize,
    correct: usize,
    incorrect: usize,
    outcomes: Vec<QuestionOutcome>,
}

impl QuizResult {
    #[must_use]
    pub(crate) fn from_outcomes(outcomes: Vec<QuestionOutcome>) -> Self {
        let total = outcomes.len();
        let correct = outcomes.iter().filter(|o| o.is_correct).count();
        Self {
            total,
            correct,
            incorrect: total - correct,
            outcomes,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn correct(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn incorrect(&self) -> usize {
        self.incorrect
    }

    /// Questions with no recorded choice. Already included in `incorrect`.
    #[must_use]
    pub fn unanswered(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.is_answered()).count()
    }

    /// Share of correct answers as a whole percentage, rounded down.
    #[must_use]
    pub fn percent(&self) -> usize {
        if self.total == 0 {
            return 0;
        }
        self.correct * 100 / self.total
    }

    #[must_use]
    pub fn outcomes(&self) -> &[QuestionOutcome] {
        &self.outcomes
    }

    #[must_use]
    pub fn outcome(&self, position: usize) -> Option<&QuestionOutcome> {
        self.outcomes.get(position)
    }
}
