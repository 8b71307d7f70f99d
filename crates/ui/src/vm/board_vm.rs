use quiz_core::model::{BankName, OptionKey, QuizResult, SessionQuestion};
use services::{BoardState, QuizAttempt, QuizBoard};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    SelectBank(BankName),
    Choose { position: usize, key: OptionKey },
    Submit,
    Restart,
    Retry,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabVm {
    pub name: BankName,
    pub label: String,
    pub active: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionMark {
    Correct,
    IncorrectChoice,
}

impl OptionMark {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Correct => " (Correct)",
            Self::IncorrectChoice => " (Your Answer - Incorrect)",
        }
    }

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Correct => "correct-answer",
            Self::IncorrectChoice => "incorrect-answer",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub key: OptionKey,
    pub input_id: String,
    pub group: String,
    pub label: String,
    pub checked: bool,
    pub disabled: bool,
    pub mark: Option<OptionMark>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub position: usize,
    pub prompt: String,
    pub options: Vec<OptionVm>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResultSummaryVm {
    pub total: usize,
    pub correct: usize,
    pub incorrect: usize,
    pub unanswered: usize,
    pub percent: usize,
}

impl From<&QuizResult> for ResultSummaryVm {
    fn from(result: &QuizResult) -> Self {
        Self {
            total: result.total(),
            correct: result.correct(),
            incorrect: result.incorrect(),
            unanswered: result.unanswered(),
            percent: result.percent(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizVm {
    /// Changes whenever a new session starts, so the form is rebuilt from scratch.
    pub form_key: u64,
    pub progress_label: String,
    pub questions: Vec<QuestionVm>,
    pub submitted: bool,
    pub summary: Option<ResultSummaryVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BodyVm {
    NoBanks,
    Loading,
    Error { message: String },
    Empty { message: String },
    Quiz(QuizVm),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardVm {
    pub tabs: Vec<TabVm>,
    pub body: BodyVm,
}

/// Map board state to render data. `None` means no banks were configured.
#[must_use]
pub fn map_board(board: Option<&QuizBoard>) -> BoardVm {
    let Some(board) = board else {
        return BoardVm {
            tabs: Vec::new(),
            body: BodyVm::NoBanks,
        };
    };

    let tabs = board
        .banks()
        .iter()
        .map(|name| TabVm {
            name: name.clone(),
            label: name.label(),
            active: name == board.active(),
        })
        .collect();

    let body = match board.state() {
        BoardState::Loading => BodyVm::Loading,
        BoardState::Failed(err) if err.is_no_data() => BodyVm::Empty {
            message: format!("No questions found for {}.", board.active().label()),
        },
        BoardState::Failed(err) => BodyVm::Error {
            message: format!("Error loading quiz: {err}"),
        },
        BoardState::Ready(attempt) => BodyVm::Quiz(map_attempt(attempt, board.generation())),
    };

    BoardVm { tabs, body }
}

fn map_attempt(attempt: &QuizAttempt, form_key: u64) -> QuizVm {
    let result = attempt.result();
    let progress = attempt.progress();
    let questions = attempt
        .session()
        .questions()
        .iter()
        .enumerate()
        .map(|(position, question)| map_question(attempt, position, question, result))
        .collect();

    QuizVm {
        form_key,
        progress_label: format!("Answered {} of {}", progress.answered, progress.total),
        questions,
        submitted: attempt.is_submitted(),
        summary: result.map(ResultSummaryVm::from),
    }
}

fn map_question(
    attempt: &QuizAttempt,
    position: usize,
    question: &SessionQuestion,
    result: Option<&QuizResult>,
) -> QuestionVm {
    let selected = attempt.selected(position);
    let options = question
        .ordered_options()
        .map(|(key, text)| {
            let checked = selected == Some(key);
            let mark = result.and_then(|_| {
                if key == question.correct_answer() {
                    Some(OptionMark::Correct)
                } else if checked {
                    Some(OptionMark::IncorrectChoice)
                } else {
                    None
                }
            });
            OptionVm {
                key: key.clone(),
                input_id: format!("q{position}-option-{key}"),
                group: format!("question-{position}"),
                label: format!("{}. {text}", key.label()),
                checked,
                disabled: result.is_some(),
                mark,
            }
        })
        .collect();

    QuestionVm {
        position,
        prompt: question.prompt().to_string(),
        options,
    }
}
