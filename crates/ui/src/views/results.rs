use dioxus::prelude::*;

use crate::vm::{QuizIntent, ResultSummaryVm};

#[component]
pub fn ResultsSummary(summary: ResultSummaryVm, on_intent: Callback<QuizIntent>) -> Element {
    rsx! {
        div { class: "results-summary",
            h2 { "Quiz Results" }
            p { "Total Questions: {summary.total}" }
            p { class: "correct-count", "Correct Answers: {summary.correct}" }
            p { class: "incorrect-count", "Incorrect Answers: {summary.incorrect}" }
            if summary.unanswered > 0 {
                p { class: "unanswered-count", "Unanswered: {summary.unanswered}" }
            }
            p { class: "score", "Score: {summary.percent}%" }
            button {
                class: "refresh-button",
                id: "quiz-refresh",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::Restart),
                "Refresh Quiz"
            }
        }
    }
}
