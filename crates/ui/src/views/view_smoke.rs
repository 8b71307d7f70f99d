use quiz_core::model::OptionKey;

use super::test_harness::{bank_name, in_memory_source, setup_view_harness};
use crate::vm::QuizIntent;

const MATH: &str = r#"[{"question":"2+2?","options":{"a":"3","b":"4"},"correct_answer":"b"}]"#;
const COLOURS: &str =
    r#"[{"question":"Colour of the sky?","options":{"a":"Blue","b":"Green"},"correct_answer":"a"}]"#;

fn key(raw: &str) -> OptionKey {
    OptionKey::new(raw).unwrap()
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_page_renders_tabs_and_first_bank() {
    let harness = setup_view_harness(in_memory_source(&[("paper4", MATH), ("paper5", COLOURS)])).await;
    let html = harness.render();

    assert!(html.contains("Quiz Test"), "missing title in {html}");
    assert!(html.contains("Paper 4"), "missing tab in {html}");
    assert!(html.contains("Paper 5"), "missing tab in {html}");
    assert!(html.contains("2+2?"), "missing prompt in {html}");
    assert!(html.contains("A. 3"), "missing option in {html}");
    assert!(html.contains("B. 4"), "missing option in {html}");
    assert!(html.contains("Submit Quiz"), "missing submit in {html}");
    assert!(!html.contains("Quiz Results"), "results shown early in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn submit_shows_breakdown_and_refresh_restarts() {
    let mut harness = setup_view_harness(in_memory_source(&[("paper4", MATH)])).await;

    harness
        .dispatch(QuizIntent::Choose {
            position: 0,
            key: key("a"),
        })
        .await;
    harness.dispatch(QuizIntent::Submit).await;
    let html = harness.render();
    assert!(html.contains("Quiz Results"), "missing results in {html}");
    assert!(html.contains("Total Questions: 1"), "missing total in {html}");
    assert!(html.contains("Correct Answers: 0"), "missing correct in {html}");
    assert!(html.contains("Incorrect Answers: 1"), "missing incorrect in {html}");
    assert!(html.contains("(Correct)"), "missing correct mark in {html}");
    assert!(html.contains("(Your Answer - Incorrect)"), "missing wrong mark in {html}");
    assert!(!html.contains("Submit Quiz"), "submit still offered in {html}");

    // Answers are frozen once submitted.
    harness
        .dispatch(QuizIntent::Choose {
            position: 0,
            key: key("b"),
        })
        .await;
    let board = harness.board();
    assert_eq!(board.attempt().unwrap().selected(0), Some(&key("a")));

    harness.dispatch(QuizIntent::Restart).await;
    let html = harness.render();
    assert!(!html.contains("Quiz Results"), "stale results in {html}");
    assert!(html.contains("Submit Quiz"), "missing submit in {html}");
    assert!(harness.board().attempt().unwrap().answers().is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn switching_tabs_never_shows_previous_results() {
    let mut harness =
        setup_view_harness(in_memory_source(&[("paper4", MATH), ("paper5", COLOURS)])).await;

    harness
        .dispatch(QuizIntent::Choose {
            position: 0,
            key: key("b"),
        })
        .await;
    harness.dispatch(QuizIntent::Submit).await;
    assert!(harness.render().contains("Correct Answers: 1"));

    harness
        .dispatch(QuizIntent::SelectBank(bank_name("paper5")))
        .await;
    let html = harness.render();
    assert!(html.contains("Colour of the sky?"), "missing new bank in {html}");
    assert!(!html.contains("Quiz Results"), "stale results in {html}");
    assert!(!html.contains("2+2?"), "old questions in {html}");

    let board = harness.board();
    assert_eq!(board.active(), &bank_name("paper5"));
    let attempt = board.attempt().unwrap();
    assert!(attempt.answers().is_empty());
    assert!(attempt.result().is_none());
}

#[tokio::test(flavor = "current_thread")]
async fn clicking_the_active_tab_keeps_the_quiz() {
    let mut harness =
        setup_view_harness(in_memory_source(&[("paper4", MATH), ("paper5", COLOURS)])).await;
    harness
        .dispatch(QuizIntent::Choose {
            position: 0,
            key: key("b"),
        })
        .await;
    let generation = harness.board().generation();

    harness
        .dispatch(QuizIntent::SelectBank(bank_name("paper4")))
        .await;

    let board = harness.board();
    assert_eq!(board.generation(), generation);
    assert_eq!(board.attempt().unwrap().selected(0), Some(&key("b")));
    let html = harness.render();
    assert!(html.contains("Answered 1 of 1"), "answer lost in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn empty_bank_shows_no_questions_message() {
    let mut harness = setup_view_harness(in_memory_source(&[("paper4", MATH), ("paper5", "[]")])).await;

    harness
        .dispatch(QuizIntent::SelectBank(bank_name("paper5")))
        .await;
    let html = harness.render();
    assert!(html.contains("No questions found for Paper 5."), "missing empty state in {html}");
    assert!(!html.contains("Quiz Results"), "empty bank graded in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn broken_bank_shows_error_with_retry() {
    let harness = setup_view_harness(in_memory_source(&[("paper4", "[{")])).await;
    let html = harness.render();
    assert!(html.contains("Error loading quiz:"), "missing error in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn no_banks_renders_placeholder() {
    let harness = setup_view_harness(in_memory_source(&[])).await;
    let html = harness.render();
    assert!(html.contains("No question banks configured."), "missing placeholder in {html}");
}
