use std::sync::Arc;

use dioxus::prelude::*;

use services::{LoadTicket, QuizBoard, QuizService};

use crate::context::AppContext;
use crate::views::results::ResultsSummary;
use crate::views::tabs::TabBar;
use crate::vm::{BodyVm, OptionVm, QuestionVm, QuizIntent, QuizVm, map_board};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

async fn run_load(
    service: Arc<QuizService>,
    mut board: Signal<Option<QuizBoard>>,
    ticket: LoadTicket,
) {
    let outcome = service.load(&ticket).await;
    if let Some(board) = board.write().as_mut() {
        board.complete_load(&ticket, outcome);
    }
}

/// Apply an intent to the board. Returns a ticket when the intent started a new load.
fn apply_intent(board: &mut QuizBoard, intent: QuizIntent) -> Option<LoadTicket> {
    let outcome = match intent {
        QuizIntent::SelectBank(name) => board.select(&name),
        QuizIntent::Retry => Ok(Some(board.reload())),
        QuizIntent::Choose { position, key } => board.record(position, key).map(|()| None),
        QuizIntent::Submit => board.submit().map(|_| None),
        QuizIntent::Restart => board.restart().map(|()| None),
    };

    outcome.unwrap_or_else(|err| {
        log::warn!("ignoring quiz action: {err}");
        None
    })
}

#[component]
pub fn QuizPage() -> Element {
    let ctx = use_context::<AppContext>();
    let service = ctx.quiz_service();
    let title = ctx.title().to_string();

    let board = use_signal({
        let service = Arc::clone(&service);
        move || service.new_board().ok()
    });

    // Kick off the first bank's load once.
    use_hook({
        let service = Arc::clone(&service);
        move || {
            spawn(async move {
                let mut board = board;
                let ticket = board.write().as_mut().map(QuizBoard::reload);
                if let Some(ticket) = ticket {
                    run_load(service, board, ticket).await;
                }
            });
        }
    });

    let dispatch = use_callback(move |intent: QuizIntent| {
        let mut board = board;
        let ticket = board
            .write()
            .as_mut()
            .and_then(|state| apply_intent(state, intent));
        if let Some(ticket) = ticket {
            spawn(run_load(Arc::clone(&service), board, ticket));
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch, board);
            }
        }
    }

    let vm = map_board(board.read().as_ref());

    rsx! {
        div { class: "page quiz-page",
            header { class: "app-header",
                h1 { "{title}" }
            }
            TabBar { tabs: vm.tabs.clone(), on_intent: dispatch }
            main { class: "content",
                match vm.body {
                    BodyVm::NoBanks => rsx! {
                        div { class: "container", "No question banks configured." }
                    },
                    BodyVm::Loading => rsx! {
                        div { class: "container", "Loading quiz..." }
                    },
                    BodyVm::Empty { message } => rsx! {
                        div { class: "container", "{message}" }
                    },
                    BodyVm::Error { message } => rsx! {
                        div { class: "container error",
                            p { "{message}" }
                            button {
                                class: "btn btn-secondary",
                                id: "quiz-retry",
                                r#type: "button",
                                onclick: move |_| dispatch.call(QuizIntent::Retry),
                                "Retry"
                            }
                        }
                    },
                    BodyVm::Quiz(quiz) => rsx! {
                        QuizForm { key: "{quiz.form_key}", quiz: quiz.clone(), on_intent: dispatch }
                    },
                }
            }
        }
    }
}

#[component]
fn QuizForm(quiz: QuizVm, on_intent: Callback<QuizIntent>) -> Element {
    rsx! {
        div { class: "quiz-container",
            p { class: "quiz-progress", "{quiz.progress_label}" }
            for question in quiz.questions.iter().cloned() {
                QuestionBlock { key: "{question.position}", question: question.clone(), on_intent }
            }
            if !quiz.submitted {
                button {
                    class: "submit-button",
                    id: "quiz-submit",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::Submit),
                    "Submit Quiz"
                }
            }
            if let Some(summary) = quiz.summary {
                ResultsSummary { summary, on_intent }
            }
        }
    }
}

#[component]
fn QuestionBlock(question: QuestionVm, on_intent: Callback<QuizIntent>) -> Element {
    let position = question.position;
    let number = position + 1;

    rsx! {
        div { class: "question-block",
            p { class: "question-text", "{number}. {question.prompt}" }
            div { class: "options-group", role: "radiogroup",
                for option in question.options.iter().cloned() {
                    OptionRow { key: "{option.input_id}", position, option: option.clone(), on_intent }
                }
            }
        }
    }
}

#[component]
fn OptionRow(position: usize, option: OptionVm, on_intent: Callback<QuizIntent>) -> Element {
    let key = option.key.clone();

    rsx! {
        div { class: "option-item",
            input {
                r#type: "radio",
                id: "{option.input_id}",
                name: "{option.group}",
                value: "{option.key}",
                checked: option.checked,
                disabled: option.disabled,
                onchange: move |_| {
                    on_intent.call(QuizIntent::Choose { position, key: key.clone() });
                },
            }
            label { r#for: "{option.input_id}", "{option.label}" }
            if let Some(mark) = option.mark {
                span { class: "result-indicator",
                    span { class: mark.class(), "{mark.label()}" }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    board: Rc<RefCell<Option<Signal<Option<QuizBoard>>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<QuizIntent>,
        board: Signal<Option<QuizBoard>>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.board.borrow_mut() = Some(board);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn board(&self) -> Signal<Option<QuizBoard>> {
        (*self.board.borrow()).expect("quiz board registered")
    }
}
