use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::model::BankName;
use services::{BankSource, EmbeddedBanks, QuizBoard, QuizService};

use crate::context::{UiApp, build_app_context};
use crate::views::QuizPage;
use crate::views::quiz::QuizTestHandles;
use crate::vm::QuizIntent;

#[derive(Clone)]
struct TestApp {
    quiz_service: Arc<QuizService>,
}

impl UiApp for TestApp {
    fn title(&self) -> String {
        "Quiz Test".to_string()
    }

    fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz_service)
    }
}

#[derive(Props, Clone)]
struct QuizHarnessProps {
    app: Arc<TestApp>,
    handles: QuizTestHandles,
}

impl PartialEq for QuizHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn QuizHarness(props: QuizHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { QuizPage {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: QuizTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Dispatch an intent, then let any spawned load finish and re-render.
    pub async fn dispatch(&mut self, intent: QuizIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        self.drive_async().await;
        self.drive_async().await;
    }

    pub fn board(&self) -> QuizBoard {
        let board = self.handles.board();
        self.dom
            .in_runtime(|| board.peek().as_ref().cloned())
            .expect("board configured")
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn bank_name(raw: &str) -> BankName {
    BankName::new(raw).expect("valid bank name")
}

/// Harness over the given source, with the first bank already loaded.
pub async fn setup_view_harness(source: Arc<dyn BankSource>) -> ViewHarness {
    let app = Arc::new(TestApp {
        quiz_service: Arc::new(QuizService::new(source)),
    });
    let handles = QuizTestHandles::default();

    let dom = VirtualDom::new_with_props(
        QuizHarness,
        QuizHarnessProps {
            app,
            handles: handles.clone(),
        },
    );

    let mut harness = ViewHarness { dom, handles };
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    harness
}

pub fn in_memory_source(pairs: &[(&str, &str)]) -> Arc<dyn BankSource> {
    let banks = pairs
        .iter()
        .map(|(name, json)| (bank_name(name), Arc::<str>::from(*json)))
        .collect();
    Arc::new(EmbeddedBanks::new(banks))
}
