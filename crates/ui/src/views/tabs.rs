use dioxus::prelude::*;

use crate::vm::{QuizIntent, TabVm};

#[component]
pub fn TabBar(tabs: Vec<TabVm>, on_intent: Callback<QuizIntent>) -> Element {
    rsx! {
        nav { class: "tabs-container", role: "tablist",
            for tab in tabs {
                TabButton { key: "{tab.name}", tab: tab.clone(), on_intent }
            }
        }
    }
}

#[component]
fn TabButton(tab: TabVm, on_intent: Callback<QuizIntent>) -> Element {
    let class = if tab.active { "tab-button active" } else { "tab-button" };
    let name = tab.name.clone();

    rsx! {
        button {
            class: "{class}",
            id: "tab-{tab.name}",
            r#type: "button",
            role: "tab",
            aria_selected: "{tab.active}",
            onclick: move |_| on_intent.call(QuizIntent::SelectBank(name.clone())),
            "{tab.label}"
        }
    }
}
