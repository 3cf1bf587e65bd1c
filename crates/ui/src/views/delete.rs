use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::components::{Feedback, SessionPicker, SessionTable};
use crate::views::update::{load_overview, sync_selection};
use crate::views::{ViewState, view_state_from_resource};
use crate::vm::{FeedbackVm, deleted_feedback, error_feedback};

#[component]
pub fn DeleteView() -> Element {
    let ctx = use_context::<AppContext>();
    let service = ctx.study_sessions();
    let service_for_overview = service.clone();

    let mut selected = use_signal(String::new);
    let mut feedback = use_signal(|| None::<FeedbackVm>);
    let mut deleting = use_signal(|| false);

    let mut overview = use_resource(move || load_overview(service_for_overview.clone()));

    let overview_state = view_state_from_resource(overview);
    if let ViewState::Ready(data) = &overview_state {
        sync_selection(selected, &data.options);
    }

    rsx! {
        div { class: "page",
            h2 { "Delete Study Sessions" }

            match overview_state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "feedback feedback--error", "{err.message()}" }
                },
                ViewState::Ready(data) => rsx! {
                    if data.rows.is_empty() {
                        p { "No sessions found." }
                    } else {
                        details { class: "expander",
                            summary { "Current Data" }
                            SessionTable { rows: data.rows.clone() }
                        }

                        SessionPicker {
                            options: data.options.clone(),
                            value: selected(),
                            on_change: move |value: String| {
                                selected.set(value);
                                feedback.set(None);
                            },
                        }

                        button {
                            class: "danger",
                            r#type: "button",
                            disabled: deleting() || selected().is_empty(),
                            onclick: move |_| {
                                let service = service.clone();
                                let name = selected();
                                spawn(async move {
                                    deleting.set(true);
                                    match service.delete_session(&name).await {
                                        Ok(outcome) => {
                                            feedback.set(Some(deleted_feedback(&name, outcome)));
                                            overview.restart();
                                        }
                                        Err(err) => feedback.set(Some(error_feedback(&err))),
                                    }
                                    deleting.set(false);
                                });
                            },
                            "Delete Session"
                        }
                    }
                },
            }

            if let Some(current) = feedback() {
                Feedback { feedback: current }
            }
        }
    }
}
