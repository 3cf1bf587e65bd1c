use dioxus::prelude::*;

use study_core::model::{SessionDetailsDraft, StudySession};

use crate::context::AppContext;
use crate::views::components::{Feedback, SessionPicker, SessionTable, StatusSelect};
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{
    FeedbackVm, SessionRowVm, error_feedback, format_date, map_session_options,
    map_session_rows, parse_date_input, parse_status_choice, updated_feedback,
};

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct SessionOverview {
    pub rows: Vec<SessionRowVm>,
    pub options: Vec<String>,
}

/// Current table contents plus the picker options, shared by the update and delete pages.
pub(crate) async fn load_overview(
    service: std::sync::Arc<services::StudySessionService>,
) -> Result<SessionOverview, ViewError> {
    let sessions = service
        .list_sessions()
        .await
        .map_err(|err| ViewError::Load(err.to_string()))?;
    let names = service
        .session_names()
        .await
        .map_err(|err| ViewError::Load(err.to_string()))?;
    Ok(SessionOverview {
        rows: map_session_rows(&sessions),
        options: map_session_options(&names),
    })
}

/// Keep the picker pointing at an existing option.
pub(crate) fn sync_selection(mut selected: Signal<String>, options: &[String]) {
    let current = selected();
    if options.iter().any(|name| *name == current) {
        return;
    }
    selected.set(options.first().cloned().unwrap_or_default());
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct UpdateForm {
    subject: String,
    description: String,
    status: String,
    date: String,
}

impl From<&StudySession> for UpdateForm {
    fn from(session: &StudySession) -> Self {
        Self {
            subject: session.subject().to_owned(),
            description: session.description().to_owned(),
            status: session.status().as_str().to_owned(),
            date: format_date(session.date()),
        }
    }
}

#[component]
pub fn UpdateView() -> Element {
    let ctx = use_context::<AppContext>();
    let service = ctx.study_sessions();
    let service_for_overview = service.clone();
    let service_for_selected = service.clone();

    let mut selected = use_signal(String::new);
    let mut form = use_signal(UpdateForm::default);
    let mut loaded_for = use_signal(|| None::<String>);
    let mut feedback = use_signal(|| None::<FeedbackVm>);

    let mut overview = use_resource(move || load_overview(service_for_overview.clone()));

    let mut selected_session = use_resource(move || {
        let service = service_for_selected.clone();
        let name = selected();
        async move {
            service
                .find_session(&name)
                .await
                .map_err(|err| ViewError::Load(err.to_string()))
        }
    });

    let overview_state = view_state_from_resource(overview);
    if let ViewState::Ready(data) = &overview_state {
        sync_selection(selected, &data.options);
    }

    if let ViewState::Ready(Some(session)) = view_state_from_resource(selected_session) {
        let name = session.name().to_string();
        if loaded_for().as_deref() != Some(name.as_str()) {
            form.set(UpdateForm::from(&session));
            loaded_for.set(Some(name));
        }
    }

    let form_value = form();
    let has_selection = loaded_for().is_some_and(|name| name == selected());

    rsx! {
        div { class: "page",
            h2 { "Edit/Update Study Sessions" }

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

                        if has_selection {
                            div { class: "form-columns",
                                div { class: "form-column",
                                    label { class: "form-field",
                                        span { "Subject" }
                                        input {
                                            r#type: "text",
                                            value: "{form_value.subject}",
                                            oninput: move |evt| form.write().subject = evt.value(),
                                        }
                                    }
                                    label { class: "form-field",
                                        span { "Description" }
                                        textarea {
                                            value: "{form_value.description}",
                                            oninput: move |evt| form.write().description = evt.value(),
                                        }
                                    }
                                    label { class: "form-field",
                                        span { "Status" }
                                        StatusSelect {
                                            value: form_value.status.clone(),
                                            on_change: move |value: String| form.write().status = value,
                                        }
                                    }
                                }
                                div { class: "form-column",
                                    label { class: "form-field",
                                        span { "Session Date" }
                                        input {
                                            r#type: "date",
                                            value: "{form_value.date}",
                                            oninput: move |evt| form.write().date = evt.value(),
                                        }
                                    }
                                }
                            }

                            button {
                                class: "primary",
                                r#type: "button",
                                onclick: move |_| {
                                    let service = service.clone();
                                    let name = selected();
                                    let snapshot = form();
                                    spawn(async move {
                                        let Some(date) = parse_date_input(&snapshot.date) else {
                                            feedback.set(Some(FeedbackVm::Error("Please pick a session date.".into())));
                                            return;
                                        };
                                        let status = match parse_status_choice(&snapshot.status) {
                                            Ok(status) => status,
                                            Err(invalid) => {
                                                feedback.set(Some(invalid));
                                                return;
                                            }
                                        };
                                        let details = SessionDetailsDraft {
                                            subject: snapshot.subject,
                                            description: snapshot.description,
                                            status,
                                            date,
                                        };
                                        match service.update_session(&name, details).await {
                                            Ok(outcome) => {
                                                feedback.set(Some(updated_feedback(&name, outcome)));
                                                loaded_for.set(None);
                                                overview.restart();
                                                selected_session.restart();
                                            }
                                            Err(err) => feedback.set(Some(error_feedback(&err))),
                                        }
                                    });
                                },
                                "Update Session"
                            }
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
