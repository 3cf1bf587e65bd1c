use dioxus::prelude::*;

use study_core::model::{SessionStatus, StudySessionDraft};

use crate::context::AppContext;
use crate::views::components::{Feedback, StatusSelect};
use crate::vm::{
    FeedbackVm, created_feedback, error_feedback, format_date, parse_date_input,
    parse_status_choice,
};

#[derive(Clone, Debug, PartialEq, Eq)]
struct CreateForm {
    session: String,
    subject: String,
    description: String,
    status: String,
    date: String,
}

impl CreateForm {
    fn blank(date: String) -> Self {
        Self {
            session: String::new(),
            subject: String::new(),
            description: String::new(),
            status: SessionStatus::Planned.as_str().to_string(),
            date,
        }
    }
}

#[component]
pub fn CreateView() -> Element {
    let ctx = use_context::<AppContext>();
    let service = ctx.study_sessions();
    let today = format_date(service.today());
    let mut form = use_signal(move || CreateForm::blank(today));
    let mut feedback = use_signal(|| None::<FeedbackVm>);
    let mut saving = use_signal(|| false);

    let form_value = form();

    rsx! {
        div { class: "page",
            h2 { "Add Study Session" }

            div { class: "form-columns",
                div { class: "form-column",
                    label { class: "form-field",
                        span { "Session Name" }
                        textarea {
                            placeholder: "Enter session name here...",
                            value: "{form_value.session}",
                            oninput: move |evt| form.write().session = evt.value(),
                        }
                    }
                    label { class: "form-field",
                        span { "Subject" }
                        input {
                            r#type: "text",
                            placeholder: "Enter subject here...",
                            value: "{form_value.subject}",
                            oninput: move |evt| form.write().subject = evt.value(),
                        }
                    }
                    label { class: "form-field",
                        span { "Description" }
                        textarea {
                            placeholder: "Enter description here...",
                            value: "{form_value.description}",
                            oninput: move |evt| form.write().description = evt.value(),
                        }
                    }
                }
                div { class: "form-column",
                    label { class: "form-field",
                        span { "Status" }
                        StatusSelect {
                            value: form_value.status.clone(),
                            on_change: move |value: String| form.write().status = value,
                        }
                    }
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
                disabled: saving(),
                onclick: move |_| {
                    let service = service.clone();
                    let snapshot = form();
                    spawn(async move {
                        saving.set(true);
                        let Some(date) = parse_date_input(&snapshot.date) else {
                            feedback.set(Some(FeedbackVm::Error("Please pick a session date.".into())));
                            saving.set(false);
                            return;
                        };
                        let status = match parse_status_choice(&snapshot.status) {
                            Ok(status) => status,
                            Err(invalid) => {
                                feedback.set(Some(invalid));
                                saving.set(false);
                                return;
                            }
                        };
                        let draft = StudySessionDraft {
                            session: snapshot.session.clone(),
                            subject: snapshot.subject.clone(),
                            description: snapshot.description.clone(),
                            status,
                            date,
                        };
                        match service.create_session(draft).await {
                            Ok(created) => {
                                feedback.set(Some(created_feedback(created.name().as_str())));
                                form.set(CreateForm::blank(snapshot.date));
                            }
                            Err(err) => feedback.set(Some(error_feedback(&err))),
                        }
                        saving.set(false);
                    });
                },
                "Add Session"
            }

            if let Some(current) = feedback() {
                Feedback { feedback: current }
            }
        }
    }
}
