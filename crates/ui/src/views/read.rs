use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::components::{SessionTable, StatusPanel};
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{
    SessionRowVm, StatusCountRowVm, StatusSliceVm, map_session_rows, map_status_counts,
    map_status_slices,
};

#[derive(Clone, Debug, PartialEq)]
struct ReadData {
    rows: Vec<SessionRowVm>,
    counts: Vec<StatusCountRowVm>,
    slices: Vec<StatusSliceVm>,
}

#[component]
pub fn ReadView() -> Element {
    let ctx = use_context::<AppContext>();
    let service = ctx.study_sessions();

    let resource = use_resource(move || {
        let service = service.clone();
        async move {
            let sessions = service
                .list_sessions()
                .await
                .map_err(|err| ViewError::Load(err.to_string()))?;
            let breakdown = service
                .status_breakdown()
                .await
                .map_err(|err| ViewError::Load(err.to_string()))?;
            Ok::<_, ViewError>(ReadData {
                rows: map_session_rows(&sessions),
                counts: map_status_counts(&breakdown),
                slices: map_status_slices(&breakdown),
            })
        }
    });

    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page",
            h2 { "View Study Sessions" }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(data) => rsx! {
                    if data.rows.is_empty() {
                        p { "No sessions found." }
                    } else {
                        details { class: "expander", open: true,
                            summary { "View All Data" }
                            SessionTable { rows: data.rows.clone() }
                        }
                        details { class: "expander",
                            summary { "Session Status" }
                            StatusPanel {
                                counts: data.counts.clone(),
                                slices: data.slices.clone(),
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "feedback feedback--error", "{err.message()}" }
                },
            }
        }
    }
}
