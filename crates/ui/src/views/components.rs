use dioxus::prelude::*;

use crate::vm::{
    FeedbackVm, PIE_CENTER, PIE_RADIUS, SessionRowVm, StatusCountRowVm, StatusSliceVm,
    status_options,
};

#[component]
pub fn SessionTable(rows: Vec<SessionRowVm>) -> Element {
    rsx! {
        table { class: "sessions-table",
            thead {
                tr {
                    th { "Session" }
                    th { "Subject" }
                    th { "Description" }
                    th { "Status" }
                    th { "Date" }
                }
            }
            tbody {
                for row in rows {
                    tr {
                        td { "{row.session}" }
                        td { "{row.subject}" }
                        td { "{row.description}" }
                        td { "{row.status}" }
                        td { "{row.date_str}" }
                    }
                }
            }
        }
    }
}

/// Count-by-status table with a pie chart of the same numbers.
#[component]
pub fn StatusPanel(counts: Vec<StatusCountRowVm>, slices: Vec<StatusSliceVm>) -> Element {
    let center = PIE_CENTER.to_string();
    let radius = PIE_RADIUS.to_string();

    rsx! {
        div { class: "status-panel",
            table { class: "status-table",
                thead {
                    tr {
                        th { "Status" }
                        th { "Count" }
                    }
                }
                tbody {
                    for row in counts {
                        tr {
                            td { "{row.status}" }
                            td { "{row.count}" }
                        }
                    }
                }
            }
            figure { class: "status-chart",
                figcaption { "Session Status Distribution" }
                svg {
                    view_box: "0 0 200 200",
                    width: "240",
                    height: "240",
                    for slice in slices.iter() {
                        if slice.is_full_circle() {
                            circle {
                                cx: "{center}",
                                cy: "{center}",
                                r: "{radius}",
                                fill: "{slice.color}",
                            }
                        } else {
                            path { d: "{slice.path}", fill: "{slice.color}" }
                        }
                    }
                }
                ul { class: "status-legend",
                    for slice in slices.iter() {
                        li {
                            span {
                                class: "status-legend__swatch",
                                style: "background-color: {slice.color}",
                            }
                            "{slice.label}: {slice.count} ({slice.percent_str})"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Feedback(feedback: FeedbackVm) -> Element {
    rsx! {
        p { class: "{feedback.class()}", "{feedback.message()}" }
    }
}

/// Select over the three session statuses.
#[component]
pub fn StatusSelect(value: String, on_change: EventHandler<String>) -> Element {
    rsx! {
        select {
            class: "form-select",
            value: "{value}",
            onchange: move |evt| on_change.call(evt.value()),
            for option_value in status_options() {
                option {
                    value: "{option_value}",
                    selected: option_value == value,
                    "{option_value}"
                }
            }
        }
    }
}

/// Select over existing session names.
#[component]
pub fn SessionPicker(
    options: Vec<String>,
    value: String,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        label { class: "form-field",
            span { "Select Session" }
            select {
                class: "form-select",
                value: "{value}",
                onchange: move |evt| on_change.call(evt.value()),
                for name in options {
                    option {
                        value: "{name}",
                        selected: name == value,
                        "{name}"
                    }
                }
            }
        }
    }
}
