mod date_fmt;
mod feedback_vm;
mod session_row_vm;
mod status_chart_vm;

pub use date_fmt::{format_date, parse_date_input};
pub use feedback_vm::{
    FeedbackVm, created_feedback, deleted_feedback, error_feedback, parse_status_choice,
    updated_feedback,
};
pub use session_row_vm::{SessionRowVm, map_session_options, map_session_rows, status_options};
pub use status_chart_vm::{
    PIE_CENTER, PIE_RADIUS, StatusCountRowVm, StatusSliceVm, map_status_counts,
    map_status_slices, status_color,
};
