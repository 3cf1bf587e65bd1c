mod components;
mod create;
mod delete;
mod read;
mod state;
mod update;

pub use components::{Feedback, SessionPicker, SessionTable, StatusPanel, StatusSelect};
pub use create::CreateView;
pub use delete::DeleteView;
pub use read::ReadView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use update::UpdateView;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
