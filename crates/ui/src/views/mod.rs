mod components;
mod day;
mod home;
mod sidebar;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use components::{ChecklistSection, ProgressBar};
pub use day::DayView;
pub use home::HomeView;
pub use sidebar::Sidebar;
pub use state::{ProgressState, SaveState, ViewError, use_progress_state_provider};
