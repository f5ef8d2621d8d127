mod day_vm;
mod progress_vm;
mod time_fmt;

pub use day_vm::{ChecklistItemVm, DayOptionVm, DayVm, map_day};
pub use progress_vm::{ProgressVm, map_overall};
pub use time_fmt::format_saved_at;
