mod item;
mod link;
mod progress_store;
mod schedule;

pub use item::{ItemKey, ItemKind, ScheduleItem};
pub use link::reference_link;
pub use progress_store::ProgressStore;
pub use schedule::{DaySchedule, Schedule, ScheduleError, ScheduleRow};
