use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub const DEFAULT_SCHEDULE_PATH: &str = "python_learning_schedule_updated.csv";
pub const DEFAULT_PROGRESS_PATH: &str = "progress_tracking.csv";
pub const DEFAULT_TITLE: &str = "Python Learning Schedule";

/// Track completion of a day-by-day learning schedule
#[derive(Parser, Debug)]
#[command(name = "learn-tracker", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Schedule CSV with Day, Lecture and Project columns
    #[arg(long, global = true, env = "LEARN_SCHEDULE", default_value = DEFAULT_SCHEDULE_PATH)]
    pub schedule: PathBuf,

    /// Progress CSV with Key and Completed columns (created on first save)
    #[arg(long, global = true, env = "LEARN_PROGRESS", default_value = DEFAULT_PROGRESS_PATH)]
    pub progress: PathBuf,

    /// Window and report title
    #[arg(long, global = true, env = "LEARN_TITLE", default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (no logging)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Open the desktop checklist (default)
    Ui,
    /// Print per-day and overall progress
    Report,
    /// Clear all recorded progress
    Reset,
}

/// Resolved paths and labels handed to the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub schedule_path: PathBuf,
    pub progress_path: PathBuf,
    pub window_title: String,
}

impl From<&Cli> for AppConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            schedule_path: cli.schedule.clone(),
            progress_path: cli.progress.clone(),
            window_title: cli.title.clone(),
        }
    }
}

impl Cli {
    #[must_use]
    pub fn command(&self) -> Command {
        self.command.unwrap_or(Command::Ui)
    }
}
