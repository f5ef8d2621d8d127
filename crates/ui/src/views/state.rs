use dioxus::prelude::*;
use services::{ProgressService, ProgressServiceError, SaveReceipt};
use tracing::warn;
use tracker_core::model::{ItemKey, ProgressStore};

use crate::context::AppContext;
use crate::vm::format_saved_at;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message() -> &'static str {
        "Something went wrong. Please try again."
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveState {
    Idle,
    Saving,
    Saved(SaveReceipt),
    Error(ViewError),
}

impl SaveState {
    #[must_use]
    pub fn label(&self) -> Option<String> {
        match self {
            SaveState::Idle => None,
            SaveState::Saving => Some("Saving...".to_owned()),
            SaveState::Saved(receipt) => Some(format!(
                "Saved at {}",
                format_saved_at(receipt.saved_at)
            )),
            SaveState::Error(_) => Some(format!("Save failed. {}", ViewError::message())),
        }
    }
}

/// Live completion state shared by every view.
///
/// All mutation goes through `set_completed` and `reset`, which hand the store
/// to `ProgressService` and track the save it returns.
#[derive(Clone, Copy, PartialEq)]
pub struct ProgressState {
    store: Signal<ProgressStore>,
    save_state: Signal<SaveState>,
}

impl ProgressState {
    #[must_use]
    pub fn store(&self) -> Signal<ProgressStore> {
        self.store
    }

    #[must_use]
    pub fn save_state(&self) -> SaveState {
        (self.save_state)()
    }

    pub fn set_completed(self, service: &ProgressService, key: ItemKey, completed: bool) {
        let mut store = self.store;
        let save = service.set_completed(&mut store.write(), key, completed);
        self.track_save(save);
    }

    pub fn reset(self, service: &ProgressService) {
        let mut store = self.store;
        let save = service.reset(&mut store.write());
        self.track_save(save);
    }

    fn track_save(
        self,
        save: impl Future<Output = Result<SaveReceipt, ProgressServiceError>> + 'static,
    ) {
        let mut save_state = self.save_state;
        save_state.set(SaveState::Saving);
        spawn(async move {
            match save.await {
                Ok(receipt) => save_state.set(SaveState::Saved(receipt)),
                Err(err) => {
                    warn!(error = %err, "Failed to save progress");
                    save_state.set(SaveState::Error(ViewError::Unknown));
                }
            }
        });
    }
}

/// Seeds `ProgressState` from the startup progress and provides it as context.
pub fn use_progress_state_provider(ctx: &AppContext) -> ProgressState {
    let initial = ctx.initial_progress().clone();
    use_context_provider(move || ProgressState {
        store: Signal::new(initial),
        save_state: Signal::new(SaveState::Idle),
    })
}
