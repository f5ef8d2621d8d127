use std::collections::BTreeMap;

use crate::model::item::ItemKey;

/// Completion state keyed by item.
///
/// Absent keys read as "not completed". Keys that no longer match any
/// scheduled item are kept untouched so a schedule edit never drops progress.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressStore {
    entries: BTreeMap<ItemKey, bool>,
}

impl ProgressStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrate from persisted pairs. Later duplicates win.
    #[must_use]
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (ItemKey, bool)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn get(&self, key: &ItemKey) -> bool {
        self.entries.get(key).copied().unwrap_or(false)
    }

    pub fn set(&mut self, key: ItemKey, completed: bool) {
        self.entries.insert(key, completed);
    }

    pub fn reset(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> impl Iterator<Item = (&ItemKey, bool)> {
        self.entries.iter().map(|(key, completed)| (key, *completed))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
