use serde::{Deserialize, Serialize};
use std::fmt;

/// The two kinds of checkable work scheduled on a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ItemKind {
    Lecture,
    Project,
}

impl ItemKind {
    /// Segment used inside an `ItemKey`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::Lecture => "lecture",
            ItemKind::Project => "project",
        }
    }

    /// Human label for links and headings.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ItemKind::Lecture => "Lecture",
            ItemKind::Project => "Project",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Storage identifier for one checkable item.
///
/// Derived keys have the shape `{day}_{kind}_{reference}`. The separator is not
/// escaped, so a reference containing `_lecture_` or `_project_` can in theory
/// collide with another item. Existing progress files rely on this exact
/// shape, so it is kept as-is.
///
/// Keys read back from storage deserialize as opaque strings and may name items
/// that no longer exist in the current schedule.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemKey(String);

impl ItemKey {
    #[must_use]
    pub fn derive(day: &str, kind: ItemKind, reference: &str) -> Self {
        Self(format!("{day}_{kind}_{reference}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ItemKey({})", self.0)
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A lecture or project as it appears on a given day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleItem {
    pub kind: ItemKind,
    pub reference: String,
    pub key: ItemKey,
}

impl ScheduleItem {
    #[must_use]
    pub fn new(day: &str, kind: ItemKind, reference: impl Into<String>) -> Self {
        let reference = reference.into();
        let key = ItemKey::derive(day, kind, &reference);
        Self {
            kind,
            reference,
            key,
        }
    }
}
