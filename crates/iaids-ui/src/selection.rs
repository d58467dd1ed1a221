//! Ordered, de-duplicated selection state shared by every multi-select surface.
//!
//! # Design
//! - Insertion order is display order; the last value added renders last.
//! - Mutations report whether anything changed so callers can skip re-renders
//!   they do not need, but re-rendering an unchanged selection is harmless.
//! - Empty strings are ordinary values.

use tracing::{debug, trace};

/// Outcome of a single selection mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Change {
    /// The value was appended to the selection.
    Added,
    /// The value was removed from the selection.
    Removed,
    /// The selection already matched the request.
    Unchanged,
}

impl Change {
    /// True when the selection was modified.
    #[must_use]
    pub const fn is_changed(self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

/// Currently chosen option values, unique and in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    values: Vec<String>,
}

impl Selection {
    /// Create an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Append `value` unless it is already selected.
    pub fn add(&mut self, value: impl Into<String>) -> Change {
        let value = value.into();
        if self.contains(&value) {
            trace!(value = %value, "selection add ignored; already present");
            return Change::Unchanged;
        }
        debug!(value = %value, len = self.values.len() + 1, "selection value added");
        self.values.push(value);
        Change::Added
    }

    /// Remove `value` if it is selected.
    pub fn remove(&mut self, value: &str) -> Change {
        let Some(position) = self.values.iter().position(|existing| existing == value) else {
            trace!(value = %value, "selection remove ignored; not present");
            return Change::Unchanged;
        };
        self.values.remove(position);
        debug!(value = %value, len = self.values.len(), "selection value removed");
        Change::Removed
    }

    /// Remove `value` when selected, otherwise add it.
    pub fn toggle(&mut self, value: &str) -> Change {
        if self.contains(value) {
            self.remove(value)
        } else {
            self.add(value)
        }
    }

    /// Whether `value` is currently selected.
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|existing| existing == value)
    }

    /// Selected values in insertion order.
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Iterate over selected values in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    /// Number of selected values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<S: Into<String>> FromIterator<S> for Selection {
    /// Build a selection by adding each value in turn; later duplicates are dropped.
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut selection = Self::new();
        for value in iter {
            selection.add(value);
        }
        selection
    }
}
