//! The form view-model.
//!
//! The browser original kept all state in the DOM and re-queried the
//! document on every operation; here the rendered month lives in an explicit
//! map from field identity to value and validity, synchronized with the
//! server page on load and re-sync.

use super::field::{FieldId, FieldKind};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct FieldState {
    pub value: String,
    /// Two-state marker, the `is-invalid` CSS class of the original page.
    pub invalid: bool,
    /// Set on user edits, cleared once the value reaches the server.
    pub dirty: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Form {
    entries: BTreeMap<FieldId, FieldState>,
    /// Read-only display elements (`{field}_display`), updated on punch.
    displays: BTreeMap<String, String>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a form from scraped `(input name, value)` pairs. Unparsable
    /// names are skipped, they belong to unrelated page controls.
    pub fn from_inputs<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let mut form = Self::new();
        for (name, value) in inputs {
            if let Some(id) = FieldId::parse(name.as_ref()) {
                form.set_value(&id, value.as_ref());
            }
        }
        form
    }

    pub fn value(&self, id: &FieldId) -> Option<&str> {
        self.entries.get(id).map(|s| s.value.as_str())
    }

    pub fn state(&self, id: &FieldId) -> Option<&FieldState> {
        self.entries.get(id)
    }

    /// Programmatic write: value only, dirty flag and marker untouched.
    pub fn set_value(&mut self, id: &FieldId, value: &str) {
        let entry = self.entries.entry(id.clone()).or_default();
        entry.value = value.to_string();
    }

    /// A user edit: stores the value and marks the field dirty.
    pub fn edit(&mut self, id: &FieldId, value: &str) {
        let entry = self.entries.entry(id.clone()).or_default();
        entry.value = value.to_string();
        entry.dirty = true;
    }

    pub fn clear_dirty(&mut self, id: &FieldId) {
        if let Some(entry) = self.entries.get_mut(id) {
            entry.dirty = false;
        }
    }

    pub fn mark_invalid(&mut self, id: &FieldId, invalid: bool) {
        let entry = self.entries.entry(id.clone()).or_default();
        entry.invalid = invalid;
    }

    pub fn is_invalid(&self, id: &FieldId) -> bool {
        self.entries.get(id).is_some_and(|s| s.invalid)
    }

    pub fn set_display(&mut self, id: &FieldId, value: &str) {
        self.displays.insert(id.display_id(), value.to_string());
    }

    pub fn display(&self, id: &FieldId) -> Option<&str> {
        self.displays.get(&id.display_id()).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FieldId, &FieldState)> {
        self.entries.iter()
    }

    /// All non-empty values of one kind, in date order.
    pub fn values_of_kind(&self, kind: &FieldKind) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(id, state)| id.kind == *kind && !state.value.is_empty())
            .map(|(_, state)| state.value.as_str())
            .collect()
    }

    /// Fields the user edited that have not reached the server yet.
    pub fn dirty_fields(&self) -> Vec<FieldId> {
        self.entries
            .iter()
            .filter(|(_, state)| state.dirty)
            .map(|(id, _)| id.clone())
            .collect()
    }

    /// Dates present in the form, each once, in order.
    pub fn dates(&self) -> Vec<String> {
        let mut dates: Vec<String> = self.entries.keys().map(|id| id.date.clone()).collect();
        dates.sort();
        dates.dedup();
        dates
    }

    /// Replace the whole form with authoritative server state. Display
    /// values survive, they are not part of the scraped inputs.
    pub fn replace_with(&mut self, other: Form) {
        self.entries = other.entries;
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
