//! Ordered in-memory record lists.
//!
//! A [`Ledger`] is the only place records are added, replaced or removed. Ids are
//! assigned as one more than the largest id currently in the list, so an id can be
//! handed out again once the record holding the maximum is deleted.

use crate::entities::Patient;
use crate::record::{Entry, PatientId, RecordId};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Ledger<T> {
    entries: Vec<T>,
}

impl<T> Default for Ledger<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T: Entry> Ledger<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing list. Ids are taken as given; duplicates are not rejected.
    pub fn from_entries(entries: Vec<T>) -> Self {
        Self { entries }
    }

    /// The id the next created record will receive: `max(ids) + 1`, or 1 when empty.
    ///
    /// `None` once the largest id is `RecordId::MAX`; no further record can be created.
    pub fn next_id(&self) -> Option<RecordId> {
        match self.entries.iter().map(Entry::id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        }
    }

    /// Appends a record built from `draft`.
    ///
    /// Returns the new id, or `None` (leaving the list untouched) when a
    /// required field is missing or the id space is exhausted.
    pub fn create(&mut self, draft: &T::Fields) -> Option<RecordId> {
        let Some(id) = self.next_id() else {
            tracing::warn!("{} create ignored: no id left after {}", T::KIND, RecordId::MAX);
            return None;
        };
        let Some(record) = T::from_draft(id, draft) else {
            tracing::debug!("{} create ignored: required field missing", T::KIND);
            return None;
        };
        self.entries.push(record);
        tracing::info!("{} {} created", T::KIND, id);
        Some(id)
    }

    /// Replaces every record whose id matches `record.id()`, keeping its position.
    ///
    /// Returns `false` if no record matched.
    pub fn replace(&mut self, record: T) -> bool {
        let id = record.id();
        let mut replaced = false;
        for entry in self.entries.iter_mut().filter(|e| e.id() == id) {
            *entry = record.clone();
            replaced = true;
        }
        if replaced {
            tracing::info!("{} {} updated", T::KIND, id);
        } else {
            tracing::debug!("{} update ignored: id {} not in list", T::KIND, id);
        }
        replaced
    }

    /// Removes every record with the given id, preserving the order of the rest.
    ///
    /// Returns `false` if no record matched.
    pub fn remove(&mut self, id: RecordId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id() != id);
        let removed = self.entries.len() != before;
        if removed {
            tracing::info!("{} {} deleted", T::KIND, id);
        } else {
            tracing::debug!("{} delete ignored: id {} not in list", T::KIND, id);
        }
        removed
    }

    pub fn get(&self, id: RecordId) -> Option<&T> {
        self.entries.iter().find(|e| e.id() == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Ledger<Patient> {
    /// Name of the referenced patient, or `""` for a dangling reference.
    pub fn name_of(&self, id: PatientId) -> &str {
        self.get(id).map(Patient::name).unwrap_or("")
    }
}

impl<'a, T> IntoIterator for &'a Ledger<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
