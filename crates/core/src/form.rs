//! Create/edit form state.
//!
//! A form is either creating (input goes to the draft) or editing a copy of an
//! existing record (input goes to the edit buffer). The only way out of edit
//! mode is [`Form::submit`]; there is no cancel.

use crate::ledger::Ledger;
use crate::record::{Entry, Fields, RecordId};
use serde::Serialize;

/// Which buffer the form inputs are bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "mode", content = "id")]
pub enum FormMode {
    Creating,
    Editing(RecordId),
}

/// Outcome of submitting a form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "outcome", content = "id")]
pub enum Submission {
    Created(RecordId),
    Updated(RecordId),
    /// Nothing changed: a required field was missing, or the record being
    /// edited is no longer in the list.
    Ignored,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Form<T: Entry> {
    draft: T::Fields,
    editing: Option<T>,
}

impl<T: Entry> Default for Form<T> {
    fn default() -> Self {
        Self {
            draft: T::Fields::default(),
            editing: None,
        }
    }
}

impl<T: Entry> Form<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> FormMode {
        match &self.editing {
            Some(record) => FormMode::Editing(record.id()),
            None => FormMode::Creating,
        }
    }

    pub fn draft(&self) -> &T::Fields {
        &self.draft
    }

    pub fn editing(&self) -> Option<&T> {
        self.editing.as_ref()
    }

    /// The buffer the inputs currently display.
    pub fn active_fields(&self) -> &T::Fields {
        match &self.editing {
            Some(record) => record.fields(),
            None => &self.draft,
        }
    }

    /// Writes one input into whichever buffer is active.
    pub fn change(&mut self, field: <T::Fields as Fields>::Field, raw: &str) {
        tracing::debug!("{} form: {:?} <- {:?}", T::KIND, field, raw);
        match &mut self.editing {
            Some(record) => record.fields_mut().set(field, raw),
            None => self.draft.set(field, raw),
        }
    }

    /// Loads a copy of `record` into the edit buffer, replacing any edit in progress.
    ///
    /// The draft is kept and reappears once the edit is submitted.
    pub fn begin_edit(&mut self, record: &T) {
        tracing::debug!("{} {} opened for edit", T::KIND, record.id());
        self.editing = Some(record.clone());
    }

    /// Create when creating, update when editing.
    pub fn submit(&mut self, ledger: &mut Ledger<T>) -> Submission {
        match self.editing.take() {
            Some(record) => {
                let id = record.id();
                if ledger.replace(record) {
                    Submission::Updated(id)
                } else {
                    Submission::Ignored
                }
            }
            None => self.create(ledger),
        }
    }

    /// Appends the draft and clears it. On a missing field the draft is left as typed.
    pub fn create(&mut self, ledger: &mut Ledger<T>) -> Submission {
        match ledger.create(&self.draft) {
            Some(id) => {
                self.draft = T::Fields::default();
                Submission::Created(id)
            }
            None => Submission::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Patient, PatientField, PatientFields};

    fn patients() -> Ledger<Patient> {
        Ledger::from_entries(vec![
            Patient::new(
                1,
                PatientFields {
                    name: "John Doe".into(),
                    age: 35,
                    gender: "Male".into(),
                },
            ),
            Patient::new(
                2,
                PatientFields {
                    name: "Jane Smith".into(),
                    age: 28,
                    gender: "Female".into(),
                },
            ),
        ])
    }

    fn fill(form: &mut Form<Patient>, name: &str, age: &str, gender: &str) {
        form.change(PatientField::Name, name);
        form.change(PatientField::Age, age);
        form.change(PatientField::Gender, gender);
    }

    #[test]
    fn test_submit_creates_and_resets_draft() {
        let mut ledger = patients();
        let mut form = Form::new();
        fill(&mut form, "Ada Lovelace", "36", "Female");

        assert_eq!(form.submit(&mut ledger), Submission::Created(3));
        assert_eq!(form.draft(), &PatientFields::default());
        assert_eq!(ledger.name_of(3), "Ada Lovelace");
    }

    #[test]
    fn test_submit_incomplete_keeps_draft_and_list() {
        let mut ledger = patients();
        let before = ledger.clone();
        let mut form = Form::new();
        fill(&mut form, "Ada Lovelace", "not a number", "Female");

        assert_eq!(form.submit(&mut ledger), Submission::Ignored);
        assert_eq!(ledger, before);
        assert_eq!(form.draft().name, "Ada Lovelace");
        assert_eq!(form.mode(), FormMode::Creating);
    }

    #[test]
    fn test_submit_accepts_whitespace_and_signed_values() {
        let mut ledger = patients();
        let mut form = Form::new();
        fill(&mut form, "   ", "40", "Male");
        assert_eq!(form.submit(&mut ledger), Submission::Created(3));
        assert_eq!(ledger.name_of(3), "   ");

        fill(&mut form, "Old Timer", "5000000000", "Male");
        assert_eq!(form.submit(&mut ledger), Submission::Created(4));

        fill(&mut form, "Typo", "-5", "Female");
        assert_eq!(form.submit(&mut ledger), Submission::Created(5));
        assert_eq!(ledger.get(5).map(|p| p.fields.age), Some(-5));
    }

    #[test]
    fn test_edit_binds_inputs_to_buffer_not_draft() {
        let mut ledger = patients();
        let mut form = Form::new();
        form.change(PatientField::Name, "half-typed");

        let jane = ledger.get(2).expect("Jane should exist").clone();
        form.begin_edit(&jane);
        assert_eq!(form.mode(), FormMode::Editing(2));
        assert_eq!(form.active_fields().name, "Jane Smith");

        form.change(PatientField::Age, "29");
        assert_eq!(form.draft().name, "half-typed");
        assert_eq!(form.draft().age, 0);

        assert_eq!(form.submit(&mut ledger), Submission::Updated(2));
        assert_eq!(form.mode(), FormMode::Creating);
        assert_eq!(ledger.get(2).map(|p| p.fields.age), Some(29));
        assert_eq!(ledger.get(1), patients().get(1));
        assert_eq!(form.active_fields().name, "half-typed");
    }

    #[test]
    fn test_update_skips_required_field_check() {
        let mut ledger = patients();
        let mut form = Form::new();
        form.begin_edit(&ledger.as_slice()[0].clone());
        form.change(PatientField::Name, "");

        assert_eq!(form.submit(&mut ledger), Submission::Updated(1));
        assert_eq!(ledger.name_of(1), "");
    }

    #[test]
    fn test_update_after_record_deleted_is_ignored() {
        let mut ledger = patients();
        let mut form = Form::new();
        form.begin_edit(&ledger.as_slice()[1].clone());
        assert!(ledger.remove(2));

        assert_eq!(form.submit(&mut ledger), Submission::Ignored);
        assert_eq!(form.mode(), FormMode::Creating);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_begin_edit_replaces_edit_in_progress() {
        let ledger = patients();
        let mut form = Form::new();
        form.begin_edit(&ledger.as_slice()[0]);
        form.change(PatientField::Gender, "changed");
        form.begin_edit(&ledger.as_slice()[1]);

        assert_eq!(form.mode(), FormMode::Editing(2));
        assert_eq!(form.active_fields().gender, "Female");
    }
}
