use super::ScreenLabels;
use crate::entities::{Patient, PatientField};
use crate::error::{CrmError, CrmResult};
use crate::form::{Form, Submission};
use crate::ledger::Ledger;
use crate::record::{parse_field, Entry, RecordId};
use crate::view::{self, ScreenView, TableScreenView};

pub const PATIENT_LABELS: ScreenLabels = ScreenLabels {
    title: "Patients",
    create_heading: "Add New Patient",
    edit_heading: "Edit Patient",
    create_label: "Add Patient",
    update_label: "Update Patient",
    filter_heading: None,
};

/// The patient registry. Holds only form state; the list itself belongs to the shell.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PatientScreen {
    form: Form<Patient>,
}

impl PatientScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &Form<Patient> {
        &self.form
    }

    pub fn change(&mut self, field: PatientField, raw: &str) {
        self.form.change(field, raw);
    }

    pub fn set_field(&mut self, name: &str, raw: &str) -> CrmResult<()> {
        let field = parse_field::<PatientField>(name).ok_or_else(|| CrmError::UnknownField {
            kind: Patient::KIND,
            name: name.to_owned(),
        })?;
        self.change(field, raw);
        Ok(())
    }

    pub fn submit(&mut self, patients: &mut Ledger<Patient>) -> Submission {
        self.form.submit(patients)
    }

    pub fn edit(&mut self, patients: &Ledger<Patient>, id: RecordId) -> CrmResult<()> {
        let patient = patients.get(id).ok_or(CrmError::RecordNotFound {
            kind: Patient::KIND,
            id,
        })?;
        self.form.begin_edit(patient);
        Ok(())
    }

    /// Removes the patient. Ledger entries referencing it are left in place.
    pub fn delete(&mut self, patients: &mut Ledger<Patient>, id: RecordId) -> CrmResult<()> {
        if !patients.remove(id) {
            return Err(CrmError::RecordNotFound {
                kind: Patient::KIND,
                id,
            });
        }
        Ok(())
    }

    pub fn view(&self, patients: &Ledger<Patient>) -> ScreenView {
        ScreenView::Table(TableScreenView {
            heading: PATIENT_LABELS.title.to_owned(),
            form: view::form_view(&PATIENT_LABELS, &self.form, patients),
            filter: None,
            table: view::table_view(patients.iter(), patients),
        })
    }
}
