use super::ScreenLabels;
use crate::entities::{Appointment, MedicalRecord, Patient, Prescription};
use crate::error::{CrmError, CrmResult};
use crate::filter::PatientFilter;
use crate::form::{Form, Submission};
use crate::ledger::Ledger;
use crate::record::{parse_field, Entry, Fields, PatientLinked, RecordId};
use crate::view::{self, FilterView, ScreenView, TableScreenView};

/// An entry kept in a patient-linked ledger screen.
pub trait LedgerEntry: Entry + PatientLinked {
    const LABELS: ScreenLabels;
}

impl LedgerEntry for MedicalRecord {
    const LABELS: ScreenLabels = ScreenLabels {
        title: "Medical Records",
        create_heading: "Add New Medical Record",
        edit_heading: "Edit Medical Record",
        create_label: "Add Record",
        update_label: "Update Record",
        filter_heading: Some("Filter Records"),
    };
}

impl LedgerEntry for Prescription {
    const LABELS: ScreenLabels = ScreenLabels {
        title: "Prescriptions",
        create_heading: "Add New Prescription",
        edit_heading: "Edit Prescription",
        create_label: "Add Prescription",
        update_label: "Update Prescription",
        filter_heading: Some("Filter Prescriptions"),
    };
}

impl LedgerEntry for Appointment {
    const LABELS: ScreenLabels = ScreenLabels {
        title: "Appointments",
        create_heading: "Schedule New Appointment",
        edit_heading: "Edit Appointment",
        create_label: "Schedule Appointment",
        update_label: "Update Appointment",
        filter_heading: Some("Filter Appointments"),
    };
}

/// A ledger screen: its own list, form and patient filter.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordScreen<T: LedgerEntry> {
    ledger: Ledger<T>,
    form: Form<T>,
    filter: PatientFilter,
}

impl<T: LedgerEntry> RecordScreen<T> {
    pub fn new(ledger: Ledger<T>) -> Self {
        Self {
            ledger,
            form: Form::new(),
            filter: PatientFilter::All,
        }
    }

    pub fn ledger(&self) -> &Ledger<T> {
        &self.ledger
    }

    pub fn form(&self) -> &Form<T> {
        &self.form
    }

    pub fn filter(&self) -> PatientFilter {
        self.filter
    }

    /// Rows currently shown in the table.
    pub fn displayed(&self) -> Vec<&T> {
        self.filter.apply(self.ledger.as_slice())
    }

    pub fn change(&mut self, field: <T::Fields as Fields>::Field, raw: &str) {
        self.form.change(field, raw);
    }

    pub fn set_field(&mut self, name: &str, raw: &str) -> CrmResult<()> {
        let field = parse_field::<<T::Fields as Fields>::Field>(name).ok_or_else(|| {
            CrmError::UnknownField {
                kind: T::KIND,
                name: name.to_owned(),
            }
        })?;
        self.change(field, raw);
        Ok(())
    }

    pub fn submit(&mut self) -> Submission {
        self.form.submit(&mut self.ledger)
    }

    /// Opens a displayed row for editing.
    pub fn edit(&mut self, id: RecordId) -> CrmResult<()> {
        let record = self
            .displayed()
            .into_iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or(CrmError::RecordNotFound { kind: T::KIND, id })?;
        self.form.begin_edit(&record);
        Ok(())
    }

    /// Deletes a displayed row.
    pub fn delete(&mut self, id: RecordId) -> CrmResult<()> {
        if !self.displayed().iter().any(|r| r.id() == id) {
            return Err(CrmError::RecordNotFound { kind: T::KIND, id });
        }
        self.ledger.remove(id);
        Ok(())
    }

    pub fn set_filter(&mut self, filter: PatientFilter) {
        tracing::debug!("{} filter set to {}", T::KIND, filter);
        self.filter = filter;
    }

    pub fn view(&self, patients: &Ledger<Patient>) -> ScreenView {
        ScreenView::Table(TableScreenView {
            heading: T::LABELS.title.to_owned(),
            form: view::form_view(&T::LABELS, &self.form, patients),
            filter: T::LABELS
                .filter_heading
                .map(|heading| FilterView::new(heading, self.filter, patients)),
            table: view::table_view(self.displayed(), patients),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::AppointmentField;
    use crate::seed;
    use crate::SeedMode;

    fn empty_appointments() -> RecordScreen<Appointment> {
        RecordScreen::new(Ledger::new())
    }

    fn schedule(screen: &mut RecordScreen<Appointment>, patient: &str, reason: &str) -> Submission {
        screen.change(AppointmentField::PatientId, patient);
        screen.change(AppointmentField::Date, "2024-03-20");
        screen.change(AppointmentField::Time, "10:00");
        screen.change(AppointmentField::Reason, reason);
        screen.submit()
    }

    #[test]
    fn test_appointment_scenario() {
        let mut screen = empty_appointments();

        assert_eq!(schedule(&mut screen, "1", "Checkup"), Submission::Created(1));
        assert_eq!(schedule(&mut screen, "1", "Checkup"), Submission::Created(2));

        screen.delete(1).expect("appointment 1 is displayed");
        let ids: Vec<RecordId> = screen.ledger().iter().map(Entry::id).collect();
        assert_eq!(ids, vec![2]);

        screen.set_filter(PatientFilter::Patient(1));
        let shown: Vec<RecordId> = screen.displayed().into_iter().map(Entry::id).collect();
        assert_eq!(shown, vec![2]);
    }

    #[test]
    fn test_filter_hides_rows_from_edit_and_delete() {
        let mut screen = RecordScreen::new(seed::appointments(SeedMode::Demo));
        screen.set_filter(PatientFilter::Patient(2));

        assert_eq!(
            screen.edit(1),
            Err(CrmError::RecordNotFound {
                kind: Appointment::KIND,
                id: 1
            })
        );
        assert!(screen.delete(1).is_err());
        assert_eq!(screen.ledger().len(), 2, "filter must not remove rows");

        screen.edit(2).expect("appointment 2 belongs to patient 2");
    }

    #[test]
    fn test_dangling_patient_shows_blank_name() {
        let mut patients = seed::patients(SeedMode::Demo);
        let screen = RecordScreen::new(seed::medical_records(SeedMode::Demo));
        assert!(patients.remove(2));

        let ScreenView::Table(view) = screen.view(&patients) else {
            panic!("ledger screen should render a table");
        };
        assert_eq!(view.table.rows.len(), 2, "no cascade on patient delete");
        assert_eq!(view.table.rows[0].cells[0], "John Doe");
        assert_eq!(view.table.rows[1].cells[0], "");
    }

    #[test]
    fn test_view_carries_filter_and_patient_options() {
        let patients = seed::patients(SeedMode::Demo);
        let mut screen = RecordScreen::new(seed::prescriptions(SeedMode::Demo));
        screen.set_filter(PatientFilter::Patient(1));

        let ScreenView::Table(view) = screen.view(&patients) else {
            panic!("ledger screen should render a table");
        };
        assert_eq!(view.form.heading, "Add New Prescription");
        let filter = view.filter.expect("prescriptions have a filter");
        assert_eq!(filter.heading, "Filter Prescriptions");
        assert_eq!(filter.selected, PatientFilter::Patient(1));
        assert_eq!(filter.options.len(), 3);
        assert_eq!(filter.options[0].label, "All Patients");
        assert_eq!(view.table.rows.len(), 1);
        assert_eq!(
            view.table.columns,
            vec!["Patient", "Date", "Medication", "Dosage", "Instructions"]
        );

        let select = &view.form.inputs[0];
        assert_eq!(select.name, "patientId");
        assert_eq!(select.options[0].label, "Select Patient");
        assert_eq!(select.options[2].label, "Jane Smith");
    }
}
