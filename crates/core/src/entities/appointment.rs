use crate::record::{
    display_int, parse_patient_id, Entry, EntryKind, FieldKind, FieldName, Fields, PatientId,
    PatientLinked, RecordId,
};
use serde::{Deserialize, Serialize};

/// A scheduled visit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: RecordId,
    #[serde(flatten)]
    pub fields: AppointmentFields,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentFields {
    pub patient_id: PatientId,
    pub date: String,
    /// `HH:MM`, stored as entered.
    pub time: String,
    pub reason: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppointmentField {
    PatientId,
    Date,
    Time,
    Reason,
}

impl FieldName for AppointmentField {
    const ALL: &'static [Self] = &[Self::PatientId, Self::Date, Self::Time, Self::Reason];

    fn name(self) -> &'static str {
        match self {
            Self::PatientId => "patientId",
            Self::Date => "date",
            Self::Time => "time",
            Self::Reason => "reason",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::PatientId => "Patient",
            Self::Date => "Date",
            Self::Time => "Time",
            Self::Reason => "Reason",
        }
    }

    fn kind(self) -> FieldKind {
        match self {
            Self::PatientId => FieldKind::PatientSelect,
            Self::Date => FieldKind::Date,
            Self::Time => FieldKind::Time,
            Self::Reason => FieldKind::TextArea,
        }
    }
}

impl Fields for AppointmentFields {
    type Field = AppointmentField;

    fn set(&mut self, field: AppointmentField, raw: &str) {
        match field {
            AppointmentField::PatientId => self.patient_id = parse_patient_id(raw),
            AppointmentField::Date => self.date = raw.to_owned(),
            AppointmentField::Time => self.time = raw.to_owned(),
            AppointmentField::Reason => self.reason = raw.to_owned(),
        }
    }

    fn get(&self, field: AppointmentField) -> String {
        match field {
            AppointmentField::PatientId => display_int(self.patient_id),
            AppointmentField::Date => self.date.clone(),
            AppointmentField::Time => self.time.clone(),
            AppointmentField::Reason => self.reason.clone(),
        }
    }

    fn is_complete(&self) -> bool {
        self.patient_id != 0
            && !self.date.is_empty()
            && !self.time.is_empty()
            && !self.reason.is_empty()
    }
}

impl Entry for Appointment {
    type Fields = AppointmentFields;

    const KIND: EntryKind = EntryKind::Appointment;

    fn new(id: RecordId, fields: AppointmentFields) -> Self {
        Self { id, fields }
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn fields(&self) -> &AppointmentFields {
        &self.fields
    }

    fn fields_mut(&mut self) -> &mut AppointmentFields {
        &mut self.fields
    }
}

impl PatientLinked for Appointment {
    fn patient_id(&self) -> PatientId {
        self.fields.patient_id
    }
}
