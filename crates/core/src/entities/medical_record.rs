use crate::record::{
    display_int, parse_patient_id, Entry, EntryKind, FieldKind, FieldName, Fields, PatientId,
    PatientLinked, RecordId,
};
use serde::{Deserialize, Serialize};

/// A diagnosis and the treatment given for it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalRecord {
    pub id: RecordId,
    #[serde(flatten)]
    pub fields: MedicalRecordFields,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecordFields {
    pub patient_id: PatientId,
    /// ISO date (`YYYY-MM-DD`), stored as entered.
    pub date: String,
    pub diagnosis: String,
    pub treatment: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MedicalRecordField {
    PatientId,
    Date,
    Diagnosis,
    Treatment,
}

impl FieldName for MedicalRecordField {
    const ALL: &'static [Self] = &[Self::PatientId, Self::Date, Self::Diagnosis, Self::Treatment];

    fn name(self) -> &'static str {
        match self {
            Self::PatientId => "patientId",
            Self::Date => "date",
            Self::Diagnosis => "diagnosis",
            Self::Treatment => "treatment",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::PatientId => "Patient",
            Self::Date => "Date",
            Self::Diagnosis => "Diagnosis",
            Self::Treatment => "Treatment",
        }
    }

    fn kind(self) -> FieldKind {
        match self {
            Self::PatientId => FieldKind::PatientSelect,
            Self::Date => FieldKind::Date,
            Self::Diagnosis => FieldKind::Text,
            Self::Treatment => FieldKind::TextArea,
        }
    }
}

impl Fields for MedicalRecordFields {
    type Field = MedicalRecordField;

    fn set(&mut self, field: MedicalRecordField, raw: &str) {
        match field {
            MedicalRecordField::PatientId => self.patient_id = parse_patient_id(raw),
            MedicalRecordField::Date => self.date = raw.to_owned(),
            MedicalRecordField::Diagnosis => self.diagnosis = raw.to_owned(),
            MedicalRecordField::Treatment => self.treatment = raw.to_owned(),
        }
    }

    fn get(&self, field: MedicalRecordField) -> String {
        match field {
            MedicalRecordField::PatientId => display_int(self.patient_id),
            MedicalRecordField::Date => self.date.clone(),
            MedicalRecordField::Diagnosis => self.diagnosis.clone(),
            MedicalRecordField::Treatment => self.treatment.clone(),
        }
    }

    fn is_complete(&self) -> bool {
        self.patient_id != 0
            && !self.date.is_empty()
            && !self.diagnosis.is_empty()
            && !self.treatment.is_empty()
    }
}

impl Entry for MedicalRecord {
    type Fields = MedicalRecordFields;

    const KIND: EntryKind = EntryKind::MedicalRecord;

    fn new(id: RecordId, fields: MedicalRecordFields) -> Self {
        Self { id, fields }
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn fields(&self) -> &MedicalRecordFields {
        &self.fields
    }

    fn fields_mut(&mut self) -> &mut MedicalRecordFields {
        &mut self.fields
    }
}

impl PatientLinked for MedicalRecord {
    fn patient_id(&self) -> PatientId {
        self.fields.patient_id
    }
}
