use crate::record::{
    display_int, parse_patient_id, Entry, EntryKind, FieldKind, FieldName, Fields, PatientId,
    PatientLinked, RecordId,
};
use serde::{Deserialize, Serialize};

/// A medication prescribed to a patient.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prescription {
    pub id: RecordId,
    #[serde(flatten)]
    pub fields: PrescriptionFields,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionFields {
    pub patient_id: PatientId,
    pub date: String,
    pub medication: String,
    pub dosage: String,
    pub instructions: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrescriptionField {
    PatientId,
    Date,
    Medication,
    Dosage,
    Instructions,
}

impl FieldName for PrescriptionField {
    const ALL: &'static [Self] = &[
        Self::PatientId,
        Self::Date,
        Self::Medication,
        Self::Dosage,
        Self::Instructions,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::PatientId => "patientId",
            Self::Date => "date",
            Self::Medication => "medication",
            Self::Dosage => "dosage",
            Self::Instructions => "instructions",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::PatientId => "Patient",
            Self::Date => "Date",
            Self::Medication => "Medication",
            Self::Dosage => "Dosage",
            Self::Instructions => "Instructions",
        }
    }

    fn kind(self) -> FieldKind {
        match self {
            Self::PatientId => FieldKind::PatientSelect,
            Self::Date => FieldKind::Date,
            Self::Medication | Self::Dosage => FieldKind::Text,
            Self::Instructions => FieldKind::TextArea,
        }
    }
}

impl Fields for PrescriptionFields {
    type Field = PrescriptionField;

    fn set(&mut self, field: PrescriptionField, raw: &str) {
        match field {
            PrescriptionField::PatientId => self.patient_id = parse_patient_id(raw),
            PrescriptionField::Date => self.date = raw.to_owned(),
            PrescriptionField::Medication => self.medication = raw.to_owned(),
            PrescriptionField::Dosage => self.dosage = raw.to_owned(),
            PrescriptionField::Instructions => self.instructions = raw.to_owned(),
        }
    }

    fn get(&self, field: PrescriptionField) -> String {
        match field {
            PrescriptionField::PatientId => display_int(self.patient_id),
            PrescriptionField::Date => self.date.clone(),
            PrescriptionField::Medication => self.medication.clone(),
            PrescriptionField::Dosage => self.dosage.clone(),
            PrescriptionField::Instructions => self.instructions.clone(),
        }
    }

    fn is_complete(&self) -> bool {
        self.patient_id != 0
            && !self.date.is_empty()
            && !self.medication.is_empty()
            && !self.dosage.is_empty()
            && !self.instructions.is_empty()
    }
}

impl Entry for Prescription {
    type Fields = PrescriptionFields;

    const KIND: EntryKind = EntryKind::Prescription;

    fn new(id: RecordId, fields: PrescriptionFields) -> Self {
        Self { id, fields }
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn fields(&self) -> &PrescriptionFields {
        &self.fields
    }

    fn fields_mut(&mut self) -> &mut PrescriptionFields {
        &mut self.fields
    }
}

impl PatientLinked for Prescription {
    fn patient_id(&self) -> PatientId {
        self.fields.patient_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Ledger;

    fn complete() -> PrescriptionFields {
        PrescriptionFields {
            patient_id: 1,
            date: "2024-03-15".into(),
            medication: "Amoxicillin".into(),
            dosage: "500mg".into(),
            instructions: "Take 3 times a day with food".into(),
        }
    }

    #[test]
    fn test_complete_draft_is_created() {
        let mut ledger: Ledger<Prescription> = Ledger::new();
        assert_eq!(ledger.create(&complete()), Some(1));
        assert_eq!(ledger.create(&complete()), Some(2));

        let first = ledger.get(1).expect("prescription 1 should exist");
        assert_eq!(first.fields, complete());
        assert_eq!(first.patient_id(), 1);
    }

    #[test]
    fn test_each_missing_field_blocks_create() {
        for field in PrescriptionField::ALL {
            let mut ledger: Ledger<Prescription> = Ledger::new();
            let mut draft = complete();
            draft.set(*field, "");

            assert_eq!(
                ledger.create(&draft),
                None,
                "clearing {} should block create",
                field.name()
            );
            assert!(ledger.is_empty());
        }
    }

    #[test]
    fn test_instructions_keep_line_breaks() {
        let mut draft = complete();
        draft.set(PrescriptionField::Instructions, "Morning\nEvening");
        assert_eq!(draft.get(PrescriptionField::Instructions), "Morning\nEvening");
        assert!(draft.is_complete());
    }
}
