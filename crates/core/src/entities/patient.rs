use crate::record::{display_int, parse_int, Entry, EntryKind, FieldKind, FieldName, Fields, RecordId};
use serde::{Deserialize, Serialize};

/// A registered patient. The root entity every ledger entry points at.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: RecordId,
    #[serde(flatten)]
    pub fields: PatientFields,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientFields {
    pub name: String,
    /// 0 when unset or unparseable. Signed input is kept as typed.
    pub age: i64,
    pub gender: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PatientField {
    Name,
    Age,
    Gender,
}

impl Patient {
    pub fn name(&self) -> &str {
        &self.fields.name
    }
}

impl FieldName for PatientField {
    const ALL: &'static [Self] = &[Self::Name, Self::Age, Self::Gender];

    fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Age => "age",
            Self::Gender => "gender",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Age => "Age",
            Self::Gender => "Gender",
        }
    }

    fn kind(self) -> FieldKind {
        match self {
            Self::Age => FieldKind::Number,
            Self::Name | Self::Gender => FieldKind::Text,
        }
    }
}

impl Fields for PatientFields {
    type Field = PatientField;

    fn set(&mut self, field: PatientField, raw: &str) {
        match field {
            PatientField::Name => self.name = raw.to_owned(),
            PatientField::Age => self.age = parse_int(raw),
            PatientField::Gender => self.gender = raw.to_owned(),
        }
    }

    fn get(&self, field: PatientField) -> String {
        match field {
            PatientField::Name => self.name.clone(),
            PatientField::Age => display_int(self.age),
            PatientField::Gender => self.gender.clone(),
        }
    }

    fn is_complete(&self) -> bool {
        !self.name.is_empty() && self.age != 0 && !self.gender.is_empty()
    }
}

impl Entry for Patient {
    type Fields = PatientFields;

    const KIND: EntryKind = EntryKind::Patient;

    fn new(id: RecordId, fields: PatientFields) -> Self {
        Self { id, fields }
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn fields(&self) -> &PatientFields {
        &self.fields
    }

    fn fields_mut(&mut self) -> &mut PatientFields {
        &mut self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> PatientFields {
        PatientFields {
            name: "John Doe".into(),
            age: 35,
            gender: "Male".into(),
        }
    }

    #[test]
    fn test_from_draft_requires_every_field() {
        assert!(Patient::from_draft(1, &complete()).is_some());

        let mut missing_name = complete();
        missing_name.name.clear();
        assert!(Patient::from_draft(1, &missing_name).is_none());

        let mut missing_age = complete();
        missing_age.set(PatientField::Age, "old");
        assert_eq!(missing_age.age, 0);
        assert!(Patient::from_draft(1, &missing_age).is_none());

        let mut missing_gender = complete();
        missing_gender.gender.clear();
        assert!(Patient::from_draft(1, &missing_gender).is_none());
    }

    #[test]
    fn test_whitespace_name_counts_as_entered() {
        let mut draft = complete();
        draft.set(PatientField::Name, "   ");
        assert!(draft.is_complete());
        assert_eq!(
            Patient::from_draft(3, &draft).map(|p| p.fields.name),
            Some("   ".to_owned())
        );
    }

    #[test]
    fn test_negative_and_large_ages_are_entered_values() {
        let mut draft = complete();
        draft.set(PatientField::Age, "-5");
        assert_eq!(draft.age, -5);
        assert!(draft.is_complete());
        assert_eq!(draft.get(PatientField::Age), "-5");

        draft.set(PatientField::Age, "5000000000");
        assert_eq!(draft.age, 5_000_000_000);
        assert!(Patient::from_draft(3, &draft).is_some());
    }

    #[test]
    fn test_serialises_flat() {
        let patient = Patient::new(1, complete());
        let json = serde_json::to_value(&patient).expect("patient should serialise");
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "name": "John Doe", "age": 35, "gender": "Male"})
        );
    }
}
