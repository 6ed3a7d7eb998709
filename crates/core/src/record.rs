//! The contract shared by every entity the CRM manages.
//!
//! Each entity is an id plus a `Fields` value. The same `Fields` type doubles as
//! the draft of a record that does not exist yet, so create, edit and the form
//! buffers all speak one shape per entity.
//!
//! Field updates are addressed by a per-entity enum implementing [`FieldName`]
//! rather than by string key. Strings only appear at the input boundary, where
//! [`parse_field`] maps an input name such as `patientId` onto the enum.

use serde::Serialize;
use std::fmt;

/// Identifier of a record within its own list.
pub type RecordId = u32;

/// Identifier of a patient, as referenced by ledger entries.
pub type PatientId = u32;

/// Which collection an entry belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryKind {
    Patient,
    MedicalRecord,
    Prescription,
    Appointment,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntryKind::Patient => "patient",
            EntryKind::MedicalRecord => "medical record",
            EntryKind::Prescription => "prescription",
            EntryKind::Appointment => "appointment",
        };
        f.write_str(s)
    }
}

/// The input control a field is edited with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    Text,
    Number,
    Date,
    Time,
    TextArea,
    PatientSelect,
}

/// A per-entity enumeration of editable fields.
pub trait FieldName: Copy + Eq + fmt::Debug + 'static {
    /// Every field, in form order.
    const ALL: &'static [Self];

    /// Input name, as used by the form (`patientId`, `diagnosis`, ...).
    fn name(self) -> &'static str;

    /// Placeholder text and table column header.
    fn label(self) -> &'static str;

    fn kind(self) -> FieldKind;
}

/// Looks up a field by its input name.
///
/// Matching ignores ASCII case, `-` and `_`, so `patientId`, `patient_id` and
/// `patient-id` all resolve to the same field.
pub fn parse_field<F: FieldName>(name: &str) -> Option<F> {
    let wanted = normalise_field_name(name);
    F::ALL
        .iter()
        .copied()
        .find(|field| normalise_field_name(field.name()) == wanted)
}

fn normalise_field_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_'))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// The editable body of an entity, without its id.
pub trait Fields: Clone + Default + PartialEq + fmt::Debug + Serialize {
    type Field: FieldName;

    /// Stores a raw input value into one field.
    ///
    /// Numeric fields are parsed with [`parse_int`]; text fields keep the raw value.
    fn set(&mut self, field: Self::Field, raw: &str);

    /// Current value of a field as shown in a form input or table cell.
    fn get(&self, field: Self::Field) -> String;

    /// Required-field check: every field must be present and numeric fields non-zero.
    fn is_complete(&self) -> bool;
}

/// A record held in a [`crate::Ledger`].
pub trait Entry: Clone + PartialEq + fmt::Debug + Serialize {
    type Fields: Fields;

    const KIND: EntryKind;

    fn new(id: RecordId, fields: Self::Fields) -> Self;

    fn id(&self) -> RecordId;

    fn fields(&self) -> &Self::Fields;

    fn fields_mut(&mut self) -> &mut Self::Fields;

    /// Builds a record from a draft, or `None` if a required field is missing.
    fn from_draft(id: RecordId, draft: &Self::Fields) -> Option<Self> {
        draft.is_complete().then(|| Self::new(id, draft.clone()))
    }
}

/// Entries that reference a patient by id.
///
/// The reference is never validated; it may point at a patient that was
/// deleted or never existed.
pub trait PatientLinked {
    fn patient_id(&self) -> PatientId;
}

/// Parses an integer from form input.
///
/// Leading whitespace is skipped, then an optional `+` or `-` sign and the
/// leading run of digits is read; trailing text is ignored (`"42kg"` is 42).
/// Input with no leading digits yields 0, which every required-field check
/// treats as missing. A run of digits too long for an `i64` saturates.
pub fn parse_int(raw: &str) -> i64 {
    let s = raw.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_end = s
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    let digits = &s[..digits_end];
    if digits.is_empty() {
        return 0;
    }

    let signed = if negative {
        format!("-{digits}")
    } else {
        digits.to_owned()
    };
    signed.parse().unwrap_or(if negative { i64::MIN } else { i64::MAX })
}

/// Parses a patient reference from form input.
///
/// The select only ever offers existing patient ids, so anything that is not a
/// positive id in range reads as 0 (no patient chosen).
pub fn parse_patient_id(raw: &str) -> PatientId {
    PatientId::try_from(parse_int(raw)).unwrap_or(0)
}

/// Display form of a numeric field: 0 means unset and shows as blank.
pub(crate) fn display_int(value: impl Into<i64>) -> String {
    match value.into() {
        0 => String::new(),
        value => value.to_string(),
    }
}
