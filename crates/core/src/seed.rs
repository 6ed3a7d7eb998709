//! Initial contents of each list.
//!
//! Ledger screens are rebuilt from here every time they are mounted.

use crate::entities::{
    Appointment, AppointmentFields, MedicalRecord, MedicalRecordFields, Patient, PatientFields,
    Prescription, PrescriptionFields,
};
use crate::error::{CrmError, CrmResult};
use crate::ledger::Ledger;
use crate::record::Entry;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Whether lists start with demo data or empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedMode {
    #[default]
    Demo,
    Empty,
}

impl FromStr for SeedMode {
    type Err = CrmError;

    fn from_str(s: &str) -> CrmResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "demo" => Ok(SeedMode::Demo),
            "empty" => Ok(SeedMode::Empty),
            other => Err(CrmError::InvalidSeedMode(other.to_owned())),
        }
    }
}

impl fmt::Display for SeedMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedMode::Demo => f.write_str("demo"),
            SeedMode::Empty => f.write_str("empty"),
        }
    }
}

/// Everything the demo starts with, for dumping.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedData {
    pub patients: Ledger<Patient>,
    pub medical_records: Ledger<MedicalRecord>,
    pub prescriptions: Ledger<Prescription>,
    pub appointments: Ledger<Appointment>,
}

impl SeedData {
    pub fn load(mode: SeedMode) -> Self {
        Self {
            patients: patients(mode),
            medical_records: medical_records(mode),
            prescriptions: prescriptions(mode),
            appointments: appointments(mode),
        }
    }
}

fn seeded<T: Entry>(mode: SeedMode, demo: impl FnOnce() -> Vec<T>) -> Ledger<T> {
    match mode {
        SeedMode::Demo => Ledger::from_entries(demo()),
        SeedMode::Empty => Ledger::new(),
    }
}

pub fn patients(mode: SeedMode) -> Ledger<Patient> {
    seeded(mode, || {
        vec![
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
        ]
    })
}

pub fn medical_records(mode: SeedMode) -> Ledger<MedicalRecord> {
    seeded(mode, || {
        vec![
            MedicalRecord::new(
                1,
                MedicalRecordFields {
                    patient_id: 1,
                    date: "2024-03-15".into(),
                    diagnosis: "Common Cold".into(),
                    treatment: "Rest and fluids".into(),
                },
            ),
            MedicalRecord::new(
                2,
                MedicalRecordFields {
                    patient_id: 2,
                    date: "2024-03-14".into(),
                    diagnosis: "Sprained Ankle".into(),
                    treatment: "RICE therapy".into(),
                },
            ),
        ]
    })
}

pub fn prescriptions(mode: SeedMode) -> Ledger<Prescription> {
    seeded(mode, || {
        vec![
            Prescription::new(
                1,
                PrescriptionFields {
                    patient_id: 1,
                    date: "2024-03-15".into(),
                    medication: "Amoxicillin".into(),
                    dosage: "500mg".into(),
                    instructions: "Take 3 times a day with food".into(),
                },
            ),
            Prescription::new(
                2,
                PrescriptionFields {
                    patient_id: 2,
                    date: "2024-03-14".into(),
                    medication: "Ibuprofen".into(),
                    dosage: "400mg".into(),
                    instructions: "Take as needed for pain, not exceeding 4 doses per day".into(),
                },
            ),
        ]
    })
}

pub fn appointments(mode: SeedMode) -> Ledger<Appointment> {
    seeded(mode, || {
        vec![
            Appointment::new(
                1,
                AppointmentFields {
                    patient_id: 1,
                    date: "2024-03-20".into(),
                    time: "10:00".into(),
                    reason: "Annual checkup".into(),
                },
            ),
            Appointment::new(
                2,
                AppointmentFields {
                    patient_id: 2,
                    date: "2024-03-21".into(),
                    time: "14:30".into(),
                    reason: "Follow-up appointment".into(),
                },
            ),
        ]
    })
}
