//! # Hospital CRM Core
//!
//! In-memory state and operations for the Hospital CRM:
//! - Patients, medical records, prescriptions and appointments held in [`Ledger`]s
//! - Create/edit forms with a draft and an edit buffer ([`Form`])
//! - Per-screen patient filters ([`PatientFilter`])
//! - Path routing and the [`Shell`] that owns the patient list and the mounted screen
//! - Serializable [`View`] snapshots for whatever front end draws them
//!
//! Nothing here is persisted and nothing here does I/O. Terminal handling lives in
//! `hcrm-console`; process configuration is read by the binaries and passed in as a
//! [`CoreConfig`].

pub mod config;
pub mod constants;
pub mod entities;
pub mod error;
pub mod filter;
pub mod form;
pub mod ledger;
pub mod record;
pub mod router;
pub mod screens;
pub mod seed;
pub mod shell;
pub mod view;

pub use config::{AppTitle, CoreConfig};
pub use entities::{
    Appointment, AppointmentField, AppointmentFields, MedicalRecord, MedicalRecordField,
    MedicalRecordFields, Patient, PatientField, PatientFields, Prescription, PrescriptionField,
    PrescriptionFields,
};
pub use error::{CrmError, CrmResult};
pub use filter::PatientFilter;
pub use form::{Form, FormMode, Submission};
pub use ledger::Ledger;
pub use record::{Entry, EntryKind, FieldKind, FieldName, Fields, PatientId, PatientLinked, RecordId};
pub use router::Route;
pub use screens::{PatientScreen, RecordScreen};
pub use seed::{SeedData, SeedMode};
pub use shell::{ActiveScreen, Shell};
pub use view::{
    FilterView, FormView, InputView, NavLink, RowView, ScreenView, SelectOption, TableScreenView,
    TableView, View,
};
