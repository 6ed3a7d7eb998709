//! The four record types: patients and the three patient-linked ledgers.

pub mod appointment;
pub mod medical_record;
pub mod patient;
pub mod prescription;

pub use appointment::{Appointment, AppointmentField, AppointmentFields};
pub use medical_record::{MedicalRecord, MedicalRecordField, MedicalRecordFields};
pub use patient::{Patient, PatientField, PatientFields};
pub use prescription::{Prescription, PrescriptionField, PrescriptionFields};
