//! Constants used throughout the Hospital CRM core crate.
//!
//! Paths and user-facing labels live here so the router, the views and the
//! console agree on them.

/// Default application title shown at the top of the sidebar.
pub const DEFAULT_APP_TITLE: &str = "Hospital CRM";

/// Start of the heading on the root path; the app title follows it.
pub const WELCOME_PREFIX: &str = "Welcome to";

/// Root path, rendering the welcome view.
pub const WELCOME_PATH: &str = "/";

/// Path of the patient registry screen.
pub const PATIENTS_PATH: &str = "/patients";

/// Path of the medical record ledger screen.
pub const MEDICAL_RECORDS_PATH: &str = "/medical-records";

/// Path of the prescription ledger screen.
pub const PRESCRIPTIONS_PATH: &str = "/prescriptions";

/// Path of the appointment ledger screen.
pub const APPOINTMENTS_PATH: &str = "/appointments";

/// Value of the patient filter that shows every row.
pub const FILTER_ALL: &str = "all";

/// Label of the "all" option in the patient filter select.
pub const FILTER_ALL_LABEL: &str = "All Patients";

/// Label of the empty option in the patient select of a ledger form.
pub const SELECT_PATIENT_LABEL: &str = "Select Patient";

/// Column header shared by every table's action column.
pub const ACTIONS_COLUMN: &str = "Actions";
