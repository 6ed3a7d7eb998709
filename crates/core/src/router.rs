//! Path to screen resolution.

use crate::constants::{
    APPOINTMENTS_PATH, MEDICAL_RECORDS_PATH, PATIENTS_PATH, PRESCRIPTIONS_PATH, WELCOME_PATH,
};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    Welcome,
    Patients,
    MedicalRecords,
    Prescriptions,
    Appointments,
}

impl Route {
    pub const ALL: [Route; 5] = [
        Route::Welcome,
        Route::Patients,
        Route::MedicalRecords,
        Route::Prescriptions,
        Route::Appointments,
    ];

    /// Sidebar order.
    pub const NAV: [Route; 4] = [
        Route::Patients,
        Route::MedicalRecords,
        Route::Prescriptions,
        Route::Appointments,
    ];

    /// Resolves a path to its route. A single trailing slash is ignored;
    /// anything else unknown resolves to `None`.
    pub fn resolve(path: &str) -> Option<Route> {
        let path = path.trim();
        let path = match path.strip_suffix('/') {
            Some(stripped) if !stripped.is_empty() => stripped,
            _ => path,
        };
        Route::ALL.into_iter().find(|route| route.path() == path)
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Welcome => WELCOME_PATH,
            Route::Patients => PATIENTS_PATH,
            Route::MedicalRecords => MEDICAL_RECORDS_PATH,
            Route::Prescriptions => PRESCRIPTIONS_PATH,
            Route::Appointments => APPOINTMENTS_PATH,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::Welcome => "Home",
            Route::Patients => "Patients",
            Route::MedicalRecords => "Medical Records",
            Route::Prescriptions => "Prescriptions",
            Route::Appointments => "Appointments",
        }
    }
}
