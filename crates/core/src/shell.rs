//! The composition root.
//!
//! The shell owns the patient list and the currently mounted screen. It is the
//! only owner of patient state: the patient screen gets it mutably while it is
//! dispatched to, ledger screens only ever get a shared borrow.
//!
//! Ledger screens keep their lists locally. Navigating to another path unmounts
//! the screen, so coming back mounts a fresh one from the seed data. Navigating
//! to the path already shown keeps the mounted screen.

use crate::config::CoreConfig;
use crate::constants::WELCOME_PREFIX;
use crate::entities::{Appointment, MedicalRecord, Patient, Prescription};
use crate::error::{CrmError, CrmResult};
use crate::filter::PatientFilter;
use crate::form::Submission;
use crate::ledger::Ledger;
use crate::record::RecordId;
use crate::router::Route;
use crate::screens::{PatientScreen, RecordScreen};
use crate::seed;
use crate::view::{NavLink, ScreenView, View};

/// The screen currently mounted in the main area.
#[derive(Clone, Debug, PartialEq)]
pub enum ActiveScreen {
    Welcome,
    Patients(PatientScreen),
    MedicalRecords(RecordScreen<MedicalRecord>),
    Prescriptions(RecordScreen<Prescription>),
    Appointments(RecordScreen<Appointment>),
    /// The path matched no route; nothing is rendered.
    NotFound,
}

#[derive(Clone, Debug)]
pub struct Shell {
    cfg: CoreConfig,
    patients: Ledger<Patient>,
    path: String,
    route: Option<Route>,
    active: ActiveScreen,
}

impl Shell {
    /// Seeds the patient list and mounts the configured start path.
    pub fn new(cfg: CoreConfig) -> Self {
        let patients = seed::patients(cfg.seed_mode());
        let start_path = cfg.start_path().to_owned();
        let mut shell = Self {
            cfg,
            patients,
            path: String::new(),
            route: None,
            active: ActiveScreen::NotFound,
        };
        shell.mount(&start_path);
        shell
    }

    pub fn config(&self) -> &CoreConfig {
        &self.cfg
    }

    pub fn patients(&self) -> &Ledger<Patient> {
        &self.patients
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn route(&self) -> Option<Route> {
        self.route
    }

    pub fn active(&self) -> &ActiveScreen {
        &self.active
    }

    /// Switches the main area to the screen for `path`.
    pub fn navigate(&mut self, path: &str) -> Option<Route> {
        let route = Route::resolve(path);
        if route.is_some() && route == self.route {
            tracing::debug!("already on {}", path.trim());
            return route;
        }
        self.mount(path)
    }

    fn mount(&mut self, path: &str) -> Option<Route> {
        let route = Route::resolve(path);
        let seed_mode = self.cfg.seed_mode();
        self.active = match route {
            Some(Route::Welcome) => ActiveScreen::Welcome,
            Some(Route::Patients) => ActiveScreen::Patients(PatientScreen::new()),
            Some(Route::MedicalRecords) => {
                ActiveScreen::MedicalRecords(RecordScreen::new(seed::medical_records(seed_mode)))
            }
            Some(Route::Prescriptions) => {
                ActiveScreen::Prescriptions(RecordScreen::new(seed::prescriptions(seed_mode)))
            }
            Some(Route::Appointments) => {
                ActiveScreen::Appointments(RecordScreen::new(seed::appointments(seed_mode)))
            }
            None => ActiveScreen::NotFound,
        };
        self.path = path.trim().to_owned();
        self.route = route;

        match route {
            Some(route) => tracing::info!("navigated to {}", route.path()),
            None => tracing::warn!("no route matches {}", self.path),
        }
        route
    }

    pub fn set_field(&mut self, name: &str, raw: &str) -> CrmResult<()> {
        let path = self.path.clone();
        match &mut self.active {
            ActiveScreen::Patients(screen) => screen.set_field(name, raw),
            ActiveScreen::MedicalRecords(screen) => screen.set_field(name, raw),
            ActiveScreen::Prescriptions(screen) => screen.set_field(name, raw),
            ActiveScreen::Appointments(screen) => screen.set_field(name, raw),
            ActiveScreen::Welcome | ActiveScreen::NotFound => Err(CrmError::NoForm { path }),
        }
    }

    /// Presses the form's submit button: create or update depending on the mode.
    pub fn submit(&mut self) -> CrmResult<Submission> {
        let path = self.path.clone();
        match &mut self.active {
            ActiveScreen::Patients(screen) => Ok(screen.submit(&mut self.patients)),
            ActiveScreen::MedicalRecords(screen) => Ok(screen.submit()),
            ActiveScreen::Prescriptions(screen) => Ok(screen.submit()),
            ActiveScreen::Appointments(screen) => Ok(screen.submit()),
            ActiveScreen::Welcome | ActiveScreen::NotFound => Err(CrmError::NoForm { path }),
        }
    }

    /// Presses the edit button of a displayed row.
    pub fn edit(&mut self, id: RecordId) -> CrmResult<()> {
        let path = self.path.clone();
        match &mut self.active {
            ActiveScreen::Patients(screen) => screen.edit(&self.patients, id),
            ActiveScreen::MedicalRecords(screen) => screen.edit(id),
            ActiveScreen::Prescriptions(screen) => screen.edit(id),
            ActiveScreen::Appointments(screen) => screen.edit(id),
            ActiveScreen::Welcome | ActiveScreen::NotFound => Err(CrmError::NoForm { path }),
        }
    }

    /// Presses the delete button of a displayed row.
    pub fn delete(&mut self, id: RecordId) -> CrmResult<()> {
        let path = self.path.clone();
        match &mut self.active {
            ActiveScreen::Patients(screen) => screen.delete(&mut self.patients, id),
            ActiveScreen::MedicalRecords(screen) => screen.delete(id),
            ActiveScreen::Prescriptions(screen) => screen.delete(id),
            ActiveScreen::Appointments(screen) => screen.delete(id),
            ActiveScreen::Welcome | ActiveScreen::NotFound => Err(CrmError::NoForm { path }),
        }
    }

    pub fn set_filter(&mut self, filter: PatientFilter) -> CrmResult<()> {
        let path = self.path.clone();
        match &mut self.active {
            ActiveScreen::MedicalRecords(screen) => screen.set_filter(filter),
            ActiveScreen::Prescriptions(screen) => screen.set_filter(filter),
            ActiveScreen::Appointments(screen) => screen.set_filter(filter),
            ActiveScreen::Patients(_) | ActiveScreen::Welcome | ActiveScreen::NotFound => {
                return Err(CrmError::NoFilter { path });
            }
        }
        Ok(())
    }

    pub fn view(&self) -> View {
        let screen = match &self.active {
            ActiveScreen::Welcome => ScreenView::Welcome {
                heading: format!("{WELCOME_PREFIX} {}", self.cfg.app_title()),
            },
            ActiveScreen::Patients(screen) => screen.view(&self.patients),
            ActiveScreen::MedicalRecords(screen) => screen.view(&self.patients),
            ActiveScreen::Prescriptions(screen) => screen.view(&self.patients),
            ActiveScreen::Appointments(screen) => screen.view(&self.patients),
            ActiveScreen::NotFound => ScreenView::NotFound {
                path: self.path.clone(),
            },
        };

        View {
            title: self.cfg.app_title().to_string(),
            path: self.path.clone(),
            nav: NavLink::sidebar(self.route),
            screen,
        }
    }
}
