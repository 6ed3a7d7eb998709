//! Screen state: one form and one table per screen.
//!
//! The patient screen borrows the patient list from the shell mutably; the ledger
//! screens own their own lists and only ever see the patients read-only.

pub mod patients;
pub mod records;

pub use patients::PatientScreen;
pub use records::{LedgerEntry, RecordScreen};

/// User-facing text of a screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenLabels {
    pub title: &'static str,
    pub create_heading: &'static str,
    pub edit_heading: &'static str,
    pub create_label: &'static str,
    pub update_label: &'static str,
    /// `None` on screens without a patient filter.
    pub filter_heading: Option<&'static str>,
}

impl ScreenLabels {
    pub fn heading(&self, editing: bool) -> &'static str {
        if editing {
            self.edit_heading
        } else {
            self.create_heading
        }
    }

    pub fn submit_label(&self, editing: bool) -> &'static str {
        if editing {
            self.update_label
        } else {
            self.create_label
        }
    }
}
