//! Per-screen patient filter.

use crate::constants::FILTER_ALL;
use crate::error::{CrmError, CrmResult};
use crate::record::{PatientId, PatientLinked};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Narrows a ledger table to one patient. A view-only projection: the ledger itself
/// is never modified by filtering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "type", content = "patientId")]
pub enum PatientFilter {
    #[default]
    All,
    Patient(PatientId),
}

impl PatientFilter {
    pub fn matches<T: PatientLinked>(&self, entry: &T) -> bool {
        match self {
            PatientFilter::All => true,
            PatientFilter::Patient(id) => entry.patient_id() == *id,
        }
    }

    /// Entries passing the filter, in list order.
    pub fn apply<'a, T: PatientLinked>(&self, entries: &'a [T]) -> Vec<&'a T> {
        entries.iter().filter(|e| self.matches(*e)).collect()
    }
}

impl FromStr for PatientFilter {
    type Err = CrmError;

    fn from_str(s: &str) -> CrmResult<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case(FILTER_ALL) {
            return Ok(PatientFilter::All);
        }
        s.parse::<PatientId>()
            .map(PatientFilter::Patient)
            .map_err(|_| CrmError::InvalidFilter(s.to_owned()))
    }
}

impl fmt::Display for PatientFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatientFilter::All => f.write_str(FILTER_ALL),
            PatientFilter::Patient(id) => write!(f, "{id}"),
        }
    }
}
