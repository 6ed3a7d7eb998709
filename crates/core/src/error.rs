use crate::record::EntryKind;

/// Errors raised by the shell when a command cannot be applied to the active screen.
///
/// CRUD outcomes are never errors: a create with missing fields, an update with
/// nothing to update or a delete of an unknown id are silent no-ops reported via
/// [`crate::Submission`] or a `bool`.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CrmError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("unknown {kind} field: {name}")]
    UnknownField { kind: EntryKind, name: String },
    #[error("no {kind} with id {id} is listed")]
    RecordNotFound { kind: EntryKind, id: u32 },
    #[error("the {path} view has no form")]
    NoForm { path: String },
    #[error("the {path} view has no patient filter")]
    NoFilter { path: String },
    #[error("invalid patient filter: {0}")]
    InvalidFilter(String),
    #[error("invalid seed mode: {0}")]
    InvalidSeedMode(String),
    #[error("application title cannot be blank")]
    BlankTitle,
}

pub type CrmResult<T> = std::result::Result<T, CrmError>;
