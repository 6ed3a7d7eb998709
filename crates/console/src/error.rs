use hcrm_core::CrmError;

/// Errors produced while parsing a command line.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command: {0} (try 'help')")]
    Unknown(String),
    #[error("'{command}' expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[error("'{0}' is not a record id")]
    InvalidId(String),
    #[error("'{0}' is not a patient filter (expected 'all' or a patient id)")]
    InvalidFilter(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error(transparent)]
    Crm(#[from] CrmError),
    #[error("failed to read input: {0}")]
    Read(std::io::Error),
    #[error("failed to write output: {0}")]
    Write(std::io::Error),
    #[error("failed to open script {path}: {source}", path = path.display())]
    ScriptOpen {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize view: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ConsoleError {
    /// Errors the session reports and moves past, as opposed to I/O failures that end it.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ConsoleError::Command(_) | ConsoleError::Crm(_))
    }
}

pub type ConsoleResult<T> = std::result::Result<T, ConsoleError>;
