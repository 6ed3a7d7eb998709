//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the
//! [`crate::Shell`]. Nothing in the core reads environment variables; the
//! binaries read them and hand the raw values to the helpers below.

use crate::constants::{DEFAULT_APP_TITLE, WELCOME_PATH};
use crate::error::{CrmError, CrmResult};
use crate::seed::SeedMode;
use std::fmt;

/// The application title: trimmed, never blank.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppTitle(String);

impl AppTitle {
    /// # Errors
    ///
    /// Returns `CrmError::BlankTitle` if the trimmed input is empty.
    pub fn new(input: &str) -> CrmResult<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(CrmError::BlankTitle);
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Core configuration resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoreConfig {
    app_title: AppTitle,
    seed_mode: SeedMode,
    start_path: String,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns `CrmError::InvalidInput` if `start_path` is not absolute.
    pub fn new(app_title: AppTitle, seed_mode: SeedMode, start_path: String) -> CrmResult<Self> {
        let start_path = start_path.trim().to_owned();
        if !start_path.starts_with('/') {
            return Err(CrmError::InvalidInput(format!(
                "start path must begin with '/': {start_path:?}"
            )));
        }

        Ok(Self {
            app_title,
            seed_mode,
            start_path,
        })
    }

    /// Builds a config from raw, possibly unset values (`HCRM_TITLE`, `HCRM_SEED`,
    /// `HCRM_START_PATH`), applying the defaults for anything missing or blank.
    pub fn from_env_values(
        app_title: Option<String>,
        seed_mode: Option<String>,
        start_path: Option<String>,
    ) -> CrmResult<Self> {
        Self::new(
            app_title_from_env_value(app_title)?,
            seed_mode_from_env_value(seed_mode)?,
            start_path_from_env_value(start_path),
        )
    }

    pub fn app_title(&self) -> &AppTitle {
        &self.app_title
    }

    pub fn seed_mode(&self) -> SeedMode {
        self.seed_mode
    }

    pub fn start_path(&self) -> &str {
        &self.start_path
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse the seed mode from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`SeedMode::Demo`].
pub fn seed_mode_from_env_value(value: Option<String>) -> CrmResult<SeedMode> {
    let parsed = non_blank(value).map(|v| v.parse::<SeedMode>()).transpose()?;
    Ok(parsed.unwrap_or_default())
}

/// Parse the application title from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns the default title.
pub fn app_title_from_env_value(value: Option<String>) -> CrmResult<AppTitle> {
    let title = non_blank(value).unwrap_or_else(|| DEFAULT_APP_TITLE.to_owned());
    AppTitle::new(&title)
}

/// Parse the initial path from an optional string value, defaulting to `/`.
pub fn start_path_from_env_value(value: Option<String>) -> String {
    non_blank(value).unwrap_or_else(|| WELCOME_PATH.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_title_is_trimmed_and_never_blank() {
        let title = AppTitle::new("  St Elsewhere ").expect("padded title should be accepted");
        assert_eq!(title.as_str(), "St Elsewhere");
        assert_eq!(title.to_string(), "St Elsewhere");
        assert_eq!(AppTitle::new(" \t"), Err(CrmError::BlankTitle));
    }

    #[test]
    fn test_defaults_when_unset_or_blank() {
        assert_eq!(seed_mode_from_env_value(None), Ok(SeedMode::Demo));
        assert_eq!(seed_mode_from_env_value(Some("  ".into())), Ok(SeedMode::Demo));
        assert_eq!(
            app_title_from_env_value(Some("".into()))
                .expect("blank title falls back to default")
                .as_str(),
            "Hospital CRM"
        );
        assert_eq!(start_path_from_env_value(None), "/");
    }

    #[test]
    fn test_env_values_are_parsed() {
        assert_eq!(seed_mode_from_env_value(Some("empty".into())), Ok(SeedMode::Empty));
        assert!(seed_mode_from_env_value(Some("lots".into())).is_err());
        assert_eq!(
            app_title_from_env_value(Some(" St Elsewhere ".into()))
                .expect("title should parse")
                .as_str(),
            "St Elsewhere"
        );
    }

    #[test]
    fn test_new_rejects_relative_start_path() {
        let title = AppTitle::new("Hospital CRM").expect("title is non-empty");
        let err = CoreConfig::new(title.clone(), SeedMode::Demo, "patients".into())
            .expect_err("relative path should be rejected");
        assert!(matches!(err, CrmError::InvalidInput(_)));

        let cfg = CoreConfig::new(title, SeedMode::Empty, " /appointments ".into())
            .expect("absolute path should be accepted");
        assert_eq!(cfg.start_path(), "/appointments");
        assert_eq!(cfg.seed_mode(), SeedMode::Empty);
    }

    #[test]
    fn test_from_env_values_with_nothing_set() {
        let cfg = CoreConfig::from_env_values(None, None, None)
            .expect("defaults should always be valid");
        assert_eq!(cfg.app_title().as_str(), "Hospital CRM");
        assert_eq!(cfg.seed_mode(), SeedMode::Demo);
        assert_eq!(cfg.start_path(), "/");
    }
}
