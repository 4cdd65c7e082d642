use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::domain::sheets::ranges::{Ranges, DEFAULT_WORKSHEET};

/// Environment variable consulted when no credentials path is configured.
pub const CREDENTIALS_ENV_VAR: &str = "GOOGLE_APPLICATION_CREDENTIALS";
/// Service-account key looked up next to the executable as a last resort.
pub const DEFAULT_CREDENTIALS_FILE: &str = "credentials.json";

#[derive(serde::Deserialize, Debug, Clone)]
pub struct SpreadsheetConfig {
    /// Path to the service-account key (JSON).
    #[serde(default)]
    pub credentials_path: Option<PathBuf>,
    #[serde(default = "default_worksheet")]
    pub worksheet: Box<str>,
}

fn default_worksheet() -> Box<str> {
    DEFAULT_WORKSHEET.into()
}

impl Default for SpreadsheetConfig {
    fn default() -> Self {
        Self {
            credentials_path: None,
            worksheet: default_worksheet(),
        }
    }
}

impl SpreadsheetConfig {
    pub fn ranges(&self) -> Ranges {
        Ranges::new(self.worksheet.as_ref())
    }

    /// The configured path, else `GOOGLE_APPLICATION_CREDENTIALS`, else
    /// `credentials.json` in the executable's directory.
    pub fn resolve_credentials_path(&self) -> PathBuf {
        self.resolve_credentials_path_with(
            std::env::var_os(CREDENTIALS_ENV_VAR),
            std::env::current_exe().ok(),
        )
    }

    fn resolve_credentials_path_with(
        &self,
        env_value: Option<OsString>,
        executable: Option<PathBuf>,
    ) -> PathBuf {
        if let Some(path) = &self.credentials_path {
            return path.clone();
        }

        if let Some(path) = env_value.filter(|value| !value.is_empty()) {
            return PathBuf::from(path);
        }

        executable
            .as_deref()
            .and_then(Path::parent)
            .map(|dir| dir.join(DEFAULT_CREDENTIALS_FILE))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CREDENTIALS_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        let config = SpreadsheetConfig {
            credentials_path: Some(PathBuf::from("/etc/forwarder/key.json")),
            ..Default::default()
        };
        let resolved = config.resolve_credentials_path_with(
            Some(OsString::from("/env/key.json")),
            Some(PathBuf::from("/opt/forwarder/bin/form-sheets-forwarder")),
        );
        assert_eq!(resolved, PathBuf::from("/etc/forwarder/key.json"));
    }

    #[test]
    fn test_env_var_used_when_unset() {
        let config = SpreadsheetConfig::default();
        let resolved = config.resolve_credentials_path_with(
            Some(OsString::from("/env/key.json")),
            Some(PathBuf::from("/opt/forwarder/bin/form-sheets-forwarder")),
        );
        assert_eq!(resolved, PathBuf::from("/env/key.json"));
    }

    #[test]
    fn test_empty_env_var_ignored() {
        let config = SpreadsheetConfig::default();
        let resolved = config.resolve_credentials_path_with(
            Some(OsString::new()),
            Some(PathBuf::from("/opt/forwarder/bin/form-sheets-forwarder")),
        );
        assert_eq!(resolved, PathBuf::from("/opt/forwarder/bin/credentials.json"));
    }

    #[test]
    fn test_falls_back_to_relative_file() {
        let config = SpreadsheetConfig::default();
        let resolved = config.resolve_credentials_path_with(None, None);
        assert_eq!(resolved, PathBuf::from("credentials.json"));
    }

    #[test]
    fn test_default_worksheet_ranges() {
        let config = SpreadsheetConfig::default();
        assert_eq!(config.ranges().header().as_ref(), "'Sheet1'!1:1");
    }
}
