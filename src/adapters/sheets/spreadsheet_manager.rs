use error_stack::ResultExt;
use google_sheets4::Sheets;
use std::fmt::Debug;
use thiserror::Error;
use tracing::instrument;

use crate::adapters::config::sheets_config::SpreadsheetConfig;
use crate::domain::sheets::ranges::Ranges;

use super::{
    auth::{self},
    http_client::{self, HttpsConnector},
};

/// Authenticated Sheets hub, shared by every submission for the life of the process.
pub struct SpreadsheetManager {
    pub config: SpreadsheetConfig,
    pub(super) hub: Sheets<HttpsConnector>,
}

impl Debug for SpreadsheetManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SpreadsheetManager {{ config: {:?} }}", self.config)
    }
}

#[derive(Error, Debug)]
pub enum SpreadsheetManagerError {
    #[error("Failed to authenticate with Google Sheets")]
    AuthenticationFailed,
    #[error("Failed to fetch range")]
    FailedToFetchRange,
    #[error("Failed to write range")]
    FailedToWriteRange,
    #[error("Failed to append to range")]
    FailedToAppendRange,
}

impl SpreadsheetManager {
    /// Authenticates once. There is no retry: a failure here is final for the process.
    #[instrument(name = "SpreadsheetManager::connect")]
    pub async fn connect(
        config: SpreadsheetConfig,
    ) -> error_stack::Result<Self, SpreadsheetManagerError> {
        let priv_key_path = config.resolve_credentials_path();
        let client = http_client::http_client()
            .change_context(SpreadsheetManagerError::AuthenticationFailed)?;
        let auth = auth::auth(&priv_key_path, client.clone())
            .await
            .change_context(SpreadsheetManagerError::AuthenticationFailed)?;
        let hub = Sheets::new(client, auth);

        tracing::info!(
            credentials = %priv_key_path.display(),
            worksheet = %config.worksheet,
            "Authenticated with Google Sheets"
        );

        Ok(SpreadsheetManager { config, hub })
    }

    pub fn ranges(&self) -> Ranges {
        self.config.ranges()
    }
}
