use form_sheets_forwarder::{
    adapters::{
        config::app_config::AppConfig, sheets::spreadsheet_manager::SpreadsheetManager,
    },
    application::forwarder::SubmissionForwarder,
    ports::event_handler::SubmissionHandler,
};

use std::sync::Arc;

pub struct ForwarderFactory;

impl ForwarderFactory {
    /// Authenticates once. On failure forwarding stays disabled for the rest of the process.
    pub async fn create(config: &AppConfig) -> Arc<dyn SubmissionHandler> {
        let forwarder = match SpreadsheetManager::connect(config.sheets.clone()).await {
            Ok(spreadsheet_manager) => SubmissionForwarder::new(Arc::new(spreadsheet_manager))
                .serialize_per_spreadsheet(config.forwarder.serialize_per_spreadsheet),
            Err(report) => {
                tracing::error!(
                    "⚠️ Google authentication error, submissions will not be forwarded: {:?}",
                    report
                );
                SubmissionForwarder::disabled()
            }
        };

        Arc::new(forwarder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[tokio::test]
    async fn test_failed_startup_disables_forwarding() {
        let mut config = AppConfig::default();
        config.sheets.credentials_path =
            Some(PathBuf::from("/nonexistent/form-sheets-forwarder/credentials.json"));

        let handler = ForwarderFactory::create(&config).await;

        assert!(!handler.is_available());
    }
}
