use std::sync::Arc;

use error_stack::{report, ResultExt};
use thiserror::Error;
use tracing::{debug, error, info, instrument, warn};

use crate::domain::{
    form::FormConfig,
    outcome::{ForwardOutcome, SkipReason},
    reconcile::reconcile,
    submission::Submission,
};
use crate::ports::{
    event_handler::{EventError, SubmissionEvent, SubmissionHandler},
    submission_sheet::SubmissionSheet,
};

use super::spreadsheet_locks::SpreadsheetLocks;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ForwardError {
    #[error("Forwarding is enabled but no spreadsheet id is configured")]
    MissingSpreadsheetId,
    #[error("Failed to append submission to spreadsheet {0}")]
    AppendFailed(String),
}

/// Forwards form submissions to their configured spreadsheet.
///
/// Built once at startup. When the spreadsheet service could not be reached
/// then, the forwarder is disabled and every submission is skipped.
pub struct SubmissionForwarder {
    sheet: Option<Arc<dyn SubmissionSheet>>,
    locks: Option<SpreadsheetLocks>,
}

impl std::fmt::Debug for SubmissionForwarder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubmissionForwarder")
            .field("enabled", &self.sheet.is_some())
            .field("serialize_per_spreadsheet", &self.locks.is_some())
            .finish()
    }
}

impl SubmissionForwarder {
    pub fn new(sheet: Arc<dyn SubmissionSheet>) -> Self {
        Self {
            sheet: Some(sheet),
            locks: None,
        }
    }

    pub fn disabled() -> Self {
        Self {
            sheet: None,
            locks: None,
        }
    }

    /// Serializes submissions targeting the same spreadsheet, so concurrent
    /// submissions adding the same column cannot both append it.
    pub fn serialize_per_spreadsheet(mut self, enabled: bool) -> Self {
        self.locks = enabled.then(SpreadsheetLocks::new);
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.sheet.is_some()
    }

    /// Reads the header, grows it with any new fields, then appends the row.
    ///
    /// Header read and write failures are logged and tolerated. An append
    /// failure is returned; a header written earlier in the same call stays.
    #[instrument(skip(self, data), fields(fields = data.len()))]
    pub async fn handle_submission(
        &self,
        form: &FormConfig,
        data: Submission,
    ) -> error_stack::Result<ForwardOutcome, ForwardError> {
        let Some(sheet) = &self.sheet else {
            debug!("Forwarding unavailable, ignoring submission");
            return Ok(ForwardOutcome::Skipped(SkipReason::ForwardingUnavailable));
        };

        if !form.sheet_submissions {
            debug!("Form does not forward submissions");
            return Ok(ForwardOutcome::Skipped(SkipReason::NotEnabledForForm));
        }

        let spreadsheet_id = form
            .spreadsheet_id()
            .ok_or_else(|| report!(ForwardError::MissingSpreadsheetId))?;

        let _guard = match &self.locks {
            Some(locks) => Some(locks.acquire(spreadsheet_id).await),
            None => None,
        };

        let header = match sheet.read_header(spreadsheet_id).await {
            Ok(header) => header,
            Err(report) => {
                error!("Failed to read header row, treating it as empty: {:?}", report);
                Vec::new()
            }
        };

        let reconciliation = reconcile(&header, data);

        if reconciliation.header_changed() {
            info!(
                "Adding columns {:?} to spreadsheet {}",
                reconciliation.added_columns(),
                spreadsheet_id
            );
            if let Err(report) = sheet
                .write_header(spreadsheet_id, &reconciliation.header)
                .await
            {
                warn!(
                    "Failed to write header row, appending the row anyway: {:?}",
                    report
                );
            }
        }

        let columns = reconciliation.row.len();
        let added_columns = reconciliation.added_columns().to_vec();

        sheet
            .append_row(spreadsheet_id, reconciliation.row)
            .await
            .map_err(|report| {
                error!("Failed to append submission: {:?}", report);
                report.change_context(ForwardError::AppendFailed(spreadsheet_id.to_string()))
            })?;

        info!("✅ Submission appended to {}", spreadsheet_id);

        Ok(ForwardOutcome::Forwarded {
            spreadsheet_id: spreadsheet_id.to_string(),
            columns,
            added_columns,
        })
    }
}

#[async_trait::async_trait]
impl SubmissionHandler for SubmissionForwarder {
    #[instrument(skip(self, event))]
    async fn handle(
        &self,
        event: SubmissionEvent,
    ) -> error_stack::Result<ForwardOutcome, EventError> {
        self.handle_submission(&event.form, event.data)
            .await
            .change_context(EventError::ProcessingFailed {
                details: "Failed to forward submission".to_string(),
            })
    }

    fn is_available(&self) -> bool {
        self.is_enabled()
    }
}
