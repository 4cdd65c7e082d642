use error_stack::ResultExt;
use google_sheets4::api::{Scope, ValueRange};
use tracing::instrument;

use crate::domain::sheets::a1_notation::A1Notation;

use super::spreadsheet_manager::{SpreadsheetManager, SpreadsheetManagerError};

const FORMATTED_STRING: &str = "FORMATTED_STRING";
const INSERT_ROWS: &str = "INSERT_ROWS";

/// How the service interprets written values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueInputOption {
    /// Stored exactly as given.
    Raw,
    /// Parsed as if typed into the UI: numbers, dates and formulas are detected.
    UserEntered,
}

impl ValueInputOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueInputOption::Raw => "RAW",
            ValueInputOption::UserEntered => "USER_ENTERED",
        }
    }
}

pub trait SpreadsheetWrite {
    /// Overwrites `range` with the given values.
    fn write_range(
        &self,
        spreadsheet_id: &str,
        range: &A1Notation,
        value_range: ValueRange,
        input_option: ValueInputOption,
    ) -> impl std::future::Future<Output = error_stack::Result<(), SpreadsheetManagerError>> + Send;

    /// Inserts the given rows after the last used row of `range`.
    fn append_range(
        &self,
        spreadsheet_id: &str,
        range: &A1Notation,
        value_range: ValueRange,
        input_option: ValueInputOption,
    ) -> impl std::future::Future<Output = error_stack::Result<(), SpreadsheetManagerError>> + Send;
}

impl SpreadsheetWrite for SpreadsheetManager {
    #[instrument(skip(value_range))]
    async fn write_range(
        &self,
        spreadsheet_id: &str,
        range: &A1Notation,
        value_range: ValueRange,
        input_option: ValueInputOption,
    ) -> error_stack::Result<(), SpreadsheetManagerError> {
        self.hub
            .spreadsheets()
            .values_update(value_range, spreadsheet_id, range.as_ref())
            .value_input_option(input_option.as_str())
            .response_date_time_render_option(FORMATTED_STRING)
            .add_scope(Scope::Spreadsheet)
            .doit()
            .await
            .map(|_| ())
            .change_context(SpreadsheetManagerError::FailedToWriteRange)
            .attach_printable_lazy(|| format!("Failed to write to range {} ", range))
    }

    #[instrument(skip(value_range))]
    async fn append_range(
        &self,
        spreadsheet_id: &str,
        range: &A1Notation,
        value_range: ValueRange,
        input_option: ValueInputOption,
    ) -> error_stack::Result<(), SpreadsheetManagerError> {
        self.hub
            .spreadsheets()
            .values_append(value_range, spreadsheet_id, range.as_ref())
            .value_input_option(input_option.as_str())
            .insert_data_option(INSERT_ROWS)
            .response_date_time_render_option(FORMATTED_STRING)
            .add_scope(Scope::Spreadsheet)
            .doit()
            .await
            .map(|_| ())
            .change_context(SpreadsheetManagerError::FailedToAppendRange)
            .attach_printable_lazy(|| format!("Failed to append to range {} ", range))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_input_options() {
        assert_eq!(ValueInputOption::Raw.as_str(), "RAW");
        assert_eq!(ValueInputOption::UserEntered.as_str(), "USER_ENTERED");
    }
}
