use error_stack::ResultExt;
use google_sheets4::api::Scope;
use tracing::instrument;

use crate::domain::sheets::a1_notation::A1Notation;

use super::{
    flatten_double_vec::FlattenDoubleVec,
    spreadsheet_manager::{SpreadsheetManager, SpreadsheetManagerError},
    value_range_factory::MAJOR_DIMENSION_ROWS,
};

pub trait SpreadsheetRead {
    /// Rows of the range as text. A range with no values yields no rows.
    fn read_rows(
        &self,
        spreadsheet_id: &str,
        range: &A1Notation,
    ) -> impl std::future::Future<
        Output = error_stack::Result<Vec<Vec<String>>, SpreadsheetManagerError>,
    > + Send;
}

impl SpreadsheetRead for SpreadsheetManager {
    #[instrument]
    async fn read_rows(
        &self,
        spreadsheet_id: &str,
        range: &A1Notation,
    ) -> error_stack::Result<Vec<Vec<String>>, SpreadsheetManagerError> {
        let response = self
            .hub
            .spreadsheets()
            .values_get(spreadsheet_id, range.as_ref())
            .major_dimension(MAJOR_DIMENSION_ROWS)
            .add_scope(Scope::Spreadsheet)
            .doit()
            .await
            .change_context(SpreadsheetManagerError::FailedToFetchRange)
            .attach_printable_lazy(|| format!("Failed to fetch values for range {}", range))?;

        let value_range = response.1;

        Ok(value_range.values.unwrap_or_default().flatten_double_vec())
    }
}
