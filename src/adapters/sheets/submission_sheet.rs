use error_stack::ResultExt;
use google_sheets4::api::ValueRange;
use serde_json::Value;

use crate::domain::sheets::{a1_notation::A1Notation, ranges::Ranges};
use crate::ports::submission_sheet::{SheetError, SubmissionSheet};

use super::{
    spreadsheet_manager::SpreadsheetManager,
    spreadsheet_read::SpreadsheetRead,
    spreadsheet_write::{SpreadsheetWrite, ValueInputOption},
    value_range_factory::ValueRangeFactory,
};

/// Everything a values write needs besides the spreadsheet id.
#[derive(Debug, Clone)]
pub struct SheetRequest {
    pub range: A1Notation,
    pub value_range: ValueRange,
    pub input_option: ValueInputOption,
}

/// Header labels are stored verbatim over row 1.
pub fn header_write_request(ranges: &Ranges, header: &[String]) -> SheetRequest {
    let range = ranges.header();
    SheetRequest {
        value_range: ValueRange::from_labels(&range, header),
        range,
        input_option: ValueInputOption::Raw,
    }
}

/// Rows go after the last used row and are parsed as if typed by a user.
pub fn row_append_request(ranges: &Ranges, row: Vec<Value>) -> SheetRequest {
    SheetRequest {
        range: ranges.append_target(),
        value_range: ValueRange::from_single_row(row),
        input_option: ValueInputOption::UserEntered,
    }
}

#[async_trait::async_trait]
impl SubmissionSheet for SpreadsheetManager {
    async fn read_header(
        &self,
        spreadsheet_id: &str,
    ) -> error_stack::Result<Vec<String>, SheetError> {
        let range = self.ranges().header();
        let rows = self
            .read_rows(spreadsheet_id, &range)
            .await
            .change_context(SheetError::ReadHeader)?;

        Ok(rows.into_iter().next().unwrap_or_default())
    }

    async fn write_header(
        &self,
        spreadsheet_id: &str,
        header: &[String],
    ) -> error_stack::Result<(), SheetError> {
        let request = header_write_request(&self.ranges(), header);

        self.write_range(
            spreadsheet_id,
            &request.range,
            request.value_range,
            request.input_option,
        )
        .await
        .change_context(SheetError::WriteHeader)
    }

    async fn append_row(
        &self,
        spreadsheet_id: &str,
        row: Vec<Value>,
    ) -> error_stack::Result<(), SheetError> {
        let request = row_append_request(&self.ranges(), row);

        self.append_range(
            spreadsheet_id,
            &request.range,
            request.value_range,
            request.input_option,
        )
        .await
        .change_context(SheetError::AppendRow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_header_write_request() {
        let header = vec!["Name".to_string(), "Email".to_string()];

        let request = header_write_request(&Ranges::new("Responses"), &header);

        assert_eq!(request.range.as_ref(), "'Responses'!1:1");
        assert_eq!(request.input_option, ValueInputOption::Raw);
        assert_eq!(
            request.value_range.range,
            Some("'Responses'!1:1".to_string())
        );
        assert_eq!(
            request.value_range.values,
            Some(vec![vec![json!("Name"), json!("Email")]])
        );
    }

    #[test]
    fn test_row_append_request() {
        let row = vec![json!("Ann"), json!(""), json!(555)];

        let request = row_append_request(&Ranges::default(), row.clone());

        assert_eq!(request.range.as_ref(), "'Sheet1'");
        assert_eq!(request.input_option, ValueInputOption::UserEntered);
        assert_eq!(request.value_range.range, None);
        assert_eq!(request.value_range.major_dimension, Some("ROWS".to_string()));
        assert_eq!(request.value_range.values, Some(vec![row]));
    }
}
