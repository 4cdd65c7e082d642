use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetError {
    #[error("Failed to read header row")]
    ReadHeader,
    #[error("Failed to write header row")]
    WriteHeader,
    #[error("Failed to append row")]
    AppendRow,
}

/// The three calls a submission makes against its spreadsheet, always on the
/// default worksheet.
#[async_trait::async_trait]
pub trait SubmissionSheet: Send + Sync {
    /// Row 1 as text. A sheet without a header row yields an empty vector.
    async fn read_header(
        &self,
        spreadsheet_id: &str,
    ) -> error_stack::Result<Vec<String>, SheetError>;

    /// Overwrites row 1. Values are stored literally.
    async fn write_header(
        &self,
        spreadsheet_id: &str,
        header: &[String],
    ) -> error_stack::Result<(), SheetError>;

    /// Appends after the last used row. Values are parsed as if typed by a user.
    async fn append_row(
        &self,
        spreadsheet_id: &str,
        row: Vec<Value>,
    ) -> error_stack::Result<(), SheetError>;
}
