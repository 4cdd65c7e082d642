use serde_json::Value;

use super::cell::{empty_cell, to_cell};
use super::submission::Submission;

/// A header row and a data row aligned to it, ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciliation {
    pub header: Vec<String>,
    pub row: Vec<Value>,
    /// Number of columns the header had before reconciliation.
    pub original_len: usize,
}

impl Reconciliation {
    /// True when the header grew and must be persisted before the row is appended.
    pub fn header_changed(&self) -> bool {
        self.header.len() != self.original_len
    }

    pub fn added_columns(&self) -> &[String] {
        &self.header[self.original_len..]
    }
}

/// Lines a submission up with the current header.
///
/// Fields matching an existing column fill that column's slot, columns the
/// submission lacks get an empty cell, and every remaining field is appended
/// as a new column in the submission's field order. Columns are never removed
/// or reordered.
///
/// # Examples
/// ```
/// use form_sheets_forwarder::domain::reconcile::reconcile;
/// use form_sheets_forwarder::domain::submission::Submission;
/// use serde_json::json;
///
/// let header = vec!["Name".to_string(), "Email".to_string()];
/// let submission = Submission::new()
///     .with("Name", "Ann")
///     .with("Email", "a@x.com")
///     .with("Phone", "555");
///
/// let reconciliation = reconcile(&header, submission);
/// assert_eq!(reconciliation.header, vec!["Name", "Email", "Phone"]);
/// assert_eq!(reconciliation.row, vec![json!("Ann"), json!("a@x.com"), json!("555")]);
/// assert!(reconciliation.header_changed());
/// ```
pub fn reconcile(header: &[String], submission: Submission) -> Reconciliation {
    let mut fields: Vec<(String, Option<Value>)> = submission
        .into_fields()
        .into_iter()
        .map(|(name, value)| (name, Some(value)))
        .collect();

    let mut working_header = header.to_vec();
    let mut row = Vec::with_capacity(header.len() + fields.len());

    for column in header {
        // A field fills at most one column, so a duplicated column name only gets the value once.
        let cell = fields
            .iter_mut()
            .find(|(name, value)| name == column && value.is_some())
            .and_then(|(_, value)| value.take());
        row.push(cell.map(to_cell).unwrap_or_else(empty_cell));
    }

    for (name, value) in fields {
        if let Some(value) = value {
            working_header.push(name);
            row.push(to_cell(value));
        }
    }

    Reconciliation {
        header: working_header,
        row,
        original_len: header.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn header(columns: &[&str]) -> Vec<String> {
        columns.iter().map(|column| column.to_string()).collect()
    }

    #[test]
    fn test_known_fields_follow_header_order() {
        let submission = Submission::new()
            .with("Email", "a@x.com")
            .with("Name", "Ann");

        let reconciliation = reconcile(&header(&["Name", "Email"]), submission);

        assert_eq!(reconciliation.header, header(&["Name", "Email"]));
        assert_eq!(reconciliation.row, vec![json!("Ann"), json!("a@x.com")]);
        assert!(!reconciliation.header_changed());
        assert!(reconciliation.added_columns().is_empty());
    }

    #[test]
    fn test_new_field_appends_column() {
        let submission = Submission::new()
            .with("Name", "Ann")
            .with("Email", "a@x.com")
            .with("Phone", "555");

        let reconciliation = reconcile(&header(&["Name", "Email"]), submission);

        assert_eq!(reconciliation.header, header(&["Name", "Email", "Phone"]));
        assert_eq!(
            reconciliation.row,
            vec![json!("Ann"), json!("a@x.com"), json!("555")]
        );
        assert!(reconciliation.header_changed());
        assert_eq!(reconciliation.added_columns(), &["Phone".to_string()]);
    }

    #[test]
    fn test_missing_field_leaves_empty_slot() {
        let submission = Submission::new().with("Name", "Ann");

        let reconciliation = reconcile(&header(&["Name", "Email"]), submission);

        assert_eq!(reconciliation.header, header(&["Name", "Email"]));
        assert_eq!(reconciliation.row, vec![json!("Ann"), json!("")]);
        assert!(!reconciliation.header_changed());
    }

    #[test]
    fn test_empty_header_takes_every_field_in_submission_order() {
        let submission = Submission::new()
            .with("zeta", "1")
            .with("alpha", "2")
            .with("mid", "3");

        let reconciliation = reconcile(&[], submission);

        assert_eq!(reconciliation.header, header(&["zeta", "alpha", "mid"]));
        assert_eq!(reconciliation.row, vec![json!("1"), json!("2"), json!("3")]);
        assert!(reconciliation.header_changed());
    }

    #[test]
    fn test_sequences_are_joined() {
        let submission = Submission::new()
            .with("colors", json!(["red", "blue"]))
            .with("tags", json!([]));

        let reconciliation = reconcile(&header(&["colors"]), submission);

        assert_eq!(reconciliation.header, header(&["colors", "tags"]));
        assert_eq!(reconciliation.row, vec![json!("red,blue"), json!("")]);
    }

    #[test]
    fn test_second_pass_does_not_grow_header() {
        let submission = Submission::new()
            .with("Name", "Ann")
            .with("Phone", "555")
            .with("colors", json!(["red"]));

        let first = reconcile(&header(&["Name"]), submission.clone());
        let second = reconcile(&first.header, submission);

        assert!(first.header_changed());
        assert!(!second.header_changed());
        assert_eq!(second.header, first.header);
        assert_eq!(second.row, first.row);
    }

    #[test]
    fn test_duplicate_header_column_is_filled_once() {
        let submission = Submission::new().with("Name", "Ann");

        let reconciliation = reconcile(&header(&["Name", "Name"]), submission);

        assert_eq!(reconciliation.header, header(&["Name", "Name"]));
        assert_eq!(reconciliation.row, vec![json!("Ann"), json!("")]);
        assert!(!reconciliation.header_changed());
    }

    #[test]
    fn test_row_always_matches_header_length() {
        let cases: Vec<(Vec<String>, Submission)> = vec![
            (header(&[]), Submission::new()),
            (header(&["a", "b", "c"]), Submission::new().with("b", 1)),
            (header(&["a"]), Submission::new().with("x", 1).with("y", 2)),
            (
                header(&["a", "b"]),
                Submission::new().with("b", 1).with("c", 2).with("a", 3),
            ),
        ];

        for (current, submission) in cases {
            let reconciliation = reconcile(&current, submission);
            assert_eq!(reconciliation.row.len(), reconciliation.header.len());
            assert_eq!(&reconciliation.header[..current.len()], current.as_slice());
        }
    }

    #[test]
    fn test_null_value_becomes_empty_cell() {
        let submission = Submission::new().with("Name", Value::Null);

        let reconciliation = reconcile(&header(&["Name"]), submission);

        assert_eq!(reconciliation.row, vec![json!("")]);
    }
}
