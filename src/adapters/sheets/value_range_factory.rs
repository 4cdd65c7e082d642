use google_sheets4::api::ValueRange;
use serde_json::Value;
use std::borrow::Cow;

use crate::domain::sheets::a1_notation::A1Notation;

pub const MAJOR_DIMENSION_ROWS: &str = "ROWS";

pub trait ValueRangeFactory {
    fn from_single_row(cells: Vec<Value>) -> Self;
    fn from_single_row_in_range(range: &A1Notation, cells: Vec<Value>) -> Self;
    fn from_labels<'a, T: Into<Cow<'a, str>> + Clone>(range: &A1Notation, labels: &[T]) -> Self;
}

fn wrap_value<'a, T: Into<Cow<'a, str>>>(value: T) -> Value {
    Value::String(value.into().into_owned())
}

impl ValueRangeFactory for ValueRange {
    fn from_single_row(cells: Vec<Value>) -> Self {
        ValueRange {
            major_dimension: Some(MAJOR_DIMENSION_ROWS.to_string()),
            range: None,
            values: Some(vec![cells]),
        }
    }

    fn from_single_row_in_range(range: &A1Notation, cells: Vec<Value>) -> Self {
        ValueRange {
            range: Some(range.to_string()),
            ..Self::from_single_row(cells)
        }
    }

    fn from_labels<'a, T: Into<Cow<'a, str>> + Clone>(range: &A1Notation, labels: &[T]) -> Self {
        let cells = labels
            .iter()
            .map(|label| wrap_value(label.clone()))
            .collect::<Vec<_>>();
        Self::from_single_row_in_range(range, cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test for wrap "1" -> Value::String("1")
    #[test]
    fn test_wrap_value() {
        let value = wrap_value("1");
        assert_eq!(value, Value::String("1".to_string()));
    }

    #[test]
    fn test_from_single_row() {
        let value_range =
            ValueRange::from_single_row(vec![Value::String("Ann".to_string()), Value::from(5)]);
        assert_eq!(
            value_range.major_dimension,
            Some("ROWS".to_string()),
            "Major dimension should be ROWS"
        );
        assert_eq!(value_range.range, None, "Range should be None");
        assert_eq!(
            value_range.values,
            Some(vec![vec![Value::String("Ann".to_string()), Value::from(5)]]),
            "Values should be a single row"
        );
    }

    #[test]
    fn test_from_labels() {
        let range = A1Notation::whole_row("Sheet1", 1);
        let value_range = ValueRange::from_labels(&range, &["Name", "Email"]);
        assert_eq!(value_range.range, Some("'Sheet1'!1:1".to_string()));
        assert_eq!(value_range.major_dimension, Some("ROWS".to_string()));
        assert_eq!(
            value_range.values,
            Some(vec![vec![
                Value::String("Name".to_string()),
                Value::String("Email".to_string())
            ]]),
            "Values should be one row of labels"
        );
    }

    #[test]
    fn test_from_labels_owned_strings() {
        let range = A1Notation::whole_row("Sheet1", 1);
        let labels = vec!["Phone".to_string()];
        let value_range = ValueRange::from_labels(&range, &labels);
        assert_eq!(
            value_range.values,
            Some(vec![vec![Value::String("Phone".to_string())]])
        );
    }
}
