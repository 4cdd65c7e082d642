use serde_json::Value;

/// Separator used when a multi-valued answer is flattened into one cell.
pub const LIST_SEPARATOR: &str = ",";

/// Plain text of a value as it would be shown in a cell: strings unquoted,
/// `null` empty, sequences joined with [`LIST_SEPARATOR`].
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .map(cell_text)
            .collect::<Vec<_>>()
            .join(LIST_SEPARATOR),
        other => other.to_string(),
    }
}

/// Converts a submitted value into the cell sent to the sheet.
///
/// Numbers and booleans are kept as is so the service can still detect them
/// when the row is appended with user-entered semantics.
pub fn to_cell(value: Value) -> Value {
    match value {
        Value::Null => empty_cell(),
        Value::Array(_) | Value::Object(_) => Value::String(cell_text(&value)),
        scalar => scalar,
    }
}

pub fn empty_cell() -> Value {
    Value::String(String::new())
}
