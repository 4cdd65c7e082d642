use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The two form settings the forwarder cares about. Any other setting the host
/// stores on the form is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormConfig {
    /// Only a literal `true` turns forwarding on.
    #[serde(
        rename = "googleSheetSubmissions",
        default,
        deserialize_with = "literal_true"
    )]
    pub sheet_submissions: bool,
    #[serde(
        rename = "googleSpreadsheetId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub spreadsheet_id: Option<String>,
}

fn literal_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(matches!(Value::deserialize(deserializer)?, Value::Bool(true)))
}

impl FormConfig {
    pub fn forwarding_to(spreadsheet_id: impl Into<String>) -> Self {
        Self {
            sheet_submissions: true,
            spreadsheet_id: Some(spreadsheet_id.into()),
        }
    }

    /// The configured spreadsheet id, ignoring surrounding whitespace.
    /// # Examples
    /// ```
    /// use form_sheets_forwarder::domain::form::FormConfig;
    /// let form = FormConfig::forwarding_to("  1AbC  ");
    /// assert_eq!(form.spreadsheet_id(), Some("1AbC"));
    /// assert_eq!(FormConfig::forwarding_to(" ").spreadsheet_id(), None);
    /// ```
    pub fn spreadsheet_id(&self) -> Option<&str> {
        self.spreadsheet_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_host_form() {
        let form: FormConfig = serde_json::from_value(json!({
            "title": "Contact",
            "googleSheetSubmissions": true,
            "googleSpreadsheetId": "sheet-id",
        }))
        .unwrap();
        assert!(form.sheet_submissions);
        assert_eq!(form.spreadsheet_id(), Some("sheet-id"));
    }

    #[test]
    fn test_missing_settings_disable_forwarding() {
        let form: FormConfig = serde_json::from_value(json!({ "title": "Contact" })).unwrap();
        assert!(!form.sheet_submissions);
        assert_eq!(form.spreadsheet_id(), None);
    }

    #[test]
    fn test_only_literal_true_enables() {
        for toggle in [json!("true"), json!(1), json!(null), json!(false)] {
            let form: FormConfig =
                serde_json::from_value(json!({ "googleSheetSubmissions": toggle })).unwrap();
            assert!(!form.sheet_submissions, "{toggle} should not enable forwarding");
        }
    }

    #[test]
    fn test_serialize_uses_host_names() {
        let value = serde_json::to_value(FormConfig::forwarding_to("abc")).unwrap();
        assert_eq!(
            value,
            json!({ "googleSheetSubmissions": true, "googleSpreadsheetId": "abc" })
        );
    }
}
