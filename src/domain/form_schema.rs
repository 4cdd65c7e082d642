use serde::{Deserialize, Serialize};

pub const SHEET_SUBMISSIONS_FIELD: &str = "googleSheetSubmissions";
pub const SPREADSHEET_ID_FIELD: &str = "googleSpreadsheetId";
/// Field-arrangement group the forwarding settings are shown in.
pub const AFTER_SUBMIT_GROUP: &str = "afterSubmit";

const SPREADSHEET_ID_HELP: &str = "<a href=\"https://developers.google.com/sheets/api/guides/concepts#spreadsheet_id\">The ID is found in the spreadsheet URL</a>: https://docs.google.com/spreadsheets/d/<strong>spreadsheetId</strong>/edit#gid=0";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Boolean,
    String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldChoice {
    pub label: String,
    pub value: serde_json::Value,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub show_fields: Vec<String>,
}

/// A setting the form builder renders on every form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<FieldChoice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_help: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldGroup {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub fields: Vec<String>,
}

impl FieldGroup {
    pub fn new(name: impl Into<String>, fields: Vec<String>) -> Self {
        Self {
            name: name.into(),
            label: None,
            fields,
        }
    }
}

/// The toggle and the spreadsheet id field. The id field is only shown while the toggle is on.
pub fn forwarding_fields() -> Vec<FieldDefinition> {
    vec![
        FieldDefinition {
            name: SHEET_SUBMISSIONS_FIELD.to_string(),
            label: "Submit to Google Spreadsheets".to_string(),
            field_type: FieldType::Boolean,
            choices: vec![FieldChoice {
                label: "Yes".to_string(),
                value: serde_json::Value::Bool(true),
                show_fields: vec![SPREADSHEET_ID_FIELD.to_string()],
            }],
            html_help: None,
        },
        FieldDefinition {
            name: SPREADSHEET_ID_FIELD.to_string(),
            label: "Google Spreadsheet ID".to_string(),
            field_type: FieldType::String,
            choices: Vec::new(),
            html_help: Some(SPREADSHEET_ID_HELP.to_string()),
        },
    ]
}

/// Appends the forwarding fields to the `afterSubmit` group. Other groups are
/// returned untouched and nothing is added when the group is absent.
pub fn arrange_fields(groups: Vec<FieldGroup>) -> Vec<FieldGroup> {
    groups
        .into_iter()
        .map(|mut group| {
            if group.name == AFTER_SUBMIT_GROUP {
                group.fields.extend(
                    [SHEET_SUBMISSIONS_FIELD, SPREADSHEET_ID_FIELD]
                        .into_iter()
                        .map(String::from),
                );
            }
            group
        })
        .collect()
}

/// Everything the form builder needs to expose forwarding settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSchema {
    pub add_fields: Vec<FieldDefinition>,
    pub arrange_fields: Vec<FieldGroup>,
}

impl FormSchema {
    pub fn for_groups(groups: Vec<FieldGroup>) -> Self {
        Self {
            add_fields: forwarding_fields(),
            arrange_fields: arrange_fields(groups),
        }
    }
}

impl Default for FormSchema {
    fn default() -> Self {
        Self::for_groups(vec![FieldGroup {
            name: AFTER_SUBMIT_GROUP.to_string(),
            label: Some("After Form Submission".to_string()),
            fields: Vec::new(),
        }])
    }
}
