use std::fmt::Formatter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct A1Notation(pub String);

impl std::fmt::Display for A1Notation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<A1Notation> for String {
    fn from(a1_notation: A1Notation) -> Self {
        a1_notation.0
    }
}

impl AsRef<str> for A1Notation {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for A1Notation {
    fn from(s: String) -> Self {
        A1Notation(s)
    }
}

/// Quotes a sheet title for use as the sheet part of an A1 range.
/// Single quotes inside the title are doubled.
/// # Examples
/// ```
/// use form_sheets_forwarder::domain::sheets::a1_notation::quote_sheet_title;
/// assert_eq!(quote_sheet_title("Sheet1"), "'Sheet1'");
/// assert_eq!(quote_sheet_title("Ann's form"), "'Ann''s form'");
/// ```
pub fn quote_sheet_title(sheet_title: &str) -> String {
    format!("'{}'", sheet_title.replace('\'', "''"))
}

impl A1Notation {
    /// A whole row of a sheet, e.g. `'Sheet1'!1:1`. Rows are 1-based.
    pub fn whole_row(sheet_title: &str, row: u32) -> Self {
        A1Notation(format!("{}!{}:{}", quote_sheet_title(sheet_title), row, row))
    }

    /// The whole sheet, which the append endpoint treats as "after the last used row".
    pub fn whole_sheet(sheet_title: &str) -> Self {
        A1Notation(quote_sheet_title(sheet_title))
    }
}
