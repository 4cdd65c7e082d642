use super::a1_notation::A1Notation;

/// Worksheet forwarded submissions land in when nothing else is configured.
pub const DEFAULT_WORKSHEET: &str = "Sheet1";

/// The header row is always the first row of the worksheet.
pub const HEADER_ROW: u32 = 1;

/// Ranges the forwarder touches on its target worksheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranges {
    worksheet: String,
}

impl Ranges {
    pub fn new(worksheet: impl Into<String>) -> Self {
        Self {
            worksheet: worksheet.into(),
        }
    }

    pub fn header(&self) -> A1Notation {
        A1Notation::whole_row(&self.worksheet, HEADER_ROW)
    }

    pub fn append_target(&self) -> A1Notation {
        A1Notation::whole_sheet(&self.worksheet)
    }
}

impl Default for Ranges {
    fn default() -> Self {
        Self::new(DEFAULT_WORKSHEET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ranges() {
        let ranges = Ranges::default();
        assert_eq!(ranges.header().as_ref(), "'Sheet1'!1:1");
        assert_eq!(ranges.append_target().as_ref(), "'Sheet1'");
    }

    #[test]
    fn test_custom_worksheet() {
        let ranges = Ranges::new("Responses");
        assert_eq!(ranges.header().as_ref(), "'Responses'!1:1");
        assert_eq!(ranges.append_target().as_ref(), "'Responses'");
    }
}
