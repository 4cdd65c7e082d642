/// Why a submission was not forwarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Authentication failed at startup, forwarding is off for the whole process.
    ForwardingUnavailable,
    /// The form does not have forwarding switched on.
    NotEnabledForForm,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForwardOutcome {
    Skipped(SkipReason),
    Forwarded {
        spreadsheet_id: String,
        /// Width of the appended row.
        columns: usize,
        /// Columns this submission added to the header, in header order.
        added_columns: Vec<String>,
    },
}

impl ForwardOutcome {
    pub fn is_forwarded(&self) -> bool {
        matches!(self, ForwardOutcome::Forwarded { .. })
    }
}

impl std::fmt::Display for ForwardOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ForwardOutcome::Skipped(SkipReason::ForwardingUnavailable) => {
                write!(f, "skipped (forwarding unavailable)")
            }
            ForwardOutcome::Skipped(SkipReason::NotEnabledForForm) => {
                write!(f, "skipped (not enabled for form)")
            }
            ForwardOutcome::Forwarded {
                spreadsheet_id,
                columns,
                added_columns,
            } if added_columns.is_empty() => {
                write!(f, "forwarded {} columns to {}", columns, spreadsheet_id)
            }
            ForwardOutcome::Forwarded {
                spreadsheet_id,
                columns,
                added_columns,
            } => write!(
                f,
                "forwarded {} columns to {} (new: {})",
                columns,
                spreadsheet_id,
                added_columns.join(", ")
            ),
        }
    }
}
