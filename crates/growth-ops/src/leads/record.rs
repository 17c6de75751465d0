use serde::Serialize;
use std::fmt;

/// One structured lead, canonicalized and ready for the outreach template.
/// Built fresh per parse invocation; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadRecord {
    pub parent_name: String,
    pub kids_name: String,
    pub email: String,
    /// Digits only, at least 10 of them.
    pub phone: String,
    pub grade: String,
    pub country: String,
    pub subject: String,
}

/// Result of a parse call: the rows that made it plus the ones that didn't.
/// Batch imports are best-effort, so a partially bad paste still yields the
/// valid subset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadBatch {
    pub records: Vec<LeadRecord>,
    pub failures: Vec<RowFailure>,
}

impl LeadBatch {
    pub(crate) fn single(record: LeadRecord) -> Self {
        Self {
            records: vec![record],
            failures: Vec::new(),
        }
    }
}

/// Why a single tab-separated row was skipped. Recoverable: the rest of the
/// batch still parses.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LeadRowError {
    #[error("expected at least 7 tab-separated fields, found {found}")]
    NotEnoughFields { found: usize },
    #[error("invalid email format: '{0}'")]
    InvalidEmail(String),
    #[error("phone number must have at least 10 digits, found {digits}")]
    PhoneTooShort { digits: usize },
    #[error("unreadable row: {0}")]
    Malformed(String),
}

/// A skipped row together with its 1-based position among the non-empty
/// input lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowFailure {
    pub row: usize,
    pub reason: LeadRowError,
}

impl fmt::Display for RowFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}: {}", self.row, self.reason)
    }
}

fn join_failures(failures: &[RowFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Whole-input failures. In single-record mode any missing required token
/// aborts the parse; in batch mode only an all-rows failure is fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LeadParseError {
    #[error("no parsable lines in input")]
    EmptyInput,
    #[error("could not find an email address in the input")]
    MissingEmail,
    #[error("could not find a phone number with at least 10 digits")]
    MissingPhone,
    #[error("could not find a grade in the input")]
    MissingGrade,
    #[error("could not find a known country in the input")]
    MissingCountry,
    #[error("could not find a known subject in the input")]
    MissingSubject,
    #[error("no rows could be parsed: {}", join_failures(.0))]
    NoRowsParsed(Vec<RowFailure>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregate_error_lists_every_row_reason() {
        let failures = vec![
            RowFailure {
                row: 1,
                reason: LeadRowError::InvalidEmail("nope".to_string()),
            },
            RowFailure {
                row: 2,
                reason: LeadRowError::PhoneTooShort { digits: 4 },
            },
        ];
        let message = LeadParseError::NoRowsParsed(failures).to_string();
        assert!(message.contains("row 1: invalid email format: 'nope'"));
        assert!(message.contains("row 2: phone number must have at least 10 digits, found 4"));
    }
}
