//! Tab-separated batch parsing (spreadsheet paste format).
//!
//! Column order: parent name, kid name, email, phone, grade, country,
//! subject. Rows that fail validation are skipped and reported; the batch
//! only fails outright when nothing parses.

use super::normalize::{
    canonical_country, canonical_grade, canonical_subject, digits_only, title_case_words,
    EMAIL_RE,
};
use super::record::{LeadBatch, LeadParseError, LeadRecord, LeadRowError, RowFailure};
use super::reference::ReferenceLists;

pub(crate) fn parse_batch(
    input: &str,
    lists: &ReferenceLists,
) -> Result<LeadBatch, LeadParseError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(input.as_bytes());

    let mut records = Vec::new();
    let mut failures = Vec::new();
    let mut row = 0usize;

    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(err) => {
                row += 1;
                failures.push(RowFailure {
                    row,
                    reason: LeadRowError::Malformed(err.to_string()),
                });
                continue;
            }
        };

        let fields: Vec<&str> = record.iter().filter(|field| !field.is_empty()).collect();
        if fields.is_empty() {
            // Whitespace-only line; not counted as a row.
            continue;
        }
        row += 1;

        match parse_row(&fields, lists) {
            Ok(lead) => records.push(lead),
            Err(reason) => {
                tracing::warn!(row, %reason, "skipping unparsable lead row");
                failures.push(RowFailure { row, reason });
            }
        }
    }

    if records.is_empty() {
        if failures.is_empty() {
            return Err(LeadParseError::EmptyInput);
        }
        return Err(LeadParseError::NoRowsParsed(failures));
    }

    Ok(LeadBatch { records, failures })
}

fn parse_row(fields: &[&str], lists: &ReferenceLists) -> Result<LeadRecord, LeadRowError> {
    if fields.len() < 7 {
        return Err(LeadRowError::NotEnoughFields {
            found: fields.len(),
        });
    }

    let email = fields[2];
    if !EMAIL_RE.is_match(email) {
        return Err(LeadRowError::InvalidEmail(email.to_string()));
    }

    let phone = digits_only(fields[3]);
    if phone.len() < 10 {
        return Err(LeadRowError::PhoneTooShort {
            digits: phone.len(),
        });
    }

    Ok(LeadRecord {
        parent_name: title_case_words(fields[0]),
        kids_name: title_case_words(fields[1]),
        email: email.to_string(),
        phone,
        grade: canonical_grade(fields[4]),
        country: canonical_country(fields[5], lists.countries()),
        subject: canonical_subject(fields[6], lists.subjects()),
    })
}
