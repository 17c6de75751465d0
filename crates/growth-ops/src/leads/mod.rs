//! WhatsApp lead intake: structured records out of pasted text.
//!
//! Two input shapes are supported. Text containing a tab anywhere is treated
//! as a spreadsheet paste with one lead per line; anything else is a single
//! run-together lead as copied from a WhatsApp click-to-chat notification.

mod concatenated;
mod normalize;
mod segmenter;
mod tabular;

pub mod message;
pub mod record;
pub mod reference;

pub use message::{outreach_message, whatsapp_link};
pub use record::{LeadBatch, LeadParseError, LeadRecord, LeadRowError, RowFailure};
pub use reference::{ReferenceLists, KNOWN_COUNTRIES, KNOWN_SUBJECTS};

/// Parse pasted lead text against the given reference lists.
///
/// Tabular input is best-effort per row; a batch with at least one good row
/// succeeds and carries the bad rows in [`LeadBatch::failures`]. Concatenated
/// input is all-or-nothing.
pub fn parse_lead_input(text: &str, lists: &ReferenceLists) -> Result<LeadBatch, LeadParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(LeadParseError::EmptyInput);
    }
    if trimmed.contains('\t') {
        tabular::parse_batch(trimmed, lists)
    } else {
        concatenated::parse_single(trimmed, lists).map(LeadBatch::single)
    }
}
