//! Outreach message and WhatsApp click-to-chat link construction.

use super::normalize::digits_only;
use super::record::LeadRecord;

/// Render the beta-program outreach message for a lead. The copy matches the
/// live template verbatim, spelling included.
pub fn outreach_message(lead: &LeadRecord) -> String {
    format!(
        "Hi {parent},\n\nThank you for showing intrest in aiforjr's Free beta program for {kid} ({grade}) for a {subject} subject.\n\nOur team will reachout to you today via call on this number: {phone}\n\nMake sure to pickup the call, Thank you!\n\nAIFORJR - AI Tutor for kids\nhttps://aiforjr.com/",
        parent = lead.parent_name,
        kid = lead.kids_name,
        grade = lead.grade,
        subject = lead.subject,
        phone = lead.phone,
    )
}

/// Build a `wa.me` link that opens a chat with the lead's number and
/// pre-fills the outreach message.
pub fn whatsapp_link(lead: &LeadRecord) -> String {
    let digits = digits_only(&lead.phone);
    let message = outreach_message(lead);
    let encoded = urlencoding::encode(&message);
    format!("https://wa.me/{digits}?text={encoded}")
}
