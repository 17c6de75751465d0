//! Single-lead parsing for run-together WhatsApp text.
//!
//! Input like "kumarvaishnavi alex@x.com 919876543210 grade 3 india math" is
//! consumed left to right: email, then phone, grade, country and subject out
//! of what follows, with the glued parent+kid name blob sitting before the
//! email.

use once_cell::sync::Lazy;
use regex::Regex;

use super::normalize::{capitalize_first, EMAIL_RE};
use super::record::{LeadParseError, LeadRecord};
use super::reference::ReferenceLists;
use super::segmenter::split_concatenated;

static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{10,}").expect("phone pattern compiles"));

static GRADE_SCAN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"grade\s*(\d+|kindergarten|pre-k|preschool)").expect("grade pattern compiles")
});

const SPECIAL_GRADES: [&str; 3] = ["kindergarten", "pre-k", "preschool"];

pub(crate) fn parse_single(
    input: &str,
    lists: &ReferenceLists,
) -> Result<LeadRecord, LeadParseError> {
    let email_match = EMAIL_RE.find(input).ok_or(LeadParseError::MissingEmail)?;
    let email = email_match.as_str().to_string();
    let before_email = &input[..email_match.start()];
    let mut remaining = input[email_match.end()..].to_lowercase();

    let phone_match = PHONE_RE
        .find(&remaining)
        .ok_or(LeadParseError::MissingPhone)?;
    let phone = phone_match.as_str().to_string();
    remaining = remaining[phone_match.end()..].to_string();

    let (grade, grade_end) = find_grade(&remaining).ok_or(LeadParseError::MissingGrade)?;
    remaining = remaining[grade_end..].to_string();

    let (country, country_end) =
        find_country(&remaining, lists.countries()).ok_or(LeadParseError::MissingCountry)?;
    remaining = remaining[country_end..].to_string();

    let subject = find_subject(&remaining, lists.subjects()).ok_or(LeadParseError::MissingSubject)?;

    let name_blob = before_email.trim().to_lowercase();
    let (parent_name, kids_name) = split_concatenated(&name_blob);

    Ok(LeadRecord {
        parent_name,
        kids_name,
        email,
        phone,
        grade,
        country,
        subject,
    })
}

/// Locate the grade token and return its canonical label plus the byte offset
/// just past it. "grade N" (and "grade kindergarten" etc.) wins; otherwise a
/// special level counts on its own when it starts the text or follows a
/// non-letter.
fn find_grade(remaining: &str) -> Option<(String, usize)> {
    if let Some(captures) = GRADE_SCAN_RE.captures(remaining) {
        let full = captures.get(0).expect("match 0 always present");
        let value = &captures[1];
        return Some((canonical_special_or_numeric(value), full.end()));
    }

    for special in SPECIAL_GRADES {
        if let Some(index) = remaining.find(special) {
            let preceded_by_letter = remaining[..index]
                .chars()
                .next_back()
                .is_some_and(|c| c.is_ascii_alphabetic());
            if !preceded_by_letter {
                return Some((
                    canonical_special_or_numeric(special),
                    index + special.len(),
                ));
            }
        }
    }

    None
}

fn canonical_special_or_numeric(value: &str) -> String {
    match value {
        "kindergarten" => "Kindergarten".to_string(),
        "pre-k" => "Pre-K".to_string(),
        "preschool" => "Preschool".to_string(),
        digits => format!("Grade {digits}"),
    }
}

/// Find a known country in the (lowercased) text. Longest entries are tried
/// first so "philippines/ indonesia" beats its components; a fuzzy pass then
/// re-checks a padded window around partial hits with collapsed whitespace.
fn find_country(remaining: &str, countries: &[String]) -> Option<(String, usize)> {
    let mut by_length: Vec<&String> = countries.iter().collect();
    by_length.sort_by(|a, b| b.len().cmp(&a.len()));

    for known in by_length {
        let needle = known.to_lowercase();
        if let Some(index) = remaining.find(&needle) {
            return Some((known.clone(), index + needle.len()));
        }
    }

    for known in countries {
        let needle = known.to_lowercase();
        if let Some(index) = remaining.find(&needle) {
            let end = floor_char_boundary(remaining, index + needle.len() + 20);
            let window = &remaining[index..end];
            let collapsed = window.split_whitespace().collect::<Vec<_>>().join(" ");
            for candidate in countries {
                if collapsed.contains(&candidate.to_lowercase()) {
                    return Some((candidate.clone(), end));
                }
            }
        }
    }

    None
}

fn find_subject(remaining: &str, subjects: &[String]) -> Option<String> {
    for known in subjects {
        if remaining.contains(&known.to_lowercase()) {
            if known.eq_ignore_ascii_case("ai") {
                return Some("AI".to_string());
            }
            return Some(capitalize_first(known));
        }
    }
    None
}

fn floor_char_boundary(text: &str, mut index: usize) -> usize {
    if index >= text.len() {
        return text.len();
    }
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lists() -> ReferenceLists {
        ReferenceLists::standard()
    }

    #[test]
    fn glued_lead_parses_end_to_end() {
        let record = parse_single(
            "kumarvaishnavi alex@example.com 919876543210 grade 3 india math",
            &lists(),
        )
        .unwrap();
        assert_eq!(record.parent_name, "Kumar");
        assert_eq!(record.kids_name, "Vaishnavi");
        assert_eq!(record.email, "alex@example.com");
        assert_eq!(record.phone, "919876543210");
        assert_eq!(record.grade, "Grade 3");
        assert_eq!(record.country, "India");
        assert_eq!(record.subject, "Math");
    }

    #[test]
    fn grade_token_may_be_glued_to_its_number() {
        let (grade, _) = find_grade("9876543210grade2 usa coding").unwrap();
        assert_eq!(grade, "Grade 2");
    }

    #[test]
    fn standalone_kindergarten_counts_after_digits() {
        let (grade, end) = find_grade("kindergarten usa ai").unwrap();
        assert_eq!(grade, "Kindergarten");
        assert_eq!(end, "kindergarten".len());

        let (grade, _) = find_grade("xyz kindergarten usa ai").unwrap();
        assert_eq!(grade, "Kindergarten");
    }

    #[test]
    fn special_grade_preceded_by_a_letter_is_rejected() {
        assert!(find_grade("somekindergartenword").is_none());
        assert!(find_grade("prekindergarten").is_none());
        assert!(find_grade("3kindergarten").is_some());
    }

    #[test]
    fn compound_country_beats_its_components() {
        let (country, _) = find_country("philippines/ indonesia math", lists().countries()).unwrap();
        assert_eq!(country, "Philippines/ Indonesia");
    }

    #[test]
    fn single_component_country_still_matches() {
        let (country, _) = find_country(" indonesia coding", lists().countries()).unwrap();
        assert_eq!(country, "Indonesia");
    }

    #[test]
    fn missing_tokens_surface_specific_errors() {
        assert_eq!(
            parse_single("no email here", &lists()).unwrap_err(),
            LeadParseError::MissingEmail
        );
        assert_eq!(
            parse_single("a@b.com 123", &lists()).unwrap_err(),
            LeadParseError::MissingPhone
        );
        assert_eq!(
            parse_single("a@b.com 9876543210 nothing", &lists()).unwrap_err(),
            LeadParseError::MissingGrade
        );
        assert_eq!(
            parse_single("a@b.com 9876543210 grade 4 atlantis", &lists()).unwrap_err(),
            LeadParseError::MissingCountry
        );
        assert_eq!(
            parse_single("a@b.com 9876543210 grade 4 india chess", &lists()).unwrap_err(),
            LeadParseError::MissingSubject
        );
    }

    #[test]
    fn empty_name_blob_gets_placeholders() {
        let record = parse_single("a@b.com 9876543210 grade 4 india ai", &lists()).unwrap();
        assert_eq!(record.parent_name, "Parent");
        assert_eq!(record.kids_name, "Child");
        assert_eq!(record.subject, "AI");
    }

    #[test]
    fn short_name_blob_is_parent_only() {
        let record = parse_single("meenal a@b.com 9876543210 grade 4 india english", &lists())
            .unwrap();
        assert_eq!(record.parent_name, "Meenal");
        assert_eq!(record.kids_name, "Child");
        assert_eq!(record.subject, "English");
    }

    #[test]
    fn mixed_case_input_still_parses() {
        let record = parse_single(
            "KUMARVAISHNAVI Alex@Example.com 919876543210 GRADE 3 INDIA MATH",
            &lists(),
        )
        .unwrap();
        assert_eq!(record.parent_name, "Kumar");
        assert_eq!(record.email, "Alex@Example.com");
        assert_eq!(record.grade, "Grade 3");
        assert_eq!(record.country, "India");
    }
}
