//! Field canonicalization shared by both parsing strategies.

use once_cell::sync::Lazy;
use regex::Regex;

pub(crate) static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\w._-]+@[\w._-]+\.\w+").expect("email pattern compiles"));

static GRADE_EXACT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^grade\s*(\d+)$").expect("grade pattern compiles"));

static DIGIT_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("digit pattern compiles"));

static SLASH_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*/\s*").expect("slash pattern compiles"));

static WS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern compiles"));

/// Uppercase the first character, leave the rest alone.
pub(crate) fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Title-case every whitespace-separated word: first letter up, rest down.
pub(crate) fn title_case_words(value: &str) -> String {
    value
        .split_whitespace()
        .map(|word| capitalize_first(&word.to_lowercase()))
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn digits_only(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Map free-text grade input onto the canonical label set: the special
/// levels, then "Grade N" from an explicit "grade N", a bare number, or the
/// first embedded digit run. Anything else is passed through capitalized.
pub(crate) fn canonical_grade(value: &str) -> String {
    let lower = value.trim().to_lowercase();
    match lower.as_str() {
        "kindergarten" => return "Kindergarten".to_string(),
        "pre-k" | "prek" => return "Pre-K".to_string(),
        "preschool" => return "Preschool".to_string(),
        _ => {}
    }
    if let Some(captures) = GRADE_EXACT_RE.captures(&lower) {
        return format!("Grade {}", &captures[1]);
    }
    if !lower.is_empty() && lower.chars().all(|c| c.is_ascii_digit()) {
        return format!("Grade {lower}");
    }
    if let Some(digits) = DIGIT_RUN_RE.find(&lower) {
        return format!("Grade {}", digits.as_str());
    }
    capitalize_first(&lower)
}

/// Rewrite slash separators to "/ " and collapse runs of whitespace, so
/// variants like "Philippines /Indonesia" line up with the reference entry.
pub(crate) fn normalize_country_spacing(value: &str) -> String {
    let slashed = SLASH_RE.replace_all(value.trim(), "/ ");
    WS_RE.replace_all(&slashed, " ").trim().to_string()
}

/// Match the (spacing-normalized) input against the reference countries,
/// case-insensitively, accepting containment in either direction. First list
/// entry that matches wins; no match keeps the normalized input as-is.
pub(crate) fn canonical_country(value: &str, countries: &[String]) -> String {
    let normalized = normalize_country_spacing(value);
    let needle = normalized.to_lowercase();
    for known in countries {
        let candidate = normalize_country_spacing(known).to_lowercase();
        if needle == candidate || needle.contains(&candidate) || candidate.contains(&needle) {
            return known.clone();
        }
    }
    normalized
}

/// Map a subject onto its presentation form: "ai" is always the literal
/// "AI", known subjects get capitalized, unknown input is capitalized as-is.
pub(crate) fn canonical_subject(value: &str, subjects: &[String]) -> String {
    let lower = value.trim().to_lowercase();
    if lower == "ai" {
        return "AI".to_string();
    }
    for known in subjects {
        if lower == known.to_lowercase() {
            return capitalize_first(known);
        }
    }
    capitalize_first(&lower)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leads::reference::ReferenceLists;

    #[test]
    fn title_casing_lowercases_the_tail() {
        assert_eq!(title_case_words("aLEX kUMAR"), "Alex Kumar");
        assert_eq!(title_case_words("  spaced   out  "), "Spaced Out");
    }

    #[test]
    fn grades_map_onto_canonical_labels() {
        assert_eq!(canonical_grade("kindergarten"), "Kindergarten");
        assert_eq!(canonical_grade("PREK"), "Pre-K");
        assert_eq!(canonical_grade("pre-k"), "Pre-K");
        assert_eq!(canonical_grade("Preschool"), "Preschool");
        assert_eq!(canonical_grade("grade 3"), "Grade 3");
        assert_eq!(canonical_grade("Grade3"), "Grade 3");
        assert_eq!(canonical_grade("7"), "Grade 7");
        assert_eq!(canonical_grade("class 5 (CBSE)"), "Grade 5");
        assert_eq!(canonical_grade("senior"), "Senior");
    }

    #[test]
    fn country_matching_accepts_containment_both_ways() {
        let lists = ReferenceLists::standard();
        assert_eq!(canonical_country("india", lists.countries()), "India");
        assert_eq!(canonical_country("the USA!", lists.countries()), "USA");
        // The normalized compound input contains "philippines", which sits
        // earlier in the list, so the scan resolves to it first.
        assert_eq!(
            canonical_country("philippines /indonesia", lists.countries()),
            "Philippines"
        );
        assert_eq!(canonical_country("Wakanda", lists.countries()), "Wakanda");
    }

    #[test]
    fn first_reference_entry_wins_on_ties() {
        let lists = ReferenceLists::standard();
        // "Philippines" precedes the compound entry and is contained in it.
        assert_eq!(
            canonical_country("Philippines", lists.countries()),
            "Philippines"
        );
    }

    #[test]
    fn subjects_get_presentation_casing() {
        let lists = ReferenceLists::standard();
        assert_eq!(canonical_subject("ai", lists.subjects()), "AI");
        assert_eq!(canonical_subject("MATH", lists.subjects()), "Math");
        assert_eq!(canonical_subject("robotics", lists.subjects()), "Robotics");
    }
}
