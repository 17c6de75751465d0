/// Canonical country spellings the parser maps free text onto. The compound
/// "Philippines/ Indonesia" entry must keep its slash-space form; country
/// normalization rewrites every slash variant to match it.
pub const KNOWN_COUNTRIES: [&str; 10] = [
    "USA",
    "UK",
    "Canada",
    "India",
    "Philippines",
    "Indonesia",
    "Philippines/ Indonesia",
    "Australia",
    "New Zealand",
    "Middle East",
];

/// Subjects the beta program offers, stored lowercase; presentation casing is
/// applied at canonicalization time ("ai" becomes the literal "AI").
pub const KNOWN_SUBJECTS: [&str; 5] = ["math", "english", "coding", "ai", "science"];

/// Reference lists the parser matches against. Passed in explicitly so tests
/// can substitute alternates; [`ReferenceLists::standard`] carries the
/// production lists.
#[derive(Debug, Clone)]
pub struct ReferenceLists {
    countries: Vec<String>,
    subjects: Vec<String>,
}

impl ReferenceLists {
    pub fn new<C, S>(countries: C, subjects: S) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        Self {
            countries: countries.into_iter().map(Into::into).collect(),
            subjects: subjects.into_iter().map(Into::into).collect(),
        }
    }

    pub fn standard() -> Self {
        Self::new(KNOWN_COUNTRIES, KNOWN_SUBJECTS)
    }

    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    pub fn subjects(&self) -> &[String] {
        &self.subjects
    }
}

impl Default for ReferenceLists {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_lists_cover_the_compound_country() {
        let lists = ReferenceLists::standard();
        assert!(lists
            .countries()
            .iter()
            .any(|c| c == "Philippines/ Indonesia"));
        assert_eq!(lists.subjects().len(), 5);
    }

    #[test]
    fn alternate_lists_can_be_injected() {
        let lists = ReferenceLists::new(["Atlantis"], ["alchemy"]);
        assert_eq!(lists.countries(), ["Atlantis".to_string()]);
        assert_eq!(lists.subjects(), ["alchemy".to_string()]);
    }
}
