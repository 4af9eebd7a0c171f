use std::collections::BTreeSet;

use petcode_core::{DomainError, DomainResult};

/// Case-insensitive set of search keywords.
///
/// Keywords are stored lowercased, so two sets built from `["Carl"]` and
/// `["carl"]` are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeywordSet(BTreeSet<String>);

impl KeywordSet {
    /// Fails with `InvalidArgument` when no non-blank keyword is given.
    pub fn new<I, S>(keywords: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set: BTreeSet<String> = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        if set.is_empty() {
            return Err(DomainError::invalid_argument("at least one keyword is required"));
        }
        Ok(Self(set))
    }

    /// Splits `text` on whitespace.
    pub fn from_words(text: &str) -> DomainResult<Self> {
        Self::new(text.split_whitespace())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whole-value match: `value`, trimmed, equals a keyword ignoring case.
    pub fn matches_exact(&self, value: &str) -> bool {
        self.0.contains(&value.trim().to_lowercase())
    }

    /// Token match: any of `words` equals a keyword ignoring case.
    pub fn matches_any_word<'a>(&self, words: impl IntoIterator<Item = &'a str>) -> bool {
        words.into_iter().any(|word| self.matches_exact(word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case_and_whitespace() {
        let a = KeywordSet::new(["Carl", " dana "]).unwrap();
        let b = KeywordSet::new(["DANA", "carl", "Carl"]).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(
            KeywordSet::new(["", "  "]),
            Err(DomainError::InvalidArgument(_))
        ));
        assert!(KeywordSet::from_words("   ").is_err());
    }

    #[test]
    fn exact_match_is_not_substring() {
        let set = KeywordSet::new(["sing"]).unwrap();
        assert!(set.matches_exact("SING"));
        assert!(!set.matches_exact("Singapore"));
    }

    #[test]
    fn word_match() {
        let set = KeywordSet::from_words("kurz meier").unwrap();
        assert!(set.matches_any_word("Carl Kurz".split_whitespace()));
        assert!(!set.matches_any_word("Carl Kurzweil".split_whitespace()));
    }
}
