/// Languages the synthesis endpoint accepts, keyed by ISO 639-1 code.
/// Kept sorted by code so listings and error messages come out deterministic.
const LANGUAGES: &[(&str, &str)] = &[
    ("ar", "Arabic"),
    ("cs", "Czech"),
    ("de", "German"),
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("hi", "Hindi"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("nl", "Dutch"),
    ("pl", "Polish"),
    ("pt", "Portuguese"),
    ("ru", "Russian"),
    ("zh", "Chinese"),
];

pub fn supports(code: &str) -> bool {
    name_of(code).is_some()
}

pub fn name_of(code: &str) -> Option<&'static str> {
    LANGUAGES
        .binary_search_by(|(c, _)| c.cmp(&code))
        .ok()
        .map(|i| LANGUAGES[i].1)
}

/// All (code, name) pairs, ascending by code.
pub fn all() -> impl Iterator<Item = (&'static str, &'static str)> {
    LANGUAGES.iter().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_and_complete() {
        let entries: Vec<_> = all().collect();
        assert_eq!(entries.len(), 15);
        assert_eq!(entries[0], ("ar", "Arabic"));
        let mut sorted = entries.clone();
        sorted.sort_by_key(|(code, _)| *code);
        assert_eq!(entries, sorted);
    }

    #[test]
    fn lookups_agree() {
        assert!(supports("en"));
        assert!(supports("zh"));
        assert!(!supports("xx"));
        assert_eq!(name_of("es"), Some("Spanish"));
        assert_eq!(name_of("EN"), None);
    }
}
