//! Locale identifier helpers
//!
//! Shared validation and subtag extraction for locale strings such as
//! "en", "fr-CA", "zh_CN" or "sr@latin".

/// Check that a locale identifier is syntactically acceptable.
///
/// Accepts ASCII alphanumerics plus `@`, `_`, `.` and `-`. This says nothing
/// about whether a message catalogue exists for the locale.
pub fn is_valid_locale(locale: &str) -> bool {
    !locale.is_empty()
        && locale
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '@' | '_' | '.' | '-'))
}

/// Extract the primary language subtag ("de-AT" -> "de").
pub fn primary_language(locale: &str) -> &str {
    locale.split(['-', '_', '@', '.']).next().unwrap_or(locale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_locale() {
        assert!(is_valid_locale("en"));
        assert!(is_valid_locale("en-US"));
        assert!(is_valid_locale("zh_CN"));
        assert!(is_valid_locale("sr@latin"));
        assert!(!is_valid_locale(""));
        assert!(!is_valid_locale("fr FR"));
        assert!(!is_valid_locale("en/US"));
    }

    #[test]
    fn test_primary_language() {
        assert_eq!(primary_language("en"), "en");
        assert_eq!(primary_language("de-AT"), "de");
        assert_eq!(primary_language("zh_CN"), "zh");
        assert_eq!(primary_language("sr@latin"), "sr");
    }
}
