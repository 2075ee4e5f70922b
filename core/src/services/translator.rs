//! Translation service
//!
//! Wraps the rust-i18n runtime behind the narrow [`LocaleAware`] capability
//! the lifecycle listener depends on. The active locale is process-wide:
//! `t!` lookups anywhere in the host follow the last successful
//! `set_locale` call.

use std::sync::{PoisonError, RwLock};

use rust_i18n::t;

use crate::config::DEFAULT_LOCALE;
use crate::utils::locale::{is_valid_locale, primary_language};
use crate::utils::{LocaleError, LocaleResult};

/// Locales with a message catalogue under `locales/`.
pub const SUPPORTED_LOCALES: &[&str] = &["de", "en", "fr"];

/// Capability of applying a locale to the translation subsystem.
pub trait LocaleAware: Send + Sync {
    /// Make `locale` the active locale.
    ///
    /// Fails with [`LocaleError::InvalidLocale`] when the locale is
    /// malformed or has no message catalogue.
    fn set_locale(&self, locale: &str) -> LocaleResult<()>;

    /// Currently active locale.
    fn locale(&self) -> String;
}

pub struct Translator {
    available: Vec<&'static str>,
    current: RwLock<String>,
}

impl Translator {
    pub fn new() -> Self {
        Self {
            available: SUPPORTED_LOCALES.to_vec(),
            current: RwLock::new(DEFAULT_LOCALE.to_string()),
        }
    }

    /// Look up `key` in the active locale's catalogue.
    pub fn translate(&self, key: &str) -> String {
        t!(key).to_string()
    }

    /// The compiled catalogue serving `locale`: an exact match, or the one
    /// for its primary language subtag ("fr-CA" is served by "fr").
    fn catalogue_for(&self, locale: &str) -> Option<&'static str> {
        let primary = primary_language(locale);
        self.available
            .iter()
            .copied()
            .find(|l| *l == locale)
            .or_else(|| self.available.iter().copied().find(|l| *l == primary))
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}

impl LocaleAware for Translator {
    fn set_locale(&self, locale: &str) -> LocaleResult<()> {
        if !is_valid_locale(locale) {
            return Err(LocaleError::invalid_locale(locale));
        }
        let catalogue =
            self.catalogue_for(locale).ok_or_else(|| LocaleError::invalid_locale(locale))?;

        rust_i18n::set_locale(catalogue);
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = locale.to_string();
        Ok(())
    }

    fn locale(&self) -> String {
        self.current.read().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_malformed_locale() {
        let translator = Translator::new();
        let result = translator.set_locale("fr FR");
        assert!(matches!(result, Err(LocaleError::InvalidLocale(_))));

        let result = translator.set_locale("");
        assert!(matches!(result, Err(LocaleError::InvalidLocale(_))));
    }

    #[test]
    fn test_rejects_unknown_locale() {
        let translator = Translator::new();
        let result = translator.set_locale("xx");
        assert!(matches!(result, Err(LocaleError::InvalidLocale(_))));
    }

    // Single test for everything that touches the process-wide runtime
    // locale, so parallel test threads cannot interleave.
    #[test]
    fn test_set_locale_drives_translation() {
        let translator = Translator::new();

        translator.set_locale("fr").unwrap();
        assert_eq!(translator.locale(), "fr");
        assert_eq!(translator.translate("greeting"), "Bonjour");

        // Region variant is served by the primary language catalogue
        translator.set_locale("fr-CA").unwrap();
        assert_eq!(translator.locale(), "fr-CA");
        assert_eq!(translator.translate("greeting"), "Bonjour");

        translator.set_locale("de").unwrap();
        assert_eq!(translator.translate("greeting"), "Hallo");
    }
}
