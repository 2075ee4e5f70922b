// Common test utilities and helpers

use std::collections::HashSet;
use std::sync::Mutex;

use crate::models::Request;
use crate::services::{LocaleAware, RequestStackView};
use crate::utils::{LocaleError, LocaleResult};

/// `LocaleAware` fake that records every `set_locale` call and rejects a
/// configurable set of locales.
#[derive(Default)]
pub struct RecordingTranslator {
    rejected: HashSet<String>,
    calls: Mutex<Vec<String>>,
    current: Mutex<String>,
}

impl RecordingTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translator that rejects every locale in `locales`.
    pub fn rejecting(locales: &[&str]) -> Self {
        Self { rejected: locales.iter().map(|l| l.to_string()).collect(), ..Self::default() }
    }

    /// Every locale passed to `set_locale`, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }
}

impl LocaleAware for RecordingTranslator {
    fn set_locale(&self, locale: &str) -> LocaleResult<()> {
        self.calls.lock().expect("calls lock").push(locale.to_string());
        if self.rejected.contains(locale) {
            return Err(LocaleError::invalid_locale(locale));
        }
        *self.current.lock().expect("current lock") = locale.to_string();
        Ok(())
    }

    fn locale(&self) -> String {
        self.current.lock().expect("current lock").clone()
    }
}

/// Stack fake pinned to a fixed parent request.
pub struct FixedParentStack {
    parent: Option<Request>,
}

impl FixedParentStack {
    pub fn with_parent(parent: Request) -> Self {
        Self { parent: Some(parent) }
    }

    pub fn empty() -> Self {
        Self { parent: None }
    }
}

impl RequestStackView for FixedParentStack {
    fn parent_request(&self) -> Option<Request> {
        self.parent.clone()
    }
}
