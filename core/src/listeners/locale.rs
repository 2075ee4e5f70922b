//! Locale synchronization listener
//!
//! Keeps the translation subsystem's active locale in sync with the request
//! lifecycle: a top-level request applies its locale when it starts, and a
//! finishing sub-request restores the locale of its parent request.

use std::sync::Arc;

use crate::config::DEFAULT_LOCALE;
use crate::events::{EventSubscriber, KernelEvent, KernelEventName, RequestEvent};
use crate::services::{LocaleAware, RequestStackView};
use crate::utils::{LocaleError, LocaleResult};

/// Apply the request locale early on start; restore the parent locale at the
/// default point on finish.
const SUBSCRIPTIONS: &[(KernelEventName, i32)] =
    &[(KernelEventName::RequestStarted, 10), (KernelEventName::RequestFinished, 0)];

pub struct LocaleSyncListener {
    translator: Arc<dyn LocaleAware>,
    request_stack: Arc<dyn RequestStackView>,
    default_locale: String,
}

impl LocaleSyncListener {
    /// Listener with the stock `"en"` default locale.
    pub fn new(
        translator: Arc<dyn LocaleAware>,
        request_stack: Arc<dyn RequestStackView>,
    ) -> Self {
        Self::with_default_locale(translator, request_stack, DEFAULT_LOCALE)
    }

    /// Listener with a configured default locale (see `I18nConfig`).
    pub fn with_default_locale(
        translator: Arc<dyn LocaleAware>,
        request_stack: Arc<dyn RequestStackView>,
        default_locale: impl Into<String>,
    ) -> Self {
        Self { translator, request_stack, default_locale: default_locale.into() }
    }

    /// Apply the locale of a starting top-level request. Sub-requests keep
    /// whatever locale is already active.
    pub fn on_request_started(&self, event: &RequestEvent) -> LocaleResult<()> {
        if !event.is_main_request() {
            return Ok(());
        }
        self.set_locale(event.request().locale())
    }

    /// Restore the parent request's locale when a sub-request finishes. A
    /// finishing top-level request has no parent to restore.
    pub fn on_request_finished(&self, event: &RequestEvent) -> LocaleResult<()> {
        if event.is_main_request() {
            return Ok(());
        }

        match self.request_stack.parent_request() {
            Some(parent) => self.set_locale(parent.locale()),
            None => {
                tracing::debug!("No parent request on the stack, leaving locale untouched");
                Ok(())
            },
        }
    }

    /// Set the active locale, retrying exactly once with the default locale
    /// when the requested one is rejected. A rejected default propagates:
    /// that means the configuration itself is broken.
    fn set_locale(&self, locale: &str) -> LocaleResult<()> {
        match self.translator.set_locale(locale) {
            Ok(()) => Ok(()),
            Err(LocaleError::InvalidLocale(_)) => {
                tracing::warn!(
                    "Locale {:?} rejected by translator, falling back to {:?}",
                    locale,
                    self.default_locale
                );
                self.translator.set_locale(&self.default_locale)
            },
        }
    }
}

impl EventSubscriber for LocaleSyncListener {
    fn subscriptions(&self) -> &'static [(KernelEventName, i32)] {
        SUBSCRIPTIONS
    }

    fn on_event(&self, event: &KernelEvent) -> LocaleResult<()> {
        match event {
            KernelEvent::RequestStarted(inner) => self.on_request_started(inner),
            KernelEvent::RequestFinished(inner) => self.on_request_finished(inner),
        }
    }
}
