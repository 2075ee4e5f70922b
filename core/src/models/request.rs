//! Request model shared by the kernel lifecycle events.

/// Locale a request carries before the host assigns one.
pub const DEFAULT_REQUEST_LOCALE: &str = "en";

/// An in-flight request as seen by lifecycle listeners.
///
/// The host framework owns request creation and mutation; listeners only
/// read the declared locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    locale: String,
}

impl Request {
    pub fn new() -> Self {
        Self { locale: DEFAULT_REQUEST_LOCALE.to_string() }
    }

    /// Request declaring the given locale.
    pub fn with_locale(locale: impl Into<String>) -> Self {
        Self { locale: locale.into() }
    }

    /// The locale this request declares.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.locale = locale.into();
    }
}

impl Default for Request {
    fn default() -> Self {
        Self::new()
    }
}
