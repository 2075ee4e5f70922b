use thiserror::Error;

/// Errors surfaced by the locale subsystem.
///
/// Design: uses thiserror for ergonomic error handling. The only recoverable
/// condition in this crate is a locale the translator refuses to apply;
/// callers decide whether to fall back or propagate.
#[derive(Error, Debug)]
pub enum LocaleError {
    #[error("Invalid locale: {0:?}")]
    InvalidLocale(String),
}

impl LocaleError {
    /// Helper to create an invalid locale error
    pub fn invalid_locale(locale: impl Into<String>) -> Self {
        Self::InvalidLocale(locale.into())
    }
}

pub type LocaleResult<T> = Result<T, LocaleError>;
