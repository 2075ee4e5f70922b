pub mod error;
pub mod locale;

pub use error::{LocaleError, LocaleResult};
pub use locale::{is_valid_locale, primary_language};
