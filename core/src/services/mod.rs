pub mod request_stack;
pub mod translator;

pub use request_stack::{RequestStack, RequestStackView};
pub use translator::{LocaleAware, Translator};
