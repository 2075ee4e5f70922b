//! Request-lifecycle locale synchronization for translation subsystems.
//!
//! The host application owns request handling and decides when lifecycle
//! events fire; this crate keeps the active translation locale aligned with
//! the request currently being handled. The entry point is
//! [`listeners::LocaleSyncListener`], wired to the host through
//! [`events::EventDispatcher`] or called directly.

rust_i18n::i18n!("locales", fallback = "en");

pub mod config;
pub mod events;
pub mod listeners;
pub mod logging;
pub mod models;
pub mod services;
pub mod utils;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use events::{
    EventDispatcher, EventSubscriber, KernelEvent, KernelEventName, RequestEvent, RequestKind,
};
pub use listeners::LocaleSyncListener;
pub use models::Request;
pub use services::{LocaleAware, RequestStack, RequestStackView, Translator};
pub use utils::{LocaleError, LocaleResult};
