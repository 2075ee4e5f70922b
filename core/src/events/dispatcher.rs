//! Minimal event dispatcher
//!
//! Delivers kernel lifecycle events to registered subscribers in descending
//! priority order. This is wiring only: the host owns when events fire, and
//! the first subscriber error aborts delivery and propagates to the caller.

use std::collections::HashMap;
use std::sync::Arc;

use crate::events::{KernelEvent, KernelEventName};
use crate::utils::LocaleResult;

/// A listener declaring which lifecycle events it handles, with a priority
/// per event (higher runs first).
pub trait EventSubscriber: Send + Sync {
    /// Static table of `(event, priority)` pairs this subscriber handles.
    fn subscriptions(&self) -> &'static [(KernelEventName, i32)];

    /// Handle one event.
    fn on_event(&self, event: &KernelEvent) -> LocaleResult<()>;
}

#[derive(Default)]
pub struct EventDispatcher {
    subscribers: HashMap<KernelEventName, Vec<(i32, Arc<dyn EventSubscriber>)>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subscriber under every event in its subscription table.
    ///
    /// Subscribers with equal priority run in registration order.
    pub fn register(&mut self, subscriber: Arc<dyn EventSubscriber>) {
        for &(name, priority) in subscriber.subscriptions() {
            let entry = self.subscribers.entry(name).or_default();
            entry.push((priority, Arc::clone(&subscriber)));
            entry.sort_by_key(|(p, _)| std::cmp::Reverse(*p));
        }
    }

    /// Deliver an event to its subscribers, highest priority first.
    pub fn dispatch(&self, event: &KernelEvent) -> LocaleResult<()> {
        let Some(subscribers) = self.subscribers.get(&event.name()) else {
            tracing::debug!("No subscribers for {:?}", event.name());
            return Ok(());
        };

        for (_, subscriber) in subscribers {
            subscriber.on_event(event)?;
        }
        Ok(())
    }
}
