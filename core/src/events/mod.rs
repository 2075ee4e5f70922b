//! Kernel request lifecycle events
//!
//! The host framework emits these notifications as requests enter and leave
//! handling. Listeners subscribe through [`dispatcher::EventDispatcher`].

pub mod dispatcher;

pub use dispatcher::{EventDispatcher, EventSubscriber};

use crate::models::Request;

/// Whether a request is the top-level request of a processing chain or a
/// nested sub-request dispatched while handling another one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    Main,
    Sub,
}

/// Identifies a lifecycle event for subscription purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KernelEventName {
    RequestStarted,
    RequestFinished,
}

/// Payload shared by the lifecycle events: the affected request and whether
/// it is the top-level request.
#[derive(Debug, Clone)]
pub struct RequestEvent {
    request: Request,
    kind: RequestKind,
}

impl RequestEvent {
    pub fn new(request: Request, kind: RequestKind) -> Self {
        Self { request, kind }
    }

    pub fn request(&self) -> &Request {
        &self.request
    }

    pub fn is_main_request(&self) -> bool {
        self.kind == RequestKind::Main
    }
}

/// A lifecycle notification delivered to subscribers.
#[derive(Debug, Clone)]
pub enum KernelEvent {
    RequestStarted(RequestEvent),
    RequestFinished(RequestEvent),
}

impl KernelEvent {
    pub fn name(&self) -> KernelEventName {
        match self {
            Self::RequestStarted(_) => KernelEventName::RequestStarted,
            Self::RequestFinished(_) => KernelEventName::RequestFinished,
        }
    }
}
