//! Request context stack
//!
//! Ordered record of the requests currently being handled: the top-level
//! request first, then any nested sub-requests. The host pushes a request as
//! it enters handling and pops it on exit; listeners only read.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::models::Request;

/// Read side of the stack, the only part lifecycle listeners depend on.
pub trait RequestStackView: Send + Sync {
    /// The parent of the request currently being handled, if the current
    /// request is nested.
    fn parent_request(&self) -> Option<Request>;
}

#[derive(Default)]
pub struct RequestStack {
    requests: Mutex<Vec<Request>>,
}

impl RequestStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a request entering handling.
    pub fn push(&self, request: Request) {
        self.lock().push(request);
    }

    /// Remove and return the request that just left handling.
    pub fn pop(&self) -> Option<Request> {
        self.lock().pop()
    }

    /// The request currently being handled.
    pub fn current_request(&self) -> Option<Request> {
        self.lock().last().cloned()
    }

    /// The top-level request of the chain.
    pub fn main_request(&self) -> Option<Request> {
        self.lock().first().cloned()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Request>> {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RequestStackView for RequestStack {
    fn parent_request(&self) -> Option<Request> {
        let requests = self.lock();
        if requests.len() < 2 {
            return None;
        }
        requests.get(requests.len() - 2).cloned()
    }
}
