//! Session transport port.
//!
//! The transport is the stateful, connection-oriented client to the vendor.
//! Its lifecycle (connect, authenticate, tear down) belongs to the caller;
//! the request driver only opens services, sends requests and drains events.

use std::time::Duration;

use crate::domain::{Event, Request, Service};
use crate::error::TransportError;

/// A session against the market-data vendor.
///
/// Implementations block in [`next_event`](Session::next_event) for at most
/// `timeout` and return a [`Timeout`](crate::domain::EventType::Timeout)
/// event when nothing arrived. A timeout is not a fault.
pub trait Session {
    /// Open (or look up) a service by identifier.
    fn service(&mut self, uri: &str) -> Result<Service, TransportError>;

    /// Submit a request. Responses arrive through the event queue.
    fn send_request(&mut self, request: &Request) -> Result<(), TransportError>;

    /// Wait up to `timeout` for the next event.
    fn next_event(&mut self, timeout: Duration) -> Result<Event, TransportError>;

    /// Transport name for logging/debugging.
    fn transport_name(&self) -> &'static str {
        "session"
    }
}

impl<S: Session + ?Sized> Session for &mut S {
    fn service(&mut self, uri: &str) -> Result<Service, TransportError> {
        (**self).service(uri)
    }

    fn send_request(&mut self, request: &Request) -> Result<(), TransportError> {
        (**self).send_request(request)
    }

    fn next_event(&mut self, timeout: Duration) -> Result<Event, TransportError> {
        (**self).next_event(timeout)
    }

    fn transport_name(&self) -> &'static str {
        (**self).transport_name()
    }
}

impl<S: Session + ?Sized> Session for Box<S> {
    fn service(&mut self, uri: &str) -> Result<Service, TransportError> {
        (**self).service(uri)
    }

    fn send_request(&mut self, request: &Request) -> Result<(), TransportError> {
        (**self).send_request(request)
    }

    fn next_event(&mut self, timeout: Duration) -> Result<Event, TransportError> {
        (**self).next_event(timeout)
    }

    fn transport_name(&self) -> &'static str {
        (**self).transport_name()
    }
}
