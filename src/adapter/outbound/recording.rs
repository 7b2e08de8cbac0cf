//! Session wrapper that records traffic into a [`Capture`].

use std::time::Duration;

use super::capture::Capture;
use crate::domain::{Event, EventType, Request, Service};
use crate::error::TransportError;
use crate::port::Session;

/// Forwards to an inner session and keeps a copy of everything it sees.
///
/// Poll timeouts are not recorded; a replay does not need them.
#[derive(Debug)]
pub struct RecordingSession<S> {
    inner: S,
    capture: Capture,
}

impl<S: Session> RecordingSession<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            capture: Capture {
                services: Vec::new(),
                ..Capture::default()
            },
        }
    }

    #[must_use]
    pub const fn capture(&self) -> &Capture {
        &self.capture
    }

    /// Stop recording, returning the inner session and the capture.
    pub fn into_parts(self) -> (S, Capture) {
        (self.inner, self.capture)
    }
}

impl<S: Session> Session for RecordingSession<S> {
    fn service(&mut self, uri: &str) -> Result<Service, TransportError> {
        let service = self.inner.service(uri)?;
        if !self.capture.services.iter().any(|s| s == uri) {
            self.capture.services.push(uri.to_string());
        }
        Ok(service)
    }

    fn send_request(&mut self, request: &Request) -> Result<(), TransportError> {
        self.inner.send_request(request)?;
        self.capture.requests.push(request.clone());
        Ok(())
    }

    fn next_event(&mut self, timeout: Duration) -> Result<Event, TransportError> {
        let event = self.inner.next_event(timeout)?;
        if event.event_type() != EventType::Timeout {
            self.capture.events.push(event.clone());
        }
        Ok(event)
    }

    fn transport_name(&self) -> &'static str {
        self.inner.transport_name()
    }
}
