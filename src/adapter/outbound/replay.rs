//! Session that replays a recorded capture.

use std::collections::VecDeque;
use std::path::Path;
use std::time::Duration;

use tracing::debug;

use super::capture::Capture;
use crate::domain::{Event, Request, Service};
use crate::error::{Result, TransportError};
use crate::port::Session;

/// Replays captured events in order, regardless of which request is sent.
///
/// Once the capture runs dry the session reports itself disconnected, so a
/// capture missing its terminal event fails instead of polling forever.
#[derive(Debug, Clone)]
pub struct ReplaySession {
    services: Vec<String>,
    events: VecDeque<Event>,
    sent: Vec<Request>,
}

impl ReplaySession {
    #[must_use]
    pub fn new(capture: Capture) -> Self {
        Self {
            services: capture.services,
            events: capture.events.into(),
            sent: Vec::new(),
        }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Capture::load(path).map(Self::new)
    }

    /// Requests received so far, in send order.
    #[must_use]
    pub fn sent_requests(&self) -> &[Request] {
        &self.sent
    }

    #[must_use]
    pub fn remaining_events(&self) -> usize {
        self.events.len()
    }
}

impl Session for ReplaySession {
    fn service(&mut self, uri: &str) -> std::result::Result<Service, TransportError> {
        if self.services.iter().any(|s| s == uri) {
            Ok(Service::refdata(uri))
        } else {
            Err(TransportError::ServiceUnavailable {
                uri: uri.to_string(),
            })
        }
    }

    fn send_request(&mut self, request: &Request) -> std::result::Result<(), TransportError> {
        debug!(operation = request.operation(), "Replay request accepted");
        self.sent.push(request.clone());
        Ok(())
    }

    fn next_event(&mut self, _timeout: Duration) -> std::result::Result<Event, TransportError> {
        self.events
            .pop_front()
            .ok_or_else(|| TransportError::Disconnected("capture exhausted".to_string()))
    }

    fn transport_name(&self) -> &'static str {
        "replay"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::name;
    use crate::domain::EventType;

    #[test]
    fn replays_events_then_disconnects() {
        let mut session = ReplaySession::new(Capture {
            events: vec![Event::timeout(), Event::new(EventType::Response, vec![])],
            ..Capture::default()
        });

        let timeout = Duration::from_millis(1);
        assert_eq!(
            session.next_event(timeout).unwrap().event_type(),
            EventType::Timeout
        );
        assert_eq!(
            session.next_event(timeout).unwrap().event_type(),
            EventType::Response
        );
        assert!(matches!(
            session.next_event(timeout),
            Err(TransportError::Disconnected(_))
        ));
    }

    #[test]
    fn only_captured_services_open() {
        let mut session = ReplaySession::new(Capture::default());

        assert!(session.service(name::REFDATA_SERVICE).is_ok());
        assert!(matches!(
            session.service("//blp/mktdata"),
            Err(TransportError::ServiceUnavailable { .. })
        ));
    }

    #[test]
    fn records_sent_requests() {
        let mut session = ReplaySession::new(Capture::default());
        let service = session.service(name::REFDATA_SERVICE).unwrap();
        let request = service.create_request(name::BEQS_REQUEST).unwrap();

        session.send_request(&request).unwrap();

        assert_eq!(session.sent_requests(), [request]);
        assert_eq!(session.transport_name(), "replay");
    }
}
