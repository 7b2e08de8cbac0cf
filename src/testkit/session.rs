//! Mock [`Session`] for testing.
//!
//! [`ScriptedSession`] answers polls from a pre-loaded queue of events and
//! faults, and records what the driver sent. When the script runs out it
//! reports a disconnect, so a test missing its terminal event fails fast
//! instead of hanging.

use std::collections::VecDeque;
use std::time::Duration;

use crate::domain::name;
use crate::domain::{Event, Request, Service};
use crate::error::TransportError;
use crate::port::Session;

/// A mock session with a scripted event queue.
#[derive(Debug)]
pub struct ScriptedSession {
    services: Vec<String>,
    events: VecDeque<Result<Event, TransportError>>,
    send_results: VecDeque<Result<(), TransportError>>,
    sent: Vec<Request>,
    poll_timeouts: Vec<Duration>,
    poll_delay: Option<Duration>,
}

impl ScriptedSession {
    /// A session offering only the reference-data service.
    pub fn new() -> Self {
        Self {
            services: vec![name::REFDATA_SERVICE.to_string()],
            events: VecDeque::new(),
            send_results: VecDeque::new(),
            sent: Vec::new(),
            poll_timeouts: Vec::new(),
            poll_delay: None,
        }
    }

    pub fn with_services(mut self, services: &[&str]) -> Self {
        self.services = services.iter().map(ToString::to_string).collect();
        self
    }

    pub fn with_events(mut self, events: Vec<Event>) -> Self {
        self.events.extend(events.into_iter().map(Ok));
        self
    }

    /// Queue a fault after the events scripted so far.
    pub fn then_fail(mut self, error: TransportError) -> Self {
        self.events.push_back(Err(error));
        self
    }

    /// Results for successive `send_request` calls (defaults to `Ok(())`).
    pub fn with_send_results(mut self, results: Vec<Result<(), TransportError>>) -> Self {
        self.send_results = results.into();
        self
    }

    /// Block every poll for `delay` before answering, like a slow vendor.
    pub fn with_poll_delay(mut self, delay: Duration) -> Self {
        self.poll_delay = Some(delay);
        self
    }

    pub fn push_event(&mut self, event: Event) {
        self.events.push_back(Ok(event));
    }

    /// Requests accepted so far, in send order.
    pub fn sent_requests(&self) -> &[Request] {
        &self.sent
    }

    /// Timeout passed to each poll, in call order.
    pub fn poll_timeouts(&self) -> &[Duration] {
        &self.poll_timeouts
    }

    pub fn remaining_events(&self) -> usize {
        self.events.len()
    }
}

impl Default for ScriptedSession {
    fn default() -> Self {
        Self::new()
    }
}

impl Session for ScriptedSession {
    fn service(&mut self, uri: &str) -> Result<Service, TransportError> {
        if self.services.iter().any(|s| s == uri) {
            Ok(Service::refdata(uri))
        } else {
            Err(TransportError::ServiceUnavailable {
                uri: uri.to_string(),
            })
        }
    }

    fn send_request(&mut self, request: &Request) -> Result<(), TransportError> {
        self.send_results.pop_front().unwrap_or(Ok(()))?;
        self.sent.push(request.clone());
        Ok(())
    }

    fn next_event(&mut self, timeout: Duration) -> Result<Event, TransportError> {
        self.poll_timeouts.push(timeout);
        if let Some(delay) = self.poll_delay {
            std::thread::sleep(delay);
        }
        self.events
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Disconnected("script exhausted".to_string())))
    }

    fn transport_name(&self) -> &'static str {
        "mock"
    }
}
