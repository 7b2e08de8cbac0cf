//! Events and messages retrieved from a session's queue.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::element::Element;

/// Vendor event categories.
///
/// Only [`PartialResponse`](EventType::PartialResponse) and
/// [`Response`](EventType::Response) carry request data; everything else is
/// session housekeeping as far as the request driver is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    Admin,
    SessionStatus,
    SubscriptionStatus,
    RequestStatus,
    Response,
    PartialResponse,
    SubscriptionData,
    ServiceStatus,
    Timeout,
    AuthorizationStatus,
    ResolutionStatus,
    TopicStatus,
    TokenStatus,
    Request,
}

impl EventType {
    /// Canonical upper-case name, as printed in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::SessionStatus => "SESSION_STATUS",
            Self::SubscriptionStatus => "SUBSCRIPTION_STATUS",
            Self::RequestStatus => "REQUEST_STATUS",
            Self::Response => "RESPONSE",
            Self::PartialResponse => "PARTIAL_RESPONSE",
            Self::SubscriptionData => "SUBSCRIPTION_DATA",
            Self::ServiceStatus => "SERVICE_STATUS",
            Self::Timeout => "TIMEOUT",
            Self::AuthorizationStatus => "AUTHORIZATION_STATUS",
            Self::ResolutionStatus => "RESOLUTION_STATUS",
            Self::TopicStatus => "TOPIC_STATUS",
            Self::TokenStatus => "TOKEN_STATUS",
            Self::Request => "REQUEST",
        }
    }

    /// True for the event types whose messages belong to a request.
    #[must_use]
    pub const fn is_data_bearing(self) -> bool {
        matches!(self, Self::PartialResponse | Self::Response)
    }

    /// True for the single event that closes a request.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Response)
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One message of an event, wrapping the root element of its tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    correlation_id: Option<u64>,
    body: Element,
}

impl Message {
    pub fn new(body: Element) -> Self {
        Self {
            correlation_id: None,
            body,
        }
    }

    #[must_use]
    pub fn with_correlation_id(mut self, id: u64) -> Self {
        self.correlation_id = Some(id);
        self
    }

    #[must_use]
    pub const fn correlation_id(&self) -> Option<u64> {
        self.correlation_id
    }

    /// Message type, i.e. the name of the root element.
    #[must_use]
    pub fn message_type(&self) -> &str {
        self.body.name()
    }

    #[must_use]
    pub const fn body(&self) -> &Element {
        &self.body
    }

    #[must_use]
    pub fn has_element(&self, name: &str) -> bool {
        self.body.has_element(name)
    }

    #[must_use]
    pub fn get_element(&self, name: &str) -> Option<&Element> {
        self.body.get_element(name)
    }
}

/// A discrete unit retrieved from a session queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    event_type: EventType,
    #[serde(default)]
    messages: Vec<Message>,
}

impl Event {
    pub fn new(event_type: EventType, messages: Vec<Message>) -> Self {
        Self {
            event_type,
            messages,
        }
    }

    /// The event a poll returns when nothing arrived within its timeout.
    #[must_use]
    pub fn timeout() -> Self {
        Self::new(EventType::Timeout, Vec::new())
    }

    #[must_use]
    pub const fn event_type(&self) -> EventType {
        self.event_type
    }

    pub fn messages(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl<'a> IntoIterator for &'a Event {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}
