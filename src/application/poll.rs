//! Event-queue polling for a single submitted request.
//!
//! ```text
//!                PARTIAL_RESPONSE        RESPONSE
//!  AwaitingData ──────────────────▶ Partial ───────▶ Done
//!       │  ▲ other                   │  ▲ PARTIAL / other
//!       └──┘                         └──┘
//!  (any state) ── transport fault ──▶ Aborted
//! ```
//!
//! There is no cancellation: the loop only ends on the terminal event or a
//! transport fault.

use std::time::Duration;

use tracing::{debug, trace, warn};

use crate::domain::{Event, EventType, Message};
use crate::error::Result;
use crate::port::Session;

/// Where a request is in its response lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollState {
    /// Submitted, nothing data-bearing seen yet.
    AwaitingData,
    /// At least one partial response consumed.
    Partial,
    /// Terminal response consumed.
    Done,
    /// The transport failed mid-request.
    Aborted,
}

impl PollState {
    /// Transition on a polled event.
    #[must_use]
    pub const fn on_event(self, event_type: EventType) -> Self {
        match (self, event_type) {
            (Self::Done | Self::Aborted, _) => self,
            (_, EventType::Response) => Self::Done,
            (_, EventType::PartialResponse) => Self::Partial,
            (state, _) => state,
        }
    }

    /// Transition on a transport fault.
    #[must_use]
    pub const fn on_fault(self) -> Self {
        match self {
            Self::Done => Self::Done,
            _ => Self::Aborted,
        }
    }

    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Done | Self::Aborted)
    }
}

/// Counters for one drained request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PollSummary {
    pub events: usize,
    pub partial_events: usize,
    pub ignored_events: usize,
    pub messages: usize,
}

/// Drains a session's queue for one request.
#[derive(Debug)]
pub struct PollLoop {
    timeout: Duration,
    state: PollState,
    summary: PollSummary,
}

impl PollLoop {
    #[must_use]
    pub const fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            state: PollState::AwaitingData,
            summary: PollSummary {
                events: 0,
                partial_events: 0,
                ignored_events: 0,
                messages: 0,
            },
        }
    }

    #[must_use]
    pub const fn state(&self) -> PollState {
        self.state
    }

    #[must_use]
    pub const fn summary(&self) -> PollSummary {
        self.summary
    }

    /// Poll until the terminal event, handing every message of every
    /// data-bearing event to `on_message`.
    ///
    /// A transport fault moves the loop to [`PollState::Aborted`] and is
    /// returned as is.
    pub fn run<S, F>(&mut self, session: &mut S, mut on_message: F) -> Result<PollSummary>
    where
        S: Session + ?Sized,
        F: FnMut(&Message),
    {
        while !self.state.is_finished() {
            let event = match session.next_event(self.timeout) {
                Ok(event) => event,
                Err(e) => {
                    self.state = self.state.on_fault();
                    warn!(
                        transport = session.transport_name(),
                        error = %e,
                        events = self.summary.events,
                        "Transport fault while polling, request aborted"
                    );
                    return Err(e.into());
                }
            };
            self.consume(&event, &mut on_message);
        }
        Ok(self.summary)
    }

    fn consume<F>(&mut self, event: &Event, on_message: &mut F)
    where
        F: FnMut(&Message),
    {
        let event_type = event.event_type();
        self.summary.events += 1;

        if event_type.is_data_bearing() {
            trace!(event_type = %event_type, messages = event.len(), "Response event");
            for message in event {
                self.summary.messages += 1;
                on_message(message);
            }
            if !event_type.is_terminal() {
                self.summary.partial_events += 1;
            }
        } else {
            self.summary.ignored_events += 1;
            log_ignored_event(event);
        }

        self.state = self.state.on_event(event_type);
    }
}

/// Diagnostic hook for events the driver does not consume.
fn log_ignored_event(event: &Event) {
    if event.event_type() == EventType::Timeout {
        trace!("Poll timed out, still waiting");
        return;
    }

    debug!(
        event_type = %event.event_type(),
        messages = event.len(),
        "Ignoring non-response event"
    );
    for message in event {
        debug!(
            event_type = %event.event_type(),
            message_type = message.message_type(),
            message = ?message.body(),
            "Non-response message"
        );
    }
}
