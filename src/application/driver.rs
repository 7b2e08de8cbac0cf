//! Request/poll driver.
//!
//! Builds screening and reference-data requests, submits them on a
//! [`Session`], and drains the responses through the schema walker. Screens
//! are requested strictly one at a time: the session has a single event
//! queue and responses carry no correlation bookkeeping here.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use super::poll::PollLoop;
use super::walker::{collect_screen_securities, reduce_reference_message};
use crate::domain::name;
use crate::domain::{Override, ReferenceData, ReferenceDataReport};
use crate::error::{Error, Result};
use crate::infrastructure::config::vendor::VendorConfig;
use crate::port::Session;

/// Settings applied to every request the driver submits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSettings {
    /// Service identifier to open.
    pub service: String,
    /// Upper bound for a single poll of the event queue.
    pub poll_timeout: Duration,
    /// Screen visibility class sent with every screening request.
    pub screen_type: String,
    /// Wall-clock bound checked between screens.
    pub deadline: Option<Duration>,
}

impl Default for RequestSettings {
    fn default() -> Self {
        Self {
            service: name::REFDATA_SERVICE.to_string(),
            poll_timeout: Duration::from_millis(500),
            screen_type: "PRIVATE".to_string(),
            deadline: None,
        }
    }
}

impl From<&VendorConfig> for RequestSettings {
    fn from(config: &VendorConfig) -> Self {
        Self {
            service: config.service.clone(),
            poll_timeout: config.poll_timeout(),
            screen_type: config.screen_type.clone(),
            deadline: config.deadline(),
        }
    }
}

/// Drives screening and reference-data requests against a session.
#[derive(Debug, Clone, Default)]
pub struct RequestDriver {
    settings: RequestSettings,
}

impl RequestDriver {
    #[must_use]
    pub const fn new(settings: RequestSettings) -> Self {
        Self { settings }
    }

    #[must_use]
    pub fn from_config(config: &VendorConfig) -> Self {
        Self::new(RequestSettings::from(config))
    }

    #[must_use]
    pub const fn settings(&self) -> &RequestSettings {
        &self.settings
    }

    /// Run every screen in order and return the matching securities,
    /// concatenated in arrival order.
    ///
    /// A screen with no results contributes nothing. A transport fault
    /// aborts the remaining screens.
    pub fn screen_securities<S, I, T>(&self, session: &mut S, screens: I) -> Result<Vec<String>>
    where
        S: Session + ?Sized,
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let started = Instant::now();
        let service = session.service(&self.settings.service)?;
        let mut securities = Vec::new();

        for (completed, screen) in screens.into_iter().enumerate() {
            let screen = screen.as_ref();
            if let Some(deadline) = self.settings.deadline {
                if started.elapsed() >= deadline {
                    return Err(Error::DeadlineExceeded {
                        deadline,
                        completed,
                    });
                }
            }

            let mut request = service.create_request(name::BEQS_REQUEST)?;
            request.set(name::SCREEN_TYPE, self.settings.screen_type.as_str());
            request.set(name::SCREEN_NAME, screen);
            session.send_request(&request)?;
            debug!(screen = %screen, "Screening request sent");

            let before = securities.len();
            let summary = PollLoop::new(self.settings.poll_timeout).run(session, |message| {
                collect_screen_securities(message, &mut securities);
            })?;

            info!(
                screen = %screen,
                securities = securities.len() - before,
                events = summary.events,
                "Screen complete"
            );
        }

        Ok(securities)
    }

    /// Request `fields` for every security in one batch.
    pub fn reference_data<S, I, T, J, U>(
        &self,
        session: &mut S,
        securities: I,
        fields: J,
    ) -> Result<ReferenceData>
    where
        S: Session + ?Sized,
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
        J: IntoIterator<Item = U>,
        U: AsRef<str>,
    {
        self.reference_data_report(session, securities, fields, &[])
            .map(|report| report.data)
    }

    /// Request `fields` for every security with field overrides applied,
    /// keeping the per-security diagnostics the vendor sent back.
    pub fn reference_data_report<S, I, T, J, U>(
        &self,
        session: &mut S,
        securities: I,
        fields: J,
        overrides: &[Override],
    ) -> Result<ReferenceDataReport>
    where
        S: Session + ?Sized,
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
        J: IntoIterator<Item = U>,
        U: AsRef<str>,
    {
        let service = session.service(&self.settings.service)?;
        let mut request = service.create_request(name::REFERENCE_DATA_REQUEST)?;
        for security in securities {
            request.append(name::SECURITIES, security.as_ref());
        }
        for field in fields {
            request.append(name::FIELDS, field.as_ref());
        }
        for entry in overrides {
            request.append_override(entry.clone());
        }

        session.send_request(&request)?;
        debug!(
            securities = request.list(name::SECURITIES).len(),
            fields = request.list(name::FIELDS).len(),
            overrides = overrides.len(),
            "Reference data request sent"
        );

        let mut report = ReferenceDataReport::default();
        let summary = PollLoop::new(self.settings.poll_timeout).run(session, |message| {
            reduce_reference_message(message, &mut report);
        })?;

        info!(
            securities = report.data.len(),
            security_errors = report.security_errors.len(),
            field_exceptions = report.field_exceptions.len(),
            events = summary.events,
            "Reference data complete"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Element, Event, Value};
    use crate::error::TransportError;
    use crate::testkit::element::{
        partial, reference_message, response, screen_message, security_entry,
    };
    use crate::testkit::session::ScriptedSession;

    #[test]
    fn screening_builds_one_fresh_request_per_screen() {
        let mut session = ScriptedSession::new().with_events(vec![
            response(vec![screen_message(&["IBM US Equity"])]),
            response(vec![screen_message(&["VOD LN Equity"])]),
        ]);

        let securities = RequestDriver::default()
            .screen_securities(&mut session, ["ARB_LONGS", "ARB_SHORTS"])
            .unwrap();

        assert_eq!(securities, ["IBM US Equity", "VOD LN Equity"]);
        let sent = session.sent_requests();
        assert_eq!(sent.len(), 2);
        for (request, screen) in sent.iter().zip(["ARB_LONGS", "ARB_SHORTS"]) {
            assert_eq!(request.operation(), name::BEQS_REQUEST);
            assert_eq!(request.get(name::SCREEN_TYPE), Some(&Value::from("PRIVATE")));
            assert_eq!(request.get(name::SCREEN_NAME), Some(&Value::from(screen)));
        }
    }

    #[test]
    fn screening_accumulates_partial_chunks() {
        let mut session = ScriptedSession::new().with_events(vec![
            partial(vec![screen_message(&["A US Equity", "B US Equity"])]),
            Event::timeout(),
            response(vec![screen_message(&["C US Equity"])]),
        ]);

        let securities = RequestDriver::default()
            .screen_securities(&mut session, ["ARB_LONGS"])
            .unwrap();

        assert_eq!(securities, ["A US Equity", "B US Equity", "C US Equity"]);
    }

    #[test]
    fn screen_type_comes_from_settings() {
        let mut session = ScriptedSession::new().with_events(vec![response(vec![])]);
        let driver = RequestDriver::new(RequestSettings {
            screen_type: "GLOBAL".into(),
            ..RequestSettings::default()
        });

        driver.screen_securities(&mut session, ["Core Capital Ratios"]).unwrap();

        assert_eq!(
            session.sent_requests()[0].get(name::SCREEN_TYPE),
            Some(&Value::from("GLOBAL"))
        );
    }

    #[test]
    fn transport_fault_aborts_remaining_screens() {
        let mut session = ScriptedSession::new()
            .with_events(vec![response(vec![screen_message(&["IBM US Equity"])])])
            .then_fail(TransportError::Disconnected("peer reset".into()));

        let result =
            RequestDriver::default().screen_securities(&mut session, ["ONE", "TWO", "THREE"]);

        assert!(matches!(result, Err(Error::Transport(_))));
        assert_eq!(session.sent_requests().len(), 2);
    }

    #[test]
    fn zero_deadline_stops_before_first_screen() {
        let mut session = ScriptedSession::new();
        let driver = RequestDriver::new(RequestSettings {
            deadline: Some(Duration::ZERO),
            ..RequestSettings::default()
        });

        let result = driver.screen_securities(&mut session, ["ARB_LONGS"]);

        assert!(matches!(
            result,
            Err(Error::DeadlineExceeded { completed: 0, .. })
        ));
        assert!(session.sent_requests().is_empty());
    }

    #[test]
    fn deadline_trips_after_completed_screens() {
        let mut session = ScriptedSession::new()
            .with_events(vec![response(vec![screen_message(&["IBM US Equity"])])])
            .with_poll_delay(Duration::from_millis(30));
        let driver = RequestDriver::new(RequestSettings {
            deadline: Some(Duration::from_millis(10)),
            ..RequestSettings::default()
        });

        let result = driver.screen_securities(&mut session, ["ARB_LONGS", "ARB_SHORTS"]);

        match result {
            Err(Error::DeadlineExceeded {
                deadline,
                completed,
            }) => {
                assert_eq!(deadline, Duration::from_millis(10));
                assert_eq!(completed, 1);
            }
            other => panic!("expected DeadlineExceeded, got {other:?}"),
        }
        assert_eq!(session.sent_requests().len(), 1);
        assert_eq!(session.remaining_events(), 0);
    }

    #[test]
    fn unavailable_service_fails_before_sending() {
        let mut session = ScriptedSession::new();
        let driver = RequestDriver::new(RequestSettings {
            service: "//blp/mktdata".into(),
            ..RequestSettings::default()
        });

        let result = driver.reference_data(&mut session, ["IBM US Equity"], ["PX_LAST"]);

        assert!(matches!(
            result,
            Err(Error::Transport(TransportError::ServiceUnavailable { .. }))
        ));
        assert!(session.sent_requests().is_empty());
    }

    #[test]
    fn reference_request_carries_securities_fields_and_overrides() {
        let mut session = ScriptedSession::new().with_events(vec![response(vec![
            reference_message(vec![security_entry(
                "IBM US Equity",
                vec![Element::scalar("EQY_DVD_YLD_EST", 3.4)],
            )]),
        ])]);

        let report = RequestDriver::default()
            .reference_data_report(
                &mut session,
                ["IBM US Equity", "AAPL US Equity"],
                ["EQY_DVD_YLD_EST"],
                &[Override::new("EQY_FUND_CRNCY", "USD")],
            )
            .unwrap();

        let request = &session.sent_requests()[0];
        assert_eq!(request.operation(), name::REFERENCE_DATA_REQUEST);
        assert_eq!(
            request.list(name::SECURITIES),
            ["IBM US Equity", "AAPL US Equity"]
        );
        assert_eq!(request.list(name::FIELDS), ["EQY_DVD_YLD_EST"]);
        assert_eq!(request.overrides(), [Override::new("EQY_FUND_CRNCY", "USD")]);

        assert_eq!(report.data.len(), 1);
        assert!(!report.data.contains_key("AAPL US Equity"));
    }
}
