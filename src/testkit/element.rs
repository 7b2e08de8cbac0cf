//! Builders for response messages and events used across tests.
//!
//! The shapes follow the vendor responses: screening results nest under
//! `data.securityData`, reference data sits directly under `securityData`.

use crate::domain::name;
use crate::domain::{Element, Event, EventType, Message};

/// A screening response message listing `securities`.
pub fn screen_message(securities: &[&str]) -> Message {
    let entries = securities
        .iter()
        .map(|security| {
            Element::complex(
                name::SECURITY_DATA,
                vec![Element::scalar(name::SECURITY, *security)],
            )
        })
        .collect();

    Message::new(Element::complex(
        "BeqsResponse",
        vec![Element::complex(
            name::DATA,
            vec![Element::array(name::SECURITY_DATA, entries)],
        )],
    ))
}

/// A reference-data response message holding the given security entries.
pub fn reference_message(entries: Vec<Element>) -> Message {
    Message::new(Element::complex(
        "ReferenceDataResponse",
        vec![Element::array(name::SECURITY_DATA, entries)],
    ))
}

/// A `securityData` entry with the given fields under `fieldData`.
pub fn security_entry(security: &str, fields: Vec<Element>) -> Element {
    security_entry_with(security, fields, Vec::new())
}

/// A `securityData` entry with extra sibling elements, e.g. `securityError`
/// or `fieldExceptions`.
pub fn security_entry_with(security: &str, fields: Vec<Element>, extras: Vec<Element>) -> Element {
    let mut children = vec![
        Element::scalar(name::SECURITY, security),
        Element::complex(name::FIELD_DATA, fields),
    ];
    children.extend(extras);
    Element::complex(name::SECURITY_DATA, children)
}

/// A bulk field with one value-group per row.
pub fn bulk_field(field: &str, rows: Vec<Vec<Element>>) -> Element {
    Element::array(
        field,
        rows.into_iter()
            .map(|row| Element::complex(field, row))
            .collect(),
    )
}

/// An `errorInfo`-shaped element named `element`.
pub fn error_info(element: &str, category: &str, message: &str) -> Element {
    Element::complex(
        element,
        vec![
            Element::scalar(name::CATEGORY, category),
            Element::scalar(name::MESSAGE, message),
        ],
    )
}

/// One entry of a `fieldExceptions` array.
pub fn field_exception(field_id: &str, category: &str, message: &str) -> Element {
    Element::complex(
        name::FIELD_EXCEPTIONS,
        vec![
            Element::scalar(name::FIELD_ID, field_id),
            error_info(name::ERROR_INFO, category, message),
        ],
    )
}

pub fn partial(messages: Vec<Message>) -> Event {
    Event::new(EventType::PartialResponse, messages)
}

pub fn response(messages: Vec<Message>) -> Event {
    Event::new(EventType::Response, messages)
}
