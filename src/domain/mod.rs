//! Vendor-agnostic domain types: the response element tree, events,
//! requests, and the reduced result mappings.

pub mod element;
pub mod event;
pub mod name;
pub mod refdata;
pub mod request;
pub mod value;

pub use element::{Content, Element};
pub use event::{Event, EventType, Message};
pub use refdata::{
    BulkRow, FieldException, FieldValue, ReferenceData, ReferenceDataReport, SecurityError,
    SecurityFields,
};
pub use request::{Override, Request, Service};
pub use value::Value;
