//! Response schema walker.
//!
//! Reduces response messages into the result mappings. Shape faults (a
//! missing element where one was expected) are skipped, never raised.

use tracing::{debug, warn};

use crate::domain::name;
use crate::domain::{
    BulkRow, Element, FieldException, FieldValue, Message, ReferenceDataReport, SecurityError,
    SecurityFields, Value,
};

/// Append the securities of a screening response message to `out`.
///
/// Returns how many were appended. Messages without `data.securityData`
/// contribute nothing.
pub fn collect_screen_securities(message: &Message, out: &mut Vec<String>) -> usize {
    let Some(security_data) = message
        .get_element(name::DATA)
        .and_then(|data| data.get_element(name::SECURITY_DATA))
    else {
        debug!(
            message_type = message.message_type(),
            "Screening message without security data, skipped"
        );
        return 0;
    };

    let before = out.len();
    for entry in security_data.values() {
        match entry.element_as_string(name::SECURITY) {
            Some(security) => out.push(security),
            None => debug!("Screening entry without security, skipped"),
        }
    }
    out.len() - before
}

/// Fold a reference-data response message into `report`.
pub fn reduce_reference_message(message: &Message, report: &mut ReferenceDataReport) {
    let Some(security_data) = message.get_element(name::SECURITY_DATA) else {
        debug!(
            message_type = message.message_type(),
            "Reference message without security data, skipped"
        );
        return;
    };

    for entry in security_data.values() {
        reduce_security(entry, report);
    }
}

fn reduce_security(entry: &Element, report: &mut ReferenceDataReport) {
    let Some(security) = entry.element_as_string(name::SECURITY) else {
        debug!("Security entry without identifier, skipped");
        return;
    };

    collect_diagnostics(&security, entry, report);

    let Some(field_data) = entry.get_element(name::FIELD_DATA) else {
        debug!(security = %security, "Security without field data, skipped");
        return;
    };
    if field_data.num_elements() == 0 {
        debug!(security = %security, "Security with no fields, skipped");
        return;
    }

    let mut fields = SecurityFields::new();
    for field in field_data.elements() {
        if !field.is_valid() {
            continue;
        }

        if field.is_array() {
            let rows = field.values().map(bulk_row).collect();
            fields.insert(field.name().to_string(), FieldValue::Bulk(rows));
            continue;
        }

        match field.value() {
            Some(value) => {
                fields.insert(field.name().to_string(), FieldValue::Scalar(value.clone()));
            }
            None => debug!(
                security = %security,
                field = field.name(),
                "Field carries no scalar value, skipped"
            ),
        }
    }

    report.data.insert(security, fields);
}

/// One bulk row. Every child of the group produces a key, so rows keep the
/// group's shape even when values are missing.
fn bulk_row(group: &Element) -> BulkRow {
    group
        .elements()
        .map(|child| {
            let value = if child.is_valid() && !child.is_null() {
                child.value().cloned().unwrap_or_else(Value::empty)
            } else {
                Value::empty()
            };
            (child.name().to_string(), value)
        })
        .collect()
}

fn collect_diagnostics(security: &str, entry: &Element, report: &mut ReferenceDataReport) {
    if let Some(error) = entry.get_element(name::SECURITY_ERROR) {
        let (category, message) = error_info(error);
        warn!(
            security = %security,
            category = %category,
            message = %message,
            "Security rejected by vendor"
        );
        report.security_errors.push(SecurityError {
            security: security.to_string(),
            category,
            message,
        });
    }

    let Some(exceptions) = entry.get_element(name::FIELD_EXCEPTIONS) else {
        return;
    };
    for exception in exceptions.values() {
        let field_id = exception
            .element_as_string(name::FIELD_ID)
            .unwrap_or_default();
        let (category, message) = exception
            .get_element(name::ERROR_INFO)
            .map(error_info)
            .unwrap_or_default();
        warn!(
            security = %security,
            field = %field_id,
            category = %category,
            message = %message,
            "Field rejected by vendor"
        );
        report.field_exceptions.push(FieldException {
            security: security.to_string(),
            field_id,
            category,
            message,
        });
    }
}

fn error_info(info: &Element) -> (String, String) {
    let category = info
        .element_as_string(name::SUBCATEGORY)
        .or_else(|| info.element_as_string(name::CATEGORY))
        .unwrap_or_default();
    let message = info.element_as_string(name::MESSAGE).unwrap_or_default();
    (category, message)
}
