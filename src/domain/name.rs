//! Well-known service, operation and element names of the reference-data API.

/// Reference-data service identifier.
pub const REFDATA_SERVICE: &str = "//blp/refdata";

/// Screening (equity screen) operation.
pub const BEQS_REQUEST: &str = "BeqsRequest";
/// Batch reference-data operation.
pub const REFERENCE_DATA_REQUEST: &str = "ReferenceDataRequest";

// Request parameters
pub const SCREEN_TYPE: &str = "screenType";
pub const SCREEN_NAME: &str = "screenName";
pub const SECURITIES: &str = "securities";
pub const FIELDS: &str = "fields";

// Response elements
pub const DATA: &str = "data";
pub const SECURITY_DATA: &str = "securityData";
pub const SECURITY: &str = "security";
pub const FIELD_DATA: &str = "fieldData";
pub const FIELD_ID: &str = "fieldId";
pub const FIELD_EXCEPTIONS: &str = "fieldExceptions";
pub const SECURITY_ERROR: &str = "securityError";
pub const ERROR_INFO: &str = "errorInfo";
pub const CATEGORY: &str = "category";
pub const SUBCATEGORY: &str = "subcategory";
pub const MESSAGE: &str = "message";
