//! Standard error messages for consistent error responses.

pub const VALIDATION_FAILED: &str = "Missing required fields";
pub const INVALID_ID: &str = "Invalid id format";
pub const INVALID_JSON: &str = "Invalid JSON format";
pub const NOT_FOUND_RESOURCE: &str = "Resource not found";
pub const METHOD_NOT_ALLOWED: &str = "The HTTP method is not allowed for this resource";
pub const INTERNAL_ERROR: &str = "An internal server error occurred";
