//! Typed error handling for the contas service
//!
//! Every rejected request ends in exactly one of these errors, which knows
//! its own HTTP status and machine-readable code.
//!
//! # Error Categories
//!
//! - [`RequestError`]: authentication and path problems (401, 400, 404)
//! - [`ValidationError`]: malformed or incomplete write payloads (400)
//! - [`EntityError`]: well-formed lookups that found nothing (404)
//! - [`StorageError`]: failures inside the record store (500)
//!
//! # Example
//!
//! ```rust,ignore
//! use contas::prelude::*;
//!
//! async fn fetch(service: &dyn ContaService, id: u64) -> ContasResult<Conta> {
//!     service.get(id).await?.ok_or_else(|| EntityError::not_found(id).into())
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

use crate::core::entity::RESOURCE_NAME;

/// The main error type for the contas service
#[derive(Debug)]
pub enum ContasError {
    /// Authentication, routing and path errors
    Request(RequestError),

    /// Payload validation errors
    Validation(ValidationError),

    /// Record lookup errors
    Entity(EntityError),

    /// Storage backend errors
    Storage(StorageError),
}

impl fmt::Display for ContasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContasError::Request(e) => write!(f, "{}", e),
            ContasError::Validation(e) => write!(f, "{}", e),
            ContasError::Entity(e) => write!(f, "{}", e),
            ContasError::Storage(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ContasError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ContasError::Request(e) => Some(e),
            ContasError::Validation(e) => Some(e),
            ContasError::Entity(e) => Some(e),
            ContasError::Storage(e) => Some(e),
        }
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ContasError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ContasError::Request(e) => e.status_code(),
            ContasError::Validation(_) => StatusCode::BAD_REQUEST,
            ContasError::Entity(e) => e.status_code(),
            ContasError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ContasError::Request(e) => e.error_code(),
            ContasError::Validation(e) => e.error_code(),
            ContasError::Entity(e) => e.error_code(),
            ContasError::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            ContasError::Entity(EntityError::NotFound { entity_type, id }) => {
                Some(serde_json::json!({
                    "entity_type": entity_type,
                    "id": id
                }))
            }
            ContasError::Validation(ValidationError::MissingFields { fields }) => {
                Some(serde_json::json!({ "missing": fields }))
            }
            ContasError::Validation(ValidationError::FieldErrors(errors)) => {
                Some(serde_json::json!({ "fields": errors }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for ContasError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), "{}", self);
        }
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Request Errors
// =============================================================================

/// Errors detected from the request line and headers, before any payload work
#[derive(Debug, Clone, PartialEq)]
pub enum RequestError {
    /// Missing or mismatched API token
    Unauthorized { message: String },

    /// Path identifier is not a non-negative integer
    InvalidEntityId { id: String },

    /// No route matches the request path
    RouteNotFound { path: String },
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::Unauthorized { message } => write!(f, "Unauthorized: {}", message),
            RequestError::InvalidEntityId { id } => {
                write!(f, "Invalid id '{}': expected a non-negative integer", id)
            }
            RequestError::RouteNotFound { path } => write!(f, "No route for path '{}'", path),
        }
    }
}

impl std::error::Error for RequestError {}

impl RequestError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RequestError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            RequestError::InvalidEntityId { .. } => StatusCode::BAD_REQUEST,
            RequestError::RouteNotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::Unauthorized { .. } => "UNAUTHORIZED",
            RequestError::InvalidEntityId { .. } => "INVALID_ENTITY_ID",
            RequestError::RouteNotFound { .. } => "ROUTE_NOT_FOUND",
        }
    }
}

impl From<RequestError> for ContasError {
    fn from(err: RequestError) -> Self {
        ContasError::Request(err)
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to write payloads and query strings
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// One or more required fields are absent or null
    MissingFields { fields: Vec<String> },

    /// One or more fields have the wrong type or an invalid value
    FieldErrors(Vec<FieldValidationError>),

    /// Body could not be parsed as JSON
    InvalidJson { message: String },

    /// Body is valid JSON but not an object
    InvalidBody { message: String },

    /// Query string could not be parsed
    InvalidQuery { message: String },
}

/// A single field validation error
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingFields { fields } => {
                write!(f, "Missing required fields: {}", fields.join(", "))
            }
            ValidationError::FieldErrors(errors) => {
                let msgs: Vec<String> = errors
                    .iter()
                    .map(|e| format!("{}: {}", e.field, e.message))
                    .collect();
                write!(f, "Validation errors: {}", msgs.join(", "))
            }
            ValidationError::InvalidJson { message } => write!(f, "Invalid JSON: {}", message),
            ValidationError::InvalidBody { message } => {
                write!(f, "Invalid request body: {}", message)
            }
            ValidationError::InvalidQuery { message } => {
                write!(f, "Invalid query string: {}", message)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::MissingFields { .. } => "MISSING_FIELDS",
            ValidationError::FieldErrors(_) => "VALIDATION_ERROR",
            ValidationError::InvalidJson { .. } => "INVALID_JSON",
            ValidationError::InvalidBody { .. } => "INVALID_BODY",
            ValidationError::InvalidQuery { .. } => "INVALID_QUERY",
        }
    }
}

impl From<ValidationError> for ContasError {
    fn from(err: ValidationError) -> Self {
        ContasError::Validation(err)
    }
}

// =============================================================================
// Entity Errors
// =============================================================================

/// Errors related to record lookups
#[derive(Debug, Clone, PartialEq)]
pub enum EntityError {
    /// No record with this id
    NotFound { entity_type: String, id: u64 },
}

impl EntityError {
    /// Not-found error for a conta id
    pub fn not_found(id: u64) -> Self {
        EntityError::NotFound {
            entity_type: RESOURCE_NAME.to_string(),
            id,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            EntityError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            EntityError::NotFound { .. } => "ENTITY_NOT_FOUND",
        }
    }
}

impl fmt::Display for EntityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityError::NotFound { entity_type, id } => {
                write!(f, "{} with id '{}' not found", entity_type, id)
            }
        }
    }
}

impl std::error::Error for EntityError {}

impl From<EntityError> for ContasError {
    fn from(err: EntityError) -> Self {
        ContasError::Entity(err)
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors raised by a store implementation
#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    /// A lock guarding the records was poisoned by a panicking writer
    LockPoisoned { operation: String, message: String },

    /// A store invariant could not be upheld
    IntegrityError { message: String },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::LockPoisoned { operation, message } => {
                write!(f, "Storage lock poisoned during {}: {}", operation, message)
            }
            StorageError::IntegrityError { message } => {
                write!(f, "Data integrity error: {}", message)
            }
        }
    }
}

impl std::error::Error for StorageError {}

impl From<StorageError> for ContasError {
    fn from(err: StorageError) -> Self {
        ContasError::Storage(err)
    }
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<serde_json::Error> for ContasError {
    fn from(err: serde_json::Error) -> Self {
        ContasError::Validation(ValidationError::InvalidJson {
            message: err.to_string(),
        })
    }
}

/// A specialized Result type for contas operations
pub type ContasResult<T> = Result<T, ContasError>;
