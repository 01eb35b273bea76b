//! Error taxonomy for the notes service.
//!
//! Two layers: `StoreError` for failures inside the store adapter, and
//! `ServiceError` for the categorized failures surfaced to gRPC callers.
//! The `From<ServiceError> for Status` impl is the single place where
//! categories become wire status codes.

use std::error::Error;
use std::fmt;

use tonic::Status;

/// Categorized failures surfaced to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The caller supplied a malformed identifier.
    InvalidId(String),
    /// No document matched the identifier.
    NotFound(String),
    /// The store failed on insert or replace.
    Internal(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::InvalidId(msg) => write!(f, "invalid note id: {}", msg),
            ServiceError::NotFound(msg) => write!(f, "note not found: {}", msg),
            ServiceError::Internal(msg) => write!(f, "internal store error: {}", msg),
        }
    }
}

impl Error for ServiceError {}

impl From<ServiceError> for Status {
    fn from(err: ServiceError) -> Self {
        let message = err.to_string();
        match err {
            ServiceError::InvalidId(_) => Status::invalid_argument(message),
            ServiceError::NotFound(_) => Status::not_found(message),
            ServiceError::Internal(_) => Status::internal(message),
        }
    }
}

/// Failures inside the store adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Could not establish the client or resolve the collection.
    Connect(String),
    /// A single query against the collection failed.
    Query(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Connect(msg) => write!(f, "store connection error: {}", msg),
            StoreError::Query(msg) => write!(f, "store query error: {}", msg),
        }
    }
}

impl Error for StoreError {}
