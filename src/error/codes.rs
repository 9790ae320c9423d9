//! Unified error codes
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Order errors
//! - 6xxx: Partner errors
//! - 9xxx: System errors

use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Order is not in a state that allows assignment
    OrderNotAssignable = 4002,

    // ==================== 6xxx: Partner ====================
    /// Delivery partner not found
    PartnerNotFound = 6001,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
}

/// Error category, used for boundary-level logging decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Expected business failures (validation, not found, state conflicts)
    Business,
    /// Unexpected system failures
    System,
}

impl ErrorCode {
    /// Numeric value of this code
    pub fn code(self) -> u16 {
        self as u16
    }

    /// Default human-readable message for this code
    pub fn message(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidRequest => "Invalid request",
            Self::OrderNotFound => "Order not found",
            Self::OrderNotAssignable => "Order cannot be assigned",
            Self::PartnerNotFound => "Partner not found",
            Self::InternalError => "Internal server error",
        }
    }

    /// HTTP status code this error maps to
    ///
    /// Duplicate ids are reported as a validation-class 400, not 409: the
    /// whole POST body is treated as one invalid request.
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::ValidationFailed | Self::AlreadyExists | Self::InvalidRequest => {
                StatusCode::BAD_REQUEST
            }
            Self::OrderNotAssignable => StatusCode::BAD_REQUEST,
            Self::NotFound | Self::OrderNotFound | Self::PartnerNotFound => StatusCode::NOT_FOUND,
            Self::Unknown | Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Category of this code
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Unknown | Self::InternalError => ErrorCategory::System,
            _ => ErrorCategory::Business,
        }
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code as u16
    }
}

impl TryFrom<u16> for ErrorCode {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Unknown),
            2 => Ok(Self::ValidationFailed),
            3 => Ok(Self::NotFound),
            4 => Ok(Self::AlreadyExists),
            5 => Ok(Self::InvalidRequest),
            4001 => Ok(Self::OrderNotFound),
            4002 => Ok(Self::OrderNotAssignable),
            6001 => Ok(Self::PartnerNotFound),
            9001 => Ok(Self::InternalError),
            _ => Err(format!("Unknown error code: {value}")),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
