// Copyright (c) 2023 The Solsnap Contributors

use serde::{Deserialize, Serialize};

/// Protocol-level error codes, preserved on the wire for compatibility
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[repr(i32)]
pub enum ErrorCode {
    /// Malformed or missing request input
    InvalidInput = -32000,

    /// Internal failure (host / runtime integration defect)
    Internal = -32603,

    /// User declined the confirmation prompt
    UserRejected = 4001,

    /// Unrecognised method name
    MethodNotSupported = 4200,
}

impl ErrorCode {
    /// Numeric wire code
    pub const fn code(&self) -> i32 {
        *self as i32
    }

    /// Default message returned with this code
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::InvalidInput => "Invalid input.",
            ErrorCode::Internal => "Internal JSON-RPC error.",
            ErrorCode::UserRejected => "User rejected the request.",
            ErrorCode::MethodNotSupported => "The requested method is not supported.",
        }
    }

    /// Resolve a numeric wire code
    pub fn from_code(code: i32) -> Option<Self> {
        [
            ErrorCode::InvalidInput,
            ErrorCode::Internal,
            ErrorCode::UserRejected,
            ErrorCode::MethodNotSupported,
        ]
        .into_iter()
        .find(|c| c.code() == code)
    }
}

/// Wire error object
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, thiserror::Error)]
#[error("{message} ({code})")]
pub struct RpcError {
    pub code: i32,
    pub message: String,
}

impl RpcError {
    /// Fetch the [`ErrorCode`] for this error, if known
    pub fn kind(&self) -> Option<ErrorCode> {
        ErrorCode::from_code(self.code)
    }
}

impl From<ErrorCode> for RpcError {
    fn from(c: ErrorCode) -> Self {
        Self {
            code: c.code(),
            message: c.message().to_string(),
        }
    }
}

/// Errors raised while resolving raw requests
#[derive(Clone, PartialEq, Eq, Debug, thiserror::Error)]
pub enum ProtoError {
    /// Method name does not match any supported [`Method`][crate::Method]
    #[error("unknown method '{0}'")]
    UnknownMethod(String),

    /// Parameters missing, mistyped, or empty where required
    #[error("invalid params: {0}")]
    InvalidParams(String),
}

impl From<&ProtoError> for ErrorCode {
    fn from(e: &ProtoError) -> Self {
        match e {
            ProtoError::UnknownMethod(_) => ErrorCode::MethodNotSupported,
            ProtoError::InvalidParams(_) => ErrorCode::InvalidInput,
        }
    }
}
