// Copyright (c) 2023 The Solsnap Contributors

use solsnap_proto::{ErrorCode, ProtoError, RpcError};

/// [Engine][super::Engine] errors
///
/// Variants carry detail for logging, [`Error::code`] collapses these
/// into the protocol level [`ErrorCode`] returned to callers.
#[derive(Clone, PartialEq, Eq, Debug, thiserror::Error)]
pub enum Error {
    /// Request parameters missing or mistyped
    #[error("invalid params: {0}")]
    InvalidParams(String),

    /// Empty derivation path
    #[error("empty derivation path")]
    EmptyPath,

    /// Derivation path segment is not a canonical hardened index
    #[error("invalid path segment '{0}'")]
    InvalidPathSegment(String),

    /// Malformed Base58 payload
    #[error("invalid base58 encoding")]
    InvalidEncoding,

    /// Confirmation declined
    #[error("request rejected by user")]
    UserRejected,

    /// Unrecognised method
    #[error("unsupported method '{0}'")]
    MethodNotSupported(String),

    /// Derived node has no private key material
    #[error("derived node missing private key")]
    MissingPrivateKey,

    /// Non-hardened or out of range child index
    #[error("invalid child index {0:#x}")]
    InvalidIndex(u32),

    /// Vault unable to supply root entropy
    #[error("root entropy unavailable: {0}")]
    EntropyUnavailable(String),

    /// HMAC setup failed
    #[error("key derivation failed")]
    DerivationFailed,
}

impl Error {
    /// Fetch the protocol [`ErrorCode`] for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::InvalidParams(_)
            | Error::EmptyPath
            | Error::InvalidPathSegment(_)
            | Error::InvalidEncoding => ErrorCode::InvalidInput,
            Error::UserRejected => ErrorCode::UserRejected,
            Error::MethodNotSupported(_) => ErrorCode::MethodNotSupported,
            Error::MissingPrivateKey
            | Error::InvalidIndex(_)
            | Error::EntropyUnavailable(_)
            | Error::DerivationFailed => ErrorCode::Internal,
        }
    }
}

impl From<ProtoError> for Error {
    fn from(e: ProtoError) -> Self {
        match e {
            ProtoError::UnknownMethod(m) => Error::MethodNotSupported(m),
            ProtoError::InvalidParams(p) => Error::InvalidParams(p),
        }
    }
}

impl From<&Error> for RpcError {
    fn from(e: &Error) -> Self {
        RpcError::from(e.code())
    }
}

impl From<Error> for RpcError {
    fn from(e: Error) -> Self {
        RpcError::from(&e)
    }
}
