// Copyright (c) 2023 The Solsnap Contributors

//! Protocol definitions for Solana wallet plugin communication
//!
//! This module provides the request / response shapes exchanged between
//! web pages (via the host transport) and the signing engine (`solsnap-core`), as well as
//! the closed set of error codes returned on failure.
//!
//! Requests arrive as a method name and a loosely typed JSON parameter object,
//! [`Request::parse`] resolves these into one of the typed request variants so
//! the engine only ever sees well-formed inputs.
//!
//! All binary values (public keys, signatures, message payloads) are
//! transferred as Base58 text.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, EnumVariantNames};

mod error;
pub use error::{ErrorCode, ProtoError, RpcError};

pub mod request;
pub use request::{
    DisplayMode, GetPublicKeyReq, Request, SignAllTransactionsReq, SignMessageReq,
    SignTransactionReq,
};

pub mod response;
pub use response::{Reply, Response};

/// Supported RPC methods
#[derive(Copy, Clone, PartialEq, Eq, Debug, EnumString, Display, EnumVariantNames, EnumIter)]
pub enum Method {
    /// Fetch the public key for a derivation path
    #[strum(serialize = "getPublicKey")]
    GetPublicKey,

    /// Sign a single serialized transaction
    #[strum(serialize = "signTransaction")]
    SignTransaction,

    /// Sign a batch of serialized transactions under one approval
    #[strum(serialize = "signAllTransactions")]
    SignAllTransactions,

    /// Sign an arbitrary message
    #[strum(serialize = "signMessage")]
    SignMessage,
}

/// Raw RPC request as received from the host transport
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct RpcRequest {
    /// Method name
    pub method: String,

    /// Method parameters (untrusted, validated by [`Request::parse`])
    #[serde(default)]
    pub params: serde_json::Value,
}

impl RpcRequest {
    /// Create a raw request from a method name and parameter object
    pub fn new(method: impl Into<String>, params: serde_json::Value) -> Self {
        Self {
            method: method.into(),
            params,
        }
    }
}

impl From<&Request> for RpcRequest {
    fn from(r: &Request) -> Self {
        Self {
            method: r.method().to_string(),
            params: r.params(),
        }
    }
}

/// [`RpcHandler`] is implemented by anything able to answer plugin requests,
/// allowing request flows to be shared between the engine and host wrappers.
#[async_trait]
pub trait RpcHandler {
    /// Handle a request issued by the provided origin host
    async fn handle(&self, origin: &str, req: &RpcRequest) -> Result<Response, RpcError>;
}

#[async_trait]
impl<T: RpcHandler + Sync + ?Sized> RpcHandler for &T {
    async fn handle(&self, origin: &str, req: &RpcRequest) -> Result<Response, RpcError> {
        T::handle(self, origin, req).await
    }
}
