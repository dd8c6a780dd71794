// Copyright (c) 2023 The Solsnap Contributors

//! Response objects and the reply envelope

use serde::{Deserialize, Serialize};

use crate::RpcError;

/// Plugin response, encoded untagged so `getPublicKey` returns a bare
/// Base58 string while signing operations return objects.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Response {
    /// Base58 encoded public key
    PublicKey(String),

    /// Single signature (`signTransaction`, `signMessage`)
    #[serde(rename_all = "camelCase")]
    Signed {
        public_key: String,
        signature: String,
    },

    /// Ordered signatures (`signAllTransactions`), `signatures[i]` signs `messages[i]`
    #[serde(rename_all = "camelCase")]
    SignedAll {
        public_key: String,
        signatures: Vec<String>,
    },
}

impl Response {
    /// Fetch the Base58 public key carried by any response
    pub fn public_key(&self) -> &str {
        match self {
            Response::PublicKey(k) => k,
            Response::Signed { public_key, .. } => public_key,
            Response::SignedAll { public_key, .. } => public_key,
        }
    }
}

/// Reply envelope as returned to the host transport
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Reply {
    Result(Response),
    Error(RpcError),
}

impl From<Result<Response, RpcError>> for Reply {
    fn from(r: Result<Response, RpcError>) -> Self {
        match r {
            Ok(v) => Reply::Result(v),
            Err(e) => Reply::Error(e),
        }
    }
}

impl From<Reply> for Result<Response, RpcError> {
    fn from(r: Reply) -> Self {
        match r {
            Reply::Result(v) => Ok(v),
            Reply::Error(e) => Err(e),
        }
    }
}
