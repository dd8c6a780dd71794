// Copyright (c) 2023 The Solsnap Contributors

//! Typed request parameters
//!
//! Each request carries the caller-supplied derivation path (hardened
//! segments of the form `<digits>'`, appended to the fixed `m/44'/501'`
//! prefix) plus operation specific fields.
//!
//! ## Wire encoding (JSON, camelCase):
//! ```text
//! getPublicKey         { "derivationPath": ["0'", "0'"], "confirm": true }
//! signTransaction      { "derivationPath": ["0'"], "message": "<base58>" }
//! signAllTransactions  { "derivationPath": ["0'"], "messages": ["<base58>", ...] }
//! signMessage          { "derivationPath": ["0'"], "message": "<base58>", "display": "hex" }
//! ```

use std::str::FromStr;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::{Method, ProtoError};

/// Request to fetch a derived public key, optionally gated on user confirmation
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPublicKeyReq {
    /// Path segments below the base path
    pub derivation_path: Vec<String>,
    /// Show the key to the user for confirmation prior to returning it
    #[serde(default)]
    pub confirm: bool,
}

/// Request to sign a single Base58 encoded transaction message
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignTransactionReq {
    pub derivation_path: Vec<String>,
    pub message: String,
}

/// Request to sign a batch of Base58 encoded transaction messages
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignAllTransactionsReq {
    pub derivation_path: Vec<String>,
    pub messages: Vec<String>,
}

/// Request to sign an arbitrary Base58 encoded message
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignMessageReq {
    pub derivation_path: Vec<String>,
    pub message: String,
    /// Display mode for the confirmation prompt, see [`DisplayMode`]
    #[serde(default = "default_display")]
    pub display: String,
}

fn default_display() -> String {
    DisplayMode::Utf8.to_string()
}

impl SignMessageReq {
    /// Resolve the requested [`DisplayMode`]
    pub fn display_mode(&self) -> DisplayMode {
        DisplayMode::from_str(&self.display)
            .unwrap_or_else(|_| DisplayMode::Other(self.display.clone()))
    }
}

/// Message display modes for confirmation prompts.
///
/// Unrecognised modes are retained (rather than rejected) as display only
/// affects what the user is shown, not the signed bytes.
#[derive(Clone, PartialEq, Eq, Debug, EnumString, Display)]
pub enum DisplayMode {
    #[strum(serialize = "utf8")]
    Utf8,
    #[strum(serialize = "hex")]
    Hex,
    #[strum(default)]
    Other(String),
}

/// Typed plugin request
#[derive(Clone, PartialEq, Debug)]
pub enum Request {
    GetPublicKey(GetPublicKeyReq),
    SignTransaction(SignTransactionReq),
    SignAllTransactions(SignAllTransactionsReq),
    SignMessage(SignMessageReq),
}

/// Helper for decoding JSON params to request objects
fn decode_params<T: DeserializeOwned>(params: &serde_json::Value) -> Result<T, ProtoError> {
    // Parameters are named, positional arrays are not accepted
    if !params.is_object() {
        return Err(ProtoError::InvalidParams("params must be an object".to_string()));
    }

    T::deserialize(params).map_err(|e| ProtoError::InvalidParams(e.to_string()))
}

impl Request {
    /// Resolve a raw method name and parameter object to a typed request.
    ///
    /// The method is resolved prior to inspecting parameters, so unknown
    /// methods are always reported as such regardless of params.
    pub fn parse(method: &str, params: &serde_json::Value) -> Result<Self, ProtoError> {
        let m = Method::from_str(method)
            .map_err(|_| ProtoError::UnknownMethod(method.to_string()))?;

        let r = match m {
            Method::GetPublicKey => Request::GetPublicKey(decode_params(params)?),
            Method::SignTransaction => Request::SignTransaction(decode_params(params)?),
            Method::SignAllTransactions => Request::SignAllTransactions(decode_params(params)?),
            Method::SignMessage => Request::SignMessage(decode_params(params)?),
        };

        r.validate()?;

        Ok(r)
    }

    /// Check field constraints not expressed by the type system
    fn validate(&self) -> Result<(), ProtoError> {
        match self {
            Request::GetPublicKey(_) => (),
            Request::SignTransaction(SignTransactionReq { message, .. })
            | Request::SignMessage(SignMessageReq { message, .. }) => {
                if message.is_empty() {
                    return Err(ProtoError::InvalidParams("empty message".to_string()));
                }
            }
            Request::SignAllTransactions(SignAllTransactionsReq { messages, .. }) => {
                if messages.is_empty() {
                    return Err(ProtoError::InvalidParams("empty messages".to_string()));
                }
                if let Some(i) = messages.iter().position(|m| m.is_empty()) {
                    return Err(ProtoError::InvalidParams(format!("empty message at index {i}")));
                }
            }
        }

        Ok(())
    }

    /// Fetch the [`Method`] for this request
    pub fn method(&self) -> Method {
        match self {
            Request::GetPublicKey(_) => Method::GetPublicKey,
            Request::SignTransaction(_) => Method::SignTransaction,
            Request::SignAllTransactions(_) => Method::SignAllTransactions,
            Request::SignMessage(_) => Method::SignMessage,
        }
    }

    /// Fetch the (unvalidated) derivation path segments for this request
    pub fn derivation_path(&self) -> &[String] {
        match self {
            Request::GetPublicKey(r) => &r.derivation_path,
            Request::SignTransaction(r) => &r.derivation_path,
            Request::SignAllTransactions(r) => &r.derivation_path,
            Request::SignMessage(r) => &r.derivation_path,
        }
    }

    /// Encode request parameters as a JSON object
    pub fn params(&self) -> serde_json::Value {
        let v = match self {
            Request::GetPublicKey(r) => serde_json::to_value(r),
            Request::SignTransaction(r) => serde_json::to_value(r),
            Request::SignAllTransactions(r) => serde_json::to_value(r),
            Request::SignMessage(r) => serde_json::to_value(r),
        };

        v.unwrap_or_default()
    }
}
