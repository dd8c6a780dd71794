// Copyright (c) 2023 The Solsnap Contributors

//! The [Engine] authorizes plugin requests.
//!
//! This handles raw method / parameter inputs and returns [Response]s to the
//! caller, see [proto][crate::proto] for request and response encodings.
//!
//! Each request moves through the same states:
//! `Received -> Validated -> KeyDerived -> AwaitingConfirmation -> {Signed | Rejected}`,
//! with all input validation occurring prior to any vault access or prompt.

use ed25519_dalek::{Signer, SigningKey};
use strum::{Display, EnumIter, EnumString, EnumVariantNames};

use async_trait::async_trait;
use solsnap_proto::{
    GetPublicKeyReq, Method, Request, Response, RpcError, RpcHandler, RpcRequest,
    SignAllTransactionsReq, SignMessageReq, SignTransactionReq,
};

use crate::{codec, path, prompt::Prompt};

mod driver;
pub use driver::{Approver, Curve, EntropyVault, BASE_PATH};

mod derive;
pub use derive::{derive_key_pair, key_pair_from_node};

mod error;
pub use error::Error;

/// Request state enumeration
#[derive(Copy, Clone, PartialEq, Debug, EnumString, Display, EnumVariantNames, EnumIter)]
pub enum State {
    /// Request received, not yet validated
    Received,
    /// Request shape, path, and payloads validated
    Validated,
    /// Signing key derived
    KeyDerived,
    /// Pending user confirmation
    AwaitingConfirmation,
    /// Request complete (signed / key released)
    Signed,
    /// Request rejected by user
    Rejected,
}

/// Log request state transitions
fn step(origin: &str, method: Method, state: State) {
    #[cfg(feature = "log")]
    log::debug!("{} {}: {}", origin, method, state);

    #[cfg(not(feature = "log"))]
    let _ = (origin, method, state);
}

/// [Engine] provides platform-independent support for plugin wallet operations
///
/// No state is retained between requests, concurrent requests share only the
/// (immutable) platform collaborators.
pub struct Engine<VLT: EntropyVault, APP: Approver> {
    vault: VLT,
    approver: APP,
}

impl<VLT: EntropyVault, APP: Approver> Engine<VLT, APP> {
    /// Create a new engine instance with the provided vault and approver
    pub const fn new(vault: VLT, approver: APP) -> Self {
        Self { vault, approver }
    }

    /// Fetch the engine vault
    pub fn vault(&self) -> &VLT {
        &self.vault
    }

    /// Fetch the engine approver
    pub fn approver(&self) -> &APP {
        &self.approver
    }

    /// Handle a raw request from the provided origin host
    pub async fn request(
        &self,
        origin: &str,
        method: &str,
        params: &serde_json::Value,
    ) -> Result<Response, Error> {
        #[cfg(feature = "log")]
        log::debug!("{} request: {}", origin, method);

        let req = Request::parse(method, params)?;

        self.execute(origin, &req).await
    }

    /// Execute a typed request from the provided origin host
    pub async fn execute(&self, origin: &str, req: &Request) -> Result<Response, Error> {
        step(origin, req.method(), State::Received);

        match req {
            Request::GetPublicKey(r) => self.get_public_key(origin, r).await,
            Request::SignTransaction(r) => self.sign_transaction(origin, r).await,
            Request::SignAllTransactions(r) => self.sign_all_transactions(origin, r).await,
            Request::SignMessage(r) => self.sign_message(origin, r).await,
        }
    }

    async fn get_public_key(&self, origin: &str, r: &GetPublicKeyReq) -> Result<Response, Error> {
        let m = Method::GetPublicKey;

        let path = path::validate_path(&r.derivation_path)?;
        step(origin, m, State::Validated);

        let public_key = {
            let key = self.derive(origin, m, &path).await?;
            codec::encode(key.verifying_key().as_bytes())
        };

        // Confirmation only where requested
        if r.confirm {
            self.confirm(origin, m, &Prompt::get_public_key(origin, &public_key))
                .await?;
        }

        step(origin, m, State::Signed);

        Ok(Response::PublicKey(public_key))
    }

    async fn sign_transaction(
        &self,
        origin: &str,
        r: &SignTransactionReq,
    ) -> Result<Response, Error> {
        let m = Method::SignTransaction;

        let path = path::validate_path(&r.derivation_path)?;
        let message = codec::decode(&r.message)?;
        step(origin, m, State::Validated);

        let key = self.derive(origin, m, &path).await?;

        self.confirm(origin, m, &Prompt::sign_transaction(origin, &r.message))
            .await?;

        let signature = key.sign(&message);
        step(origin, m, State::Signed);

        Ok(Response::Signed {
            public_key: codec::encode(key.verifying_key().as_bytes()),
            signature: codec::encode(signature.to_bytes()),
        })
    }

    async fn sign_all_transactions(
        &self,
        origin: &str,
        r: &SignAllTransactionsReq,
    ) -> Result<Response, Error> {
        let m = Method::SignAllTransactions;

        let path = path::validate_path(&r.derivation_path)?;

        // Decode the whole batch up front so one bad entry aborts everything
        let messages = r
            .messages
            .iter()
            .map(|s| codec::decode(s))
            .collect::<Result<Vec<_>, _>>()?;
        step(origin, m, State::Validated);

        let key = self.derive(origin, m, &path).await?;

        // One confirmation for the whole batch
        self.confirm(origin, m, &Prompt::sign_all_transactions(origin, &r.messages))
            .await?;

        let signatures = messages
            .iter()
            .map(|b| codec::encode(key.sign(b).to_bytes()))
            .collect();
        step(origin, m, State::Signed);

        Ok(Response::SignedAll {
            public_key: codec::encode(key.verifying_key().as_bytes()),
            signatures,
        })
    }

    async fn sign_message(&self, origin: &str, r: &SignMessageReq) -> Result<Response, Error> {
        let m = Method::SignMessage;

        let path = path::validate_path(&r.derivation_path)?;
        let message = codec::decode(&r.message)?;
        step(origin, m, State::Validated);

        let key = self.derive(origin, m, &path).await?;

        let display = codec::display_message(&message, &r.display_mode());
        self.confirm(origin, m, &Prompt::sign_message(origin, display))
            .await?;

        let signature = key.sign(&message);
        step(origin, m, State::Signed);

        Ok(Response::Signed {
            public_key: codec::encode(key.verifying_key().as_bytes()),
            signature: codec::encode(signature.to_bytes()),
        })
    }

    /// Derive the signing key for a validated path
    async fn derive(&self, origin: &str, m: Method, path: &[u32]) -> Result<SigningKey, Error> {
        #[cfg(feature = "log")]
        log::debug!("deriving key for {}", {
            let mut p = BASE_PATH.to_vec();
            p.extend_from_slice(path);
            path::format_path(&p)
        });

        let key = derive_key_pair(&self.vault, path).await?;
        step(origin, m, State::KeyDerived);

        Ok(key)
    }

    /// Request user confirmation, mapping a negative decision to [`Error::UserRejected`]
    async fn confirm(&self, origin: &str, m: Method, prompt: &Prompt) -> Result<(), Error> {
        step(origin, m, State::AwaitingConfirmation);

        if self.approver.confirm(prompt).await {
            return Ok(());
        }

        step(origin, m, State::Rejected);

        Err(Error::UserRejected)
    }
}

#[async_trait]
impl<VLT: EntropyVault, APP: Approver> RpcHandler for Engine<VLT, APP> {
    async fn handle(&self, origin: &str, req: &RpcRequest) -> Result<Response, RpcError> {
        self.request(origin, &req.method, &req.params)
            .await
            .map_err(|e| {
                #[cfg(feature = "log")]
                match e.code() {
                    solsnap_proto::ErrorCode::Internal => {
                        log::error!("{} {} failed: {}", origin, req.method, e)
                    }
                    _ => log::warn!("{} {} failed: {}", origin, req.method, e),
                }

                RpcError::from(e)
            })
    }
}
