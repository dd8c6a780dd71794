// Copyright (c) 2023 The Solsnap Contributors

//! Solana wallet plugin host library (and CLI)
//!
//! Provides host-side [EntropyVault][solsnap_core::engine::EntropyVault] and
//! [Approver][solsnap_core::engine::Approver] implementations for running the
//! plugin [Engine] outside of a wallet runtime.

use ed25519_dalek::{Signature, VerifyingKey};

/// Re-export `solsnap-core` modules for consumers
pub use solsnap_core::{codec, engine, engine::Engine, path, prompt, slip10};

/// Re-export `solsnap-proto` for consumers
pub use solsnap_proto::{self as proto};

mod approver;
pub use approver::{render, ApproveMode, FixedApprover, GenericApprover, TerminalApprover};

mod vault;
pub use vault::MnemonicVault;

mod error;
pub use error::Error;

/// Engine using host collaborators
pub type HostEngine = Engine<MnemonicVault, GenericApprover>;

/// Create a host engine from a mnemonic phrase and approval mode
pub fn host_engine(phrase: &str, passphrase: &str, mode: ApproveMode) -> Result<HostEngine, Error> {
    let vault = MnemonicVault::from_phrase(phrase, passphrase)?;

    Ok(Engine::new(vault, GenericApprover::from(mode)))
}

/// Verify a Base58 signature over a Base58 message for a Base58 public key
pub fn verify(public_key: &str, message: &str, signature: &str) -> Result<(), Error> {
    let k: [u8; 32] = bs58::decode(public_key)
        .into_vec()?
        .try_into()
        .map_err(|_| Error::InvalidKey)?;
    let k = VerifyingKey::from_bytes(&k).map_err(|_| Error::InvalidKey)?;

    let s: [u8; 64] = bs58::decode(signature)
        .into_vec()?
        .try_into()
        .map_err(|_| Error::InvalidSignature)?;

    let m = bs58::decode(message).into_vec()?;

    k.verify_strict(&m, &Signature::from_bytes(&s))
        .map_err(|_| Error::VerificationFailed)
}
