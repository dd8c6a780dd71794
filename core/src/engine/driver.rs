// Copyright (c) 2023 The Solsnap Contributors

use async_trait::async_trait;
use strum::{Display, EnumString};

use super::Error;
use crate::{prompt::Prompt, slip10::Slip10Node};

/// Base derivation path (`m/44'/501'`), request paths are appended to this
pub const BASE_PATH: [u32; 2] = [44, 501];

/// Curve / derivation scheme requested from the vault
#[derive(Copy, Clone, PartialEq, Eq, Debug, Display, EnumString)]
pub enum Curve {
    /// SLIP-0010 ed25519 (hardened only)
    #[strum(serialize = "ed25519")]
    Ed25519,
}

/// [`EntropyVault`] provides access to the platform-held root secret
#[async_trait]
pub trait EntropyVault: Send + Sync {
    /// Fetch the SLIP-0010 node for `base_path` (unhardened indices)
    /// on the provided curve.
    ///
    /// This may suspend while the platform unlocks or retrieves the vault.
    async fn root_entropy(&self, base_path: &[u32], curve: Curve) -> Result<Slip10Node, Error>;
}

#[async_trait]
impl<T: EntropyVault + ?Sized> EntropyVault for &T {
    async fn root_entropy(&self, base_path: &[u32], curve: Curve) -> Result<Slip10Node, Error> {
        T::root_entropy(self, base_path, curve).await
    }
}

/// [`Approver`] presents confirmation prompts to the user
#[async_trait]
pub trait Approver: Send + Sync {
    /// Show the provided prompt, returning `true` only on an explicit approval.
    ///
    /// This may suspend indefinitely awaiting user input.
    async fn confirm(&self, prompt: &Prompt) -> bool;
}

#[async_trait]
impl<T: Approver + ?Sized> Approver for &T {
    async fn confirm(&self, prompt: &Prompt) -> bool {
        T::confirm(self, prompt).await
    }
}
