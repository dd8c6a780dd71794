// Copyright (c) 2023 The Solsnap Contributors

//! Mnemonic backed [EntropyVault]

use async_trait::async_trait;
use bip39::{Language, Mnemonic, Seed};
use log::debug;
use zeroize::Zeroizing;

use solsnap_core::{
    engine::{Curve, EntropyVault, Error as EngineError},
    slip10::Slip10Node,
};

use crate::Error;

/// [EntropyVault] implementation holding a BIP-0039 seed in memory
pub struct MnemonicVault {
    seed: Zeroizing<[u8; 64]>,
}

impl MnemonicVault {
    /// Create a vault from a BIP-0039 mnemonic phrase and (optional, may be empty)
    /// passphrase
    pub fn from_phrase(phrase: &str, passphrase: &str) -> Result<Self, Error> {
        let m = Mnemonic::from_phrase(phrase.trim(), Language::English)
            .map_err(|e| Error::Mnemonic(e.to_string()))?;

        let seed = Seed::new(&m, passphrase);

        let mut b = Zeroizing::new([0u8; 64]);
        b.copy_from_slice(seed.as_bytes());

        Ok(Self { seed: b })
    }

    /// Create a vault from a raw 64-byte seed
    pub fn from_seed(seed: [u8; 64]) -> Self {
        Self {
            seed: Zeroizing::new(seed),
        }
    }
}

#[async_trait]
impl EntropyVault for MnemonicVault {
    async fn root_entropy(
        &self,
        base_path: &[u32],
        curve: Curve,
    ) -> Result<Slip10Node, EngineError> {
        debug!("root entropy request for {:?} ({})", base_path, curve);

        match curve {
            Curve::Ed25519 => Slip10Node::from_seed(&self.seed[..])?.derive_path(base_path),
        }
    }
}

impl std::fmt::Debug for MnemonicVault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MnemonicVault").finish_non_exhaustive()
    }
}
