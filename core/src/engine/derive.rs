// Copyright (c) 2023 The Solsnap Contributors

use ed25519_dalek::SigningKey;

use super::{Curve, EntropyVault, Error, BASE_PATH};
use crate::slip10::Slip10Node;

/// Derive the ed25519 signing key for a validated path below [`BASE_PATH`].
///
/// The vault is queried exactly once, root material is dropped (and zeroized)
/// before returning.
pub async fn derive_key_pair<V: EntropyVault + ?Sized>(
    vault: &V,
    path: &[u32],
) -> Result<SigningKey, Error> {
    let root = vault.root_entropy(&BASE_PATH, Curve::Ed25519).await?;

    key_pair_from_node(&root, path)
}

/// Derive the ed25519 signing key for `path` below the provided node
pub fn key_pair_from_node(root: &Slip10Node, path: &[u32]) -> Result<SigningKey, Error> {
    let node = root.derive_path(path)?;

    // A correctly derived hardened node always has private material,
    // absence indicates a vault integration fault
    let seed = node.private_key().ok_or(Error::MissingPrivateKey)?;

    Ok(SigningKey::from_bytes(seed))
}
