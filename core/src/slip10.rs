// Copyright (c) 2023 The Solsnap Contributors

//! SLIP-0010 ed25519 hierarchical derivation
//!
//! <https://github.com/satoshilabs/slips/blob/master/slip-0010.md>
//!
//! Only hardened derivation is defined for ed25519, each child is derived as
//! `HMAC-SHA512(key = chain_code, data = 0x00 || private_key || ser32(index | 2^31))`.

use core::fmt;

use ed25519_dalek::SigningKey;
use hmac::{Hmac, Mac};
use sha2::Sha512;
use zeroize::{Zeroize, Zeroizing};

use crate::engine::Error;

type HmacSha512 = Hmac<Sha512>;

/// Hardened index flag
pub const HARDENED: u32 = 1 << 31;

/// Master key HMAC key for the ed25519 curve
const ED25519_SEED_KEY: &[u8] = b"ed25519 seed";

/// SLIP-0010 node.
///
/// Key material is zeroized on drop, nodes are derived per request and
/// never cloned or serialized.
pub struct Slip10Node {
    private_key: Option<Zeroizing<[u8; 32]>>,
    chain_code: Zeroizing<[u8; 32]>,
    depth: usize,
    index: u32,
}

impl Slip10Node {
    /// Compute the master node from a seed (typically a 64-byte BIP-0039 seed)
    pub fn from_seed(seed: &[u8]) -> Result<Self, Error> {
        let (private_key, chain_code) = hmac_split(ED25519_SEED_KEY, &[seed])?;

        Ok(Self {
            private_key: Some(private_key),
            chain_code,
            depth: 0,
            index: 0,
        })
    }

    /// Derive a hardened child node, `index` must be below [`HARDENED`]
    /// (the hardened flag is applied here)
    pub fn derive(&self, index: u32) -> Result<Self, Error> {
        if index >= HARDENED {
            return Err(Error::InvalidIndex(index));
        }

        let parent = self.private_key.as_ref().ok_or(Error::MissingPrivateKey)?;
        let index = index | HARDENED;
        let index_bytes = index.to_be_bytes();

        let (private_key, chain_code) = hmac_split(
            &self.chain_code[..],
            &[&[0x00u8][..], &parent[..], &index_bytes[..]],
        )?;

        Ok(Self {
            private_key: Some(private_key),
            chain_code,
            depth: self.depth + 1,
            index,
        })
    }

    /// Derive a descendant node by walking the provided (unhardened) indices
    pub fn derive_path(&self, path: &[u32]) -> Result<Self, Error> {
        let (first, rest) = path.split_first().ok_or(Error::EmptyPath)?;

        let mut node = self.derive(*first)?;
        for i in rest {
            node = node.derive(*i)?;
        }

        Ok(node)
    }

    /// Drop private key material, returning a public-only node
    pub fn neuter(mut self) -> Self {
        self.private_key = None;
        self
    }

    /// Fetch node private key, if available
    pub fn private_key(&self) -> Option<&[u8; 32]> {
        self.private_key.as_deref()
    }

    /// Fetch node chain code
    pub fn chain_code(&self) -> &[u8; 32] {
        &self.chain_code
    }

    /// Fetch node depth (0 for the master node)
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Fetch node child index (with hardened flag, 0 for the master node)
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Compute the SLIP-0010 public key (`0x00 || ed25519 public key`)
    pub fn public_key(&self) -> Result<[u8; 33], Error> {
        let private_key = self.private_key().ok_or(Error::MissingPrivateKey)?;
        let signing_key = SigningKey::from_bytes(private_key);

        let mut p = [0u8; 33];
        p[1..].copy_from_slice(signing_key.verifying_key().as_bytes());

        Ok(p)
    }
}

impl fmt::Debug for Slip10Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slip10Node")
            .field("depth", &self.depth)
            .field("index", &format_args!("{:#x}", self.index))
            .field("private", &self.private_key.is_some())
            .finish_non_exhaustive()
    }
}

/// Compute `HMAC-SHA512(key, data...)` and split into `(IL, IR)`
fn hmac_split(
    key: &[u8],
    data: &[&[u8]],
) -> Result<(Zeroizing<[u8; 32]>, Zeroizing<[u8; 32]>), Error> {
    let mut mac = HmacSha512::new_from_slice(key).map_err(|_| Error::DerivationFailed)?;
    for d in data {
        mac.update(d);
    }

    let mut i = mac.finalize().into_bytes();

    let mut il = Zeroizing::new([0u8; 32]);
    let mut ir = Zeroizing::new([0u8; 32]);
    il.copy_from_slice(&i[..32]);
    ir.copy_from_slice(&i[32..]);

    i.as_mut_slice().zeroize();

    Ok((il, ir))
}
