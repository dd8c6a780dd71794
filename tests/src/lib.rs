// Copyright (c) 2023 The Solsnap Contributors

//! Tests for Solana wallet plugin integration.
//!
//! Generic over [solsnap_proto::RpcHandler] for reuse.
//!
//! Expected keys are computed here from the vector mnemonic using an
//! independent SLIP-0010 implementation, so handlers are checked against
//! the published derivation scheme rather than themselves.

use bip39::{Language, Mnemonic, Seed};
use ed25519_dalek::{Signature, SigningKey, VerifyingKey};

use solsnap_proto::{ErrorCode, Response, RpcError};

pub mod public_key;


pub mod message;

pub mod errors;

/// Hardened index flag
const HARDENED: u32 = 1 << 31;

/// Base path prefix (`m/44'/501'`)
const BASE_PATH: [u32; 2] = [44 | HARDENED, 501 | HARDENED];

/// Test vector for derivation and signing flows
pub struct Vector {
    pub mnemonic: &'static str,
    /// Request path segments
    pub paths: &'static [&'static [&'static str]],
}

impl Vector {
    /// Compute BIP-0039 seed (empty passphrase)
    pub fn seed(&self) -> [u8; 64] {
        let m = Mnemonic::from_phrase(self.mnemonic, Language::English).unwrap();
        let seed = Seed::new(&m, "");

        let mut b = [0u8; 64];
        b.copy_from_slice(seed.as_bytes());

        b
    }

    /// Compute the expected signing key for request path segments
    pub fn signing_key(&self, path: &[&str]) -> SigningKey {
        let mut p = BASE_PATH.to_vec();
        for s in path {
            let i: u32 = s.trim_end_matches('\'').parse().unwrap();
            p.push(i | HARDENED);
        }

        let k = slip10_ed25519::derive_ed25519_private_key(&self.seed(), &p);
        SigningKey::from_bytes(&k)
    }

    /// Compute the expected Base58 public key for request path segments
    pub fn public_key(&self, path: &[&str]) -> String {
        bs58::encode(self.signing_key(path).verifying_key().as_bytes()).into_string()
    }
}

pub const VECTORS: &[Vector] = &[
    Vector {
        mnemonic: "pudding sausage permit foil zero response legend dash buffalo infant blame trust race render ask uncover motor pull system build grant window negative theory",
        paths: &[&["0'"], &["0'", "0'"], &["1'", "0'"], &["0'", "1'"], &["2147483647'"]],
    },
    Vector {
        mnemonic: "mirror stamp work suffer now tilt demand eagle love repair country poem exhaust output conduct panic kidney wide able clown zebra rural moon wrist",
        paths: &[&["0'"], &["3'", "7'", "11'"]],
    },
];

/// Build a `derivationPath` parameter from path segments
pub fn path_param(path: &[&str]) -> serde_json::Value {
    serde_json::Value::from(path.iter().map(|s| s.to_string()).collect::<Vec<_>>())
}

/// Verify a Base58 signature over `message` for the Base58 `public_key`
pub fn verify(public_key: &str, message: &[u8], signature: &str) -> anyhow::Result<()> {
    let k: [u8; 32] = bs58::decode(public_key)
        .into_vec()?
        .try_into()
        .map_err(|_| anyhow::anyhow!("invalid public key length"))?;
    let s: [u8; 64] = bs58::decode(signature)
        .into_vec()?
        .try_into()
        .map_err(|_| anyhow::anyhow!("invalid signature length"))?;

    VerifyingKey::from_bytes(&k)?.verify_strict(message, &Signature::from_bytes(&s))?;

    Ok(())
}

/// Check a response is an error with the expected code
pub fn expect_error(r: &Result<Response, RpcError>, code: ErrorCode) -> anyhow::Result<()> {
    match r {
        Err(e) if e.kind() == Some(code) => Ok(()),
        _ => Err(anyhow::anyhow!("expected {code:?}, got: {r:?}")),
    }
}

/// Generate a random payload of the provided length
pub fn random_message(n: usize) -> Vec<u8> {
    (0..n).map(|_| rand::random::<u8>()).collect()
}
