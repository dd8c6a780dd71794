// Copyright (c) 2023 The Solsnap Contributors

/// Solana wallet plugin host Error Type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Mnemonic phrase could not be parsed
    #[error("Invalid mnemonic: {0}")]
    Mnemonic(String),

    /// Base58 decoding failed
    #[error("Invalid base58 encoding: {0}")]
    Encoding(#[from] bs58::decode::Error),

    /// Public key malformed or not a valid curve point
    #[error("Invalid public key")]
    InvalidKey,

    /// Signature malformed
    #[error("Invalid signature length")]
    InvalidSignature,

    /// Signature verification failed
    #[error("Signature verification failed")]
    VerificationFailed,
}
