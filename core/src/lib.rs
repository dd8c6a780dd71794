// Copyright (c) 2023 The Solsnap Contributors

//! Solana wallet plugin core
//!
//! This provides a common [Engine][engine::Engine] turning untrusted plugin
//! requests into derived ed25519 keys and signatures, gated on user
//! confirmation.
//!
//! The engine is generic over two platform collaborators:
//!
//! - an [`EntropyVault`][engine::EntropyVault] supplying the SLIP-0010 root
//!   node for the fixed `m/44'/501'` base path
//! - an [`Approver`][engine::Approver] presenting a [`Prompt`][prompt::Prompt]
//!   to the user and returning their decision
//!
//! See [solsnap_proto] for request / response objects and wire encodings.
//!
//! ## Operations
//!
//! Every request passes through the same sequence:
//!
//! 1. Request parameters are resolved to a typed [`Request`][proto::Request],
//!    unknown methods are rejected without inspecting parameters
//! 2. The derivation path is checked by the [path validator][path::validate_path]
//!    and any Base58 payloads are decoded, so malformed requests never reach
//!    the vault
//! 3. The vault is queried once for root entropy and the child key derived
//! 4. Signing operations (and `getPublicKey` with `confirm` set) render a single
//!    confirmation prompt, a negative decision aborts the request
//! 5. Payloads are signed and results Base58 encoded
//!
//! Nothing is cached between requests, each request derives (and drops) its own
//! key material.

pub use solsnap_proto::{self as proto};

pub mod codec;

pub mod engine;

pub mod path;

pub mod prompt;

pub mod slip10;
