// Copyright (c) 2023 The Solsnap Contributors

//! Wire and display encodings
//!
//! Binary values cross the plugin boundary as Base58 text. Messages shown
//! for signing are rendered per the requested [`DisplayMode`], this only
//! affects what the user sees, signatures are always computed over the
//! decoded bytes.

use solsnap_proto::DisplayMode;

use crate::engine::Error;

/// Placeholder shown when a message cannot be rendered in the requested mode
pub const UNDECODABLE: &str = "Unable to decode message";

/// Encode bytes as Base58 text
pub fn encode(b: impl AsRef<[u8]>) -> String {
    bs58::encode(b).into_string()
}

/// Decode Base58 text to bytes
pub fn decode(s: &str) -> Result<Vec<u8>, Error> {
    bs58::decode(s).into_vec().map_err(|_e| {
        #[cfg(feature = "log")]
        log::debug!("base58 decode failed: {}", _e);

        Error::InvalidEncoding
    })
}

/// Render a message for display
pub fn display_message(b: &[u8], mode: &DisplayMode) -> String {
    match mode {
        DisplayMode::Utf8 => String::from_utf8_lossy(b).into_owned(),
        DisplayMode::Hex => format!("0x{}", hex::encode(b)),
        DisplayMode::Other(_) => UNDECODABLE.to_string(),
    }
}
