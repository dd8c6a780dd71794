// Copyright (c) 2023 The Solsnap Contributors

//! Arbitrary message signing flows

use serde_json::json;

use solsnap_proto::{ErrorCode, Response, RpcHandler, RpcRequest};

use crate::{expect_error, path_param, verify, Vector};

/// Test `signMessage` requests with each display mode.
///
/// Display only affects the prompt, signatures always cover the raw bytes.
pub async fn test<T: RpcHandler>(t: T, approve: bool, v: &Vector) -> anyhow::Result<()> {
    let tests: &[(Option<&str>, &[u8])] = &[
        (None, b"Sign in to example.com"),
        (Some("utf8"), "nonce: 1234 \u{1f511}".as_bytes()),
        (Some("hex"), &[0xde, 0xad, 0xbe, 0xef]),
        (Some("base64"), b"unknown display mode"),
        (None, &[0xff, 0xfe, 0x00]),
    ];

    let p = v.paths[0];
    let public_key = v.public_key(p);

    for (display, message) in tests {
        let mut params = json!({
            "derivationPath": path_param(p),
            "message": bs58::encode(message).into_string(),
        });
        if let Some(d) = display {
            params["display"] = json!(d);
        }

        let r = t
            .handle("localhost", &RpcRequest::new("signMessage", params))
            .await;

        if !approve {
            expect_error(&r, ErrorCode::UserRejected)?;
            continue;
        }

        match r {
            Ok(Response::Signed {
                public_key: k,
                signature,
            }) => {
                assert_eq!(k, public_key);
                verify(&k, message, &signature)?;
            }
            _ => return Err(anyhow::anyhow!("unexpected response: {r:?}")),
        }
    }

    Ok(())
}
