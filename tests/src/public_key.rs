// Copyright (c) 2023 The Solsnap Contributors

//! Public key derivation flows

use log::debug;
use serde_json::json;

use solsnap_proto::{ErrorCode, Response, RpcHandler, RpcRequest};

use crate::{expect_error, path_param, Vector};

/// Test `getPublicKey` requests against the provided vector.
///
/// `approve` indicates whether the handler under test approves prompts.
pub async fn test<T: RpcHandler>(t: T, approve: bool, v: &Vector) -> anyhow::Result<()> {
    let mut keys = Vec::with_capacity(v.paths.len());

    for p in v.paths {
        let expected = v.public_key(p);
        debug!("path: {:?}, expected: {}", p, expected);

        let req = RpcRequest::new("getPublicKey", json!({ "derivationPath": path_param(p) }));

        // Unconfirmed requests never prompt so succeed regardless of approval
        let a = t.handle("localhost", &req).await;
        assert_eq!(a, Ok(Response::PublicKey(expected.clone())), "path {p:?}");

        // Derivation is stable across requests
        let b = t.handle("localhost", &req).await;
        assert_eq!(a, b);

        keys.push(expected);
    }

    // Distinct paths yield distinct keys
    for i in 0..keys.len() {
        for j in i + 1..keys.len() {
            assert_ne!(keys[i], keys[j], "collision {:?} {:?}", v.paths[i], v.paths[j]);
        }
    }

    // Confirmed requests follow the approval decision
    let p = v.paths[0];
    let req = RpcRequest::new(
        "getPublicKey",
        json!({ "derivationPath": path_param(p), "confirm": true }),
    );
    let r = t.handle("localhost", &req).await;

    match approve {
        true => assert_eq!(r, Ok(Response::PublicKey(v.public_key(p)))),
        false => expect_error(&r, ErrorCode::UserRejected)?,
    }

    Ok(())
}
