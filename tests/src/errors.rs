// Copyright (c) 2023 The Solsnap Contributors

//! Request rejection flows, these fail prior to any prompt so
//! results are independent of approval.

use serde_json::json;

use solsnap_proto::{ErrorCode, RpcError, RpcHandler, RpcRequest};

use crate::expect_error;

/// Test unsupported methods and malformed inputs
pub async fn test<T: RpcHandler>(t: T) -> anyhow::Result<()> {
    // Unknown methods return the exact wire error
    for m in ["foo", "getpublickey", "signTransactions", ""] {
        let r = t
            .handle("localhost", &RpcRequest::new(m, json!({ "derivationPath": ["0'"] })))
            .await;

        assert_eq!(
            r,
            Err(RpcError {
                code: 4200,
                message: "The requested method is not supported.".to_string(),
            }),
            "method '{m}'"
        );
    }

    let tests = &[
        ("getPublicKey", json!({})),
        ("getPublicKey", json!(null)),
        ("getPublicKey", json!([["0'"]])),
        ("signTransaction", json!([["0'"], "2g"])),
        ("signAllTransactions", json!([["0'"], ["2g"]])),
        ("signMessage", json!([["0'"], "2g"])),
        ("getPublicKey", json!({ "derivationPath": [] })),
        ("getPublicKey", json!({ "derivationPath": "0'" })),
        ("getPublicKey", json!({ "derivationPath": ["0"] })),
        ("getPublicKey", json!({ "derivationPath": ["01'"] })),
        ("getPublicKey", json!({ "derivationPath": ["-1'"] })),
        ("getPublicKey", json!({ "derivationPath": ["2147483648'"] })),
        ("getPublicKey", json!({ "derivationPath": ["0'", "a'"] })),
        ("signTransaction", json!({ "derivationPath": ["0'"] })),
        ("signTransaction", json!({ "derivationPath": ["0'"], "message": "" })),
        ("signTransaction", json!({ "derivationPath": ["0'"], "message": "0OIl" })),
        ("signAllTransactions", json!({ "derivationPath": ["0'"], "messages": [] })),
        ("signAllTransactions", json!({ "derivationPath": ["0'"], "messages": ["2g", ""] })),
        ("signMessage", json!({ "derivationPath": ["0'"], "message": 12 })),
        ("signMessage", json!({ "derivationPath": ["0"], "message": "2g" })),
    ];

    for (m, p) in tests {
        let r = t.handle("localhost", &RpcRequest::new(*m, p.clone())).await;
        expect_error(&r, ErrorCode::InvalidInput).map_err(|e| e.context(format!("{m} {p}")))?;

        if let Err(e) = &r {
            assert_eq!(e.message, "Invalid input.");
        }
    }

    Ok(())
}
