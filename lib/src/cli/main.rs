// Copyright (c) 2023 The Solsnap Contributors

//! Command line utility for exercising the Solana wallet plugin engine

use clap::Parser;
use log::{debug, info, LevelFilter};

use solsnap::{
    proto::{
        DisplayMode, GetPublicKeyReq, Reply, Request, RpcHandler, RpcRequest, SignAllTransactionsReq,
        SignMessageReq, SignTransactionReq,
    },
    host_engine, verify, ApproveMode,
};

/// Solana wallet plugin command line utility
#[derive(Clone, PartialEq, Debug, Parser)]
struct Options {
    /// BIP-0039 mnemonic phrase for key derivation
    #[clap(long, env = "SOLSNAP_MNEMONIC", hide_env_values = true)]
    mnemonic: Option<String>,

    /// BIP-0039 passphrase
    #[clap(long, env = "SOLSNAP_PASSPHRASE", hide_env_values = true, default_value = "")]
    passphrase: String,

    /// Origin host shown in confirmation prompts
    #[clap(long, default_value = "localhost")]
    origin: String,

    /// Confirmation mode
    #[clap(long, value_enum, default_value = "prompt")]
    approve: ApproveMode,

    /// Subcommand to execute
    #[clap(subcommand)]
    cmd: Actions,

    /// Enable verbose logging
    #[clap(long, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Clone, PartialEq, Debug, Parser)]
#[non_exhaustive]
enum Actions {
    /// Fetch the public key for a derivation path
    GetPublicKey {
        /// Hardened path segments below m/44'/501', for example "0'/0'"
        #[clap(long, value_delimiter = '/', required = true)]
        path: Vec<String>,

        /// Require confirmation before returning the key
        #[clap(long)]
        confirm: bool,
    },

    /// Sign a Base58 encoded serialized transaction
    SignTransaction {
        /// Hardened path segments below m/44'/501'
        #[clap(long, value_delimiter = '/', required = true)]
        path: Vec<String>,

        /// Base58 encoded transaction message
        #[clap(long)]
        message: String,
    },

    /// Sign a batch of Base58 encoded serialized transactions
    SignAllTransactions {
        /// Hardened path segments below m/44'/501'
        #[clap(long, value_delimiter = '/', required = true)]
        path: Vec<String>,

        /// Base58 encoded transaction messages (repeat for each transaction)
        #[clap(long = "message", required = true)]
        messages: Vec<String>,
    },

    /// Sign an arbitrary message
    SignMessage {
        /// Hardened path segments below m/44'/501'
        #[clap(long, value_delimiter = '/', required = true)]
        path: Vec<String>,

        /// Base58 encoded message
        #[clap(long, required_unless_present = "text", conflicts_with = "text")]
        message: Option<String>,

        /// UTF-8 message text (encoded to Base58 for the request)
        #[clap(long)]
        text: Option<String>,

        /// Prompt display mode (utf8, hex)
        #[clap(long)]
        display: Option<String>,
    },

    /// Issue a raw JSON request object, `{"method": .., "params": ..}`
    Request {
        /// JSON request object
        request: String,
    },

    /// Verify a Base58 signature
    Verify {
        /// Base58 encoded public key
        #[clap(long)]
        public_key: String,

        /// Base58 encoded message
        #[clap(long)]
        message: String,

        /// Base58 encoded signature
        #[clap(long)]
        signature: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let args = Options::parse();

    // Setup logging
    simplelog::SimpleLogger::init(args.log_level, simplelog::Config::default())?;

    debug!("Executing command: {:?}", args.cmd);

    // Handle local-only commands
    if let Actions::Verify {
        public_key,
        message,
        signature,
    } = &args.cmd
    {
        verify(public_key, message, signature)?;
        info!("signature valid");

        return Ok(());
    }

    // Build request object
    let req = build_request(args.cmd)?;

    // Setup engine
    let mnemonic = match &args.mnemonic {
        Some(m) => m,
        None => return Err(anyhow::anyhow!("--mnemonic or SOLSNAP_MNEMONIC required")),
    };
    let e = host_engine(mnemonic, &args.passphrase, args.approve)?;

    // Execute request
    let r = e.handle(&args.origin, &req).await;
    let failed = r.is_err();

    // Display reply
    println!("{}", serde_json::to_string_pretty(&Reply::from(r))?);

    if failed {
        return Err(anyhow::anyhow!("request failed"));
    }

    Ok(())
}

/// Build the RPC request for a command
fn build_request(cmd: Actions) -> anyhow::Result<RpcRequest> {
    let req = match cmd {
        Actions::GetPublicKey { path, confirm } => RpcRequest::from(&Request::GetPublicKey(
            GetPublicKeyReq {
                derivation_path: path,
                confirm,
            },
        )),
        Actions::SignTransaction { path, message } => RpcRequest::from(
            &Request::SignTransaction(SignTransactionReq {
                derivation_path: path,
                message,
            }),
        ),
        Actions::SignAllTransactions { path, messages } => RpcRequest::from(
            &Request::SignAllTransactions(SignAllTransactionsReq {
                derivation_path: path,
                messages,
            }),
        ),
        Actions::SignMessage {
            path,
            message,
            text,
            display,
        } => {
            let message = match (message, text) {
                (Some(m), _) => m,
                (None, Some(t)) => bs58::encode(t.as_bytes()).into_string(),
                (None, None) => return Err(anyhow::anyhow!("--message or --text required")),
            };

            RpcRequest::from(&Request::SignMessage(SignMessageReq {
                derivation_path: path,
                message,
                display: display.unwrap_or_else(|| DisplayMode::Utf8.to_string()),
            }))
        }
        Actions::Request { request } => serde_json::from_str(&request)?,
        Actions::Verify { .. } => return Err(anyhow::anyhow!("verify issues no request")),
    };

    Ok(req)
}
