//! Typed async client for the Beosin KYT / compliance API.
//!
//! # Architecture Overview
//!
//! ```text
//!     caller
//!       │  typed request (DepositRequest, AddressRiskRequest, ...)
//!       ▼
//!   ┌─────────┐    ┌──────────────┐    ┌─────────────┐
//!   │  api/*  │───▶│   pipeline   │───▶│  transport  │───▶ api.beosin.com
//!   │ methods │    │ url, headers │    │ (reqwest)   │
//!   └─────────┘    │ envelope     │◀───│             │
//!       ▲          └──────┬───────┘    └─────────────┘
//!       │                 │
//!       └── ApiResponse<T> | Error { Transport | Decode | Api }
//! ```
//!
//! # Example
//!
//! ```no_run
//! use beosin::{chain, Client, DepositRequest};
//!
//! # async fn run() -> beosin::Result<()> {
//! let client = Client::builder("app-id", "app-secret").build()?;
//!
//! let req = DepositRequest {
//!     chain_id: chain::ETH.to_string(),
//!     hash: "0x919aeb1d0ed579dbbe15a0a695b221c746c2b45d68553da0c203747c1255f739".to_string(),
//!     token: None,
//! };
//!
//! match client.deposit_transaction_assessment(&req).await {
//!     Ok(resp) => println!("{:?}", resp.data),
//!     Err(e) if e.is_task_executing() => println!("still computing, poll later"),
//!     Err(e) => return Err(e),
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod chain;
pub mod client;
pub mod config;
pub mod error;
pub mod observability;
pub mod types;

pub use client::{Client, ClientBuilder, Transport, TransportError, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::{ApiError, ApiErrorKind, Error, Result};
pub use types::*;
