//! # Connection Library
//!
//! The wallet connection lifecycle, independent of any browser API.
//!
//! This library holds the pieces of the wallet bridge that can be reasoned
//! about (and tested) without a wallet extension or a DOM:
//!
//! - **[`machine`]**: the connection state machine. All state transitions go
//!   through [`machine::ConnectionMachine`]; the frontend only wires adapter
//!   events and button clicks to its methods.
//! - **[`state`]**: the [`state::ConnectionState`] enumeration and the
//!   [`state::WalletSession`] record held while a wallet is connected.
//! - **[`report`]**: interpretation of the callback endpoint's response into a
//!   [`report::ReportOutcome`].
//! - **[`error`]**: the closed [`error::ConnectorError`] taxonomy surfaced to
//!   the user.
//!
//! The frontend crate (`wallet-web`) owns the browser glue: constructing the
//! provider adapter, subscribing to its events, and issuing the HTTP request.

pub mod error;
pub mod machine;
pub mod report;
pub mod state;

pub use error::ConnectorError;
pub use machine::ConnectionMachine;
pub use report::ReportOutcome;
pub use state::{ConnectionState, WalletSession};
