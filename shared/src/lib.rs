//! # Shared Data Transfer Objects Library
//!
//! The wire contract between the wallet page and the callback server.
//! All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for the callback endpoint
//!   - **[`dto::callback`]**: address relay request/response envelopes and the
//!     host-queue update record
//! - **[`utils`]**: shared helpers
//!   - **[`utils::truncate_address`]**: shorten an address for display
//!
//! ## Wire Format
//!
//! The callback contract is fixed and camelCase on the wire:
//!
//! ```json
//! { "walletAddress": "8W6Qg...JKAL" }
//! ```
//!
//! answered by
//!
//! ```json
//! { "status": "success", "message": "Address received" }
//! ```
//!
//! The `message` field is optional and omitted when `None`.

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
