//! # Callback Server Library
//!
//! The host-side half of the wallet bridge: a small HTTP service that serves
//! the wallet connection page and receives the connected address on
//! `POST /callback`, forwarding it to the embedding application through a
//! bounded channel.

pub mod config;
pub mod error;
pub mod handlers;
pub mod server;

pub use config::Config;
pub use error::AppError;
pub use server::{start_server, AppState};
