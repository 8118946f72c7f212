//! Data Transfer Objects for the callback endpoint.

pub mod callback;

pub use callback::*;
