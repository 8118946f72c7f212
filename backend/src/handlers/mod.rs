//! HTTP handlers for the callback service.

pub mod callback;
pub mod pages;
