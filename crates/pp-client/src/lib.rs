//! pp-client library
//!
//! HTTP client for the remote profile service.

pub(crate) mod client;

#[cfg(test)]
mod tests;

pub use client::{Client, ClientError, ClientResult};
