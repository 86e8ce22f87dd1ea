//! NEAR JSON-RPC market source.
//!
//! Reads markets through a `call_function` view query, which needs no
//! signing key.

pub mod client;
pub mod dto;
