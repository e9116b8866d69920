//! Networking modules for the PEA tracker REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `gateway` owns the credential/401 contract, `cache` deduplicates polled
//! GETs, `api` maps each endpoint to a typed call, and `types` defines the
//! wire schema.

pub mod api;
pub mod cache;
pub mod gateway;
pub mod types;
