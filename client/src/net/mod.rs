//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs bearer-authenticated HTTP calls per user segment, `error`
//! interprets HTTP failures, and `types` defines the shared wire schema.

pub mod api;
pub mod error;
pub mod types;
