//! Networking modules for the remote player service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the REST endpoints, `types` defines the wire schema, and
//! `error` is the failure taxonomy shared by both.

pub mod api;
pub mod error;
pub mod types;
