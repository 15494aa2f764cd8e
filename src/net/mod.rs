//! Networking modules for the restaurants REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs HTTP calls and `types` defines the JSON schema the backend
//! returns.

pub mod api;
pub mod types;
