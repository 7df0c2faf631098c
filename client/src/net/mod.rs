//! Networking modules for the identity provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! `identity` defines the provider contract, `api` implements it over HTTP,
//! and `config` carries the provider's endpoint from server to browser.

pub mod api;
pub mod config;
pub mod identity;
