//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration; async flows that talk to
//! external services live beside the page that drives them.

pub mod auth;
pub(crate) mod auth_flow;
