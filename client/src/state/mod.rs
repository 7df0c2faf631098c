//! Reactive page state.

pub mod auth;
