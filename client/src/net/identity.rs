//! Identity-provider contract consumed by the sign-in page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The provider owns the OAuth handshake, session issuance, and magic-link
//! delivery. This crate only starts those flows and names the callback route
//! the provider must return to; `/auth/callback` itself lives elsewhere.
//!
//! DESIGN
//! ======
//! Pages receive an `IdentityProvider` as a prop rather than reaching for a
//! process-wide client, so tests substitute a recording fake.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use std::fmt;

use crate::util::email::ValidEmail;

/// Path the provider redirects back to once authentication completes.
pub const CALLBACK_PATH: &str = "/auth/callback";

/// Build the callback URL for a page origin: `<origin>/auth/callback`.
#[must_use]
pub fn callback_url(origin: &str) -> String {
    format!("{origin}{CALLBACK_PATH}")
}

/// Supported federated sign-in providers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OAuthProvider {
    Google,
    GitHub,
}

impl OAuthProvider {
    /// Buttons are rendered in this order.
    pub const ALL: [Self; 2] = [Self::Google, Self::GitHub];

    /// Wire identifier understood by the provider.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::GitHub => "github",
        }
    }

    /// Button label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Google => "Sign in with Google",
            Self::GitHub => "Sign in with GitHub",
        }
    }
}

impl fmt::Display for OAuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Arguments for starting an OAuth sign-in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OAuthSignIn {
    pub provider: OAuthProvider,
    pub redirect_to: String,
}

impl OAuthSignIn {
    #[must_use]
    pub fn new(provider: OAuthProvider, origin: &str) -> Self {
        Self { provider, redirect_to: callback_url(origin) }
    }
}

/// Arguments for requesting a passwordless magic link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MagicLinkRequest {
    pub email: ValidEmail,
    pub redirect_to: String,
}

impl MagicLinkRequest {
    #[must_use]
    pub fn new(email: ValidEmail, origin: &str) -> Self {
        Self { email, redirect_to: callback_url(origin) }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    #[error("sign-in is not configured")]
    NotConfigured,
    #[error("sign-in is not available on server")]
    Unavailable,
    #[error("network error: {0}")]
    Network(String),
    #[error("identity provider error ({status}): {message}")]
    Provider { status: u16, message: String },
    #[error("{0}")]
    Navigation(String),
}

/// External identity provider capabilities used by the sign-in page.
///
/// Futures are not `Send`: the browser runs them on a single-threaded
/// executor via `spawn_local`.
#[async_trait::async_trait(?Send)]
pub trait IdentityProvider {
    /// Start an OAuth sign-in. A successful call normally navigates the
    /// browser away from the page.
    ///
    /// # Errors
    ///
    /// Returns an [`IdentityError`] if the flow could not be started.
    async fn sign_in_with_oauth(&self, request: &OAuthSignIn) -> Result<(), IdentityError>;

    /// Ask the provider to email a one-time sign-in link.
    ///
    /// # Errors
    ///
    /// Returns an [`IdentityError`] if the request fails or is refused.
    async fn sign_in_with_otp(&self, request: &MagicLinkRequest) -> Result<(), IdentityError>;
}
