//! REST client for a GoTrue-compatible identity provider.
//!
//! Client-side (hydrate): OAuth navigates the page to the provider's
//! `authorize` endpoint and magic links are requested over `gloo-net`.
//! Server-side (SSR): stubs returning [`IdentityError::Unavailable`] since
//! these calls are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is returned as an [`IdentityError`] so the page can reset its
//! busy state and show a notice instead of panicking during hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use serde::Deserialize;
use serde::Serialize;
use url::Url;

use super::config::IdentityConfig;
use super::identity::{IdentityError, IdentityProvider, MagicLinkRequest, OAuthSignIn};

const AUTHORIZE_PATH: &str = "/auth/v1/authorize";
const OTP_PATH: &str = "/auth/v1/otp";

/// Identity provider reached over HTTP.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpIdentityClient {
    config: IdentityConfig,
}

impl HttpIdentityClient {
    #[must_use]
    pub fn new(config: IdentityConfig) -> Self {
        Self { config }
    }

    fn configured(&self) -> Result<&IdentityConfig, IdentityError> {
        if self.config.is_configured() {
            Ok(&self.config)
        } else {
            Err(IdentityError::NotConfigured)
        }
    }
}

#[derive(Debug, Serialize)]
struct OtpPayload<'a> {
    email: &'a str,
    create_user: bool,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    msg: Option<String>,
    error_description: Option<String>,
    message: Option<String>,
}

fn endpoint(base: &str, path: &str) -> Result<Url, IdentityError> {
    Url::parse(&format!("{base}{path}")).map_err(|e| IdentityError::Navigation(format!("invalid identity url: {e}")))
}

/// Provider URL that starts the OAuth handshake for `request`.
fn authorize_url(base: &str, request: &OAuthSignIn) -> Result<String, IdentityError> {
    let mut url = endpoint(base, AUTHORIZE_PATH)?;
    url.query_pairs_mut()
        .append_pair("provider", request.provider.as_str())
        .append_pair("redirect_to", &request.redirect_to);
    Ok(url.into())
}

/// Provider URL accepting magic-link requests.
fn otp_url(base: &str, redirect_to: &str) -> Result<String, IdentityError> {
    let mut url = endpoint(base, OTP_PATH)?;
    url.query_pairs_mut().append_pair("redirect_to", redirect_to);
    Ok(url.into())
}

/// Pull a human-readable message out of a provider error body.
#[cfg(any(test, feature = "hydrate"))]
fn provider_error(status: u16, body: &str) -> IdentityError {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    let message = parsed
        .msg
        .or(parsed.error_description)
        .or(parsed.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("request failed: {status}"));
    IdentityError::Provider { status, message }
}

#[async_trait::async_trait(?Send)]
impl IdentityProvider for HttpIdentityClient {
    async fn sign_in_with_oauth(&self, request: &OAuthSignIn) -> Result<(), IdentityError> {
        let config = self.configured()?;
        let url = authorize_url(&config.url, request)?;
        #[cfg(feature = "hydrate")]
        {
            crate::util::location::assign(&url).map_err(IdentityError::Navigation)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
            Err(IdentityError::Unavailable)
        }
    }

    async fn sign_in_with_otp(&self, request: &MagicLinkRequest) -> Result<(), IdentityError> {
        let config = self.configured()?;
        let url = otp_url(&config.url, &request.redirect_to)?;
        let payload = OtpPayload { email: request.email.as_str(), create_user: true };
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&url)
                .header("apikey", &config.anon_key)
                .header("Authorization", &format!("Bearer {}", config.anon_key))
                .json(&payload)
                .map_err(|e| IdentityError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| IdentityError::Network(e.to_string()))?;
            if !resp.ok() {
                let status = resp.status();
                let body = resp.text().await.unwrap_or_default();
                return Err(provider_error(status, &body));
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, payload);
            Err(IdentityError::Unavailable)
        }
    }
}
