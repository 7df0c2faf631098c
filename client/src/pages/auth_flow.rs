//! Async sign-in flows driven by the auth page.
//!
//! Each flow flips the page state before dispatching to the identity provider
//! and flips it back once the call settles, so the UI never shows idle while
//! a call is outstanding.

#[cfg(test)]
#[path = "auth_flow_test.rs"]
mod auth_flow_test;

use crate::net::identity::{IdentityProvider, MagicLinkRequest, OAuthProvider, OAuthSignIn};
use crate::state::auth::SignInStore;

/// Start an OAuth sign-in with `provider`, returning to `<origin>/auth/callback`.
///
/// No-op when another sign-in call is already outstanding.
pub async fn trigger_social_auth<P, S>(identity: &P, store: &S, provider: OAuthProvider, origin: &str)
where
    P: IdentityProvider + ?Sized,
    S: SignInStore,
{
    let mut started = false;
    store.modify(|state| started = state.begin_oauth());
    if !started {
        log::debug!("ignoring {provider} sign-in while another is in flight");
        return;
    }

    let request = OAuthSignIn::new(provider, origin);
    log::info!("starting {provider} sign-in");
    let result = identity.sign_in_with_oauth(&request).await;
    if let Err(e) = &result {
        log::warn!("{provider} sign-in failed: {e}");
    }
    store.modify(|state| state.finish_oauth(result));
}

/// Validate the email field and, when accepted, request a magic link.
///
/// Invalid input only sets the inline field error; no request is made.
pub async fn submit_magic_link<P, S>(identity: &P, store: &S, origin: &str)
where
    P: IdentityProvider + ?Sized,
    S: SignInStore,
{
    let mut accepted = None;
    store.modify(|state| accepted = state.submit_email());
    let Some(email) = accepted else {
        if let Some(err) = store.snapshot().email_error {
            log::debug!("magic link not requested: {err}");
        }
        return;
    };

    let request = MagicLinkRequest::new(email, origin);
    log::info!("requesting magic link");
    let result = identity.sign_in_with_otp(&request).await;
    if let Err(e) = &result {
        log::warn!("magic link request failed: {e}");
    }
    store.modify(|state| state.finish_magic_link(result));
}
