use super::*;
use crate::util::email::validate_email;

#[test]
fn callback_url_appends_callback_path() {
    assert_eq!(callback_url("https://app.example.com"), "https://app.example.com/auth/callback");
    assert_eq!(callback_url("http://localhost:3000"), "http://localhost:3000/auth/callback");
}

#[test]
fn oauth_sign_in_uses_callback_for_every_provider() {
    for origin in ["https://app.example.com", "http://127.0.0.1:8080", ""] {
        for provider in OAuthProvider::ALL {
            let req = OAuthSignIn::new(provider, origin);
            assert_eq!(req.provider, provider);
            assert_eq!(req.redirect_to, format!("{origin}/auth/callback"));
        }
    }
}

#[test]
fn github_request_carries_provider_and_callback() {
    let req = OAuthSignIn::new(OAuthProvider::GitHub, "https://app.example.com");
    assert_eq!(
        req,
        OAuthSignIn {
            provider: OAuthProvider::GitHub,
            redirect_to: "https://app.example.com/auth/callback".to_owned(),
        }
    );
    assert_eq!(req.provider.as_str(), "github");
}

#[test]
fn provider_labels_name_their_own_provider() {
    assert_eq!(OAuthProvider::Google.label(), "Sign in with Google");
    assert_eq!(OAuthProvider::GitHub.label(), "Sign in with GitHub");
}

#[test]
fn provider_display_is_wire_identifier() {
    assert_eq!(OAuthProvider::Google.to_string(), "google");
    assert_eq!(OAuthProvider::GitHub.to_string(), "github");
}

#[test]
fn magic_link_request_targets_callback() {
    let email = validate_email("user@example.com").unwrap();
    let req = MagicLinkRequest::new(email, "https://app.example.com");
    assert_eq!(req.email.as_str(), "user@example.com");
    assert_eq!(req.redirect_to, "https://app.example.com/auth/callback");
}

#[test]
fn identity_error_messages() {
    assert_eq!(IdentityError::NotConfigured.to_string(), "sign-in is not configured");
    assert_eq!(
        IdentityError::Provider { status: 429, message: "rate limited".to_owned() }.to_string(),
        "identity provider error (429): rate limited"
    );
}
