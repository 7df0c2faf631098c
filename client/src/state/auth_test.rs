use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_idle() {
    let state = SignInState::default();
    assert!(!state.authenticating);
    assert!(!state.sending_magic_link);
    assert!(!state.controls_disabled());
    assert_eq!(state.email, "");
    assert_eq!(state.email_error, None);
    assert_eq!(state.notice, None);
}

// =============================================================
// OAuth transitions
// =============================================================

#[test]
fn begin_oauth_sets_flag_and_clears_notice() {
    let mut state = SignInState { notice: Some(Notice::error("old")), ..SignInState::default() };
    assert!(state.begin_oauth());
    assert!(state.authenticating);
    assert!(state.controls_disabled());
    assert_eq!(state.notice, None);
}

#[test]
fn begin_oauth_refuses_while_authenticating() {
    let mut state = SignInState::default();
    assert!(state.begin_oauth());
    assert!(!state.begin_oauth());
    assert!(state.authenticating);
}

#[test]
fn begin_oauth_refuses_while_sending_magic_link() {
    let mut state = SignInState { sending_magic_link: true, ..SignInState::default() };
    assert!(!state.begin_oauth());
    assert!(!state.authenticating);
}

#[test]
fn finish_oauth_success_resets_flag_without_notice() {
    let mut state = SignInState::default();
    state.begin_oauth();
    state.finish_oauth(Ok(()));
    assert!(!state.authenticating);
    assert_eq!(state.notice, None);
}

#[test]
fn finish_oauth_failure_resets_flag_and_surfaces_error() {
    let mut state = SignInState::default();
    state.begin_oauth();
    state.finish_oauth(Err(IdentityError::Network("offline".to_owned())));
    assert!(!state.authenticating);
    assert_eq!(state.notice, Some(Notice::error("Sign-in failed: network error: offline")));
}

// =============================================================
// Email field
// =============================================================

#[test]
fn set_email_does_not_validate_before_first_submit() {
    let mut state = SignInState::default();
    state.set_email("not-an-email".to_owned());
    assert_eq!(state.email, "not-an-email");
    assert_eq!(state.email_error, None);
}

#[test]
fn submit_email_rejects_single_char_with_one_error() {
    let mut state = SignInState::default();
    state.set_email("a".to_owned());
    assert_eq!(state.submit_email(), None);
    assert_eq!(state.email_error.as_deref(), Some("Invalid email"));
    assert!(!state.sending_magic_link);
}

#[test]
fn set_email_revalidates_after_submit() {
    let mut state = SignInState::default();
    state.set_email("a".to_owned());
    state.submit_email();
    state.set_email("a@example.com".to_owned());
    assert_eq!(state.email_error, None);
    state.set_email("a@".to_owned());
    assert_eq!(state.email_error.as_deref(), Some("Invalid email"));
}

#[test]
fn submit_email_accepts_valid_address() {
    let mut state = SignInState { email: "name@work-email.com".to_owned(), ..SignInState::default() };
    let email = state.submit_email().unwrap();
    assert_eq!(email.as_str(), "name@work-email.com");
    assert_eq!(state.email_error, None);
    assert!(state.sending_magic_link);
    assert!(state.controls_disabled());
}

#[test]
fn submit_email_blocked_while_authenticating() {
    let mut state = SignInState { email: "name@work-email.com".to_owned(), ..SignInState::default() };
    state.begin_oauth();
    assert_eq!(state.submit_email(), None);
    assert!(!state.sending_magic_link);
    assert!(!state.submitted);
}

#[test]
fn finish_magic_link_reports_outcome() {
    let mut state = SignInState { sending_magic_link: true, ..SignInState::default() };
    state.finish_magic_link(Ok(()));
    assert!(!state.sending_magic_link);
    assert_eq!(state.notice, Some(Notice::info(MAGIC_LINK_SENT)));

    state.sending_magic_link = true;
    state.finish_magic_link(Err(IdentityError::NotConfigured));
    assert!(!state.sending_magic_link);
    assert_eq!(state.notice, Some(Notice::error("Could not send magic link: sign-in is not configured")));
}
