//! Sign-in page state for one page visit.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owned by `pages::auth::AuthPage` as a single `RwSignal<SignInState>`. Every
//! interactive control derives its enabled state from
//! [`SignInState::controls_disabled`], so no control can be left enabled while
//! a sign-in call is outstanding.
//!
//! DESIGN
//! ======
//! Transitions are plain methods so they can be exercised without a reactive
//! runtime; async flows reach the state through [`SignInStore`].

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::identity::IdentityError;
use crate::util::email::{ValidEmail, validate_email};

/// Message shown after a magic link is accepted by the provider.
pub const MAGIC_LINK_SENT: &str = "Check your email for a magic link to sign in.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Non-blocking banner shown above the sign-in controls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Info, message: message.into() }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, message: message.into() }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignInState {
    /// True only while an OAuth call is outstanding.
    pub authenticating: bool,
    /// True only while a magic-link request is outstanding.
    pub sending_magic_link: bool,
    /// Email field value, updated on every keystroke.
    pub email: String,
    /// Inline message for the email field; at most one.
    pub email_error: Option<String>,
    /// Set on the first submit attempt; later edits re-validate live.
    pub submitted: bool,
    pub notice: Option<Notice>,
}

impl SignInState {
    /// Whether every interactive control must be disabled.
    #[must_use]
    pub fn controls_disabled(&self) -> bool {
        self.authenticating || self.sending_magic_link
    }

    /// Enter the authenticating state. Returns `false` (and changes nothing)
    /// when another sign-in call is already outstanding.
    pub fn begin_oauth(&mut self) -> bool {
        if self.controls_disabled() {
            return false;
        }
        self.authenticating = true;
        self.notice = None;
        true
    }

    /// Leave the authenticating state whatever the outcome.
    pub fn finish_oauth(&mut self, result: Result<(), IdentityError>) {
        self.authenticating = false;
        if let Err(e) = result {
            self.notice = Some(Notice::error(format!("Sign-in failed: {e}")));
        }
    }

    /// Record a keystroke in the email field.
    pub fn set_email(&mut self, value: String) {
        self.email = value;
        if self.submitted {
            self.email_error = validate_email(&self.email).err().map(|e| e.to_string());
        }
    }

    /// Validate the email field for submission.
    ///
    /// Returns the accepted address and enters the sending state, or `None`
    /// when validation fails or controls are disabled.
    pub fn submit_email(&mut self) -> Option<ValidEmail> {
        if self.controls_disabled() {
            return None;
        }
        self.submitted = true;
        match validate_email(&self.email) {
            Ok(email) => {
                self.email_error = None;
                self.notice = None;
                self.sending_magic_link = true;
                Some(email)
            }
            Err(e) => {
                self.email_error = Some(e.to_string());
                None
            }
        }
    }

    /// Leave the sending state and report the outcome.
    pub fn finish_magic_link(&mut self, result: Result<(), IdentityError>) {
        self.sending_magic_link = false;
        self.notice = Some(match result {
            Ok(()) => Notice::info(MAGIC_LINK_SENT),
            Err(e) => Notice::error(format!("Could not send magic link: {e}")),
        });
    }
}

/// Shared handle to a [`SignInState`] used by the async sign-in flows.
pub trait SignInStore {
    /// Current state without subscribing to changes.
    fn snapshot(&self) -> SignInState;

    /// Apply a mutation and notify subscribers.
    fn modify(&self, f: impl FnOnce(&mut SignInState));
}

impl SignInStore for RwSignal<SignInState> {
    fn snapshot(&self) -> SignInState {
        self.get_untracked()
    }

    fn modify(&self, f: impl FnOnce(&mut SignInState)) {
        self.update(f);
    }
}
