//! Sign-in page supporting Google/GitHub OAuth and email magic links.
//!
//! ARCHITECTURE
//! ============
//! `AuthPage` owns the page state and the injected identity provider, then
//! hands a single derived `disabled` signal to both interactive zones. The
//! zones are wrapped in one `<fieldset>` so a control that forgets to read the
//! signal is still disabled by its container.
//!
//! Callers may pass in an existing state signal; otherwise the page starts
//! from `SignInState::default()`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use super::auth_flow::{submit_magic_link, trigger_social_auth};
use crate::net::identity::{IdentityProvider, OAuthProvider};
use crate::state::auth::{NoticeKind, SignInState};
use crate::util::location;

fn notice_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Info => "auth-notice auth-notice--info",
        NoticeKind::Error => "auth-notice auth-notice--error",
    }
}

fn provider_icon_class(provider: OAuthProvider) -> String {
    format!("auth-provider__icon auth-provider__icon--{}", provider.as_str())
}

fn email_input_class(has_error: bool) -> &'static str {
    if has_error { "auth-input auth-input--invalid" } else { "auth-input" }
}

#[component]
pub fn AuthPage<P>(identity: P, #[prop(optional)] state: Option<RwSignal<SignInState>>) -> impl IntoView
where
    P: IdentityProvider + Clone + Send + Sync + 'static,
{
    let state = state.unwrap_or_else(|| RwSignal::new(SignInState::default()));
    let disabled = Signal::derive(move || state.get().controls_disabled());
    let identity = StoredValue::new(identity);

    let on_social = Callback::new(move |provider: OAuthProvider| {
        let identity = identity.get_value();
        let origin = location::current_origin().unwrap_or_default();
        leptos::task::spawn_local(async move {
            trigger_social_auth(&identity, &state, provider, &origin).await;
        });
    });

    let on_email = Callback::new(move |()| {
        let identity = identity.get_value();
        let origin = location::current_origin().unwrap_or_default();
        leptos::task::spawn_local(async move {
            submit_magic_link(&identity, &state, &origin).await;
        });
    });

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-brand">
                    <span class="auth-brand__mark" aria-hidden="true"></span>
                    <h2 class="auth-brand__name">"Slaczz"</h2>
                </div>
                <h2 class="auth-card__title">"Sign in to your Slaczz"</h2>
                <p class="auth-card__subtitle">
                    "We suggest using the email address that you use at work"
                </p>
                {move || {
                    state
                        .get()
                        .notice
                        .map(|notice| {
                            view! {
                                <p class=notice_class(notice.kind) role="status">
                                    {notice.message}
                                </p>
                            }
                        })
                }}
                <fieldset class="auth-controls" disabled=move || disabled.get()>
                    <SocialAuthButtons disabled=disabled on_select=on_social/>
                    <div class="auth-divider">
                        <span class="auth-divider__line"></span>
                        <p>"OR"</p>
                        <span class="auth-divider__line"></span>
                    </div>
                    <EmailForm state=state disabled=disabled on_submit=on_email/>
                </fieldset>
            </div>
        </div>
    }
}

/// One button per OAuth provider.
#[component]
fn SocialAuthButtons(disabled: Signal<bool>, on_select: Callback<OAuthProvider>) -> impl IntoView {
    view! {
        <div class="auth-providers">
            {OAuthProvider::ALL
                .into_iter()
                .map(|provider| {
                    view! {
                        <button
                            type="button"
                            class="auth-provider"
                            data-provider=provider.as_str()
                            disabled=move || disabled.get()
                            on:click=move |_| {
                                if !disabled.get_untracked() {
                                    on_select.run(provider);
                                }
                            }
                        >
                            <span class=provider_icon_class(provider) aria-hidden="true"></span>
                            <p>{provider.label()}</p>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Single-field magic-link form with inline validation.
#[component]
fn EmailForm(state: RwSignal<SignInState>, disabled: Signal<bool>, on_submit: Callback<()>) -> impl IntoView {
    let email_error = Memo::new(move |_| state.get().email_error);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if disabled.get_untracked() {
            return;
        }
        on_submit.run(());
    };

    view! {
        <form class="auth-form" on:submit=submit novalidate>
            <fieldset class="auth-form__fields" disabled=move || disabled.get()>
                <input
                    class=move || email_input_class(email_error.get().is_some())
                    type="email"
                    name="email"
                    placeholder="name@work-email.com"
                    aria-invalid=move || email_error.get().is_some().to_string()
                    prop:value=move || state.get().email
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.set_email(value));
                    }
                />
                <Show when=move || email_error.get().is_some()>
                    <p class="auth-field-error">{move || email_error.get().unwrap_or_default()}</p>
                </Show>
                <button class="auth-button auth-button--email" type="submit">
                    <p>"Sign in with Email"</p>
                </button>
                <div class="auth-hint">
                    <span class="auth-hint__icon" aria-hidden="true"></span>
                    <p>"We will email you a magic link for a password-free sign-in"</p>
                </div>
            </fieldset>
        </form>
    }
}
