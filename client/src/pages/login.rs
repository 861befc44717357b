//! Login page exchanging email + password for a session token.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::error::ApiError;
use crate::state::session::SessionState;
use crate::util::auth::{LIST_PATH, sign_in};

pub const INVALID_CREDENTIALS: &str = "Invalid login credentials";
pub const LOGIN_FAILED: &str = "An error occurred while logging in";
const MISSING_FIELDS: &str = "Enter both email and password.";

fn validate_credentials(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.trim().is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Apply a login response: sign in and navigate on success.
///
/// Returns the message to show when the login did not go through.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn complete_login<F>(
    session: RwSignal<SessionState>,
    result: Result<Option<String>, ApiError>,
    navigate: F,
) -> Option<&'static str>
where
    F: Fn(&str, NavigateOptions),
{
    match result {
        Ok(Some(token)) => {
            sign_in(session, &token);
            navigate(LIST_PATH, NavigateOptions::default());
            None
        }
        Ok(None) => Some(INVALID_CREDENTIALS),
        Err(e) => {
            log::error!("login failed: {e}");
            Some(LOGIN_FAILED)
        }
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_credentials(&email.get(), &password.get()) {
            Ok(pair) => pair,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::login(&email_value, &password_value).await;
                error.set(complete_login(session, result, navigate));
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value, session, &navigate);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h2>"Sign In"</h2>
                <form class="login-form" on:submit=on_submit>
                    <label class="field__label" for="email">"Email"</label>
                    <input
                        id="email"
                        class="field__input"
                        type="email"
                        placeholder="Enter your email"
                        required=true
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label class="field__label" for="password">"Password"</label>
                    <input
                        id="password"
                        class="field__input"
                        type="password"
                        placeholder="Enter your password"
                        required=true
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Login" }}
                    </button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
            </div>
        </div>
    }
}
