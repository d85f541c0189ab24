//! Login page: exchange a username for a session token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only writer of the session token. After a successful sign-in the page
//! always goes to `home`; the route a visitor originally asked for is not
//! remembered.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::error::AppError;
use crate::net::api::{ApiClient, use_api, validate_username};
use crate::router::routes::HOME_PATH;
use crate::state::auth::AuthContext;

/// Log in as `username` and persist the returned token.
///
/// # Errors
///
/// Any login failure, or the store refusing the token.
pub async fn sign_in(api: &ApiClient, auth: &AuthContext, username: &str) -> Result<(), AppError> {
    let token = api.login(username).await?;
    auth.sign_in(&token)?;
    Ok(())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = use_api();
    let auth = expect_context::<AuthContext>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let signed_in = RwSignal::new(false);

    Effect::new(move || {
        if signed_in.get() {
            navigate(HOME_PATH, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let name = match validate_username(&username.get()) {
            Ok(name) => name,
            Err(e) => {
                info.set(e.to_string());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        let api = api.clone();
        let auth = auth.clone();
        leptos::task::spawn_local(async move {
            match sign_in(&api, &auth, &name).await {
                Ok(()) => signed_in.set(true),
                Err(e) => {
                    log::warn!("sign-in for {name} failed: {e}");
                    info.set(format!("Sign-in failed: {e}"));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"WASAPhoto"</h1>
                <p class="login-card__subtitle">"Sign in with your username"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="username"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
