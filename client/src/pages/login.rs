//! Login page with email + password sign-in against the demo directory.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use access::{Destination, Directory, SessionStore};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::notice::NoticeState;
use crate::util::auth::sign_in;

/// Require both fields. Values are passed through untouched; matching is exact.
///
/// # Errors
///
/// Returns the message to show under the form when either field is empty.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Hint listing the demo account emails.
pub fn demo_logins_hint(directory: &Directory) -> String {
    let emails: Vec<&str> = directory.accounts().iter().map(|a| a.identity.email.as_str()).collect();
    format!("Demo logins: {}", emails.join(", "))
}

/// Hint listing the demo account passwords.
pub fn demo_secrets_hint(directory: &Directory) -> String {
    let secrets: Vec<&str> = directory.accounts().iter().map(|a| a.secret.as_str()).collect();
    format!("Demo passwords: {}", secrets.join(", "))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let directory = Directory::seeded();
    let logins_hint = demo_logins_hint(&directory);
    let secrets_hint = demo_secrets_hint(&directory);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (email_value, secret_value) =
            match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
                Ok(values) => values,
                Err(msg) => {
                    info.set(msg.to_owned());
                    return;
                }
            };
        info.set(String::new());
        busy.set(true);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = sign_in(session, notices, email_value, secret_value).await;
            busy.set(false);
            if result.is_ok() {
                navigate(&Destination::Dashboard.path(), NavigateOptions::default());
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Lab Management System"</h1>
                <p class="login-card__subtitle">"Enter your credentials to access the dashboard"</p>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label" for="email">"Email"</label>
                    <input
                        id="email"
                        class="login-input"
                        type="email"
                        placeholder="your.email@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <p class="login-hint">{logins_hint}</p>
                    <label class="login-label" for="password">"Password"</label>
                    <input
                        id="password"
                        class="login-input"
                        type="password"
                        placeholder="••••••••"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <p class="login-hint">{secrets_hint}</p>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing In..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
