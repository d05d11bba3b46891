//! Session actions and gate redirects shared by pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards apply identical redirect behavior, and every sign-in or
//! sign-out reports its outcome through the notice context. Keeping both here
//! means the session store has exactly one set of UI-side callers.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use access::{AccessError, Directory, Identity, Outcome, SessionStore};
use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::notice::{Notice, NoticeState};
use crate::util::identity_cache::LocalStorageCache;

/// Gate redirects replace the blocked entry in history so "back" does not loop.
pub fn redirect_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Navigate away whenever the gate outcome turns into a redirect.
pub fn install_gate_redirect<F>(outcome: Memo<Outcome>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(path) = outcome.get().redirect_path() {
            navigate(&path, redirect_options());
        }
    });
}

/// Show `notice` and, in the browser, hide it again after the notice TTL.
pub fn show_notice(notices: RwSignal<NoticeState>, notice: Notice) {
    let seq = notices.try_update(|state| state.push(notice)).unwrap_or_default();
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(crate::state::notice::NOTICE_TTL_MS))
            .await;
        notices.update(|state| state.expire(seq));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = seq;
}

/// Check credentials against the seeded directory and start a session.
///
/// Waits out the simulated latency in the browser. A logout that lands while
/// the check is pending wins: the attempt resolves to
/// [`AccessError::Superseded`] and no notice is shown for it.
///
/// # Errors
///
/// Returns [`AccessError::InvalidCredentials`] for unknown credentials.
pub async fn sign_in(
    session: RwSignal<SessionStore>,
    notices: RwSignal<NoticeState>,
    email: String,
    secret: String,
) -> Result<Identity, AccessError> {
    let attempt = session.with_untracked(SessionStore::begin_attempt);
    #[cfg(feature = "hydrate")]
    gloo_timers::future::sleep(access::SIMULATED_LATENCY).await;

    let verdict = Directory::seeded().verify(&email, &secret);
    let result = session
        .try_update(|store| store.complete(attempt, verdict, &LocalStorageCache))
        .unwrap_or(Err(AccessError::Superseded));

    match &result {
        Ok(identity) => show_notice(notices, Notice::signed_in(identity)),
        Err(AccessError::Superseded) => {}
        Err(e) => show_notice(notices, Notice::sign_in_failed(e)),
    }
    result
}

/// End the session and announce it. The active route guard redirects to login.
pub fn sign_out(session: RwSignal<SessionStore>, notices: RwSignal<NoticeState>) {
    session.update(|store| store.end_session(&LocalStorageCache));
    show_notice(notices, Notice::signed_out());
}
