//! Route guard applying the navigation gate to a protected destination.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route renders through `Guarded`. The gate outcome is a memo
//! over the session signal, so signing out anywhere immediately re-evaluates
//! the visible route and redirects.

use access::{Destination, NavigationRequest, Outcome, SessionStore, decide};
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_navigate;

use crate::components::layout::DashboardLayout;
use crate::pages::screen::ScreenPage;
use crate::util::auth::install_gate_redirect;

/// Neutral placeholder shown until the session has been restored.
#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <h2>"Loading..."</h2>
            <p>"Please wait"</p>
        </div>
    }
}

/// Render `destination` inside the dashboard layout if the session allows it.
#[component]
pub fn Guarded(destination: Destination) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let request = NavigationRequest::to(destination);
    let outcome = Memo::new(move |_| session.with(|store| decide(&request, store)));

    install_gate_redirect(outcome, use_navigate());

    move || match outcome.get() {
        Outcome::Loading => view! { <LoadingScreen/> }.into_any(),
        Outcome::Render(destination) => view! {
            <DashboardLayout active=destination>
                <ScreenPage destination=destination/>
            </DashboardLayout>
        }
        .into_any(),
        Outcome::RedirectToLogin | Outcome::RedirectToUnauthorized => {
            view! { <p class="gate__redirect">"Redirecting..."</p> }.into_any()
        }
    }
}
