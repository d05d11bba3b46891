//! Access-denied page. Always reachable, so gate redirects cannot loop.

use access::Destination;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    let navigate = use_navigate();

    let on_dashboard = move |_| navigate(&Destination::Dashboard.path(), NavigateOptions::default());
    let on_back = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
                let _ = history.back();
            }
        }
    };

    view! {
        <div class="status-page">
            <div class="status-page__card">
                <h1>"Access Denied"</h1>
                <p>
                    "You don't have permission to access this page. "
                    "Please contact your administrator if you believe this is an error."
                </p>
                <div class="status-page__actions">
                    <button class="btn" on:click=on_dashboard>
                        "Go to Dashboard"
                    </button>
                    <button class="btn btn--outline" on:click=on_back>
                        "Go Back"
                    </button>
                </div>
            </div>
        </div>
    }
}
