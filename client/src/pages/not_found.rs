//! Fallback page for paths outside the known destinations.

use access::Destination;
use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let dest = Destination::NotFound;

    view! {
        <div class="status-page">
            <div class="status-page__card">
                <h1>"404"</h1>
                <h2>{dest.label()}</h2>
                <p>{dest.summary()}</p>
                <a class="btn" href=Destination::Dashboard.path()>
                    "Return to Dashboard"
                </a>
            </div>
        </div>
    }
}
