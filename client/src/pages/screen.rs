//! Protected screen body: heading, summary, and the signed-in user.
//!
//! The lab datasets themselves (patients, tests, reports) are not part of
//! this crate; each screen renders its title and purpose.

#[cfg(test)]
#[path = "screen_test.rs"]
mod screen_test;

use access::{Destination, Identity, SessionStore};
use leptos::prelude::*;

/// Line naming who is signed in and as what.
pub fn signed_in_as(identity: Option<&Identity>) -> String {
    match identity {
        Some(identity) => format!("Signed in as {} ({})", identity.display_name, identity.role.label()),
        None => String::new(),
    }
}

#[component]
pub fn ScreenPage(destination: Destination) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let who = move || session.with(|store| signed_in_as(store.identity()));

    view! {
        <section class=format!("screen screen--{}", destination.id())>
            <header class="screen__header">
                <h1>{destination.label()}</h1>
                <p class="screen__summary">{destination.summary()}</p>
            </header>
            <Show when=move || destination == Destination::Dashboard>
                <p class="screen__greeting">{who}</p>
            </Show>
        </section>
    }
}
